//! Business operations over persons.
//!
//! Validation runs before any write; update and delete probe for the target
//! row first so a missing id never reaches a write statement.

use crate::ServiceResult;

use mereb_core::{Person, PersonCreate, validate_person_create};
use mereb_db::PersonRepository;

use std::sync::Arc;

use async_trait::async_trait;

#[async_trait]
pub trait PersonService: Send + Sync {
    /// Validate and store a new person; returns it with its assigned id.
    async fn add(&self, person_create: PersonCreate) -> ServiceResult<Person>;

    async fn get_all(&self) -> Vec<Person>;

    async fn get_by_id(&self, id: &str) -> ServiceResult<Person>;

    async fn update_by_id(&self, person_create: PersonCreate, id: &str) -> ServiceResult<()>;

    async fn delete_by_id(&self, id: &str) -> ServiceResult<()>;
}

pub struct ValidatingPersonService<R: PersonRepository> {
    repository: Arc<R>,
}

impl<R: PersonRepository> ValidatingPersonService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: PersonRepository + 'static> PersonService for ValidatingPersonService<R> {
    async fn add(&self, person_create: PersonCreate) -> ServiceResult<Person> {
        validate_person_create(&person_create)?;

        let mut person = Person::from(person_create);
        self.repository.add(&mut person).await?;

        Ok(person)
    }

    async fn get_all(&self) -> Vec<Person> {
        self.repository.get_all().await
    }

    async fn get_by_id(&self, id: &str) -> ServiceResult<Person> {
        Ok(self.repository.get_by_id(id).await?)
    }

    async fn update_by_id(&self, person_create: PersonCreate, id: &str) -> ServiceResult<()> {
        self.repository.check_existence(id).await?;
        validate_person_create(&person_create)?;

        let person = Person::from(person_create);
        self.repository.update_by_id(&person, id).await?;

        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> ServiceResult<()> {
        self.repository.check_existence(id).await?;
        self.repository.delete_by_id(id).await?;

        Ok(())
    }
}
