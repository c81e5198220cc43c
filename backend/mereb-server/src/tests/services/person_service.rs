use crate::{PersonService, ServiceError, ValidatingPersonService};

use mereb_core::{Person, PersonCreate};
use mereb_db::{DbError, PersonRepository, Result as DbErrorResult};

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use googletest::prelude::*;

/// In-memory repository recording which write operations were attempted.
#[derive(Default)]
struct FakePersonRepository {
    persons: Mutex<Vec<Person>>,
    calls: Mutex<Vec<&'static str>>,
    fail_writes: bool,
}

impl FakePersonRepository {
    fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    fn with_person(id: &str) -> Self {
        let repo = Self::default();
        repo.persons.lock().unwrap().push(Person::new(
            id.to_string(),
            "Ana".to_string(),
            30,
            vec!["reading".to_string()],
        ));
        repo
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }

    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PersonRepository for FakePersonRepository {
    async fn get_all(&self) -> Vec<Person> {
        self.persons.lock().unwrap().clone()
    }

    async fn get_by_id(&self, id: &str) -> DbErrorResult<Person> {
        self.persons
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| DbError::not_found(format!("person not found with id: {}", id)))
    }

    async fn add(&self, person: &mut Person) -> DbErrorResult<()> {
        self.record("add");
        if self.fail_writes {
            return Err(DbError::persistence(
                "could not add the person, please check the input data",
            ));
        }
        person.id = format!("fake-{}", self.persons.lock().unwrap().len() + 1);
        self.persons.lock().unwrap().push(person.clone());
        Ok(())
    }

    async fn check_existence(&self, id: &str) -> DbErrorResult<()> {
        self.record("check_existence");
        if self.persons.lock().unwrap().iter().any(|p| p.id == id) {
            Ok(())
        } else {
            Err(DbError::not_found(format!(
                "person with id {} does not exist",
                id
            )))
        }
    }

    async fn update_by_id(&self, person: &Person, id: &str) -> DbErrorResult<()> {
        self.record("update_by_id");
        let mut persons = self.persons.lock().unwrap();
        let stored = persons
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DbError::not_found(format!("no person found with id {}", id)))?;
        stored.name = person.name.clone();
        stored.age = person.age;
        stored.hobbies = person.hobbies.clone();
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> DbErrorResult<()> {
        self.record("delete_by_id");
        let mut persons = self.persons.lock().unwrap();
        let before = persons.len();
        persons.retain(|p| p.id != id);
        if persons.len() == before {
            return Err(DbError::not_found(format!("no person found with id {}", id)));
        }
        Ok(())
    }
}

fn valid_create() -> PersonCreate {
    PersonCreate::new("Ana", 30, vec!["reading".to_string()])
}

#[tokio::test]
async fn given_valid_input_when_adding_then_returns_person_with_id() {
    // Given
    let repo = Arc::new(FakePersonRepository::default());
    let service = ValidatingPersonService::new(repo.clone());

    // When
    let person = service.add(valid_create()).await.unwrap();

    // Then
    assert_that!(person.has_id(), eq(true));
    assert_that!(person.id.as_str(), eq("fake-1"));
    assert_that!(person.name, eq("Ana"));
    assert_that!(repo.get_all().await.len(), eq(1));
}

#[tokio::test]
async fn given_empty_name_when_adding_then_validation_error_and_no_write() {
    // Given
    let repo = Arc::new(FakePersonRepository::default());
    let service = ValidatingPersonService::new(repo.clone());

    // When
    let result = service
        .add(PersonCreate::new("", 30, vec!["reading".to_string()]))
        .await;

    // Then
    let error = result.unwrap_err();
    assert_that!(error.is_validation(), eq(true));
    assert_that!(error.message(), eq("name can't be empty"));
    assert_that!(repo.calls(), is_empty());
}

#[tokio::test]
async fn given_store_failure_when_adding_then_persistence_error() {
    let repo = Arc::new(FakePersonRepository::failing());
    let service = ValidatingPersonService::new(repo);

    let error = service.add(valid_create()).await.unwrap_err();

    assert!(matches!(error, ServiceError::Persistence { .. }));
    assert_that!(
        error.message(),
        eq("could not add the person, please check the input data")
    );
}

#[tokio::test]
async fn given_unknown_id_when_getting_then_not_found() {
    let service = ValidatingPersonService::new(Arc::new(FakePersonRepository::default()));

    let error = service.get_by_id("nope").await.unwrap_err();

    assert_that!(error.is_not_found(), eq(true));
    assert_that!(error.message(), eq("person not found with id: nope"));
}

#[tokio::test]
async fn given_unknown_id_when_updating_then_fails_before_any_write() {
    // Given
    let repo = Arc::new(FakePersonRepository::default());
    let service = ValidatingPersonService::new(repo.clone());

    // When
    let error = service
        .update_by_id(valid_create(), "ghost")
        .await
        .unwrap_err();

    // Then
    assert_that!(error.message(), eq("person with id ghost does not exist"));
    assert_that!(repo.calls(), elements_are![eq(&"check_existence")]);
}

#[tokio::test]
async fn given_unknown_id_and_invalid_input_when_updating_then_existence_reported_first() {
    let repo = Arc::new(FakePersonRepository::default());
    let service = ValidatingPersonService::new(repo);

    let error = service
        .update_by_id(PersonCreate::default(), "ghost")
        .await
        .unwrap_err();

    assert_that!(error.is_not_found(), eq(true));
}

#[tokio::test]
async fn given_existing_id_and_negative_age_when_updating_then_validation_error_and_no_write() {
    let repo = Arc::new(FakePersonRepository::with_person("p-1"));
    let service = ValidatingPersonService::new(repo.clone());

    let error = service
        .update_by_id(PersonCreate::new("Ana", -1, vec!["x".to_string()]), "p-1")
        .await
        .unwrap_err();

    assert_that!(error.message(), eq("age can't be less than zero"));
    assert_that!(repo.calls(), elements_are![eq(&"check_existence")]);
}

#[tokio::test]
async fn given_existing_id_when_updating_then_fields_replaced() {
    // Given
    let repo = Arc::new(FakePersonRepository::with_person("p-1"));
    let service = ValidatingPersonService::new(repo.clone());

    // When
    let result = service
        .update_by_id(PersonCreate::new("Bo", 41, vec!["chess".to_string()]), "p-1")
        .await;

    // Then
    assert_that!(result, ok(anything()));
    let stored = service.get_by_id("p-1").await.unwrap();
    assert_that!(stored.name, eq("Bo"));
    assert_that!(stored.age, eq(41));
    assert_that!(stored.hobbies, elements_are![eq("chess")]);
}

#[tokio::test]
async fn given_existing_id_when_deleting_twice_then_second_fails() {
    // Given
    let repo = Arc::new(FakePersonRepository::with_person("p-1"));
    let service = ValidatingPersonService::new(repo.clone());

    // When
    let first = service.delete_by_id("p-1").await;
    let second = service.delete_by_id("p-1").await;

    // Then
    assert_that!(first, ok(anything()));
    let error = second.unwrap_err();
    assert_that!(error.message(), eq("person with id p-1 does not exist"));
    assert_that!(
        repo.calls(),
        elements_are![
            eq(&"check_existence"),
            eq(&"delete_by_id"),
            eq(&"check_existence")
        ]
    );
}

#[test]
fn test_sqlx_error_maps_to_generic_persistence_message() {
    let error = ServiceError::from(DbError::from(sqlx::Error::RowNotFound));

    assert!(matches!(error, ServiceError::Persistence { .. }));
    assert_that!(error.message(), eq("Database operation failed"));
}
