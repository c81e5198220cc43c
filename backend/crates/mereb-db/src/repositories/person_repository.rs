use crate::{DbError, Result as DbErrorResult, join_hobbies, split_hobbies};

use mereb_core::Person;

use async_trait::async_trait;
use log::{error, info};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

/// Persistence capabilities for persons.
///
/// Failures are logged in full by the implementation and returned with a
/// client-safe message; only the not-found messages name the identifier.
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// All persons in insertion order. A failed query is logged and yields an
    /// empty list; rows that fail to decode are skipped.
    async fn get_all(&self) -> Vec<Person>;

    async fn get_by_id(&self, id: &str) -> DbErrorResult<Person>;

    /// Insert `person`, assigning it a fresh identifier first.
    async fn add(&self, person: &mut Person) -> DbErrorResult<()>;

    async fn check_existence(&self, id: &str) -> DbErrorResult<()>;

    /// Replace name, age and hobbies of the row with `id`. The identifier on
    /// `person` is ignored.
    async fn update_by_id(&self, person: &Person, id: &str) -> DbErrorResult<()>;

    async fn delete_by_id(&self, id: &str) -> DbErrorResult<()>;
}

#[derive(Debug, FromRow)]
struct PersonRow {
    id: String,
    name: String,
    age: i64,
    hobbies: String,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        Person {
            id: row.id,
            name: row.name,
            age: row.age,
            hobbies: split_hobbies(&row.hobbies),
        }
    }
}

#[derive(Clone)]
pub struct SqlitePersonRepository {
    pool: SqlitePool,
}

impl SqlitePersonRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PersonRepository for SqlitePersonRepository {
    async fn get_all(&self) -> Vec<Person> {
        let rows = match sqlx::query("SELECT id, name, age, hobbies FROM persons ORDER BY rowid")
            .fetch_all(&self.pool)
            .await
        {
            Ok(rows) => rows,
            Err(e) => {
                error!("Error while getting all persons: {}", e);
                return Vec::new();
            }
        };

        rows.iter()
            .filter_map(|row| match PersonRow::from_row(row) {
                Ok(person_row) => Some(Person::from(person_row)),
                Err(e) => {
                    error!("Error while scanning person row: {}", e);
                    None
                }
            })
            .collect()
    }

    async fn get_by_id(&self, id: &str) -> DbErrorResult<Person> {
        let row = sqlx::query_as::<_, PersonRow>(
            "SELECT id, name, age, hobbies FROM persons WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Error while getting person by ID {}: {}", id, e);
            DbError::persistence(
                "an error occurred while retrieving the person, please try again later",
            )
        })?;

        row.map(Person::from)
            .ok_or_else(|| DbError::not_found(format!("person not found with id: {}", id)))
    }

    async fn add(&self, person: &mut Person) -> DbErrorResult<()> {
        person.id = Uuid::new_v4().to_string();
        let hobbies = join_hobbies(&person.hobbies);

        sqlx::query("INSERT INTO persons (id, name, age, hobbies) VALUES (?, ?, ?, ?)")
            .bind(&person.id)
            .bind(&person.name)
            .bind(person.age)
            .bind(hobbies)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Error while adding a new person: {}", e);
                DbError::persistence("could not add the person, please check the input data")
            })?;

        info!("Added person {}", person.id);
        Ok(())
    }

    async fn check_existence(&self, id: &str) -> DbErrorResult<()> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM persons WHERE id = ?)")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    error!("Error while checking person existence: {}", e);
                    DbError::persistence(
                        "could not check if the person exists, please try again later",
                    )
                })?;

        if !exists {
            return Err(DbError::not_found(format!(
                "person with id {} does not exist",
                id
            )));
        }

        Ok(())
    }

    async fn update_by_id(&self, person: &Person, id: &str) -> DbErrorResult<()> {
        let hobbies = join_hobbies(&person.hobbies);

        let result = sqlx::query("UPDATE persons SET name = ?, age = ?, hobbies = ? WHERE id = ?")
            .bind(&person.name)
            .bind(person.age)
            .bind(hobbies)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Error while updating person {}: {}", id, e);
                DbError::persistence("could not update the person, please check the input data")
            })?;

        // The row can vanish between the existence probe and this statement
        if result.rows_affected() == 0 {
            return Err(DbError::not_found(format!("no person found with id {}", id)));
        }

        info!("{} rows affected", result.rows_affected());
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> DbErrorResult<()> {
        let result = sqlx::query("DELETE FROM persons WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Error while deleting person {}: {}", id, e);
                DbError::persistence("could not delete the person, please try again later")
            })?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(format!("no person found with id {}", id)));
        }

        info!("{} rows affected", result.rows_affected());
        Ok(())
    }
}
