#![allow(dead_code)]

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let pool = mereb_db::connect_in_memory()
        .await
        .expect("Failed to create test pool");

    mereb_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Inserts a raw row, bypassing the repository
pub async fn insert_raw_person(pool: &SqlitePool, id: &str, name: &str, age: i64, hobbies: &str) {
    // Use sqlx::query (not query!) to avoid offline mode issues in tests
    sqlx::query("INSERT INTO persons (id, name, age, hobbies) VALUES (?, ?, ?, ?)")
        .bind(id)
        .bind(name)
        .bind(age)
        .bind(hobbies)
        .execute(pool)
        .await
        .expect("Failed to insert raw person");
}

pub async fn count_persons(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM persons")
        .fetch_one(pool)
        .await
        .expect("Failed to count persons")
}
