use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};

/// Default store location used when no `DATABASE_URL` is configured.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://camp.db";

const SCHEMA: [&str; 3] = [
    r#"
    CREATE TABLE IF NOT EXISTS campers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL CHECK (length(trim(name)) > 0),
        age INTEGER NOT NULL CHECK (age BETWEEN 8 AND 18)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS activities (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL CHECK (length(trim(name)) > 0),
        difficulty INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS signups (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        time INTEGER NOT NULL CHECK (time BETWEEN 0 AND 23),
        camper_id INTEGER NOT NULL REFERENCES campers (id) ON DELETE CASCADE,
        activity_id INTEGER NOT NULL REFERENCES activities (id) ON DELETE CASCADE
    )
    "#,
];

/// Creates a connection pool to the SQLite database at `database_url`.
///
/// The database file is created if it does not exist yet, and foreign key
/// enforcement is switched on for every connection in the pool.
pub async fn create_connection_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Creates a single-connection pool over a private in-memory database with the
/// schema already applied. Used by tests and local tooling.
pub async fn create_in_memory_pool() -> Result<SqlitePool, sqlx::Error> {
    // One connection only: the in-memory database lives and dies with it.
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    init_schema(&pool).await?;
    Ok(pool)
}

/// Creates the campers, activities and signups tables if they are missing.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    for statement in SCHEMA {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    log::info!("🗂️ Database schema ready");
    Ok(())
}

/// Tests the database connection by executing a simple query.
pub async fn test_connection(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let row = sqlx::query("SELECT 1 AS test").fetch_one(pool).await?;

    let test_value: i64 = row.get("test");
    log::info!("✅ Database connection successful! Test value: {}", test_value);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn count(pool: &SqlitePool, table: &str) -> i64 {
        sqlx::query(&format!("SELECT COUNT(*) AS n FROM {table}"))
            .fetch_one(pool)
            .await
            .unwrap()
            .get("n")
    }

    #[tokio::test]
    async fn test_schema_is_idempotent() {
        let pool = create_in_memory_pool().await.unwrap();
        init_schema(&pool).await.unwrap();
        test_connection(&pool).await.unwrap();

        assert_eq!(count(&pool, "campers").await, 0);
    }

    #[tokio::test]
    async fn test_signup_requires_existing_parents() {
        let pool = create_in_memory_pool().await.unwrap();

        let err = sqlx::query("INSERT INTO signups (time, camper_id, activity_id) VALUES (9, 1, 1)")
            .execute(&pool)
            .await
            .unwrap_err();

        let db_err = err.as_database_error().unwrap();
        assert!(db_err.is_foreign_key_violation());
    }

    #[tokio::test]
    async fn test_check_constraints_reject_out_of_range_values() {
        let pool = create_in_memory_pool().await.unwrap();

        let err = sqlx::query("INSERT INTO campers (name, age) VALUES ('Ava', 19)")
            .execute(&pool)
            .await
            .unwrap_err();
        assert!(err.as_database_error().unwrap().is_check_violation());

        let err = sqlx::query("INSERT INTO campers (name, age) VALUES ('   ', 12)")
            .execute(&pool)
            .await
            .unwrap_err();
        assert!(err.as_database_error().unwrap().is_check_violation());
    }

    #[tokio::test]
    async fn test_deleting_parent_cascades_to_signups() {
        let pool = create_in_memory_pool().await.unwrap();

        sqlx::query("INSERT INTO campers (name, age) VALUES ('Ava', 12)")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO activities (name, difficulty) VALUES ('Archery', 2)")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO signups (time, camper_id, activity_id) VALUES (10, 1, 1)")
            .execute(&pool)
            .await
            .unwrap();

        sqlx::query("DELETE FROM activities WHERE id = 1")
            .execute(&pool)
            .await
            .unwrap();

        assert_eq!(count(&pool, "signups").await, 0);
        assert_eq!(count(&pool, "campers").await, 1);
    }

    #[tokio::test]
    async fn test_deleting_camper_cascades_to_signups() {
        let pool = create_in_memory_pool().await.unwrap();

        sqlx::query("INSERT INTO campers (name, age) VALUES ('Ava', 12), ('Ben', 9)")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO activities (name, difficulty) VALUES ('Archery', 2)")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query(
            "INSERT INTO signups (time, camper_id, activity_id) VALUES (10, 1, 1), (11, 1, 1), (12, 2, 1)",
        )
        .execute(&pool)
        .await
        .unwrap();

        sqlx::query("DELETE FROM campers WHERE id = 1")
            .execute(&pool)
            .await
            .unwrap();

        let orphans: i64 = sqlx::query("SELECT COUNT(*) AS n FROM signups WHERE camper_id = 1")
            .fetch_one(&pool)
            .await
            .unwrap()
            .get("n");
        assert_eq!(orphans, 0);
        assert_eq!(count(&pool, "signups").await, 1);
        assert_eq!(count(&pool, "activities").await, 1);
    }
}
