use crate::models::{UserData, UserRecord};
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur when interacting with the record store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),
}

/// PostgreSQL-backed record store.
///
/// Records are created once at submission time and are immutable
/// afterward; the only mutation is the full-collection administrative
/// reset.
pub struct UserStore {
    pool: PgPool,
}

impl UserStore {
    /// Create a new store from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new store from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL with URL: {}", url);

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Persist a submitted record. The coordinate text is stored as
    /// given; the caller has already normalized it.
    pub async fn create_user(
        &self,
        coordinates: &str,
        user_data: &UserData,
    ) -> Result<UserRecord, StoreError> {
        let id = Uuid::new_v4();

        let query = r#"
            INSERT INTO users (id, coordinates, user_data, created_at)
            VALUES ($1, $2, $3, NOW())
            RETURNING created_at
        "#;

        let row = sqlx::query(query)
            .bind(id)
            .bind(coordinates)
            .bind(Json(user_data))
            .fetch_one(&self.pool)
            .await?;

        let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");

        tracing::debug!("Created user record {}", id);

        Ok(UserRecord {
            id,
            coordinates: coordinates.to_string(),
            user_data: *user_data,
            created_at,
        })
    }

    /// Fetch a single record by id
    pub async fn get_user(&self, id: Uuid) -> Result<Option<UserRecord>, StoreError> {
        let query = r#"
            SELECT id, coordinates, user_data, created_at
            FROM users
            WHERE id = $1
        "#;

        let row = sqlx::query(query).bind(id).fetch_optional(&self.pool).await?;

        Ok(row.map(|row| Self::record_from_row(&row)))
    }

    /// Fetch every stored record, oldest first
    pub async fn list_users(&self) -> Result<Vec<UserRecord>, StoreError> {
        let query = r#"
            SELECT id, coordinates, user_data, created_at
            FROM users
            ORDER BY created_at ASC
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        let users = rows.iter().map(Self::record_from_row).collect::<Vec<_>>();

        tracing::debug!("Listed {} user records", users.len());

        Ok(users)
    }

    /// Administrative reset: delete every record and return the count
    pub async fn delete_all(&self) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM users").execute(&self.pool).await?;

        tracing::info!("Deleted {} user records", result.rows_affected());

        Ok(result.rows_affected())
    }

    /// Check that the store is reachable
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        let row = sqlx::query("SELECT 1 as alive").fetch_one(&self.pool).await?;
        let alive: i32 = row.get("alive");
        Ok(alive == 1)
    }

    fn record_from_row(row: &sqlx::postgres::PgRow) -> UserRecord {
        let Json(user_data): Json<UserData> = row.get("user_data");
        UserRecord {
            id: row.get("id"),
            coordinates: row.get("coordinates"),
            user_data,
            created_at: row.get("created_at"),
        }
    }
}
