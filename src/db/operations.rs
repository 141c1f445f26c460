use std::sync::Arc;

use sqlx::PgPool;

use crate::db::models::{Boat, NewBoat, NewUser, User};
use crate::error::AppError;

#[derive(Clone)]
pub struct DbOperations {
    pool: Arc<PgPool>,
}

impl DbOperations {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Create the `users` and `boats` tables when they do not exist yet.
    /// Runs once at startup; idempotent.
    pub async fn init_schema(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id BIGSERIAL PRIMARY KEY,
                full_name TEXT NOT NULL,
                mobile_number TEXT NOT NULL UNIQUE,
                email TEXT UNIQUE,
                password_hash TEXT NOT NULL,
                role TEXT NOT NULL DEFAULT 'captain',
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(self.pool.as_ref())
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS boats (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                registration TEXT UNIQUE,
                boat_type TEXT,
                length_m INT,
                home_port TEXT,
                owner_id BIGINT NOT NULL REFERENCES users(id),
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    pub async fn create_user(&self, new_user: &NewUser) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (full_name, mobile_number, email, password_hash, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, full_name, mobile_number, email, password_hash, role, created_at
            "#,
        )
        .bind(&new_user.full_name)
        .bind(&new_user.mobile_number)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(new_user.role.as_str())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(user)
    }

    pub async fn get_user_by_mobile(&self, mobile_number: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, full_name, mobile_number, email, password_hash, role, created_at FROM users WHERE mobile_number = $1",
        )
        .bind(mobile_number)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(user)
    }

    pub async fn get_user_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, full_name, mobile_number, email, password_hash, role, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(user)
    }

    pub async fn create_boat(&self, owner_id: i64, new_boat: &NewBoat) -> Result<Boat, AppError> {
        let boat = sqlx::query_as::<_, Boat>(
            r#"
            INSERT INTO boats (name, registration, boat_type, length_m, home_port, owner_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, registration, boat_type, length_m, home_port, owner_id, created_at
            "#,
        )
        .bind(&new_boat.name)
        .bind(&new_boat.registration)
        .bind(&new_boat.boat_type)
        .bind(new_boat.length_m)
        .bind(&new_boat.home_port)
        .bind(owner_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(boat)
    }

    /// All boats owned by `owner_id`, most recently created first. The id
    /// tiebreaker keeps the order total when timestamps collide.
    pub async fn list_boats_by_owner(&self, owner_id: i64) -> Result<Vec<Boat>, AppError> {
        let boats = sqlx::query_as::<_, Boat>(
            "SELECT id, name, registration, boat_type, length_m, home_port, owner_id, created_at FROM boats WHERE owner_id = $1 ORDER BY created_at DESC, id DESC",
        )
        .bind(owner_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(boats)
    }
}
