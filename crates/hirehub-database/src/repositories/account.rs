//! Account repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use hirehub_core::error::{AppError, ErrorKind};
use hirehub_core::result::AppResult;
use hirehub_entity::account::model::{CreateAccount, UpdateAccount};
use hirehub_entity::account::Account;

/// Repository for account CRUD and query operations.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    pool: PgPool,
}

impl AccountRepository {
    /// Create a new account repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an account by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>> {
        sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find account by id", e)
            })
    }

    /// Find an account by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find account by email", e)
            })
    }

    /// Check whether an email is already used by any account other than `id`.
    pub async fn email_taken_by_other(&self, email: &str, id: Uuid) -> AppResult<bool> {
        let existing: Option<Uuid> = sqlx::query_scalar(
            "SELECT id FROM accounts WHERE LOWER(email) = LOWER($1) AND id <> $2",
        )
        .bind(email)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check email availability", e)
        })?;

        Ok(existing.is_some())
    }

    /// Insert a new account. A duplicate email maps to a conflict error.
    pub async fn create(&self, input: &CreateAccount) -> AppResult<Account> {
        sqlx::query_as::<_, Account>(
            "INSERT INTO accounts \
             (public_id, first_name, last_name, age, email, password_hash, role) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(&input.public_id)
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(input.age)
        .bind(&input.email)
        .bind(&input.password_hash)
        .bind(input.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.constraint() == Some("accounts_email_key") => {
                AppError::conflict("An account with this email already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create account", e),
        })
    }

    /// Update the mutable profile fields of an account.
    pub async fn update_profile(&self, input: &UpdateAccount) -> AppResult<Account> {
        sqlx::query_as::<_, Account>(
            "UPDATE accounts SET first_name = $2, last_name = $3, email = $4, age = $5, \
             updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(input.id)
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.email)
        .bind(input.age)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::RowNotFound => AppError::not_found("Account not found"),
            sqlx::Error::Database(db) if db.constraint() == Some("accounts_email_key") => {
                AppError::conflict("An account with this email already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update account", e),
        })
    }

    /// Replace the stored password hash for an account.
    pub async fn update_password(&self, id: Uuid, password_hash: &str) -> AppResult<()> {
        let result =
            sqlx::query("UPDATE accounts SET password_hash = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(password_hash)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to update password", e)
                })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Account not found"));
        }
        Ok(())
    }

    /// List every account except the one identified by `id`, newest first.
    ///
    /// Used by the admin account listing which excludes the caller.
    pub async fn list_all_except(&self, id: Uuid) -> AppResult<Vec<Account>> {
        sqlx::query_as::<_, Account>(
            "SELECT * FROM accounts WHERE id <> $1 ORDER BY created_at DESC",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list accounts", e))
    }
}
