use anyhow::anyhow;
use profrate_core::{AppError, generate_token, hash_password, verify_password};
use sqlx::SqlitePool;
use tracing::{debug, error, info, instrument, warn};

use super::model::{LoginRequest, RegisterRequest, User};

const INVALID_CREDENTIALS: &str = "Invalid username or password.";

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, dto), fields(user.username = ?dto.username, db.table = "users"))]
    pub async fn register_user(db: &SqlitePool, dto: RegisterRequest) -> Result<User, AppError> {
        let (Some(username), Some(password), Some(email)) = (dto.username, dto.password, dto.email)
        else {
            return Err(AppError::bad_request(anyhow!("All fields must be filled.")));
        };

        let username_taken: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = ?")
                .bind(&username)
                .fetch_one(db)
                .await?;
        if username_taken > 0 {
            warn!("Attempted to register an existing username");
            return Err(AppError::bad_request(anyhow!("Username already exists.")));
        }

        let email_taken: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
                .bind(&email)
                .fetch_one(db)
                .await?;
        if email_taken > 0 {
            warn!("Attempted to register an existing email");
            return Err(AppError::bad_request(anyhow!("Email already exists.")));
        }

        let hashed_password = hash_password(&password)?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, email, password) VALUES (?, ?, ?)
             RETURNING id, username, email",
        )
        .bind(&username)
        .bind(&email)
        .bind(&hashed_password)
        .fetch_one(db)
        .await
        .map_err(|e| {
            // A concurrent registration can slip past the checks above.
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return if db_err.message().contains("users.username") {
                    AppError::bad_request(anyhow!("Username already exists."))
                } else {
                    AppError::bad_request(anyhow!("Email already exists."))
                };
            }
            error!(error = %e, "Database error creating user");
            AppError::from(e)
        })?;

        info!(user.id = user.id, "User registered");

        Ok(user)
    }

    /// Checks the credentials and returns the user's token, issuing one if
    /// the user has none.
    #[instrument(skip(db, dto), fields(user.username = ?dto.username, db.table = "auth_tokens"))]
    pub async fn login_user(db: &SqlitePool, dto: LoginRequest) -> Result<String, AppError> {
        let (Some(username), Some(password)) = (dto.username, dto.password) else {
            return Err(AppError::bad_request(anyhow!("Username or password required.")));
        };

        #[derive(sqlx::FromRow)]
        struct UserWithPassword {
            id: i64,
            password: String,
        }

        let user = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, password FROM users WHERE username = ?",
        )
        .bind(&username)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| {
            debug!("Login attempt for unknown username");
            AppError::bad_request(anyhow!(INVALID_CREDENTIALS))
        })?;

        if !verify_password(&password, &user.password)? {
            debug!(user.id = user.id, "Login attempt with wrong password");
            return Err(AppError::bad_request(anyhow!(INVALID_CREDENTIALS)));
        }

        let token = Self::get_or_create_token(db, user.id).await?;

        info!(user.id = user.id, "User logged in");

        Ok(token)
    }

    /// Returns the live token for `user_id`. The unique constraint on
    /// `auth_tokens.user_id` makes concurrent logins converge on one token.
    pub async fn get_or_create_token(db: &SqlitePool, user_id: i64) -> Result<String, AppError> {
        sqlx::query(
            "INSERT INTO auth_tokens (token, user_id) VALUES (?, ?)
             ON CONFLICT (user_id) DO NOTHING",
        )
        .bind(generate_token())
        .bind(user_id)
        .execute(db)
        .await?;

        let token: String = sqlx::query_scalar("SELECT token FROM auth_tokens WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(db)
            .await?;

        Ok(token)
    }

    #[instrument(skip(db, token), fields(db.table = "auth_tokens"))]
    pub async fn logout_user(db: &SqlitePool, token: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM auth_tokens WHERE token = ?")
            .bind(token)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::unauthorized("Invalid token."));
        }

        info!("Token revoked");

        Ok(())
    }

    pub async fn find_user_by_token(db: &SqlitePool, token: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT u.id, u.username, u.email
             FROM auth_tokens t
             JOIN users u ON u.id = t.user_id
             WHERE t.token = ?",
        )
        .bind(token)
        .fetch_optional(db)
        .await?;

        Ok(user)
    }
}
