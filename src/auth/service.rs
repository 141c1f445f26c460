use crate::auth::password::{hash_password, verify_password};
use crate::auth::token::TokenIssuer;
use crate::db::models::{NewUser, Role, User};
use crate::db::operations::DbOperations;
use crate::error::AppError;

/// Input for a registration attempt, with the password still in the clear.
#[derive(Debug)]
pub struct Registration {
    pub full_name: String,
    pub mobile_number: String,
    pub email: Option<String>,
    pub password: String,
    pub role: Role,
}

pub struct AuthService {
    db: DbOperations,
    tokens: TokenIssuer,
}

impl AuthService {
    pub fn new(db: DbOperations, tokens: TokenIssuer) -> Self {
        Self { db, tokens }
    }

    /// Creates an account keyed by mobile number. The password is hashed
    /// before it touches the database; the plaintext is dropped here.
    pub async fn register(&self, registration: Registration) -> Result<User, AppError> {
        if self
            .db
            .get_user_by_mobile(&registration.mobile_number)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict("Mobile number already registered".into()));
        }

        let password_hash = hash_password(&registration.password)?;

        let user = self
            .db
            .create_user(&NewUser {
                full_name: registration.full_name,
                mobile_number: registration.mobile_number,
                email: registration.email,
                password_hash,
                role: registration.role,
            })
            .await?;

        Ok(user)
    }

    /// Checks mobile number and password and mints a bearer token. A missing
    /// account and a wrong password produce the same error, so callers cannot
    /// probe which mobile numbers are registered.
    pub async fn login(&self, mobile_number: &str, password: &str) -> Result<String, AppError> {
        let user = self
            .db
            .get_user_by_mobile(mobile_number)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        let token = self
            .tokens
            .issue(user.id, user.role)
            .map_err(|e| AppError::Internal(format!("Token encoding failed: {}", e)))?;

        Ok(token)
    }

    /// Resolves a bearer token to the live account behind it. Signature and
    /// expiry problems, an unparseable subject, and a deleted user all come
    /// back as `Unauthenticated`.
    pub async fn resolve_token(&self, token: &str) -> Result<User, AppError> {
        let claims = self
            .tokens
            .verify(token)
            .map_err(|e| AppError::Unauthenticated(e.to_string()))?;

        let user_id: i64 = claims
            .sub
            .parse()
            .map_err(|_| AppError::Unauthenticated("Token subject is not a user id".into()))?;

        let user = self
            .db
            .get_user_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::Unauthenticated("User no longer exists".into()))?;

        Ok(user)
    }
}
