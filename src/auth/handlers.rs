use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::auth::service::Registration;
use crate::db::models::{Role, User};
use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub full_name: String,
    pub mobile_number: String,
    pub password: String,
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub full_name: String,
    pub mobile_number: String,
    pub email: Option<String>,
    pub role: Role,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            mobile_number: user.mobile_number,
            email: user.email,
            role: user.role,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    /// Mobile number. The field keeps the OAuth2 form name so stock
    /// password-grant clients can log in unchanged.
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".into(),
        }
    }
}

pub async fn register(
    req: web::Json<RegisterRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    info!("Received registration request for mobile: {}", req.mobile_number);

    let req = req.into_inner();
    let registration = Registration {
        full_name: req.full_name,
        mobile_number: req.mobile_number,
        email: req.email,
        password: req.password,
        role: req.role,
    };

    match state.auth.register(registration).await {
        Ok(user) => {
            info!("Registration successful for user id: {}", user.id);
            Ok(HttpResponse::Ok().json(UserResponse::from(user)))
        }
        Err(e) => {
            error!("Registration failed: {}", e);
            Err(e)
        }
    }
}

pub async fn login(
    form: web::Form<LoginForm>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    info!("Received login request for mobile: {}", form.username);

    match state.auth.login(&form.username, &form.password).await {
        Ok(token) => {
            info!("Login successful for mobile: {}", form.username);
            Ok(HttpResponse::Ok().json(TokenResponse::bearer(token)))
        }
        Err(e) => {
            error!("Login failed for mobile: {}: {}", form.username, e);
            Err(e)
        }
    }
}
