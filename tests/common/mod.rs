#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use actix_web::web;
use harbormaster_server::auth::Registration;
use harbormaster_server::config::{
    AuthConfig, CorsConfig, DatabaseConfig, ServerConfig,
};
use harbormaster_server::{AppState, Role, Settings, User};
use tokio::sync::OnceCell;

pub const TEST_JWT_SECRET: &str = "integration_test_secret";

static SCHEMA_READY: OnceCell<()> = OnceCell::const_new();
static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Application state wired to the database named by `TEST_DATABASE_URL`.
/// Returns `None` when the variable is unset so the suite passes on
/// machines without a reachable postgres.
pub async fn test_state() -> Option<web::Data<AppState>> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;

    let config = Settings {
        environment: "test".into(),
        server: ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
            workers: 1,
        },
        database: DatabaseConfig {
            url,
            max_connections: 2,
        },
        auth: AuthConfig {
            jwt_secret: TEST_JWT_SECRET.into(),
            token_ttl_days: 7,
        },
        cors: CorsConfig {
            enabled: true,
            allow_any_origin: true,
            allowed_origins: Vec::new(),
            max_age: 3600,
        },
    };

    let state = AppState::new(config)
        .await
        .expect("Failed to connect to TEST_DATABASE_URL");

    SCHEMA_READY
        .get_or_init(|| async {
            state
                .db
                .init_schema()
                .await
                .expect("Failed to initialize schema");
        })
        .await;

    Some(web::Data::new(state))
}

fn epoch_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Clock before unix epoch")
        .as_millis()
}

/// A mobile number no earlier test run has seen.
pub fn unique_mobile() -> String {
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("+1{}{:03}", epoch_millis(), n % 1000)
}

/// A hull registration no earlier test run has seen.
pub fn unique_registration() -> String {
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("REG-{}-{}", epoch_millis(), n)
}

/// An email address no earlier test run has seen.
pub fn unique_email() -> String {
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("skipper{}{}@example.com", epoch_millis(), n)
}

/// Creates an account directly through the service layer, skipping HTTP.
/// Returns the stored user and the mobile number it was registered under.
pub async fn seed_user(state: &AppState, role: Role, password: &str) -> (User, String) {
    let mobile = unique_mobile();
    let user = state
        .auth
        .register(Registration {
            full_name: "Test Skipper".into(),
            mobile_number: mobile.clone(),
            email: None,
            password: password.into(),
            role,
        })
        .await
        .expect("Failed to seed user");

    (user, mobile)
}

/// Logs a seeded account in and returns its bearer token.
pub async fn bearer_for(state: &AppState, mobile: &str, password: &str) -> String {
    state
        .auth
        .login(mobile, password)
        .await
        .expect("Failed to log in seeded user")
}
