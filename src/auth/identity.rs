//! Bearer-token identity for HTTP handlers.
//!
//! Handlers that need a caller take an [`AuthedUser`] argument; the extractor
//! parses the Authorization header, checks the token, and loads the account
//! so the handler body never touches framework plumbing.

use actix_web::http::header::AUTHORIZATION;
use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;

use crate::db::models::User;
use crate::error::AppError;
use crate::AppState;

/// The account behind the request's bearer token, freshly loaded from the
/// database. Derefs to [`User`].
#[derive(Debug)]
pub struct AuthedUser(pub User);

impl std::ops::Deref for AuthedUser {
    type Target = User;

    fn deref(&self) -> &User {
        &self.0
    }
}

/// Pulls the token out of an `Authorization: Bearer <token>` value. The
/// scheme is matched case-insensitively.
fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    Some(token)
}

impl FromRequest for AuthedUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let header = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        Box::pin(async move {
            let state = state
                .ok_or_else(|| AppError::Internal("Application state is not configured".into()))?;
            let header = header
                .ok_or_else(|| AppError::Unauthenticated("Missing Authorization header".into()))?;
            let token = bearer_token(&header).ok_or_else(|| {
                AppError::Unauthenticated("Authorization header is not a bearer token".into())
            })?;

            let user = state.auth.resolve_token(token).await?;

            Ok(AuthedUser(user))
        })
    }
}
