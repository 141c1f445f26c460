//! Authentication module for the Harbormaster server
//!
//! This module handles registration, mobile-number login, password
//! hashing, and the bearer tokens that gate the rest of the API.

pub mod handlers;
mod identity;
mod password;
mod service;
mod token;

pub use identity::AuthedUser;
pub use service::{AuthService, Registration};
pub use token::{Claims, TokenError, TokenIssuer};
