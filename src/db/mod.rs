//! Database module for the Harbormaster server
//!
//! This module handles the connection pool, startup schema creation,
//! and data access layer operations for users and boats.

pub mod models;
pub mod operations;

pub use models::{Boat, NewBoat, NewUser, Role, User};
pub use operations::DbOperations;
