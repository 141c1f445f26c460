//! Boat registry module for the Harbormaster server
//!
//! Boats belong to the account that registered them. Every route in here
//! requires a bearer token.

pub mod handlers;
