use bcrypt::{hash, verify, DEFAULT_COST};

use crate::error::AppError;

/// Hash a plaintext password with bcrypt. The result embeds the algorithm
/// version, cost and salt, so it is all that needs to be stored.
pub fn hash_password(plain: &str) -> Result<String, AppError> {
    Ok(hash(plain, DEFAULT_COST)?)
}

/// Check a plaintext password against a stored bcrypt hash. Comparison is
/// timing-safe inside the bcrypt crate. A hash that cannot be parsed is an
/// internal error, never a credential failure.
pub fn verify_password(plain: &str, hashed: &str) -> Result<bool, AppError> {
    Ok(verify(plain, hashed)?)
}
