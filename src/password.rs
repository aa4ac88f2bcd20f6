//! Password hashing.
//!
//! Thin wrapper over bcrypt. Hashing embeds a random salt and the cost
//! factor in the digest, so verification needs nothing but the digest and
//! the candidate plaintext. This crate does not implement any hashing
//! itself.

use bcrypt::DEFAULT_COST;

use crate::error::Result;

/// Hash a plaintext password with bcrypt at the default cost.
///
/// # Errors
///
/// Returns [`crate::Error::Hash`] if bcrypt rejects the input (for example
/// a plaintext longer than bcrypt's 72-byte limit).
pub fn hash(plain: &str) -> Result<String> {
    hash_with_cost(plain, DEFAULT_COST)
}

/// Hash a plaintext password with an explicit bcrypt cost factor.
///
/// # Errors
///
/// Returns [`crate::Error::Hash`] if the cost is outside bcrypt's valid
/// range or the input is rejected.
pub fn hash_with_cost(plain: &str, cost: u32) -> Result<String> {
    Ok(bcrypt::hash(plain, cost)?)
}

/// Verify a plaintext password against a bcrypt digest.
///
/// Returns `Ok(false)` on a well-formed digest that does not match; an
/// `Err` means the digest itself was malformed.
///
/// # Errors
///
/// Returns [`crate::Error::Hash`] if the digest cannot be parsed.
pub fn verify(hashed: &str, plain: &str) -> Result<bool> {
    Ok(bcrypt::verify(plain, hashed)?)
}
