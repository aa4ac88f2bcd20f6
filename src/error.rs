//! Error handling module.
//!
//! A single unified error type covers the two failure surfaces this crate
//! has: deobfuscation of values that were never produced by the obfuscator,
//! and bcrypt failures bubbled up from the password wrapper.

/// Library-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Deobfuscation produced the zero sentinel; the input was never a
    /// validly obfuscated identifier. Carries the offending value for
    /// diagnostics.
    #[error("invalid obfuscated value: {value}")]
    Decode {
        /// The value that failed to decode.
        value: i64,
    },

    /// Invalid alphabet definition.
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),

    /// Password hashing or verification failed.
    #[error("password hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
