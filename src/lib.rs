//! # IDKit
//!
//! Low-level helpers shared by the ID generation services:
//!
//! - **Random sequences**: fixed-length strings over a chosen alphabet,
//!   built from batched 63-bit draws against a shared entropy source
//! - **Identifier obfuscation**: a reversible 16-bit half-word swap that
//!   makes sequential IDs look unrelated in user-facing surfaces
//! - **Rounding**: threshold-based decimal rounding and truncation
//! - **Password hashing**: a thin bcrypt wrapper
//! - **Schema columns**: ORM column-tag parsing for model types
//!
//! The obfuscator is bit rearrangement, not a cipher: it discourages casual
//! enumeration of sequential IDs and nothing more. The entropy source is a
//! seeded PRNG, suitable for tokens and codes but not for key material.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

pub mod entropy;
pub mod error;
pub mod obfuscate;
pub mod password;
pub mod round;
pub mod schema;
pub mod sequence;

pub use entropy::{Entropy, RandomStream};
pub use error::{Error, Result};
pub use obfuscate::{deobfuscate, obfuscate};
pub use round::{round, truncate};
pub use sequence::{Alphabet, random_digits, random_letters};
