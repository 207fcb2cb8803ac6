//! Gallery Store - persistence boundary
//!
//! The layer entities are created through. It owns ids, defaults, constraint
//! checks and password hashing; callers only hand it a field mapping.
//!
//! # Core Concepts
//!
//! - [`Persistence`]: `create(kind, fields)` plus the lookups tests assert on
//! - [`InMemoryStore`]: per-test implementation
//! - [`User`] / [`FavouritePicture`]: persisted entities
//! - [`ConstraintViolation`]: every way a create can be rejected

#![warn(unreachable_pub)]

mod error;
mod fields;
mod memory;
mod model;
mod password;
mod persistence;

pub use error::ConstraintViolation;
pub use memory::InMemoryStore;
pub use model::{EntityId, EntityKind, FavouritePicture, MaterializedEntity, User};
pub use password::PasswordHash;
pub use persistence::Persistence;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
