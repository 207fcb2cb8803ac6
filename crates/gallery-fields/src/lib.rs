//! Gallery Fields - seeded field generator
//!
//! Produces typed pseudo-random values for test fixtures from a deterministic
//! seed.
//!
//! # Core Concepts
//!
//! - [`Seed`]: fixes the generator's output sequence
//! - [`FieldKind`]: closed vocabulary of generator kinds (`person.email`, ...)
//! - [`Params`]: optional per-kind parameters (date format and bounds, length)
//! - [`FieldValue`]: the typed value a generator (or a caller) supplies
//! - [`FieldGenerator`]: the seeded generator itself
//!
//! # Example
//!
//! ```rust,ignore
//! use gallery_fields::{FieldGenerator, Params, Seed};
//!
//! let mut mf = FieldGenerator::new(Seed::new(42));
//! let email = mf.generate("person.email", &Params::default())?;
//! let born = mf.generate(
//!     "datetime.formatted_date",
//!     &Params::new().with_fmt("%Y-%m-%d").with_end(2020),
//! )?;
//! ```

#![warn(unreachable_pub)]

mod error;
mod generator;
mod kind;
mod seed;
mod value;
mod words;

pub use error::FieldError;
pub use generator::{FieldGenerator, DEFAULT_DATE_FORMAT, DEFAULT_PASSWORD_LENGTH};
pub use kind::{FieldKind, Params};
pub use seed::Seed;
pub use value::FieldValue;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
