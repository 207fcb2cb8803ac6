//! Gallery Schema - templates and override composition
//!
//! # Core Concepts
//!
//! - [`Template`]: ordered field name → [`FieldSpec`] mapping for one entity kind
//! - [`OverrideSet`]: caller literals that win over generated values
//! - [`ComposedRecord`]: the merged, plain field mapping
//! - [`SchemaComposer`]: evaluates a template once and merges overrides
//! - [`RecordFactory`]: fixed factory interface (`build(overrides)`)
//! - [`TemplateRegistry`]: built-in templates by name
//!
//! # Example
//!
//! ```rust,ignore
//! use gallery_schema::{templates, OverrideSet, SchemaComposer};
//! use gallery_fields::Seed;
//!
//! let mut composer = SchemaComposer::new(Seed::new(42));
//! let record = composer.compose(
//!     &templates::user_data(),
//!     &OverrideSet::new().with("date_of_birth", ""),
//! )?;
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod composer;
mod factory;
mod record;
mod registry;
mod template;
pub mod templates;

pub use composer::{compose_with, SchemaComposer};
pub use factory::{RecordFactory, SharedGenerator, TemplateFactory};
pub use record::{ComposedRecord, OverrideSet};
pub use registry::TemplateRegistry;
pub use template::{FieldSpec, Template};
pub use templates::USER_BIRTHDAY_FORMAT;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
