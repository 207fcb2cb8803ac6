//! Gallery Core - entity materialization
//!
//! Glues the seeded generator, the template composer and the persistence
//! layer together:
//! - [`EntityMaterializer`] fills missing attributes and persists entities
//! - [`EntityFactory`] creates one entity kind with a fixed seed
//! - [`FixtureConfig`] carries seed and generator settings
//!
//! # Example
//!
//! ```rust,ignore
//! use gallery_core::EntityMaterializer;
//! use gallery_fields::Seed;
//! use gallery_schema::{templates, OverrideSet, SchemaComposer};
//! use gallery_store::{EntityKind, InMemoryStore};
//!
//! let store = InMemoryStore::new();
//! let fields = SchemaComposer::new(Seed::new(42))
//!     .compose(&templates::user_data(), &OverrideSet::new())?;
//! let user = EntityMaterializer::new(&store)
//!     .materialize(EntityKind::ACTIVE_USER, &fields, Seed::new(42))?;
//! ```

#![warn(unreachable_pub)]

pub mod config;
pub mod error;
pub mod factory;
pub mod materializer;

pub use config::{FixtureConfig, SEED_ENV};
pub use error::{ConfigError, MaterializeError};
pub use factory::{EntityFactory, SeededEntityFactory};
pub use materializer::EntityMaterializer;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for building fixtures
    pub use crate::{
        EntityFactory, EntityMaterializer, FixtureConfig, MaterializeError, SeededEntityFactory,
    };
    pub use gallery_fields::{FieldGenerator, FieldValue, Params, Seed};
    pub use gallery_schema::{
        templates, ComposedRecord, OverrideSet, RecordFactory, SchemaComposer, Template,
    };
    pub use gallery_store::{
        ConstraintViolation, EntityId, EntityKind, FavouritePicture, InMemoryStore,
        MaterializedEntity, Persistence, User,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
