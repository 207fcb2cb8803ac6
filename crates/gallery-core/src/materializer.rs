//! Entity materializer
//!
//! Turns a composed record into a persisted entity:
//! 1. attributes the caller left out are filled from the entity's model
//!    template, drawn from a generator seeded with the supplied seed
//! 2. the completed record goes to [`Persistence::create`], which applies its
//!    own defaults and constraints
//!
//! Store rejections come back unchanged as [`MaterializeError::Constraint`].

use crate::config::FixtureConfig;
use crate::error::MaterializeError;
use gallery_fields::{FieldGenerator, Seed};
use gallery_schema::{compose_with, templates, ComposedRecord, OverrideSet, Template};
use gallery_store::{EntityKind, MaterializedEntity, Persistence};

/// Registration fields that replace a generated `password`
const REGISTRATION_PASSWORD_FIELDS: [&str; 2] = ["password1", "password2"];

/// Creates entities through a persistence layer
#[derive(Debug)]
pub struct EntityMaterializer<'s, P: Persistence + ?Sized> {
    store: &'s P,
    config: FixtureConfig,
}

impl<'s, P: Persistence + ?Sized> EntityMaterializer<'s, P> {
    /// Create materializer with default configuration
    #[inline]
    #[must_use]
    pub fn new(store: &'s P) -> Self {
        Self::with_config(store, FixtureConfig::default())
    }

    /// Create materializer with configuration
    #[inline]
    #[must_use]
    pub fn with_config(store: &'s P, config: FixtureConfig) -> Self {
        Self { store, config }
    }

    /// Persistence layer entities are created through
    #[inline]
    #[must_use]
    pub fn store(&self) -> &'s P {
        self.store
    }

    /// Fill missing attributes from `seed` and persist an entity of `kind`
    ///
    /// Every field in `fields` reaches the store unchanged.
    ///
    /// # Errors
    /// - [`MaterializeError::Constraint`] if the store rejects the fields
    /// - [`MaterializeError::Field`] if filling an attribute fails
    pub fn materialize(
        &self,
        kind: EntityKind,
        fields: &ComposedRecord,
        seed: Seed,
    ) -> Result<MaterializedEntity, MaterializeError> {
        let template = self.model_template(kind, fields);
        let mut generator = FieldGenerator::new(seed);
        let overrides = OverrideSet::from(fields.clone());
        let complete = compose_with(&mut generator, &template, &overrides)?;

        match self.store.create(kind, &complete) {
            Ok(entity) => {
                tracing::info!(
                    entity = entity.entity_name(),
                    id = %entity.id(),
                    %seed,
                    supplied = fields.len(),
                    "materialized"
                );
                Ok(entity)
            }
            Err(violation) => Err(violation.into()),
        }
    }

    /// Attributes the materializer may fill for `kind`
    fn model_template(&self, kind: EntityKind, fields: &ComposedRecord) -> Template {
        match kind {
            EntityKind::User { .. } => {
                let model = templates::user_model(
                    self.config.password_length,
                    self.config.birth_year_span,
                );
                if REGISTRATION_PASSWORD_FIELDS
                    .iter()
                    .any(|field| fields.contains(field))
                {
                    model.without("password")
                } else {
                    model
                }
            }
            EntityKind::FavouritePicture => templates::favourite_picture(),
        }
    }
}
