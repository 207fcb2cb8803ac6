//! Entity factories
//!
//! [`EntityFactory`] is the entity-level counterpart of
//! [`RecordFactory`](gallery_schema::RecordFactory): create one persisted
//! entity, optionally with caller-supplied fields.

use crate::error::MaterializeError;
use crate::materializer::EntityMaterializer;
use gallery_fields::Seed;
use gallery_schema::{ComposedRecord, OverrideSet};
use gallery_store::{EntityKind, MaterializedEntity, Persistence};

/// Creates persisted entities
pub trait EntityFactory {
    /// Create one entity from `fields`, filling the rest
    ///
    /// # Errors
    /// Propagates [`MaterializeError`] from the materializer
    fn create(&self, fields: Option<OverrideSet>) -> Result<MaterializedEntity, MaterializeError>;
}

/// Factory materializing one entity kind with a fixed seed
#[derive(Debug)]
pub struct SeededEntityFactory<'m, 's, P: Persistence + ?Sized> {
    materializer: &'m EntityMaterializer<'s, P>,
    kind: EntityKind,
    seed: Seed,
}

impl<'m, 's, P: Persistence + ?Sized> SeededEntityFactory<'m, 's, P> {
    /// Create factory
    #[inline]
    #[must_use]
    pub fn new(materializer: &'m EntityMaterializer<'s, P>, kind: EntityKind, seed: Seed) -> Self {
        Self {
            materializer,
            kind,
            seed,
        }
    }

    /// Kind this factory creates
    #[inline]
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        self.kind
    }
}

impl<P: Persistence + ?Sized> EntityFactory for SeededEntityFactory<'_, '_, P> {
    fn create(&self, fields: Option<OverrideSet>) -> Result<MaterializedEntity, MaterializeError> {
        let fields: ComposedRecord = fields.unwrap_or_default().into_iter().collect();
        self.materializer.materialize(self.kind, &fields, self.seed)
    }
}
