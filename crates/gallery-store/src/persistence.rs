//! Persistence boundary

use crate::error::ConstraintViolation;
use crate::model::{EntityId, EntityKind, FavouritePicture, MaterializedEntity, User};
use gallery_schema::ComposedRecord;

/// Entry point of the persistence layer
///
/// Owns ids, defaults, constraint checks and password hashing. Takes `&self`
/// so one store can back every factory of a test.
pub trait Persistence {
    /// Construct and persist an entity from `fields`
    ///
    /// # Errors
    /// Returns [`ConstraintViolation`] if the fields break a uniqueness,
    /// required-field, type or reference constraint
    fn create(
        &self,
        kind: EntityKind,
        fields: &ComposedRecord,
    ) -> Result<MaterializedEntity, ConstraintViolation>;

    /// Look a user up by email (domain compared case-insensitively)
    fn user_by_email(&self, email: &str) -> Option<User>;

    /// Look a user up by id
    fn user_by_id(&self, id: EntityId) -> Option<User>;

    /// Pictures owned by `owner`, oldest first
    fn pictures_owned_by(&self, owner: EntityId) -> Vec<FavouritePicture>;

    /// Whether `owner` has a picture matching every field in `fields`
    fn picture_exists(&self, owner: EntityId, fields: &ComposedRecord) -> bool;
}
