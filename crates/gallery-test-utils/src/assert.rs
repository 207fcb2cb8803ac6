//! Entity assertions
//!
//! Each helper compares a persisted entity with the record it was created
//! from and reports the first field that differs.

use gallery_fields::FieldValue;
use gallery_schema::{templates::USER_BIRTHDAY_FORMAT, ComposedRecord};
use gallery_store::{FavouritePicture, MaterializedEntity, User};
use std::fmt::Display;

/// Placeholder shown when the expected record lacks a field
const ABSENT: &str = "<absent>";

/// First mismatch between an entity and its expected record
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity}.{field}: expected {expected}, got {actual}")]
pub struct AssertionFailure {
    /// Entity that was checked
    pub entity: &'static str,
    /// Field that differs
    pub field: String,
    /// Value from the record, or `<absent>`
    pub expected: String,
    /// Value on the entity
    pub actual: String,
}

impl AssertionFailure {
    fn new(
        entity: &'static str,
        field: &str,
        expected: impl Display,
        actual: impl Display,
    ) -> Self {
        Self {
            entity,
            field: field.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

/// Check a user against the record it was created from
///
/// Checks a non-nil id, the active flag, that the user is neither staff nor
/// superuser, then `first_name`, `last_name`, `date_of_birth`, `address`,
/// `job_title` and `phone`. A user without a birthday matches a blank or
/// absent `date_of_birth`.
///
/// # Errors
/// Returns the first [`AssertionFailure`]
pub fn assert_correct_user(user: &User, expected: &ComposedRecord) -> Result<(), AssertionFailure> {
    let entity = User::ENTITY;
    if user.id.is_nil() {
        return Err(AssertionFailure::new(entity, "id", "non-nil id", user.id));
    }
    flag(entity, "is_active", true, user.is_active)?;
    flag(entity, "is_superuser", false, user.is_superuser)?;
    flag(entity, "is_staff", false, user.is_staff)?;

    text(entity, expected, "first_name", &user.first_name)?;
    text(entity, expected, "last_name", &user.last_name)?;

    match user.date_of_birth {
        Some(born) => {
            let formatted = born.format(USER_BIRTHDAY_FORMAT).to_string();
            text(entity, expected, "date_of_birth", &formatted)?;
        }
        None => {
            if let Some(value) = expected.get("date_of_birth").filter(|v| !v.is_blank()) {
                return Err(AssertionFailure::new(entity, "date_of_birth", shown(value), "unset"));
            }
        }
    }

    text(entity, expected, "address", &user.address)?;
    text(entity, expected, "job_title", &user.job_title)?;
    text(entity, expected, "phone", &user.phone)
}

/// Check a favourite picture against the record it was created from
///
/// # Errors
/// Returns the first [`AssertionFailure`] among id, `foreign_id` and `url`
pub fn assert_correct_picture(
    picture: &FavouritePicture,
    expected: &ComposedRecord,
) -> Result<(), AssertionFailure> {
    let entity = FavouritePicture::ENTITY;
    if picture.id.is_nil() {
        return Err(AssertionFailure::new(entity, "id", "non-nil id", picture.id));
    }

    let foreign_id = expected.get("foreign_id").and_then(|value| match value {
        FieldValue::Integer(n) => Some(*n),
        FieldValue::Text(s) => s.trim().parse().ok(),
        _ => None,
    });
    if foreign_id != Some(picture.foreign_id) {
        let shown = expected
            .get("foreign_id")
            .map_or_else(|| ABSENT.to_string(), shown);
        return Err(AssertionFailure::new(entity, "foreign_id", shown, picture.foreign_id));
    }

    text(entity, expected, "url", &picture.url)
}

/// Dispatch to the checker for the entity's kind
///
/// # Errors
/// Returns the first [`AssertionFailure`]
pub fn assert_matches(
    entity: &MaterializedEntity,
    expected: &ComposedRecord,
) -> Result<(), AssertionFailure> {
    match entity {
        MaterializedEntity::User(user) => assert_correct_user(user, expected),
        MaterializedEntity::FavouritePicture(picture) => assert_correct_picture(picture, expected),
    }
}

/// Text as written, anything else via `Display`
fn shown(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(s) => s.clone(),
        other => other.to_string(),
    }
}

fn flag(entity: &'static str, field: &str, want: bool, got: bool) -> Result<(), AssertionFailure> {
    if want == got {
        Ok(())
    } else {
        Err(AssertionFailure::new(entity, field, want, got))
    }
}

fn text(
    entity: &'static str,
    expected: &ComposedRecord,
    field: &str,
    actual: &str,
) -> Result<(), AssertionFailure> {
    match expected.get(field) {
        Some(FieldValue::Text(want)) if want == actual => Ok(()),
        Some(other) => Err(AssertionFailure::new(entity, field, shown(other), actual)),
        None => Err(AssertionFailure::new(entity, field, ABSENT, actual)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_core::EntityMaterializer;
    use gallery_fields::Seed;
    use gallery_store::{EntityKind, InMemoryStore};
    use pretty_assertions::assert_eq;

    fn record() -> ComposedRecord {
        [
            ("email", "ada@example.com"),
            ("first_name", "Ada"),
            ("last_name", "Lovelace"),
            ("date_of_birth", "1990-12-10"),
            ("address", "12 St James's Square"),
            ("job_title", "Analyst"),
            ("phone", "+1-(555)-010-0199"),
            ("password", "engine"),
        ]
        .into_iter()
        .collect()
    }

    fn user_from(fields: &ComposedRecord, kind: EntityKind) -> (InMemoryStore, User) {
        let store = InMemoryStore::new();
        let user = EntityMaterializer::new(&store)
            .materialize(kind, fields, Seed::new(1))
            .unwrap()
            .into_user()
            .unwrap();
        (store, user)
    }

    #[test]
    fn matching_user_passes() {
        let fields = record();
        let (_store, user) = user_from(&fields, EntityKind::ACTIVE_USER);
        assert_eq!(assert_correct_user(&user, &fields), Ok(()));
    }

    #[test]
    fn reports_first_mismatch() {
        let fields = record();
        let (_store, mut user) = user_from(&fields, EntityKind::ACTIVE_USER);
        user.last_name = "Byron".into();
        user.phone = "0".into();

        let failure = assert_correct_user(&user, &fields).unwrap_err();
        assert_eq!(failure.field, "last_name");
        assert_eq!(failure.expected, "Lovelace");
        assert_eq!(failure.actual, "Byron");
    }

    #[test]
    fn inactive_user_fails_active_check() {
        let fields = record();
        let (_store, user) = user_from(&fields, EntityKind::INACTIVE_USER);
        let failure = assert_correct_user(&user, &fields).unwrap_err();
        assert_eq!(failure.field, "is_active");
    }

    #[test]
    fn staff_flags_fail() {
        let fields = record();
        let (_store, mut user) = user_from(&fields, EntityKind::ACTIVE_USER);
        user.is_superuser = true;
        assert_eq!(assert_correct_user(&user, &fields).unwrap_err().field, "is_superuser");
    }

    #[test]
    fn blank_birthday_matches_unset() {
        let mut fields = record();
        fields.insert("date_of_birth", "");
        let (_store, user) = user_from(&fields, EntityKind::ACTIVE_USER);

        assert_eq!(user.date_of_birth, None);
        assert_eq!(assert_correct_user(&user, &fields), Ok(()));
    }

    #[test]
    fn unset_birthday_against_date_fails() {
        let fields = record();
        let (_store, mut user) = user_from(&fields, EntityKind::ACTIVE_USER);
        user.date_of_birth = None;

        let failure = assert_correct_user(&user, &fields).unwrap_err();
        assert_eq!(failure.field, "date_of_birth");
        assert_eq!(failure.expected, "1990-12-10");
    }

    #[test]
    fn missing_expected_field_fails() {
        let fields = record();
        let (_store, user) = user_from(&fields, EntityKind::ACTIVE_USER);
        let partial: ComposedRecord = fields
            .iter()
            .filter(|(k, _)| *k != "phone")
            .map(|(k, v)| (k, v.clone()))
            .collect();

        let failure = assert_correct_user(&user, &partial).unwrap_err();
        assert_eq!((failure.field.as_str(), failure.expected.as_str()), ("phone", ABSENT));
    }

    #[test]
    fn picture_checks_foreign_id_and_url() {
        let (store, user) = user_from(&record(), EntityKind::ACTIVE_USER);
        let mut fields: ComposedRecord = [("url", "https://pics-example.com/")].into_iter().collect();
        fields.insert("foreign_id", 7_i64);
        fields.insert("user", user.id);

        let entity = EntityMaterializer::new(&store)
            .materialize(EntityKind::FavouritePicture, &fields, Seed::new(2))
            .unwrap();
        assert_eq!(assert_matches(&entity, &fields), Ok(()));

        let mut other = fields.clone();
        other.insert("foreign_id", "8");
        assert_eq!(assert_matches(&entity, &other).unwrap_err().field, "foreign_id");
    }

    #[test]
    fn failure_display() {
        let failure = AssertionFailure::new("user", "phone", "1", "2");
        assert_eq!(failure.to_string(), "user.phone: expected 1, got 2");
    }
}
