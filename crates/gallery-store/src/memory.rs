//! In-memory persistence
//!
//! Provides [`InMemoryStore`], the persistence layer tests run against. One
//! store lives for one test; dropping it discards everything it created.

use crate::error::ConstraintViolation;
use crate::fields::FieldReader;
use crate::model::{EntityId, EntityKind, FavouritePicture, MaterializedEntity, User};
use crate::password::PasswordHash;
use crate::persistence::Persistence;
use chrono::{NaiveDate, Utc};
use gallery_fields::FieldValue;
use gallery_schema::{ComposedRecord, USER_BIRTHDAY_FORMAT};
use parking_lot::RwLock;
use std::collections::HashMap;

const USER_FIELDS: &[&str] = &[
    "email",
    "first_name",
    "last_name",
    "date_of_birth",
    "address",
    "job_title",
    "phone",
    "is_active",
    "is_staff",
    "is_superuser",
    "password",
    "password1",
    "password2",
];

const PICTURE_FIELDS: &[&str] = &["user", "foreign_id", "url"];

#[derive(Debug, Default)]
struct StoreState {
    users: HashMap<EntityId, User>,
    emails: HashMap<String, EntityId>,
    pictures: Vec<FavouritePicture>,
}

/// Persistence layer backed by process memory
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: RwLock<StoreState>,
}

impl InMemoryStore {
    /// Create empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of persisted users
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.state.read().users.len()
    }

    /// Number of persisted favourite pictures
    #[must_use]
    pub fn picture_count(&self) -> usize {
        self.state.read().pictures.len()
    }

    fn create_user(
        &self,
        is_active: bool,
        fields: &ComposedRecord,
    ) -> Result<User, ConstraintViolation> {
        let reader = FieldReader::new(User::ENTITY, fields);
        reader.only(USER_FIELDS)?;

        let email = normalize_email(reader.required_text(User::USERNAME_FIELD)?);
        for field in User::REQUIRED_FIELDS {
            reader.required_text(field)?;
        }

        if let Some(requested) = reader.flag("is_active")? {
            if requested != is_active {
                return Err(ConstraintViolation::invalid(
                    User::ENTITY,
                    "is_active",
                    "conflicts with the requested account state",
                ));
            }
        }

        let user = User {
            id: EntityId::new(),
            first_name: reader.text_or_blank("first_name")?,
            last_name: reader.text_or_blank("last_name")?,
            date_of_birth: date_of_birth(&reader)?,
            address: reader.text_or_blank("address")?,
            job_title: reader.text_or_blank("job_title")?,
            phone: reader.text_or_blank("phone")?,
            is_active,
            is_staff: reader.flag("is_staff")?.unwrap_or(false),
            is_superuser: reader.flag("is_superuser")?.unwrap_or(false),
            password: password(&reader)?,
            email,
        };

        let mut state = self.state.write();
        if state.emails.contains_key(&user.email) {
            return Err(ConstraintViolation::Duplicate {
                entity: User::ENTITY,
                field: User::USERNAME_FIELD,
                value: user.email,
            });
        }
        state.emails.insert(user.email.clone(), user.id);
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    fn create_picture(
        &self,
        fields: &ComposedRecord,
    ) -> Result<FavouritePicture, ConstraintViolation> {
        let reader = FieldReader::new(FavouritePicture::ENTITY, fields);
        reader.only(PICTURE_FIELDS)?;

        let picture = FavouritePicture {
            id: EntityId::new(),
            user: reader.required_ref("user")?,
            foreign_id: reader.required_integer("foreign_id")?,
            url: reader.required_text("url")?.to_string(),
        };

        let mut state = self.state.write();
        if !state.users.contains_key(&picture.user) {
            return Err(ConstraintViolation::UnknownReference {
                field: "user".to_string(),
                id: picture.user,
            });
        }
        state.pictures.push(picture.clone());
        Ok(picture)
    }
}

impl Persistence for InMemoryStore {
    fn create(
        &self,
        kind: EntityKind,
        fields: &ComposedRecord,
    ) -> Result<MaterializedEntity, ConstraintViolation> {
        let created = match kind {
            EntityKind::User { is_active } => {
                self.create_user(is_active, fields).map(MaterializedEntity::User)
            }
            EntityKind::FavouritePicture => self
                .create_picture(fields)
                .map(MaterializedEntity::FavouritePicture),
        };

        match &created {
            Ok(entity) => tracing::debug!(entity = entity.entity_name(), id = %entity.id(), "persisted"),
            Err(violation) => {
                tracing::warn!(entity = kind.name(), field = violation.field(), "rejected: {violation}");
            }
        }
        created
    }

    fn user_by_email(&self, email: &str) -> Option<User> {
        let state = self.state.read();
        let id = state.emails.get(&normalize_email(email))?;
        state.users.get(id).cloned()
    }

    fn user_by_id(&self, id: EntityId) -> Option<User> {
        self.state.read().users.get(&id).cloned()
    }

    fn pictures_owned_by(&self, owner: EntityId) -> Vec<FavouritePicture> {
        self.state
            .read()
            .pictures
            .iter()
            .filter(|picture| picture.user == owner)
            .cloned()
            .collect()
    }

    fn picture_exists(&self, owner: EntityId, fields: &ComposedRecord) -> bool {
        self.state
            .read()
            .pictures
            .iter()
            .filter(|picture| picture.user == owner)
            .any(|picture| fields.iter().all(|(field, value)| picture_matches(picture, field, value)))
    }
}

/// Lowercase the domain part, keep the local part as given
fn normalize_email(email: &str) -> String {
    let email = email.trim();
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_lowercase()),
        None => email.to_string(),
    }
}

fn date_of_birth(reader: &FieldReader<'_>) -> Result<Option<NaiveDate>, ConstraintViolation> {
    let raw = match reader.text("date_of_birth")? {
        Some(raw) if !raw.trim().is_empty() => raw.trim(),
        _ => return Ok(None),
    };
    let date = NaiveDate::parse_from_str(raw, USER_BIRTHDAY_FORMAT).map_err(|e| {
        ConstraintViolation::invalid(User::ENTITY, "date_of_birth", format!("{raw:?}: {e}"))
    })?;
    if date >= Utc::now().date_naive() {
        return Err(ConstraintViolation::invalid(
            User::ENTITY,
            "date_of_birth",
            "must be in the past",
        ));
    }
    Ok(Some(date))
}

/// `password` wins; otherwise `password1`/`password2` must both be given and agree
fn password(reader: &FieldReader<'_>) -> Result<PasswordHash, ConstraintViolation> {
    if reader.text("password")?.is_some() {
        return Ok(PasswordHash::new(reader.required_text("password")?));
    }

    match (reader.text("password1")?, reader.text("password2")?) {
        (None, None) => Ok(PasswordHash::unusable()),
        _ => {
            let first = reader.required_text("password1")?;
            let second = reader.required_text("password2")?;
            if first != second {
                return Err(ConstraintViolation::PasswordMismatch);
            }
            Ok(PasswordHash::new(first))
        }
    }
}

fn picture_matches(picture: &FavouritePicture, field: &str, value: &FieldValue) -> bool {
    match (field, value) {
        ("user", FieldValue::Ref(id)) => picture.user.0 == *id,
        ("foreign_id", FieldValue::Integer(n)) => picture.foreign_id == *n,
        ("foreign_id", FieldValue::Text(s)) => s.trim().parse::<i64>().ok() == Some(picture.foreign_id),
        ("url", FieldValue::Text(s)) => picture.url == *s,
        _ => false,
    }
}
