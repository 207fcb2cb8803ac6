//! Domain entities owned by the persistence layer

use crate::password::PasswordHash;
use chrono::NaiveDate;
use gallery_fields::FieldValue;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use uuid::Uuid;

/// Identity of a persisted entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    /// Generate new id
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Whether the id is the nil placeholder
    #[inline]
    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for EntityId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<EntityId> for FieldValue {
    fn from(id: EntityId) -> Self {
        FieldValue::Ref(id.0)
    }
}

/// Kind of entity to create
///
/// The account state of a user is always chosen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Identity user account
    User {
        /// Whether the account can log in
        is_active: bool,
    },
    /// Picture a user marked as favourite
    FavouritePicture,
}

impl EntityKind {
    /// Active user account
    pub const ACTIVE_USER: EntityKind = EntityKind::User { is_active: true };
    /// Inactive user account
    pub const INACTIVE_USER: EntityKind = EntityKind::User { is_active: false };

    /// Entity name used in diagnostics
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EntityKind::User { .. } => User::ENTITY,
            EntityKind::FavouritePicture => FavouritePicture::ENTITY,
        }
    }
}

/// Identity user account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Primary key
    pub id: EntityId,
    /// Login name, unique after domain normalization
    pub email: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Date of birth, unset when left blank
    pub date_of_birth: Option<NaiveDate>,
    /// Postal address
    pub address: String,
    /// Job title
    pub job_title: String,
    /// Phone number
    pub phone: String,
    /// Whether the account can log in
    pub is_active: bool,
    /// Staff flag
    pub is_staff: bool,
    /// Superuser flag
    pub is_superuser: bool,
    pub(crate) password: PasswordHash,
}

impl User {
    /// Entity name
    pub const ENTITY: &'static str = "user";
    /// Field used as the login name
    pub const USERNAME_FIELD: &'static str = "email";
    /// Fields that must be non-blank besides the username field
    pub const REQUIRED_FIELDS: [&'static str; 2] = ["first_name", "last_name"];

    /// Check `raw` against the stored password hash
    #[inline]
    #[must_use]
    pub fn check_password(&self, raw: &str) -> bool {
        self.password.verify(raw)
    }

    /// Whether a usable password is set
    #[inline]
    #[must_use]
    pub fn has_usable_password(&self) -> bool {
        self.password.is_usable()
    }

    /// Encoded password hash
    #[inline]
    #[must_use]
    pub fn password_hash(&self) -> &str {
        self.password.as_str()
    }
}

/// Picture a user marked as favourite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavouritePicture {
    /// Primary key
    pub id: EntityId,
    /// Owning user
    pub user: EntityId,
    /// Id of the picture in the placeholder API
    pub foreign_id: i64,
    /// Picture url
    pub url: String,
}

impl FavouritePicture {
    /// Entity name
    pub const ENTITY: &'static str = "favourite_picture";
}

/// Entity returned by the persistence layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaterializedEntity {
    /// A user account
    User(User),
    /// A favourite picture
    FavouritePicture(FavouritePicture),
}

impl MaterializedEntity {
    /// Entity id
    #[must_use]
    pub fn id(&self) -> EntityId {
        match self {
            Self::User(user) => user.id,
            Self::FavouritePicture(picture) => picture.id,
        }
    }

    /// Entity name
    #[must_use]
    pub fn entity_name(&self) -> &'static str {
        match self {
            Self::User(_) => User::ENTITY,
            Self::FavouritePicture(_) => FavouritePicture::ENTITY,
        }
    }

    /// Borrow as user
    #[must_use]
    pub fn as_user(&self) -> Option<&User> {
        match self {
            Self::User(user) => Some(user),
            Self::FavouritePicture(_) => None,
        }
    }

    /// Borrow as favourite picture
    #[must_use]
    pub fn as_favourite_picture(&self) -> Option<&FavouritePicture> {
        match self {
            Self::FavouritePicture(picture) => Some(picture),
            Self::User(_) => None,
        }
    }

    /// Take the user out
    #[must_use]
    pub fn into_user(self) -> Option<User> {
        match self {
            Self::User(user) => Some(user),
            Self::FavouritePicture(_) => None,
        }
    }

    /// Take the favourite picture out
    #[must_use]
    pub fn into_favourite_picture(self) -> Option<FavouritePicture> {
        match self {
            Self::FavouritePicture(picture) => Some(picture),
            Self::User(_) => None,
        }
    }
}
