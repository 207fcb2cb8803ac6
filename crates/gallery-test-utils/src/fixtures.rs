//! Per-test fixture session
//!
//! A [`FixtureSession`] owns everything one test shares: the seed, the
//! generator every record factory draws from, and a fresh store. Each
//! fixture is computed on first use and then cached, so a test asking for
//! `user_email()` twice gets the same address, and `user()` reuses it.

use gallery_core::{
    ConfigError, EntityFactory, EntityMaterializer, FixtureConfig, MaterializeError,
    SeededEntityFactory,
};
use gallery_fields::{FieldError, FieldGenerator, FieldKind, FieldValue, Params, Seed};
use gallery_schema::{
    templates, ComposedRecord, OverrideSet, RecordFactory, SharedGenerator, TemplateFactory,
};
use gallery_store::{
    ConstraintViolation, EntityKind, FavouritePicture, InMemoryStore, MaterializedEntity, User,
};
use once_cell::unsync::OnceCell;
use std::cell::RefCell;
use std::rc::Rc;

/// Fixture setup failure
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// Bad configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Generator failure
    #[error(transparent)]
    Field(#[from] FieldError),

    /// Entity could not be created
    #[error(transparent)]
    Materialize(#[from] MaterializeError),

    /// Store returned a different entity than requested
    #[error("expected {expected}, got {actual}")]
    WrongEntity {
        /// Requested entity
        expected: &'static str,
        /// Returned entity
        actual: &'static str,
    },
}

impl FixtureError {
    /// Store rejection behind this error, if any
    #[must_use]
    pub fn as_violation(&self) -> Option<&ConstraintViolation> {
        match self {
            Self::Materialize(e) => e.as_violation(),
            _ => None,
        }
    }
}

/// Fixtures shared by one test
#[derive(Debug)]
pub struct FixtureSession {
    config: FixtureConfig,
    mf: SharedGenerator,
    store: InMemoryStore,
    user_password: OnceCell<String>,
    user_second_password: OnceCell<String>,
    user_email: OnceCell<String>,
    user_data: OnceCell<ComposedRecord>,
    user: OnceCell<User>,
    user_inactive: OnceCell<User>,
    favourite_picture_fields: OnceCell<ComposedRecord>,
}

impl FixtureSession {
    /// Create session
    ///
    /// # Errors
    /// Returns [`FixtureError::Config`] if `config` is invalid
    pub fn new(config: FixtureConfig) -> Result<Self, FixtureError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Session with default settings and `seed`
    #[must_use]
    pub fn with_seed(seed: impl Into<Seed>) -> Self {
        Self::build(FixtureConfig::new().with_seed(seed))
    }

    fn build(config: FixtureConfig) -> Self {
        tracing::debug!(seed = %config.seed, "fixture session");
        Self {
            mf: Rc::new(RefCell::new(FieldGenerator::new(config.seed))),
            config,
            store: InMemoryStore::new(),
            user_password: OnceCell::new(),
            user_second_password: OnceCell::new(),
            user_email: OnceCell::new(),
            user_data: OnceCell::new(),
            user: OnceCell::new(),
            user_inactive: OnceCell::new(),
            favourite_picture_fields: OnceCell::new(),
        }
    }

    /// Session configured from the environment
    ///
    /// # Errors
    /// Returns [`FixtureError::Config`] if the environment is invalid
    pub fn from_env() -> Result<Self, FixtureError> {
        Self::new(FixtureConfig::from_env()?)
    }

    /// Session seed
    #[inline]
    #[must_use]
    pub fn seed(&self) -> Seed {
        self.config.seed
    }

    /// Session configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &FixtureConfig {
        &self.config
    }

    /// Store backing this session
    #[inline]
    #[must_use]
    pub fn store(&self) -> &InMemoryStore {
        &self.store
    }

    /// Shared generator
    #[inline]
    #[must_use]
    pub fn mf(&self) -> SharedGenerator {
        Rc::clone(&self.mf)
    }

    /// Draw one value of `kind` from the shared generator
    ///
    /// # Errors
    /// Propagates [`FieldError`]
    pub fn draw(&self, kind: FieldKind, params: &Params) -> Result<FieldValue, FieldError> {
        self.mf.borrow_mut().generate_kind(kind, params)
    }

    fn draw_text(&self, kind: FieldKind, params: &Params) -> Result<String, FixtureError> {
        match self.draw(kind, params)? {
            FieldValue::Text(text) => Ok(text),
            other => Ok(other.to_string()),
        }
    }

    fn password_params(&self) -> Params {
        Params::new().with_length(self.config.password_length)
    }

    /// Materializer writing to this session's store
    #[must_use]
    pub fn materializer(&self) -> EntityMaterializer<'_, InMemoryStore> {
        EntityMaterializer::with_config(&self.store, self.config.clone())
    }

    /// Create one entity of `kind` seeded with the session seed
    ///
    /// # Errors
    /// Returns [`FixtureError::Materialize`] if creation fails
    pub fn make(
        &self,
        kind: EntityKind,
        fields: Option<OverrideSet>,
    ) -> Result<MaterializedEntity, FixtureError> {
        let materializer = self.materializer();
        let factory = SeededEntityFactory::new(&materializer, kind, self.seed());
        Ok(factory.create(fields)?)
    }

    /// Factory for user registration data
    #[must_use]
    pub fn user_data_factory(&self) -> TemplateFactory {
        TemplateFactory::new(
            templates::user_data_spanning(self.config.birth_year_span),
            self.mf(),
        )
    }

    /// Cached user registration data
    ///
    /// # Errors
    /// Propagates [`FieldError`]
    pub fn user_data(&self) -> Result<&ComposedRecord, FixtureError> {
        self.user_data
            .get_or_try_init(|| Ok(self.user_data_factory().build_default()?))
    }

    /// User data plus matching `password1` and `password2`
    ///
    /// # Errors
    /// Propagates [`FieldError`]
    pub fn registration_data(&self) -> Result<ComposedRecord, FixtureError> {
        let password = self.user_password()?.to_string();
        let overrides = OverrideSet::new()
            .with("password1", password.as_str())
            .with("password2", password);
        Ok(self.user_data()?.merged(&overrides))
    }

    /// Cached password
    ///
    /// # Errors
    /// Propagates [`FieldError`]
    pub fn user_password(&self) -> Result<&str, FixtureError> {
        self.user_password
            .get_or_try_init(|| self.draw_text(FieldKind::Password, &self.password_params()))
            .map(String::as_str)
    }

    /// Cached second password, drawn separately from [`Self::user_password`]
    ///
    /// # Errors
    /// Propagates [`FieldError`]
    pub fn user_second_password(&self) -> Result<&str, FixtureError> {
        self.user_second_password
            .get_or_try_init(|| self.draw_text(FieldKind::Password, &self.password_params()))
            .map(String::as_str)
    }

    /// Cached email
    ///
    /// # Errors
    /// Propagates [`FieldError`]
    pub fn user_email(&self) -> Result<&str, FixtureError> {
        self.user_email
            .get_or_try_init(|| self.draw_text(FieldKind::Email, &Params::new()))
            .map(String::as_str)
    }

    /// Cached active user with [`Self::user_email`] and [`Self::user_password`]
    ///
    /// # Errors
    /// Returns [`FixtureError`] if the user cannot be created
    pub fn user(&self) -> Result<&User, FixtureError> {
        self.user
            .get_or_try_init(|| self.login_user(EntityKind::ACTIVE_USER))
    }

    /// Cached inactive user with [`Self::user_email`] and [`Self::user_password`]
    ///
    /// Shares its email with [`Self::user`]; a test wants one or the other.
    ///
    /// # Errors
    /// Returns [`FixtureError`] if the user cannot be created
    pub fn user_inactive(&self) -> Result<&User, FixtureError> {
        self.user_inactive
            .get_or_try_init(|| self.login_user(EntityKind::INACTIVE_USER))
    }

    fn login_user(&self, kind: EntityKind) -> Result<User, FixtureError> {
        let fields = OverrideSet::new()
            .with("email", self.user_email()?)
            .with("password", self.user_password()?);
        let entity = self.make(kind, Some(fields))?;
        let actual = entity.entity_name();
        entity.into_user().ok_or(FixtureError::WrongEntity {
            expected: User::ENTITY,
            actual,
        })
    }

    /// Factory for favourite picture fields
    #[must_use]
    pub fn favourite_picture_fields_factory(&self) -> TemplateFactory {
        TemplateFactory::new(templates::favourite_picture(), self.mf())
    }

    /// Cached favourite picture fields
    ///
    /// # Errors
    /// Propagates [`FieldError`]
    pub fn favourite_picture_fields(&self) -> Result<&ComposedRecord, FixtureError> {
        self.favourite_picture_fields
            .get_or_try_init(|| Ok(self.favourite_picture_fields_factory().build_default()?))
    }

    /// Persist a favourite picture, filling what `fields` leaves out
    ///
    /// `fields` must name the owning `user`.
    ///
    /// # Errors
    /// Returns [`FixtureError`] if the picture cannot be created
    pub fn favourite_picture(
        &self,
        fields: Option<OverrideSet>,
    ) -> Result<FavouritePicture, FixtureError> {
        let entity = self.make(EntityKind::FavouritePicture, fields)?;
        let actual = entity.entity_name();
        entity
            .into_favourite_picture()
            .ok_or(FixtureError::WrongEntity {
                expected: FavouritePicture::ENTITY,
                actual,
            })
    }
}

impl Default for FixtureSession {
    fn default() -> Self {
        Self::with_seed(Seed::default())
    }
}
