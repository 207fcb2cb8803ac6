//! Generator kind vocabulary and parameters

use crate::error::FieldError;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Kinds of values the generator knows how to draw
///
/// Identified externally by dotted ids (`person.email`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// `person.email`
    Email,
    /// `person.first_name`
    FirstName,
    /// `person.last_name`
    LastName,
    /// `datetime.formatted_date`
    FormattedDate,
    /// `address.address`
    Address,
    /// `person.occupation`
    Occupation,
    /// `person.telephone`
    Telephone,
    /// `internet.url`
    Url,
    /// `numeric.increment`
    Increment,
    /// `person.password`
    Password,
}

impl FieldKind {
    /// Every supported kind
    pub const ALL: [FieldKind; 10] = [
        FieldKind::Email,
        FieldKind::FirstName,
        FieldKind::LastName,
        FieldKind::FormattedDate,
        FieldKind::Address,
        FieldKind::Occupation,
        FieldKind::Telephone,
        FieldKind::Url,
        FieldKind::Increment,
        FieldKind::Password,
    ];

    /// Dotted kind id
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            FieldKind::Email => "person.email",
            FieldKind::FirstName => "person.first_name",
            FieldKind::LastName => "person.last_name",
            FieldKind::FormattedDate => "datetime.formatted_date",
            FieldKind::Address => "address.address",
            FieldKind::Occupation => "person.occupation",
            FieldKind::Telephone => "person.telephone",
            FieldKind::Url => "internet.url",
            FieldKind::Increment => "numeric.increment",
            FieldKind::Password => "person.password",
        }
    }
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for FieldKind {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKind::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| FieldError::UnsupportedKind(s.to_string()))
    }
}

/// Optional generator parameters
///
/// Kinds ignore parameters they do not use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    /// strftime format for dates
    pub fmt: Option<String>,
    /// Inclusive lower year bound for dates
    pub start: Option<i32>,
    /// Exclusive upper year bound for dates
    pub end: Option<i32>,
    /// Length of generated passwords
    pub length: Option<usize>,
}

impl Params {
    /// Empty parameter set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With date format
    #[inline]
    #[must_use]
    pub fn with_fmt(mut self, fmt: impl Into<String>) -> Self {
        self.fmt = Some(fmt.into());
        self
    }

    /// With inclusive lower year bound
    #[inline]
    #[must_use]
    pub fn with_start(mut self, year: i32) -> Self {
        self.start = Some(year);
        self
    }

    /// With exclusive upper year bound
    #[inline]
    #[must_use]
    pub fn with_end(mut self, year: i32) -> Self {
        self.end = Some(year);
        self
    }

    /// With password length
    #[inline]
    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }
}
