//! Built-in templates for the identity and pictures feature areas

use crate::template::{FieldSpec, Template};
use chrono::{Datelike, Utc};
use gallery_fields::{FieldKind, Params};

/// Format of `date_of_birth` in records and forms
pub const USER_BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// How many years back a generated birthday may reach
pub const DEFAULT_BIRTH_YEAR_SPAN: i32 = 80;

/// Name of the user data template
pub const USER_DATA: &str = "user_data";
/// Name of the full user model template
pub const USER_MODEL: &str = "user_model";
/// Name of the favourite picture template
pub const FAVOURITE_PICTURE: &str = "favourite_picture";

/// User data accepted at registration, without passwords
///
/// `date_of_birth` is always before 1 January of the current year.
#[must_use]
pub fn user_data() -> Template {
    user_data_spanning(DEFAULT_BIRTH_YEAR_SPAN)
}

/// User data with birthdays reaching `years` back from the current year
#[must_use]
pub fn user_data_spanning(years: i32) -> Template {
    let end = Utc::now().year();
    let birthday = Params::new()
        .with_fmt(USER_BIRTHDAY_FORMAT)
        .with_start(end - years.max(1))
        .with_end(end);

    Template::new(USER_DATA)
        .field("email", FieldSpec::new(FieldKind::Email.id()))
        .field("first_name", FieldSpec::new(FieldKind::FirstName.id()))
        .field("last_name", FieldSpec::new(FieldKind::LastName.id()))
        .field(
            "date_of_birth",
            FieldSpec::new(FieldKind::FormattedDate.id()).with_params(birthday),
        )
        .field("address", FieldSpec::new(FieldKind::Address.id()))
        .field("job_title", FieldSpec::new(FieldKind::Occupation.id()))
        .field("phone", FieldSpec::new(FieldKind::Telephone.id()))
}

/// Every user attribute the materializer can fill, password included
#[must_use]
pub fn user_model(password_length: usize, birth_year_span: i32) -> Template {
    let mut template = Template::new(USER_MODEL);
    for (field, spec) in user_data_spanning(birth_year_span).iter() {
        template = template.field(field, spec.clone());
    }
    template.field(
        "password",
        FieldSpec::new(FieldKind::Password.id())
            .with_params(Params::new().with_length(password_length)),
    )
}

/// Fields of a favourite picture
#[must_use]
pub fn favourite_picture() -> Template {
    Template::new(FAVOURITE_PICTURE)
        .field("foreign_id", FieldSpec::new(FieldKind::Increment.id()))
        .field("url", FieldSpec::new(FieldKind::Url.id()))
}
