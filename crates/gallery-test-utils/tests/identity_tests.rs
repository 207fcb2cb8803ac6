use anyhow::Context;
use gallery_core::prelude::*;
use gallery_test_utils::{assert_correct_user, init_tracing, FixtureSession};
use pretty_assertions::assert_eq;

fn session() -> FixtureSession {
    init_tracing();
    FixtureSession::default()
}

fn register(session: &FixtureSession, fields: &ComposedRecord) -> Result<User, MaterializeError> {
    let entity = session
        .materializer()
        .materialize(EntityKind::ACTIVE_USER, fields, session.seed())?;
    Ok(entity.into_user().unwrap_or_else(|| unreachable!("user kind yields a user")))
}

#[test]
fn test_valid_registration() -> anyhow::Result<()> {
    let session = session();
    let data = session.registration_data()?;

    register(&session, &data)?;

    let email = data.text("email").context("registration data has an email")?;
    let user = session
        .store()
        .user_by_email(email)
        .context("registered user is stored")?;
    assert!(user.check_password(session.user_password()?));
    assert_correct_user(&user, &data)?;
    Ok(())
}

#[test]
fn test_registration_missing_required_field() {
    let required = User::REQUIRED_FIELDS
        .iter()
        .copied()
        .chain([User::USERNAME_FIELD]);

    for missing in required {
        let session = session();
        let data = session
            .registration_data()
            .unwrap()
            .merged(&OverrideSet::new().with(missing, ""));

        let err = register(&session, &data).unwrap_err();
        let violation = err.as_violation().unwrap();

        assert!(matches!(violation, ConstraintViolation::MissingField { .. }));
        assert_eq!(violation.field(), missing);
        assert_eq!(session.store().user_count(), 0);
    }
}

#[test]
fn test_invalid_password_registration() {
    let session = session();
    let second = session.user_second_password().unwrap().to_string();
    let data = session
        .registration_data()
        .unwrap()
        .merged(&OverrideSet::new().with("password2", second));

    let err = register(&session, &data).unwrap_err();

    assert_eq!(err.as_violation(), Some(&ConstraintViolation::PasswordMismatch));
    assert_eq!(err.as_violation().map(ConstraintViolation::field), Some("password2"));
    assert!(session
        .store()
        .user_by_email(data.text("email").unwrap())
        .is_none());
}

#[test]
fn test_valid_credentials_login() {
    let session = session();
    let user = session.user().unwrap();

    let found = session.store().user_by_email(&user.email).unwrap();
    assert!(found.is_active);
    assert!(found.check_password(session.user_password().unwrap()));
}

#[test]
fn test_invalid_credentials_login() {
    let session = session();
    let user = session.user().unwrap();

    assert!(session.store().user_by_email("invalid").is_none());
    assert!(!user.check_password("invalid"));
}

#[test]
fn test_inactive_user_login() {
    let session = session();
    let user = session.user_inactive().unwrap();

    assert!(user.check_password(session.user_password().unwrap()));
    assert!(!session.store().user_by_email(&user.email).unwrap().is_active);
}

#[test]
fn test_email_domain_is_case_insensitive() {
    let session = session();
    let user = session.user().unwrap();
    let (local, domain) = user.email.rsplit_once('@').unwrap();
    let shouted = format!("{local}@{}", domain.to_uppercase());

    assert_eq!(session.store().user_by_email(&shouted).map(|u| u.id), Some(user.id));
}

#[test]
fn test_composed_registration_materializes_active() {
    let session = session();
    let mut composer = SchemaComposer::from_generator(FieldGenerator::new(session.seed()));
    let fields = composer
        .compose(&templates::user_data(), &OverrideSet::new())
        .unwrap();

    let entity = session
        .materializer()
        .materialize(EntityKind::ACTIVE_USER, &fields, session.seed())
        .unwrap();

    assert!(!entity.id().is_nil());
    assert!(entity.as_user().unwrap().is_active);
}

#[test]
fn test_blank_birthday_stays_unset() {
    let session = session();
    let fields = SchemaComposer::new(session.seed())
        .compose(
            &templates::user_data(),
            &OverrideSet::new().with("date_of_birth", ""),
        )
        .unwrap();

    let user = register(&session, &fields).unwrap();

    assert_eq!(user.date_of_birth, None);
    assert_eq!(assert_correct_user(&user, &fields), Ok(()));
}

#[test]
fn test_duplicate_email_rejected() {
    let session = session();
    let fields: ComposedRecord = [("email", "twice@example.com")].into_iter().collect();
    let materializer = session.materializer();

    materializer
        .materialize(EntityKind::ACTIVE_USER, &fields, Seed::new(1))
        .unwrap();
    let err = materializer
        .materialize(EntityKind::INACTIVE_USER, &fields, Seed::new(2))
        .unwrap_err();

    assert!(!err.is_fixture_bug());
    assert!(matches!(
        err.as_violation(),
        Some(ConstraintViolation::Duplicate { field: "email", .. })
    ));
    assert_eq!(session.store().user_count(), 1);
}

#[test]
fn test_registration_payload_is_flat_text() {
    let session = session();
    let payload = serde_json::to_value(session.registration_data().unwrap()).unwrap();
    let object = payload.as_object().unwrap();

    assert_eq!(object.len(), 9);
    assert!(object.values().all(serde_json::Value::is_string));
    assert_eq!(object["password1"], object["password2"]);
}
