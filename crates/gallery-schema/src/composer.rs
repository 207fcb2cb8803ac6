//! Template composition
//!
//! Composition is a single generation pass followed by a merge:
//!
//! 1. every [`FieldSpec`](crate::FieldSpec) in the template is resolved once,
//!    in template order
//! 2. overrides are applied on top, so `result[k] = overrides[k]` whenever the
//!    key is overridden
//!
//! Overrides never feed into generation, so the draws a template consumes do
//! not depend on what the caller overrides.

use crate::record::{ComposedRecord, OverrideSet};
use crate::template::Template;
use gallery_fields::{FieldError, FieldGenerator, Seed};

/// Compose `template` with `overrides` using a borrowed generator
///
/// # Errors
/// Propagates [`FieldError`] from the generator
pub fn compose_with(
    generator: &mut FieldGenerator,
    template: &Template,
    overrides: &OverrideSet,
) -> Result<ComposedRecord, FieldError> {
    let mut record = ComposedRecord::new();
    for (field, spec) in template.iter() {
        record.insert(field, spec.resolve(generator)?);
    }

    let record = record.merged(overrides);
    tracing::debug!(
        template = template.name(),
        fields = record.len(),
        overrides = overrides.len(),
        "composed record"
    );
    Ok(record)
}

/// Composer owning its seeded generator
#[derive(Debug, Clone)]
pub struct SchemaComposer {
    generator: FieldGenerator,
}

impl SchemaComposer {
    /// Create composer with a fresh generator
    #[inline]
    #[must_use]
    pub fn new(seed: Seed) -> Self {
        Self::from_generator(FieldGenerator::new(seed))
    }

    /// Wrap an existing generator
    #[inline]
    #[must_use]
    pub fn from_generator(generator: FieldGenerator) -> Self {
        Self { generator }
    }

    /// Generator backing this composer
    #[inline]
    #[must_use]
    pub fn generator(&self) -> &FieldGenerator {
        &self.generator
    }

    /// Compose a record
    ///
    /// # Errors
    /// Propagates [`FieldError`] from the generator
    pub fn compose(
        &mut self,
        template: &Template,
        overrides: &OverrideSet,
    ) -> Result<ComposedRecord, FieldError> {
        compose_with(&mut self.generator, template, overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::FieldSpec;
    use gallery_fields::FieldValue;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn template() -> Template {
        Template::new("sample")
            .field("email", FieldSpec::new("person.email"))
            .field("first_name", FieldSpec::new("person.first_name"))
            .field("foreign_id", FieldSpec::new("numeric.increment"))
    }

    #[test]
    fn same_seed_composes_identically() {
        let a = SchemaComposer::new(Seed::new(5))
            .compose(&template(), &OverrideSet::new())
            .unwrap();
        let b = SchemaComposer::new(Seed::new(5))
            .compose(&template(), &OverrideSet::new())
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn keys_are_template_then_passthrough() {
        let overrides = OverrideSet::new()
            .with("password2", "p")
            .with("email", "x@example.com");
        let record = SchemaComposer::new(Seed::new(5))
            .compose(&template(), &overrides)
            .unwrap();
        let keys: Vec<_> = record.keys().collect();
        assert_eq!(keys, vec!["email", "first_name", "foreign_id", "password2"]);
        assert_eq!(record.text("email"), Some("x@example.com"));
    }

    #[test]
    fn each_spec_is_drawn_once() {
        let mut composer = SchemaComposer::new(Seed::new(5));
        let record = composer
            .compose(&template(), &OverrideSet::new().with("email", "fixed@example.com"))
            .unwrap();
        assert_eq!(composer.generator().draws(), 3);
        assert_eq!(record.get("foreign_id"), Some(&FieldValue::Integer(1)));
    }

    #[test]
    fn overrides_do_not_shift_generated_fields() {
        let plain = SchemaComposer::new(Seed::new(6))
            .compose(&template(), &OverrideSet::new())
            .unwrap();
        let overridden = SchemaComposer::new(Seed::new(6))
            .compose(&template(), &OverrideSet::new().with("email", ""))
            .unwrap();
        assert_eq!(plain.get("first_name"), overridden.get("first_name"));
        assert_eq!(plain.get("foreign_id"), overridden.get("foreign_id"));
    }

    #[test]
    fn unsupported_kind_propagates() {
        let broken = Template::new("broken").field("nick", FieldSpec::new("person.nickname"));
        let err = SchemaComposer::new(Seed::new(1))
            .compose(&broken, &OverrideSet::new())
            .unwrap_err();
        assert_eq!(err, FieldError::UnsupportedKind("person.nickname".to_string()));
    }

    proptest! {
        #[test]
        fn prop_override_precedence(seed in any::<u64>(), value in ".*") {
            let overrides = OverrideSet::new().with("first_name", value.clone());
            let record = SchemaComposer::new(Seed::new(seed))
                .compose(&template(), &overrides)
                .unwrap();
            prop_assert_eq!(record.text("first_name"), Some(value.as_str()));
        }

        #[test]
        fn prop_passthrough_keys_survive(seed in any::<u64>(), key in "[a-z_]{1,12}", n in any::<i64>()) {
            prop_assume!(!template().contains(&key));
            let mut composer = SchemaComposer::new(Seed::new(seed));
            let record = composer
                .compose(&template(), &OverrideSet::new().with(key.clone(), n))
                .unwrap();
            prop_assert_eq!(record.get(&key), Some(&FieldValue::Integer(n)));
            prop_assert_eq!(composer.generator().draws(), 3);
        }
    }
}
