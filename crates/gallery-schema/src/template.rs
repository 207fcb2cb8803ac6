//! Field templates
//!
//! A [`Template`] is an ordered set of named [`FieldSpec`]s describing the
//! fixture shape of one entity kind.

use gallery_fields::{FieldError, FieldGenerator, FieldValue, Params};
use indexmap::IndexMap;

/// A named generator request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    kind: String,
    params: Params,
}

impl FieldSpec {
    /// Request a kind with default parameters
    #[inline]
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            params: Params::default(),
        }
    }

    /// With generator parameters
    #[inline]
    #[must_use]
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Dotted kind id
    #[inline]
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Generator parameters
    #[inline]
    #[must_use]
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Draw one value for this spec
    ///
    /// # Errors
    /// Propagates [`FieldError`] from the generator
    #[inline]
    pub fn resolve(&self, generator: &mut FieldGenerator) -> Result<FieldValue, FieldError> {
        generator.generate(&self.kind, &self.params)
    }
}

/// Ordered mapping of field name to generator request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    fields: IndexMap<String, FieldSpec>,
}

impl Template {
    /// Create empty template
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: IndexMap::new(),
        }
    }

    /// Add (or replace) a field, keeping its first position
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, spec: FieldSpec) -> Self {
        self.fields.insert(name.into(), spec);
        self
    }

    /// Copy of this template without `field`
    #[must_use]
    pub fn without(&self, field: &str) -> Self {
        let mut out = self.clone();
        out.fields.shift_remove(field);
        out
    }

    /// Template name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Spec for a field
    #[inline]
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldSpec> {
        self.fields.get(field)
    }

    /// Whether the template generates `field`
    #[inline]
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Field names in template order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Fields in template order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the template has no fields
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_keeps_insertion_order() {
        let template = Template::new("t")
            .field("b", FieldSpec::new("person.email"))
            .field("a", FieldSpec::new("internet.url"))
            .field("b", FieldSpec::new("person.first_name"));

        let names: Vec<_> = template.field_names().collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(template.get("b").map(FieldSpec::kind), Some("person.first_name"));
        assert_eq!(template.len(), 2);

        let trimmed = template.without("b");
        assert_eq!(trimmed.field_names().collect::<Vec<_>>(), vec!["a"]);
        assert_eq!(template.len(), 2);
    }

    #[test]
    fn spec_resolves_against_generator() {
        let mut mf = FieldGenerator::new(gallery_fields::Seed::new(1));
        let value = FieldSpec::new("numeric.increment").resolve(&mut mf).unwrap();
        assert_eq!(value, FieldValue::Integer(1));
    }
}
