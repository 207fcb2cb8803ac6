//! Typed access to raw entity fields

use crate::error::ConstraintViolation;
use crate::model::EntityId;
use gallery_fields::FieldValue;
use gallery_schema::ComposedRecord;

/// Reads typed values out of a record on behalf of one entity kind
pub(crate) struct FieldReader<'a> {
    entity: &'static str,
    fields: &'a ComposedRecord,
}

impl<'a> FieldReader<'a> {
    pub(crate) fn new(entity: &'static str, fields: &'a ComposedRecord) -> Self {
        Self { entity, fields }
    }

    /// Reject fields outside `known`
    pub(crate) fn only(&self, known: &[&str]) -> Result<(), ConstraintViolation> {
        match self.fields.keys().find(|field| !known.contains(field)) {
            Some(field) => Err(ConstraintViolation::UnknownField {
                entity: self.entity,
                field: field.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Text value; absent and null read as `None`
    pub(crate) fn text(&self, field: &str) -> Result<Option<&'a str>, ConstraintViolation> {
        match self.fields.get(field) {
            None | Some(FieldValue::Null) => Ok(None),
            Some(FieldValue::Text(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(self.wrong_type(field, "text", other)),
        }
    }

    /// Text value, empty string when absent
    pub(crate) fn text_or_blank(&self, field: &str) -> Result<String, ConstraintViolation> {
        Ok(self.text(field)?.unwrap_or_default().to_string())
    }

    /// Non-blank text value
    pub(crate) fn required_text(&self, field: &str) -> Result<&'a str, ConstraintViolation> {
        match self.text(field)? {
            Some(s) if !s.trim().is_empty() => Ok(s),
            _ => Err(ConstraintViolation::missing(self.entity, field)),
        }
    }

    /// Boolean flag, `None` when absent
    pub(crate) fn flag(&self, field: &str) -> Result<Option<bool>, ConstraintViolation> {
        match self.fields.get(field) {
            None => Ok(None),
            Some(FieldValue::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(self.wrong_type(field, "bool", other)),
        }
    }

    /// Integer value; numeric text is accepted as form input
    pub(crate) fn required_integer(&self, field: &str) -> Result<i64, ConstraintViolation> {
        match self.fields.get(field) {
            Some(FieldValue::Integer(n)) => Ok(*n),
            Some(FieldValue::Text(s)) if !s.trim().is_empty() => s.trim().parse().map_err(|_| {
                ConstraintViolation::invalid(self.entity, field, format!("{s:?} is not an integer"))
            }),
            Some(value) if !value.is_blank() => Err(self.wrong_type(field, "integer", value)),
            _ => Err(ConstraintViolation::missing(self.entity, field)),
        }
    }

    /// Entity reference
    pub(crate) fn required_ref(&self, field: &str) -> Result<EntityId, ConstraintViolation> {
        match self.fields.get(field) {
            Some(FieldValue::Ref(id)) => Ok(EntityId(*id)),
            Some(value) if !value.is_blank() => Err(self.wrong_type(field, "reference", value)),
            _ => Err(ConstraintViolation::missing(self.entity, field)),
        }
    }

    fn wrong_type(&self, field: &str, expected: &str, got: &FieldValue) -> ConstraintViolation {
        ConstraintViolation::invalid(
            self.entity,
            field,
            format!("expected {expected}, got {}", got.type_name()),
        )
    }
}
