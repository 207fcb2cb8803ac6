//! Record factories
//!
//! [`RecordFactory`] is the fixed interface every fixture factory exposes:
//! build a record, optionally with caller overrides.

use crate::composer::compose_with;
use crate::record::{ComposedRecord, OverrideSet};
use crate::template::Template;
use gallery_fields::{FieldError, FieldGenerator};
use std::cell::RefCell;
use std::rc::Rc;

/// Generator handle shared by the factories of one test
pub type SharedGenerator = Rc<RefCell<FieldGenerator>>;

/// Builds composed records
pub trait RecordFactory {
    /// Build one record, applying `overrides` last
    ///
    /// # Errors
    /// Propagates [`FieldError`] from the generator
    fn build(&self, overrides: Option<OverrideSet>) -> Result<ComposedRecord, FieldError>;

    /// Build with no overrides
    ///
    /// # Errors
    /// Propagates [`FieldError`] from the generator
    fn build_default(&self) -> Result<ComposedRecord, FieldError> {
        self.build(None)
    }
}

/// Factory composing one template over a shared generator
#[derive(Debug, Clone)]
pub struct TemplateFactory {
    template: Template,
    generator: SharedGenerator,
}

impl TemplateFactory {
    /// Create factory
    #[inline]
    #[must_use]
    pub fn new(template: Template, generator: SharedGenerator) -> Self {
        Self {
            template,
            generator,
        }
    }

    /// Template this factory composes
    #[inline]
    #[must_use]
    pub fn template(&self) -> &Template {
        &self.template
    }
}

impl RecordFactory for TemplateFactory {
    fn build(&self, overrides: Option<OverrideSet>) -> Result<ComposedRecord, FieldError> {
        let overrides = overrides.unwrap_or_default();
        let mut generator = self.generator.borrow_mut();
        compose_with(&mut generator, &self.template, &overrides)
    }
}
