//! Template registry
//!
//! Provides [`TemplateRegistry`] for looking templates up by name.

use crate::template::Template;
use crate::templates;
use gallery_fields::DEFAULT_PASSWORD_LENGTH;
use std::collections::HashMap;

/// Registry of named templates
#[derive(Debug, Default, Clone)]
pub struct TemplateRegistry {
    templates: HashMap<String, Template>,
}

impl TemplateRegistry {
    /// Create new empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Create registry with the built-in templates
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(templates::user_data());
        registry.register(templates::user_model(
            DEFAULT_PASSWORD_LENGTH,
            templates::DEFAULT_BIRTH_YEAR_SPAN,
        ));
        registry.register(templates::favourite_picture());
        registry
    }

    /// Register a template under its own name, replacing any previous one
    pub fn register(&mut self, template: Template) -> Option<Template> {
        self.templates.insert(template.name().to_string(), template)
    }

    /// Look a template up
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// Check if template exists
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Remove template
    #[inline]
    pub fn remove(&mut self, name: &str) -> Option<Template> {
        self.templates.remove(name)
    }

    /// List all registered template names
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Get number of registered templates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
