//! Name-to-validator dispatch.

use std::collections::HashMap;

use anyhow::{Result, bail};
use css_backgrounds_borders::{background_attachment, background_clip, background_origin};
use css_cascade::PropertyValidator;
use css_text_decoration::{TextDecorationLineProperty, text_decoration_style};
use log::trace;

/// Builds a fresh validator for one property.
pub type PropertyFactory = fn() -> Box<dyn PropertyValidator>;

/// Property names mapped to validator factories. Names are ASCII case-insensitive.
#[derive(Clone, Debug, Default)]
pub struct PropertyRegistry {
    factories: HashMap<String, PropertyFactory>,
}

fn boxed_background_attachment() -> Box<dyn PropertyValidator> {
    Box::new(background_attachment())
}

fn boxed_background_clip() -> Box<dyn PropertyValidator> {
    Box::new(background_clip())
}

fn boxed_background_origin() -> Box<dyn PropertyValidator> {
    Box::new(background_origin())
}

fn boxed_text_decoration_line() -> Box<dyn PropertyValidator> {
    Box::new(TextDecorationLineProperty::new())
}

fn boxed_text_decoration_style() -> Box<dyn PropertyValidator> {
    Box::new(text_decoration_style())
}

static BUILTIN_PROPERTIES: &[(&str, PropertyFactory)] = &[
    ("background-attachment", boxed_background_attachment),
    ("background-clip", boxed_background_clip),
    ("background-origin", boxed_background_origin),
    ("text-decoration-line", boxed_text_decoration_line),
    ("text-decoration-style", boxed_text_decoration_style),
];

impl PropertyRegistry {
    /// An empty registry.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every property this crate knows how to validate.
    pub fn with_builtin_properties() -> Self {
        let mut registry = Self::new();
        for &(name, factory) in BUILTIN_PROPERTIES {
            registry.factories.insert(name.to_owned(), factory);
        }
        registry
    }

    /// Register `factory` under `name`.
    ///
    /// # Errors
    /// Returns an error if a property with the same name (ignoring ASCII case) is registered.
    pub fn register(&mut self, name: &str, factory: PropertyFactory) -> Result<()> {
        let key = name.to_ascii_lowercase();
        if self.factories.contains_key(&key) {
            bail!("property `{key}` is already registered");
        }
        trace!("registered property `{key}`");
        self.factories.insert(key, factory);
        Ok(())
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(&name.to_ascii_lowercase())
    }

    /// Create a validator for `name` holding the property's initial value.
    pub fn create(&self, name: &str) -> Option<Box<dyn PropertyValidator>> {
        let factory = self.factories.get(&name.to_ascii_lowercase())?;
        let mut validator = factory();
        validator.reset();
        Some(validator)
    }

    /// Registered property names in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}
