//! Declaration blocks: one validator per property, driven in source order.

use anyhow::{Context as _, Result, bail};
use css_cascade::{PropertyValidator, Specified, declare};
use css_syntax::{Declaration, parse_declaration_list, parse_value};
use log::debug;

use crate::PropertyRegistry;

/// A property's validator together with how its winning declaration was specified.
#[derive(Debug)]
struct Entry {
    validator: Box<dyn PropertyValidator>,
    specified: Specified,
    important: bool,
}

/// The validated contents of a declaration list.
///
/// Later declarations replace earlier ones of the same property, except that a normal
/// declaration never replaces an `!important` one. Invalid declarations and unknown properties
/// are dropped.
#[derive(Debug)]
pub struct PropertyBlock<'registry> {
    registry: &'registry PropertyRegistry,
    /// Entries in order of first accepted declaration.
    entries: Vec<Entry>,
}

impl<'registry> PropertyBlock<'registry> {
    /// An empty block creating validators from `registry`.
    #[inline]
    pub const fn new(registry: &'registry PropertyRegistry) -> Self {
        Self {
            registry,
            entries: Vec::new(),
        }
    }

    /// Parse a declaration list such as a `style` attribute and apply every declaration.
    pub fn parse(registry: &'registry PropertyRegistry, css: &str) -> Self {
        let mut block = Self::new(registry);
        for declaration in parse_declaration_list(css) {
            block.apply(&declaration);
        }
        block
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.validator.name().eq_ignore_ascii_case(name))
    }

    /// Apply one declaration, returning whether it now determines the property's value.
    pub fn apply(&mut self, declaration: &Declaration) -> bool {
        let name = declaration.name.as_str();
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.validator.name().eq_ignore_ascii_case(name))
        {
            if entry.important && !declaration.important {
                debug!("{name}: normal declaration does not override !important");
                return false;
            }
            let Some(specified) = declare(&mut *entry.validator, &declaration.value) else {
                return false;
            };
            entry.specified = specified;
            entry.important = declaration.important;
            return true;
        }

        let Some(mut validator) = self.registry.create(name) else {
            debug!("ignoring declaration of unknown property `{name}`");
            return false;
        };
        let Some(specified) = declare(&mut *validator, &declaration.value) else {
            return false;
        };
        self.entries.push(Entry {
            validator,
            specified,
            important: declaration.important,
        });
        true
    }

    /// Tokenize `value` and apply it as a normal declaration of `name`.
    ///
    /// Returns `Ok(false)` if the value does not match the property's grammar.
    ///
    /// # Errors
    /// Returns an error for unknown properties, for text that cannot be tokenized and for an
    /// empty value.
    pub fn declare(&mut self, name: &str, value: &str) -> Result<bool> {
        if !self.registry.contains(name) {
            bail!("unknown property `{name}`");
        }
        let value = parse_value(value).with_context(|| format!("tokenizing value of `{name}`"))?;
        if value.components().is_empty() {
            bail!("empty value for `{name}`");
        }
        Ok(self.apply(&Declaration {
            name: name.to_owned(),
            value,
            important: false,
        }))
    }

    /// Validator for `name`, if a declaration of it was accepted.
    pub fn validator(&self, name: &str) -> Option<&dyn PropertyValidator> {
        let index = self.position(name)?;
        self.entries.get(index).map(|entry| &*entry.validator)
    }

    /// Typed validator for `name`.
    ///
    /// The validator holds the last committed value even when a later `inherit` or `unset`
    /// won; check [`specified`](Self::specified) before reading it as the property's value.
    pub fn get<V: PropertyValidator>(&self, name: &str) -> Option<&V> {
        self.validator(name)?.downcast_ref::<V>()
    }

    /// How the winning declaration of `name` was specified.
    pub fn specified(&self, name: &str) -> Option<Specified> {
        let index = self.position(name)?;
        self.entries.get(index).map(|entry| entry.specified)
    }

    pub fn is_important(&self, name: &str) -> bool {
        self.position(name)
            .and_then(|index| self.entries.get(index))
            .is_some_and(|entry| entry.important)
    }

    /// Names of the properties in the block, in order of first accepted declaration.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|entry| entry.validator.name())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
