//! CSS Cascading and Inheritance Level 4 — Declared values, defaulting, and the per-property
//! validation contract the cascade drives.
//! Spec: <https://www.w3.org/TR/css-cascade-4/>

#![forbid(unsafe_code)]

use core::any::Any;
use core::fmt;
use css_values_units::{CssValue, ValidationError};
use log::{debug, trace};

// Spec: §7 — Defaulting
#[path = "chapter_7_defaulting.rs"]
mod chapter7;
mod keyword_property;

pub use chapter7::{CssWideKeyword, Specified, declare};
pub use keyword_property::{KeywordGrammar, KeywordProperty, Layering};

/// Lifecycle of a validator's committed value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValidatorState {
    /// Holding the initial value after [`PropertyValidator::reset`].
    #[default]
    Default,
    /// Holding the last successfully validated value.
    Committed,
}

/// Grammar check and typed storage for one property in one declaration slot.
///
/// A validator owns exactly one committed value. [`reset`](Self::reset) establishes the
/// property's initial value. [`try_validate`](Self::try_validate) either replaces the committed
/// value with the fully parsed candidate or fails and leaves it exactly as it was.
///
/// Spec: §4.1 Declared values, §7.1 Initial values
pub trait PropertyValidator: Any + fmt::Debug {
    /// Lowercase property name used for dispatch.
    fn name(&self) -> &'static str;

    /// Whether the property inherits by default.
    /// Spec: §7.2 Inheritance
    fn inherited(&self) -> bool;

    /// Restore the initial value. Idempotent.
    fn reset(&mut self);

    /// Parse `value` against the grammar and commit it on success.
    ///
    /// # Errors
    /// Returns the reason the value was rejected; the committed value is unchanged.
    fn try_validate(&mut self, value: &CssValue) -> Result<(), ValidationError>;

    /// Parse `value` against the grammar, returning whether it was committed.
    ///
    /// Rejections are logged at `debug` level and are otherwise silent: the caller ignores
    /// the declaration.
    fn validate(&mut self, value: &CssValue) -> bool {
        match self.try_validate(value) {
            Ok(()) => {
                trace!("{}: committed `{value}`", self.name());
                true
            }
            Err(error) => {
                debug!("{}: rejected `{value}`: {error}", self.name());
                false
            }
        }
    }

    /// Current lifecycle state.
    fn state(&self) -> ValidatorState;

    /// Canonical keyword spellings of the committed value, in order. Empty for an empty set.
    fn keywords(&self) -> Vec<&'static str>;

    /// Access to the concrete validator for typed reads.
    fn as_any(&self) -> &dyn Any;
}

impl dyn PropertyValidator + '_ {
    /// Downcast to a concrete validator type.
    pub fn downcast_ref<V: PropertyValidator>(&self) -> Option<&V> {
        self.as_any().downcast_ref::<V>()
    }
}
