//! Data-driven validators for keyword-only grammars.

use core::any::Any;
use core::fmt;

use crate::{PropertyValidator, ValidatorState};
use css_values_units::{
    CssValue, KeywordTable, ValidationError, parse_comma_layers, parse_space_list,
};
use once_cell::sync::Lazy;

/// How a keyword grammar repeats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layering {
    /// Exactly one keyword (`<keyword>`).
    Single,
    /// One keyword per comma-separated layer (`<keyword>#`).
    CommaSeparated,
}

/// Declarative description of a keyword-only property.
#[derive(Debug)]
pub struct KeywordGrammar<T: 'static> {
    /// Lowercase property name.
    pub name: &'static str,
    /// Process-wide keyword vocabulary, built on first use.
    pub keywords: &'static Lazy<KeywordTable<T>>,
    pub layering: Layering,
    /// Value of every layer after a reset; a reset always yields one layer.
    pub initial: T,
    pub inherited: bool,
}

/// Validator interpreting a [`KeywordGrammar`].
pub struct KeywordProperty<T: 'static> {
    grammar: &'static KeywordGrammar<T>,
    /// Committed layers; never empty after a reset, possibly empty after an empty layer list.
    values: Vec<T>,
    state: ValidatorState,
}

impl<T> KeywordProperty<T>
where
    T: Copy + PartialEq + fmt::Debug + Send + Sync + 'static,
{
    /// Create a validator holding the grammar's initial value.
    pub fn new(grammar: &'static KeywordGrammar<T>) -> Self {
        let mut property = Self {
            grammar,
            values: Vec::with_capacity(1),
            state: ValidatorState::Default,
        };
        property.reset();
        property
    }

    /// Committed values, one per layer.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// First committed layer.
    #[inline]
    pub fn value(&self) -> Option<T> {
        self.values.first().copied()
    }

    #[inline]
    pub const fn grammar(&self) -> &'static KeywordGrammar<T> {
        self.grammar
    }

    /// Parse `value` without touching the committed state.
    fn parse(&self, value: &CssValue) -> Result<Vec<T>, ValidationError> {
        let table: &KeywordTable<T> = self.grammar.keywords;
        match self.grammar.layering {
            Layering::CommaSeparated => parse_comma_layers(value, table),
            Layering::Single => {
                let parsed = parse_space_list(value, table)?;
                if parsed.len() == 1 {
                    Ok(parsed)
                } else {
                    Err(ValidationError::TypeMismatch)
                }
            }
        }
    }
}

impl<T> fmt::Debug for KeywordProperty<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("KeywordProperty")
            .field("name", &self.grammar.name)
            .field("values", &self.values)
            .field("state", &self.state)
            .finish()
    }
}

impl<T> PropertyValidator for KeywordProperty<T>
where
    T: Copy + PartialEq + fmt::Debug + Send + Sync + 'static,
{
    fn name(&self) -> &'static str {
        self.grammar.name
    }

    fn inherited(&self) -> bool {
        self.grammar.inherited
    }

    fn reset(&mut self) {
        self.values.clear();
        self.values.push(self.grammar.initial);
        self.state = ValidatorState::Default;
    }

    fn try_validate(&mut self, value: &CssValue) -> Result<(), ValidationError> {
        let parsed = self.parse(value)?;
        self.values = parsed;
        self.state = ValidatorState::Committed;
        Ok(())
    }

    fn state(&self) -> ValidatorState {
        self.state
    }

    fn keywords(&self) -> Vec<&'static str> {
        self.values
            .iter()
            .filter_map(|&value| self.grammar.keywords.spelling(value))
            .collect()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
