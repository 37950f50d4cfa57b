//! Spec: §2.1 Text Decoration Lines: the `text-decoration-line` property
//! <https://www.w3.org/TR/css-text-decor-3/#text-decoration-line-property>
//!
//! Grammar: `none | [ underline || overline || line-through || blink ]`

use core::any::Any;

use css_cascade::{PropertyValidator, ValidatorState};
use css_values_units::{CssValue, KeywordTable, ValidationError, parse_space_list};
use once_cell::sync::Lazy;

/// One kind of decoration line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextDecorationLine {
    Underline,
    Overline,
    LineThrough,
    Blink,
}

static LINE_KEYWORDS: &[(&str, TextDecorationLine)] = &[
    ("underline", TextDecorationLine::Underline),
    ("overline", TextDecorationLine::Overline),
    ("line-through", TextDecorationLine::LineThrough),
    ("blink", TextDecorationLine::Blink),
];

static LINE_TABLE: Lazy<KeywordTable<TextDecorationLine>> =
    Lazy::new(|| KeywordTable::new(LINE_KEYWORDS));

impl TextDecorationLine {
    /// Project a component value onto a decoration line keyword.
    #[inline]
    pub fn from_value(value: &CssValue) -> Option<Self> {
        LINE_TABLE.project(value)
    }

    /// Canonical keyword spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Underline => "underline",
            Self::Overline => "overline",
            Self::LineThrough => "line-through",
            Self::Blink => "blink",
        }
    }
}

/// Validator for `text-decoration-line`. The initial value `none` is an empty set of lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextDecorationLineProperty {
    /// Committed lines in source order; empty means `none`.
    lines: Vec<TextDecorationLine>,
    state: ValidatorState,
}

impl TextDecorationLineProperty {
    pub const NAME: &'static str = "text-decoration-line";

    /// Create a validator holding `none`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed lines in source order; empty when no lines are drawn.
    #[inline]
    pub fn lines(&self) -> &[TextDecorationLine] {
        &self.lines
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        self.lines.is_empty()
    }

    #[inline]
    pub fn contains(&self, line: TextDecorationLine) -> bool {
        self.lines.contains(&line)
    }

    /// Parse `value` without touching the committed state.
    ///
    /// A bare line keyword, `none`, or a whitespace-separated list of line keywords. `none`
    /// never combines with other keywords and an empty list is not a value.
    fn parse(value: &CssValue) -> Result<Vec<TextDecorationLine>, ValidationError> {
        let components = value.components();
        match components {
            [] => Err(ValidationError::TypeMismatch),
            [single] if single.is_keyword("none") => Ok(Vec::new()),
            _ if components.iter().any(|component| component.is_keyword("none")) => {
                Err(ValidationError::MixedIncompatibleKeywords)
            }
            _ => parse_space_list(value, &*LINE_TABLE),
        }
    }
}

impl PropertyValidator for TextDecorationLineProperty {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn inherited(&self) -> bool {
        false
    }

    fn reset(&mut self) {
        self.lines.clear();
        self.state = ValidatorState::Default;
    }

    fn try_validate(&mut self, value: &CssValue) -> Result<(), ValidationError> {
        let parsed = Self::parse(value)?;
        self.lines = parsed;
        self.state = ValidatorState::Committed;
        Ok(())
    }

    fn state(&self) -> ValidatorState {
        self.state
    }

    fn keywords(&self) -> Vec<&'static str> {
        self.lines
            .iter()
            .copied()
            .map(TextDecorationLine::as_str)
            .collect()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_spellings_match_as_str() {
        for (spelling, line) in LINE_KEYWORDS {
            assert_eq!(line.as_str(), *spelling);
            assert_eq!(TextDecorationLine::from_value(&CssValue::keyword(*spelling)), Some(*line));
        }
        assert_eq!(TextDecorationLine::from_value(&CssValue::keyword("none")), None);
    }
}
