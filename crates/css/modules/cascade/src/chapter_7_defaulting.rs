//! CSS Cascade 4 — §7 Defaulting (CSS-wide keywords)
//! Spec: <https://www.w3.org/TR/css-cascade-4/#defaulting>

use crate::PropertyValidator;
use css_values_units::{CssValue, KeywordTable};
use once_cell::sync::Lazy;

/// Keywords every property accepts in addition to its own grammar.
/// Spec: §7.3 Explicit Defaulting
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CssWideKeyword {
    /// Spec: §7.3.1 Resetting a Property: the `initial` keyword
    Initial,
    /// Spec: §7.3.2 Explicit Inheritance: the `inherit` keyword
    Inherit,
    /// Spec: §7.3.3 Erasing All Declarations: the `unset` keyword
    Unset,
}

/// Spellings of the CSS-wide keywords.
static CSS_WIDE_KEYWORDS: &[(&str, CssWideKeyword)] = &[
    ("initial", CssWideKeyword::Initial),
    ("inherit", CssWideKeyword::Inherit),
    ("unset", CssWideKeyword::Unset),
];

static CSS_WIDE_TABLE: Lazy<KeywordTable<CssWideKeyword>> =
    Lazy::new(|| KeywordTable::new(CSS_WIDE_KEYWORDS));

impl CssWideKeyword {
    /// Recognize a CSS-wide keyword. It must be the whole value: a CSS-wide keyword inside a
    /// list is left to the property grammar, which rejects it.
    pub fn from_value(value: &CssValue) -> Option<Self> {
        match value.components() {
            [single] => CSS_WIDE_TABLE.project(single),
            _ => None,
        }
    }
}

/// How a successfully declared value was specified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Specified {
    /// A value accepted by the property grammar and committed to the validator.
    Value,
    /// `initial`; the validator holds the initial value.
    Initial,
    /// `inherit`; the validator is untouched and the parent's value applies.
    Inherit,
    /// `unset`; see [`Specified::resolve`].
    Unset,
}

impl Specified {
    /// Resolve `unset` to `inherit` for inherited properties and `initial` otherwise.
    /// Spec: §7.3.3
    #[inline]
    pub const fn resolve(self, inherited: bool) -> Self {
        match self {
            Self::Unset if inherited => Self::Inherit,
            Self::Unset => Self::Initial,
            other => other,
        }
    }
}

/// Apply a declared value to `validator`, handling CSS-wide keywords first.
///
/// Returns `None` if the declaration is invalid and must be ignored; the validator is then
/// unchanged.
pub fn declare(validator: &mut dyn PropertyValidator, value: &CssValue) -> Option<Specified> {
    match CssWideKeyword::from_value(value) {
        Some(CssWideKeyword::Initial) => {
            validator.reset();
            Some(Specified::Initial)
        }
        Some(CssWideKeyword::Inherit) => Some(Specified::Inherit),
        Some(CssWideKeyword::Unset) => Some(Specified::Unset),
        None => validator.validate(value).then_some(Specified::Value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{KeywordGrammar, KeywordProperty, Layering, ValidatorState};

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Side {
        Top,
        Bottom,
    }

    static SIDES: &[(&str, Side)] = &[("top", Side::Top), ("bottom", Side::Bottom)];
    static SIDE_TABLE: Lazy<KeywordTable<Side>> = Lazy::new(|| KeywordTable::new(SIDES));
    static SIDE: KeywordGrammar<Side> = KeywordGrammar {
        name: "test-side",
        keywords: &SIDE_TABLE,
        layering: Layering::Single,
        initial: Side::Top,
        inherited: true,
    };

    #[test]
    fn recognizes_whole_value_keywords_only() {
        assert_eq!(
            CssWideKeyword::from_value(&CssValue::keyword("INHERIT")),
            Some(CssWideKeyword::Inherit)
        );
        let listed = CssValue::list([CssValue::keyword("inherit"), CssValue::keyword("top")]);
        assert_eq!(CssWideKeyword::from_value(&listed), None);
        assert_eq!(CssWideKeyword::from_value(&CssValue::keyword("revert")), None);
    }

    #[test]
    fn initial_resets_the_validator() {
        let mut property = KeywordProperty::new(&SIDE);
        assert_eq!(
            declare(&mut property, &CssValue::keyword("bottom")),
            Some(Specified::Value)
        );
        assert_eq!(
            declare(&mut property, &CssValue::keyword("initial")),
            Some(Specified::Initial)
        );
        assert_eq!(property.value(), Some(Side::Top));
        assert_eq!(property.state(), ValidatorState::Default);
    }

    #[test]
    fn inherit_and_invalid_values_leave_state_alone() {
        let mut property = KeywordProperty::new(&SIDE);
        assert!(property.validate(&CssValue::keyword("bottom")));
        assert_eq!(
            declare(&mut property, &CssValue::keyword("inherit")),
            Some(Specified::Inherit)
        );
        assert_eq!(declare(&mut property, &CssValue::keyword("left")), None);
        assert_eq!(property.value(), Some(Side::Bottom));
    }

    #[test]
    fn unset_follows_inheritance() {
        assert_eq!(Specified::Unset.resolve(true), Specified::Inherit);
        assert_eq!(Specified::Unset.resolve(false), Specified::Initial);
        assert_eq!(Specified::Value.resolve(true), Specified::Value);
    }
}
