//! CSS Values & Units Level 3 — §2 Value Definition Syntax (keyword combinators)
//! Spec: <https://www.w3.org/TR/css-values-3/#value-defs>
//!
//! The two multipliers used by keyword-only grammars:
//! - `<keyword>#`: comma-separated layers, one keyword per layer (§2.3, the `#` multiplier).
//! - `<keyword>+`: whitespace-separated keywords (§2.3, the `+` multiplier).

use crate::{CssValue, KeywordTable, ValidationError};

/// Validate a comma-separated layer list with one keyword per layer.
///
/// A bare value is treated as a single layer. Components must alternate between a keyword
/// and a separator, starting and ending with a keyword. An empty list yields no layers;
/// grammars that need at least one layer check that themselves.
///
/// Spec: §2.3 — `#` multiplier
///
/// # Errors
/// - `UnrecognizedKeyword` if a layer keyword is not in `table`.
/// - `TypeMismatch` if a layer is not a keyword.
/// - `MalformedSeparator` if a separator is missing, doubled, leading, or trailing.
pub fn parse_comma_layers<T: Copy>(
    value: &CssValue,
    table: &KeywordTable<T>,
) -> Result<Vec<T>, ValidationError> {
    let components = value.components();
    let mut layers = Vec::with_capacity(components.len().div_ceil(2));
    let mut remaining = components.iter();
    while let Some(component) = remaining.next() {
        layers.push(layer_keyword(component, table)?);
        match remaining.next() {
            None => break,
            Some(next) if next.is_separator() => {
                // A separator has to be followed by another layer.
                if remaining.as_slice().is_empty() {
                    return Err(ValidationError::MalformedSeparator);
                }
            }
            Some(_) => return Err(ValidationError::MalformedSeparator),
        }
    }
    Ok(layers)
}

/// Validate a whitespace-separated run of keywords.
///
/// A bare keyword is a run of one. Order is preserved and repeats are kept.
///
/// Spec: §2.3 — `+` multiplier
///
/// # Errors
/// - `UnrecognizedKeyword` if a keyword is not in `table`.
/// - `TypeMismatch` if a component is not a keyword.
/// - `MalformedSeparator` if the run contains a comma.
pub fn parse_space_list<T: Copy>(
    value: &CssValue,
    table: &KeywordTable<T>,
) -> Result<Vec<T>, ValidationError> {
    value
        .components()
        .iter()
        .map(|component| layer_keyword(component, table))
        .collect()
}

/// Resolve a single keyword component through `table`.
fn layer_keyword<T: Copy>(
    component: &CssValue,
    table: &KeywordTable<T>,
) -> Result<T, ValidationError> {
    if component.is_separator() {
        return Err(ValidationError::MalformedSeparator);
    }
    let Some(text) = component.as_keyword() else {
        return Err(ValidationError::TypeMismatch);
    };
    table
        .lookup(text)
        .ok_or(ValidationError::UnrecognizedKeyword)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Number;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Mode {
        Fixed,
        Local,
        Scroll,
    }

    static MODES: &[(&str, Mode)] = &[
        ("fixed", Mode::Fixed),
        ("local", Mode::Local),
        ("scroll", Mode::Scroll),
    ];

    fn keyword(text: &str) -> CssValue {
        CssValue::keyword(text)
    }

    #[test]
    fn bare_keyword_is_one_layer() {
        let table = KeywordTable::new(MODES);
        assert_eq!(parse_comma_layers(&keyword("Local"), &table), Ok(vec![Mode::Local]));
    }

    #[test]
    fn layers_keep_source_order() {
        let table = KeywordTable::new(MODES);
        let value = CssValue::list([
            keyword("scroll"),
            CssValue::Separator,
            keyword("fixed"),
            CssValue::Separator,
            keyword("local"),
        ]);
        assert_eq!(
            parse_comma_layers(&value, &table),
            Ok(vec![Mode::Scroll, Mode::Fixed, Mode::Local])
        );
    }

    #[test]
    fn empty_list_has_no_layers() {
        let table = KeywordTable::new(MODES);
        assert_eq!(parse_comma_layers(&CssValue::List(Vec::new()), &table), Ok(Vec::new()));
    }

    #[test]
    fn missing_separator_is_rejected() {
        let table = KeywordTable::new(MODES);
        let value = CssValue::list([
            keyword("fixed"),
            CssValue::Separator,
            keyword("local"),
            keyword("scroll"),
        ]);
        assert_eq!(
            parse_comma_layers(&value, &table),
            Err(ValidationError::MalformedSeparator)
        );
    }

    #[test]
    fn separator_placement_is_enforced() {
        let table = KeywordTable::new(MODES);
        let trailing = CssValue::list([keyword("fixed"), CssValue::Separator]);
        let leading = CssValue::list([CssValue::Separator, keyword("fixed")]);
        let doubled = CssValue::list([
            keyword("fixed"),
            CssValue::Separator,
            CssValue::Separator,
            keyword("local"),
        ]);
        for value in [trailing, leading, doubled, CssValue::Separator] {
            assert_eq!(
                parse_comma_layers(&value, &table),
                Err(ValidationError::MalformedSeparator),
                "{value:?}"
            );
        }
    }

    #[test]
    fn unknown_or_non_keyword_layers_are_rejected() {
        let table = KeywordTable::new(MODES);
        let unknown = CssValue::list([keyword("fixed"), CssValue::Separator, keyword("sticky")]);
        assert_eq!(
            parse_comma_layers(&unknown, &table),
            Err(ValidationError::UnrecognizedKeyword)
        );
        assert_eq!(
            parse_comma_layers(&CssValue::Number(Number(1.0)), &table),
            Err(ValidationError::TypeMismatch)
        );
    }

    #[test]
    fn space_list_rejects_commas() {
        let table = KeywordTable::new(MODES);
        let spaced = CssValue::list([keyword("fixed"), keyword("FIXED")]);
        assert_eq!(parse_space_list(&spaced, &table), Ok(vec![Mode::Fixed, Mode::Fixed]));
        let comma = CssValue::list([keyword("fixed"), CssValue::Separator, keyword("local")]);
        assert_eq!(
            parse_space_list(&comma, &table),
            Err(ValidationError::MalformedSeparator)
        );
    }
}
