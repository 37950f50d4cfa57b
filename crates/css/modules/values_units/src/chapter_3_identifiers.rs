//! CSS Identifiers and keyword vocabularies (used widely across CSS values)
//! Spec: <https://www.w3.org/TR/css-values-3/#keywords>

use crate::{CssValue, ParseError};
use cssparser::{Parser, Token};

/// A CSS identifier value (lowercased for canonicalization).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ident(pub String);

/// Parse a CSS identifier token.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not an identifier.
#[inline]
pub fn parse_ident(input: &mut Parser) -> Result<Ident, ParseError> {
    match input.next_including_whitespace_and_comments() {
        Ok(Token::Ident(text)) => Ok(Ident(text.as_ref().to_ascii_lowercase())),
        _ => Err(ParseError::UnexpectedToken),
    }
}

/// Immutable mapping from a grammar's keyword spellings to its enumeration values.
///
/// Keywords are ASCII case-insensitive (§3.1 Pre-defined Keywords), so lookups compare with
/// `eq_ignore_ascii_case` and never consult the locale. Tables are built once per grammar
/// and shared by reference; nothing mutates them afterwards.
#[derive(Debug)]
pub struct KeywordTable<T: 'static> {
    /// Spelling/value pairs in declaration order.
    entries: &'static [(&'static str, T)],
}

impl<T: Copy> KeywordTable<T> {
    /// Build a table from spelling/value pairs.
    ///
    /// # Panics
    /// Panics if two spellings are equal ignoring ASCII case. Tables are static data, so a
    /// duplicate is a bug in the grammar definition and surfaces the first time the table is
    /// built.
    pub fn new(entries: &'static [(&'static str, T)]) -> Self {
        for (index, (spelling, _)) in entries.iter().enumerate() {
            let duplicated = entries
                .iter()
                .skip(index + 1)
                .any(|(other, _)| other.eq_ignore_ascii_case(spelling));
            assert!(!duplicated, "duplicate keyword `{spelling}` in keyword table");
        }
        Self { entries }
    }

    /// Find the value for `text`, ignoring ASCII case.
    #[inline]
    pub fn lookup(&self, text: &str) -> Option<T> {
        self.entries
            .iter()
            .find(|(spelling, _)| spelling.eq_ignore_ascii_case(text))
            .map(|&(_, value)| value)
    }

    /// Project a component value into this vocabulary. Anything other than a known keyword
    /// projects to `None`.
    #[inline]
    pub fn project(&self, value: &CssValue) -> Option<T> {
        value.as_keyword().and_then(|text| self.lookup(text))
    }

    /// Canonical spelling for `value`.
    pub fn spelling(&self, value: T) -> Option<&'static str>
    where
        T: PartialEq,
    {
        self.entries
            .iter()
            .find(|(_, candidate)| *candidate == value)
            .map(|&(spelling, _)| spelling)
    }

    /// All spellings in declaration order.
    pub fn spellings(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|&(spelling, _)| spelling)
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssparser::ParserInput;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Mode {
        Fixed,
        Local,
    }

    static MODES: &[(&str, Mode)] = &[("fixed", Mode::Fixed), ("local", Mode::Local)];

    #[test]
    fn lookup_ignores_ascii_case() {
        let table = KeywordTable::new(MODES);
        assert_eq!(table.lookup("fixed"), Some(Mode::Fixed));
        assert_eq!(table.lookup("FIXED"), Some(Mode::Fixed));
        assert_eq!(table.lookup("LoCaL"), Some(Mode::Local));
        assert_eq!(table.lookup("scroll"), None);
        assert_eq!(table.lookup(""), None);
    }

    #[test]
    fn lookup_is_not_unicode_case_folding() {
        static KELVIN: &[(&str, Mode)] = &[("k", Mode::Fixed)];
        let table = KeywordTable::new(KELVIN);
        // U+212A KELVIN SIGN lowercases to `k` under Unicode rules, but not under ASCII rules.
        assert_eq!(table.lookup("\u{212A}"), None);
        assert_eq!(table.lookup("K"), Some(Mode::Fixed));
    }

    #[test]
    fn project_only_accepts_keywords() {
        let table = KeywordTable::new(MODES);
        assert_eq!(table.project(&CssValue::keyword("Local")), Some(Mode::Local));
        assert_eq!(table.project(&CssValue::String("local".to_owned())), None);
        assert_eq!(table.project(&CssValue::Separator), None);
    }

    #[test]
    fn spelling_round_trips_values() {
        let table = KeywordTable::new(MODES);
        assert_eq!(table.spelling(Mode::Local), Some("local"));
        assert_eq!(table.spellings().collect::<Vec<_>>(), vec!["fixed", "local"]);
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
    }

    #[test]
    #[should_panic(expected = "duplicate keyword")]
    fn duplicate_spellings_fail_fast() {
        static DUPLICATED: &[(&str, Mode)] = &[("fixed", Mode::Fixed), ("FIXED", Mode::Local)];
        let _table = KeywordTable::new(DUPLICATED);
    }

    #[test]
    fn parse_ident_lowercases() {
        let mut input = ParserInput::new("Scroll");
        let mut parser = Parser::new(&mut input);
        assert_eq!(parse_ident(&mut parser), Ok(Ident("scroll".to_owned())));
    }
}
