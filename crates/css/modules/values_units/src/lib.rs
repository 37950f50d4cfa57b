//! CSS Values and Units Module Level 3 — Component values, value definition syntax, and
//! the literal types property grammars are built from.
//! Spec: <https://www.w3.org/TR/css-values-3/>

#![forbid(unsafe_code)]

use core::error::Error;
use core::fmt;

// Per-chapter modules mirroring the spec table of contents.
// Each module documents functions with references to the exact spec section.
pub mod chapter_2_value_definition_syntax;
pub mod chapter_3_identifiers;
pub mod chapter_4_numbers;
pub mod chapter_5_percentages;
pub mod chapter_6_dimensions;
pub mod chapter_9_colors;
mod value;

// Re-exports for ergonomic access from other crates.
pub use chapter_2_value_definition_syntax::{parse_comma_layers, parse_space_list};
pub use chapter_3_identifiers::{Ident, KeywordTable, parse_ident};
pub use chapter_4_numbers::{Number, parse_number};
pub use chapter_5_percentages::{Percentage, parse_percentage};
pub use chapter_6_dimensions::{Length, LengthUnit, parse_length};
pub use chapter_9_colors::{Color, color_from_hash, parse_color_literal};
pub use value::CssValue;

/// Parse error for Values & Units parsing utilities in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The next token did not match the expected grammar.
    UnexpectedToken,
}

impl fmt::Display for ParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken => formatter.write_str("unexpected token"),
        }
    }
}

impl Error for ParseError {}

/// Reason a component value was rejected by a property grammar.
///
/// Rejections are ordinary outcomes: the declaration carrying the value is ignored and the
/// property keeps whatever it had committed before.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// An identifier that is not part of the grammar's keyword set.
    UnrecognizedKeyword,
    /// A comma where a value was expected, a value where a comma was expected, or a
    /// trailing comma.
    MalformedSeparator,
    /// The value's shape (list vs. single component, or literal kind) is not accepted.
    TypeMismatch,
    /// An exclusive keyword such as `none` combined with other keywords.
    MixedIncompatibleKeywords,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::UnrecognizedKeyword => "unrecognized keyword",
            Self::MalformedSeparator => "misplaced comma separator",
            Self::TypeMismatch => "value type not accepted by the grammar",
            Self::MixedIncompatibleKeywords => "exclusive keyword combined with other keywords",
        };
        formatter.write_str(text)
    }
}

impl Error for ValidationError {}
