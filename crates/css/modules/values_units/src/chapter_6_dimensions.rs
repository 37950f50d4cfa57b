//! CSS Values & Units Level 3 — §6 Dimensions (Lengths subset)
//! Spec: <https://www.w3.org/TR/css-values-3/#lengths>

use crate::ParseError;
use cssparser::{Parser, Token};

/// Supported subset of CSS <length> units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthUnit {
    Pixels,
    Ems,
    RootEms,
    ViewportWidth,
    ViewportHeight,
    Centimeters,
    Millimeters,
    Inches,
    Points,
    Picas,
}

impl LengthUnit {
    /// Map a dimension unit to a length unit, ignoring ASCII case.
    /// Spec: §6.1 Relative lengths, §6.2 Absolute lengths
    pub fn from_unit(unit: &str) -> Option<Self> {
        let lower = unit.to_ascii_lowercase();
        let unit_kind = match lower.as_str() {
            "px" => Self::Pixels,
            "em" => Self::Ems,
            "rem" => Self::RootEms,
            "vw" => Self::ViewportWidth,
            "vh" => Self::ViewportHeight,
            "cm" => Self::Centimeters,
            "mm" => Self::Millimeters,
            "in" => Self::Inches,
            "pt" => Self::Points,
            "pc" => Self::Picas,
            _ => return None,
        };
        Some(unit_kind)
    }
}

/// A CSS <length> value with unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Length {
    pub value: f32,
    pub unit: LengthUnit,
}

/// Parse a CSS <length> (§6). Supports the units in [`LengthUnit`] and unitless zero.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a supported `<length>`.
pub fn parse_length(input: &mut Parser) -> Result<Length, ParseError> {
    match input.next_including_whitespace_and_comments() {
        Ok(Token::Dimension { value, unit, .. }) => {
            let unit_kind = LengthUnit::from_unit(unit).ok_or(ParseError::UnexpectedToken)?;
            Ok(Length {
                value: *value,
                unit: unit_kind,
            })
        }
        Ok(&Token::Number { value: 0.0, .. }) => Ok(Length {
            value: 0.0,
            unit: LengthUnit::Pixels,
        }),
        _ => Err(ParseError::UnexpectedToken),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssparser::ParserInput;

    fn parse(text: &str) -> Result<Length, ParseError> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        parse_length(&mut parser)
    }

    #[test]
    fn units_are_case_insensitive() {
        assert_eq!(
            parse("12PX"),
            Ok(Length {
                value: 12.0,
                unit: LengthUnit::Pixels,
            })
        );
        assert_eq!(
            parse("1.5rem"),
            Ok(Length {
                value: 1.5,
                unit: LengthUnit::RootEms,
            })
        );
    }

    #[test]
    fn unitless_zero_is_a_length() {
        assert_eq!(
            parse("0"),
            Ok(Length {
                value: 0.0,
                unit: LengthUnit::Pixels,
            })
        );
        assert_eq!(parse("3"), Err(ParseError::UnexpectedToken));
    }

    #[test]
    fn unknown_units_are_rejected() {
        assert_eq!(parse("3parsecs"), Err(ParseError::UnexpectedToken));
    }
}
