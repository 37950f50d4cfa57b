//! CSS Values & Units Level 3 — §5 Percentages
//! Spec: <https://www.w3.org/TR/css-values-3/#percentages>

use crate::ParseError;
use cssparser::{Parser, Token};

/// A CSS <percentage>
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Percentage(pub f32); // stored as a fraction, 50% == 0.5

/// Parse a CSS <percentage> (§5.1).
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a `<percentage>`.
pub fn parse_percentage(input: &mut Parser) -> Result<Percentage, ParseError> {
    if let Ok(&Token::Percentage { unit_value, .. }) = input.next_including_whitespace_and_comments()
    {
        return Ok(Percentage(unit_value));
    }
    Err(ParseError::UnexpectedToken)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssparser::ParserInput;

    #[test]
    fn stores_fraction() {
        let mut input = ParserInput::new("50%");
        let mut parser = Parser::new(&mut input);
        assert_eq!(parse_percentage(&mut parser), Ok(Percentage(0.5)));
    }
}
