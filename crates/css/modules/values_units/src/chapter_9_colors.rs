//! CSS Values & Units Level 3 — §9 Colors (subset used by component values)
//! Spec: <https://www.w3.org/TR/css-color-3/>

use crate::ParseError;
use cssparser::{ParseError as CssParseError, Parser, Token};

/// Bit count used to duplicate a single hex nibble into a full byte.
const NIBBLE_SHIFT: u32 = 4;

/// A minimal RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

/// Convert an ASCII hex digit to its numeric value.
pub const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0' => Some(0),
        b'1' => Some(1),
        b'2' => Some(2),
        b'3' => Some(3),
        b'4' => Some(4),
        b'5' => Some(5),
        b'6' => Some(6),
        b'7' => Some(7),
        b'8' => Some(8),
        b'9' => Some(9),
        b'a' | b'A' => Some(10),
        b'b' | b'B' => Some(11),
        b'c' | b'C' => Some(12),
        b'd' | b'D' => Some(13),
        b'e' | b'E' => Some(14),
        b'f' | b'F' => Some(15),
        _ => None,
    }
}

/// Parse a 3- or 6-digit hex color (e.g., `#abc` or `#aabbcc`).
fn parse_hex_color(text: &str) -> Option<Color> {
    let trimmed = text.trim();
    let bytes = trimmed.as_bytes();
    if bytes.len() == 3
        && bytes
            .iter()
            .copied()
            .all(|byte_val| hex_value(byte_val).is_some())
    {
        let r_nibble = bytes.first().and_then(|byte_ref| hex_value(*byte_ref))?;
        let g_nibble = bytes.get(1).and_then(|byte_ref| hex_value(*byte_ref))?;
        let b_nibble = bytes.get(2).and_then(|byte_ref| hex_value(*byte_ref))?;
        // Duplicate nibble (e.g., a -> aa)
        let red_component = r_nibble.wrapping_shl(NIBBLE_SHIFT) | r_nibble;
        let green_component = g_nibble.wrapping_shl(NIBBLE_SHIFT) | g_nibble;
        let blue_component = b_nibble.wrapping_shl(NIBBLE_SHIFT) | b_nibble;
        return Some(Color {
            red: red_component,
            green: green_component,
            blue: blue_component,
            alpha: 255,
        });
    }
    if bytes.len() == 6
        && bytes
            .iter()
            .copied()
            .all(|byte_val| hex_value(byte_val).is_some())
    {
        let r_high = bytes.first().and_then(|byte_ref| hex_value(*byte_ref))?;
        let r_low = bytes.get(1).and_then(|byte_ref| hex_value(*byte_ref))?;
        let g_high = bytes.get(2).and_then(|byte_ref| hex_value(*byte_ref))?;
        let g_low = bytes.get(3).and_then(|byte_ref| hex_value(*byte_ref))?;
        let b_high = bytes.get(4).and_then(|byte_ref| hex_value(*byte_ref))?;
        let b_low = bytes.get(5).and_then(|byte_ref| hex_value(*byte_ref))?;
        let red_component_u32 = u32::from(r_high).wrapping_shl(NIBBLE_SHIFT) | u32::from(r_low);
        let green_component_u32 = u32::from(g_high).wrapping_shl(NIBBLE_SHIFT) | u32::from(g_low);
        let blue_component_u32 = u32::from(b_high).wrapping_shl(NIBBLE_SHIFT) | u32::from(b_low);
        let red_u8 = u8::try_from(red_component_u32).ok()?;
        let green_u8 = u8::try_from(green_component_u32).ok()?;
        let blue_u8 = u8::try_from(blue_component_u32).ok()?;
        return Some(Color {
            red: red_u8,
            green: green_u8,
            blue: blue_u8,
            alpha: 255,
        });
    }
    None
}

/// Parse `rgb()`/`rgba()` with integer components only (0..=255).
/// Alpha is an optional 4th integer (0..=255). Any other component makes the whole function
/// something other than a color.
fn parse_rgb_function(name: &str, input: &mut Parser) -> Option<Color> {
    let lowercase = name.to_ascii_lowercase();
    let mut comps: Vec<u8> = Vec::with_capacity(4);
    while let Ok(token) = input.next_including_whitespace_and_comments() {
        match token.clone() {
            Token::Number {
                int_value: Some(int_val),
                ..
            } if comps.len() < 4 => {
                let bounded = int_val.clamp(i32::from(u8::MIN), i32::from(u8::MAX));
                comps.push(u8::try_from(bounded).ok()?);
            }
            Token::Comma | Token::WhiteSpace(_) | Token::Comment(_) => {}
            Token::CloseParenthesis => break,
            _ => return None,
        }
    }
    if lowercase == "rgb"
        && comps.len() == 3
        && let (Some(red_v), Some(green_v), Some(blue_v)) =
            (comps.first(), comps.get(1), comps.get(2))
    {
        return Some(Color {
            red: *red_v,
            green: *green_v,
            blue: *blue_v,
            alpha: 255,
        });
    }
    if lowercase == "rgba"
        && comps.len() == 4
        && let (Some(red_v), Some(green_v), Some(blue_v), Some(alpha_v)) =
            (comps.first(), comps.get(1), comps.get(2), comps.get(3))
    {
        return Some(Color {
            red: *red_v,
            green: *green_v,
            blue: *blue_v,
            alpha: *alpha_v,
        });
    }
    None
}

/// Parse a 3- or 6-digit hex color from the text after `#`.
///
/// Spec: CSS Color 3 §4.2.1 RGB color values
#[inline]
pub fn color_from_hash(text: &str) -> Option<Color> {
    parse_hex_color(text)
}

/// Parse a color written as a hash or as `rgb()`/`rgba()`, leaving identifiers alone so
/// they can be read as keywords.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` for anything else or for malformed colors.
pub fn parse_color_literal(input: &mut Parser) -> Result<Color, ParseError> {
    let token_initial = match input.next_including_whitespace_and_comments() {
        Ok(initial) => initial.clone(),
        Err(_) => return Err(ParseError::UnexpectedToken),
    };
    match token_initial {
        Token::Hash(value) | Token::IDHash(value) => {
            parse_hex_color(value.as_ref()).ok_or(ParseError::UnexpectedToken)
        }
        Token::Function(name) => {
            let result: Result<Option<Color>, CssParseError<'_, ()>> =
                input.parse_nested_block(|nested| Ok(parse_rgb_function(name.as_ref(), nested)));
            match result {
                Ok(Some(color)) => Ok(color),
                _ => Err(ParseError::UnexpectedToken),
            }
        }
        _ => Err(ParseError::UnexpectedToken),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssparser::ParserInput;

    fn parse(text: &str) -> Result<Color, ParseError> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        parse_color_literal(&mut parser)
    }

    #[test]
    fn hex_forms_expand() {
        let expected = Color {
            red: 0xaa,
            green: 0xbb,
            blue: 0xcc,
            alpha: 255,
        };
        assert_eq!(parse("#abc"), Ok(expected));
        assert_eq!(parse("#AABBCC"), Ok(expected));
        assert_eq!(color_from_hash("aabbcc"), Some(expected));
        assert_eq!(color_from_hash("abcd"), None);
    }

    #[test]
    fn rgba_function_keeps_alpha() {
        assert_eq!(
            parse("rgba(1, 2, 3, 4)"),
            Ok(Color {
                red: 1,
                green: 2,
                blue: 3,
                alpha: 4,
            })
        );
        assert_eq!(parse("rgb(1, 2)"), Err(ParseError::UnexpectedToken));
    }

    #[test]
    fn rgb_rejects_reals_and_extra_components() {
        assert_eq!(parse("rgb(1.5, 2, 3)"), Err(ParseError::UnexpectedToken));
        assert_eq!(parse("rgba(1 2 3 4 5)"), Err(ParseError::UnexpectedToken));
        assert_eq!(
            parse("RGB(300, -4, 7)"),
            Ok(Color {
                red: 255,
                green: 0,
                blue: 7,
                alpha: 255,
            })
        );
    }

    #[test]
    fn identifiers_are_not_colors() {
        assert_eq!(parse("red"), Err(ParseError::UnexpectedToken));
    }
}
