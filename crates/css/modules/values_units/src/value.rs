//! Component values as handed from the tokenizer to property grammars.
//! Spec: <https://www.w3.org/TR/css-values-3/#component-types>

use core::fmt;
use core::slice;

use crate::{Color, Length, LengthUnit, Number, Percentage};

/// A tokenized CSS value.
///
/// A declaration value with a single component is a bare value; anything else is a
/// [`CssValue::List`]. Grammars read both shapes through [`CssValue::components`].
#[derive(Clone, Debug, PartialEq)]
pub enum CssValue {
    /// An identifier with its authored spelling. Comparisons ignore ASCII case.
    Keyword(String),
    /// Whitespace- or comma-separated components in source order.
    List(Vec<CssValue>),
    /// The layer delimiter (`,`).
    Separator,
    Number(Number),
    Percentage(Percentage),
    Length(Length),
    /// A dimension whose unit is not a length (`45deg`, `2s`), kept with its unit text.
    Dimension {
        value: f32,
        unit: String,
    },
    Color(Color),
    String(String),
    Url(String),
    /// A delimiter token such as `/` or `!`.
    Delimiter(char),
    /// A functional notation such as `rgb(...)` or `calc(...)` with its parsed arguments.
    Function {
        name: String,
        arguments: Vec<CssValue>,
    },
}

impl CssValue {
    /// Build a keyword component.
    #[inline]
    pub fn keyword(text: impl Into<String>) -> Self {
        Self::Keyword(text.into())
    }

    /// Build a list value from components.
    #[inline]
    pub fn list(items: impl IntoIterator<Item = Self>) -> Self {
        Self::List(items.into_iter().collect())
    }

    #[inline]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Elements of a list value, or `None` for a bare value.
    #[inline]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// View the value as a list: list elements, or a one-element slice holding a bare value.
    #[inline]
    pub fn components(&self) -> &[Self] {
        match self {
            Self::List(items) => items,
            other => slice::from_ref(other),
        }
    }

    /// Identifier text if this is a keyword.
    #[inline]
    pub fn as_keyword(&self) -> Option<&str> {
        match self {
            Self::Keyword(text) => Some(text),
            _ => None,
        }
    }

    /// True if this is the keyword `spelling`, ignoring ASCII case.
    #[inline]
    pub fn is_keyword(&self, spelling: &str) -> bool {
        self.as_keyword()
            .is_some_and(|text| text.eq_ignore_ascii_case(spelling))
    }

    #[inline]
    pub const fn is_separator(&self) -> bool {
        matches!(self, Self::Separator)
    }
}

impl fmt::Display for CssValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword(text) => formatter.write_str(text),
            Self::List(items) => write_components(formatter, items),
            Self::Separator => formatter.write_str(","),
            Self::Number(Number(value)) => write!(formatter, "{value}"),
            Self::Percentage(Percentage(fraction)) => write!(formatter, "{}%", fraction * 100.0),
            Self::Length(length) => write!(formatter, "{}{}", length.value, unit_suffix(length.unit)),
            Self::Dimension { value, unit } => write!(formatter, "{value}{unit}"),
            Self::Color(color) => {
                if color.alpha == u8::MAX {
                    write!(
                        formatter,
                        "#{:02x}{:02x}{:02x}",
                        color.red, color.green, color.blue
                    )
                } else {
                    write!(
                        formatter,
                        "rgba({}, {}, {}, {})",
                        color.red,
                        color.green,
                        color.blue,
                        f32::from(color.alpha) / f32::from(u8::MAX)
                    )
                }
            }
            Self::String(text) => write!(formatter, "{text:?}"),
            Self::Url(url) => write!(formatter, "url({url})"),
            Self::Delimiter(delimiter) => write!(formatter, "{delimiter}"),
            Self::Function { name, arguments } => {
                write!(formatter, "{name}(")?;
                write_components(formatter, arguments)?;
                formatter.write_str(")")
            }
        }
    }
}

/// Write components space-separated, with commas attached to the preceding component.
fn write_components(formatter: &mut fmt::Formatter<'_>, items: &[CssValue]) -> fmt::Result {
    let mut first = true;
    for item in items {
        if item.is_separator() {
            formatter.write_str(",")?;
            continue;
        }
        if !first {
            formatter.write_str(" ")?;
        }
        first = false;
        write!(formatter, "{item}")?;
    }
    Ok(())
}

/// Canonical unit suffix for a length unit.
const fn unit_suffix(unit: LengthUnit) -> &'static str {
    match unit {
        LengthUnit::Pixels => "px",
        LengthUnit::Ems => "em",
        LengthUnit::RootEms => "rem",
        LengthUnit::ViewportWidth => "vw",
        LengthUnit::ViewportHeight => "vh",
        LengthUnit::Centimeters => "cm",
        LengthUnit::Millimeters => "mm",
        LengthUnit::Inches => "in",
        LengthUnit::Points => "pt",
        LengthUnit::Picas => "pc",
    }
}
