//! Spec: §2.3 Text Decoration Style: the `text-decoration-style` property
//! <https://www.w3.org/TR/css-text-decor-3/#text-decoration-style-property>

use css_cascade::{KeywordGrammar, KeywordProperty, Layering};
use css_values_units::KeywordTable;
use once_cell::sync::Lazy;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextDecorationStyle {
    #[default]
    Solid,
    Double,
    Dotted,
    Dashed,
    Wavy,
}

static STYLE_KEYWORDS: &[(&str, TextDecorationStyle)] = &[
    ("solid", TextDecorationStyle::Solid),
    ("double", TextDecorationStyle::Double),
    ("dotted", TextDecorationStyle::Dotted),
    ("dashed", TextDecorationStyle::Dashed),
    ("wavy", TextDecorationStyle::Wavy),
];

static STYLE_TABLE: Lazy<KeywordTable<TextDecorationStyle>> =
    Lazy::new(|| KeywordTable::new(STYLE_KEYWORDS));

/// `text-decoration-style: solid | double | dotted | dashed | wavy`, initial `solid`.
pub static TEXT_DECORATION_STYLE: KeywordGrammar<TextDecorationStyle> = KeywordGrammar {
    name: "text-decoration-style",
    keywords: &STYLE_TABLE,
    layering: Layering::Single,
    initial: TextDecorationStyle::Solid,
    inherited: false,
};

pub type TextDecorationStyleProperty = KeywordProperty<TextDecorationStyle>;

#[inline]
pub fn text_decoration_style() -> TextDecorationStyleProperty {
    KeywordProperty::new(&TEXT_DECORATION_STYLE)
}
