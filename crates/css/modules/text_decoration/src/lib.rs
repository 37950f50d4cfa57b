//! CSS Text Decoration Module Level 3 — Line decoration properties.
//! Spec: <https://www.w3.org/TR/css-text-decor-3/>

#![forbid(unsafe_code)]

// Spec: §2 — Line Decoration: underline, overline, and strike-through
#[path = "2_line_decoration/mod.rs"]
mod chapter2;

pub use chapter2::part_2_1_text_decoration_line::{
    TextDecorationLine, TextDecorationLineProperty,
};
pub use chapter2::part_2_3_text_decoration_style::{
    TEXT_DECORATION_STYLE, TextDecorationStyle, TextDecorationStyleProperty,
    text_decoration_style,
};
