//! Property-value validation for CSS declarations.
//!
//! Ties the tokenizer in `css_syntax` to the per-property validators of the module crates:
//! [`PropertyRegistry`] creates validators by name and [`PropertyBlock`] drives them through a
//! declaration list the way a style attribute or a rule body is applied.

#![forbid(unsafe_code)]

mod block;
mod registry;

pub use block::PropertyBlock;
pub use registry::{PropertyFactory, PropertyRegistry};

pub use css_backgrounds_borders::{
    BackgroundAttachment, BackgroundAttachmentProperty, BackgroundBox, BackgroundBoxProperty,
};
pub use css_cascade::{CssWideKeyword, PropertyValidator, Specified, ValidatorState};
pub use css_syntax::{Declaration, parse_declaration_list, parse_value};
pub use css_text_decoration::{
    TextDecorationLine, TextDecorationLineProperty, TextDecorationStyle,
    TextDecorationStyleProperty,
};
pub use css_values_units::{CssValue, ValidationError};
