//! Spec: §3.5 Affixing Images: the `background-attachment` property
//! <https://www.w3.org/TR/css-backgrounds-3/#background-attachment>

use css_cascade::{KeywordGrammar, KeywordProperty, Layering};
use css_values_units::KeywordTable;
use once_cell::sync::Lazy;

/// How a background layer is attached to the viewport or the element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BackgroundAttachment {
    /// Fixed with regard to the viewport.
    Fixed,
    /// Fixed with regard to the element's contents; scrolls with them.
    Local,
    /// Fixed with regard to the element itself.
    #[default]
    Scroll,
}

static ATTACHMENT_KEYWORDS: &[(&str, BackgroundAttachment)] = &[
    ("fixed", BackgroundAttachment::Fixed),
    ("local", BackgroundAttachment::Local),
    ("scroll", BackgroundAttachment::Scroll),
];

static ATTACHMENT_TABLE: Lazy<KeywordTable<BackgroundAttachment>> =
    Lazy::new(|| KeywordTable::new(ATTACHMENT_KEYWORDS));

/// `background-attachment: <attachment>#`, initial `scroll`, not inherited.
pub static BACKGROUND_ATTACHMENT: KeywordGrammar<BackgroundAttachment> = KeywordGrammar {
    name: "background-attachment",
    keywords: &ATTACHMENT_TABLE,
    layering: Layering::CommaSeparated,
    initial: BackgroundAttachment::Scroll,
    inherited: false,
};

/// Validator for `background-attachment`; [`KeywordProperty::values`] yields one attachment
/// per layer.
pub type BackgroundAttachmentProperty = KeywordProperty<BackgroundAttachment>;

/// Create a `background-attachment` validator holding the initial value.
#[inline]
pub fn background_attachment() -> BackgroundAttachmentProperty {
    KeywordProperty::new(&BACKGROUND_ATTACHMENT)
}
