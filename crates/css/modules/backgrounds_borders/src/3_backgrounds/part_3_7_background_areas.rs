//! Spec: §3.7 Painting Area: the `background-clip` property
//! <https://www.w3.org/TR/css-backgrounds-3/#background-clip>
//! Spec: §3.8 Positioning Area: the `background-origin` property
//! <https://www.w3.org/TR/css-backgrounds-3/#background-origin>

use css_cascade::{KeywordGrammar, KeywordProperty, Layering};
use css_values_units::KeywordTable;
use once_cell::sync::Lazy;

/// The `<box>` value shared by `background-clip` and `background-origin`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BackgroundBox {
    BorderBox,
    PaddingBox,
    ContentBox,
}

static BOX_KEYWORDS: &[(&str, BackgroundBox)] = &[
    ("border-box", BackgroundBox::BorderBox),
    ("padding-box", BackgroundBox::PaddingBox),
    ("content-box", BackgroundBox::ContentBox),
];

static BOX_TABLE: Lazy<KeywordTable<BackgroundBox>> =
    Lazy::new(|| KeywordTable::new(BOX_KEYWORDS));

/// `background-clip: <box>#`, initial `border-box`.
pub static BACKGROUND_CLIP: KeywordGrammar<BackgroundBox> = KeywordGrammar {
    name: "background-clip",
    keywords: &BOX_TABLE,
    layering: Layering::CommaSeparated,
    initial: BackgroundBox::BorderBox,
    inherited: false,
};

/// `background-origin: <box>#`, initial `padding-box`.
pub static BACKGROUND_ORIGIN: KeywordGrammar<BackgroundBox> = KeywordGrammar {
    name: "background-origin",
    keywords: &BOX_TABLE,
    layering: Layering::CommaSeparated,
    initial: BackgroundBox::PaddingBox,
    inherited: false,
};

/// Validator for `background-clip` and `background-origin`.
pub type BackgroundBoxProperty = KeywordProperty<BackgroundBox>;

#[inline]
pub fn background_clip() -> BackgroundBoxProperty {
    KeywordProperty::new(&BACKGROUND_CLIP)
}

#[inline]
pub fn background_origin() -> BackgroundBoxProperty {
    KeywordProperty::new(&BACKGROUND_ORIGIN)
}
