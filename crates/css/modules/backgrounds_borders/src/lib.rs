//! CSS Backgrounds and Borders Module Level 3 — Layered background properties.
//! Spec: <https://www.w3.org/TR/css-backgrounds-3/>

#![forbid(unsafe_code)]

// Chapter modules mapped to the Backgrounds 3 spec structure.
// Spec: §3 — Backgrounds
#[path = "3_backgrounds/mod.rs"]
mod chapter3;

pub use chapter3::part_3_5_background_attachment::{
    BACKGROUND_ATTACHMENT, BackgroundAttachment, BackgroundAttachmentProperty,
    background_attachment,
};
pub use chapter3::part_3_7_background_areas::{
    BACKGROUND_CLIP, BACKGROUND_ORIGIN, BackgroundBox, BackgroundBoxProperty, background_clip,
    background_origin,
};
