//! Spec: §2 — Line Decoration

pub mod part_2_1_text_decoration_line;
pub mod part_2_3_text_decoration_style;
