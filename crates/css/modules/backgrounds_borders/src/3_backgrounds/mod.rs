//! Spec: §3 — Backgrounds
//! Every background property is a comma-separated list with one entry per background layer.

pub mod part_3_5_background_attachment;
pub mod part_3_7_background_areas;
