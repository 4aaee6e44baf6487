//! UI rendering for the query handler terminal surfaces.
//!
//! Responsibilities:
//! - Theme style helpers (`theme`).
//! - Themed placeholder widgets (`widgets`).
//! - Drawing the demo screen (`render`).

pub mod render;
pub mod theme;
pub mod widgets;

pub use render::render;
