// src/layout/mod.rs
//
// Presentation helpers that do not depend on any UI toolkit.

pub mod flow;

pub use flow::{FlowLayout, FlowPlacement, Point, Size};
