//! Render surface for the presentation layer
//!
//! The core never draws. After each tick it hands the presentation layer a
//! read-only `RenderSnapshot`; whatever implements `Renderer` turns that into
//! pixels, text or log lines.

pub mod snapshot;

pub use snapshot::{ObstacleRects, RenderSnapshot};

/// Something that can present a snapshot
pub trait Renderer {
    fn render(&mut self, snapshot: &RenderSnapshot);
}

/// Renderer that discards every frame (headless runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _snapshot: &RenderSnapshot) {}
}
