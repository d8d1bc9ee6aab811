//! Collision detection
//!
//! Everything on screen is an axis-aligned rectangle: the craft, and each
//! obstacle's top and bottom columns. Overlap uses strict inequalities, so
//! rectangles that only share an edge do not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Craft, Dimensions, Obstacle, Viewport};

/// Axis-aligned rectangle (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// Strict AABB overlap
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
    }
}

/// The craft's bounding box
pub fn craft_rect(craft: &Craft, dims: &Dimensions) -> Rect {
    Rect::new(dims.craft_x, craft.y, dims.craft_width, dims.craft_height)
}

/// An obstacle's (top, bottom) column rectangles
pub fn obstacle_rects(obstacle: &Obstacle, dims: &Dimensions, viewport: Viewport) -> (Rect, Rect) {
    let top = Rect::new(obstacle.x, 0.0, dims.obstacle_width, obstacle.top_height);
    let bottom = Rect::new(
        obstacle.x,
        obstacle.gap_start_y,
        dims.obstacle_width,
        viewport.height - obstacle.gap_start_y,
    );
    (top, bottom)
}

/// Whether the craft overlaps any obstacle column
///
/// Obstacles are stored leftmost-first and the craft sits near the left
/// edge, so the nearest candidates are tested first.
pub fn check(craft: &Craft, obstacles: &[Obstacle], dims: &Dimensions, viewport: Viewport) -> bool {
    let craft = craft_rect(craft, dims);
    obstacles.iter().any(|obstacle| {
        let (top, bottom) = obstacle_rects(obstacle, dims, viewport);
        craft.overlaps(&top) || craft.overlaps(&bottom)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn setup() -> (Dimensions, Viewport) {
        let viewport = Viewport::new(800.0, 400.0);
        (Dimensions::from_viewport(viewport, &Tuning::default()), viewport)
    }

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(20.0, 0.0, 10.0, 10.0)));
        // Shared edges don't count
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_craft_in_gap_is_safe() {
        let (dims, viewport) = setup();
        // Gap spans y in [100, 240]; craft (25 tall) at 150
        let obstacle = Obstacle { x: 100.0, top_height: 100.0, gap_start_y: 240.0 };
        let craft = Craft { y: 150.0, vel_y: 0.0 };
        assert!(!check(&craft, &[obstacle], &dims, viewport));
    }

    #[test]
    fn test_craft_hits_top_column() {
        let (dims, viewport) = setup();
        let obstacle = Obstacle { x: 100.0, top_height: 100.0, gap_start_y: 240.0 };
        let craft = Craft { y: 99.0, vel_y: 0.0 };
        assert!(check(&craft, &[obstacle], &dims, viewport));
    }

    #[test]
    fn test_craft_hits_bottom_column() {
        let (dims, viewport) = setup();
        let obstacle = Obstacle { x: 100.0, top_height: 100.0, gap_start_y: 240.0 };
        let craft = Craft { y: 216.0, vel_y: 0.0 };
        assert!(check(&craft, &[obstacle], &dims, viewport));
    }

    #[test]
    fn test_touching_columns_is_safe() {
        let (dims, viewport) = setup();
        // Gap exactly as tall as the craft, craft exactly inside it
        let obstacle = Obstacle { x: 100.0, top_height: 100.0, gap_start_y: 125.0 };
        let craft = Craft { y: 100.0, vel_y: 0.0 };
        assert!(!check(&craft, &[obstacle], &dims, viewport));
    }

    #[test]
    fn test_horizontal_miss() {
        let (dims, viewport) = setup();
        // Obstacle starts exactly at the craft's right edge
        let obstacle = Obstacle {
            x: dims.craft_x + dims.craft_width,
            top_height: 390.0,
            gap_start_y: 395.0,
        };
        let craft = Craft { y: 150.0, vel_y: 0.0 };
        assert!(!check(&craft, &[obstacle], &dims, viewport));
    }
}
