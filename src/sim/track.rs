//! Obstacle track: spawn cadence, scrolling and pruning
//!
//! Obstacles all scroll at the same speed, so spawning at the right edge
//! keeps the sequence ordered leftmost-first without ever re-sorting.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Dimensions, Obstacle, Viewport};

/// Move every obstacle left by `speed` and drop those fully off-screen
pub fn advance(obstacles: &mut Vec<Obstacle>, speed: f32, dims: &Dimensions) {
    for obstacle in obstacles.iter_mut() {
        obstacle.x -= speed;
    }
    // retain preserves relative order
    obstacles.retain(|o| o.x + dims.obstacle_width >= 0.0);
}

/// Whether tick `time_ticks` is a spawn tick
pub fn is_spawn_tick(time_ticks: u64, frequency: u64) -> bool {
    time_ticks > 0 && frequency > 0 && time_ticks.is_multiple_of(frequency)
}

/// Spawn an obstacle if `time_ticks` lands on the cadence
///
/// Returns whether an obstacle was added.
pub fn maybe_generate(
    obstacles: &mut Vec<Obstacle>,
    time_ticks: u64,
    frequency: u64,
    dims: &Dimensions,
    viewport: Viewport,
    rng: &mut Pcg32,
) -> bool {
    if !is_spawn_tick(time_ticks, frequency) {
        return false;
    }
    generate(obstacles, dims, viewport, rng)
}

/// Range of valid top-column heights, None if the viewport is too short
pub fn top_height_range(dims: &Dimensions, viewport: Viewport) -> Option<(f32, f32)> {
    let min = dims.obstacle_min_height;
    let max = viewport.height - dims.obstacle_gap - dims.obstacle_min_height;
    (max >= min).then_some((min, max))
}

/// Spawn one obstacle at the right edge with a random gap position
///
/// A viewport too short for the gap plus both minimum columns spawns
/// nothing; returns whether an obstacle was added.
pub fn generate(
    obstacles: &mut Vec<Obstacle>,
    dims: &Dimensions,
    viewport: Viewport,
    rng: &mut Pcg32,
) -> bool {
    let Some((min, max)) = top_height_range(dims, viewport) else {
        log::debug!(
            "Viewport height {} too small for gap {} + 2x{}, skipping obstacle",
            viewport.height,
            dims.obstacle_gap,
            dims.obstacle_min_height
        );
        return false;
    };

    let top_height = (min + rng.random::<f32>() * (max - min)).min(max);
    obstacles.push(Obstacle {
        x: viewport.width,
        top_height,
        gap_start_y: top_height + dims.obstacle_gap,
    });
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use rand::SeedableRng;

    fn setup() -> (Dimensions, Viewport) {
        let viewport = Viewport::new(800.0, 400.0);
        (Dimensions::from_viewport(viewport, &Tuning::default()), viewport)
    }

    #[test]
    fn test_spawn_cadence() {
        assert!(!is_spawn_tick(0, 100));
        assert!(!is_spawn_tick(99, 100));
        assert!(is_spawn_tick(100, 100));
        assert!(is_spawn_tick(300, 100));
        assert!(!is_spawn_tick(301, 100));
    }

    #[test]
    fn test_generate_at_right_edge() {
        let (dims, viewport) = setup();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut obstacles = Vec::new();

        for _ in 0..200 {
            assert!(generate(&mut obstacles, &dims, viewport, &mut rng));
        }
        for o in &obstacles {
            assert_eq!(o.x, 800.0);
            assert!(o.top_height >= 40.0 - 1e-3 && o.top_height <= 220.0 + 1e-3);
            assert!((o.gap_start_y - o.top_height - 140.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_degenerate_viewport_skips() {
        let viewport = Viewport::new(800.0, 400.0);
        let tuning = Tuning {
            obstacle_min_height_ratio: 0.4,
            ..Default::default()
        };
        let dims = Dimensions::from_viewport(viewport, &tuning);
        let mut rng = Pcg32::seed_from_u64(1);
        let mut obstacles = Vec::new();

        assert!(top_height_range(&dims, viewport).is_none());
        assert!(!maybe_generate(&mut obstacles, 100, 100, &dims, viewport, &mut rng));
        assert!(obstacles.is_empty());
    }

    #[test]
    fn test_advance_prunes_and_keeps_order() {
        let (dims, _) = setup();
        let mut obstacles = vec![
            Obstacle { x: -66.0, top_height: 50.0, gap_start_y: 190.0 },
            Obstacle { x: 10.0, top_height: 60.0, gap_start_y: 200.0 },
            Obstacle { x: 400.0, top_height: 70.0, gap_start_y: 210.0 },
        ];

        advance(&mut obstacles, 3.5, &dims);
        // -69.5 + 70 = 0.5 is still on screen
        assert_eq!(obstacles.len(), 3);

        advance(&mut obstacles, 3.5, &dims);
        assert_eq!(obstacles.len(), 2);
        assert_eq!(obstacles[0].top_height, 60.0);
        assert_eq!(obstacles[1].top_height, 70.0);
        assert_eq!(obstacles[1].x, 393.0);
    }

    #[test]
    fn test_advance_keeps_obstacle_touching_left_edge() {
        let (dims, _) = setup();
        let mut obstacles = vec![Obstacle { x: -66.5, top_height: 50.0, gap_start_y: 190.0 }];

        // -70 + 70 = 0: the right edge sits exactly on the viewport edge
        advance(&mut obstacles, 3.5, &dims);
        assert_eq!(obstacles.len(), 1);
        assert_eq!(obstacles[0].x + dims.obstacle_width, 0.0);

        advance(&mut obstacles, 3.5, &dims);
        assert!(obstacles.is_empty());
    }
}
