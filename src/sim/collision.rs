//! Paddle collision and rebound math
//!
//! Pure helpers shared by the tick. The ball is an axis-aligned square and
//! each paddle guards a vertical slab one paddle-width deep against its
//! wall. The visible paddle is drawn 10 px further into the field; the
//! collision volume hugs the wall.

use glam::Vec2;

use crate::consts::*;
use crate::sim::state::Side;

/// True when the ball overlaps the given paddle's collision slab.
///
/// Single-step test against the post-integration position. A ball fast
/// enough to cross the slab within one frame passes through untouched.
#[inline]
pub fn hits_paddle(ball_pos: Vec2, paddle_y: f32, side: Side) -> bool {
    let in_slab = match side {
        Side::Left => ball_pos.x < PADDLE_WIDTH,
        Side::Right => ball_pos.x + BALL_SIZE > SCREEN_WIDTH - PADDLE_WIDTH,
    };
    in_slab && ball_pos.y + BALL_SIZE > paddle_y && ball_pos.y < paddle_y + PADDLE_HEIGHT
}

/// Vertical rebound velocity for a ball striking a paddle at `ball_y`.
///
/// Linear in the hit position: the paddle's top edge sends the ball up at
/// full gain, the center sends it out flat, the bottom edge down at full
/// gain. The incoming vertical velocity plays no part.
#[inline]
pub fn deflected_vy(ball_y: f32, paddle_y: f32) -> f32 {
    let relative = ball_y - paddle_y;
    (relative / PADDLE_HEIGHT * 2.0 - 1.0) * DEFLECT_GAIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deflection_across_the_paddle_face() {
        // Paddle top edge at 200: top hit rebounds steeply up, center hit
        // rebounds flat, bottom hit steeply down.
        assert!((deflected_vy(200.0, 200.0) - (-5.0)).abs() < 1e-6);
        assert!((deflected_vy(240.0, 200.0) - 0.0).abs() < 1e-6);
        assert!((deflected_vy(280.0, 200.0) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_deflection_is_linear_between_edges() {
        // Quarter of the way down the face.
        assert!((deflected_vy(220.0, 200.0) - (-2.5)).abs() < 1e-6);
        // Three quarters.
        assert!((deflected_vy(260.0, 200.0) - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_left_slab_is_one_paddle_width_deep() {
        let y = 230.0;
        assert!(hits_paddle(Vec2::new(0.0, y), 200.0, Side::Left));
        assert!(hits_paddle(Vec2::new(19.9, y), 200.0, Side::Left));
        assert!(!hits_paddle(Vec2::new(20.0, y), 200.0, Side::Left));
    }

    #[test]
    fn test_right_slab_mirrors_the_left() {
        let y = 230.0;
        assert!(hits_paddle(Vec2::new(619.9, y), 200.0, Side::Right));
        assert!(hits_paddle(Vec2::new(600.1, y), 200.0, Side::Right));
        assert!(!hits_paddle(Vec2::new(600.0, y), 200.0, Side::Right));
    }

    #[test]
    fn test_vertical_overlap_is_exclusive_at_both_edges() {
        // Ball bottom exactly on the paddle top, and ball top exactly on
        // the paddle bottom, both miss.
        assert!(!hits_paddle(Vec2::new(5.0, 180.0), 200.0, Side::Left));
        assert!(!hits_paddle(Vec2::new(5.0, 280.0), 200.0, Side::Left));
        // One pixel inside either edge hits.
        assert!(hits_paddle(Vec2::new(5.0, 181.0), 200.0, Side::Left));
        assert!(hits_paddle(Vec2::new(5.0, 279.0), 200.0, Side::Left));
    }
}
