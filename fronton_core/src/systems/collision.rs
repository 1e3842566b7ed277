use tracing::trace;

use crate::{Ball, Config, Events};

/// Bounce the ball off the side walls and the ceiling.
///
/// Only runs while the ball is above the racket band; returns `false` once it
/// has reached the band so the caller can resolve a hit or miss instead.
pub fn check_collisions(ball: &mut Ball, config: &Config, events: &mut Events) -> bool {
    if !config.above_racket_band(ball.pos.y) {
        return false;
    }

    if config.touches_side_wall(ball.pos.x) {
        ball.vel.x = -ball.vel.x;
        events.wall_bounce = true;
        trace!(pos = ?ball.pos, vel = ?ball.vel, "wall bounce");
    }

    if config.touches_ceiling(ball.pos.y) {
        ball.vel.y = -ball.vel.y;
        events.ceiling_bounce = true;
        trace!(pos = ?ball.pos, vel = ?ball.vel, "ceiling bounce");
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    fn setup() -> (Config, Events) {
        (Config::new(), Events::new())
    }

    #[test]
    fn test_left_wall_inverts_vx_only() {
        let (config, mut events) = setup();
        let mut ball = Ball::new(IVec2::new(4, 300), IVec2::new(-3, 3));

        assert!(check_collisions(&mut ball, &config, &mut events));

        assert_eq!(ball.vel, IVec2::new(3, 3));
        assert!(events.wall_bounce);
        assert!(!events.ceiling_bounce);
    }

    #[test]
    fn test_right_wall_inverts_vx_only() {
        let (config, mut events) = setup();
        let mut ball = Ball::new(IVec2::new(394, 300), IVec2::new(4, -5));

        check_collisions(&mut ball, &config, &mut events);

        assert_eq!(ball.vel, IVec2::new(-4, -5));
    }

    #[test]
    fn test_ceiling_inverts_vy_only() {
        let (config, mut events) = setup();
        let mut ball = Ball::new(IVec2::new(200, 2), IVec2::new(3, -3));

        check_collisions(&mut ball, &config, &mut events);

        assert_eq!(ball.vel, IVec2::new(3, 3));
        assert!(events.ceiling_bounce);
        assert!(!events.wall_bounce);
    }

    #[test]
    fn test_corner_inverts_both() {
        let (config, mut events) = setup();
        let mut ball = Ball::new(IVec2::new(0, 0), IVec2::new(-3, -3));

        check_collisions(&mut ball, &config, &mut events);

        assert_eq!(ball.vel, IVec2::new(3, 3));
    }

    #[test]
    fn test_open_field_no_bounce() {
        let (config, mut events) = setup();
        let mut ball = Ball::new(IVec2::new(200, 300), IVec2::new(3, 3));

        assert!(check_collisions(&mut ball, &config, &mut events));

        assert_eq!(ball.vel, IVec2::new(3, 3));
        assert_eq!(events, Events::new());
    }

    #[test]
    fn test_band_skips_wall_checks() {
        let (config, mut events) = setup();
        // In the band and against the wall: no bounce, caller takes over
        let mut ball = Ball::new(IVec2::new(2, 586), IVec2::new(-3, 3));

        assert!(!check_collisions(&mut ball, &config, &mut events));

        assert_eq!(ball.vel, IVec2::new(-3, 3));
        assert!(!events.wall_bounce);
    }
}
