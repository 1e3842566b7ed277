use glam::IVec2;
use rand::Rng;

use crate::{Config, GameRng};

/// Ball component - position and per-tick velocity in field units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub pos: IVec2,
    pub vel: IVec2, // Sign gives direction
}

impl Ball {
    pub fn new(pos: IVec2, vel: IVec2) -> Self {
        Self { pos, vel }
    }

    /// Ball at a random x on the spawn line with the initial velocity
    pub fn spawn(config: &Config, rng: &mut GameRng) -> Self {
        let mut ball = Self::new(IVec2::ZERO, config.ball_velocity_initial());
        ball.respawn(config, rng);
        ball
    }

    /// Move the ball back to the spawn line; velocity is kept
    pub fn respawn(&mut self, config: &Config, rng: &mut GameRng) {
        let x = rng.0.gen_range(0..config.field_width);
        self.pos = IVec2::new(x, config.ball_spawn_y);
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

/// Racket component - only moves horizontally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Racket {
    pub x: i32,
    pub speed: i32, // Constant for now
}

impl Racket {
    pub fn new(x: i32, speed: i32) -> Self {
        Self { x, speed }
    }

    pub fn centered(config: &Config) -> Self {
        Self::new(config.racket_start_x(), config.racket_speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_spawn_on_spawn_line() {
        let config = Config::new();
        let mut rng = GameRng::new(7);
        for _ in 0..100 {
            let ball = Ball::spawn(&config, &mut rng);
            assert_eq!(ball.pos.y, 5);
            assert!((0..config.field_width).contains(&ball.pos.x));
            assert_eq!(ball.vel, IVec2::new(3, 3));
        }
    }

    #[test]
    fn test_ball_respawn_keeps_velocity() {
        let config = Config::new();
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(IVec2::new(20, 620), IVec2::new(-6, 7));
        ball.respawn(&config, &mut rng);
        assert_eq!(ball.pos.y, config.ball_spawn_y);
        assert_eq!(ball.vel, IVec2::new(-6, 7), "Velocity survives respawn");
    }

    #[test]
    fn test_ball_advance() {
        let mut ball = Ball::new(IVec2::new(10, 10), IVec2::new(-3, 4));
        ball.advance();
        assert_eq!(ball.pos, IVec2::new(7, 14));
    }

    #[test]
    fn test_racket_centered() {
        let racket = Racket::centered(&Config::new());
        assert_eq!(racket, Racket::new(150, 5));
    }
}
