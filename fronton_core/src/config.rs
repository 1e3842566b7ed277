use crate::Params;
use glam::IVec2;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: i32,
    pub field_height: i32,
    pub racket_width: i32,
    pub racket_height: i32,
    pub racket_margin: i32,
    pub racket_speed: i32,
    pub ball_radius: i32,
    pub ball_spawn_y: i32,
    pub ball_speed_initial: i32,
    pub win_score: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::SCREEN_WIDTH,
            field_height: Params::SCREEN_HEIGHT,
            racket_width: Params::RACKET_WIDTH,
            racket_height: Params::RACKET_HEIGHT,
            racket_margin: Params::RACKET_MARGIN,
            racket_speed: Params::RACKET_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_spawn_y: Params::BALL_SPAWN_Y,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Top edge of the racket band
    pub fn racket_y(&self) -> i32 {
        self.field_height - self.racket_height - self.racket_margin
    }

    /// Racket X that centers it horizontally
    pub fn racket_start_x(&self) -> i32 {
        self.field_width / 2 - self.racket_width / 2
    }

    pub fn field_center(&self) -> IVec2 {
        IVec2::new(self.field_width / 2, self.field_height / 2)
    }

    pub fn ball_velocity_initial(&self) -> IVec2 {
        IVec2::splat(self.ball_speed_initial)
    }

    /// True while the ball's bottom edge has not reached the racket band
    pub fn above_racket_band(&self, ball_y: i32) -> bool {
        ball_y + self.ball_radius < self.racket_y()
    }

    pub fn touches_side_wall(&self, ball_x: i32) -> bool {
        ball_x - self.ball_radius <= 0 || ball_x + self.ball_radius >= self.field_width - 1
    }

    pub fn touches_ceiling(&self, ball_y: i32) -> bool {
        ball_y - self.ball_radius <= 0
    }

    /// Both racket ends count as a hit
    pub fn racket_span_contains(&self, racket_x: i32, ball_x: i32) -> bool {
        ball_x >= racket_x && ball_x <= racket_x + self.racket_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_racket_geometry() {
        let config = Config::new();
        assert_eq!(config.racket_width, 100, "Racket is a quarter of the field");
        assert_eq!(config.racket_y(), 590, "Racket band top edge");
        assert_eq!(config.racket_start_x(), 150, "Racket starts centered");
    }

    #[test]
    fn test_config_racket_band() {
        let config = Config::new();
        assert!(config.above_racket_band(584));
        assert!(!config.above_racket_band(585), "Bottom edge at 590 is in the band");
        assert!(!config.above_racket_band(700));
    }

    #[test]
    fn test_config_walls_and_ceiling() {
        let config = Config::new();
        assert!(config.touches_side_wall(5));
        assert!(!config.touches_side_wall(6));
        assert!(config.touches_side_wall(394));
        assert!(!config.touches_side_wall(393));
        assert!(config.touches_ceiling(5));
        assert!(!config.touches_ceiling(6));
    }

    #[test]
    fn test_config_racket_span_inclusive() {
        let config = Config::new();
        assert!(config.racket_span_contains(150, 150));
        assert!(config.racket_span_contains(150, 250));
        assert!(!config.racket_span_contains(150, 149));
        assert!(!config.racket_span_contains(150, 251));
    }
}
