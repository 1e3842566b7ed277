/// Game tuning parameters for Fronton
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Window
    pub const WINDOW_TITLE: &'static str = "Fronton";

    // Field (logical units, origin top-left, y grows downwards)
    pub const SCREEN_WIDTH: i32 = 400;
    pub const SCREEN_HEIGHT: i32 = 600;

    // Racket
    pub const RACKET_WIDTH: i32 = Self::SCREEN_WIDTH / 4;
    pub const RACKET_HEIGHT: i32 = 5;
    pub const RACKET_MARGIN: i32 = 5; // Gap between racket and field bottom
    pub const RACKET_SPEED: i32 = 5; // units per tick

    // Ball
    pub const BALL_RADIUS: i32 = 5;
    pub const BALL_SPAWN_Y: i32 = 5;
    pub const BALL_SPEED_INITIAL: i32 = 3; // Both axes
    pub const BALL_SPEED_RESTART: i32 = 3; // Used when a speed component is zero

    // Score
    pub const WIN_SCORE: u32 = 8; // First to 8 wins

    // Timing
    pub const TICKS_PER_SECOND: u32 = 60;
    pub const MAX_FRAME_TIME: f32 = 0.25; // Clamp to prevent tick bursts
}
