use crate::Params;

/// Grow a speed component by one unit, keeping its direction.
/// A stalled component restarts at `Params::BALL_SPEED_RESTART`.
pub fn accelerate(speed: i32) -> i32 {
    match speed {
        s if s > 0 => s + 1,
        s if s < 0 => s - 1,
        _ => Params::BALL_SPEED_RESTART,
    }
}

/// Like [`accelerate`] but also turns the component around
pub fn accelerate_and_reverse(speed: i32) -> i32 {
    match speed {
        s if s > 0 => -(s + 1),
        s if s < 0 => -(s - 1),
        _ => Params::BALL_SPEED_RESTART,
    }
}
