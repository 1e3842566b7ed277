use crate::{Ball, Input, Key, Racket};

/// Apply left/right input to the racket.
///
/// Holding both keys cancels out. The racket is not clamped to the field.
pub fn move_racket(racket: &mut Racket, input: &dyn Input) {
    if input.is_pressed(Key::Left) {
        racket.x -= racket.speed;
    }
    if input.is_pressed(Key::Right) {
        racket.x += racket.speed;
    }
}

/// Move ball based on velocity
pub fn move_ball(ball: &mut Ball) {
    ball.advance();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InputState;
    use glam::IVec2;

    #[test]
    fn test_racket_moves_left_and_right() {
        let mut racket = Racket::new(150, 5);
        move_racket(&mut racket, &InputState::pressed(Key::Left));
        assert_eq!(racket.x, 145);
        move_racket(&mut racket, &InputState::pressed(Key::Right));
        move_racket(&mut racket, &InputState::pressed(Key::Right));
        assert_eq!(racket.x, 155);
    }

    #[test]
    fn test_racket_both_keys_cancel() {
        let mut racket = Racket::new(150, 5);
        let input = InputState {
            left: true,
            right: true,
            ..InputState::default()
        };
        move_racket(&mut racket, &input);
        assert_eq!(racket.x, 150);
    }

    #[test]
    fn test_racket_is_not_clamped() {
        let mut racket = Racket::new(0, 5);
        for _ in 0..10 {
            move_racket(&mut racket, &InputState::pressed(Key::Left));
        }
        assert_eq!(racket.x, -50, "Racket may leave the field");
    }

    #[test]
    fn test_move_ball() {
        let mut ball = Ball::new(IVec2::new(100, 5), IVec2::new(3, 3));
        move_ball(&mut ball);
        assert_eq!(ball.pos, IVec2::new(103, 8));
    }
}
