//! Text shown through the host's debug print

use crate::{Score, Side};

pub const RESTART_HINT: &str = "\n\nPress SPACE to start again, ESC to exit.";

/// Instructions for the not-started screen
pub fn intro_message(win_score: u32) -> String {
    format!(
        "Press SPACE to start, ESC at any time to finish.\n\
         Move racket with horizontal arrows.\n\
         First to score {win_score} wins. Enjoy!"
    )
}

pub fn game_over_message(winner: Side) -> &'static str {
    match winner {
        Side::Player => "Game over. You won!",
        Side::Cpu => "Game over. I won!",
    }
}

/// Running score as `player/cpu`
pub fn score_line(score: &Score) -> String {
    format!("Score: {}/{}", score.player, score.cpu)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intro_mentions_threshold_and_controls() {
        let text = intro_message(8);
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("SPACE"));
        assert!(text.contains("ESC"));
        assert!(text.contains("First to score 8 wins"));
    }

    #[test]
    fn test_game_over_message() {
        assert_eq!(game_over_message(Side::Player), "Game over. You won!");
        assert_eq!(game_over_message(Side::Cpu), "Game over. I won!");
    }

    #[test]
    fn test_score_line() {
        let score = Score { player: 3, cpu: 5 };
        assert_eq!(score_line(&score), "Score: 3/5");
    }
}
