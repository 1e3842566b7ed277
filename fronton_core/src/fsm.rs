//! Phase State Machine
//!
//! Coarse game flow: not started, playing, over. Restarting goes back to
//! `NotStarted` and is always paired with a full reinitialize of the game.

use tracing::info;

/// Game phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    NotStarted,
    Playing,
    Over,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseAction {
    Start,
    Win,
    Restart,
}

/// Result of a phase transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from: Phase,
    pub to: Phase,
    pub action: PhaseAction,
}

/// Game Finite State Machine
#[derive(Debug, Clone, Default)]
pub struct GameFsm {
    phase: Phase,
}

impl GameFsm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: PhaseAction) -> bool {
        self.next_phase(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: PhaseAction) -> TransitionResult {
        let from = self.phase;

        match self.next_phase(action) {
            Some(to) => {
                self.phase = to;
                info!(?from, ?to, ?action, "phase transition");
                TransitionResult {
                    success: true,
                    from,
                    to,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from,
                to: from,
                action,
            },
        }
    }

    /// Get next phase for a given action (if valid)
    fn next_phase(&self, action: PhaseAction) -> Option<Phase> {
        match (self.phase, action) {
            (Phase::NotStarted, PhaseAction::Start) => Some(Phase::Playing),
            (Phase::Playing, PhaseAction::Win) => Some(Phase::Over),
            (Phase::Over, PhaseAction::Restart) => Some(Phase::NotStarted),
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }
}
