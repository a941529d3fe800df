//! Exchange state and core types
//!
//! The whole-application flow has two screens: collecting names (`Input`) and
//! showing a fixed set of matches (`Result`). A draw moves `Input` → `Result`;
//! an explicit reset moves back. Nothing transitions on its own.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::MIN_PARTICIPANTS;

/// Someone taking part in the exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Unique id, stable for the participant's lifetime
    pub id: u64,
    /// Display name as entered
    pub name: String,
    /// Optional contact number, free-form as entered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// One giver → receiver assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub giver: Participant,
    pub receiver: Participant,
}

/// Current screen of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExchangePhase {
    /// Collecting participants
    #[default]
    Input,
    /// Displaying a fixed match set
    Result,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrawError {
    #[error("at least 2 participants are required")]
    NotEnoughParticipants,
    #[error("a draw is already running")]
    AlreadyDrawing,
}

/// Application exchange state: current phase, current match set, and a busy
/// flag covering the suspense delay between triggering a draw and showing it.
#[derive(Debug, Clone, Default)]
pub struct ExchangeState {
    pub phase: ExchangePhase,
    pub matches: Vec<Match>,
    drawing: bool,
}

impl ExchangeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a draw has been triggered but not yet completed
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Start a draw. Rejects if fewer than two participants are available or
    /// a draw is already in flight; the phase stays `Input` either way.
    pub fn begin_draw(&mut self, participant_count: usize) -> Result<(), DrawError> {
        if self.drawing {
            return Err(DrawError::AlreadyDrawing);
        }
        if participant_count < MIN_PARTICIPANTS {
            return Err(DrawError::NotEnoughParticipants);
        }
        self.drawing = true;
        Ok(())
    }

    /// Install the match set produced by a draw and switch to the result
    /// screen. A draw, once started, always completes with a valid set.
    pub fn complete_draw(&mut self, matches: Vec<Match>) {
        self.matches = matches;
        self.phase = ExchangePhase::Result;
        self.drawing = false;
    }

    /// Discard the current match set and return to the input screen. The
    /// participant list is owned elsewhere and is not touched.
    pub fn reset(&mut self) {
        self.matches.clear();
        self.phase = ExchangePhase::Input;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(id: u64, name: &str) -> Participant {
        Participant {
            id,
            name: name.to_owned(),
            phone_number: None,
        }
    }

    #[test]
    fn draw_rejected_below_minimum() {
        let mut state = ExchangeState::new();
        assert_eq!(
            state.begin_draw(1),
            Err(DrawError::NotEnoughParticipants)
        );
        assert_eq!(state.phase, ExchangePhase::Input);
        assert!(!state.is_drawing());
        assert!(state.matches.is_empty());
    }

    #[test]
    fn draw_completes_into_result_phase() {
        let mut state = ExchangeState::new();
        state.begin_draw(2).unwrap();
        assert!(state.is_drawing());

        let matches = vec![
            Match {
                giver: participant(1, "Alice"),
                receiver: participant(2, "Bob"),
            },
            Match {
                giver: participant(2, "Bob"),
                receiver: participant(1, "Alice"),
            },
        ];
        state.complete_draw(matches);

        assert_eq!(state.phase, ExchangePhase::Result);
        assert_eq!(state.matches.len(), 2);
        assert!(!state.is_drawing());
    }

    #[test]
    fn second_draw_rejected_while_one_is_running() {
        let mut state = ExchangeState::new();
        state.begin_draw(3).unwrap();
        assert_eq!(state.begin_draw(3), Err(DrawError::AlreadyDrawing));
    }

    #[test]
    fn reset_returns_to_input_and_clears_matches() {
        let mut state = ExchangeState::new();
        state.begin_draw(2).unwrap();
        state.complete_draw(vec![Match {
            giver: participant(1, "Alice"),
            receiver: participant(2, "Bob"),
        }]);

        state.reset();
        assert_eq!(state.phase, ExchangePhase::Input);
        assert!(state.matches.is_empty());
        assert!(!state.is_drawing());
    }

    #[test]
    fn full_flow_keeps_the_roster_through_a_reset() {
        use rand::SeedableRng;

        use crate::Roster;
        use crate::exchange::draw;

        let mut roster = Roster::new();
        for name in ["Alice", "Bob", "Carol"] {
            roster.add(name, "").unwrap();
        }

        let mut state = ExchangeState::new();
        state.begin_draw(roster.len()).unwrap();
        let mut rng = rand_pcg::Pcg32::seed_from_u64(99);
        state.complete_draw(draw(roster.entries(), &mut rng));

        assert_eq!(state.phase, ExchangePhase::Result);
        assert_eq!(state.matches.len(), 3);
        for m in &state.matches {
            assert_ne!(m.giver.id, m.receiver.id);
        }

        state.reset();
        assert_eq!(state.phase, ExchangePhase::Input);
        assert!(state.matches.is_empty());
        // The participant list survives a reset untouched
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn participant_serializes_with_camel_case_phone_field() {
        let p = Participant {
            id: 7,
            name: "Carol".to_owned(),
            phone_number: Some("5551234567".to_owned()),
        };
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"phoneNumber\""));

        let without_phone = participant(8, "Dave");
        let json = serde_json::to_string(&without_phone).unwrap();
        assert!(!json.contains("phoneNumber"));
    }
}
