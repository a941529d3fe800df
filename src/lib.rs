//! Secret Santa - a client-side gift exchange organizer
//!
//! Core modules:
//! - `exchange`: Draw state machine and derangement matcher
//! - `roster`: Participant list with LocalStorage persistence
//! - `i18n`: UI strings and per-language notification templates
//! - `messaging`: WhatsApp deep link construction
//! - `settings`: User preferences

pub mod exchange;
pub mod i18n;
pub mod messaging;
pub mod roster;
pub mod settings;

pub use exchange::{ExchangePhase, ExchangeState, Match, Participant};
pub use roster::Roster;
pub use settings::Settings;

/// Application constants
pub mod consts {
    /// Minimum participants required before a draw can run
    pub const MIN_PARTICIPANTS: usize = 2;
    /// Shuffle attempts before the draw falls back to a rotation
    pub const MAX_SHUFFLE_ATTEMPTS: u32 = 1000;
    /// Artificial suspense delay between triggering a draw and showing results (ms)
    pub const DRAW_SUSPENSE_MS: i32 = 2000;
}
