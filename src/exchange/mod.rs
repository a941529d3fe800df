//! Gift exchange core
//!
//! All draw logic lives here. This module must stay pure and deterministic:
//! - Injected RNG only (callers seed it)
//! - No rendering or platform dependencies

pub mod draw;
pub mod state;

pub use draw::{draw, rotated};
pub use state::{DrawError, ExchangePhase, ExchangeState, Match, Participant};
