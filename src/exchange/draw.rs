//! Derangement matcher
//!
//! Pairs every participant with exactly one other participant to gift.
//! Rejection sampling over uniform shuffles handles the common case; a
//! rotation by one position guarantees a valid assignment if sampling runs
//! out of attempts.

use rand::Rng;
use rand::seq::SliceRandom;

use super::state::{Match, Participant};
use crate::consts::{MAX_SHUFFLE_ATTEMPTS, MIN_PARTICIPANTS};

/// Produce a match set for the given participants: one match per participant
/// in input order, every participant appearing exactly once as giver and once
/// as receiver, nobody gifting themselves.
///
/// Callers must enforce the two-participant minimum before invoking; with a
/// valid input this never fails.
pub fn draw<R: Rng + ?Sized>(participants: &[Participant], rng: &mut R) -> Vec<Match> {
    debug_assert!(participants.len() >= MIN_PARTICIPANTS);

    let mut receivers: Vec<Participant> = participants.to_vec();
    for _ in 0..MAX_SHUFFLE_ATTEMPTS {
        receivers.shuffle(rng);
        if is_derangement(participants, &receivers) {
            return pair(participants, receivers);
        }
    }

    // Sampling exhausted its attempt budget (vanishingly unlikely); a
    // rotation by one is a valid assignment for any list of two or more.
    log::warn!(
        "no derangement found in {MAX_SHUFFLE_ATTEMPTS} shuffles, rotating instead"
    );
    pair(participants, rotated(participants))
}

/// Receiver list formed by shifting the participants one position left:
/// position i receives participant (i + 1) mod N. Self-match-free for any
/// N >= 2.
pub fn rotated(participants: &[Participant]) -> Vec<Participant> {
    let mut receivers: Vec<Participant> = participants[1..].to_vec();
    receivers.push(participants[0].clone());
    receivers
}

/// True when no position keeps its original participant
fn is_derangement(givers: &[Participant], receivers: &[Participant]) -> bool {
    givers
        .iter()
        .zip(receivers)
        .all(|(giver, receiver)| giver.id != receiver.id)
}

fn pair(givers: &[Participant], receivers: Vec<Participant>) -> Vec<Match> {
    givers
        .iter()
        .cloned()
        .zip(receivers)
        .map(|(giver, receiver)| Match { giver, receiver })
        .collect()
}
