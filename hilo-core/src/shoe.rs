use crate::config::NumDecks;
use crate::count::CountState;
use crate::deck::DECK_LEN;
use serde::{Deserialize, Serialize};

/// Fewest decks ever assumed to be left. Keeps the true count bounded as the shoe runs out.
pub const MIN_DECKS_REMAINING: f32 = 0.5;

/// How deep into the shoe we are, and the count normalized for it. Always derived fresh from a
/// [CountState]; never stored.
#[derive(Serialize, Deserialize, PartialEq, Debug, Copy, Clone)]
pub struct ShoeState {
    pub total_cards: u16,
    pub decks_remaining: f32,
    pub true_count: f32,
}

impl ShoeState {
    pub fn new(num_decks: NumDecks, count: CountState) -> Self {
        let total_cards = u16::from(num_decks.count()) * DECK_LEN;
        let decks_remaining = decks_remaining(total_cards, count.cards_seen);
        Self {
            total_cards,
            decks_remaining,
            true_count: true_count(count.running_count, decks_remaining),
        }
    }
}

/// Cards seen can exceed the shoe (e.g. the operator picked too few decks); the floor covers
/// that too.
fn decks_remaining(total_cards: u16, cards_seen: u32) -> f32 {
    let left = (f64::from(total_cards) - f64::from(cards_seen)) / f64::from(DECK_LEN);
    (left as f32).max(MIN_DECKS_REMAINING)
}

fn true_count(running_count: i32, decks_remaining: f32) -> f32 {
    let tc = running_count as f32 / decks_remaining;
    if tc.is_finite() {
        tc
    } else {
        0.0
    }
}
