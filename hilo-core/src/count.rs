use crate::deck::Rank;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

pub trait CountSystem {
    fn card_value(&self, rank: Rank) -> i32;
    fn cards_value(&self, ranks: &[Rank]) -> i32 {
        ranks.iter().fold(0, |acc, &r| acc + self.card_value(r))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HiLo;

impl HiLo {
    pub fn new() -> Self {
        Self {}
    }
}

impl CountSystem for HiLo {
    fn card_value(&self, rank: Rank) -> i32 {
        match rank {
            Rank::R2 | Rank::R3 | Rank::R4 | Rank::R5 | Rank::R6 => 1,
            Rank::R7 | Rank::R8 | Rank::R9 => 0,
            Rank::RT | Rank::RJ | Rank::RQ | Rank::RK | Rank::RA => -1,
        }
    }
}

/// Running count and the number of cards that went into it since the last reset.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Default, Clone, Copy)]
pub struct CountState {
    pub running_count: i32,
    pub cards_seen: u32,
}

/// Keeps a [CountState] up to date as cards are entered, taken back, and swapped out.
///
/// The tracker doesn't remember which cards it has seen. Callers that remove a card are
/// responsible for passing the same rank they added.
#[derive(Debug, Default, Clone)]
pub struct CountTracker {
    hl: HiLo,
    state: CountState,
}

impl CountTracker {
    pub fn new() -> Self {
        Self {
            hl: HiLo::new(),
            state: CountState::default(),
        }
    }

    pub fn state(&self) -> CountState {
        self.state
    }

    pub fn add_card(&mut self, rank: Rank) {
        self.state.running_count = self
            .state
            .running_count
            .saturating_add(self.hl.card_value(rank));
        self.state.cards_seen = self.state.cards_seen.saturating_add(1);
        debug!("counted {} -> {:?}", rank, self.state);
    }

    /// Take back a card previously given to [CountTracker::add_card].
    ///
    /// If no cards have been seen, cards_seen stays at 0 but the count is still adjusted. This
    /// absorbs a repeated undo rather than failing.
    pub fn remove_last_card(&mut self, rank: Rank) {
        self.state.running_count = self
            .state
            .running_count
            .saturating_sub(self.hl.card_value(rank));
        if self.state.cards_seen == 0 {
            warn!(
                "removed {} with no cards seen; leaving cards seen at 0 (count now {})",
                rank, self.state.running_count
            );
        } else {
            self.state.cards_seen -= 1;
        }
        debug!("uncounted {} -> {:?}", rank, self.state);
    }

    /// Swap the card in a single-card slot (the dealer's upcard). The old card, if any, is taken
    /// out of the count before the new card, if any, is put in.
    pub fn replace_dealer_card(&mut self, old: Option<Rank>, new: Option<Rank>) {
        if let Some(old) = old {
            self.remove_last_card(old);
        }
        if let Some(new) = new {
            self.add_card(new);
        }
    }

    /// Nudge the running count by hand. Counts as one seen card regardless of delta. The count
    /// saturates at the `i32` bounds instead of wrapping.
    pub fn adjust(&mut self, delta: i32) {
        self.state.running_count = self.state.running_count.saturating_add(delta);
        self.state.cards_seen = self.state.cards_seen.saturating_add(1);
        debug!("adjusted count by {} -> {:?}", delta, self.state);
    }

    pub fn reset(&mut self) {
        self.state = CountState::default();
        debug!("count reset");
    }
}
