use crate::basicstrategy::recommend;
use crate::bet::suggested_bet;
use crate::config::{check_base_unit, ConfigError, NumDecks, ShoeConfig};
use crate::count::{CountState, CountTracker};
use crate::deck::Rank;
use crate::hand::{Hand, HandValue};
use crate::resp::Resp;
use crate::shoe::ShoeState;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Everything one player at one table has entered so far.
///
/// All cards go through here so the count and the cards on the table can't drift apart. Derived
/// values (true count, bet, recommendation) are computed on every call and never cached.
#[derive(Debug, Default, Clone)]
pub struct Session {
    config: ShoeConfig,
    tracker: CountTracker,
    hand: Hand,
    dealer: Option<Rank>,
}

/// All derived values at one moment, for a front end that redraws everything at once
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Snapshot {
    pub config: ShoeConfig,
    pub count: CountState,
    pub shoe: ShoeState,
    pub suggested_bet: f32,
    pub hand: Hand,
    pub dealer: Option<Rank>,
    pub hand_value: HandValue,
    pub recommendation: Resp,
}

impl Session {
    pub fn new(config: ShoeConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> ShoeConfig {
        self.config
    }

    pub fn set_config(&mut self, config: ShoeConfig) -> Result<(), ConfigError> {
        self.config = config.validated()?;
        info!("using {} with base unit {}", config.num_decks, config.base_unit);
        Ok(())
    }

    pub fn set_num_decks(&mut self, num_decks: NumDecks) {
        self.config.num_decks = num_decks;
        info!("using {}", num_decks);
    }

    pub fn set_base_unit(&mut self, base_unit: f32) -> Result<(), ConfigError> {
        self.config.base_unit = check_base_unit(base_unit)?;
        info!("base unit is now {}", base_unit);
        Ok(())
    }

    pub fn player_cards(&self) -> &Hand {
        &self.hand
    }

    pub fn dealer_upcard(&self) -> Option<Rank> {
        self.dealer
    }

    /// Deal a card to the player
    pub fn add_card(&mut self, rank: Rank) {
        self.hand.push(rank);
        self.tracker.add_card(rank);
    }

    /// Undo the player's most recent card, returning it. Does nothing if the hand is empty.
    pub fn remove_last_card(&mut self) -> Option<Rank> {
        let rank = self.hand.pop()?;
        self.tracker.remove_last_card(rank);
        Some(rank)
    }

    /// Start a new player hand. The old cards were seen, so they stay in the count.
    pub fn clear_hand(&mut self) {
        debug!("clearing hand {}", self.hand);
        self.hand.clear();
    }

    /// Put a card in the dealer's upcard slot (or empty it), swapping out whatever was there.
    pub fn set_dealer_upcard(&mut self, rank: Option<Rank>) {
        let old = std::mem::replace(&mut self.dealer, rank);
        self.tracker.replace_dealer_card(old, rank);
    }

    pub fn reset_count(&mut self) {
        self.tracker.reset();
    }

    /// Clear the player's hand and the dealer's upcard. The upcard is taken back out of the
    /// count; the player's cards are not.
    pub fn reset_hands(&mut self) {
        self.clear_hand();
        self.set_dealer_upcard(None);
    }

    /// New shoe: empty table and a zero count. Hands are reset before the count so the dealer
    /// card isn't taken back out of an already zeroed count.
    pub fn reset_all(&mut self) {
        self.reset_hands();
        self.reset_count();
    }

    /// Correct the running count by hand. Counts as one seen card.
    pub fn adjust_count_manually(&mut self, delta: i32) {
        self.tracker.adjust(delta);
    }

    pub fn count_state(&self) -> CountState {
        self.tracker.state()
    }

    pub fn shoe_state(&self) -> ShoeState {
        ShoeState::new(self.config.num_decks, self.tracker.state())
    }

    pub fn suggested_bet(&self) -> f32 {
        suggested_bet(self.shoe_state().true_count, self.config.base_unit)
    }

    pub fn hand_value(&self) -> HandValue {
        self.hand.value()
    }

    pub fn recommendation(&self) -> Resp {
        recommend(self.hand.cards(), self.dealer)
    }

    pub fn snapshot(&self) -> Snapshot {
        let shoe = self.shoe_state();
        Snapshot {
            config: self.config,
            count: self.count_state(),
            shoe,
            suggested_bet: suggested_bet(shoe.true_count, self.config.base_unit),
            hand: self.hand.clone(),
            dealer: self.dealer,
            hand_value: self.hand_value(),
            recommendation: self.recommendation(),
        }
    }
}
