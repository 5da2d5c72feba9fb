use crate::deck::Rank;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Best total of a hand and whether an ace is still being counted as 11 in it
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Copy, Clone, Default)]
pub struct HandValue {
    pub total: u16,
    pub soft: bool,
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.total, if self.soft { "s" } else { "" })
    }
}

/// Evaluate a sequence of cards. Aces start at 11 and are knocked down to 1, one at a time, while
/// the hand would otherwise bust. The hand is soft if at least one ace survives at 11.
///
/// Bust hands report their lowest possible total and are never soft. An empty hand is a hard 0.
pub fn evaluate(cards: &[Rank]) -> HandValue {
    let mut total: u16 = 0;
    let mut high_aces = 0;
    for c in cards {
        if c.is_ace() {
            high_aces += 1;
        }
        total += u16::from(c.value());
    }
    while total > 21 && high_aces > 0 {
        total -= 10;
        high_aces -= 1;
    }
    HandValue {
        total,
        soft: high_aces > 0 && total <= 21,
    }
}

/// The player's cards in the order they were entered
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Clone, Default)]
#[serde(transparent)]
pub struct Hand {
    cards: Vec<Rank>,
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}]",
            self.cards
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<String>>()
                .join(" ")
        )
    }
}

impl From<&[Rank]> for Hand {
    fn from(cards: &[Rank]) -> Self {
        Self::new(cards)
    }
}

impl Hand {
    pub fn new(cards: &[Rank]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }

    pub fn value(&self) -> HandValue {
        evaluate(&self.cards)
    }

    /// The rank of the pair if this is exactly two cards of the same rank. A ten and a king are
    /// not a pair.
    pub fn pair_rank(&self) -> Option<Rank> {
        pair_rank(&self.cards)
    }

    pub fn push(&mut self, c: Rank) {
        self.cards.push(c);
    }

    /// Take the most recently entered card back out
    pub fn pop(&mut self) -> Option<Rank> {
        self.cards.pop()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[Rank] {
        &self.cards
    }
}

pub(crate) fn pair_rank(cards: &[Rank]) -> Option<Rank> {
    match cards {
        [a, b] if a == b => Some(*a),
        _ => None,
    }
}
