//! Hi-Lo card counting and basic strategy advice for a single blackjack player.
pub mod basicstrategy;
pub mod bet;
pub mod config;
pub mod count;
pub mod deck;
pub mod hand;
pub mod resp;
pub mod session;
pub mod shoe;

pub use session::{Session, Snapshot};
