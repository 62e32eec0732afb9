//! blackjack-rs: Casino blackjack engine
//!
//! Goals:
//! - Deterministic, fully testable round state machine (bet, deal, player
//!   turn, dealer turn, settlement) against a persistent bankroll
//! - Small, well-documented public API
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: play a scripted round
//! ```
//! use blackjack_rs::cards::parse_cards;
//! use blackjack_rs::deck::Deck;
//! use blackjack_rs::game::{Outcome, Phase, Table};
//!
//! let mut table = Table::new(100);
//! // Draw order: dealer, dealer, player, player, then hits.
//! let mut cards = parse_cards("10s 4s 10h 8h 3d").unwrap();
//! cards.reverse();
//! table.set_next_deck(Deck::from_cards(cards));
//!
//! table.place_bet(20).unwrap();
//! table.deal().unwrap();
//! table.action_stand().unwrap();          // stand on 18
//! table.play_dealer().unwrap();           // dealer draws 14 -> 17, stands
//! assert_eq!(table.phase(), Phase::Settlement);
//! assert_eq!(table.settle().unwrap(), Outcome::PlayerWin);
//! assert_eq!(table.balance(), 120);
//! ```
//!
//! ## TUI
//! Run the interactive table with:
//! ```sh
//! cargo run --bin blackjack-rs
//! ```

pub mod agents;
pub mod bankroll;
pub mod cards;
pub mod dealer;
pub mod deck;
pub mod engine;
pub mod game;
pub mod score;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
