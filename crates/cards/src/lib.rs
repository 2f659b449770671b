// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Draw Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use drawpoker_cards::{Card, Face, Suit};
//! let ah = Card::new(Face::Ace, Suit::Heart);
//! assert_eq!(ah.to_string(), "AH");
//! assert_eq!(ah.name(), "Ace of Hearts");
//! ```
//!
//! a [Deck] type for shuffling and dealing cards and the five cards [Hand]
//! whose cards can be exchanged with the deck during the draw:
//!
//! ```
//! # use drawpoker_cards::{Deck, DeckError};
//! # use rand::prelude::*;
//! let mut rng = StdRng::seed_from_u64(101);
//! let mut deck = Deck::new_and_shuffled(&mut rng, 3);
//!
//! let mut hands = deck.deal_hands(4).unwrap();
//! assert_eq!(deck.count(), 52 - 20);
//!
//! // Replace the third card of the first hand.
//! let discarded = deck.draw_replace(&mut hands[0], 3).unwrap();
//! assert_ne!(hands[0].card(3).unwrap(), discarded);
//!
//! // Slots are 1-based.
//! assert_eq!(deck.draw_replace(&mut hands[0], 0), Err(DeckError::InvalidSlot(0)));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, Face, Suit};

mod deck;
pub use deck::{Deck, DeckError};

mod hand;
pub use hand::Hand;
