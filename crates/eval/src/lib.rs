// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Draw Poker hand evaluator.
//!
//! Classifies a five cards hand into one of ten rank categories, from nothing
//! to royal flush, together with the face that breaks ties between hands of the
//! same category. Checks run from the highest rank down and the first match wins.
//!
//! To use the evaluator create a hand and use [HandValue] to evaluate the hand
//! and get its rank:
//!
//! ```
//! # use drawpoker_eval::*;
//! // 2C, 3C, .., JC
//! let cards = Deck::default().into_iter().take(10).collect::<Vec<_>>();
//! let v1 = HandValue::eval(&cards[0..5].try_into().unwrap());
//! let v2 = HandValue::eval(&cards[5..].try_into().unwrap());
//! assert_eq!(v1.rank(), HandRank::StraightFlush);
//! assert_eq!(v2.high(), Face::Jack);
//! assert!(v2 > v1);
//! ```
//!
//! The [showdown] functions order the hands of a table to find the winner.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod advice;
pub use advice::draw_advice;

pub mod eval;
pub use eval::{HandRank, HandValue, rank};

pub mod showdown;
pub use showdown::{compare, standings, winner};

// Reexport cards types.
pub use drawpoker_cards::{Card, Deck, DeckError, Face, Hand, Suit};
