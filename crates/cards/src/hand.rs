// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Card, DeckError};

const HAND_SIZE: usize = 5;

/// A five cards hand.
///
/// Cards are addressed by 1-based slot as shown to players, slot 1 is the
/// first card dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = HAND_SIZE;

    /// Creates a hand from five cards.
    pub const fn new(cards: [Card; Hand::SIZE]) -> Self {
        Self { cards }
    }

    /// The hand cards in slot order.
    pub fn cards(&self) -> &[Card; Hand::SIZE] {
        &self.cards
    }

    /// Returns the card at the given 1-based slot.
    pub fn card(&self, slot: usize) -> Result<Card, DeckError> {
        Self::slot_index(slot).map(|idx| self.cards[idx])
    }

    /// Replaces the card at the given 1-based slot returning the old card.
    pub fn replace(&mut self, slot: usize, card: Card) -> Result<Card, DeckError> {
        let idx = Self::slot_index(slot)?;
        Ok(std::mem::replace(&mut self.cards[idx], card))
    }

    /// Checks that a slot is in 1..=5.
    pub fn is_valid_slot(slot: usize) -> bool {
        (1..=Self::SIZE).contains(&slot)
    }

    fn slot_index(slot: usize) -> Result<usize, DeckError> {
        if Self::is_valid_slot(slot) {
            Ok(slot - 1)
        } else {
            Err(DeckError::InvalidSlot(slot))
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}
