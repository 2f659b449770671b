// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards deck.
use rand::prelude::*;
use std::collections::VecDeque;
use thiserror::Error;

use crate::{Card, Face, Hand, Suit};

/// Errors returned by deck and hand operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// There are not enough cards left in the deck.
    #[error("the deck is empty")]
    EmptyDeck,
    /// A hand slot outside 1..=5.
    #[error("invalid card slot {0}, expected 1 to 5")]
    InvalidSlot(usize),
}

/// A cards Deck, cards are dealt from the front.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new deck in suit then face order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new deck shuffled `times` times.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R, times: usize) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng, times);
        deck
    }

    /// Shuffles the deck `times` times.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R, times: usize) {
        for _ in 0..times {
            self.cards.make_contiguous().shuffle(rng);
        }
    }

    /// Deals a card from the front of the deck.
    pub fn deal_one(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::EmptyDeck)
    }

    /// Deals a hand to each player one card at a time.
    ///
    /// Fails without dealing any card if the deck cannot cover all hands.
    pub fn deal_hands(&mut self, players: usize) -> Result<Vec<Hand>, DeckError> {
        if players * Hand::SIZE > self.cards.len() {
            return Err(DeckError::EmptyDeck);
        }

        let placeholder = Card::new(Face::Ace, Suit::Heart);
        let mut hands = vec![[placeholder; Hand::SIZE]; players];
        for round in 0..Hand::SIZE {
            for cards in hands.iter_mut() {
                cards[round] = self.deal_one()?;
            }
        }

        Ok(hands.into_iter().map(Hand::new).collect())
    }

    /// Replaces the card at a 1-based hand slot with the front card of the deck.
    ///
    /// Returns the discarded card, the hand and deck are left untouched on error.
    pub fn draw_replace(&mut self, hand: &mut Hand, slot: usize) -> Result<Card, DeckError> {
        if !Hand::is_valid_slot(slot) {
            return Err(DeckError::InvalidSlot(slot));
        }

        let card = self.deal_one()?;
        hand.replace(slot, card)
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Checks if a card is in the deck.
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Iterates the cards from the front of the deck.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each 5 cards hand in the deck.
    pub fn for_each_hand<F>(&self, mut f: F)
    where
        F: FnMut(&Hand),
    {
        let n = self.cards.len();
        let mut h = [Card::new(Face::Ace, Suit::Heart); Hand::SIZE];

        for c1 in 0..n {
            h[0] = self.cards[c1];

            for c2 in (c1 + 1)..n {
                h[1] = self.cards[c2];

                for c3 in (c2 + 1)..n {
                    h[2] = self.cards[c3];

                    for c4 in (c3 + 1)..n {
                        h[3] = self.cards[c4];

                        for c5 in (c4 + 1)..n {
                            h[4] = self.cards[c5];
                            f(&Hand::new(h));
                        }
                    }
                }
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Face::faces().map(move |f| Card::new(f, s)))
            .collect::<VecDeque<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::collections::vec_deque::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
