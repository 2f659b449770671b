// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Poker card.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    face: Face,
    suit: Suit,
}

impl Card {
    /// Create a card given a face and suit.
    pub const fn new(face: Face, suit: Suit) -> Card {
        Self { face, suit }
    }

    /// Returns the card face.
    pub fn face(&self) -> Face {
        self.face
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the long card name, for example "Ace of Spades".
    pub fn name(&self) -> String {
        format!("{} of {}s", self.face.name(), self.suit.name())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.face, self.suit)
    }
}

/// Card face, in ascending order of value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Face {
    /// Two
    Two = 0,
    /// Three
    Three,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Face {
    /// The number of faces.
    pub const COUNT: usize = 13;

    /// Returns all faces, lowest first.
    pub fn faces() -> impl DoubleEndedIterator<Item = Face> {
        use Face::*;
        [
            Two, Three, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The face zero based index, Two is 0 and Ace is 12.
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Returns the face name.
    pub fn name(&self) -> &'static str {
        match self {
            Face::Two => "Two",
            Face::Three => "Three",
            Face::Four => "Four",
            Face::Five => "Five",
            Face::Six => "Six",
            Face::Seven => "Seven",
            Face::Eight => "Eight",
            Face::Nine => "Nine",
            Face::Ten => "Ten",
            Face::Jack => "Jack",
            Face::Queen => "Queen",
            Face::King => "King",
            Face::Ace => "Ace",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let face = match self {
            Face::Two => '2',
            Face::Three => '3',
            Face::Four => '4',
            Face::Five => '5',
            Face::Six => '6',
            Face::Seven => '7',
            Face::Eight => '8',
            Face::Nine => '9',
            Face::Ten => 'T',
            Face::Jack => 'J',
            Face::Queen => 'Q',
            Face::King => 'K',
            Face::Ace => 'A',
        };

        write!(f, "{face}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Club,
    /// Diamonds suit.
    Diamond,
    /// Hearts suit.
    Heart,
    /// Spades suit.
    Spade,
}

impl Suit {
    /// Returns all suits in alphabetical order.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade].into_iter()
    }

    /// Returns the suit name.
    pub fn name(&self) -> &'static str {
        match self {
            Suit::Club => "Club",
            Suit::Diamond => "Diamond",
            Suit::Heart => "Heart",
            Suit::Spade => "Spade",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Club => 'C',
            Suit::Diamond => 'D',
            Suit::Heart => 'H',
            Suit::Spade => 'S',
        };

        write!(f, "{suit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_to_string() {
        let c = Card::new(Face::King, Suit::Diamond);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Face::Five, Suit::Spade);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Face::Ten, Suit::Heart);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Face::Ace, Suit::Club);
        assert_eq!(c.to_string(), "AC");
    }

    #[test]
    fn card_name() {
        let c = Card::new(Face::Ace, Suit::Spade);
        assert_eq!(c.name(), "Ace of Spades");

        let c = Card::new(Face::Two, Suit::Club);
        assert_eq!(c.name(), "Two of Clubs");
    }

    #[test]
    fn face_order() {
        let faces = Face::faces().collect::<Vec<_>>();
        assert_eq!(faces.len(), Face::COUNT);
        assert!(faces.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(Face::Two.index(), 0);
        assert_eq!(Face::Ace.index(), 12);
    }
}
