// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand evaluator.
use serde::{Deserialize, Serialize};
use std::fmt;

use drawpoker_cards::{Card, Face, Hand};

/// Hand rank categories, in ascending order of rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// No other rank matched.
    Nothing = 0,
    /// Two cards with the same face.
    Pair,
    /// Two pairs of different faces.
    TwoPair,
    /// Three cards with the same face.
    ThreeOfAKind,
    /// Five consecutive faces.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards with the same face.
    FourOfAKind,
    /// A straight with all cards of the same suit.
    StraightFlush,
    /// Ten to Ace straight flush.
    RoyalFlush,
}

impl HandRank {
    /// The number of rank categories.
    pub const COUNT: usize = 10;

    /// Returns all ranks, lowest first.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            Nothing,
            Pair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            HandRank::Nothing => "Nothing",
            HandRank::Pair => "Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        };

        write!(f, "{rank}")
    }
}

/// The value of a hand, a rank category and the face that breaks ties between
/// hands of the same category.
///
/// Values compare by rank first and then by tie-break face:
///
/// ```
/// # use drawpoker_eval::*;
/// let full_house = HandValue::new(HandRank::FullHouse, Face::King);
/// let flush = HandValue::new(HandRank::Flush, Face::Ace);
/// assert!(full_house > flush);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    high: Face,
}

impl HandValue {
    /// Creates a hand value.
    pub const fn new(rank: HandRank, high: Face) -> Self {
        Self { rank, high }
    }

    /// Evaluates five cards, the cards order doesn't matter.
    pub fn eval(cards: &[Card; Hand::SIZE]) -> Self {
        let cards = SortedCards::new(cards);
        CHECKS
            .iter()
            .find_map(|check| check(&cards))
            .unwrap_or(HandValue::new(HandRank::Nothing, cards.high()))
    }

    /// Evaluates a hand.
    pub fn eval_hand(hand: &Hand) -> Self {
        Self::eval(hand.cards())
    }

    /// The hand rank category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The tie-break face.
    pub fn high(&self) -> Face {
        self.high
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, high card: {}", self.rank, self.high.name())
    }
}

/// Evaluates five cards.
pub fn rank(cards: &[Card; Hand::SIZE]) -> HandValue {
    HandValue::eval(cards)
}

/// A rank check, returns the hand value if the cards match the rank.
type Check = fn(&SortedCards) -> Option<HandValue>;

/// Checks in descending order of rank, the first match wins.
const CHECKS: [Check; 8] = [
    straight_flush,
    four_of_a_kind,
    full_house,
    flush,
    straight,
    three_of_a_kind,
    two_pair,
    pair,
];

/// Cards sorted by face with per face counts.
struct SortedCards {
    faces: [Face; Hand::SIZE],
    counts: [u8; Face::COUNT],
    is_flush: bool,
}

impl SortedCards {
    const WHEEL: [Face; Hand::SIZE] = [Face::Two, Face::Three, Face::Four, Face::Five, Face::Ace];

    fn new(cards: &[Card; Hand::SIZE]) -> Self {
        let mut faces = cards.map(|c| c.face());
        faces.sort_unstable();

        let mut counts = [0; Face::COUNT];
        for face in faces {
            counts[face.index()] += 1;
        }

        let suit = cards[0].suit();
        let is_flush = cards.iter().all(|c| c.suit() == suit);

        Self {
            faces,
            counts,
            is_flush,
        }
    }

    /// The highest face.
    fn high(&self) -> Face {
        self.faces[Hand::SIZE - 1]
    }

    /// The straight top face, Five for the wheel.
    fn straight_high(&self) -> Option<Face> {
        if self.faces == Self::WHEEL {
            return Some(Face::Five);
        }

        self.faces
            .windows(2)
            .all(|w| w[1].index() == w[0].index() + 1)
            .then(|| self.high())
    }

    /// Faces that appear at least `n` times, lowest first.
    fn groups(&self, n: u8) -> impl DoubleEndedIterator<Item = Face> + '_ {
        Face::faces().filter(move |f| self.counts[f.index()] >= n)
    }

    /// Faces that appear exactly `n` times, lowest first.
    fn exact_groups(&self, n: u8) -> impl DoubleEndedIterator<Item = Face> + '_ {
        Face::faces().filter(move |f| self.counts[f.index()] == n)
    }
}

fn straight_flush(cards: &SortedCards) -> Option<HandValue> {
    if !cards.is_flush {
        return None;
    }

    cards.straight_high().map(|high| match high {
        Face::Ace => HandValue::new(HandRank::RoyalFlush, high),
        _ => HandValue::new(HandRank::StraightFlush, high),
    })
}

fn four_of_a_kind(cards: &SortedCards) -> Option<HandValue> {
    cards
        .groups(4)
        .next_back()
        .map(|face| HandValue::new(HandRank::FourOfAKind, face))
}

fn full_house(cards: &SortedCards) -> Option<HandValue> {
    let trips = cards.exact_groups(3).collect::<Vec<_>>();
    let pairs = cards.exact_groups(2).count();
    match trips[..] {
        [face] if pairs == 1 => Some(HandValue::new(HandRank::FullHouse, face)),
        _ => None,
    }
}

fn flush(cards: &SortedCards) -> Option<HandValue> {
    cards
        .is_flush
        .then(|| HandValue::new(HandRank::Flush, cards.high()))
}

fn straight(cards: &SortedCards) -> Option<HandValue> {
    cards
        .straight_high()
        .map(|high| HandValue::new(HandRank::Straight, high))
}

fn three_of_a_kind(cards: &SortedCards) -> Option<HandValue> {
    cards
        .groups(3)
        .next_back()
        .map(|face| HandValue::new(HandRank::ThreeOfAKind, face))
}

fn two_pair(cards: &SortedCards) -> Option<HandValue> {
    if cards.groups(2).count() < 2 {
        return None;
    }

    cards
        .groups(2)
        .next_back()
        .map(|face| HandValue::new(HandRank::TwoPair, face))
}

fn pair(cards: &SortedCards) -> Option<HandValue> {
    cards
        .groups(2)
        .next_back()
        .map(|face| HandValue::new(HandRank::Pair, face))
}
