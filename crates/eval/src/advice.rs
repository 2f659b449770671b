// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Draw advice for computer players.
use drawpoker_cards::{Face, Hand};

use crate::{HandRank, HandValue};

/// Returns the 1-based slots of the cards to replace at the draw.
///
/// Made hands from a straight up are kept, cards that are part of a pair, two
/// pair or three of a kind are kept and the others replaced, with nothing only
/// the highest card is kept.
pub fn draw_advice(hand: &Hand) -> Vec<usize> {
    let value = HandValue::eval_hand(hand);
    let cards = hand.cards();

    match value.rank() {
        HandRank::Nothing => {
            let high = cards
                .iter()
                .enumerate()
                .max_by_key(|(_, c)| c.face())
                .map(|(idx, _)| idx);

            (0..Hand::SIZE)
                .filter(|&idx| Some(idx) != high)
                .map(|idx| idx + 1)
                .collect()
        }
        HandRank::Pair | HandRank::TwoPair | HandRank::ThreeOfAKind => {
            let mut counts = [0u8; Face::COUNT];
            for card in cards {
                counts[card.face().index()] += 1;
            }

            cards
                .iter()
                .enumerate()
                .filter(|(_, c)| counts[c.face().index()] < 2)
                .map(|(idx, _)| idx + 1)
                .collect()
        }
        _ => Vec::new(),
    }
}
