// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hands ordering at showdown.
//!
//! Hands are ordered by [HandValue], equal values go to the player with the
//! lower index. Kickers are not compared, two hands with the same rank and
//! tie-break face are only separated by the players order.
use std::cmp::Ordering;

use crate::HandValue;

/// Compares two players hands given as `(player index, value)` pairs.
///
/// Returns [Ordering::Greater] if the first player wins.
pub fn compare(a: (usize, &HandValue), b: (usize, &HandValue)) -> Ordering {
    a.1.cmp(b.1).then_with(|| b.0.cmp(&a.0))
}

/// Returns the players indices ordered from the winner to the last player.
pub fn standings(values: &[HandValue]) -> Vec<usize> {
    let mut order = (0..values.len()).collect::<Vec<_>>();
    order.sort_by(|&a, &b| compare((b, &values[b]), (a, &values[a])));
    order
}

/// Returns the winner index, `None` if there are no hands.
pub fn winner(values: &[HandValue]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .max_by(|a, b| compare(*a, *b))
        .map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Face, HandRank};

    #[test]
    fn rank_beats_high_card() {
        let a = HandValue::new(HandRank::FullHouse, Face::King);
        let b = HandValue::new(HandRank::Flush, Face::Ace);

        assert_eq!(compare((0, &a), (1, &b)), Ordering::Greater);
        assert_eq!(compare((1, &b), (0, &a)), Ordering::Less);
        assert_eq!(winner(&[b, a]), Some(1));
    }

    #[test]
    fn high_card_breaks_ties() {
        let a = HandValue::new(HandRank::Pair, Face::Nine);
        let b = HandValue::new(HandRank::Pair, Face::Jack);
        assert_eq!(compare((0, &a), (1, &b)), Ordering::Less);
        assert_eq!(winner(&[a, b]), Some(1));
    }

    #[test]
    fn lower_player_wins_equal_hands() {
        let v = HandValue::new(HandRank::TwoPair, Face::Queen);
        assert_eq!(compare((0, &v), (1, &v)), Ordering::Greater);
        assert_eq!(compare((3, &v), (2, &v)), Ordering::Less);
        assert_eq!(compare((2, &v), (2, &v)), Ordering::Equal);

        let weaker = HandValue::new(HandRank::Pair, Face::Ace);
        assert_eq!(winner(&[weaker, v, v]), Some(1));
    }

    #[test]
    fn standings_order() {
        let values = [
            HandValue::new(HandRank::Pair, Face::Four),
            HandValue::new(HandRank::Straight, Face::Nine),
            HandValue::new(HandRank::Nothing, Face::Ace),
            HandValue::new(HandRank::Pair, Face::Four),
            HandValue::new(HandRank::Straight, Face::Ten),
        ];

        assert_eq!(standings(&values), vec![4, 1, 0, 3, 2]);
        assert_eq!(winner(&values), Some(4));
        assert!(standings(&[]).is_empty());
        assert_eq!(winner(&[]), None);
    }
}
