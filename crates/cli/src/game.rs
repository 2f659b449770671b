// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Draw poker game state.
use anyhow::{Result, bail};
use log::{debug, info, warn};
use rand::prelude::*;

use drawpoker_eval::{Card, Deck, DeckError, Hand, HandValue, draw_advice, standings};

/// Game configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of players, asked on the terminal if not set.
    pub players: Option<usize>,
    /// Player 1 is played by the computer.
    pub computer: bool,
    /// Number of times the deck is shuffled.
    pub shuffles: usize,
    /// Print the final standings as JSON.
    pub json: bool,
}

impl Config {
    /// Minimum number of players.
    pub const MIN_PLAYERS: usize = 2;
    /// Maximum number of players.
    pub const MAX_PLAYERS: usize = 7;
}

/// The game stages in play order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStage {
    /// Cards are dealt to players.
    Deal,
    /// Players replace some of their cards.
    Draw,
    /// Hands are ranked and the winner found.
    Score,
    /// The game is over.
    End,
}

/// A player at the table.
#[derive(Debug)]
pub struct Player {
    /// The 1-based player number.
    pub number: usize,
    /// The player hand.
    pub hand: Hand,
    /// The hand value, set at the score stage.
    pub value: Option<HandValue>,
    /// This player draws are chosen by the computer.
    pub is_computer: bool,
}

/// Chooses the cards to replace at the draw.
pub trait Drawer {
    /// Returns the 1-based slots of the cards to replace.
    fn choose(&mut self, player: &Player) -> Result<Vec<usize>>;
}

/// The computer player draws.
#[derive(Debug, Default)]
pub struct ComputerDrawer;

impl Drawer for ComputerDrawer {
    fn choose(&mut self, player: &Player) -> Result<Vec<usize>> {
        Ok(draw_advice(&player.hand))
    }
}

/// The result of a player draw.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DrawOutcome {
    /// The discarded cards.
    pub discarded: Vec<Card>,
    /// The deck run out of cards before all the slots were replaced.
    pub deck_exhausted: bool,
}

/// A draw poker game.
#[derive(Debug)]
pub struct Game {
    deck: Deck,
    players: Vec<Player>,
    num_players: usize,
    computer: bool,
    stage: GameStage,
}

impl Game {
    /// Creates a game with a deck shuffled by `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        num_players: usize,
        computer: bool,
        shuffles: usize,
        rng: &mut R,
    ) -> Self {
        let deck = Deck::new_and_shuffled(rng, shuffles);
        debug!("Deck shuffled {shuffles} times");

        Self {
            deck,
            players: Vec::with_capacity(num_players),
            num_players,
            computer,
            stage: GameStage::Deal,
        }
    }

    /// The current game stage.
    pub fn stage(&self) -> GameStage {
        self.stage
    }

    /// The players, empty until the cards are dealt.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The cards left in the deck.
    pub fn cards_left(&self) -> usize {
        self.deck.count()
    }

    /// Deals five cards to each player.
    pub fn deal(&mut self) -> Result<()> {
        self.check_stage(GameStage::Deal)?;

        let hands = self.deck.deal_hands(self.num_players)?;
        self.players = hands
            .into_iter()
            .enumerate()
            .map(|(idx, hand)| Player {
                number: idx + 1,
                hand,
                value: None,
                is_computer: self.computer && idx == 0,
            })
            .collect();

        info!(
            "Dealt {} hands, {} cards left",
            self.players.len(),
            self.deck.count()
        );

        self.stage = GameStage::Draw;
        Ok(())
    }

    /// Replaces the cards at the given slots for the player at `idx`.
    ///
    /// Invalid slots are ignored, if the deck runs out the player keeps the
    /// remaining cards.
    pub fn draw(&mut self, idx: usize, slots: &[usize]) -> Result<DrawOutcome> {
        self.check_stage(GameStage::Draw)?;

        let Some(player) = self.players.get_mut(idx) else {
            bail!("No player at index {idx}");
        };

        let mut outcome = DrawOutcome::default();
        for &slot in slots {
            match self.deck.draw_replace(&mut player.hand, slot) {
                Ok(card) => outcome.discarded.push(card),
                Err(DeckError::InvalidSlot(slot)) => {
                    debug!("Player {} invalid slot {slot} ignored", player.number);
                }
                Err(DeckError::EmptyDeck) => {
                    warn!("Deck exhausted drawing for player {}", player.number);
                    outcome.deck_exhausted = true;
                    break;
                }
            }
        }

        debug!(
            "Player {} replaced {} cards, {} cards left",
            player.number,
            outcome.discarded.len(),
            self.deck.count()
        );

        Ok(outcome)
    }

    /// Ends the draw stage.
    pub fn end_draw(&mut self) -> Result<()> {
        self.check_stage(GameStage::Draw)?;
        self.stage = GameStage::Score;
        Ok(())
    }

    /// Ranks each hand and returns the players indices from the winner down.
    pub fn score(&mut self) -> Result<Vec<usize>> {
        self.check_stage(GameStage::Score)?;

        for player in self.players.iter_mut() {
            player.value = Some(HandValue::eval_hand(&player.hand));
        }

        let values = self
            .players
            .iter()
            .filter_map(|p| p.value)
            .collect::<Vec<_>>();
        let order = standings(&values);

        if let Some(&winner) = order.first() {
            info!(
                "Player {} wins with {}",
                self.players[winner].number, values[winner]
            );
        }

        self.stage = GameStage::End;
        Ok(order)
    }

    fn check_stage(&self, stage: GameStage) -> Result<()> {
        if self.stage != stage {
            bail!("Invalid stage {:?}, expected {:?}", self.stage, stage);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use drawpoker_eval::HandRank;

    fn new_game(players: usize, computer: bool) -> Game {
        let mut rng = StdRng::seed_from_u64(13);
        Game::with_rng(players, computer, 3, &mut rng)
    }

    #[test]
    fn game_stages() {
        let mut game = new_game(4, false);
        assert_eq!(game.stage(), GameStage::Deal);
        assert!(game.players().is_empty());

        game.deal().unwrap();
        assert_eq!(game.stage(), GameStage::Draw);
        assert_eq!(game.players().len(), 4);
        assert_eq!(game.cards_left(), Deck::SIZE - 20);
        assert!(game.players().iter().all(|p| p.value.is_none()));

        let numbers = game.players().iter().map(|p| p.number).collect::<Vec<_>>();
        assert_eq!(numbers, vec![1, 2, 3, 4]);

        game.end_draw().unwrap();
        assert_eq!(game.stage(), GameStage::Score);

        let order = game.score().unwrap();
        assert_eq!(game.stage(), GameStage::End);
        assert_eq!(order.len(), 4);
        assert!(game.players().iter().all(|p| p.value.is_some()));

        // The winner has the best hand.
        let best = game.players()[order[0]].value.unwrap();
        assert!(game.players().iter().all(|p| p.value.unwrap() <= best));
    }

    #[test]
    fn wrong_stage() {
        let mut game = new_game(2, false);
        assert!(game.draw(0, &[1]).is_err());
        assert!(game.score().is_err());

        game.deal().unwrap();
        assert!(game.deal().is_err());
        assert!(game.draw(5, &[1]).is_err());
    }

    #[test]
    fn draw_replaces_slots() {
        let mut game = new_game(3, false);
        game.deal().unwrap();

        let before = game.players()[1].hand;
        let outcome = game.draw(1, &[2, 7, 4, 0]).unwrap();
        let after = game.players()[1].hand;

        assert!(!outcome.deck_exhausted);
        assert_eq!(
            outcome.discarded,
            vec![before.card(2).unwrap(), before.card(4).unwrap()]
        );
        assert_eq!(after.card(1), before.card(1));
        assert_ne!(after.card(2), before.card(2));
        assert_eq!(after.card(3), before.card(3));
        assert_ne!(after.card(4), before.card(4));
        assert_eq!(game.cards_left(), Deck::SIZE - 15 - 2);
    }

    #[test]
    fn deck_exhaustion() {
        let mut game = new_game(7, false);
        game.deal().unwrap();
        assert_eq!(game.cards_left(), 17);

        let all = [1, 2, 3, 4, 5];
        for idx in 0..3 {
            let outcome = game.draw(idx, &all).unwrap();
            assert_eq!(outcome.discarded.len(), 5);
            assert!(!outcome.deck_exhausted);
        }

        let outcome = game.draw(3, &all).unwrap();
        assert_eq!(outcome.discarded.len(), 2);
        assert!(outcome.deck_exhausted);
        assert_eq!(game.cards_left(), 0);

        let outcome = game.draw(4, &[1]).unwrap();
        assert!(outcome.discarded.is_empty());
        assert!(outcome.deck_exhausted);

        // All cards in play are still unique.
        let cards = game
            .players()
            .iter()
            .flat_map(|p| p.hand.cards().iter().copied())
            .collect::<HashSet<_>>();
        assert_eq!(cards.len(), 35);

        game.end_draw().unwrap();
        assert_eq!(game.score().unwrap().len(), 7);
    }

    #[test]
    fn computer_player() {
        let mut game = new_game(3, true);
        game.deal().unwrap();
        assert!(game.players()[0].is_computer);
        assert!(game.players()[1..].iter().all(|p| !p.is_computer));

        let slots = ComputerDrawer.choose(&game.players()[0]).unwrap();
        let value = HandValue::eval_hand(&game.players()[0].hand);
        if value.rank() >= HandRank::Straight {
            assert!(slots.is_empty());
        } else {
            assert!(!slots.is_empty());
        }

        let outcome = game.draw(0, &slots).unwrap();
        assert_eq!(outcome.discarded.len(), slots.len());
    }
}
