// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::{Result, bail};
use crossterm::{
    queue,
    style::{self, Stylize},
};
use rand::Rng;
use serde::Serialize;
use std::io::{BufRead, Write};

use drawpoker_eval::{Card, Hand, HandValue};

use crate::game::{ComputerDrawer, Config, Drawer, Game, GameStage, Player};

/// Console input and output.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Creates a terminal from an input and an output.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Reads a line, fails at the end of the input.
    fn read_line(&mut self) -> Result<String> {
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("Unexpected end of input");
        }

        Ok(line.trim().to_string())
    }

    /// Asks the number of players until the answer is valid.
    pub fn prompt_players(&mut self) -> Result<usize> {
        loop {
            write!(
                self.output,
                "Please input number of players ({}-{}): ",
                Config::MIN_PLAYERS,
                Config::MAX_PLAYERS
            )?;

            let line = self.read_line()?;
            writeln!(self.output)?;

            if let Ok(n) = line.parse::<usize>() {
                if (Config::MIN_PLAYERS..=Config::MAX_PLAYERS).contains(&n) {
                    return Ok(n);
                }
            }
        }
    }

    /// Asks if the computer plays as player 1.
    pub fn prompt_computer(&mut self) -> Result<bool> {
        write!(self.output, "Computer is player? ")?;
        let line = self.read_line()?.to_uppercase();
        Ok(line == "YES" || line == "Y")
    }

    fn print_hand(&mut self, player: &Player) -> Result<()> {
        writeln!(self.output, "Player {} hand:", player.number)?;
        for (idx, card) in player.hand.cards().iter().enumerate() {
            writeln!(self.output, "Card {}: {}", idx + 1, card.name())?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    fn print_styled(&mut self, text: &str) -> Result<()> {
        queue!(
            self.output,
            style::PrintStyledContent(text.green().bold()),
            style::Print("\n")
        )?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Drawer for Terminal<R, W> {
    fn choose(&mut self, _player: &Player) -> Result<Vec<usize>> {
        writeln!(
            self.output,
            "\nEnter the cards you would like to use in the draw"
        )?;
        write!(
            self.output,
            "(card numbers separated by commas, hit enter for none): "
        )?;

        let line = self.read_line()?;
        Ok(parse_slots(&line))
    }
}

/// Parses a comma separated list of card slots.
///
/// Items that are not integers are skipped, only the first five integers are
/// used, and of those only distinct slots in 1..=5 are returned.
pub fn parse_slots(line: &str) -> Vec<usize> {
    let mut slots = Vec::with_capacity(Hand::SIZE);

    for n in line
        .split(',')
        .filter_map(|item| item.trim().parse::<i64>().ok())
        .take(Hand::SIZE)
    {
        let Ok(slot) = usize::try_from(n) else {
            continue;
        };

        if Hand::is_valid_slot(slot) && !slots.contains(&slot) {
            slots.push(slot);
        }
    }

    slots
}

/// A player final result.
#[derive(Debug, Serialize)]
pub struct PlayerResult {
    /// The 1-based player number.
    pub player: usize,
    /// The final cards.
    pub cards: [Card; Hand::SIZE],
    /// The hand value.
    #[serde(flatten)]
    pub value: HandValue,
}

/// The game final results.
#[derive(Debug, Serialize)]
pub struct Summary {
    /// The winner player number.
    pub winner: usize,
    /// The players results in play order.
    pub players: Vec<PlayerResult>,
}

/// Runs a game to the end.
pub fn run<R, W, G>(term: &mut Terminal<R, W>, config: &Config, rng: &mut G) -> Result<Summary>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    writeln!(term.output, "Welcome to Poker!\n")?;

    let (players, computer) = match config.players {
        Some(players) => (players, config.computer),
        None => {
            let players = term.prompt_players()?;
            (players, config.computer || term.prompt_computer()?)
        }
    };

    let mut game = Game::with_rng(players, computer, config.shuffles, rng);
    let mut summary = None;

    loop {
        match game.stage() {
            GameStage::Deal => {
                game.deal()?;

                writeln!(term.output, "\nAll hands are dealt\n")?;
                for player in game.players() {
                    term.print_hand(player)?;
                }
            }
            GameStage::Draw => {
                writeln!(term.output, "\nNow time to choose draw\n")?;

                for idx in 0..game.players().len() {
                    let player = &game.players()[idx];
                    term.print_hand(player)?;

                    let slots = if player.is_computer {
                        let slots = ComputerDrawer.choose(player)?;
                        writeln!(term.output, "Computer draws {slots:?}")?;
                        slots
                    } else {
                        term.choose(player)?
                    };

                    let outcome = game.draw(idx, &slots)?;
                    if outcome.deck_exhausted {
                        writeln!(
                            term.output,
                            "\nThe deck is empty, {} card(s) replaced",
                            outcome.discarded.len()
                        )?;
                    }
                    writeln!(term.output)?;
                }

                game.end_draw()?;
            }
            GameStage::Score => {
                let order = game.score()?;

                writeln!(term.output, "\nFinal hands of players\n")?;
                for player in game.players() {
                    term.print_hand(player)?;
                    if let Some(value) = player.value {
                        writeln!(term.output, "High Card: {}", value.high().name())?;
                        writeln!(term.output, "RANK: {}\n", value.rank())?;
                    }
                }

                let players = game
                    .players()
                    .iter()
                    .filter_map(|p| {
                        p.value.map(|value| PlayerResult {
                            player: p.number,
                            cards: *p.hand.cards(),
                            value,
                        })
                    })
                    .collect::<Vec<_>>();

                let Some(&winner) = order.first() else {
                    bail!("No players to score");
                };

                let result = &players[winner];
                term.print_styled(&format!("Winner is player {}", result.player))?;
                writeln!(
                    term.output,
                    "with a rank of: {}, high card: {}",
                    result.value.rank(),
                    result.value.high().name()
                )?;

                summary = Some(Summary {
                    winner: result.player,
                    players,
                });
            }
            GameStage::End => break,
        }
    }

    let Some(summary) = summary else {
        bail!("Game ended without a score");
    };

    if config.json {
        writeln!(term.output, "{}", serde_json::to_string_pretty(&summary)?)?;
    }

    writeln!(term.output, "\nThanks for playing!")?;
    term.output.flush()?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use std::io::Cursor;

    fn play(input: &str, config: &Config) -> (Result<Summary>, String) {
        let mut term = Terminal::new(Cursor::new(input.to_string()), Vec::new());
        let mut rng = StdRng::seed_from_u64(101);
        let res = run(&mut term, config, &mut rng);
        (res, String::from_utf8(term.output).unwrap())
    }

    fn config(players: Option<usize>) -> Config {
        Config {
            players,
            computer: false,
            shuffles: 3,
            json: false,
        }
    }

    #[test]
    fn parse_draw_slots() {
        assert_eq!(parse_slots(""), Vec::<usize>::new());
        assert_eq!(parse_slots("1,3, 5"), vec![1, 3, 5]);
        assert_eq!(parse_slots(" 2 , x, 4,,"), vec![2, 4]);
        assert_eq!(parse_slots("0,6,-1,3"), vec![3]);
        assert_eq!(parse_slots("2,2,2"), vec![2]);

        // Only the first five numbers are used.
        assert_eq!(parse_slots("9,9,9,9,9,1"), Vec::<usize>::new());
        assert_eq!(parse_slots("5,4,3,2,1,6"), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn prompt_until_valid() {
        let input = "x\n1\n8\n3\nyes\n";
        let mut term = Terminal::new(Cursor::new(input), Vec::new());
        assert_eq!(term.prompt_players().unwrap(), 3);
        assert!(term.prompt_computer().unwrap());

        let output = String::from_utf8(term.output).unwrap();
        assert_eq!(output.matches("Please input number of players").count(), 4);
    }

    #[test]
    fn end_of_input() {
        let mut term = Terminal::new(Cursor::new(""), Vec::new());
        assert!(term.prompt_players().is_err());
    }

    #[test]
    fn play_game() {
        let (res, output) = play("1,2\n\n5\n", &config(Some(3)));
        let summary = res.unwrap();

        assert_eq!(summary.players.len(), 3);
        let best = summary.players.iter().map(|p| p.value).max().unwrap();
        let winner = &summary.players[summary.winner - 1];
        assert_eq!(winner.value, best);

        assert!(output.starts_with("Welcome to Poker!"));
        assert!(output.contains("All hands are dealt"));
        assert!(output.contains("Player 3 hand:"));
        assert!(output.contains("Now time to choose draw"));
        assert!(output.contains("Final hands of players"));
        assert!(output.contains(&format!("Winner is player {}", summary.winner)));
        assert!(output.trim_end().ends_with("Thanks for playing!"));
    }

    #[test]
    fn play_prompted_game() {
        let (res, output) = play("4\nn\n\n\n\n\n", &config(None));
        let summary = res.unwrap();
        assert_eq!(summary.players.len(), 4);
        assert!(!output.contains("Computer draws"));
    }

    #[test]
    fn play_with_computer() {
        let mut config = config(Some(2));
        config.computer = true;

        // Only player 2 reads from the input.
        let (res, output) = play("1\n", &config);
        assert!(res.is_ok());
        assert_eq!(output.matches("Computer draws").count(), 1);
        assert_eq!(output.matches("Enter the cards").count(), 1);
    }

    #[test]
    fn json_summary() {
        let mut config = config(Some(2));
        config.json = true;

        let (res, output) = play("\n\n", &config);
        let summary = res.unwrap();

        let start = output.find('{').unwrap();
        let end = output.rfind('}').unwrap();
        let json: serde_json::Value = serde_json::from_str(&output[start..=end]).unwrap();

        assert_eq!(json["winner"], summary.winner);
        assert_eq!(json["players"].as_array().unwrap().len(), 2);
        assert_eq!(json["players"][0]["player"], 1);
        assert_eq!(json["players"][0]["cards"].as_array().unwrap().len(), 5);
        assert!(json["players"][1]["rank"].is_string());
        assert!(json["players"][1]["high"].is_string());
    }

    #[test]
    fn missing_input_fails() {
        let (res, _) = play("1\n", &config(Some(3)));
        assert!(res.is_err());
    }
}
