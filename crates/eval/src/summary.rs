// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Street by street summary of a showdown.
//!
//! Given a 5 cards board and the players 2 cards hands, reports for the flop,
//! the turn, and the river each player hand class and which players lead,
//! the river leaders are the hand winners.
//!
//! ```
//! # use oddsmith_eval::*;
//! let eval = Evaluator::default();
//! let board = parse_cards("Ah Kd 7c 7s 2h").unwrap();
//! let hands = [parse_cards("Ac Qd").unwrap(), parse_cards("2c 2d").unwrap()];
//! let summary = eval.hand_summary(&board, &hands).unwrap();
//! assert_eq!(summary.streets[0].leaders, vec![0]);
//! assert_eq!(summary.winners, vec![1]);
//! ```
use serde::Serialize;
use std::fmt;

use oddsmith_cards::{Card, ensure_distinct};

use crate::{EvalError, Evaluator, HandStrength, RankClass};

/// The board streets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Street {
    /// First three board cards.
    Flop,
    /// Fourth board card.
    Turn,
    /// Fifth board card.
    River,
}

impl Street {
    /// The number of board cards visible at this street.
    pub fn board_len(&self) -> usize {
        match self {
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let street = match self {
            Street::Flop => "FLOP",
            Street::Turn => "TURN",
            Street::River => "RIVER",
        };

        f.write_str(street)
    }
}

/// A player hand at some street.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerReport {
    /// The hand strength.
    pub strength: HandStrength,
    /// The hand class.
    pub class: RankClass,
    /// The strength percentage, 0 is the strongest.
    pub percentage: f64,
}

/// All players hands at some street.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreetSummary {
    /// The street.
    pub street: Street,
    /// The board cards visible at this street.
    pub board: Vec<Card>,
    /// A report for each player in input order.
    pub players: Vec<PlayerReport>,
    /// The indices of the players with the strongest hand.
    pub leaders: Vec<usize>,
}

/// Summary of a hand from the flop to the river.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandSummary {
    /// The flop, turn, and river summaries.
    pub streets: Vec<StreetSummary>,
    /// The indices of the players that win or split the pot.
    pub winners: Vec<usize>,
}

impl Evaluator {
    /// Summarizes the hands of multiple players as the board is revealed.
    ///
    /// The board must have 5 cards and each hand 2 cards, no card can appear
    /// more than once.
    pub fn hand_summary<H>(&self, board: &[Card], hands: &[H]) -> Result<HandSummary, EvalError>
    where
        H: AsRef<[Card]>,
    {
        let hand_size = |hand: &H| hand.as_ref().len();
        if board.len() != Street::River.board_len() {
            let hand = hands.first().map(hand_size).unwrap_or(0);
            return Err(EvalError::HandSize {
                hand,
                board: board.len(),
            });
        }

        if let Some(hand) = hands.iter().find(|&h| hand_size(h) != 2) {
            return Err(EvalError::HandSize {
                hand: hand_size(hand),
                board: board.len(),
            });
        }

        ensure_distinct(board.iter().chain(hands.iter().flat_map(|h| h.as_ref())))?;

        let streets = [Street::Flop, Street::Turn, Street::River]
            .into_iter()
            .map(|street| self.street_summary(street, board, hands))
            .collect::<Result<Vec<_>, _>>()?;

        let winners = streets
            .last()
            .map(|s| s.leaders.clone())
            .unwrap_or_default();

        Ok(HandSummary { streets, winners })
    }

    fn street_summary<H>(
        &self,
        street: Street,
        board: &[Card],
        hands: &[H],
    ) -> Result<StreetSummary, EvalError>
    where
        H: AsRef<[Card]>,
    {
        let board = &board[..street.board_len()];

        let players = hands
            .iter()
            .map(|hand| {
                let strength = self.evaluate(hand.as_ref(), board)?;
                Ok(PlayerReport {
                    strength,
                    class: strength.class()?,
                    percentage: strength.percentage(),
                })
            })
            .collect::<Result<Vec<_>, EvalError>>()?;

        let leaders = match players.iter().map(|p| p.strength).min() {
            Some(best) => players
                .iter()
                .enumerate()
                .filter(|(_, p)| p.strength == best)
                .map(|(idx, _)| idx)
                .collect(),
            None => Vec::new(),
        };

        Ok(StreetSummary {
            street,
            board: board.to_vec(),
            players,
            leaders,
        })
    }
}

impl fmt::Display for HandSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for street in &self.streets {
            writeln!(f, "========== {} ==========", street.street)?;
            writeln!(f, "Board: {}", oddsmith_cards::to_pretty(&street.board))?;

            for (idx, player) in street.players.iter().enumerate() {
                writeln!(
                    f,
                    "Player {} hand = {}, percentage rank among all hands = {:.3}",
                    idx + 1,
                    player.class,
                    1.0 - player.percentage
                )?;
            }

            let leaders = players_list(&street.leaders);
            if street.street == Street::River {
                writeln!(f, "========== HAND OVER ==========")?;
                if self.winners.len() > 1 {
                    writeln!(f, "Players {leaders} tied for the win")?;
                } else {
                    writeln!(f, "Player {leaders} is the winner")?;
                }
            } else if street.leaders.len() > 1 {
                writeln!(f, "Players {leaders} are tied for the lead")?;
            } else {
                writeln!(f, "Player {leaders} hand is currently winning")?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

fn players_list(players: &[usize]) -> String {
    players
        .iter()
        .map(|idx| (idx + 1).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use oddsmith_cards::{CardError, parse_cards};

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    #[test]
    fn leaders_change_by_street() {
        let eval = Evaluator::default();
        let board = cards("Ah Kd 7c 7s 2h");
        let hands = [cards("Ac Qd"), cards("2c 2d"), cards("Kc Qc")];

        let summary = eval.hand_summary(&board, &hands).unwrap();
        assert_eq!(summary.streets.len(), 3);

        let flop = &summary.streets[0];
        assert_eq!(flop.street, Street::Flop);
        assert_eq!(flop.board, cards("Ah Kd 7c"));
        assert_eq!(flop.players[0].class, RankClass::Pair);
        assert_eq!(flop.players[1].class, RankClass::Pair);
        assert_eq!(flop.players[2].class, RankClass::Pair);
        assert_eq!(flop.leaders, vec![0]);

        let turn = &summary.streets[1];
        assert_eq!(turn.players[0].class, RankClass::TwoPair);
        assert_eq!(turn.players[1].class, RankClass::TwoPair);
        assert_eq!(turn.leaders, vec![0]);

        let river = &summary.streets[2];
        assert_eq!(river.players[1].class, RankClass::FullHouse);
        assert_eq!(river.leaders, vec![1]);
        assert_eq!(summary.winners, vec![1]);
    }

    #[test]
    fn split_pot() {
        let eval = Evaluator::default();
        let board = cards("As Ks Qd Jc Th");
        let hands = [cards("2c 3d"), cards("4h 5h"), cards("9c 8c")];

        let summary = eval.hand_summary(&board, &hands).unwrap();
        assert_eq!(summary.winners, vec![0, 1, 2]);

        let text = summary.to_string();
        assert!(text.contains("Players 1, 2, 3 tied for the win"));
        assert!(text.contains("========== FLOP =========="));
    }

    #[test]
    fn invalid_input() {
        let eval = Evaluator::default();
        let hands = [cards("2c 3d")];

        let res = eval.hand_summary(&cards("As Ks Qd"), &hands);
        assert_eq!(res, Err(EvalError::HandSize { hand: 2, board: 3 }));

        let res = eval.hand_summary(&cards("As Ks Qd Jc Th"), &[cards("2c 3d 4d")]);
        assert_eq!(res, Err(EvalError::HandSize { hand: 3, board: 5 }));

        let res = eval.hand_summary(&cards("As Ks Qd Jc Th"), &[cards("2c 3d"), cards("3d 4h")]);
        assert_eq!(
            res,
            Err(EvalError::Card(CardError::DuplicateCard(cards("3d")[0])))
        );
    }
}
