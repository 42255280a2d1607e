// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand evaluator.
use std::sync::Arc;

use oddsmith_cards::{Card, Rank, Suit, ensure_distinct, prime_product, rankbits_prime_product};

use super::{HandStrength, RankClass, rank_percentage};
use crate::{EvalError, LookupTable};

/// Evaluates 5, 6, and 7 cards hands using the [LookupTable].
///
/// The evaluator shares the lookup table so it is cheap to clone and can be
/// used from many threads:
///
/// ```
/// # use oddsmith_eval::*;
/// let eval = Evaluator::default();
/// let hand = parse_cards("As Ks").unwrap();
/// let board = parse_cards("Qs Js Ts 2d 3c").unwrap();
/// let strength = eval.evaluate(&hand, &board).unwrap();
/// assert_eq!(strength.rank(), 1);
/// assert_eq!(strength.class().unwrap(), RankClass::StraightFlush);
/// ```
#[derive(Debug, Clone)]
pub struct Evaluator {
    table: Arc<LookupTable>,
}

impl Evaluator {
    /// Creates an evaluator that uses the given table.
    pub fn new(table: Arc<LookupTable>) -> Self {
        Self { table }
    }

    /// The evaluator lookup table.
    pub fn table(&self) -> &Arc<LookupTable> {
        &self.table
    }

    /// Evaluates the hand cards together with the board cards.
    ///
    /// With 4 hand cards the best hand must use exactly two of the hand cards
    /// and three of the 5 board cards, otherwise the total number of cards must
    /// be 5, 6, or 7 and the best 5 cards are used.
    pub fn evaluate(&self, hand: &[Card], board: &[Card]) -> Result<HandStrength, EvalError> {
        if hand.len() == 4 {
            return self.evaluate_four_hole(hand, board);
        }

        let num_cards = hand.len() + board.len();
        if !(5..=7).contains(&num_cards) {
            return Err(EvalError::HandSize {
                hand: hand.len(),
                board: board.len(),
            });
        }

        ensure_distinct(hand.iter().chain(board))?;

        let mut cards = [FILLER; 7];
        cards[..hand.len()].copy_from_slice(hand);
        cards[hand.len()..num_cards].copy_from_slice(board);

        checked(self.eval_best(&cards[..num_cards]))
    }

    /// Evaluates 4 hole cards with a 5 cards board using two hole cards and
    /// three board cards.
    pub fn evaluate_four_hole(
        &self,
        hand: &[Card],
        board: &[Card],
    ) -> Result<HandStrength, EvalError> {
        let (Ok(hand), Ok(board)) = (<&[Card; 4]>::try_from(hand), <&[Card; 5]>::try_from(board))
        else {
            return Err(EvalError::HandSize {
                hand: hand.len(),
                board: board.len(),
            });
        };

        ensure_distinct(hand.iter().chain(board))?;

        let mut best = u16::MAX;
        for h1 in 0..4 {
            for h2 in (h1 + 1)..4 {
                for b1 in 0..5 {
                    for b2 in (b1 + 1)..5 {
                        for b3 in (b2 + 1)..5 {
                            let cards = [hand[h1], hand[h2], board[b1], board[b2], board[b3]];
                            best = best.min(self.eval5(&cards));
                        }
                    }
                }
            }
        }

        checked(HandStrength::new(best))
    }

    /// Evaluates the best 5 cards hand out of 5, 6, or 7 cards.
    ///
    /// This method doesn't validate its input and it is meant for callers that
    /// already checked the cards, like simulations that deal from a deck.
    ///
    /// Panics if the number of cards is not 5 <= n <= 7.
    pub fn eval_best(&self, cards: &[Card]) -> HandStrength {
        let n = cards.len();
        assert!((5..=7).contains(&n), "5 <= n <= 7");

        // Check all the 5 cards subsets by skipping n - 5 cards.
        let mut best = u16::MAX;
        let mut hand = [cards[0]; 5];
        for skip in 0u32..(1 << n) {
            if skip.count_ones() as usize != n - 5 {
                continue;
            }

            let kept = cards
                .iter()
                .enumerate()
                .filter(|(idx, _)| skip & (1 << idx) == 0)
                .map(|(_, c)| *c);
            for (pos, card) in kept.enumerate() {
                hand[pos] = card;
            }

            best = best.min(self.eval5(&hand));
        }

        HandStrength::new(best)
    }

    /// Evaluates a 5 cards hand, returns 0 if the hand is not in the table.
    #[inline]
    fn eval5(&self, cards: &[Card; 5]) -> u16 {
        let [c1, c2, c3, c4, c5] = [0, 1, 2, 3, 4].map(|idx| cards[idx].id());

        let rank = if c1 & c2 & c3 & c4 & c5 & 0xf000 != 0 {
            let rankbits = (c1 | c2 | c3 | c4 | c5) >> 16;
            self.table.flush(rankbits_prime_product(rankbits))
        } else {
            self.table.unsuited(prime_product(cards))
        };

        rank.unwrap_or(0)
    }

    /// Returns the class for a strength rank.
    pub fn get_rank_class(&self, rank: u16) -> Result<RankClass, EvalError> {
        RankClass::from_rank(rank)
    }

    /// Returns the name of a class.
    pub fn class_to_string(&self, class: RankClass) -> &'static str {
        class.as_str()
    }

    /// Returns `rank / 7462`, 0 is the strongest.
    pub fn get_five_card_rank_percentage(&self, rank: u16) -> f64 {
        rank_percentage(rank)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(Arc::new(LookupTable::new()))
    }
}

const FILLER: Card = Card::new(Rank::Deuce, Suit::Clubs);

/// Rejects strengths from a broken table.
fn checked(strength: HandStrength) -> Result<HandStrength, EvalError> {
    strength.class().map(|_| strength)
}
