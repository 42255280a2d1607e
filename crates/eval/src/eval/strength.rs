// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand strength and rank classes.
use serde::{Deserialize, Serialize};
use std::{fmt, ops::RangeInclusive};

use crate::EvalError;

/// The number of distinct 5 cards hand strengths.
pub const NUM_STRENGTHS: u16 = 7462;

/// The strength of a 5 cards hand in 1..=7462.
///
/// Strengths are totally ordered with 1 the strongest hand (a royal flush) and
/// 7462 the weakest (7-5-4-3-2 offsuit), so a hand beats another if its
/// strength compares **less**.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandStrength(u16);

impl HandStrength {
    /// The strongest hand.
    pub const BEST: HandStrength = HandStrength(1);

    /// The weakest hand.
    pub const WORST: HandStrength = HandStrength(NUM_STRENGTHS);

    pub(crate) const fn new(rank: u16) -> Self {
        Self(rank)
    }

    /// The strength rank.
    pub fn rank(&self) -> u16 {
        self.0
    }

    /// The rank class of this strength.
    pub fn class(&self) -> Result<RankClass, EvalError> {
        RankClass::from_rank(self.0)
    }

    /// The fraction of hand strengths in 0..=1 that are at least as strong,
    /// values close to 0 are the strongest.
    pub fn percentage(&self) -> f64 {
        rank_percentage(self.0)
    }

    /// Checks if this hand beats the other hand.
    pub fn beats(&self, other: &HandStrength) -> bool {
        self.0 < other.0
    }
}

impl fmt::Display for HandStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns `rank / 7462`, values close to 0 are the strongest hands.
pub fn rank_percentage(rank: u16) -> f64 {
    f64::from(rank) / f64::from(NUM_STRENGTHS)
}

/// The 9 hand categories, ordered from the strongest to the weakest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RankClass {
    /// Straight flush, a royal flush is the best one.
    StraightFlush = 1,
    /// Four of a kind.
    FourOfAKind,
    /// Full house.
    FullHouse,
    /// Flush.
    Flush,
    /// Straight.
    Straight,
    /// Three of a kind.
    ThreeOfAKind,
    /// Two pair.
    TwoPair,
    /// One pair.
    Pair,
    /// High card.
    HighCard,
}

impl RankClass {
    const ALL: [RankClass; 9] = [
        RankClass::StraightFlush,
        RankClass::FourOfAKind,
        RankClass::FullHouse,
        RankClass::Flush,
        RankClass::Straight,
        RankClass::ThreeOfAKind,
        RankClass::TwoPair,
        RankClass::Pair,
        RankClass::HighCard,
    ];

    /// Returns all classes from the strongest.
    pub fn classes() -> impl DoubleEndedIterator<Item = RankClass> {
        Self::ALL.into_iter()
    }

    /// The weakest strength rank in this class.
    pub const fn worst(&self) -> u16 {
        match self {
            RankClass::StraightFlush => 10,
            RankClass::FourOfAKind => 166,
            RankClass::FullHouse => 322,
            RankClass::Flush => 1599,
            RankClass::Straight => 1609,
            RankClass::ThreeOfAKind => 2467,
            RankClass::TwoPair => 3325,
            RankClass::Pair => 6185,
            RankClass::HighCard => NUM_STRENGTHS,
        }
    }

    /// The strongest strength rank in this class.
    pub const fn best(&self) -> u16 {
        match self {
            RankClass::StraightFlush => 1,
            RankClass::FourOfAKind => RankClass::StraightFlush.worst() + 1,
            RankClass::FullHouse => RankClass::FourOfAKind.worst() + 1,
            RankClass::Flush => RankClass::FullHouse.worst() + 1,
            RankClass::Straight => RankClass::Flush.worst() + 1,
            RankClass::ThreeOfAKind => RankClass::Straight.worst() + 1,
            RankClass::TwoPair => RankClass::ThreeOfAKind.worst() + 1,
            RankClass::Pair => RankClass::TwoPair.worst() + 1,
            RankClass::HighCard => RankClass::Pair.worst() + 1,
        }
    }

    /// The strength ranks in this class.
    pub fn ranks(&self) -> RangeInclusive<u16> {
        self.best()..=self.worst()
    }

    /// Returns the class for a strength rank.
    ///
    /// A rank outside 1..=7462 returns [EvalError::InvalidRank].
    pub fn from_rank(rank: u16) -> Result<RankClass, EvalError> {
        Self::classes()
            .find(|class| rank >= class.best() && rank <= class.worst())
            .ok_or(EvalError::InvalidRank(rank))
    }

    /// The class name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RankClass::StraightFlush => "Straight Flush",
            RankClass::FourOfAKind => "Four of a Kind",
            RankClass::FullHouse => "Full House",
            RankClass::Flush => "Flush",
            RankClass::Straight => "Straight",
            RankClass::ThreeOfAKind => "Three of a Kind",
            RankClass::TwoPair => "Two Pair",
            RankClass::Pair => "Pair",
            RankClass::HighCard => "High Card",
        }
    }
}

impl fmt::Display for RankClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_boundaries() {
        let sizes = RankClass::classes()
            .map(|c| c.ranks().count())
            .collect::<Vec<_>>();
        assert_eq!(sizes, vec![10, 156, 156, 1277, 10, 858, 858, 2860, 1277]);
        assert_eq!(sizes.iter().sum::<usize>(), NUM_STRENGTHS as usize);
        assert_eq!(RankClass::HighCard.best(), 6186);
    }

    #[test]
    fn class_from_rank() {
        assert_eq!(RankClass::from_rank(1), Ok(RankClass::StraightFlush));
        assert_eq!(RankClass::from_rank(10), Ok(RankClass::StraightFlush));
        assert_eq!(RankClass::from_rank(11), Ok(RankClass::FourOfAKind));
        assert_eq!(RankClass::from_rank(1600), Ok(RankClass::Straight));
        assert_eq!(RankClass::from_rank(6185), Ok(RankClass::Pair));
        assert_eq!(RankClass::from_rank(7462), Ok(RankClass::HighCard));
        assert_eq!(RankClass::from_rank(0), Err(EvalError::InvalidRank(0)));
        assert_eq!(RankClass::from_rank(7463), Err(EvalError::InvalidRank(7463)));
    }

    #[test]
    fn class_ordering_is_monotonic() {
        let mut prev = RankClass::StraightFlush;
        for rank in 1..=NUM_STRENGTHS {
            let class = RankClass::from_rank(rank).unwrap();
            assert!(class >= prev, "rank {rank} class {class} < {prev}");
            prev = class;
        }
    }

    #[test]
    fn class_names() {
        assert_eq!(RankClass::StraightFlush.to_string(), "Straight Flush");
        assert_eq!(RankClass::TwoPair.to_string(), "Two Pair");
        assert_eq!(RankClass::HighCard as u8, 9);
    }

    #[test]
    fn percentages() {
        assert_eq!(rank_percentage(NUM_STRENGTHS), 1.0);
        assert!(HandStrength::BEST.percentage() < 0.001);
        assert!(HandStrength::BEST.beats(&HandStrength::WORST));
        assert!(!HandStrength::WORST.beats(&HandStrength::WORST));
    }
}
