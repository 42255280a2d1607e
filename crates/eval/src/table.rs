// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Lookup tables for 5 cards hands.
//!
//! There are two tables both keyed by the product of the hand cards rank
//! primes, one for suited hands (straight flushes and flushes) and one for all
//! the other hands, each table maps a product to the hand strength rank.
//!
//! Ranks are assigned in contiguous ranges for each class from the straight
//! flushes to the high cards, and within a class from the strongest hand.
use ahash::AHashMap;
use log::debug;
use std::time::Instant;

use oddsmith_cards::{PRIMES, rankbits_prime_product};

use crate::RankClass;

/// Straights rank masks from the strongest, the wheel (A2345) is the last.
const STRAIGHTS: [u32; 10] = [
    0b1_1111_0000_0000,
    0b0_1111_1000_0000,
    0b0_0111_1100_0000,
    0b0_0011_1110_0000,
    0b0_0001_1111_0000,
    0b0_0000_1111_1000,
    0b0_0000_0111_1100,
    0b0_0000_0011_1110,
    0b0_0000_0001_1111,
    0b1_0000_0000_1111,
];

/// The hand lookup tables.
///
/// The tables are immutable once built and can be shared by reference
/// between threads.
#[derive(Debug, Clone)]
pub struct LookupTable {
    flush: AHashMap<u32, u16>,
    unsuited: AHashMap<u32, u16>,
}

impl LookupTable {
    /// Builds the lookup tables.
    pub fn new() -> Self {
        let now = Instant::now();

        let mut table = Self {
            flush: AHashMap::with_capacity(1287),
            unsuited: AHashMap::with_capacity(6175),
        };

        table.add_distinct_ranks();
        table.add_multiples();

        debug!(
            "Built lookup table with {} flush and {} unsuited entries in {:.3}ms",
            table.flush.len(),
            table.unsuited.len(),
            now.elapsed().as_secs_f64() * 1000.0
        );

        table
    }

    /// Returns the strength rank of a flush hand given its prime product.
    #[inline]
    pub fn flush(&self, product: u32) -> Option<u16> {
        self.flush.get(&product).copied()
    }

    /// Returns the strength rank of a non flush hand given its prime product.
    #[inline]
    pub fn unsuited(&self, product: u32) -> Option<u16> {
        self.unsuited.get(&product).copied()
    }

    /// The number of entries in the flush and unsuited tables.
    pub fn sizes(&self) -> (usize, usize) {
        (self.flush.len(), self.unsuited.len())
    }

    /// Adds hands with 5 distinct ranks: straight flushes, flushes, straights,
    /// and high cards.
    fn add_distinct_ranks(&mut self) {
        // All masks with 5 ranks that are not straights from the strongest,
        // a higher mask has higher ranks.
        let highs = (0u32..1 << 13)
            .rev()
            .filter(|mask| mask.count_ones() == 5 && !STRAIGHTS.contains(mask));

        for (rank, &mask) in (RankClass::StraightFlush.best()..).zip(STRAIGHTS.iter()) {
            self.flush.insert(rankbits_prime_product(mask), rank);
        }

        for (rank, &mask) in (RankClass::Straight.best()..).zip(STRAIGHTS.iter()) {
            self.unsuited.insert(rankbits_prime_product(mask), rank);
        }

        let flush_ranks = RankClass::Flush.best()..;
        let high_ranks = RankClass::HighCard.best()..;
        for ((flush, high), mask) in flush_ranks.zip(high_ranks).zip(highs) {
            let product = rankbits_prime_product(mask);
            self.flush.insert(product, flush);
            self.unsuited.insert(product, high);
        }
    }

    /// Adds hands with repeated ranks: four of a kind, full houses, three of
    /// a kind, two pairs, and pairs.
    fn add_multiples(&mut self) {
        // Ranks from the ace down.
        let ranks = (0..PRIMES.len()).rev().collect::<Vec<_>>();
        let others = |excluded: &[usize]| {
            ranks
                .iter()
                .copied()
                .filter(|r| !excluded.contains(r))
                .collect::<Vec<_>>()
        };

        let mut next = RankClass::FourOfAKind.best();
        for &quads in &ranks {
            for kicker in others(&[quads]) {
                self.add_unsuited(&mut next, PRIMES[quads].pow(4) * PRIMES[kicker]);
            }
        }

        next = RankClass::FullHouse.best();
        for &trips in &ranks {
            for pair in others(&[trips]) {
                self.add_unsuited(&mut next, PRIMES[trips].pow(3) * PRIMES[pair].pow(2));
            }
        }

        next = RankClass::ThreeOfAKind.best();
        for &trips in &ranks {
            for (k1, k2) in pairs(&others(&[trips])) {
                let product = PRIMES[trips].pow(3) * PRIMES[k1] * PRIMES[k2];
                self.add_unsuited(&mut next, product);
            }
        }

        next = RankClass::TwoPair.best();
        for (high, low) in pairs(&ranks) {
            for kicker in others(&[high, low]) {
                let product = PRIMES[high].pow(2) * PRIMES[low].pow(2) * PRIMES[kicker];
                self.add_unsuited(&mut next, product);
            }
        }

        next = RankClass::Pair.best();
        for &pair in &ranks {
            for (k1, k2, k3) in triples(&others(&[pair])) {
                let product = PRIMES[pair].pow(2) * PRIMES[k1] * PRIMES[k2] * PRIMES[k3];
                self.add_unsuited(&mut next, product);
            }
        }
    }

    fn add_unsuited(&mut self, next: &mut u16, product: u32) {
        self.unsuited.insert(product, *next);
        *next += 1;
    }
}

impl Default for LookupTable {
    fn default() -> Self {
        Self::new()
    }
}

/// All 2-combinations keeping the input order.
fn pairs(ranks: &[usize]) -> impl Iterator<Item = (usize, usize)> + '_ {
    ranks
        .iter()
        .enumerate()
        .flat_map(move |(i, &r1)| ranks[i + 1..].iter().map(move |&r2| (r1, r2)))
}

/// All 3-combinations keeping the input order.
fn triples(ranks: &[usize]) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
    ranks.iter().enumerate().flat_map(move |(i, &r1)| {
        pairs(&ranks[i + 1..]).map(move |(r2, r3)| (r1, r2, r3))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashSet;

    #[test]
    fn table_sizes() {
        let table = LookupTable::new();
        assert_eq!(table.sizes(), (1287, 6175));
    }

    #[test]
    fn table_ranks_are_unique_and_contiguous() {
        let table = LookupTable::new();

        let ranks = table
            .flush
            .values()
            .chain(table.unsuited.values())
            .copied()
            .collect::<AHashSet<_>>();
        assert_eq!(ranks.len(), 7462);
        assert_eq!(ranks.iter().min(), Some(&1));
        assert_eq!(ranks.iter().max(), Some(&7462));

        for rank in table.flush.values() {
            let class = RankClass::from_rank(*rank).unwrap();
            assert!(matches!(class, RankClass::StraightFlush | RankClass::Flush));
        }

        for rank in table.unsuited.values() {
            let class = RankClass::from_rank(*rank).unwrap();
            assert!(!matches!(class, RankClass::StraightFlush | RankClass::Flush));
        }
    }

    #[test]
    fn table_known_entries() {
        let table = LookupTable::new();
        let p = |ranks: &[usize]| ranks.iter().map(|&r| PRIMES[r]).product::<u32>();

        // AKQJT
        assert_eq!(table.flush(p(&[12, 11, 10, 9, 8])), Some(1));
        assert_eq!(table.unsuited(p(&[12, 11, 10, 9, 8])), Some(1600));

        // A2345
        assert_eq!(table.flush(p(&[12, 0, 1, 2, 3])), Some(10));
        assert_eq!(table.unsuited(p(&[12, 0, 1, 2, 3])), Some(1609));

        // AAAAK and 22223
        assert_eq!(table.unsuited(p(&[12, 12, 12, 12, 11])), Some(11));
        assert_eq!(table.unsuited(p(&[0, 0, 0, 0, 1])), Some(166));

        // AAAKK and 22233
        assert_eq!(table.unsuited(p(&[12, 12, 12, 11, 11])), Some(167));
        assert_eq!(table.unsuited(p(&[0, 0, 0, 1, 1])), Some(322));

        // AKQJ9 and 75432
        assert_eq!(table.flush(p(&[12, 11, 10, 9, 7])), Some(323));
        assert_eq!(table.flush(p(&[5, 3, 2, 1, 0])), Some(1599));
        assert_eq!(table.unsuited(p(&[12, 11, 10, 9, 7])), Some(6186));
        assert_eq!(table.unsuited(p(&[5, 3, 2, 1, 0])), Some(7462));

        // AAAKQ, KKAA2 and AAKQJ
        assert_eq!(table.unsuited(p(&[12, 12, 12, 11, 10])), Some(1610));
        assert_eq!(table.unsuited(p(&[12, 12, 11, 11, 10])), Some(2468));
        assert_eq!(table.unsuited(p(&[0, 0, 1, 1, 2])), Some(3325));
        assert_eq!(table.unsuited(p(&[12, 12, 11, 10, 9])), Some(3326));
        assert_eq!(table.unsuited(p(&[0, 0, 3, 2, 1])), Some(6185));

        // No five of a kind.
        assert_eq!(table.unsuited(p(&[12, 12, 12, 12, 12])), None);
    }

    #[test]
    fn combinations() {
        assert_eq!(pairs(&[3, 2, 1]).collect::<Vec<_>>(), vec![(3, 2), (3, 1), (2, 1)]);
        assert_eq!(pairs(&(0..12).collect::<Vec<_>>()).count(), 66);
        assert_eq!(triples(&(0..12).collect::<Vec<_>>()).count(), 220);
        assert_eq!(triples(&[4, 3, 2, 1]).next(), Some((4, 3, 2)));
    }
}
