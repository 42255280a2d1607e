// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::CardError;

/// Primes used to encode a card rank.
pub const PRIMES: [u32; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// A Poker card.
///
/// A card is represented using the encoding in the [Cactus Kev's][kevlink] Poker
/// hand evaluator with each card having the following format:
///
/// ```text
///   +--------+--------+--------+--------+
///   |xxxbbbbb|bbbbbbbb|cdhsrrrr|xxpppppp|
///   +--------+--------+--------+--------+
///   p = prime number of rank (deuce=2,trey=3,four=5,five=7,...,ace=41)
///   r = rank of card (deuce=0,trey=1,four=2,five=3,...,ace=12)
///   cdhs = suit of card
///   b = bit turned on depending on rank of card
/// ```
///
/// Cards serialize as their two characters token, i.e. `"Ah"`.
///
/// [kevlink]: http://suffe.cool/poker/evaluator.html
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Card(u32);

/// A Poker card.
impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        let (rank, suit) = (rank as u32, suit as u32);
        Self(PRIMES[rank as usize] | (rank << 8) | (suit << 12) | (1 << (rank + 16)))
    }

    /// This card unique id.
    pub fn id(&self) -> u32 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        let suit_bits = self.suit_bits();
        match suit_bits {
            0x8 => Suit::Clubs,
            0x4 => Suit::Diamonds,
            0x2 => Suit::Hearts,
            0x1 => Suit::Spades,
            _ => panic!("Invalid suit value 0x{:x}", self.0),
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        Rank::from_ordinal(self.rank_bits())
            .unwrap_or_else(|| panic!("Invalid rank 0x{:x}", self.0))
    }

    /// Returns the rank bits.
    #[inline]
    pub fn rank_bits(&self) -> u8 {
        ((self.0 >> 8) & 0xf) as u8
    }

    /// Returns the suit bits.
    #[inline]
    pub fn suit_bits(&self) -> u8 {
        ((self.0 >> 12) & 0xf) as u8
    }

    /// Returns the 13 bits field with the bit for this card rank set.
    #[inline]
    pub fn bit_rank(&self) -> u32 {
        (self.0 >> 16) & 0x1fff
    }

    /// Returns the prime assigned to this card rank.
    #[inline]
    pub fn prime(&self) -> u32 {
        self.0 & 0x3f
    }

    /// A dense index in 0..52, unique for each card.
    #[inline]
    pub fn index(&self) -> usize {
        self.rank_bits() as usize * 4 + self.suit_bits().trailing_zeros() as usize
    }

    /// Formats the card with a suit glyph, i.e. `[A♠]`.
    pub fn to_pretty(&self) -> String {
        format!("[{}{}]", self.rank(), self.suit().glyph())
    }

    /// Formats the card encoding in groups of 4 bits, most significant first.
    pub fn to_binary_string(&self) -> String {
        let bits = format!("{:032b}", self.0);
        bits.as_bytes()
            .chunks(4)
            .map(|c| String::from_utf8_lossy(c).into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses a `<rank><suit>` token, the rank is one of `23456789TJQKA` in
    /// any case and the suit one of `shdc` or a suit glyph.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || CardError::InvalidCard(token.to_string());

        let mut chars = token.chars();
        let (Some(r), Some(s), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let rank = Rank::from_char(r).ok_or_else(invalid)?;
        let suit = Suit::from_char(s).ok_or_else(invalid)?;
        Ok(Card::new(rank, suit))
    }
}

impl TryFrom<String> for Card {
    type Error = CardError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        token.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
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

impl Rank {
    const ALL: [Rank; 13] = {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// Returns the rank with the given ordinal, deuce is 0 and ace 12.
    pub fn from_ordinal(ordinal: u8) -> Option<Rank> {
        Self::ALL.get(ordinal as usize).copied()
    }

    /// Parses a rank character, case insensitive.
    pub fn from_char(c: char) -> Option<Rank> {
        let rank = match c.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 8,
    /// Diamonds suit.
    Diamonds = 4,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 1,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// Parses a lowercase suit letter or a suit glyph.
    pub fn from_char(c: char) -> Option<Suit> {
        let suit = match c {
            's' | '\u{2660}' | '\u{2664}' => Suit::Spades,
            'h' | '\u{2665}' | '\u{2661}' | '\u{2764}' => Suit::Hearts,
            'd' | '\u{2666}' | '\u{2662}' => Suit::Diamonds,
            'c' | '\u{2663}' | '\u{2667}' => Suit::Clubs,
            _ => return None,
        };

        Some(suit)
    }

    /// The suit glyph.
    pub fn glyph(&self) -> char {
        match self {
            Suit::Clubs => '\u{2663}',
            Suit::Diamonds => '\u{2666}',
            Suit::Hearts => '\u{2665}',
            Suit::Spades => '\u{2660}',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        };

        write!(f, "{suit}")
    }
}

/// Multiplies the rank primes of the given cards.
///
/// The product identifies the ranks multiset of a hand regardless of suits and
/// order, for 5 cards the largest product (AAAAK) fits in 32 bits.
#[inline]
pub fn prime_product(cards: &[Card]) -> u32 {
    cards.iter().fold(1, |p, c| p * c.prime())
}

/// Multiplies the primes of the ranks set in a 13 bits rank mask.
///
/// Same as [prime_product] for hands with all distinct ranks, as flushes and
/// straights, computed from the OR of the cards [Card::bit_rank].
#[inline]
pub fn rankbits_prime_product(rankbits: u32) -> u32 {
    PRIMES
        .iter()
        .enumerate()
        .filter(|(rank, _)| rankbits & (1 << rank) != 0)
        .fold(1, |p, (_, prime)| p * prime)
}

/// Parses a list of card tokens separated by commas and/or whitespace.
///
/// An empty string returns an empty list.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, CardError> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

/// Checks that no card appears twice in the given cards.
pub fn ensure_distinct<'a, I>(cards: I) -> Result<(), CardError>
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut seen = 0u64;
    for card in cards {
        let bit = 1u64 << card.index();
        if seen & bit != 0 {
            return Err(CardError::DuplicateCard(*card));
        }

        seen |= bit;
    }

    Ok(())
}

/// Formats cards with suit glyphs separated by commas, i.e. `[A♠],[K♥]`.
pub fn to_pretty(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_pretty)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Deck;
    use ahash::HashSet;

    #[test]
    fn card_encoding() {
        let mut cards = HashSet::default();
        let mut indices = HashSet::default();

        for card in Deck::default() {
            assert_eq!(card.id() & 0xFF, PRIMES[card.rank() as usize]);
            assert_eq!((card.id() >> 8) & 0xF, card.rank() as u32);
            assert_eq!((card.id() >> 12) & 0xF, card.suit() as u32);
            assert_eq!(card.id() >> 16, 1 << (card.rank() as usize));
            assert_eq!(card.prime(), PRIMES[card.rank() as usize]);
            assert!(card.index() < Deck::SIZE);
            cards.insert(card.id());
            indices.insert(card.index());
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);
        assert_eq!(indices.len(), Deck::SIZE);

        // From the Cactus Kev's website.
        let kd = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(kd.id(), 0x08004b25);

        let fs = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(fs.id(), 0x00081307);

        let jc = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(jc.id(), 0x0200891d);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "Kd");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5s");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "Th");
        assert_eq!(c.to_pretty(), "[T\u{2665}]");

        let c = Card::new(Rank::Ace, Suit::Clubs);
        assert_eq!(c.to_pretty(), "[A\u{2663}]");
    }

    #[test]
    fn parse_all_tokens() {
        for card in Deck::default() {
            let token = card.to_string();
            let parsed = token.parse::<Card>().unwrap();
            assert_eq!(parsed, card);
            assert_eq!(parsed.rank(), card.rank());
            assert_eq!(parsed.suit(), card.suit());

            // Only the rank is case insensitive.
            assert_eq!(token.to_lowercase().parse::<Card>().unwrap(), card);
            assert!(token.to_uppercase().parse::<Card>().is_err());
        }
    }

    #[test]
    fn parse_glyphs() {
        let ace_spades = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!("A\u{2660}".parse::<Card>().unwrap(), ace_spades);

        let ten_hearts = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!("t\u{2665}".parse::<Card>().unwrap(), ten_hearts);
        assert_eq!("T\u{2764}".parse::<Card>().unwrap(), ten_hearts);

        let deuce_diamonds = Card::new(Rank::Deuce, Suit::Diamonds);
        assert_eq!("2\u{2666}".parse::<Card>().unwrap(), deuce_diamonds);

        let nine_clubs = Card::new(Rank::Nine, Suit::Clubs);
        assert_eq!("9\u{2663}".parse::<Card>().unwrap(), nine_clubs);
    }

    #[test]
    fn parse_invalid() {
        for token in ["", "A", "Ahh", "1h", "Ax", "10h", "hA", "A ", "AH", "7S", "aH", "tD", "2C"] {
            assert_eq!(
                token.parse::<Card>(),
                Err(CardError::InvalidCard(token.to_string())),
                "token {token:?}"
            );
        }
    }

    #[test]
    fn parse_list() {
        let cards = parse_cards("Ah, kd,2c 7s").unwrap();
        assert_eq!(
            cards,
            vec![
                Card::new(Rank::Ace, Suit::Hearts),
                Card::new(Rank::King, Suit::Diamonds),
                Card::new(Rank::Deuce, Suit::Clubs),
                Card::new(Rank::Seven, Suit::Spades),
            ]
        );

        assert!(parse_cards("").unwrap().is_empty());
        assert!(matches!(parse_cards("Ah,Zz"), Err(CardError::InvalidCard(_))));
    }

    #[test]
    fn distinct_cards() {
        let cards = parse_cards("Ah Kd 2c").unwrap();
        assert!(ensure_distinct(&cards).is_ok());

        let cards = parse_cards("Ah Kd 2c Kd").unwrap();
        assert_eq!(
            ensure_distinct(&cards),
            Err(CardError::DuplicateCard(Card::new(Rank::King, Suit::Diamonds)))
        );
    }

    #[test]
    fn prime_products() {
        let cards = parse_cards("As Ks Qs Js Ts").unwrap();
        assert_eq!(prime_product(&cards), 41 * 37 * 31 * 29 * 23);

        let rankbits = cards.iter().fold(0, |bits, c| bits | c.bit_rank());
        assert_eq!(rankbits, 0b1_1111_0000_0000);
        assert_eq!(rankbits_prime_product(rankbits), prime_product(&cards));

        // Largest 5 cards product fits in 32 bits.
        let quad_aces = parse_cards("As Ah Ad Ac Ks").unwrap();
        assert_eq!(prime_product(&quad_aces), 41 * 41 * 41 * 41 * 37);
    }

    #[test]
    fn binary_string() {
        let kd = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(
            kd.to_binary_string(),
            "0000 1000 0000 0000 0100 1011 0010 0101"
        );
    }

    #[test]
    fn serde_token() {
        let card = Card::new(Rank::Queen, Suit::Hearts);
        let json = String::from(card);
        assert_eq!(json, "Qh");
        assert_eq!(Card::try_from(json).unwrap(), card);
        assert!(Card::try_from("Qx".to_string()).is_err());
    }

    #[test]
    fn pretty_list() {
        let cards = parse_cards("As Kh").unwrap();
        assert_eq!(to_pretty(&cards), "[A\u{2660}],[K\u{2665}]");
    }
}
