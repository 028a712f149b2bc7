//! Playing cards.
//!
//! A `Card` is a (rank, suit) pair plus its face orientation. Equality and
//! hashing look at rank and suit only, so a face-down Ace of Hearts equals a
//! face-up one. Ordering is by rank alone and exposed as [`Card::cmp_rank`].

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use enum_iterator::{all, next, previous, Sequence};
use serde::{Deserialize, Serialize};

/// Suit color. Tableau runs alternate between the two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Sequence, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// Single-letter symbol used in card names.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }

    pub fn all() -> impl Iterator<Item = Suit> {
        all::<Suit>()
    }
}

/// Card rank, Ace low.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Sequence, Serialize, Deserialize,
)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// Position in A..K, 0 through 12.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// One rank higher, `None` above King.
    #[must_use]
    pub fn next(self) -> Option<Rank> {
        next(&self)
    }

    /// One rank lower, `None` below Ace.
    #[must_use]
    pub fn prev(self) -> Option<Rank> {
        previous(&self)
    }

    pub fn all() -> impl Iterator<Item = Rank> {
        all::<Rank>()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Ace => write!(f, "A"),
            Rank::Jack => write!(f, "J"),
            Rank::Queen => write!(f, "Q"),
            Rank::King => write!(f, "K"),
            r => write!(f, "{}", r.ordinal() + 1),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A playing card.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Create a face-up card.
    #[must_use]
    pub const fn face_up(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: true,
        }
    }

    /// Rank and suit, e.g. `10S`. Independent of orientation.
    #[must_use]
    pub fn name(&self) -> String {
        format!("{}{}", self.rank, self.suit)
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    /// Same-suit card one rank higher, `None` above King.
    #[must_use]
    pub fn next(&self) -> Option<Card> {
        self.rank.next().map(|rank| Card::new(self.suit, rank))
    }

    /// Same-suit card one rank lower, `None` below Ace.
    #[must_use]
    pub fn prev(&self) -> Option<Card> {
        self.rank.prev().map(|rank| Card::new(self.suit, rank))
    }

    /// Compare by rank only.
    #[must_use]
    pub fn cmp_rank(&self, other: &Card) -> Ordering {
        self.rank.cmp(&other.rank)
    }

    pub fn flip(&mut self) {
        self.face_up = !self.face_up;
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
        self.suit.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
