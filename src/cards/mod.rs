//! Cards and decks.
//!
//! - `Card`: rank, suit and face orientation
//! - `Deck`: the ordered sequence every pile is built on

pub mod card;
pub mod deck;

pub use card::{Card, Color, Rank, Suit};
pub use deck::Deck;
