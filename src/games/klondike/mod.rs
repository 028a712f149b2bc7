//! Klondike solitaire.
//!
//! - Seven tableau columns dealt 1..7 cards, top card face up
//! - Four foundations built up by suit from Ace to King
//! - A draw pile revealing `draw_pile_size` cards at a time
//!
//! The game is won when every foundation is complete. There is no loss
//! condition; the player can always draw, save or restore.

mod board;
mod game;
mod input;

pub use board::{Board, PileRef, DECK_SIZE, STACKING_DECKS, VICTORY_DECKS};
pub use game::{Command, Game, GameOutcome};
pub use input::{Answer, Destination, PlayerInput, ScriptedInput};
