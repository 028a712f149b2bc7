//! # rust-klondike
//!
//! Klondike solitaire: the rules engine and a terminal front end.
//!
//! ## Design Principles
//!
//! 1. **One deck core**: every pile is an ordered `Deck`. Columns and
//!    foundations differ only in the `AcceptancePolicy` guarding `add`.
//!
//! 2. **Engine/IO split**: `Game` never reads or prints. Decisions come
//!    through the `PlayerInput` trait, so the turn loop runs unchanged
//!    against a terminal or a scripted test.
//!
//! 3. **Cheap snapshots**: decks sit on `im` persistent vectors, so a
//!    saved board is an O(1) clone that later moves never touch.
//!
//! ## Modules
//!
//! - `core`: configuration, RNG, errors
//! - `cards`: `Card` and `Deck`
//! - `rules`: acceptance policies for columns and foundations
//! - `zones`: piles and the cycling draw pile
//! - `games`: the Klondike board and turn engine
//! - `cli`: flags, prompts and rendering for the terminal

pub mod core;
pub mod cards;
pub mod rules;
pub mod zones;
pub mod games;
pub mod cli;

// Re-export commonly used types
pub use crate::core::{
    CardRejection, GameConfig, GameRng, GameRngState, Result, SolitaireError,
    DEFAULT_DRAW_PILE_SIZE,
};

pub use crate::cards::{Card, Color, Deck, Rank, Suit};

pub use crate::rules::{AcceptancePolicy, StackingRule, VictoryRule};

pub use crate::zones::{DrawPile, Pile, StackingDeck, VictoryDeck, FULL_SUIT};

pub use crate::games::klondike::{
    Answer, Board, Command, Destination, Game, GameOutcome, PileRef, PlayerInput,
    ScriptedInput, DECK_SIZE, STACKING_DECKS, VICTORY_DECKS,
};
