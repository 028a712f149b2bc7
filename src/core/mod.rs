//! Core engine types: configuration, RNG, errors.
//!
//! These pieces know nothing about piles or turns. The board and game
//! are configured via `GameConfig` and shuffled via `GameRng`.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{GameConfig, DEFAULT_DRAW_PILE_SIZE};
pub use error::{CardRejection, Result, SolitaireError};
pub use rng::{GameRng, GameRngState};
