//! Engine errors.
//!
//! - `InvalidCard`: a placement or lookup violates a pile's rule
//! - `InvalidInput`: a player-supplied value fails validation
//! - `EmptyDeck`: a draw was attempted on an empty deck
//!
//! None of these are fatal. Destination selection and the prompt loop
//! catch them, report the message and ask again.

use thiserror::Error;

use crate::cards::Card;

/// Why a pile refused a card.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CardRejection {
    #[error("{card} is not in the deck")]
    NotInDeck { card: Card },

    #[error("{card} cannot be placed on top of {top} in a stacking deck")]
    CannotStack { card: Card, top: Card },

    #[error("{card} cannot start a stacking deck, only Kings can do that")]
    KingsOnly { card: Card },

    #[error("{card} cannot start a victory deck, only Aces can do that")]
    AcesOnly { card: Card },

    #[error("{card} cannot be placed on top of {top} in a victory deck")]
    CannotFound { card: Card, top: Card },

    #[error("victory decks take one card at a time")]
    SingleCardOnly,

    #[error("there are no cards to place")]
    NoCards,
}

/// Errors produced by the solitaire engine and its input layer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SolitaireError {
    #[error(transparent)]
    InvalidCard(#[from] CardRejection),

    #[error("{0}")]
    InvalidInput(String),

    #[error("cannot draw from an empty deck")]
    EmptyDeck,
}

impl SolitaireError {
    /// Build an `InvalidInput` from any message.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        SolitaireError::InvalidInput(message.into())
    }
}

/// Result alias used across the engine.
pub type Result<T> = std::result::Result<T, SolitaireError>;
