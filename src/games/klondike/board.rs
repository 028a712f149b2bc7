//! The Klondike board: one draw pile, four foundations, seven columns.

use std::fmt;
use std::str::FromStr;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::cards::Deck;
use crate::core::config::GameConfig;
use crate::core::error::{Result, SolitaireError};
use crate::core::rng::GameRng;
use crate::zones::{DrawPile, StackingDeck, VictoryDeck};

/// Number of tableau columns.
pub const STACKING_DECKS: usize = 7;
/// Number of foundations.
pub const VICTORY_DECKS: usize = 4;
/// Cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// A tableau column or foundation on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileRef {
    /// Tableau column `S0`..`S6`.
    Stacking(usize),
    /// Foundation `V0`..`V3`.
    Victory(usize),
}

impl PileRef {
    /// Check the index against the board layout.
    pub fn validated(self) -> Result<Self> {
        match self {
            PileRef::Stacking(i) if i >= STACKING_DECKS => Err(SolitaireError::invalid_input(
                format!("Must be an integer in [0-{}]!", STACKING_DECKS - 1),
            )),
            PileRef::Victory(i) if i >= VICTORY_DECKS => Err(SolitaireError::invalid_input(
                format!("Must be an integer in [0-{}]!", VICTORY_DECKS - 1),
            )),
            pile => Ok(pile),
        }
    }
}

impl fmt::Display for PileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PileRef::Stacking(i) => write!(f, "S{}", i),
            PileRef::Victory(i) => write!(f, "V{}", i),
        }
    }
}

/// Parse `S3` / `v1` style specifiers.
impl FromStr for PileRef {
    type Err = SolitaireError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let mut chars = s.chars();
        let tag = chars
            .next()
            .ok_or_else(|| SolitaireError::invalid_input("Pile must be 'S' or 'V'"))?;
        let index: usize = chars.as_str().trim().parse().map_err(|_| {
            SolitaireError::invalid_input(format!("'{}' needs a numeric pile index", s))
        })?;
        let pile = match tag.to_ascii_uppercase() {
            'S' => PileRef::Stacking(index),
            'V' => PileRef::Victory(index),
            _ => return Err(SolitaireError::invalid_input("Pile must be 'S' or 'V'")),
        };
        pile.validated()
    }
}

/// Complete board state.
///
/// Cloning is O(1) and yields a fully independent board (see [`Deck`]),
/// which is what Save relies on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub draw_pile: DrawPile,
    pub victory_decks: [VictoryDeck; VICTORY_DECKS],
    pub stacking_decks: [StackingDeck; STACKING_DECKS],
}

impl Board {
    /// Shuffle a standard deck and deal it.
    ///
    /// Column `i` receives `i + 1` cards with only the last face up; the
    /// remaining 24 cards stay face down in the stock.
    #[must_use]
    pub fn deal(config: &GameConfig, rng: &mut GameRng) -> Self {
        let mut draw_pile = DrawPile::new(config.draw_pile_size, config.max_loops);
        draw_pile.load(Deck::standard());
        draw_pile.shuffle(rng);
        debug!("Shuffled with {:?}", rng.state());

        let stacking_decks = std::array::from_fn(|i| {
            let cards: Deck = (0..=i)
                .map(|_| {
                    draw_pile
                        .draw()
                        .expect("a full deck holds enough cards for the deal")
                })
                .collect();
            StackingDeck::with_deck(cards)
        });

        let mut board = Self {
            draw_pile,
            victory_decks: std::array::from_fn(|_| VictoryDeck::new()),
            stacking_decks,
        };
        board.reveal_tops();
        info!(
            "Dealt board with seed {} ({} cards left in stock)",
            rng.seed(),
            board.draw_pile.stock().len()
        );
        board
    }

    /// Assemble a board from existing piles.
    #[must_use]
    pub fn from_parts(
        draw_pile: DrawPile,
        victory_decks: [VictoryDeck; VICTORY_DECKS],
        stacking_decks: [StackingDeck; STACKING_DECKS],
    ) -> Self {
        Self {
            draw_pile,
            victory_decks,
            stacking_decks,
        }
    }

    /// The cards of a pile, if the index is on the board.
    #[must_use]
    pub fn pile(&self, pile: PileRef) -> Option<&Deck> {
        match pile {
            PileRef::Stacking(i) => self.stacking_decks.get(i).map(StackingDeck::deck),
            PileRef::Victory(i) => self.victory_decks.get(i).map(VictoryDeck::deck),
        }
    }

    /// Place `run` onto a pile under that pile's rule.
    pub fn place(&mut self, pile: PileRef, run: &Deck) -> Result<()> {
        match pile.validated()? {
            PileRef::Stacking(i) => self.stacking_decks[i].add(run),
            PileRef::Victory(i) => self.victory_decks[i].add(run),
        }
    }

    /// Turn up the top card of every non-empty column. Returns how many
    /// cards were flipped.
    pub fn reveal_tops(&mut self) -> usize {
        self.stacking_decks
            .iter_mut()
            .map(StackingDeck::reveal_top)
            .filter(|&flipped| flipped)
            .count()
    }

    /// Equal and every pile faces the same way card for card.
    ///
    /// `==` ignores orientation, since card equality does.
    #[must_use]
    pub fn is_identical_to(&self, other: &Board) -> bool {
        let (mine, theirs) = (&self.draw_pile, &other.draw_pile);
        self == other
            && mine.stock().is_identical_to(theirs.stock())
            && mine.discards().is_identical_to(theirs.discards())
            && mine.revealed().is_identical_to(theirs.revealed())
            && self
                .victory_decks
                .iter()
                .zip(&other.victory_decks)
                .all(|(a, b)| a.deck().is_identical_to(b.deck()))
            && self
                .stacking_decks
                .iter()
                .zip(&other.stacking_decks)
                .all(|(a, b)| a.deck().is_identical_to(b.deck()))
    }

    /// Every foundation holds its full suit.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.victory_decks.iter().all(VictoryDeck::is_complete)
    }

    /// Cards on the board, wherever they are.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.draw_pile.total_len()
            + self.victory_decks.iter().map(VictoryDeck::len).sum::<usize>()
            + self.stacking_decks.iter().map(StackingDeck::len).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::deal(&GameConfig::default(), &mut GameRng::new(42))
    }

    #[test]
    fn test_deal_shape() {
        let board = board();
        for (i, deck) in board.stacking_decks.iter().enumerate() {
            assert_eq!(deck.len(), i + 1);
            assert_eq!(deck.face_up_count(), 1);
            assert!(deck.top().unwrap().face_up);
        }
        assert_eq!(board.draw_pile.stock().len(), 24);
        assert_eq!(board.draw_pile.stock().face_up_count(), 0);
        assert!(board.victory_decks.iter().all(VictoryDeck::is_empty));
        assert_eq!(board.card_count(), DECK_SIZE);
    }

    #[test]
    fn test_same_seed_same_deal() {
        assert_eq!(board(), board());
        let other = Board::deal(&GameConfig::default(), &mut GameRng::new(43));
        assert_ne!(board(), other);
    }

    #[test]
    fn test_pile_ref_parse() {
        assert_eq!("S3".parse::<PileRef>(), Ok(PileRef::Stacking(3)));
        assert_eq!("v0".parse::<PileRef>(), Ok(PileRef::Victory(0)));
        assert_eq!("V3".parse::<PileRef>(), Ok(PileRef::Victory(3)));
        assert!("S7".parse::<PileRef>().is_err());
        assert!("V4".parse::<PileRef>().is_err());
        assert!("X1".parse::<PileRef>().is_err());
        assert!("S".parse::<PileRef>().is_err());
        assert_eq!(PileRef::Stacking(6).to_string(), "S6");
    }

    #[test]
    fn test_place_out_of_range() {
        let mut board = board();
        let run = Deck::new();
        assert!(matches!(
            board.place(PileRef::Victory(9), &run),
            Err(SolitaireError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_identical_sees_flipped_column_top() {
        let board = board();
        let mut flipped = board.clone();
        let mut top = flipped.stacking_decks[6].draw().unwrap();
        top.flip();
        flipped.stacking_decks[6].restore(Deck::from(top));

        assert_eq!(flipped.stacking_decks[6].face_up_count(), 0);
        assert_eq!(board, flipped);
        assert!(!board.is_identical_to(&flipped));
        assert!(board.is_identical_to(&board.clone()));
    }

    #[test]
    fn test_identical_sees_face_up_stock() {
        let board = board();
        let mut flipped = board.clone();
        let mut card = flipped.draw_pile.draw().unwrap();
        card.flip();
        flipped.draw_pile.load(Deck::from(card));

        assert_eq!(board, flipped);
        assert!(!board.is_identical_to(&flipped));
    }

    #[test]
    fn test_not_won_at_start() {
        assert!(!board().is_won());
    }
}
