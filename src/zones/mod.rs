//! Piles of cards on the board.
//!
//! ## Key Types
//!
//! - `Pile<P>`: a `Deck` guarded by an acceptance policy
//! - `StackingDeck`: tableau column (`Pile<StackingRule>`)
//! - `VictoryDeck`: foundation (`Pile<VictoryRule>`)
//! - `DrawPile`: stock, waste and the revealed window

pub mod draw_pile;
pub mod pile;

pub use draw_pile::DrawPile;
pub use pile::{Pile, StackingDeck, VictoryDeck, FULL_SUIT};
