//! Acceptance policies for piles.
//!
//! Each pile kind plugs an `AcceptancePolicy` into the shared
//! [`Pile`](crate::zones::Pile) core. The policy sees the pile as it is and
//! the incoming run, and either accepts or names the reason it refuses.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deck, Rank};
use crate::core::error::{CardRejection, Result};

/// Decides whether a run of cards may be placed on a pile.
///
/// ## Implementation Notes
///
/// - `run` is never empty when called through `Pile::add`
/// - Only the run's first card is checked against the pile; a run taken
///   from a tableau column is assumed internally valid
pub trait AcceptancePolicy {
    /// `Ok(())` if `run` may go on top of `pile`.
    fn check(&self, pile: &Deck, run: &Deck) -> Result<()>;
}

/// Tableau rule: descending rank, alternating color, Kings on empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackingRule;

impl StackingRule {
    /// Can `card` go directly on `pile`, ignoring the face-down guard?
    #[must_use]
    pub fn can_stack(pile: &Deck, card: &Card) -> bool {
        match pile.top() {
            None => card.rank == Rank::King,
            Some(top) => {
                let color_ok = top.color() != card.color();
                let rank_ok = top.rank.prev() == Some(card.rank);
                debug!("Stack {} on {}? color={} rank={}", card, top, color_ok, rank_ok);
                color_ok && rank_ok
            }
        }
    }
}

impl AcceptancePolicy for StackingRule {
    fn check(&self, pile: &Deck, run: &Deck) -> Result<()> {
        let card = run.bottom().ok_or(CardRejection::NoCards)?;

        // A column whose top was never turned over takes anything.
        if !pile.is_empty() && pile.face_up_count() == 0 {
            debug!("Forcing {} onto a column with no face-up cards", card);
            return Ok(());
        }

        if Self::can_stack(pile, card) {
            return Ok(());
        }
        Err(match pile.top() {
            None => CardRejection::KingsOnly { card: *card },
            Some(top) => CardRejection::CannotStack {
                card: *card,
                top: *top,
            },
        }
        .into())
    }
}

/// Foundation rule: one suit, Ace up to King, one card at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VictoryRule;

impl AcceptancePolicy for VictoryRule {
    fn check(&self, pile: &Deck, run: &Deck) -> Result<()> {
        let card = match run.len() {
            0 => return Err(CardRejection::NoCards.into()),
            1 => run.bottom().ok_or(CardRejection::NoCards)?,
            _ => return Err(CardRejection::SingleCardOnly.into()),
        };

        let (seed, top) = match (pile.bottom(), pile.top()) {
            (Some(seed), Some(top)) => (seed, top),
            _ => {
                if card.rank == Rank::Ace {
                    return Ok(());
                }
                return Err(CardRejection::AcesOnly { card: *card }.into());
            }
        };

        if card.suit == seed.suit && top.rank.next() == Some(card.rank) {
            Ok(())
        } else {
            Err(CardRejection::CannotFound {
                card: *card,
                top: *top,
            }
            .into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;
    use crate::core::error::SolitaireError;

    fn up(suit: Suit, rank: Rank) -> Card {
        Card::face_up(suit, rank)
    }

    #[test]
    fn test_stacking_king_on_empty() {
        let empty = Deck::new();
        assert!(StackingRule.check(&empty, &up(Suit::Spades, Rank::King).into()).is_ok());
        assert_eq!(
            StackingRule.check(&empty, &up(Suit::Spades, Rank::Queen).into()),
            Err(SolitaireError::InvalidCard(CardRejection::KingsOnly {
                card: up(Suit::Spades, Rank::Queen)
            }))
        );
    }

    #[test]
    fn test_stacking_alternates_color_and_descends() {
        let pile = Deck::from(up(Suit::Hearts, Rank::Eight));

        assert!(StackingRule.check(&pile, &up(Suit::Clubs, Rank::Seven).into()).is_ok());
        assert!(StackingRule.check(&pile, &up(Suit::Spades, Rank::Seven).into()).is_ok());
        // Same color
        assert!(StackingRule.check(&pile, &up(Suit::Diamonds, Rank::Seven).into()).is_err());
        // Wrong rank
        assert!(StackingRule.check(&pile, &up(Suit::Clubs, Rank::Six).into()).is_err());
        assert!(StackingRule.check(&pile, &up(Suit::Clubs, Rank::Nine).into()).is_err());
    }

    #[test]
    fn test_nothing_stacks_on_ace() {
        let pile = Deck::from(up(Suit::Hearts, Rank::Ace));
        assert!(StackingRule.check(&pile, &up(Suit::Clubs, Rank::King).into()).is_err());
    }

    #[test]
    fn test_stacking_checks_only_run_head() {
        let pile = Deck::from(up(Suit::Hearts, Rank::Eight));
        let run = Deck::from_cards([up(Suit::Clubs, Rank::Seven), up(Suit::Hearts, Rank::Six)]);
        assert!(StackingRule.check(&pile, &run).is_ok());

        let bad = Deck::from_cards([up(Suit::Diamonds, Rank::Seven), up(Suit::Clubs, Rank::Six)]);
        assert!(StackingRule.check(&pile, &bad).is_err());
    }

    #[test]
    fn test_stacking_face_down_column_takes_anything() {
        let pile = Deck::from(Card::new(Suit::Hearts, Rank::Two));
        assert!(StackingRule.check(&pile, &up(Suit::Hearts, Rank::Nine).into()).is_ok());
    }

    #[test]
    fn test_victory_sequence() {
        let mut pile = Deck::new();
        for rank in Rank::all() {
            let card = up(Suit::Diamonds, rank);
            assert!(VictoryRule.check(&pile, &card.into()).is_ok(), "{} rejected", card);
            pile.add(card);
        }
        assert_eq!(pile.len(), 13);
    }

    #[test]
    fn test_victory_rejections() {
        let empty = Deck::new();
        assert!(VictoryRule.check(&empty, &up(Suit::Clubs, Rank::Two).into()).is_err());

        let pile = Deck::from(up(Suit::Clubs, Rank::Ace));
        // Skips a rank
        assert!(VictoryRule.check(&pile, &up(Suit::Clubs, Rank::Three).into()).is_err());
        // Wrong suit
        assert!(VictoryRule.check(&pile, &up(Suit::Spades, Rank::Two).into()).is_err());
        // Runs are refused
        let run = Deck::from_cards([up(Suit::Clubs, Rank::Two), up(Suit::Clubs, Rank::Three)]);
        assert_eq!(
            VictoryRule.check(&pile, &run),
            Err(SolitaireError::InvalidCard(CardRejection::SingleCardOnly))
        );
    }
}
