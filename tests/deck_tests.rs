//! Deck and pile integration tests.
//!
//! Split/re-add behavior of the shared deck core, and the column and
//! foundation acceptance rules as seen through `Pile`.

use proptest::prelude::*;

use rust_klondike::{
    CardRejection, Card, Deck, GameRng, Rank, SolitaireError, StackingDeck, Suit, VictoryDeck,
};

fn up(suit: Suit, rank: Rank) -> Card {
    Card::face_up(suit, rank)
}

// =============================================================================
// Deck Tests
// =============================================================================

/// A shuffled standard deck keeps all 52 distinct cards.
#[test]
fn test_shuffle_is_permutation() {
    let mut deck = Deck::standard();
    deck.shuffle(&mut GameRng::new(7));

    assert_eq!(deck.len(), 52);
    for suit in Suit::all() {
        for rank in Rank::all() {
            assert!(deck.contains(&Card::new(suit, rank)));
        }
    }
    assert_ne!(deck, Deck::standard());
}

/// Splitting on a card the deck lacks changes nothing.
#[test]
fn test_split_missing_card() {
    let mut deck =
        Deck::from_cards([up(Suit::Hearts, Rank::Two), up(Suit::Hearts, Rank::Three)]);
    let before = deck.clone();

    let err = deck.split_after(&Card::new(Suit::Spades, Rank::King), true);
    assert_eq!(
        err,
        Err(SolitaireError::InvalidCard(CardRejection::NotInDeck {
            card: Card::new(Suit::Spades, Rank::King),
        }))
    );
    assert_eq!(deck, before);
}

/// Drawing from an empty deck is an error, not a panic.
#[test]
fn test_draw_empty() {
    assert_eq!(Deck::new().draw(), Err(SolitaireError::EmptyDeck));
}

proptest! {
    /// split_after followed by add gives back the original deck.
    #[test]
    fn prop_split_after_then_add(
        seed in any::<u64>(),
        index in 0usize..52,
        include in any::<bool>(),
    ) {
        let mut deck = Deck::standard();
        deck.shuffle(&mut GameRng::new(seed));
        let original = deck.clone();
        let card = *deck.get(index).unwrap();

        let tail = deck.split_after(&card, include).unwrap();
        prop_assert_eq!(deck.contains(&card), !include);
        prop_assert_eq!(deck.len() + tail.len(), 52);

        deck.add(tail);
        prop_assert!(deck.is_identical_to(&original));
    }

    /// split_before leaves the rest; head + rest is the original.
    #[test]
    fn prop_split_before_then_prepend(
        seed in any::<u64>(),
        index in 0usize..52,
        include in any::<bool>(),
    ) {
        let mut deck = Deck::standard();
        deck.shuffle(&mut GameRng::new(seed));
        let original = deck.clone();
        let card = *deck.get(index).unwrap();

        let mut head = deck.split_before(&card, include).unwrap();
        prop_assert_eq!(head.contains(&card), include);

        head.add(deck);
        prop_assert_eq!(head, original);
    }
}

// =============================================================================
// Stacking Deck Tests
// =============================================================================

/// Descending, alternating colors build a column; same color does not.
#[test]
fn test_stacking_alternates_color() {
    let mut column = StackingDeck::new();
    column.add_card(up(Suit::Spades, Rank::King)).unwrap();
    column.add_card(up(Suit::Hearts, Rank::Queen)).unwrap();

    let err = column.add_card(up(Suit::Diamonds, Rank::Jack)).unwrap_err();
    assert!(err.to_string().contains("cannot be placed on top of QH"));

    column.add_card(up(Suit::Clubs, Rank::Jack)).unwrap();
    assert_eq!(column.len(), 3);
}

/// Only Kings start an empty column; a whole run can move onto one.
#[test]
fn test_stacking_run_onto_empty() {
    let mut empty = StackingDeck::new();
    assert!(matches!(
        empty.add_card(up(Suit::Hearts, Rank::Queen)),
        Err(SolitaireError::InvalidCard(CardRejection::KingsOnly { .. }))
    ));

    let run = Deck::from_cards([
        up(Suit::Diamonds, Rank::King),
        up(Suit::Spades, Rank::Queen),
        up(Suit::Hearts, Rank::Jack),
    ]);
    empty.add(&run).unwrap();
    assert_eq!(empty.deck(), &run);
}

/// Moving the face-up run off a column keeps the chosen card at the bottom.
#[test]
fn test_split_face_up_positions() {
    let mut column = StackingDeck::with_deck(Deck::from_cards([
        Card::new(Suit::Clubs, Rank::Four),
        up(Suit::Spades, Rank::Nine),
        up(Suit::Hearts, Rank::Eight),
        up(Suit::Clubs, Rank::Seven),
    ]));

    let run = column.split_face_up(1).unwrap();
    assert_eq!(
        run,
        Deck::from_cards([up(Suit::Hearts, Rank::Eight), up(Suit::Clubs, Rank::Seven)])
    );
    assert_eq!(column.len(), 2);
    assert!(column.split_face_up(5).is_err());
}

// =============================================================================
// Victory Deck Tests
// =============================================================================

/// Ace then Two of the same suit is accepted; Ace then Three is not.
#[test]
fn test_victory_builds_by_suit() {
    let mut foundation = VictoryDeck::new();
    foundation.add_card(up(Suit::Hearts, Rank::Ace)).unwrap();

    assert!(matches!(
        foundation.add_card(up(Suit::Hearts, Rank::Three)),
        Err(SolitaireError::InvalidCard(CardRejection::CannotFound { .. }))
    ));
    assert!(foundation.add_card(up(Suit::Diamonds, Rank::Two)).is_err());

    foundation.add_card(up(Suit::Hearts, Rank::Two)).unwrap();
    assert_eq!(foundation.len(), 2);
}

/// Foundations take one card at a time.
#[test]
fn test_victory_rejects_runs() {
    let mut foundation = VictoryDeck::new();
    let run = Deck::from_cards([up(Suit::Hearts, Rank::Ace), up(Suit::Hearts, Rank::Two)]);
    assert_eq!(
        foundation.add(&run),
        Err(SolitaireError::InvalidCard(CardRejection::SingleCardOnly))
    );
    assert!(foundation.is_empty());
}

/// A foundation is complete only with all thirteen ranks.
#[test]
fn test_victory_complete() {
    let mut foundation = VictoryDeck::new();
    for rank in Rank::all() {
        assert!(!foundation.is_complete());
        foundation.add_card(up(Suit::Spades, rank)).unwrap();
    }
    assert!(foundation.is_complete());
}
