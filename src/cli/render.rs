//! Board and card text for the terminal.
//!
//! Face-down cards show as `??`. With color on, red suits print red and
//! black suits print blue.

use colored::Colorize;

use crate::cards::{Card, Color, Deck};
use crate::games::klondike::{Board, Command};

/// Formatting options for rendered text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderStyle {
    pub color: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self { color: true }
    }
}

impl RenderStyle {
    pub const PLAIN: RenderStyle = RenderStyle { color: false };
}

pub const FACE_DOWN: &str = "??";

pub fn card_text(card: &Card, style: RenderStyle) -> String {
    if !card.face_up {
        return FACE_DOWN.to_string();
    }
    let name = card.name();
    if !style.color {
        return name;
    }
    match card.color() {
        Color::Red => name.red().to_string(),
        Color::Black => name.blue().to_string(),
    }
}

pub fn deck_text(deck: &Deck, style: RenderStyle) -> String {
    deck.iter()
        .map(|card| card_text(card, style))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Selection numbers aligned under each face-up card; face-down slots stay
/// blank.
pub fn face_up_positions(deck: &Deck) -> String {
    let mut position = 0;
    deck.iter()
        .map(|card| {
            if card.face_up {
                let label = format!("{:>width$}", position, width = card.name().len());
                position += 1;
                label
            } else {
                " ".repeat(FACE_DOWN.len())
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn board_text(board: &Board, style: RenderStyle) -> String {
    let mut lines = Vec::new();
    lines.push(">>>>>> VICTORY DECKS:".to_string());
    for (i, deck) in board.victory_decks.iter().enumerate() {
        lines.push(format!("V{}: {}", i, deck_text(deck.deck(), style)));
    }
    lines.push("<<<<<< PLAY DECKS:".to_string());
    for (i, deck) in board.stacking_decks.iter().enumerate() {
        lines.push(format!("S{}: {}", i, deck_text(deck.deck(), style)));
    }

    let pile = &board.draw_pile;
    let loops = match pile.max_loops() {
        Some(max) => format!("{}/{}", pile.loops(), max),
        None => pile.loops().to_string(),
    };
    lines.push(format!(
        "Current Draw Deck: {}",
        deck_text(pile.revealed(), style)
    ));
    lines.push(format!(
        "Stock: {} | Discards: {} | Loops: {}",
        pile.stock().len(),
        pile.discards().len(),
        loops
    ));
    lines.join("\n")
}

pub fn turn_menu() -> String {
    let mut lines = vec![String::new()];
    lines.extend(Command::ALL.iter().map(|c| c.label().to_string()));
    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use crate::core::{GameConfig, GameRng};

    #[test]
    fn test_card_text() {
        let down = Card::new(Suit::Hearts, Rank::Ten);
        let up = Card::face_up(Suit::Hearts, Rank::Ten);
        assert_eq!(card_text(&down, RenderStyle::PLAIN), "??");
        assert_eq!(card_text(&up, RenderStyle::PLAIN), "10H");
    }

    #[test]
    fn test_face_up_positions() {
        let deck = Deck::from_cards([
            Card::new(Suit::Clubs, Rank::Two),
            Card::face_up(Suit::Hearts, Rank::Ten),
            Card::face_up(Suit::Spades, Rank::Nine),
        ]);
        assert_eq!(deck_text(&deck, RenderStyle::PLAIN), "??, 10H, 9S");
        assert_eq!(face_up_positions(&deck), "      0   1");
    }

    #[test]
    fn test_board_text_labels() {
        let board = Board::deal(&GameConfig::default(), &mut GameRng::new(1));
        let text = board_text(&board, RenderStyle::PLAIN);

        for label in ["V0:", "V3:", "S0:", "S6:", "Current Draw Deck:"] {
            assert!(text.contains(label), "missing {}", label);
        }
        let s6 = text.lines().find(|l| l.starts_with("S6:")).unwrap();
        assert_eq!(s6.matches("??").count(), 6);
        assert!(text.contains("Stock: 24"));
    }

    #[test]
    fn test_turn_menu_lists_commands() {
        let menu = turn_menu();
        assert!(menu.contains("[D]raw"));
        assert!(menu.contains("Res[T]ore"));
    }
}
