//! Input contracts for the prompts.
//!
//! Every parser returns `InvalidInput` for a value that should be asked
//! for again. Empty answers never reach these functions.

use crate::core::error::{Result, SolitaireError};
use crate::games::klondike::{Destination, PileRef};

/// `S<0-6>` or `V<0-3>`. Any other pile letter aborts the selection.
pub fn parse_destination(answer: &str) -> Result<Destination> {
    let tag = answer.trim().chars().next().map(|c| c.to_ascii_uppercase());
    match tag {
        Some('S') | Some('V') => answer.parse::<PileRef>().map(Destination::Pile),
        _ => Ok(Destination::Abort),
    }
}

/// `S<0-6>` or `V<0-3>`; anything else is asked again.
pub fn parse_source(answer: &str) -> Result<PileRef> {
    answer.parse()
}

/// A position among `face_up_count` face-up cards.
pub fn parse_card_position(answer: &str, face_up_count: usize) -> Result<usize> {
    let max = face_up_count.saturating_sub(1);
    let message = || SolitaireError::invalid_input(format!("Must be an integer in [0-{}]!", max));
    let position: usize = answer.trim().parse().map_err(|_| message())?;
    if position < face_up_count {
        Ok(position)
    } else {
        Err(message())
    }
}

/// `y`/`Y` or `n`/`N`.
pub fn parse_yes_no(answer: &str) -> Result<bool> {
    match answer.trim() {
        "y" | "Y" => Ok(true),
        "n" | "N" => Ok(false),
        other => Err(SolitaireError::invalid_input(format!(
            "'{}' is not y or n",
            other
        ))),
    }
}
