//! What the turn engine needs from whoever is playing.
//!
//! The engine never reads lines or prints. It asks a `PlayerInput` for each
//! decision and reports outcomes through [`PlayerInput::notify`]. The
//! terminal front end implements this over stdin/stdout; tests implement
//! it with a script.
//!
//! ## Answer conventions
//!
//! - `None` means the player gave an empty answer (no choice made)
//! - Values handed back are already validated for the prompt

use std::collections::VecDeque;

use log::debug;

use super::board::{Board, PileRef};
use crate::cards::{Card, Deck};

/// Where a candidate run should go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    /// Try this pile.
    Pile(PileRef),
    /// Give up; the cards go back where they came from.
    Abort,
}

/// Source of player decisions.
pub trait PlayerInput {
    /// The raw turn command (`D`, `P`, `M`, `S`, `T`) for turn number `turn`.
    fn choose_command(&mut self, board: &Board, turn: u32) -> Option<String>;

    /// Confirm playing `card` from the draw pile.
    fn confirm_play(&mut self, board: &Board, card: &Card) -> Option<bool>;

    /// The pile to move cards from.
    fn choose_source(&mut self, board: &Board) -> Option<PileRef>;

    /// A position among the face-up cards of `pile`, 0 = lowest face-up card.
    fn choose_card(&mut self, board: &Board, pile: &Deck) -> Option<usize>;

    /// Where to put `active`. `None` asks again.
    fn choose_destination(&mut self, board: &Board, active: &Deck) -> Option<Destination>;

    /// Tell the player something (rejections, errors, the win).
    fn notify(&mut self, message: &str);

    /// No more answers will ever come (e.g. end of input).
    fn is_closed(&self) -> bool {
        false
    }
}

/// One prepared answer for [`ScriptedInput`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Answer {
    Command(String),
    Confirm(bool),
    Source(PileRef),
    Card(usize),
    Destination(Destination),
    /// An empty answer to whatever is asked next.
    Empty,
}

/// Replays a fixed list of answers, in order.
///
/// Asking for a different kind of answer than the next one queued is
/// treated as an empty answer and consumes it. Once the queue is drained
/// the input is closed.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<Answer>,
    /// Everything passed to `notify`, in order.
    pub messages: Vec<String>,
}

impl ScriptedInput {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            messages: Vec::new(),
        }
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next_answer<T>(&mut self, pick: impl FnOnce(Answer) -> Option<T>) -> Option<T> {
        let answer = self.answers.pop_front()?;
        let picked = pick(answer);
        if picked.is_none() {
            debug!("Scripted answer did not fit the prompt, treating as empty");
        }
        picked
    }
}

impl PlayerInput for ScriptedInput {
    fn choose_command(&mut self, _board: &Board, _turn: u32) -> Option<String> {
        self.next_answer(|a| match a {
            Answer::Command(c) => Some(c),
            _ => None,
        })
    }

    fn confirm_play(&mut self, _board: &Board, _card: &Card) -> Option<bool> {
        self.next_answer(|a| match a {
            Answer::Confirm(yes) => Some(yes),
            _ => None,
        })
    }

    fn choose_source(&mut self, _board: &Board) -> Option<PileRef> {
        self.next_answer(|a| match a {
            Answer::Source(pile) => Some(pile),
            _ => None,
        })
    }

    fn choose_card(&mut self, _board: &Board, _pile: &Deck) -> Option<usize> {
        self.next_answer(|a| match a {
            Answer::Card(position) => Some(position),
            _ => None,
        })
    }

    fn choose_destination(&mut self, _board: &Board, _active: &Deck) -> Option<Destination> {
        self.next_answer(|a| match a {
            Answer::Destination(dest) => Some(dest),
            _ => None,
        })
    }

    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }

    fn is_closed(&self) -> bool {
        self.answers.is_empty()
    }
}
