//! Line-based prompts over any reader and writer.
//!
//! `TerminalInput` redraws the board before each question, reads one line,
//! and keeps asking until the answer parses or comes back empty. End of
//! input closes it.

use std::io::{BufRead, Write};

use log::{debug, warn};

use super::parse::{parse_card_position, parse_destination, parse_source, parse_yes_no};
use super::render::{board_text, deck_text, face_up_positions, turn_menu, RenderStyle};
use crate::cards::{Card, Deck};
use crate::core::error::Result;
use crate::games::klondike::{Board, Destination, PileRef, PlayerInput};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Prompt loop over a line reader and an output sink.
pub struct TerminalInput<R, W> {
    reader: R,
    writer: W,
    style: RenderStyle,
    clear: bool,
    closed: bool,
}

impl<R: BufRead, W: Write> TerminalInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            style: RenderStyle::default(),
            clear: true,
            closed: false,
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    /// Clear the screen before each redraw.
    #[must_use]
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    /// Give back the writer (used to inspect output).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn say(&mut self, text: &str) {
        if let Err(err) = writeln!(self.writer, "{}", text) {
            warn!("Could not write to the terminal: {}", err);
        }
    }

    fn refresh(&mut self, board: &Board) {
        let text = board_text(board, self.style);
        if self.clear {
            if let Err(err) = write!(self.writer, "{}", CLEAR_SCREEN) {
                warn!("Could not clear the terminal: {}", err);
            }
        }
        self.say(&text);
    }

    /// One line, trimmed. `None` for an empty line or end of input.
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        if self.closed {
            return None;
        }
        if let Err(err) = write!(self.writer, "{}", prompt).and_then(|_| self.writer.flush()) {
            warn!("Could not write prompt: {}", err);
        }

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => {
                debug!("End of input");
                self.closed = true;
                None
            }
            Ok(_) => {
                let value = line.trim().to_string();
                debug!("Player chose: '{}'", value);
                if value.is_empty() {
                    debug!("Player did not enter a choice.");
                    None
                } else {
                    Some(value)
                }
            }
            Err(err) => {
                warn!("Could not read input: {}", err);
                self.closed = true;
                None
            }
        }
    }

    /// Ask until `parse` accepts the answer or the answer is empty.
    fn resolve<T>(
        &mut self,
        board: &Board,
        prompt: &str,
        mut parse: impl FnMut(&str) -> Result<T>,
    ) -> Option<T> {
        self.refresh(board);
        loop {
            let answer = self.read_line(prompt)?;
            match parse(&answer) {
                Ok(value) => return Some(value),
                Err(err) => {
                    debug!("Rejected input '{}': {}", answer, err);
                    self.say(&err.to_string());
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> PlayerInput for TerminalInput<R, W> {
    fn choose_command(&mut self, board: &Board, turn: u32) -> Option<String> {
        self.refresh(board);
        self.say(&format!("Turn {}", turn));
        let menu = turn_menu();
        self.say(&menu);
        self.read_line("> ")
    }

    fn confirm_play(&mut self, board: &Board, card: &Card) -> Option<bool> {
        let prompt = format!("Play {}? [y/n]: ", card);
        self.resolve(board, &prompt, parse_yes_no)
    }

    fn choose_source(&mut self, board: &Board) -> Option<PileRef> {
        self.resolve(
            board,
            "Choose a source stack, including 's', or 'v': ",
            parse_source,
        )
    }

    fn choose_card(&mut self, board: &Board, pile: &Deck) -> Option<usize> {
        let count = pile.face_up_count();
        let prompt = format!(
            "{}\n{}\nSelect card to move from [0-{}]: ",
            deck_text(pile, self.style),
            face_up_positions(pile),
            count.saturating_sub(1)
        );
        self.resolve(board, &prompt, |answer| parse_card_position(answer, count))
    }

    fn choose_destination(&mut self, board: &Board, active: &Deck) -> Option<Destination> {
        let prompt = format!(
            "Active Cards: {}\nChoose a destination stack, including 's', or 'v': ",
            deck_text(active, self.style)
        );
        self.resolve(board, &prompt, parse_destination)
    }

    fn notify(&mut self, message: &str) {
        self.say(message);
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}
