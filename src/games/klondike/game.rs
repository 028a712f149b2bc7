//! Turn engine.
//!
//! Each turn the player picks one command:
//!
//! | Letter | Command | Effect |
//! |--------|---------|--------|
//! | `D` | Draw | advance the draw pile window |
//! | `P` | Play | place the window's top card |
//! | `M` | Move | move a face-up run from a pile |
//! | `S` | Save | snapshot the board |
//! | `T` | Restore | go back to the snapshot |
//!
//! After every turn the top card of each column is turned up and the win
//! condition (all four foundations complete) is checked.

use std::fmt;
use std::str::FromStr;

use log::{debug, info, warn};

use super::board::{Board, PileRef};
use super::input::{Destination, PlayerInput};
use crate::cards::Deck;
use crate::core::config::GameConfig;
use crate::core::error::{Result, SolitaireError};
use crate::core::rng::GameRng;

/// A turn command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    Draw,
    Play,
    Move,
    Save,
    Restore,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::Draw,
        Command::Play,
        Command::Move,
        Command::Save,
        Command::Restore,
    ];

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Command::Draw => 'D',
            Command::Play => 'P',
            Command::Move => 'M',
            Command::Save => 'S',
            Command::Restore => 'T',
        }
    }

    /// Menu text with the command letter bracketed.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Command::Draw => "[D]raw from the draw pile",
            Command::Play => "[P]lay from the draw pile",
            Command::Move => "[M]ove from the stacks",
            Command::Save => "[S]ave the board",
            Command::Restore => "Res[T]ore previous state",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FromStr for Command {
    type Err = SolitaireError;

    fn from_str(s: &str) -> Result<Self> {
        let letter = s.trim().chars().next().map(|c| c.to_ascii_uppercase());
        Command::ALL
            .into_iter()
            .find(|command| Some(command.letter()) == letter)
            .ok_or_else(|| {
                SolitaireError::invalid_input(format!("{} is not a valid choice!", s.trim()))
            })
    }
}

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    /// All foundations complete.
    Won,
    /// The input closed before the game was won.
    Abandoned,
}

/// One game of Klondike.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    backup: Option<Board>,
    turns: u32,
}

impl Game {
    /// Deal a new game from the configuration.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let mut rng = GameRng::from_seed(config.seed);
        info!("Starting game with seed {}", rng.seed());
        Self::with_board(Board::deal(config, &mut rng))
    }

    /// Start from a prepared board.
    #[must_use]
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            backup: None,
            turns: 0,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[must_use]
    pub fn backup(&self) -> Option<&Board> {
        self.backup.as_ref()
    }

    /// Completed turns so far.
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.board.is_won()
    }

    /// Run turns until the game is won or the input closes.
    ///
    /// The opening board is saved first so Restore always has a target.
    pub fn play(&mut self, input: &mut impl PlayerInput) -> GameOutcome {
        self.save();
        loop {
            if input.is_closed() {
                info!("Input closed after {} turns", self.turns);
                return GameOutcome::Abandoned;
            }
            self.turn(input);
            if self.is_won() {
                info!("Won in {} turns", self.turns);
                input.notify("YOU WIN!");
                return GameOutcome::Won;
            }
        }
    }

    /// Ask for one command and carry it out.
    ///
    /// Only a recognised command counts as a completed turn.
    pub fn turn(&mut self, input: &mut impl PlayerInput) {
        if self.board.draw_pile.needs_reshow() {
            self.board.draw_pile.advance();
        }

        let completed = match input.choose_command(&self.board, self.turns + 1) {
            Some(answer) => match answer.parse::<Command>() {
                Ok(command) => {
                    self.execute(command, input);
                    true
                }
                Err(err) => {
                    debug!("Unrecognised command {:?}", answer);
                    input.notify(&err.to_string());
                    false
                }
            },
            None => false,
        };

        let flipped = self.board.reveal_tops();
        if flipped > 0 {
            debug!("Turned up {} column tops", flipped);
        }
        if completed {
            self.turns += 1;
        }
    }

    /// Carry out a single command.
    pub fn execute(&mut self, command: Command, input: &mut impl PlayerInput) {
        info!("Turn {}: {}", self.turns + 1, command);
        match command {
            Command::Draw => {
                self.draw(input);
            }
            Command::Play => self.play_from_draw_pile(input),
            Command::Move => self.move_from_stacks(input),
            Command::Save => self.save(),
            Command::Restore => {
                if !self.restore() {
                    input.notify("No saved board to restore.");
                }
            }
        }
    }

    /// Advance the draw pile window. Returns false if nothing new was shown.
    pub fn draw(&mut self, input: &mut impl PlayerInput) -> bool {
        if self.board.draw_pile.advance().is_some() {
            return true;
        }
        if self.board.draw_pile.is_exhausted() {
            input.notify("No more passes through the draw pile are allowed.");
        } else {
            input.notify("The draw pile is empty.");
        }
        false
    }

    /// Offer the window's top card and place it if the player agrees.
    pub fn play_from_draw_pile(&mut self, input: &mut impl PlayerInput) {
        if self.board.draw_pile.playable().is_none() && !self.draw(input) {
            return;
        }
        let Some(card) = self.board.draw_pile.playable().copied() else {
            return;
        };

        match input.confirm_play(&self.board, &card) {
            Some(true) => {}
            _ => return,
        }

        let card = match self.board.draw_pile.take_playable() {
            Ok(card) => card,
            Err(err) => {
                warn!("Playable card vanished: {}", err);
                return;
            }
        };
        if let Some(unplaced) = self.select_destination(input, Deck::from(card)) {
            for card in unplaced.iter() {
                self.board.draw_pile.return_playable(*card);
            }
        }
    }

    /// Move a face-up run from a pile to another pile.
    pub fn move_from_stacks(&mut self, input: &mut impl PlayerInput) {
        let Some(source) = input.choose_source(&self.board) else {
            return;
        };
        let source = match source.validated() {
            Ok(source) => source,
            Err(err) => {
                input.notify(&err.to_string());
                return;
            }
        };

        let run = match self.take_run(source, input) {
            Some(Ok(run)) => run,
            Some(Err(err)) => {
                input.notify(&err.to_string());
                return;
            }
            None => return,
        };

        debug!("Moving [{}] from {}", run, source);
        if let Some(unplaced) = self.select_destination(input, run) {
            debug!("Returning [{}] to {}", unplaced, source);
            match source {
                PileRef::Stacking(i) => self.board.stacking_decks[i].restore(unplaced),
                PileRef::Victory(i) => self.board.victory_decks[i].restore(unplaced),
            }
        }
    }

    /// Lift the cards to move off `source`. `None` if the player backed out.
    fn take_run(&mut self, source: PileRef, input: &mut impl PlayerInput) -> Option<Result<Deck>> {
        match source {
            PileRef::Stacking(i) => {
                let count = self.board.stacking_decks[i].face_up_count();
                if count == 0 {
                    return Some(Err(SolitaireError::invalid_input(format!(
                        "{} has no face-up cards to move",
                        source
                    ))));
                }
                let position = if count == 1 {
                    debug!("Only one option available. Choosing it.");
                    0
                } else {
                    input.choose_card(&self.board, self.board.stacking_decks[i].deck())?
                };
                Some(self.board.stacking_decks[i].split_face_up(position))
            }
            PileRef::Victory(i) => Some(self.board.victory_decks[i].draw().map(Deck::from)),
        }
    }

    /// Ask for destinations until `run` is placed or the player aborts.
    ///
    /// Returns the cards unplaced on abort.
    pub fn select_destination(
        &mut self,
        input: &mut impl PlayerInput,
        run: Deck,
    ) -> Option<Deck> {
        loop {
            if input.is_closed() {
                return Some(run);
            }
            match input.choose_destination(&self.board, &run) {
                None => continue,
                Some(Destination::Abort) => {
                    debug!("Destination selection aborted");
                    return Some(run);
                }
                Some(Destination::Pile(pile)) => match self.board.place(pile, &run) {
                    Ok(()) => {
                        info!("Placed [{}] on {}", run, pile);
                        return None;
                    }
                    Err(err) => {
                        debug!("Rejected [{}] on {}: {}", run, pile, err);
                        input.notify(&err.to_string());
                    }
                },
            }
        }
    }

    /// Snapshot the board.
    pub fn save(&mut self) {
        info!("Saved board");
        self.backup = Some(self.board.clone());
    }

    /// Go back to the snapshot. Returns false if nothing was saved.
    ///
    /// The snapshot is kept, so it can be restored again.
    pub fn restore(&mut self) -> bool {
        match &self.backup {
            Some(backup) => {
                info!("Restored saved board");
                self.board = backup.clone();
                true
            }
            None => {
                warn!("Restore requested with no saved board");
                false
            }
        }
    }
}
