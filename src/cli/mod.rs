//! Terminal front end.
//!
//! - `args`: command-line flags, mapped onto `GameConfig`
//! - `parse`: turning typed answers into pile and card choices
//! - `render`: board and card text
//! - `terminal`: `TerminalInput`, a `PlayerInput` over any reader/writer

pub mod args;
pub mod parse;
pub mod render;
pub mod terminal;

pub use args::Args;
pub use render::RenderStyle;
pub use terminal::TerminalInput;
