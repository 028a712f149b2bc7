//! Command-line flags.

use clap::Parser;

use crate::core::config::{GameConfig, DEFAULT_DRAW_PILE_SIZE};

/// Play Klondike solitaire in the terminal.
#[derive(Parser, Clone, Debug, PartialEq, Eq)]
#[command(name = "klondike", version, about)]
pub struct Args {
    /// Log at debug level
    #[arg(short = 'g', long)]
    pub debug: bool,

    /// Cards revealed per draw
    #[arg(long, default_value_t = DEFAULT_DRAW_PILE_SIZE, value_parser = parse_draw_pile_size)]
    pub draw_pile_size: usize,

    /// Passes through the draw pile after the first (unlimited if absent)
    #[arg(long)]
    pub max_loops: Option<u32>,

    /// Shuffle seed, for replaying a deal
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print cards without color
    #[arg(long)]
    pub no_color: bool,

    /// Do not clear the screen between prompts
    #[arg(long)]
    pub no_clear: bool,
}

fn parse_draw_pile_size(value: &str) -> Result<usize, String> {
    let size: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if size == 0 {
        return Err("Draw pile size must be at least 1".to_string());
    }
    Ok(size)
}

impl Args {
    #[must_use]
    pub fn to_config(&self) -> GameConfig {
        let mut config = GameConfig::new().with_draw_pile_size(self.draw_pile_size);
        if let Some(max) = self.max_loops {
            config = config.with_max_loops(max);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}
