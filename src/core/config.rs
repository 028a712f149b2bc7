//! Game configuration.
//!
//! Fixed at process start and threaded into `Board`/`DrawPile` construction:
//! - `draw_pile_size`: how many stock cards each draw reveals
//! - `max_loops`: how many times the stock may be recycled (`None` = unbounded)
//! - `seed`: optional shuffle seed for replaying a deal

use serde::{Deserialize, Serialize};

/// Default number of cards revealed per draw.
pub const DEFAULT_DRAW_PILE_SIZE: usize = 3;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards revealed per draw (at least 1).
    pub draw_pile_size: usize,

    /// Maximum stock recycles. `None` for unlimited.
    #[serde(default)]
    pub max_loops: Option<u32>,

    /// Shuffle seed. `None` draws a fresh one.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            draw_pile_size: DEFAULT_DRAW_PILE_SIZE,
            max_loops: None,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the default configuration (draw 3, unbounded loops).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the draw window size.
    #[must_use]
    pub fn with_draw_pile_size(mut self, size: usize) -> Self {
        assert!(size > 0, "Draw pile size must be at least 1");
        self.draw_pile_size = size;
        self
    }

    /// Cap the number of stock recycles.
    #[must_use]
    pub fn with_max_loops(mut self, max_loops: u32) -> Self {
        self.max_loops = Some(max_loops);
        self
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
