use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{CellState, Grid};
use crate::services::algorithm::SearchResult;

/// Reachability statistics for a completed search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Cells in the original grid with state `Empty`
    pub empty_count: usize,
    /// Cells marked `Reachable` in the result, plus one for the start cell
    pub reachable_count: usize,
    /// Cells still `Empty` in the result
    pub unreached_count: usize,
}

impl SearchStats {
    pub fn classify(original: &Grid, result: &SearchResult) -> Self {
        Self {
            empty_count: original.count(CellState::Empty),
            reachable_count: result.grid().count(CellState::Reachable) + 1,
            unreached_count: result.grid().count(CellState::Empty),
        }
    }

    /// Every passable cell was reached from the start
    pub fn is_fully_connected(&self) -> bool {
        self.unreached_count == 0
    }

    /// Share of the original empty cells that were reached, in `[0, 1]`
    pub fn coverage(&self) -> f64 {
        if self.empty_count == 0 {
            return 1.0;
        }
        (self.reachable_count as f64 / self.empty_count as f64).min(1.0)
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "of all {} empty cells, {} are reachable",
            self.empty_count, self.reachable_count
        )
    }
}
