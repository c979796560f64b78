//! Parameter grid search over (fast, slow) window pairs.
//!
//! Each cell runs the full pipeline independently against the shared
//! immutable series; rayon distributes cells across workers with no
//! locking. Pairs with fast >= slow are omitted up front (not scored as
//! failures); cells whose run fails (e.g. a slow window too large for
//! the series) are skipped, and the sweep proceeds.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use driftlab_core::{PriceSeries, StrategyParams};

use crate::runner::run_strategy;

/// Candidate window lists for the sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamGrid {
    pub fast_windows: Vec<usize>,
    pub slow_windows: Vec<usize>,
}

impl ParamGrid {
    /// All valid (fast < slow) parameter combinations over the base
    /// configuration, in deterministic (fast, slow) order.
    pub fn generate_params(&self, base: &StrategyParams) -> Vec<StrategyParams> {
        let mut configs = Vec::new();
        for &fast in &self.fast_windows {
            for &slow in &self.slow_windows {
                if fast >= slow {
                    continue;
                }
                configs.push(StrategyParams {
                    fast_window: fast,
                    slow_window: slow,
                    ..base.clone()
                });
            }
        }
        configs
    }
}

/// One scored grid cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub fast_window: usize,
    pub slow_window: usize,
    pub sharpe: Option<f64>,
    pub total_return: f64,
}

/// Scored cells from one sweep, ordered by (fast, slow).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResults {
    cells: Vec<GridCell>,
}

/// Run the pipeline for every valid pair in the grid.
pub fn sweep(series: &PriceSeries, base: &StrategyParams, grid: &ParamGrid) -> SweepResults {
    let configs = grid.generate_params(base);

    let cells: Vec<GridCell> = configs
        .par_iter()
        .filter_map(|params| {
            let run = run_strategy(series, params).ok()?;
            Some(GridCell {
                fast_window: params.fast_window,
                slow_window: params.slow_window,
                sharpe: run.report.sharpe,
                total_return: run.report.total_return,
            })
        })
        .collect();

    SweepResults::from_cells(cells)
}

impl SweepResults {
    /// Build results from raw cells, normalizing to (fast, slow) order so
    /// the outcome is independent of worker scheduling.
    pub fn from_cells(mut cells: Vec<GridCell>) -> Self {
        cells.sort_by_key(|c| (c.fast_window, c.slow_window));
        Self { cells }
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, fast_window: usize, slow_window: usize) -> Option<&GridCell> {
        self.cells
            .iter()
            .find(|c| c.fast_window == fast_window && c.slow_window == slow_window)
    }

    /// The winning cell: maximize Sharpe (`None` ranks below any value),
    /// break ties by total return, then by smallest fast window. The
    /// ordering is total, so the winner is deterministic, never "first
    /// found".
    pub fn best(&self) -> Option<&GridCell> {
        self.cells.iter().reduce(|best, candidate| {
            if Self::beats(candidate, best) {
                candidate
            } else {
                best
            }
        })
    }

    fn beats(a: &GridCell, b: &GridCell) -> bool {
        let sharpe_cmp = match (a.sharpe, b.sharpe) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(std::cmp::Ordering::Equal),
            (Some(_), None) => std::cmp::Ordering::Greater,
            (None, Some(_)) => std::cmp::Ordering::Less,
            (None, None) => std::cmp::Ordering::Equal,
        };
        match sharpe_cmp {
            std::cmp::Ordering::Greater => true,
            std::cmp::Ordering::Less => false,
            std::cmp::Ordering::Equal => match a.total_return.partial_cmp(&b.total_return) {
                Some(std::cmp::Ordering::Greater) => true,
                Some(std::cmp::Ordering::Less) => false,
                _ => a.fast_window < b.fast_window,
            },
        }
    }
}
