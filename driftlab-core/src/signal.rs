//! Causal signal generation: entry/exit predicates and the FLAT/LONG
//! state machine.
//!
//! A decision made from day t's indicators can only change the position
//! starting day t+1 (no look-ahead). The one exception is the stop-loss,
//! which compares today's close against the recorded entry price and must
//! react same-day to protect capital.
//!
//! Both predicates default to false while any required indicator input is
//! still in warm-up, so no signal exists before every window has filled.

use crate::domain::PositionState;
use crate::indicators::IndicatorFrame;
use crate::params::StrategyParams;

/// What the simulator should do on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Hold,
    Enter,
    Exit { stop_loss: bool },
}

/// Entry predicate for day `t`:
/// fast SMA above slow SMA, ROC above the momentum threshold, and volume
/// at least `volume_ratio_min` of its average. False when any input is
/// undefined.
pub fn entry_condition(frame: &IndicatorFrame, t: usize, params: &StrategyParams) -> bool {
    match (
        frame.fast_sma[t],
        frame.slow_sma[t],
        frame.roc[t],
        frame.volume_ratio[t],
    ) {
        (Some(fast), Some(slow), Some(roc), Some(vol_ratio)) => {
            fast > slow && roc > params.momentum_threshold && vol_ratio > params.volume_ratio_min
        }
        _ => false,
    }
}

/// Exit predicate for day `t`:
/// fast SMA below slow SMA, or ROC below the momentum threshold. False
/// when any input is undefined.
pub fn exit_condition(frame: &IndicatorFrame, t: usize, params: &StrategyParams) -> bool {
    match (frame.fast_sma[t], frame.slow_sma[t], frame.roc[t]) {
        (Some(fast), Some(slow), Some(roc)) => fast < slow || roc < params.momentum_threshold,
        _ => false,
    }
}

/// The causal state machine. Borrows the frame and parameters; the
/// simulator feeds it one day at a time.
#[derive(Debug, Clone, Copy)]
pub struct SignalMachine<'a> {
    frame: &'a IndicatorFrame,
    params: &'a StrategyParams,
}

impl<'a> SignalMachine<'a> {
    pub fn new(frame: &'a IndicatorFrame, params: &'a StrategyParams) -> Self {
        Self { frame, params }
    }

    /// Decide the transition for day `t` given the current position and
    /// today's close. Priority order:
    ///
    /// 1. Same-day stop-loss while LONG.
    /// 2. Lagged exit: `exit_condition` held on day t-1 while LONG.
    /// 3. Lagged entry: `entry_condition` held on day t-1 while FLAT.
    pub fn decide(&self, t: usize, state: &PositionState, close: f64) -> Transition {
        if let Some(stop) = self.params.stop_loss {
            if let Some(open_return) = state.open_return(close) {
                if open_return <= stop {
                    return Transition::Exit { stop_loss: true };
                }
            }
        }

        // Day 0 has no prior day to act on.
        if t == 0 {
            return Transition::Hold;
        }

        match state {
            PositionState::Flat if entry_condition(self.frame, t - 1, self.params) => {
                Transition::Enter
            }
            PositionState::Long { .. } if exit_condition(self.frame, t - 1, self.params) => {
                Transition::Exit { stop_loss: false }
            }
            _ => Transition::Hold,
        }
    }
}
