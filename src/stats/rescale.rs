use rosu_map::section::general::GameMode;

use super::{clamp::clamp_stat, CustomStats};
use crate::model::attributes::DifficultyAttributes;

/// A piecewise-linear timing formula that maps a difficulty stat to
/// milliseconds and back.
///
/// Each formula is defined by the milliseconds at stat `0`, `5`, and `10`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimingFormula {
    /// `TimePreempt` of hit objects, governed by approach rate.
    Preempt,
    /// Hit window of a 300 ("Great") in osu!standard, governed by overall
    /// difficulty.
    GreatHitWindow,
}

impl TimingFormula {
    /// The formula that rate-compensates approach rate in the given mode.
    ///
    /// `None` means the approach rate is used as is.
    pub const fn approach_rate(mode: GameMode) -> Option<Self> {
        match mode {
            GameMode::Osu | GameMode::Catch => Some(Self::Preempt),
            GameMode::Taiko | GameMode::Mania => None,
        }
    }

    /// The formula that rate-compensates overall difficulty in the given mode.
    ///
    /// `None` means the overall difficulty is used as is.
    pub const fn overall_difficulty(mode: GameMode) -> Option<Self> {
        match mode {
            GameMode::Osu => Some(Self::GreatHitWindow),
            // Taiko hit windows are not governed by this formula
            GameMode::Taiko => None,
            GameMode::Catch | GameMode::Mania => None,
        }
    }

    /// Milliseconds at stat `0`, `5`, and `10`.
    const fn range(self) -> (f64, f64, f64) {
        match self {
            Self::Preempt => (1800.0, 1200.0, 450.0),
            Self::GreatHitWindow => (80.0, 50.0, 20.0),
        }
    }

    /// Convert a stat into milliseconds.
    pub fn ms(self, value: f64) -> f64 {
        match self {
            Self::Preempt => {
                if value <= 5.0 {
                    1800.0 - value * 120.0
                } else {
                    1200.0 - (value - 5.0) * 150.0
                }
            }
            Self::GreatHitWindow => 80.0 - 6.0 * value,
        }
    }

    /// Convert milliseconds back into a stat.
    ///
    /// The result is not clamped.
    pub fn value(self, ms: f64) -> f64 {
        let (min, mid, max) = self.range();

        if ms <= mid {
            ((ms - mid) * 5.0 / (max - mid)) + 5.0
        } else {
            5.0 - ((ms - mid) * 5.0 / (min - mid))
        }
    }

    /// Find the stat which, once the clock rate is applied, results in the
    /// same milliseconds as `value` does at clock rate `1.0`.
    pub fn rescale(self, value: f64, clock_rate: f64) -> f64 {
        self.value(self.ms(value) * clock_rate)
    }
}

/// Approach rate after applying the custom stats.
pub fn scale_approach_rate(
    attrs: &DifficultyAttributes,
    mode: GameMode,
    stats: &CustomStats,
) -> f64 {
    let Some(ar) = stats.ar else {
        return attrs.ar;
    };

    let ar = clamp_stat(ar);

    if !stats.is_ar_locked() {
        return ar;
    }

    match TimingFormula::approach_rate(mode) {
        Some(formula) => formula.rescale(ar, attrs.clock_rate),
        None => ar,
    }
}

/// Overall difficulty after applying the custom stats.
pub fn scale_overall_difficulty(
    attrs: &DifficultyAttributes,
    mode: GameMode,
    stats: &CustomStats,
) -> f64 {
    let Some(od) = stats.od else {
        return attrs.od;
    };

    let od = clamp_stat(od);

    if !stats.is_od_locked() {
        return od;
    }

    match TimingFormula::overall_difficulty(mode) {
        Some(formula) => formula.rescale(od, attrs.clock_rate),
        None => od,
    }
}
