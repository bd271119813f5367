use rosu_map::section::general::GameMode;

use crate::model::{attributes::DifficultyAttributes, mods::Mods};

pub use self::{
    circle_size::scale_circle_size,
    clamp::{clamp_bpm, clamp_rate, clamp_stat},
    rate::resolve_clock_rate,
    rescale::{scale_approach_rate, scale_overall_difficulty, TimingFormula},
};

mod circle_size;
mod clamp;
mod rate;
mod rescale;

/// Custom difficulty stats that override a beatmap's attributes.
///
/// Unspecified values leave the corresponding attribute untouched.
///
/// A *locked* stat describes the value that should be in effect *after*
/// mods and the clock rate did their scaling. When applying a locked stat,
/// the value is converted back so that the scaling results in the
/// specified value again.
///
/// # Example
///
/// ```
/// use rosu_stats::{model::mode::GameMode, CustomStats, DifficultyAttributes};
///
/// let attrs = DifficultyAttributes::new().ar(9.3).od(8.8);
///
/// let stats = CustomStats::new()
///     .clock_rate(1.5)
///     .ar(9.0)
///     .lock_ar(true);
///
/// let attrs = stats.apply(attrs, GameMode::Osu, 180.0);
///
/// // 600ms preempt at 1.5x clock rate
/// assert!((attrs.ar - 7.0).abs() < 1e-9);
/// assert!((attrs.od - 8.8).abs() < 1e-9);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[must_use]
pub struct CustomStats {
    pub(crate) cs: Option<f64>,
    pub(crate) ar: Option<f64>,
    pub(crate) od: Option<f64>,
    pub(crate) clock_rate: Option<f64>,
    pub(crate) bpm: Option<f64>,
    pub(crate) lock_stats: bool,
    pub(crate) lock_cs: bool,
    pub(crate) lock_ar: bool,
    pub(crate) lock_od: bool,
}

impl CustomStats {
    /// Create new [`CustomStats`] that don't override anything.
    pub const fn new() -> Self {
        Self {
            cs: None,
            ar: None,
            od: None,
            clock_rate: None,
            bpm: None,
            lock_stats: false,
            lock_cs: false,
            lock_ar: false,
            lock_od: false,
        }
    }

    /// Override the circle size.
    pub const fn cs(self, cs: f64) -> Self {
        Self {
            cs: Some(cs),
            ..self
        }
    }

    /// Override the approach rate.
    pub const fn ar(self, ar: f64) -> Self {
        Self {
            ar: Some(ar),
            ..self
        }
    }

    /// Override the overall difficulty.
    pub const fn od(self, od: f64) -> Self {
        Self {
            od: Some(od),
            ..self
        }
    }

    /// Override the clock rate.
    ///
    /// Takes precedence over [`CustomStats::bpm`].
    pub const fn clock_rate(self, clock_rate: f64) -> Self {
        Self {
            clock_rate: Some(clock_rate),
            ..self
        }
    }

    /// Override the clock rate through a target BPM.
    ///
    /// The resulting clock rate is the target BPM divided by the map's BPM
    /// and may exceed the usual clock rate limits.
    pub const fn bpm(self, bpm: f64) -> Self {
        Self {
            bpm: Some(bpm),
            ..self
        }
    }

    /// Lock all stats.
    pub const fn lock_stats(self, lock_stats: bool) -> Self {
        Self { lock_stats, ..self }
    }

    /// Lock the circle size.
    pub const fn lock_cs(self, lock_cs: bool) -> Self {
        Self { lock_cs, ..self }
    }

    /// Lock the approach rate.
    pub const fn lock_ar(self, lock_ar: bool) -> Self {
        Self { lock_ar, ..self }
    }

    /// Lock the overall difficulty.
    pub const fn lock_od(self, lock_od: bool) -> Self {
        Self { lock_od, ..self }
    }

    pub const fn get_cs(&self) -> Option<f64> {
        self.cs
    }

    pub const fn get_ar(&self) -> Option<f64> {
        self.ar
    }

    pub const fn get_od(&self) -> Option<f64> {
        self.od
    }

    pub const fn get_clock_rate(&self) -> Option<f64> {
        self.clock_rate
    }

    pub const fn get_bpm(&self) -> Option<f64> {
        self.bpm
    }

    pub const fn is_cs_locked(&self) -> bool {
        self.lock_stats || self.lock_cs
    }

    pub const fn is_ar_locked(&self) -> bool {
        self.lock_stats || self.lock_ar
    }

    pub const fn is_od_locked(&self) -> bool {
        self.lock_stats || self.lock_od
    }

    /// Apply the custom clock rate, approach rate, and overall difficulty.
    ///
    /// The clock rate is resolved first since both approach rate and overall
    /// difficulty are scaled based on it. `base_bpm` is only used when
    /// a custom BPM is specified.
    pub fn apply(
        &self,
        attrs: DifficultyAttributes,
        mode: GameMode,
        base_bpm: f64,
    ) -> DifficultyAttributes {
        let mut attrs = attrs;

        attrs.clock_rate = resolve_clock_rate(attrs.clock_rate, base_bpm, self);
        attrs.ar = scale_approach_rate(&attrs, mode, self);
        attrs.od = scale_overall_difficulty(&attrs, mode, self);

        attrs
    }

    /// Apply the custom circle size.
    pub fn apply_circle_size(
        &self,
        attrs: DifficultyAttributes,
        mods: impl Mods,
    ) -> DifficultyAttributes {
        attrs.cs(scale_circle_size(attrs.cs, mods, self))
    }
}
