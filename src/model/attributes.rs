use super::mods::Mods;

/// The difficulty attributes that custom stats operate on.
///
/// Values are taken as they are stored in a beatmap i.e. before mods apply
/// their own scaling, alongside the clock rate the map is played at.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DifficultyAttributes {
    /// The circle size.
    pub cs: f64,
    /// The approach rate.
    pub ar: f64,
    /// The overall difficulty.
    pub od: f64,
    /// The health drain rate.
    pub hp: f64,
    /// The clock rate.
    pub clock_rate: f64,
}

impl DifficultyAttributes {
    /// Create new [`DifficultyAttributes`].
    ///
    /// All stats are set to `5.0` and the clock rate to `1.0`.
    pub const fn new() -> Self {
        Self {
            cs: 5.0,
            ar: 5.0,
            od: 5.0,
            hp: 5.0,
            clock_rate: 1.0,
        }
    }

    /// Specify the circle size.
    pub const fn cs(self, cs: f64) -> Self {
        Self { cs, ..self }
    }

    /// Specify the approach rate.
    pub const fn ar(self, ar: f64) -> Self {
        Self { ar, ..self }
    }

    /// Specify the overall difficulty.
    pub const fn od(self, od: f64) -> Self {
        Self { od, ..self }
    }

    /// Specify the drain rate.
    pub const fn hp(self, hp: f64) -> Self {
        Self { hp, ..self }
    }

    /// Specify the clock rate.
    pub const fn clock_rate(self, clock_rate: f64) -> Self {
        Self { clock_rate, ..self }
    }

    /// Use the clock rate of the given mods.
    pub fn mods(self, mods: impl Mods) -> Self {
        self.clock_rate(mods.clock_rate())
    }
}

impl Default for DifficultyAttributes {
    fn default() -> Self {
        Self::new()
    }
}
