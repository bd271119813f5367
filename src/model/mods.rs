/// Legacy osu! mods that are recognized by this crate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GameMod {
    NoFail,
    Easy,
    TouchDevice,
    Hidden,
    HardRock,
    SuddenDeath,
    DoubleTime,
    Relax,
    HalfTime,
    Nightcore,
    Flashlight,
    SpunOut,
}

impl GameMod {
    /// The mod's legacy bit value.
    pub const fn bits(self) -> u32 {
        match self {
            Self::NoFail => 1 << 0,
            Self::Easy => 1 << 1,
            Self::TouchDevice => 1 << 2,
            Self::Hidden => 1 << 3,
            Self::HardRock => 1 << 4,
            Self::SuddenDeath => 1 << 5,
            Self::DoubleTime => 1 << 6,
            Self::Relax => 1 << 7,
            Self::HalfTime => 1 << 8,
            // Nightcore is only ever set alongside DoubleTime
            Self::Nightcore => 1 << 9,
            Self::Flashlight => 1 << 10,
            Self::SpunOut => 1 << 12,
        }
    }

    /// The mod's acronym.
    pub const fn acronym(self) -> &'static str {
        match self {
            Self::NoFail => "NF",
            Self::Easy => "EZ",
            Self::TouchDevice => "TD",
            Self::Hidden => "HD",
            Self::HardRock => "HR",
            Self::SuddenDeath => "SD",
            Self::DoubleTime => "DT",
            Self::Relax => "RX",
            Self::HalfTime => "HT",
            Self::Nightcore => "NC",
            Self::Flashlight => "FL",
            Self::SpunOut => "SO",
        }
    }
}

/// A set of mods with a membership predicate.
///
/// Implemented for `u32` i.e. legacy mod bitflags.
///
/// # Example
///
/// ```
/// use rosu_stats::model::mods::{GameMod, Mods};
///
/// let mods: u32 = 8 + 16; // HDHR
///
/// assert!(mods.has(GameMod::HardRock));
/// assert!(!mods.ez());
/// ```
pub trait Mods: Copy {
    /// Check whether the given mod is contained.
    fn has(self, gamemod: GameMod) -> bool;

    fn ez(self) -> bool {
        self.has(GameMod::Easy)
    }

    fn hr(self) -> bool {
        self.has(GameMod::HardRock)
    }

    fn dt(self) -> bool {
        self.has(GameMod::DoubleTime) || self.has(GameMod::Nightcore)
    }

    fn ht(self) -> bool {
        self.has(GameMod::HalfTime)
    }

    /// The clock rate the mods apply on their own.
    fn clock_rate(self) -> f64 {
        if self.dt() {
            1.5
        } else if self.ht() {
            0.75
        } else {
            1.0
        }
    }

    /// The factor by which the mods scale circle size.
    ///
    /// HardRock takes precedence over Easy.
    fn size_denominator(self) -> f64 {
        if self.hr() {
            1.3
        } else if self.ez() {
            0.5
        } else {
            1.0
        }
    }
}

impl Mods for u32 {
    fn has(self, gamemod: GameMod) -> bool {
        self & gamemod.bits() != 0
    }
}
