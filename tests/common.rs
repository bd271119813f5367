// False positive
#[allow(unused)]
pub use self::{mods::*, paths::*};

/// Paths to .osu files
mod paths {
    pub const OSU: &str = "./resources/osu.osu";
    pub const TAIKO: &str = "./resources/taiko.osu";
    pub const CATCH: &str = "./resources/catch.osu";
    pub const MANIA: &str = "./resources/mania.osu";
}

/// Bit values for mods
mod mods {
    #![allow(unused)]

    pub const NM: u32 = 0;
    pub const EZ: u32 = 1 << 1;
    pub const HD: u32 = 1 << 3;
    pub const HR: u32 = 1 << 4;
    pub const DT: u32 = 1 << 6;
    pub const HT: u32 = 1 << 8;
    pub const NC: u32 = (1 << 9) + DT;
}

/// Tolerance for values that went through the timing formulas.
#[allow(unused)]
pub const TOLERANCE: f64 = 1e-9;

#[track_caller]
#[allow(unused)]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "{actual} != {expected}"
    );
}

#[track_caller]
#[allow(unused)]
pub fn read(path: &str) -> Vec<u8> {
    std::fs::read(path).unwrap_or_else(|e| panic!("failed to read {path}: {e}"))
}
