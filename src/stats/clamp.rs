// Same limits as osu!lazer's difficulty adjust mod. AR and OD formulas start
// to behave weirdly past 13.33.
pub const MIN_STAT: f64 = 0.0;
pub const MAX_STAT: f64 = 11.0;

// Limits of osu!lazer's rate adjusting mods.
pub const MIN_CLOCK_RATE: f64 = 0.25;
pub const MAX_CLOCK_RATE: f64 = 3.0;

pub const MIN_BPM: f64 = 60.0;
pub const MAX_BPM: f64 = 10_000.0;

/// Clamp a difficulty stat i.e. CS, AR, OD, or HP to `[0, 11]`.
pub fn clamp_stat(value: f64) -> f64 {
    value.clamp(MIN_STAT, MAX_STAT)
}

/// Clamp a clock rate to `[0.25, 3.0]`.
pub fn clamp_rate(value: f64) -> f64 {
    value.clamp(MIN_CLOCK_RATE, MAX_CLOCK_RATE)
}

/// Clamp a BPM to `[60, 10000]`.
pub fn clamp_bpm(value: f64) -> f64 {
    value.clamp(MIN_BPM, MAX_BPM)
}
