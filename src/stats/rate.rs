use super::{
    clamp::{clamp_bpm, clamp_rate},
    CustomStats,
};

/// Clock rate after applying the custom stats.
///
/// A custom clock rate takes precedence over a custom BPM. The clock rate
/// derived from a BPM is **not** clamped to the clock rate limits.
pub fn resolve_clock_rate(clock_rate: f64, base_bpm: f64, stats: &CustomStats) -> f64 {
    if let Some(custom_rate) = stats.clock_rate {
        return clamp_rate(custom_rate);
    }

    let Some(bpm) = stats.bpm else {
        return clock_rate;
    };

    let clock_rate = clamp_bpm(bpm) / base_bpm;

    #[cfg(feature = "tracing")]
    {
        if !(super::clamp::MIN_CLOCK_RATE..=super::clamp::MAX_CLOCK_RATE).contains(&clock_rate) {
            tracing::debug!(bpm, base_bpm, clock_rate, "BPM results in unusual clock rate");
        }
    }

    clock_rate
}
