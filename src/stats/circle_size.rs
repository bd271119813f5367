use super::{clamp::clamp_stat, CustomStats};
use crate::model::mods::Mods;

/// Circle size after applying the custom stats.
///
/// A locked circle size is the value *after* mods scaled it so it's divided
/// by the mods' scaling factor beforehand.
pub fn scale_circle_size(cs: f64, mods: impl Mods, stats: &CustomStats) -> f64 {
    let Some(custom_cs) = stats.cs else {
        return cs;
    };

    if stats.is_cs_locked() {
        clamp_stat(custom_cs / mods.size_denominator())
    } else {
        clamp_stat(custom_cs)
    }
}
