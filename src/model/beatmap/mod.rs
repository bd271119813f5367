use std::{io, str::FromStr};

use rosu_map::section::general::GameMode;

use crate::{
    model::{attributes::DifficultyAttributes, mods::Mods},
    CustomStats,
};

pub use self::decode::{BeatmapState, ParseBeatmapError};

use super::{control_point::TimingPoint, hit_object::HitObject};

mod bpm;
mod decode;

/// All beatmap data that is relevant for custom difficulty stats.
#[derive(Clone, Debug, PartialEq)]
pub struct BeatmapData {
    pub version: i32,

    // General
    pub mode: GameMode,

    // Difficulty
    pub ar: f32,
    pub cs: f32,
    pub hp: f32,
    pub od: f32,

    // TimingPoints
    pub timing_points: Vec<TimingPoint>,

    // HitObjects
    pub hit_objects: Vec<HitObject>,
}

impl BeatmapData {
    /// Decode [`BeatmapData`] from the content of a `.osu` file.
    ///
    /// Malformed lines are skipped; enable the `tracing` feature to have
    /// them logged.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, io::Error> {
        rosu_map::from_bytes(bytes)
    }

    /// The most common beats per minute of the map.
    ///
    /// This is the BPM at clock rate `1.0` that custom BPMs are relative to.
    pub fn bpm(&self) -> f64 {
        bpm::most_common_bpm(self.hit_objects.last(), &self.timing_points)
    }

    /// The lowest beats per minute of the map.
    pub fn bpm_min(&self) -> f64 {
        self.timing_points
            .iter()
            .map(TimingPoint::bpm)
            .min_by(f64::total_cmp)
            .unwrap_or(TimingPoint::DEFAULT_BPM)
    }

    /// The highest beats per minute of the map.
    pub fn bpm_max(&self) -> f64 {
        self.timing_points
            .iter()
            .map(TimingPoint::bpm)
            .max_by(f64::total_cmp)
            .unwrap_or(TimingPoint::DEFAULT_BPM)
    }

    /// The map's [`DifficultyAttributes`] when played with the given mods.
    ///
    /// Stats are used as they are stored in the map; only the clock rate
    /// depends on the mods.
    pub fn attributes(&self, mods: impl Mods) -> DifficultyAttributes {
        DifficultyAttributes::new()
            .cs(f64::from(self.cs))
            .ar(f64::from(self.ar))
            .od(f64::from(self.od))
            .hp(f64::from(self.hp))
            .mods(mods)
    }

    /// The map's [`DifficultyAttributes`] when played with the given mods
    /// and custom stats.
    pub fn custom_attributes(&self, mods: impl Mods, stats: &CustomStats) -> DifficultyAttributes {
        let attrs = stats.apply_circle_size(self.attributes(mods), mods);

        stats.apply(attrs, self.mode, self.bpm())
    }
}

impl FromStr for BeatmapData {
    type Err = io::Error;

    /// Decode [`BeatmapData`] from the content of a `.osu` file as a string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        rosu_map::from_str(s)
    }
}
