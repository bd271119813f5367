use osu_db::{Error as ReplayError, Replay};

use crate::{
    model::{attributes::DifficultyAttributes, beatmap::BeatmapData, mode::GameMode, mods::Mods},
    CustomStats,
};

use super::mode::from_replay_mode;

/// Score data decoded from a `.osr` file.
#[derive(Clone, Debug)]
pub struct ScoreData {
    /// The mode the score was set in.
    pub mode: GameMode,
    /// Legacy mod bitflags of the score.
    pub mods: u32,
    /// The decoded replay.
    ///
    /// Its replay detail, i.e. the actions, their raw compressed form, and
    /// the life graph, is only present if requested while decoding.
    pub replay: Replay,
}

impl ScoreData {
    /// Decode [`ScoreData`] from the content of a `.osr` file.
    ///
    /// If `replay_detail` is `false`, the actions, the raw replay data, and
    /// the life graph are dropped.
    pub fn from_bytes(bytes: &[u8], replay_detail: bool) -> Result<Self, ReplayError> {
        let mut replay = Replay::from_bytes(bytes)?;

        if !replay_detail {
            replay.replay_data = None;
            replay.raw_replay_data = None;
            replay.life_graph = None;
        }

        Ok(Self::from(replay))
    }

    /// The MD5 hash of the beatmap that the score was set on.
    pub fn beatmap_hash(&self) -> Option<&str> {
        self.replay.beatmap_hash.as_deref()
    }

    /// The [`DifficultyAttributes`] of the beatmap with the score's mods and
    /// the given custom stats.
    pub fn custom_attributes(&self, map: &BeatmapData, stats: &CustomStats) -> DifficultyAttributes {
        map.custom_attributes(self.mods, stats)
    }

    /// The clock rate of the score's mods.
    pub fn clock_rate(&self) -> f64 {
        self.mods.clock_rate()
    }
}

impl From<Replay> for ScoreData {
    fn from(replay: Replay) -> Self {
        Self {
            mode: from_replay_mode(replay.mode),
            mods: replay.mods.bits(),
            replay,
        }
    }
}
