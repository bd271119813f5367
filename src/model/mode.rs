use osu_db::Mode as ReplayMode;

pub use rosu_map::section::general::GameMode;

/// Convert the mode of a decoded `.osr` file into a [`GameMode`].
pub const fn from_replay_mode(mode: ReplayMode) -> GameMode {
    match mode {
        ReplayMode::Standard => GameMode::Osu,
        ReplayMode::Taiko => GameMode::Taiko,
        ReplayMode::CatchTheBeat => GameMode::Catch,
        ReplayMode::Mania => GameMode::Mania,
    }
}
