//! Library to apply custom difficulty stats on [osu!] beatmaps.
//!
//! ## Description
//!
//! Custom stats override a beatmap's circle size, approach rate, overall
//! difficulty, and clock rate. Stats can be *locked* in which case they
//! describe the value that should be in effect after mods and the clock rate
//! did their scaling, e.g. a locked approach rate of 9 on a map played at
//! clock rate 1.5 still *feels* like approach rate 9.
//!
//! Locking inverts the timing formulas of osu!lazer so that the stored stat
//! results in the requested one:
//!   - approach rate: `TimePreempt` in osu!standard and osu!catch
//!   - overall difficulty: the 300 hit window in osu!standard
//!
//! In other modes locked stats are applied as they are.
//!
//! ## Usage
//!
//! ```
//! use rosu_stats::{parse, CustomStats};
//!
//! let bytes = b"osu file format v14
//!
//! [General]
//! Mode: 0
//!
//! [Difficulty]
//! CircleSize:4
//! OverallDifficulty:8
//! ApproachRate:9
//!
//! [TimingPoints]
//! 0,500,4,2,0,100,1,0
//!
//! [HitObjects]
//! 256,192,1000,1,0,0:0:0:0:
//! 256,192,61000,1,0,0:0:0:0:
//! ";
//!
//! let parsed = parse::parse_beatmap(bytes, &parse::BeatmapParsingOptions::new()).unwrap();
//! let map = parsed.data;
//!
//! let stats = CustomStats::new()
//!     .bpm(180.0) // 1.5x
//!     .ar(9.0)
//!     .lock_ar(true);
//!
//! let attrs = map.custom_attributes(0_u32, &stats);
//!
//! assert!((attrs.clock_rate - 1.5).abs() < 1e-9);
//! assert!((attrs.ar - 7.0).abs() < 1e-9);
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | No features |
//! | `tracing` | Errors encountered during decoding, checksum mismatches, and unusual clock rates are logged through `tracing`. If this feature is not enabled, nothing is logged. | [`tracing`]
//!
//! [osu!]: https://osu.ppy.sh/home
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::struct_excessive_bools,
    clippy::match_same_arms,
    clippy::similar_names
)]

#[doc(inline)]
pub use self::{
    model::{attributes::DifficultyAttributes, beatmap::BeatmapData, score::ScoreData},
    stats::CustomStats,
};

/// Types used in and around this crate.
pub mod model;

/// Custom difficulty stats.
pub mod stats;

/// Validating and decoding beatmap and replay files.
pub mod parse;
