use rosu_map::{
    section::{
        difficulty::{Difficulty, DifficultyState, ParseDifficultyError},
        general::{GameMode, GeneralKey, ParseGameModeError},
        hit_objects::{HitObjectType, ParseHitObjectTypeError},
    },
    util::{KeyValue, ParseNumber, ParseNumberError, StrExt, MAX_PARSE_VALUE},
    DecodeBeatmap, DecodeState,
};

use crate::model::{control_point::TimingPoint, hit_object::HitObject};

use super::BeatmapData;

/// The state of [`BeatmapData`] for [`DecodeBeatmap`].
pub struct BeatmapState {
    version: i32,
    mode: GameMode,
    difficulty: DifficultyState,
    timing_points: Vec<TimingPoint>,
    hit_objects: Vec<HitObject>,
}

impl BeatmapState {
    fn add_timing_point(&mut self, point: TimingPoint) {
        // the first timing point at a given time wins
        if let Err(i) = self
            .timing_points
            .binary_search_by(|probe| probe.time.total_cmp(&point.time))
        {
            self.timing_points.insert(i, point);
        }
    }
}

impl DecodeState for BeatmapState {
    fn create(version: i32) -> Self {
        Self {
            version,
            mode: GameMode::Osu,
            difficulty: DifficultyState::create(version),
            timing_points: Vec::with_capacity(1),
            hit_objects: Vec::with_capacity(512),
        }
    }
}

impl From<BeatmapState> for BeatmapData {
    fn from(mut state: BeatmapState) -> Self {
        let difficulty: Difficulty = state.difficulty.into();

        state
            .hit_objects
            .sort_by(|a, b| a.start_time.total_cmp(&b.start_time));

        BeatmapData {
            version: state.version,
            mode: state.mode,
            ar: difficulty.approach_rate,
            cs: difficulty.circle_size,
            hp: difficulty.hp_drain_rate,
            od: difficulty.overall_difficulty,
            timing_points: state.timing_points,
            hit_objects: state.hit_objects,
        }
    }
}

/// All the ways that parsing a line into [`BeatmapData`] can fail.
#[derive(Debug, thiserror::Error)]
pub enum ParseBeatmapError {
    #[error("failed to parse hit object type")]
    HitObjectType(#[from] ParseHitObjectTypeError),
    #[error("invalid timing point line")]
    InvalidTimingPointLine,
    #[error("invalid hit object line")]
    InvalidHitObjectLine,
    #[error("failed to parse mode")]
    Mode(#[from] ParseGameModeError),
    #[error("failed to parse number")]
    Number(#[from] ParseNumberError),
    #[error("beat length cannot be NaN in a timing control point")]
    TimingControlPointNaN,
}

impl From<ParseDifficultyError> for ParseBeatmapError {
    fn from(e: ParseDifficultyError) -> Self {
        match e {
            ParseDifficultyError::Number(e) => Self::Number(e),
        }
    }
}

impl DecodeBeatmap for BeatmapData {
    type Error = ParseBeatmapError;
    type State = BeatmapState;

    fn parse_general(state: &mut Self::State, line: &str) -> Result<(), Self::Error> {
        let Ok(KeyValue { key, value }) = KeyValue::parse(line.trim_comment()) else {
            return Ok(());
        };

        if let GeneralKey::Mode = key {
            state.mode = value.parse()?;
        }

        Ok(())
    }

    fn parse_editor(_: &mut Self::State, _: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn parse_metadata(_: &mut Self::State, _: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn parse_difficulty(state: &mut Self::State, line: &str) -> Result<(), Self::Error> {
        Difficulty::parse_difficulty(&mut state.difficulty, line).map_err(ParseBeatmapError::from)
    }

    fn parse_events(_: &mut Self::State, _: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn parse_timing_points(state: &mut Self::State, line: &str) -> Result<(), Self::Error> {
        let mut split = line.trim_comment().split(',');

        let (time, beat_len) = split
            .next()
            .zip(split.next())
            .ok_or(ParseBeatmapError::InvalidTimingPointLine)?;

        let time = time.parse_num::<f64>()?;

        // Manual `str::parse_num::<f64>` so that NaN does not cause an error
        let beat_len = beat_len
            .trim()
            .parse::<f64>()
            .map_err(ParseNumberError::InvalidFloat)?;

        if beat_len < f64::from(-MAX_PARSE_VALUE) {
            return Err(ParseNumberError::NumberUnderflow.into());
        } else if beat_len > f64::from(MAX_PARSE_VALUE) {
            return Err(ParseNumberError::NumberOverflow.into());
        }

        let _ = split.next(); // timing signature
        let _ = split.next(); // sample set
        let _ = split.next(); // custom sample bank
        let _ = split.next(); // sample volume

        // inherited points only change slider velocity
        let timing_change = split
            .next()
            .map_or(true, |next| matches!(next.chars().next(), Some('1')));

        if timing_change {
            if beat_len.is_nan() {
                return Err(ParseBeatmapError::TimingControlPointNaN);
            }

            state.add_timing_point(TimingPoint::new(time, beat_len));
        }

        Ok(())
    }

    fn parse_colors(_: &mut Self::State, _: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn parse_hit_objects(state: &mut Self::State, line: &str) -> Result<(), Self::Error> {
        let mut split = line.trim_comment().split(',');

        let (Some(_x), Some(_y), Some(start_time), Some(kind), Some(_sound_type)) = (
            split.next(),
            split.next(),
            split.next(),
            split.next(),
            split.next(),
        ) else {
            return Err(ParseBeatmapError::InvalidHitObjectLine);
        };

        let start_time = f64::parse(start_time)?;
        let hit_object_type: HitObjectType = kind.parse()?;

        let h = if hit_object_type.has_flag(HitObjectType::SPINNER) {
            let end_time = split
                .next()
                .ok_or(ParseBeatmapError::InvalidHitObjectLine)?
                .parse_num::<f64>()?;

            HitObject::with_end_time(start_time, end_time)
        } else if hit_object_type.has_flag(HitObjectType::HOLD) {
            match split.next().filter(|s| !s.is_empty()) {
                Some(s) => {
                    let (end_time, _) = s
                        .split_once(':')
                        .ok_or(ParseBeatmapError::InvalidHitObjectLine)?;

                    HitObject::with_end_time(start_time, end_time.parse_num::<f64>()?)
                }
                None => HitObject::new(start_time),
            }
        } else {
            HitObject::new(start_time)
        };

        state.hit_objects.push(h);

        Ok(())
    }

    fn parse_variables(_: &mut Self::State, _: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn parse_catch_the_beat(_: &mut Self::State, _: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn parse_mania(_: &mut Self::State, _: &str) -> Result<(), Self::Error> {
        Ok(())
    }
}
