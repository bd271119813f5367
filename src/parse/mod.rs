use crate::model::{beatmap::BeatmapData, score::ScoreData};

pub use self::error::{ParseError, ParseResult};

mod error;

const FILE_HEADER: &[u8] = b"osu file format v";
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Options for [`parse_beatmap`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct BeatmapParsingOptions {
    hash: Option<String>,
}

impl BeatmapParsingOptions {
    pub const fn new() -> Self {
        Self { hash: None }
    }

    /// MD5 hash of the target beatmap.
    ///
    /// If unspecified, the file will not be validated. The comparison with
    /// the file's actual hash ignores ASCII case.
    pub fn hash(self, hash: impl Into<String>) -> Self {
        Self {
            hash: Some(hash.into()),
        }
    }
}

/// Options for [`parse_score`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct ScoreParsingOptions {
    hash: Option<String>,
    replay_detail: bool,
}

impl ScoreParsingOptions {
    pub const fn new() -> Self {
        Self {
            hash: None,
            replay_detail: false,
        }
    }

    /// MD5 hash of the target replay file.
    ///
    /// If unspecified, the file will not be validated. The comparison with
    /// the file's actual hash ignores ASCII case.
    pub fn hash(self, hash: impl Into<String>) -> Self {
        Self {
            hash: Some(hash.into()),
            ..self
        }
    }

    /// Whether replay detail should be kept.
    ///
    /// Replay detail consists of the decoded actions, the raw compressed
    /// replay data, and the life graph. If `false`, all of them are dropped
    /// from [`ScoreData::replay`].
    ///
    /// Defaults to `false`.
    pub fn replay_detail(self, replay_detail: bool) -> Self {
        Self {
            replay_detail,
            ..self
        }
    }
}

/// A decoded beatmap alongside the MD5 hash of its file.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedBeatmap {
    pub data: BeatmapData,
    pub hash: String,
}

/// A decoded score alongside the MD5 hash of its file.
#[derive(Clone, Debug)]
pub struct ParsedScore {
    pub data: ScoreData,
    pub hash: String,
}

/// Validate and decode the content of a `.osu` file.
///
/// # Example
///
/// ```
/// use rosu_stats::parse::{parse_beatmap, BeatmapParsingOptions, ParseError};
///
/// let bytes = b"osu file format v14\n\n[Difficulty]\nApproachRate:9\n";
///
/// let parsed = parse_beatmap(bytes, &BeatmapParsingOptions::new()).unwrap();
/// assert_eq!(parsed.data.ar, 9.0);
///
/// let options = BeatmapParsingOptions::new().hash("d41d8cd98f00b204e9800998ecf8427e");
/// let err = parse_beatmap(bytes, &options).unwrap_err();
/// assert!(matches!(err, ParseError::BeatmapChecksum { .. }));
/// ```
pub fn parse_beatmap(bytes: &[u8], options: &BeatmapParsingOptions) -> ParseResult<ParsedBeatmap> {
    if bytes.is_empty() {
        return Err(ParseError::EmptyBuffer("beatmap"));
    }

    let hash = md5_hex(bytes);

    if let Some(ref expected) = options.hash {
        if !expected.eq_ignore_ascii_case(&hash) {
            #[cfg(feature = "tracing")]
            tracing::warn!(%expected, actual = %hash, "Beatmap checksum mismatch");

            return Err(ParseError::BeatmapChecksum {
                expected: expected.to_owned(),
                actual: hash,
            });
        }
    }

    if !has_file_header(bytes) {
        return Err(ParseError::IncorrectFileHeader);
    }

    let data = BeatmapData::from_bytes(bytes).map_err(|err| {
        #[cfg(feature = "tracing")]
        tracing::warn!(?err, "Failed to decode beatmap");

        ParseError::Beatmap(err)
    })?;

    Ok(ParsedBeatmap { data, hash })
}

/// Validate and decode the content of a `.osr` file.
pub fn parse_score(bytes: &[u8], options: &ScoreParsingOptions) -> ParseResult<ParsedScore> {
    if bytes.is_empty() {
        return Err(ParseError::EmptyBuffer("replay"));
    }

    let hash = md5_hex(bytes);

    if let Some(ref expected) = options.hash {
        if !expected.eq_ignore_ascii_case(&hash) {
            #[cfg(feature = "tracing")]
            tracing::warn!(%expected, actual = %hash, "Replay checksum mismatch");

            return Err(ParseError::ScoreChecksum {
                expected: expected.to_owned(),
                actual: hash,
            });
        }
    }

    let data = ScoreData::from_bytes(bytes, options.replay_detail).map_err(|err| {
        #[cfg(feature = "tracing")]
        tracing::warn!(?err, "Failed to decode score");

        ParseError::Score(err)
    })?;

    Ok(ParsedScore { data, hash })
}

/// Lowercase hexadecimal MD5 hash of the bytes.
pub fn md5_hex(bytes: &[u8]) -> String {
    format!("{:x}", md5::compute(bytes))
}

fn has_file_header(bytes: &[u8]) -> bool {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let start = bytes
        .iter()
        .position(|byte| !byte.is_ascii_whitespace())
        .unwrap_or(bytes.len());

    bytes[start..].starts_with(FILE_HEADER)
}
