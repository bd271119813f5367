use std::io;

/// `Result<_, ParseError>`
pub type ParseResult<T> = Result<T, ParseError>;

/// Anything that could go wrong while parsing a beatmap or score.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("no {0} file buffer was passed in")]
    EmptyBuffer(&'static str),
    #[error("expected `osu file format v` at file begin")]
    IncorrectFileHeader,
    #[error("failed to decode beatmap")]
    Beatmap(#[source] io::Error),
    #[error("failed to decode score")]
    Score(#[source] osu_db::Error),
    #[error("beatmap MD5 checksum mismatch: expected {expected}, got {actual}")]
    BeatmapChecksum { expected: String, actual: String },
    #[error("replay MD5 checksum mismatch: expected {expected}, got {actual}")]
    ScoreChecksum { expected: String, actual: String },
}

impl ParseError {
    /// Whether the error is due to a checksum mismatch.
    pub const fn is_checksum_mismatch(&self) -> bool {
        matches!(self, Self::BeatmapChecksum { .. } | Self::ScoreChecksum { .. })
    }
}
