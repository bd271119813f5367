use std::error::Error;

use chrono::{DateTime, Utc};
use osu_db::{replay::Action, Mode, ModSet, Replay};
use rosu_stats::{
    model::mode::GameMode,
    parse::{
        md5_hex, parse_beatmap, parse_score, BeatmapParsingOptions, ParseError,
        ScoreParsingOptions,
    },
    BeatmapData, CustomStats,
};

use crate::common::*;

mod common;

#[test]
fn beatmap_without_hash() {
    let bytes = read(OSU);
    let parsed = parse_beatmap(&bytes, &BeatmapParsingOptions::new()).unwrap();

    assert_eq!(parsed.hash, md5_hex(&bytes));
    assert_eq!(parsed.hash.len(), 32);
    assert_close(parsed.data.bpm(), 120.0);
}

#[test]
fn beatmap_with_matching_hash() {
    let bytes = read(TAIKO);
    let hash = md5_hex(&bytes);

    let options = BeatmapParsingOptions::new().hash(hash.to_uppercase());
    let parsed = parse_beatmap(&bytes, &options).unwrap();

    assert_eq!(parsed.hash, hash);
}

#[test]
fn beatmap_checksum_mismatch() {
    let bytes = read(OSU);
    let options = BeatmapParsingOptions::new().hash(md5_hex(b"something else"));

    let err = parse_beatmap(&bytes, &options).unwrap_err();

    assert!(err.is_checksum_mismatch());

    match err {
        ParseError::BeatmapChecksum { expected, actual } => {
            assert_eq!(expected, md5_hex(b"something else"));
            assert_eq!(actual, md5_hex(&bytes));
        }
        err => panic!("unexpected error: {err}"),
    }
}

#[test]
fn beatmap_incorrect_header() {
    let err = parse_beatmap(b"[General]\nMode: 0\n", &BeatmapParsingOptions::new()).unwrap_err();

    assert!(matches!(err, ParseError::IncorrectFileHeader));
}

#[test]
fn checksum_before_header() {
    let bytes = b"not a beatmap";
    let options = BeatmapParsingOptions::new().hash(md5_hex(b"nope"));

    let err = parse_beatmap(bytes, &options).unwrap_err();

    assert!(matches!(err, ParseError::BeatmapChecksum { .. }));
}

#[test]
fn empty_buffers() {
    let err = parse_beatmap(&[], &BeatmapParsingOptions::new()).unwrap_err();
    assert!(matches!(err, ParseError::EmptyBuffer(_)));

    let err = parse_score(&[], &ScoreParsingOptions::new()).unwrap_err();
    assert!(matches!(err, ParseError::EmptyBuffer(_)));
}

#[test]
fn score_checksum_mismatch() {
    let bytes = [0_u8, 1, 2, 3];
    let options = ScoreParsingOptions::new()
        .hash(md5_hex(b"replay"))
        .replay_detail(true);

    let err = parse_score(&bytes, &options).unwrap_err();

    assert!(matches!(err, ParseError::ScoreChecksum { .. }));
    assert!(err.is_checksum_mismatch());
}

#[test]
fn score_malformed() {
    let bytes = [3_u8, 0, 0];
    let options = ScoreParsingOptions::new().hash(md5_hex(&bytes));

    let err = parse_score(&bytes, &options).unwrap_err();

    assert!(matches!(err, ParseError::Score(_)));
    assert!(!err.is_checksum_mismatch());
    assert!(err.source().is_some());
}

fn replay_bytes(mode: Mode, mods: u32) -> Vec<u8> {
    let action = |delta, x, y| Action {
        delta,
        x,
        y,
        z: 1.0,
    };

    let replay = Replay {
        mode,
        version: 20_240_101,
        beatmap_hash: Some(md5_hex(&read(OSU))),
        player_name: Some("player".to_owned()),
        replay_hash: None,
        count_300: 5,
        count_100: 0,
        count_50: 0,
        count_geki: 0,
        count_katsu: 0,
        count_miss: 0,
        score: 1_000_000,
        max_combo: 6,
        perfect_combo: true,
        mods: ModSet::from_bits(mods),
        life_graph: Some("0|1,1000|0.5".to_owned()),
        timestamp: DateTime::<Utc>::default(),
        replay_data: Some(vec![
            action(0, 256.0, 192.0),
            action(1000, 200.0, 100.0),
            action(1000, 300.0, 150.0),
        ]),
        raw_replay_data: None,
        online_score_id: 0,
    };

    let mut bytes = Vec::new();
    replay.to_writer(&mut bytes, None).unwrap();

    bytes
}

#[test]
fn score_without_detail() {
    let bytes = replay_bytes(Mode::Standard, HD | DT);
    let options = ScoreParsingOptions::new().hash(md5_hex(&bytes));

    let parsed = parse_score(&bytes, &options).unwrap();
    let score = parsed.data;

    assert_eq!(parsed.hash, md5_hex(&bytes));
    assert_eq!(score.mode, GameMode::Osu);
    assert_eq!(score.mods, HD | DT);
    assert_close(score.clock_rate(), 1.5);
    assert_eq!(score.beatmap_hash(), Some(md5_hex(&read(OSU)).as_str()));

    assert!(score.replay.replay_data.is_none());
    assert!(score.replay.raw_replay_data.is_none());
    assert!(score.replay.life_graph.is_none());
}

#[test]
fn score_with_detail() {
    let bytes = replay_bytes(Mode::Taiko, NM);
    let options = ScoreParsingOptions::new().replay_detail(true);

    let score = parse_score(&bytes, &options).unwrap().data;

    assert_eq!(score.mode, GameMode::Taiko);
    assert_eq!(score.replay.replay_data.as_ref().map(Vec::len), Some(3));
    assert!(score.replay.raw_replay_data.is_some());
    assert_eq!(score.replay.life_graph.as_deref(), Some("0|1,1000|0.5"));
}

#[test]
fn score_custom_attributes() {
    let map = BeatmapData::from_bytes(&read(OSU)).unwrap();
    let bytes = replay_bytes(Mode::Standard, DT);
    let score = parse_score(&bytes, &ScoreParsingOptions::new()).unwrap().data;

    let attrs = score.custom_attributes(&map, &CustomStats::new());
    assert_close(attrs.clock_rate, 1.5);

    let stats = CustomStats::new().bpm(240.0).ar(9.0).lock_ar(true);
    let attrs = score.custom_attributes(&map, &stats);

    // 240 / 120
    assert_close(attrs.clock_rate, 2.0);
    // 600ms preempt at 2x
    assert_close(attrs.ar, 5.0);
}
