use rosu_stats::{model::mode::GameMode, BeatmapData};

use crate::common::assert_close;

mod common;

fn decode(path: &str) -> BeatmapData {
    BeatmapData::from_bytes(&common::read(path)).unwrap()
}

#[test]
fn osu() {
    let map = decode(common::OSU);

    assert_eq!(map.mode, GameMode::Osu);
    assert_eq!(map.version, 14);
    assert_close(f64::from(map.ar), f64::from(9.3_f32));
    assert_close(f64::from(map.od), f64::from(8.8_f32));
    assert_close(f64::from(map.cs), 4.5);
    assert_close(f64::from(map.hp), 5.0);
    assert_eq!(map.hit_objects.len(), 5);
    // inherited point skipped, first of two at the same time kept
    assert_eq!(map.timing_points.len(), 2);
    assert_close(map.timing_points[1].beat_len, 400.0);

    let spinner = map.hit_objects[3];
    assert_close(spinner.start_time, 59_000.0);
    assert_close(spinner.end_time, 65_000.0);

    assert_close(map.bpm(), 120.0);
    assert_close(map.bpm_min(), 120.0);
    assert_close(map.bpm_max(), 150.0);
}

#[test]
fn taiko() {
    let map = decode(common::TAIKO);

    assert_eq!(map.mode, GameMode::Taiko);
    assert_close(f64::from(map.od), 5.0);
    assert_eq!(map.hit_objects.len(), 2);
    assert_close(map.bpm(), 150.0);
}

#[test]
fn catch() {
    let map = decode(common::CATCH);

    assert_eq!(map.mode, GameMode::Catch);
    assert_close(f64::from(map.cs), 3.5);
    assert_close(f64::from(map.ar), 8.0);
    assert_close(map.bpm(), 160.0);
}

#[test]
fn mania() {
    let map = decode(common::MANIA);

    assert_eq!(map.mode, GameMode::Mania);
    assert_eq!(map.hit_objects.len(), 2);

    let hold = map.hit_objects[1];
    assert_close(hold.end_time, 36_000.0);
    assert_close(hold.duration(), 35_000.0);
    assert_close(map.bpm(), 100.0);
}

#[test]
fn from_str() {
    let content = std::fs::read_to_string(common::OSU).unwrap();
    let map: BeatmapData = content.parse().unwrap();

    assert_eq!(map, decode(common::OSU));
}

#[test]
fn bpm_tie_is_stable() {
    let content = "osu file format v14

[TimingPoints]
0,500,4,2,0,100,1,0
10000,400,4,2,0,100,1,0

[HitObjects]
256,192,1000,1,0,0:0:0:0:
256,192,20000,1,0,0:0:0:0:
";

    // 10s of each beat length
    for _ in 0..20 {
        let map: BeatmapData = content.parse().unwrap();
        assert_close(map.bpm(), 120.0);
    }
}
