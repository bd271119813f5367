use crate::model::{control_point::TimingPoint, hit_object::HitObject};

/// The BPM of the beat length that lasts the longest until the last
/// hitobject ends.
pub fn most_common_bpm(last_hit_object: Option<&HitObject>, timing_points: &[TimingPoint]) -> f64 {
    // Slider end times are unknown at this point so sliders count as
    // ending where they start.
    let last_time = last_hit_object
        .map(|h| h.end_time)
        .or_else(|| timing_points.last().map(|t| t.time))
        .unwrap_or(0.0);

    let mut durations = BeatLenDurations::new(last_time);

    for (i, curr) in timing_points.iter().enumerate() {
        // osu!stable forced the first timing point to start at 0
        let start_time = if i == 0 { 0.0 } else { curr.time };

        let end_time = timing_points
            .get(i + 1)
            .map_or(last_time, |next| next.time);

        durations.add(curr.beat_len, start_time, end_time);
    }

    durations
        .most_common()
        .map_or(TimingPoint::DEFAULT_BPM, |beat_len| 60_000.0 / beat_len)
}

/// Rounded beat lengths and their cumulative duration in order of first
/// appearance.
struct BeatLenDurations {
    last_time: f64,
    durations: Vec<(u64, f64)>,
}

impl BeatLenDurations {
    const fn new(last_time: f64) -> Self {
        Self {
            last_time,
            durations: Vec::new(),
        }
    }

    fn add(&mut self, beat_len: f64, start_time: f64, end_time: f64) {
        let bits = ((1000.0 * beat_len).round() / 1000.0).to_bits();

        let idx = match self.durations.iter().position(|(b, _)| *b == bits) {
            Some(idx) => idx,
            None => {
                self.durations.push((bits, 0.0));

                self.durations.len() - 1
            }
        };

        // timing points after the last hitobject don't count
        if start_time <= self.last_time {
            self.durations[idx].1 += end_time - start_time;
        }
    }

    /// On ties the beat length that appeared first wins.
    fn most_common(self) -> Option<f64> {
        self.durations
            .into_iter()
            .fold(None, |best, (bits, duration)| match best {
                Some((_, best_duration)) if best_duration >= duration => best,
                _ => Some((bits, duration)),
            })
            .map(|(bits, _)| f64::from_bits(bits))
    }
}
