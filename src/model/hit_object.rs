/// The timing of a hitobject.
///
/// Positions, curves, and hitsounds are of no interest for custom stats so
/// only start and end time are kept.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitObject {
    pub start_time: f64,
    pub end_time: f64,
}

impl HitObject {
    /// Create a hitobject without duration i.e. a circle or a slider whose
    /// end time cannot be known without its curve.
    pub const fn new(start_time: f64) -> Self {
        Self {
            start_time,
            end_time: start_time,
        }
    }

    /// Create a hitobject that lasts until `end_time` i.e. a spinner or a
    /// hold note.
    pub fn with_end_time(start_time: f64, end_time: f64) -> Self {
        Self {
            start_time,
            end_time: end_time.max(start_time),
        }
    }

    /// The duration of the hitobject.
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}
