/// Seconds on a host-supplied clock.
///
/// The engine sees two clocks through this type: the video playhead position
/// (owned by the host player, may jump on seek) and a monotonic "now" carried
/// by every tick (used for pause and presentation deadlines). Neither is ever
/// read from the system clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct Seconds(pub f64);

impl Seconds {
    /// Zero seconds.
    pub const ZERO: Self = Seconds(0.0);

    /// `true` when the two values differ by at most `epsilon`.
    pub fn approx_eq(self, other: Self, epsilon: f64) -> bool {
        (self.0 - other.0).abs() <= epsilon
    }

    /// This instant plus `delta` seconds.
    pub fn after(self, delta: f64) -> Self {
        Seconds(self.0 + delta)
    }

    /// `true` when this instant is at or past `deadline`.
    pub fn at_or_past(self, deadline: Seconds) -> bool {
        self.0 >= deadline.0
    }
}

impl From<f64> for Seconds {
    fn from(secs: f64) -> Self {
        Seconds(secs)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/time.rs"]
mod tests;
