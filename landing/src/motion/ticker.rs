//! Frame timestamps to frame deltas.

/// Turns `requestAnimationFrame` timestamps (ms) into deltas (s).
///
/// A gap longer than `lag_threshold` (tab in background, debugger pause) is
/// replaced by `adjusted_lag`, so animations resume where they left off
/// instead of jumping to the end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ticker {
    last_ms: Option<f64>,
    lag_threshold: f64,
    adjusted_lag: f64,
}

impl Ticker {
    pub fn new(lag_threshold: f64, adjusted_lag: f64) -> Self {
        Self {
            last_ms: None,
            lag_threshold,
            adjusted_lag: adjusted_lag.min(lag_threshold),
        }
    }

    /// Seconds since the previous frame; `0` for the first frame.
    pub fn delta(&mut self, now_ms: f64) -> f64 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0).max(0.0),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        if dt > self.lag_threshold { self.adjusted_lag } else { dt }
    }

    /// Forget the previous timestamp, e.g. after the loop was stopped.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(0.5, 0.033)
    }
}
