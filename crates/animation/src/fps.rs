/// Length of one FPS sampling window, in milliseconds.
pub const FPS_WINDOW_MS: f64 = 1000.0;

/// Frames-per-second counter driven by caller-supplied timestamps.
///
/// Timestamps are milliseconds from any monotonic clock
/// (`performance.now()` in the browser).
#[derive(Debug, Clone)]
pub struct FpsCounter {
    last_time: f64,
    frame_count: u32,
}

impl FpsCounter {
    pub fn new(now_ms: f64) -> Self {
        Self {
            last_time: now_ms,
            frame_count: 0,
        }
    }

    /// Record one frame at `now_ms`.
    ///
    /// Returns the tally once at least a full window has elapsed since the
    /// last report, then starts a new window with the tally at zero.
    pub fn frame(&mut self, now_ms: f64) -> Option<u32> {
        self.frame_count += 1;

        if now_ms - self.last_time >= FPS_WINDOW_MS {
            let fps = self.frame_count;
            self.frame_count = 0;
            self.last_time = now_ms;
            tracing::trace!(fps, "fps window closed");
            return Some(fps);
        }
        None
    }

    /// Frames counted in the current window so far.
    pub fn pending_frames(&self) -> u32 {
        self.frame_count
    }

    /// Text shown in the on-page counter.
    pub fn label(fps: u32) -> String {
        format!("FPS: {fps}")
    }
}
