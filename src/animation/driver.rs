use crate::config::Config;

/// Milliseconds of run duration contributed by each path vertex at speed 1.
///
/// Duration scales with vertex count and inversely with speed, independent of
/// geometric length: denser paths take proportionally longer at a given
/// speed setting.
const MS_PER_VERTEX: f64 = 20.0;

/// Whether the animation cursor is currently advancing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PlaybackState {
    /// Not animating; progress is frozen.
    #[default]
    Idle,
    /// Progress advances on every display-refresh tick.
    Running,
}

/// Advances the animation cursor over wall-clock time.
///
/// The driver is a pure state machine over caller-supplied millisecond
/// timestamps (the embedding's display-refresh callback passes them in), so
/// it contains no clock of its own and replays deterministically in tests.
///
/// Config is read live on every tick, never snapshotted at [`play`] time:
/// dragging the speed slider mid-run visibly changes the remaining duration,
/// and toggling loop mid-run takes effect when the current run completes.
///
/// All transitions are idempotent, so a stale frame callback firing after
/// [`pause`] or a path replacement is harmless.
///
/// [`play`]: Driver::play
/// [`pause`]: Driver::pause
#[derive(Clone, Copy, Debug, Default)]
pub struct Driver {
    state: PlaybackState,
    progress: f64,
    /// Timestamp of the start of the current run (or the last loop restart).
    /// `None` while Running means "origin is the next tick's timestamp".
    origin_ms: Option<f64>,
}

impl Driver {
    /// A driver in `Idle` with progress 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current playback state.
    pub fn state(self) -> PlaybackState {
        self.state
    }

    /// Current animation cursor, in vertex-index units (`0.0 ..= len - 1`).
    pub fn progress(self) -> f64 {
        self.progress
    }

    /// Total run duration in milliseconds for a path of `path_len` vertices
    /// at `speed`.
    pub fn total_duration_ms(path_len: usize, speed: f64) -> f64 {
        (path_len as f64 * MS_PER_VERTEX) / speed
    }

    /// Start animating. No-op unless the path has at least 2 vertices.
    /// Returns whether the driver is now running.
    pub fn play(&mut self, path_len: usize) -> bool {
        if path_len < 2 {
            return false;
        }
        self.state = PlaybackState::Running;
        // Elapsed time restarts at the next tick, even when resuming.
        self.origin_ms = None;
        tracing::debug!(path_len, "playback started");
        true
    }

    /// Stop advancing; progress is retained.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Running {
            tracing::debug!(progress = self.progress, "playback paused");
        }
        self.state = PlaybackState::Idle;
        self.origin_ms = None;
    }

    /// Stop advancing and rewind progress to 0.
    pub fn reset(&mut self) {
        self.state = PlaybackState::Idle;
        self.progress = 0.0;
        self.origin_ms = None;
    }

    /// The path was replaced or cleared: force `Idle` with progress 0.
    pub fn path_replaced(&mut self) {
        self.reset();
    }

    /// Advance one display-refresh tick at `timestamp_ms`.
    ///
    /// While `Running`, the first tick after [`Driver::play`] establishes the
    /// timing origin; later ticks map elapsed time onto progress in
    /// vertex-index units. When the run completes, a looping config restarts
    /// the origin at the current tick; otherwise the driver goes `Idle` with
    /// progress held at the last vertex. Returns the progress after the tick.
    pub fn tick(&mut self, timestamp_ms: f64, path_len: usize, config: &Config) -> f64 {
        if self.state != PlaybackState::Running {
            return self.progress;
        }
        if path_len < 2 {
            // Path shrank under us (replacement is expected to reset first).
            self.reset();
            return self.progress;
        }

        let origin = *self.origin_ms.get_or_insert(timestamp_ms);
        let elapsed = timestamp_ms - origin;
        let total_duration = Self::total_duration_ms(path_len, config.speed);
        let relative = (elapsed / total_duration).min(1.0);
        self.progress = relative * (path_len - 1) as f64;

        if elapsed >= total_duration {
            if config.looped {
                self.origin_ms = Some(timestamp_ms);
                tracing::debug!(timestamp_ms, "loop restarted");
            } else {
                self.state = PlaybackState::Idle;
                self.origin_ms = None;
                tracing::debug!(progress = self.progress, "playback finished");
            }
        }
        self.progress
    }
}
