use crate::{
    animation::driver::{Driver, PlaybackState},
    animation::sampler::sample_position,
    config::Config,
    export::css,
    foundation::core::{Canvas, Point, Polyline},
    foundation::error::TracelineResult,
    stroke::capture,
};

/// One editing session: the drawn path, its configuration, and playback.
///
/// A session is the explicit context struct the UI collaborator drives
/// through pointer events, control changes, and one tick per display-refresh
/// frame. All state is scoped to the session and discarded on drop; there is
/// no cross-session sharing and exactly one mutator, so no locking.
///
/// The renderer is expected to be a pure function of `(path, config,
/// progress)`, re-invoked whenever [`Session::take_redraw`] reports a change.
#[derive(Clone, Debug)]
pub struct Session {
    path: Polyline,
    config: Config,
    driver: Driver,
    drawing: bool,
    canvas: Canvas,
    /// Opaque reference to an externally supplied marker image. Visual only;
    /// never consumed by the path math.
    marker_source: Option<String>,
    needs_redraw: bool,
}

impl Session {
    /// Create an empty session over a rendering surface.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            path: Polyline::new(),
            config: Config::default(),
            driver: Driver::new(),
            drawing: false,
            canvas,
            marker_source: None,
            needs_redraw: true,
        }
    }

    /// The drawn polyline.
    pub fn path(&self) -> &Polyline {
        &self.path
    }

    /// Current settings.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the settings wholesale after validation. Takes effect on the
    /// next tick; the driver never snapshots config at play time.
    pub fn set_config(&mut self, config: Config) -> TracelineResult<()> {
        config.validate()?;
        self.config = config;
        self.needs_redraw = true;
        Ok(())
    }

    /// Current playback state.
    pub fn state(&self) -> PlaybackState {
        self.driver.state()
    }

    /// Current animation cursor in vertex-index units.
    pub fn progress(&self) -> f64 {
        self.driver.progress()
    }

    /// Rendering-surface dimensions.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Whether a stroke is currently being captured.
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Pointer pressed: replace the path wholesale with a one-point stroke
    /// and rewind playback.
    pub fn pointer_down(&mut self, p: Point) {
        self.drawing = true;
        self.path = capture::begin_stroke(p);
        self.driver.path_replaced();
        self.needs_redraw = true;
        tracing::debug!(x = p.x, y = p.y, "stroke started");
    }

    /// Pointer moved: extend the stroke if capturing and the sample clears
    /// the minimum spacing. Returns whether the point was accepted.
    pub fn pointer_move(&mut self, p: Point) -> bool {
        if !self.drawing {
            return false;
        }
        let accepted = capture::extend_stroke(&mut self.path, p);
        if accepted {
            self.needs_redraw = true;
        }
        accepted
    }

    /// Pointer released or left the surface: stop capturing. Idempotent.
    pub fn pointer_up(&mut self) {
        if self.drawing {
            tracing::debug!(vertices = self.path.len(), "stroke finished");
        }
        self.drawing = false;
    }

    /// Discard the path and rewind playback.
    pub fn clear(&mut self) {
        self.path = Polyline::new();
        self.drawing = false;
        self.driver.path_replaced();
        self.needs_redraw = true;
    }

    /// Start playback. No-op unless the path has at least 2 vertices.
    /// Returns whether the session is now running.
    pub fn play(&mut self) -> bool {
        self.driver.play(self.path.len())
    }

    /// Pause playback, retaining progress.
    pub fn pause(&mut self) {
        self.driver.pause();
    }

    /// Stop playback and rewind progress to 0.
    pub fn reset(&mut self) {
        self.driver.reset();
        self.needs_redraw = true;
    }

    /// Advance one display-refresh tick and return the marker position for
    /// this frame. The driver reads the live config each tick.
    pub fn tick(&mut self, timestamp_ms: f64) -> Point {
        let before = self.driver.progress();
        let progress = self.driver.tick(timestamp_ms, self.path.len(), &self.config);
        if progress != before {
            self.needs_redraw = true;
        }
        sample_position(&self.path, progress, &self.config)
    }

    /// Marker position at the current progress, without advancing time.
    pub fn marker_position(&self) -> Point {
        sample_position(&self.path, self.driver.progress(), &self.config)
    }

    /// Resize the rendering surface. Path coordinates and the playback
    /// timing origin are untouched; the session only schedules a redraw.
    pub fn resize(&mut self, canvas: Canvas) {
        self.canvas = canvas;
        self.needs_redraw = true;
    }

    /// Set or clear the marker image reference.
    pub fn set_marker_source(&mut self, source: Option<String>) {
        self.marker_source = source;
        self.needs_redraw = true;
    }

    /// The marker image reference, if any.
    pub fn marker_source(&self) -> Option<&str> {
        self.marker_source.as_deref()
    }

    /// Consume the redraw flag. Returns `true` when path, config, progress,
    /// surface, or marker changed since the last call.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// SVG path data for the current path.
    pub fn export_path_data(&self) -> String {
        css::path_data(&self.path)
    }

    /// CSS animation snippet for the current path and config.
    pub fn export_css(&self) -> String {
        css::css_snippet(&self.path, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(Canvas { width: 800, height: 600 })
    }

    #[test]
    fn pointer_down_replaces_path_and_rewinds() {
        let mut s = session();
        s.pointer_down(Point::new(0.0, 0.0));
        s.pointer_move(Point::new(50.0, 0.0));
        s.pointer_up();
        assert_eq!(s.path().len(), 2);
        s.play();
        s.tick(0.0);
        s.tick(10.0);
        assert!(s.progress() > 0.0);

        s.pointer_down(Point::new(100.0, 100.0));
        assert_eq!(s.path().len(), 1);
        assert_eq!(s.progress(), 0.0);
        assert_eq!(s.state(), PlaybackState::Idle);
    }

    #[test]
    fn moves_are_ignored_while_not_drawing() {
        let mut s = session();
        assert!(!s.pointer_move(Point::new(10.0, 10.0)));
        assert!(s.path().is_empty());
    }

    #[test]
    fn play_is_a_noop_for_short_paths() {
        let mut s = session();
        assert!(!s.play());
        s.pointer_down(Point::new(0.0, 0.0));
        assert!(!s.play());
        assert_eq!(s.state(), PlaybackState::Idle);
    }

    #[test]
    fn resize_touches_neither_path_nor_timing() {
        let mut s = session();
        s.pointer_down(Point::new(0.0, 0.0));
        s.pointer_move(Point::new(50.0, 0.0));
        s.pointer_up();
        let before = s.path().clone();

        s.take_redraw();
        s.resize(Canvas { width: 100, height: 100 });
        assert_eq!(s.path(), &before);
        assert!(s.take_redraw());
        assert_eq!(s.canvas(), Canvas { width: 100, height: 100 });
    }

    #[test]
    fn set_config_validates() {
        let mut s = session();
        let bad = Config {
            speed: -1.0,
            ..Config::default()
        };
        assert!(s.set_config(bad).is_err());
        // Rejected configs leave the session untouched.
        assert_eq!(s.config(), &Config::default());
    }

    #[test]
    fn marker_position_on_empty_session_is_origin() {
        let s = session();
        assert_eq!(s.marker_position(), Point::ZERO);
    }

    #[test]
    fn redraw_flag_tracks_mutations() {
        let mut s = session();
        assert!(s.take_redraw()); // initial frame
        assert!(!s.take_redraw());
        s.set_marker_source(Some("marker.png".into()));
        assert!(s.take_redraw());
        assert_eq!(s.marker_source(), Some("marker.png"));
    }
}
