use crate::{
    animation::ease::Ease,
    foundation::error::{TracelineError, TracelineResult},
};

/// Session-scoped animation and display settings.
///
/// A config is plain data: the UI collaborator may replace any field at any
/// time, and the animation driver reads the current values on every tick
/// rather than snapshotting them at play time. Changing `speed` or `loop`
/// mid-run therefore takes effect on the next frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// Playback speed multiplier; total run duration is
    /// `path.len() * 20 ms / speed`.
    #[serde(default = "default_speed")]
    pub speed: f64,
    /// Stroke width used when rendering the drawn path, in pixels.
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    /// Easing curve applied to normalized run time.
    #[serde(default)]
    pub easing: Ease,
    /// Restart from the first vertex when a run completes.
    #[serde(default, rename = "loop")]
    pub looped: bool,
    /// Draw the background grid.
    #[serde(default = "default_show_grid")]
    pub show_grid: bool,
}

fn default_speed() -> f64 {
    0.1
}

fn default_stroke_width() -> f64 {
    4.0
}

fn default_show_grid() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            speed: default_speed(),
            stroke_width: default_stroke_width(),
            easing: Ease::Linear,
            looped: false,
            show_grid: true,
        }
    }
}

impl Config {
    /// Validate numeric invariants.
    pub fn validate(&self) -> TracelineResult<()> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(TracelineError::config("speed must be finite and > 0"));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(TracelineError::config(
                "stroke_width must be finite and > 0",
            ));
        }
        Ok(())
    }
}
