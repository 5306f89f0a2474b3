//! Traceline is a freehand motion-path engine.
//!
//! A caller draws a 2D polyline (pointer events filtered through a minimum
//! spacing threshold), animates a marker along it with configurable speed,
//! easing, and looping, and exports the equivalent declarative description
//! (an SVG path string embedded in a CSS `offset-path` animation).
//!
//! # Pipeline overview
//!
//! 1. **Capture**: pointer stream -> [`Polyline`] (lossy spacing filter)
//! 2. **Measure**: `Polyline -> DistanceTable` (cumulative arc length)
//! 3. **Drive**: display-refresh ticks -> progress in vertex-index units
//! 4. **Sample**: `Polyline + progress + Config -> Point` (arc-length
//!    parameterized, easing-aware)
//! 5. **Export**: `Polyline + Config -> String` (SVG path data / CSS snippet)
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: sampling and export are pure; the driver
//!   advances on caller-supplied timestamps, never an internal clock.
//! - **Degenerate inputs never fail**: empty or single-point paths,
//!   coincident vertices, and out-of-range progress all resolve to defined
//!   defaults instead of errors.
//! - **State is session-scoped**: [`Session`] owns path, config, and
//!   playback; rendering and UI wiring live in the embedding.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod config;
mod export;
mod foundation;
mod session;
mod stroke;

pub use animation::driver::{Driver, PlaybackState};
pub use animation::ease::Ease;
pub use animation::sampler::sample_position;
pub use config::Config;
pub use export::css::{css_snippet, path_data};
pub use foundation::core::{Canvas, Point, Polyline, Vec2};
pub use foundation::error::{TracelineError, TracelineResult};
pub use session::Session;
pub use stroke::arclen::DistanceTable;
pub use stroke::capture::{MIN_POINT_SPACING, begin_stroke, extend_stroke};
