//! Scene playback timeline engine.
//!
//! This crate implements the logic behind a scene player's timeline overlay:
//!
//! - `timeline`: marker snapshot model, overlap-free layer packing, and
//!   deterministic tag coloring
//! - `sprites`: thumbnail sprite index parsed from WebVTT cue lists
//! - `scrubber`: drag/momentum scrubber mapping pixels to playback time
//! - `vseek`: virtual-seek middleware that makes non-seekable sources
//!   behave as though they were seekable
//! - `session`: per-scene composition of all of the above
//!
//! The media engine itself (decode, render, buffering) is out of scope; it
//! is driven through the [`vseek::MediaEngine`] trait and feeds its events
//! back through the session.
//!
//! # Usage
//!
//! ```no_run
//! use playhead::session::SceneSession;
//! use playhead::timeline::Marker;
//! # use playhead::vseek::{MediaEngine, SourceRequest, TimeRange};
//! # struct Engine;
//! # impl MediaEngine for Engine {
//! #     fn play(&mut self) {}
//! #     fn pause(&mut self) {}
//! #     fn seek_to(&mut self, _: f64) {}
//! #     fn set_playback_rate(&mut self, _: f64) {}
//! #     fn playback_rate(&self) -> f64 { 1.0 }
//! #     fn duration(&self) -> f64 { 0.0 }
//! #     fn current_time(&self) -> f64 { 0.0 }
//! #     fn buffered(&self) -> Vec<TimeRange> { vec![] }
//! #     fn load(&mut self, _: SourceRequest) {}
//! # }
//!
//! let markers: Vec<Marker> = serde_json::from_str(r#"[]"#).unwrap();
//! let tags: Vec<String> = Vec::new();
//! let session = SceneSession::new(Engine, markers, &tags, None, Vec::new());
//! assert!(session.layers().is_empty());
//! ```

pub mod scrubber;
pub mod session;
pub mod sprites;
pub mod timeline;
pub mod vseek;

/// Version string shown by the CLI.
///
/// Dev builds carry the git SHA and build date; builds with the `release`
/// feature carry the build date only.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("PLAYHEAD_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("PLAYHEAD_BUILD_DATE"),
    ")"
);
