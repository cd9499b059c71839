//! Scrubber position state and transition policy.

/// How the rendered indicator should animate toward a new position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Snap with no animation (first update, or right after a resize).
    None,
    /// Fast linear glide; used for continuous playback ticks.
    Linear,
    /// Ease-out; used for discrete jumps such as a seek.
    EaseOut,
}

/// A finalized position change for the render layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionUpdate {
    /// Pixel offset of the sprite strip from its resting point.
    pub position: f64,
    pub transition: Transition,
}

/// Playback clock snapshot, owned by the media engine and read here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackPosition {
    pub current_time_seconds: f64,
    pub duration_seconds: f64,
}

/// Private pointer-tracking cell.
///
/// Mutated synchronously inside the event handlers; observers only ever see
/// the finalized positions and actions, never per-pixel state.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct PointerTracking {
    pub dragging: bool,
    pub last_x: f64,
    pub start_x: f64,
    pub velocity: f64,
    /// A non-zero move has been seen since pointer-down.
    pub moved: bool,
    /// The one-shot scroll-started notification has fired.
    pub scroll_notified: bool,
}

impl PointerTracking {
    pub fn begin(&mut self, x: f64) {
        self.dragging = true;
        self.last_x = x;
        self.start_x = x;
        self.velocity = 0.0;
        self.moved = false;
        self.scroll_notified = false;
    }

    pub fn end(&mut self) {
        self.dragging = false;
    }
}
