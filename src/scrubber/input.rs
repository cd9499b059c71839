//! Pointer input events and the actions they produce.

/// What the pointer was over when it was released.
///
/// Hit testing happens in the render layer; the controller only needs to
/// know which timeline element, if any, absorbed the click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitTarget {
    /// A sprite thumbnail, by index into the sprite index.
    SpriteFrame(usize),
    /// A marker tag chip carrying its own playback time.
    Marker { seconds: f64 },
    /// Bare track background.
    Track,
}

/// A pointer gesture event, unified over mouse and touch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down {
        x: f64,
    },
    Move {
        x: f64,
        /// Per-event horizontal movement, as reported by the input source.
        movement_x: f64,
    },
    Up {
        x: f64,
        target: Option<HitTarget>,
    },
}

/// Result of processing a pointer event.
///
/// Returned to the caller, which wires seeks and pauses to the media
/// engine; the controller itself never talks to the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrubAction {
    /// Nothing for the caller to do.
    Continue,
    /// The user started scrubbing; callers typically pause playback.
    ScrollStarted,
    /// Seek playback to the given time.
    Seek(f64),
}
