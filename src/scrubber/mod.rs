//! Drag/momentum scrubber over the sprite strip.
//!
//! The controller owns a virtual horizontal position for the sprite strip
//! (pixels of offset from the track midpoint) and reconciles three inputs:
//! playback clock updates, pointer drags, and page-step buttons. Pointer
//! state lives in a private cell updated synchronously per event; callers
//! only see finalized [`PositionUpdate`]s and [`ScrubAction`]s.
//!
//! While a drag is active, playback-driven repositioning is suppressed;
//! releasing the pointer finalizes the accumulated position and emits one
//! seek.

mod input;
mod state;

use tracing::trace;

use crate::sprites::{SpriteFrame, SpriteIndex};

pub use input::{HitTarget, PointerEvent, ScrubAction};
pub use state::{PlaybackPosition, PositionUpdate, Transition};

use state::PointerTracking;

/// Pointer speed (px per event) above which a release keeps its momentum.
const MOMENTUM_THRESHOLD: f64 = 25.0;
/// Multiplier projecting release velocity into a fling distance.
const MOMENTUM_PROJECTION: f64 = 10.0;
/// Total pointer travel below which a release counts as a click.
const CLICK_SLOP_PX: f64 = 1.0;
/// Playback updates moving the strip less than this are dropped.
const MIN_REDRAW_DELTA_PX: f64 = 1.0;
/// Clock deltas at or under this animate linearly; larger ones ease out.
const CONTINUOUS_TICK_SECS: f64 = 1.0;

/// Stateful scrubber interaction engine.
#[derive(Debug, Clone)]
pub struct ScrubberController {
    sprites: SpriteIndex,
    track_width: f64,
    position: f64,
    last_media_time: f64,
    has_position: bool,
    snap_next: bool,
    pointer: PointerTracking,
}

impl ScrubberController {
    /// Build a controller over a parsed sprite index. The track width is
    /// the combined width of all sprite frames; with no sprite data the
    /// track is zero-width and position math is a no-op.
    pub fn new(sprites: SpriteIndex) -> Self {
        let track_width = sprites.total_width();
        Self {
            sprites,
            track_width,
            position: track_width / 2.0,
            last_media_time: 0.0,
            has_position: false,
            snap_next: false,
            pointer: PointerTracking::default(),
        }
    }

    pub fn sprites(&self) -> &SpriteIndex {
        &self.sprites
    }

    pub fn track_width(&self) -> f64 {
        self.track_width
    }

    /// Current strip offset in pixels.
    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.pointer.dragging
    }

    fn midpoint(&self) -> f64 {
        self.track_width / 2.0
    }

    fn clamped(&self, position: f64) -> f64 {
        position.clamp(self.midpoint() - self.track_width, self.midpoint())
    }

    /// Adopt a new track width after a layout change.
    ///
    /// The next playback update snaps instead of animating, so the strip
    /// does not visibly glide across a resize.
    pub fn set_track_width(&mut self, width: f64) {
        self.track_width = width.max(0.0);
        self.position = self.clamped(self.position);
        self.snap_next = true;
    }

    /// Reposition the strip from a playback clock tick.
    ///
    /// Returns the finalized position for the render layer, or `None` when
    /// nothing worth redrawing happened (sub-pixel delta, an active drag,
    /// or no sprite data yet).
    pub fn on_time_update(&mut self, playback: PlaybackPosition) -> Option<PositionUpdate> {
        if self.track_width <= 0.0 || playback.duration_seconds <= 0.0 {
            return None;
        }
        if self.pointer.dragging {
            return None;
        }

        let fraction = playback.current_time_seconds / playback.duration_seconds;
        let target = self.clamped(self.midpoint() - fraction * self.track_width);

        if self.has_position && (target - self.position).abs() < MIN_REDRAW_DELTA_PX {
            return None;
        }

        let transition = if !self.has_position || self.snap_next {
            Transition::None
        } else if (playback.current_time_seconds - self.last_media_time).abs()
            <= CONTINUOUS_TICK_SECS
        {
            Transition::Linear
        } else {
            Transition::EaseOut
        };

        self.position = target;
        self.last_media_time = playback.current_time_seconds;
        self.has_position = true;
        self.snap_next = false;

        Some(PositionUpdate {
            position: self.position,
            transition,
        })
    }

    /// Process one pointer event against the scene duration.
    pub fn on_pointer(&mut self, event: PointerEvent, duration_seconds: f64) -> ScrubAction {
        match event {
            PointerEvent::Down { x } => {
                self.pointer.begin(x);
                ScrubAction::Continue
            }
            PointerEvent::Move { x, movement_x } => self.handle_move(x, movement_x),
            PointerEvent::Up { x, target } => self.handle_up(x, target, duration_seconds),
        }
    }

    fn handle_move(&mut self, x: f64, movement_x: f64) -> ScrubAction {
        if !self.pointer.dragging {
            return ScrubAction::Continue;
        }

        let delta = x - self.pointer.last_x;
        // Some input sources fire a move with no movement right after the
        // press; swallowing it keeps a plain click from pausing playback.
        if !self.pointer.moved && delta == 0.0 {
            return ScrubAction::Continue;
        }

        self.pointer.moved = true;
        self.pointer.last_x = x;
        self.pointer.velocity = movement_x;

        if self.track_width > 0.0 {
            self.position += delta;
            trace!(position = self.position, delta, "scrub drag");

            if !self.pointer.scroll_notified {
                self.pointer.scroll_notified = true;
                return ScrubAction::ScrollStarted;
            }
        }
        ScrubAction::Continue
    }

    fn handle_up(&mut self, x: f64, target: Option<HitTarget>, duration_seconds: f64) -> ScrubAction {
        if !self.pointer.dragging {
            return ScrubAction::Continue;
        }
        self.pointer.end();

        let travel = (x - self.pointer.start_x).abs();
        if travel < CLICK_SLOP_PX {
            return self.handle_click(target);
        }

        if self.track_width <= 0.0 {
            return ScrubAction::Continue;
        }

        // A fast release keeps flying for a bit.
        if self.pointer.velocity.abs() > MOMENTUM_THRESHOLD {
            self.position += self.pointer.velocity * MOMENTUM_PROJECTION;
        }
        self.position = self.clamped(self.position);

        let fraction = ((self.midpoint() - self.position) / self.track_width).clamp(0.0, 1.0);
        ScrubAction::Seek(fraction * duration_seconds)
    }

    fn handle_click(&self, target: Option<HitTarget>) -> ScrubAction {
        match target {
            Some(HitTarget::Marker { seconds }) => ScrubAction::Seek(seconds),
            Some(HitTarget::SpriteFrame(index)) => match self.sprites.frames().get(index) {
                Some(frame) => ScrubAction::Seek(frame.start_seconds),
                None => ScrubAction::Continue,
            },
            Some(HitTarget::Track) | None => ScrubAction::Continue,
        }
    }

    /// Step the strip back one viewport width (toward earlier times).
    pub fn page_back(&mut self, viewport_width: f64) -> ScrubAction {
        self.page_by(viewport_width)
    }

    /// Step the strip forward one viewport width (toward later times).
    pub fn page_forward(&mut self, viewport_width: f64) -> ScrubAction {
        self.page_by(-viewport_width)
    }

    fn page_by(&mut self, delta: f64) -> ScrubAction {
        if self.track_width <= 0.0 {
            return ScrubAction::Continue;
        }
        self.position = self.clamped(self.position + delta);
        ScrubAction::ScrollStarted
    }

    /// Thumbnail fragment covering the given playback time.
    pub fn thumbnail_at(&self, seconds: f64) -> Option<&SpriteFrame> {
        self.sprites.frame_at(seconds)
    }
}
