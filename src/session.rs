//! Per-scene playback session.
//!
//! One `SceneSession` owns every piece of per-scene state: the marker
//! snapshot and its layer/color assignment, the sprite index, the scrubber,
//! and the virtual-seek middleware. A scene change drops the whole session
//! (discarding any pending reload with it) and builds a fresh one; nothing
//! is cached across scenes.

use std::collections::BTreeMap;
use std::time::Instant;

use tracing::warn;

use crate::scrubber::{PlaybackPosition, PointerEvent, PositionUpdate, ScrubAction, ScrubberController};
use crate::sprites::SpriteIndex;
use crate::timeline::{
    assign_colors, collect_ranges, layout, LayerAssignment, LayoutError, Marker, TagColor,
};
use crate::vseek::{CaptionCue, MediaEngine, SourceRequest, VirtualSeekMiddleware};

pub struct SceneSession<E: MediaEngine> {
    markers: Vec<Marker>,
    rejected: Vec<LayoutError>,
    layers: LayerAssignment,
    colors: BTreeMap<String, TagColor>,
    scrubber: ScrubberController,
    vseek: VirtualSeekMiddleware<E>,
}

impl<E: MediaEngine> SceneSession<E> {
    /// Build a session from one scene-load snapshot.
    ///
    /// Markers with invalid intervals are dropped and reported via
    /// [`rejected`](Self::rejected); a missing or unparseable sprite cue
    /// list leaves thumbnails absent. Neither is fatal.
    pub fn new(
        engine: E,
        markers: Vec<Marker>,
        tags: &[String],
        sprite_vtt: Option<&str>,
        cues: Vec<CaptionCue>,
    ) -> Self {
        let (ranges, rejected) = collect_ranges(&markers);
        let layers = layout(&ranges);
        let colors = assign_colors(tags);

        let sprites = match sprite_vtt {
            Some(text) => SpriteIndex::parse_str(text).unwrap_or_else(|err| {
                warn!(%err, "sprite cue list unusable; thumbnails disabled");
                SpriteIndex::empty()
            }),
            None => SpriteIndex::empty(),
        };

        Self {
            markers,
            rejected,
            layers,
            colors,
            scrubber: ScrubberController::new(sprites),
            vseek: VirtualSeekMiddleware::new(engine, cues),
        }
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Validation errors for markers dropped from the snapshot.
    pub fn rejected(&self) -> &[LayoutError] {
        &self.rejected
    }

    /// Range markers packed into non-overlapping layers (0 = baseline).
    pub fn layers(&self) -> &LayerAssignment {
        &self.layers
    }

    pub fn colors(&self) -> &BTreeMap<String, TagColor> {
        &self.colors
    }

    pub fn scrubber(&self) -> &ScrubberController {
        &self.scrubber
    }

    pub fn scrubber_mut(&mut self) -> &mut ScrubberController {
        &mut self.scrubber
    }

    pub fn vseek(&self) -> &VirtualSeekMiddleware<E> {
        &self.vseek
    }

    pub fn vseek_mut(&mut self) -> &mut VirtualSeekMiddleware<E> {
        &mut self.vseek
    }

    /// Route one pointer event: scrub starts pause playback, finalized
    /// positions become virtual seeks.
    pub fn handle_pointer(&mut self, event: PointerEvent, now: Instant) -> ScrubAction {
        let duration = self.vseek.duration();
        let action = self.scrubber.on_pointer(event, duration);
        match action {
            ScrubAction::ScrollStarted => self.vseek.pause(),
            ScrubAction::Seek(seconds) => self.vseek.set_current_time(seconds, now),
            ScrubAction::Continue => {}
        }
        action
    }

    /// Feed the engine's time-advance event to the scrubber.
    pub fn on_time_update(&mut self) -> Option<PositionUpdate> {
        let playback = PlaybackPosition {
            current_time_seconds: self.vseek.current_time(),
            duration_seconds: self.vseek.duration(),
        };
        self.scrubber.on_time_update(playback)
    }

    /// Drive the middleware's timer; fires a due source reload.
    pub fn tick(&mut self, now: Instant) -> Option<SourceRequest> {
        self.vseek.poll(now)
    }

    /// Pixel offset of every marker along the sprite strip, for the render
    /// layer to place tag chips.
    pub fn marker_offsets(&self) -> Vec<(f64, &Marker)> {
        let width = self.scrubber.track_width();
        let duration = self.vseek.duration();
        if width <= 0.0 || duration <= 0.0 {
            return Vec::new();
        }
        self.markers
            .iter()
            .map(|marker| (width * (marker.start_seconds / duration), marker))
            .collect()
    }

    /// Bump the playback rate by half a step.
    pub fn rate_up(&mut self) {
        let rate = self.vseek.playback_rate();
        self.vseek.set_playback_rate(rate + 0.5);
    }

    /// Drop the playback rate by half a step.
    pub fn rate_down(&mut self) {
        let rate = self.vseek.playback_rate();
        self.vseek.set_playback_rate(rate - 0.5);
    }

    pub fn rate_reset(&mut self) {
        self.vseek.set_playback_rate(1.0);
    }
}
