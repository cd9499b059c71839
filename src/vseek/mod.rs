//! Virtual seek middleware.
//!
//! Sits between seek commands and the real media engine and makes a source
//! that cannot seek arbitrarily (a live-started stream, an on-the-fly
//! transcode) look seekable: a seek outside the buffered range re-issues
//! the source with a start offset and every time-valued observation is
//! shifted so callers keep seeing one continuous timeline.
//!
//! Rapid out-of-buffer seeks are coalesced by an explicit debounce state
//! machine, so a scrub across the track costs one reload, not one per pixel.

mod debounce;
mod engine;

use std::time::Instant;

use tracing::{debug, warn};

use debounce::ReloadDebounce;

pub use engine::{CaptionCue, MediaEngine, SourceRequest, TimeRange};

/// Observable middleware state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekOffsetState {
    /// Offset of the virtual timeline relative to the engine's source.
    pub offset_seconds: f64,
    /// A reload is pending in its debounce window or in flight.
    pub pending_reload: bool,
}

/// Makes a non-seekable source behave as though it were seekable.
#[derive(Debug)]
pub struct VirtualSeekMiddleware<E: MediaEngine> {
    engine: E,
    /// Caption cues in original scene time; reported shifted while offset.
    cues: Vec<CaptionCue>,
    /// Offset reported to observers (latest seek target).
    offset_seconds: f64,
    /// Offset baked into the source the engine currently holds.
    applied_offset: f64,
    debounce: ReloadDebounce,
    suppress_events: bool,
    deferred_play: bool,
    saved_rate: f64,
}

impl<E: MediaEngine> VirtualSeekMiddleware<E> {
    pub fn new(engine: E, cues: Vec<CaptionCue>) -> Self {
        let saved_rate = engine.playback_rate();
        Self {
            engine,
            cues,
            offset_seconds: 0.0,
            applied_offset: 0.0,
            debounce: ReloadDebounce::new(),
            suppress_events: false,
            deferred_play: false,
            saved_rate,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn offset_state(&self) -> SeekOffsetState {
        SeekOffsetState {
            offset_seconds: self.offset_seconds,
            pending_reload: self.debounce.is_pending() || self.debounce.is_in_flight(),
        }
    }

    pub fn is_offsetting(&self) -> bool {
        self.offset_seconds != 0.0
    }

    /// Whether the host should swallow play/pause/seeking events from the
    /// engine; true while a replacement source is loading.
    pub fn events_suppressed(&self) -> bool {
        self.suppress_events
    }

    /// Virtual duration: the engine's plus the current offset.
    pub fn duration(&self) -> f64 {
        self.engine.duration() + self.offset_seconds
    }

    /// Virtual playback position.
    pub fn current_time(&self) -> f64 {
        self.engine.current_time() + self.offset_seconds
    }

    /// Buffered ranges on the virtual timeline.
    pub fn buffered(&self) -> Vec<TimeRange> {
        self.engine
            .buffered()
            .iter()
            .map(|range| range.shifted(self.applied_offset))
            .collect()
    }

    /// Caption cues remapped against the engine's clock, so captions stay
    /// in sync however many times the source has been re-issued.
    pub fn cues(&self) -> Vec<CaptionCue> {
        self.cues
            .iter()
            .map(|cue| CaptionCue {
                start_seconds: cue.start_seconds - self.offset_seconds,
                end_seconds: cue.end_seconds - self.offset_seconds,
                text: cue.text.clone(),
            })
            .collect()
    }

    /// Seek the virtual timeline to `seconds`.
    ///
    /// Inside the buffered range this is a cheap engine seek. Outside it,
    /// the offset moves immediately and a coalesced source reload is
    /// scheduled; call [`poll`](Self::poll) to let it fire.
    pub fn set_current_time(&mut self, seconds: f64, now: Instant) {
        let relative = seconds - self.applied_offset;
        let in_buffer = self
            .engine
            .buffered()
            .iter()
            .any(|range| range.contains(relative));

        if in_buffer {
            self.debounce.cancel_pending();
            self.offset_seconds = self.applied_offset;
            self.engine.seek_to(relative);
            debug!(seconds, relative, "in-buffer seek");
        } else {
            self.offset_seconds = seconds;
            self.debounce.request(seconds, now);
            debug!(target = seconds, "seek outside buffer; reload scheduled");
        }
    }

    /// Fire a due reload, if any.
    ///
    /// Issues at most one `load` per seek burst, carrying the newest
    /// target; playback rate is captured here and restored on `canplay`.
    pub fn poll(&mut self, now: Instant) -> Option<SourceRequest> {
        let target = self.debounce.fire(now)?;

        self.saved_rate = self.engine.playback_rate();
        self.suppress_events = true;
        self.applied_offset = target;

        let request = SourceRequest {
            start_seconds: target,
        };
        self.engine.load(request);
        debug!(start = target, "reloading source");
        Some(request)
    }

    /// Instant at which [`poll`](Self::poll) will have work, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debounce.deadline()
    }

    /// Play, deferring past any in-flight reload.
    pub fn play(&mut self) {
        if self.debounce.is_in_flight() {
            self.deferred_play = true;
        } else {
            self.engine.play();
        }
    }

    pub fn pause(&mut self) {
        self.engine.pause();
    }

    pub fn set_playback_rate(&mut self, rate: f64) {
        self.saved_rate = rate;
        self.engine.set_playback_rate(rate);
    }

    pub fn playback_rate(&self) -> f64 {
        self.engine.playback_rate()
    }

    /// The engine reached `canplay` on the current source.
    ///
    /// Completes an in-flight reload: restores the playback rate, lifts
    /// event suppression, and replays one deferred `play`.
    pub fn on_can_play(&mut self) {
        if !self.debounce.is_in_flight() {
            return;
        }
        self.debounce.settle();
        self.suppress_events = false;
        self.engine.set_playback_rate(self.saved_rate);
        if std::mem::take(&mut self.deferred_play) {
            self.engine.play();
        }
        debug!(offset = self.applied_offset, "source reload complete");
    }

    /// The re-requested source failed to load.
    ///
    /// No automatic retry; the engine keeps its last good state and the
    /// next seek re-triggers the whole transition.
    pub fn on_reload_error(&mut self) {
        if !self.debounce.is_in_flight() {
            return;
        }
        self.debounce.settle();
        self.suppress_events = false;
        self.deferred_play = false;
        warn!("source reload failed; waiting for another seek");
    }
}
