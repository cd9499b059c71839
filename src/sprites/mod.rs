//! Thumbnail sprite index parsed from WebVTT cue lists.
//!
//! A sprite cue list maps time ranges onto rectangles of a sprite sheet:
//!
//! ```text
//! WEBVTT
//!
//! 00:00:00.000 --> 00:00:05.000
//! scene_sprite.jpg#xywh=0,0,160,90
//! ```
//!
//! Cues with a malformed payload (no `#xywh=` fragment) are skipped without
//! failing the whole parse; the frames that do parse still index fine.

mod vtt;

use serde::Serialize;
use tracing::warn;

pub use vtt::format_timestamp;
use vtt::{parse_payload, parse_timestamp};

/// Errors from parsing a sprite cue list.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpriteError {
    #[error("sprite cue list is missing its WEBVTT header")]
    MissingHeader,
}

/// One time-keyed fragment of the sprite sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpriteFrame {
    pub start_seconds: f64,
    pub end_seconds: f64,
    pub image_url: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Ordered, time-keyed sprite frames for one scene.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpriteIndex {
    frames: Vec<SpriteFrame>,
}

impl SpriteIndex {
    /// An index with no frames; thumbnails are simply absent.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a WebVTT cue list.
    ///
    /// The first line must be `WEBVTT`. Each cue is a `start --> end`
    /// timing line followed by a `url#xywh=x,y,w,h` payload; cues whose
    /// timing or payload does not parse are skipped.
    pub fn parse_str(text: &str) -> Result<Self, SpriteError> {
        let mut lines = text.lines();
        match lines.next() {
            Some(header) if header.trim() == "WEBVTT" => {}
            _ => return Err(SpriteError::MissingHeader),
        }

        let mut frames = Vec::new();
        let mut pending: Option<(f64, f64)> = None;

        for (idx, raw) in lines.enumerate() {
            let line = raw.trim();
            // line 1 is the header
            let line_number = idx + 2;

            if line.is_empty() {
                continue;
            }

            if let Some((start_text, end_text)) = line.split_once(" --> ") {
                match (parse_timestamp(start_text), parse_timestamp(end_text)) {
                    (Some(start), Some(end)) => pending = Some((start, end)),
                    _ => {
                        warn!(line = line_number, text = line, "skipping unparseable cue timing");
                        pending = None;
                    }
                }
                continue;
            }

            let Some((start, end)) = pending.take() else {
                continue; // stray payload or cue identifier line
            };

            match parse_payload(line) {
                Some((image_url, x, y, width, height)) => frames.push(SpriteFrame {
                    start_seconds: start,
                    end_seconds: end,
                    image_url,
                    x,
                    y,
                    width,
                    height,
                }),
                None => {
                    warn!(line = line_number, text = line, "skipping cue with malformed payload");
                }
            }
        }

        frames.sort_by(|a, b| a.start_seconds.total_cmp(&b.start_seconds));
        Ok(Self { frames })
    }

    pub fn frames(&self) -> &[SpriteFrame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame covering `seconds` (`start <= t < end`), if any.
    pub fn frame_at(&self, seconds: f64) -> Option<&SpriteFrame> {
        let idx = self
            .frames
            .partition_point(|frame| frame.start_seconds <= seconds);
        let frame = &self.frames[idx.checked_sub(1)?];
        (seconds < frame.end_seconds).then_some(frame)
    }

    /// Sum of frame widths; drives the scrubber track width.
    pub fn total_width(&self) -> f64 {
        self.frames.iter().map(|frame| frame.width).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "WEBVTT\n\n\
        00:00:00.000 --> 00:00:05.000\n\
        sprite.jpg#xywh=0,0,160,90\n\n\
        00:00:05.000 --> 00:00:10.000\n\
        sprite.jpg#xywh=160,0,160,90\n\n\
        00:00:10.000 --> 00:00:15.000\n\
        sprite.jpg#xywh=320,0,160,90\n";

    #[test]
    fn parses_a_well_formed_cue_list() {
        let index = SpriteIndex::parse_str(SAMPLE).unwrap();
        assert_eq!(index.len(), 3);
        let first = &index.frames()[0];
        assert_eq!(first.start_seconds, 0.0);
        assert_eq!(first.end_seconds, 5.0);
        assert_eq!(first.image_url, "sprite.jpg");
        assert_eq!((first.x, first.y), (0.0, 0.0));
        assert_eq!((first.width, first.height), (160.0, 90.0));
    }

    #[test]
    fn missing_header_is_an_error() {
        assert_eq!(
            SpriteIndex::parse_str("not a cue list"),
            Err(SpriteError::MissingHeader)
        );
        assert_eq!(SpriteIndex::parse_str(""), Err(SpriteError::MissingHeader));
    }

    #[test]
    fn malformed_payload_skips_only_that_cue() {
        let text = "WEBVTT\n\n\
            00:00:00.000 --> 00:00:05.000\n\
            sprite.jpg#xywh=0,0,160,90\n\n\
            00:00:05.000 --> 00:00:10.000\n\
            sprite.jpg\n";
        let index = SpriteIndex::parse_str(text).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.frames()[0].start_seconds, 0.0);
    }

    #[test]
    fn unparseable_timing_skips_the_cue() {
        let text = "WEBVTT\n\n\
            banana --> 00:00:05.000\n\
            sprite.jpg#xywh=0,0,160,90\n\n\
            00:00:05.000 --> 00:00:10.000\n\
            sprite.jpg#xywh=160,0,160,90\n";
        let index = SpriteIndex::parse_str(text).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.frames()[0].start_seconds, 5.0);
    }

    #[test]
    fn frame_lookup_is_half_open() {
        let index = SpriteIndex::parse_str(SAMPLE).unwrap();
        assert_eq!(index.frame_at(0.0).unwrap().x, 0.0);
        assert_eq!(index.frame_at(4.999).unwrap().x, 0.0);
        assert_eq!(index.frame_at(5.0).unwrap().x, 160.0);
        assert_eq!(index.frame_at(12.0).unwrap().x, 320.0);
        assert!(index.frame_at(15.0).is_none());
        assert!(index.frame_at(-1.0).is_none());
    }

    #[test]
    fn lookup_tolerates_gaps() {
        let text = "WEBVTT\n\n\
            00:00:00.000 --> 00:00:05.000\n\
            sprite.jpg#xywh=0,0,160,90\n\n\
            00:00:10.000 --> 00:00:15.000\n\
            sprite.jpg#xywh=160,0,160,90\n";
        let index = SpriteIndex::parse_str(text).unwrap();
        assert!(index.frame_at(7.0).is_none());
        assert_eq!(index.frame_at(10.0).unwrap().x, 160.0);
    }

    #[test]
    fn total_width_sums_frames() {
        let index = SpriteIndex::parse_str(SAMPLE).unwrap();
        assert_eq!(index.total_width(), 480.0);
        assert_eq!(SpriteIndex::empty().total_width(), 0.0);
    }

    #[test]
    fn empty_index_has_no_frames() {
        let index = SpriteIndex::empty();
        assert!(index.is_empty());
        assert!(index.frame_at(0.0).is_none());
    }
}
