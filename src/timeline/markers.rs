//! Scene marker snapshot model.
//!
//! Markers are created and edited elsewhere; this module only consumes a
//! per-scene snapshot and never writes back.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Errors raised while preparing markers for layout.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("marker '{id}' has a non-positive interval [{start}, {end})")]
    InvalidInterval { id: String, start: f64, end: f64 },
}

/// A timeline marker as delivered by the data layer.
///
/// A marker without an end time is a *point marker*, rendered as a fixed
/// dot; one with an end time is a *range marker* and participates in layer
/// packing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub start_seconds: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_seconds: Option<f64>,
    pub primary_tag: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Marker {
    pub fn is_range(&self) -> bool {
        self.end_seconds.is_some()
    }

    /// Display label: the title, falling back to the primary tag name.
    pub fn label(&self) -> &str {
        if self.title.is_empty() {
            &self.primary_tag
        } else {
            &self.title
        }
    }
}

/// A validated range marker (`start < end`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeMarker {
    pub id: String,
    pub title: String,
    pub start_seconds: f64,
    pub end_seconds: f64,
    pub primary_tag: String,
}

impl RangeMarker {
    /// Validate a snapshot marker.
    ///
    /// Returns `Ok(None)` for point markers, `Ok(Some)` for well-formed
    /// range markers, and `InvalidInterval` when the end does not lie
    /// strictly after the start.
    pub fn from_marker(marker: &Marker) -> Result<Option<Self>, LayoutError> {
        let Some(end) = marker.end_seconds else {
            return Ok(None);
        };

        if end <= marker.start_seconds {
            return Err(LayoutError::InvalidInterval {
                id: marker.id.clone(),
                start: marker.start_seconds,
                end,
            });
        }

        Ok(Some(RangeMarker {
            id: marker.id.clone(),
            title: marker.title.clone(),
            start_seconds: marker.start_seconds,
            end_seconds: end,
            primary_tag: marker.primary_tag.clone(),
        }))
    }

    pub fn duration(&self) -> f64 {
        self.end_seconds - self.start_seconds
    }

    /// Half-open interval overlap: `[start, end)`.
    pub fn overlaps(&self, other: &RangeMarker) -> bool {
        self.start_seconds < other.end_seconds && other.start_seconds < self.end_seconds
    }
}

/// Split a snapshot into range markers and per-marker validation errors.
///
/// Invalid markers are reported and dropped; the scene still renders with
/// the remaining markers.
pub fn collect_ranges(markers: &[Marker]) -> (Vec<RangeMarker>, Vec<LayoutError>) {
    let mut ranges = Vec::new();
    let mut rejected = Vec::new();

    for marker in markers {
        match RangeMarker::from_marker(marker) {
            Ok(Some(range)) => ranges.push(range),
            Ok(None) => {} // point marker, rendered independently
            Err(err) => {
                warn!(marker = %marker.id, %err, "dropping marker with invalid interval");
                rejected.push(err);
            }
        }
    }

    (ranges, rejected)
}
