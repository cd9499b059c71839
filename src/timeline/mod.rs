//! Marker track model: snapshot types, layer layout, and tag colors.
//!
//! A scene's markers arrive as an immutable snapshot from the data layer.
//! Range markers (those with an end time) are packed into non-overlapping
//! visual layers; every distinct tag name gets a stable, visually distinct
//! color for the lifetime of the session.

mod colors;
mod layout;
mod markers;

pub use colors::{assign_colors, TagColor};
pub use layout::{layout, LayerAssignment};
pub use markers::{collect_ranges, LayoutError, Marker, RangeMarker};
