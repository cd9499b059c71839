//! Overlap-free layer packing for range markers.
//!
//! Layers are filled lowest-first, each taking the maximum-weight
//! (weight = duration) non-overlapping subset of the markers that remain.
//! The result is the minimum number of layers with the longest-running
//! markers packed closest to the track baseline.

use super::markers::RangeMarker;

/// Layer 0 is closest to the track baseline.
pub type LayerAssignment = Vec<Vec<RangeMarker>>;

/// Partition range markers into non-overlapping layers.
///
/// Each iteration solves weighted interval scheduling over the remaining
/// markers, assigns the winning subset to the next layer, and repeats. A
/// non-empty input always yields a non-empty winning subset, so at most
/// one iteration per input marker runs.
pub fn layout(markers: &[RangeMarker]) -> LayerAssignment {
    let mut remaining: Vec<RangeMarker> = markers.to_vec();
    let mut layers = LayerAssignment::new();

    while !remaining.is_empty() {
        remaining.sort_by(|a, b| {
            a.end_seconds
                .total_cmp(&b.end_seconds)
                .then(a.start_seconds.total_cmp(&b.start_seconds))
        });

        let chosen = max_weight_subset(&remaining);

        let mut layer = Vec::with_capacity(chosen.len());
        let mut rest = Vec::with_capacity(remaining.len() - chosen.len());
        for (idx, marker) in remaining.into_iter().enumerate() {
            if chosen.contains(&idx) {
                layer.push(marker);
            } else {
                rest.push(marker);
            }
        }

        layers.push(layer);
        remaining = rest;
    }

    layers
}

/// Classic weighted-interval-scheduling DP over markers sorted by end time.
///
/// Returns the indices (into the sorted slice) of a maximum-total-duration
/// subset of pairwise non-overlapping markers. Ties between including and
/// excluding a marker keep the marker, so of two equal-weight solutions the
/// one containing the later-ending marker wins.
fn max_weight_subset(sorted: &[RangeMarker]) -> Vec<usize> {
    let n = sorted.len();
    let ends: Vec<f64> = sorted.iter().map(|m| m.end_seconds).collect();

    // prev[j]: index of the latest marker ending at or before j's start
    let mut prev = Vec::with_capacity(n);
    for marker in sorted {
        let k = ends.partition_point(|&end| end <= marker.start_seconds);
        prev.push(k.checked_sub(1));
    }

    // best[j]: max weight using markers 0..=j
    let mut best = vec![0.0f64; n];
    for j in 0..n {
        let include = sorted[j].duration() + prev[j].map_or(0.0, |p| best[p]);
        let exclude = if j == 0 { 0.0 } else { best[j - 1] };
        best[j] = if include >= exclude { include } else { exclude };
    }

    // Walk backward with the same tie rule as the forward pass.
    let mut chosen = Vec::new();
    let mut j = n;
    while j > 0 {
        let idx = j - 1;
        let include = sorted[idx].duration() + prev[idx].map_or(0.0, |p| best[p]);
        let exclude = if idx == 0 { 0.0 } else { best[idx - 1] };
        if include >= exclude {
            chosen.push(idx);
            match prev[idx] {
                Some(p) => j = p + 1,
                None => break,
            }
        } else {
            j = idx;
        }
    }

    chosen.reverse();
    chosen
}
