//! Deterministic, visually-distinct tag colors.
//!
//! Every tag name hashes to a stable base hue; a spacing pass then pushes
//! hues apart until circularly-adjacent tags sit at least `delta_min(n)`
//! degrees from each other. The assignment depends only on the set of tag
//! names, never on their order, so a tag keeps its color across renders.

use std::collections::BTreeMap;

use serde::Serialize;
use sha2::{Digest, Sha256};

const SATURATION: f64 = 0.65;
const VALUE: f64 = 0.95;
const ALPHA: f64 = 0.6;
const MAX_SEPARATION: f64 = 35.0;

/// A stable color assignment for one tag name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagColor {
    pub tag: String,
    pub hue_degrees: f64,
    pub rgba: String,
}

/// Assign a color to every distinct tag name.
///
/// An empty set yields an empty map. When `n * delta_min(n)` exceeds a full
/// circle the separation guarantee degrades to the best monotonic spacing
/// achievable; separation is otherwise at least `delta_min(n)` between all
/// circularly-adjacent hues.
pub fn assign_colors(tags: &[String]) -> BTreeMap<String, TagColor> {
    let mut names: Vec<&str> = tags.iter().map(String::as_str).collect();
    names.sort_unstable();
    names.dedup();

    if names.is_empty() {
        return BTreeMap::new();
    }

    let n = names.len();
    let separation = delta_min(n);

    // Sort by base hue; tag name breaks hash-collision ties deterministically.
    let mut entries: Vec<(&str, f64)> = names.iter().map(|&tag| (tag, base_hue(tag))).collect();
    entries.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(b.0)));

    let mut hues: Vec<f64> = entries.iter().map(|&(_, hue)| hue).collect();

    // Unwrap the circle into a monotonically increasing sequence.
    for i in 1..n {
        if hues[i] <= hues[i - 1] {
            hues[i] += 360.0;
        }
    }

    // Push each hue forward to clear its predecessor.
    for i in 1..n {
        let floor = hues[i - 1] + separation;
        if hues[i] < floor {
            hues[i] = floor;
        }
    }

    // Close the circle: if the gap from the last hue back around to the
    // first is too small, split the deficit between the two ends. The first
    // hue may not move past the clearance it owes the second; the rest of
    // the correction pulls the last hue down, rippling backward so no
    // already-cleared gap collapses. The ripple stops at the first hue, so
    // an over-full circle degrades to best-effort spacing.
    if n > 1 {
        let wrap_gap = hues[0] + 360.0 - hues[n - 1];
        if wrap_gap < separation {
            let deficit = separation - wrap_gap;
            let first_headroom = (hues[1] - separation - hues[0]).max(0.0);
            hues[0] += (deficit / 2.0).min(first_headroom);

            let mut ceiling = hues[0] + 360.0 - separation;
            for i in (1..n).rev() {
                if hues[i] <= ceiling {
                    break;
                }
                hues[i] = ceiling;
                ceiling = hues[i] - separation;
            }
        }
    }

    entries
        .iter()
        .zip(hues)
        .map(|(&(tag, _), hue)| {
            let hue = hue.rem_euclid(360.0);
            let color = TagColor {
                tag: tag.to_string(),
                hue_degrees: hue,
                rgba: format_rgba(hue),
            };
            (tag.to_string(), color)
        })
        .collect()
}

/// Stable pseudo-random hue for a tag name: its SHA-256 digest, read as an
/// unsigned 256-bit integer, reduced mod 360.
fn base_hue(tag: &str) -> f64 {
    let digest = Sha256::digest(tag.as_bytes());
    let residue = digest
        .iter()
        .fold(0u32, |acc, &byte| (acc * 256 + byte as u32) % 360);
    residue as f64
}

/// Minimum angular separation for `n` tags, relaxing as the circle fills.
fn delta_min(n: usize) -> f64 {
    let scaling = if n <= 4 {
        0.8
    } else if n <= 10 {
        0.6
    } else {
        0.4
    };
    (360.0 / n as f64 * scaling).min(MAX_SEPARATION)
}

fn format_rgba(hue: f64) -> String {
    let (r, g, b) = hsv_to_rgb(hue, SATURATION, VALUE);
    let alpha = (ALPHA * 255.0).round() as u8;
    format!("#{r:02x}{g:02x}{b:02x}{alpha:02x}")
}

fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> (u8, u8, u8) {
    let sector = hue.rem_euclid(360.0) / 60.0;
    let fraction = sector - sector.floor();

    let p = value * (1.0 - saturation);
    let q = value * (1.0 - fraction * saturation);
    let t = value * (1.0 - (1.0 - fraction) * saturation);

    let (r, g, b) = match sector.floor() as u32 % 6 {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };

    (to_byte(r), to_byte(g), to_byte(b))
}

fn to_byte(channel: f64) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    /// Smallest circular distance between two hues in degrees.
    fn circular_distance(a: f64, b: f64) -> f64 {
        let diff = (a - b).rem_euclid(360.0);
        diff.min(360.0 - diff)
    }

    fn adjacent_separations(colors: &BTreeMap<String, TagColor>) -> Vec<f64> {
        let mut hues: Vec<f64> = colors.values().map(|c| c.hue_degrees).collect();
        hues.sort_by(f64::total_cmp);
        let n = hues.len();
        (0..n)
            .map(|i| circular_distance(hues[i], hues[(i + 1) % n]))
            .collect()
    }

    #[test]
    fn empty_tag_set_is_an_empty_map() {
        assert!(assign_colors(&[]).is_empty());
    }

    #[test]
    fn base_hue_is_stable() {
        assert_eq!(base_hue("alpha"), base_hue("alpha"));
        assert!(base_hue("alpha") >= 0.0 && base_hue("alpha") < 360.0);
    }

    #[test]
    fn delta_min_scales_with_count() {
        assert_eq!(delta_min(3), 35.0); // 96 capped at 35
        assert_eq!(delta_min(2), 35.0);
        assert!((delta_min(8) - 27.0).abs() < 1e-9); // 360/8 * 0.6
        assert!((delta_min(20) - 7.2).abs() < 1e-9); // 360/20 * 0.4
    }

    #[test]
    fn assignment_ignores_input_order() {
        let forward = assign_colors(&tags(&["a", "b", "c"]));
        let backward = assign_colors(&tags(&["c", "b", "a"]));
        assert_eq!(forward, backward);
    }

    #[test]
    fn duplicate_names_collapse() {
        let deduped = assign_colors(&tags(&["a", "a", "b"]));
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped, assign_colors(&tags(&["a", "b"])));
    }

    #[test]
    fn three_tags_sit_at_least_35_degrees_apart() {
        let colors = assign_colors(&tags(&["action", "intro", "credits"]));
        for separation in adjacent_separations(&colors) {
            assert!(separation >= 35.0 - 1e-9, "separation {separation} < 35");
        }
    }

    #[test]
    fn ten_tags_keep_their_minimum_separation() {
        let names: Vec<String> = (0..10).map(|i| format!("tag-{i}")).collect();
        let colors = assign_colors(&names);
        let expected = delta_min(10);
        for separation in adjacent_separations(&colors) {
            assert!(
                separation >= expected - 1e-9,
                "separation {separation} < {expected}"
            );
        }
    }

    #[test]
    fn rgba_is_hex_with_fixed_alpha() {
        let colors = assign_colors(&tags(&["solo"]));
        let color = &colors["solo"];
        assert_eq!(color.rgba.len(), 9);
        assert!(color.rgba.starts_with('#'));
        assert!(color.rgba.ends_with("99")); // alpha 0.6
    }

    #[test]
    fn hsv_conversion_hits_the_primaries() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), (255, 0, 0));
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), (0, 255, 0));
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), (0, 0, 255));
        assert_eq!(hsv_to_rgb(60.0, 1.0, 1.0), (255, 255, 0));
    }

    #[test]
    fn hue_survives_into_the_map() {
        let colors = assign_colors(&tags(&["a", "b", "c", "d"]));
        for (tag, color) in &colors {
            assert_eq!(tag, &color.tag);
            assert!(color.hue_degrees >= 0.0 && color.hue_degrees < 360.0);
        }
    }
}
