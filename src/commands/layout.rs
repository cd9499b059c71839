//! `playhead layout` - layer and color assignment for a marker snapshot.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;

use playhead::timeline::{assign_colors, collect_ranges, layout, Marker};

pub fn run(file: &Path, json_output: bool) -> Result<()> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("failed to read marker snapshot: {}", file.display()))?;

    let markers: Vec<Marker> = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse marker snapshot: {}", file.display()))?;

    let mut tags: Vec<String> = markers
        .iter()
        .flat_map(|marker| {
            std::iter::once(marker.primary_tag.clone()).chain(marker.tags.iter().cloned())
        })
        .collect();
    tags.sort_unstable();
    tags.dedup();

    let (ranges, rejected) = collect_ranges(&markers);
    let layers = layout(&ranges);
    let colors = assign_colors(&tags);

    if json_output {
        let value = json!({
            "layers": layers,
            "colors": colors,
            "rejected": rejected.iter().map(|err| err.to_string()).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    for err in &rejected {
        eprintln!("dropped: {err}");
    }

    for (index, layer) in layers.iter().enumerate() {
        println!("layer {index}:");
        for marker in layer {
            println!(
                "  [{} - {})  {} ({})",
                marker.start_seconds,
                marker.end_seconds,
                if marker.title.is_empty() {
                    &marker.id
                } else {
                    &marker.title
                },
                marker.primary_tag,
            );
        }
    }

    println!("colors:");
    for (tag, color) in &colors {
        println!("  {tag}: {} (hue {:.1})", color.rgba, color.hue_degrees);
    }

    Ok(())
}
