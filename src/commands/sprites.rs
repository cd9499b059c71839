//! `playhead sprites` - parse a sprite cue list and print its frames.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use playhead::sprites::{format_timestamp, SpriteIndex};

pub fn run(file: &Path, json: bool) -> Result<()> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("failed to read sprite file: {}", file.display()))?;

    let index = SpriteIndex::parse_str(&text)
        .with_context(|| format!("failed to parse sprite file: {}", file.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(index.frames())?);
        return Ok(());
    }

    println!(
        "{} frames covering a {}px strip",
        index.len(),
        index.total_width()
    );
    for frame in index.frames() {
        println!(
            "{} - {}  {}#xywh={},{},{},{}",
            format_timestamp(frame.start_seconds),
            format_timestamp(frame.end_seconds),
            frame.image_url,
            frame.x,
            frame.y,
            frame.width,
            frame.height,
        );
    }

    Ok(())
}
