use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::Turn;
use crate::render::{render_turn, strip_markup};
use crate::stats::ConversationStats;

/// Write the conversation with speaker labels, one turn per line.
///
/// Lines are markup-stripped (`Speaker 1: text`), matching the plain-text
/// transcript artifact the conversation view is saved as.
pub fn write_conversation(path: &Path, turns: &[Turn]) -> Result<()> {
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    for turn in turns {
        let line = strip_markup(&render_turn(turn));
        writeln!(file, "{}", line)
            .with_context(|| format!("Failed to write file: {:?}", path))?;
    }
    Ok(())
}

/// Write the spoken text only, speaker labels dropped, turns joined by
/// single spaces.
pub fn write_conversation_plain(path: &Path, turns: &[Turn]) -> Result<()> {
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    let text: Vec<&str> = turns
        .iter()
        .map(|t| t.text.as_str())
        .filter(|t| !t.is_empty())
        .collect();
    write!(file, "{}", text.join(" "))
        .with_context(|| format!("Failed to write file: {:?}", path))?;
    Ok(())
}

/// Write stats as a one-row CSV: `Total Words` plus a `Words by <label>`
/// column per speaker.
pub fn write_stats_csv(path: &Path, stats: &ConversationStats) -> Result<()> {
    let mut header = vec!["Total Words".to_string()];
    let mut row = vec![stats.total_words.to_string()];
    for (label, count) in &stats.words_by_speaker {
        header.push(format!("Words by {}", label));
        row.push(count.to_string());
    }

    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    writeln!(file, "{}", header.join(","))
        .with_context(|| format!("Failed to write file: {:?}", path))?;
    writeln!(file, "{}", row.join(","))
        .with_context(|| format!("Failed to write file: {:?}", path))?;
    Ok(())
}
