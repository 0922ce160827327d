use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::FormatError;
use crate::render::strip_markup;

/// Aggregate word counts over a rendered conversation.
///
/// `words_by_speaker` is ordered (BTreeMap) so downstream output such as the
/// stats CSV is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversationStats {
    pub total_words: usize,
    pub words_by_speaker: BTreeMap<String, usize>,
}

/// Count words per turn and per speaker over rendered turn lines.
///
/// A word is a maximal run of non-whitespace characters; punctuation stays
/// attached, matching what a naive whitespace split produces. A line without
/// a `": "` separator is a [`FormatError`] — coercing it to a zero-word turn
/// would hide data loss.
pub fn compute_stats<S: AsRef<str>>(turns: &[S]) -> Result<ConversationStats, FormatError> {
    let mut stats = ConversationStats::default();

    for (index, line) in turns.iter().enumerate() {
        let (label, text) = split_turn_line(index, line.as_ref())?;
        let words = text.split_whitespace().count();
        stats.total_words += words;
        *stats.words_by_speaker.entry(label).or_insert(0) += words;
    }

    Ok(stats)
}

/// Concatenate each speaker's turns into one text, in conversation order.
///
/// This is the per-speaker view fed to downstream consumers (e.g. a
/// summarizer); it uses the same parsing rule as [`compute_stats`].
pub fn collect_speaker_texts<S: AsRef<str>>(
    turns: &[S],
) -> Result<BTreeMap<String, String>, FormatError> {
    let mut texts: BTreeMap<String, String> = BTreeMap::new();

    for (index, line) in turns.iter().enumerate() {
        let (label, text) = split_turn_line(index, line.as_ref())?;
        let entry = texts.entry(label).or_default();
        if !entry.is_empty() && !text.is_empty() {
            entry.push(' ');
        }
        entry.push_str(&text);
    }

    Ok(texts)
}

/// Split a rendered turn into (label, text) on the first `": "`.
///
/// Markup is stripped before splitting so both render variants parse the
/// same way.
fn split_turn_line(index: usize, line: &str) -> Result<(String, String), FormatError> {
    let clean = strip_markup(line);
    match clean.split_once(": ") {
        Some((label, text)) => Ok((label.trim().to_string(), text.to_string())),
        None => Err(FormatError {
            index,
            line: line.to_string(),
        }),
    }
}
