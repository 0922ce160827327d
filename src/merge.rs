use crate::error::ValidationError;
use crate::models::{RawSegment, SegmentRecord, SpeakerLabelMap, Turn};

/// Merge raw records into turns, validating each record first.
///
/// Fail-fast: the first malformed record aborts the call with a
/// [`ValidationError`] naming its index. Callers that prefer to skip bad
/// records can pre-validate with [`SegmentRecord::validate`] and call
/// [`merge_segments`] with the survivors.
pub fn merge(
    records: &[SegmentRecord],
    known_speakers: Option<&[String]>,
) -> Result<Vec<Turn>, ValidationError> {
    let segments: Vec<RawSegment> = records
        .iter()
        .enumerate()
        .map(|(i, r)| r.validate(i))
        .collect::<Result<_, _>>()?;
    merge_segments(&segments, known_speakers)
}

/// Merge validated segments into turns.
///
/// Consecutive segments with the same speaker collapse into one turn whose
/// text is the run's trimmed segment texts joined by single spaces. Turn
/// order follows input order. Display labels come from `known_speakers` when
/// supplied (list order decides `Speaker 1`, `Speaker 2`, ...), otherwise
/// from the first appearance of each speaker in the input — deterministic
/// either way. A segment naming a speaker absent from a supplied list is an
/// error, not a silent drop.
///
/// Empty input yields empty output.
pub fn merge_segments(
    segments: &[RawSegment],
    known_speakers: Option<&[String]>,
) -> Result<Vec<Turn>, ValidationError> {
    let labels = match known_speakers {
        Some(speakers) => SpeakerLabelMap::from_known(speakers),
        None => SpeakerLabelMap::from_segments(segments),
    };

    let mut turns = Vec::new();
    let mut current_speaker: Option<&str> = None;
    let mut current_text = String::new();

    for (index, segment) in segments.iter().enumerate() {
        let text = segment.text.trim();

        if current_speaker == Some(segment.speaker.as_str()) {
            // Same speaker continues: join with a single space, never more.
            // Whitespace-only segments contribute nothing.
            if !text.is_empty() {
                if !current_text.is_empty() {
                    current_text.push(' ');
                }
                current_text.push_str(text);
            }
            continue;
        }

        // New speaker: close out the previous run, even if its text is empty
        if let Some(speaker) = current_speaker {
            turns.push(close_turn(&labels, speaker, &current_text, index - 1)?);
        }
        current_speaker = Some(segment.speaker.as_str());
        current_text = text.to_string();
    }

    // The trailing run is a turn too; dropping it would lose the last
    // speaker's content
    if let Some(speaker) = current_speaker {
        turns.push(close_turn(&labels, speaker, &current_text, segments.len() - 1)?);
    }

    Ok(turns)
}

fn close_turn(
    labels: &SpeakerLabelMap,
    speaker: &str,
    text: &str,
    index: usize,
) -> Result<Turn, ValidationError> {
    let display_label = labels
        .label(speaker)
        .ok_or_else(|| ValidationError::UnknownSpeaker {
            index,
            speaker: speaker.to_string(),
        })?;

    Ok(Turn {
        speaker: speaker.to_string(),
        display_label: display_label.to_string(),
        text: text.to_string(),
    })
}
