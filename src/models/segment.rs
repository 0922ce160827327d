use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One segment as it arrives on the wire from the diarization provider.
///
/// `speaker` and `text` are mandatory per the transcript format, but the
/// serde layer keeps them optional so that [`SegmentRecord::validate`] can
/// report exactly which field a malformed record is missing instead of
/// failing the whole document parse.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SegmentRecord {
    /// Opaque speaker id assigned by the diarization engine
    #[serde(default)]
    pub speaker: Option<String>,
    /// Recognized text for this segment
    #[serde(default)]
    pub text: Option<String>,
    /// Start timestamp in seconds
    #[serde(default)]
    pub start: Option<f64>,
    /// End timestamp in seconds
    #[serde(default)]
    pub end: Option<f64>,
}

impl SegmentRecord {
    /// Check the record's shape, producing a validated segment.
    ///
    /// `index` is the record's position in the source sequence and is carried
    /// into the error for diagnostics.
    pub fn validate(&self, index: usize) -> Result<RawSegment, ValidationError> {
        let speaker = match self.speaker.as_deref() {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => return Err(ValidationError::MissingSpeaker { index }),
        };
        let text = self
            .text
            .clone()
            .ok_or(ValidationError::MissingText { index })?;

        Ok(RawSegment {
            speaker,
            text,
            start: self.start,
            end: self.end,
        })
    }
}

/// A validated segment: one attributed span of recognized speech.
///
/// Read-only input to the merge pass; the core never mutates segments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawSegment {
    /// Opaque speaker id assigned by the diarization engine
    pub speaker: String,
    /// Recognized text, whitespace as delivered by the provider
    pub text: String,
    /// Start timestamp in seconds, if the provider supplied one
    pub start: Option<f64>,
    /// End timestamp in seconds, if the provider supplied one
    pub end: Option<f64>,
}

impl RawSegment {
    /// Convenience constructor for untimed segments.
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
            start: None,
            end: None,
        }
    }
}

/// The persisted diarization result: a JSON document `{"segments": [...]}`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DiarizedTranscript {
    pub segments: Vec<SegmentRecord>,
}

impl DiarizedTranscript {
    /// Validate every record, fail-fast on the first malformed one.
    pub fn to_segments(&self) -> Result<Vec<RawSegment>, ValidationError> {
        self.segments
            .iter()
            .enumerate()
            .map(|(i, r)| r.validate(i))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_complete_record() {
        let record = SegmentRecord {
            speaker: Some("SPEAKER_00".to_string()),
            text: Some(" hello there ".to_string()),
            start: Some(0.5),
            end: Some(1.2),
        };

        let segment = record.validate(0).unwrap();
        assert_eq!(segment.speaker, "SPEAKER_00");
        assert_eq!(segment.text, " hello there ");
        assert_eq!(segment.start, Some(0.5));
        assert_eq!(segment.end, Some(1.2));
    }

    #[test]
    fn test_validate_missing_speaker() {
        let record = SegmentRecord {
            text: Some("hi".to_string()),
            ..Default::default()
        };
        assert_eq!(
            record.validate(4),
            Err(ValidationError::MissingSpeaker { index: 4 })
        );

        // Empty speaker id is as useless as a missing one
        let record = SegmentRecord {
            speaker: Some(String::new()),
            text: Some("hi".to_string()),
            ..Default::default()
        };
        assert_eq!(
            record.validate(0),
            Err(ValidationError::MissingSpeaker { index: 0 })
        );
    }

    #[test]
    fn test_validate_missing_text() {
        let record = SegmentRecord {
            speaker: Some("A".to_string()),
            ..Default::default()
        };
        assert_eq!(
            record.validate(2),
            Err(ValidationError::MissingText { index: 2 })
        );
    }

    #[test]
    fn test_transcript_to_segments_fail_fast() {
        let transcript = DiarizedTranscript {
            segments: vec![
                SegmentRecord {
                    speaker: Some("A".to_string()),
                    text: Some("ok".to_string()),
                    ..Default::default()
                },
                SegmentRecord::default(),
            ],
        };

        assert_eq!(
            transcript.to_segments(),
            Err(ValidationError::MissingSpeaker { index: 1 })
        );
    }
}
