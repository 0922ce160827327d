use thiserror::Error;

/// A raw segment that cannot be merged because its shape is wrong.
///
/// Raised synchronously to the caller; the core never skips a bad record on
/// its own. Callers that want to drop bad records can validate per-record
/// with [`crate::models::SegmentRecord::validate`] and resubmit.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The `speaker` field is missing or empty.
    #[error("segment {index}: missing required field `speaker`")]
    MissingSpeaker { index: usize },

    /// The `text` field is missing.
    #[error("segment {index}: missing required field `text`")]
    MissingText { index: usize },

    /// A segment names a speaker absent from the supplied known-speaker list.
    #[error("segment {index}: speaker {speaker:?} is not in the known speaker list")]
    UnknownSpeaker { index: usize, speaker: String },
}

/// A rendered turn line that cannot be split into label and text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("turn {index}: no `: ` separator in {line:?}")]
pub struct FormatError {
    /// Zero-based position of the offending line in the input sequence.
    pub index: usize,
    /// The line as received, before markup stripping.
    pub line: String,
}
