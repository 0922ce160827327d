use serde::{Deserialize, Serialize};

/// One maximal run of consecutive same-speaker segments, merged into a
/// single displayed utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Original speaker id from the diarization engine
    pub speaker: String,
    /// Human-facing label (`Speaker 1`, ...)
    pub display_label: String,
    /// Merged text, single-space joined from the run's trimmed segments
    pub text: String,
}

impl Turn {
    /// Whitespace-delimited word count of the merged text.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count() {
        let turn = Turn {
            speaker: "A".to_string(),
            display_label: "Speaker 1".to_string(),
            text: "hello there, how are you?".to_string(),
        };
        assert_eq!(turn.word_count(), 5);

        let empty = Turn {
            speaker: "A".to_string(),
            display_label: "Speaker 1".to_string(),
            text: String::new(),
        };
        assert_eq!(empty.word_count(), 0);
    }
}
