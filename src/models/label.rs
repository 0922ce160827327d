use std::collections::HashMap;

use crate::models::RawSegment;

/// Maps opaque diarization speaker ids to display labels (`Speaker 1`, ...).
///
/// Labels are assigned in order of first appearance in the sequence the map
/// was built from, so identical input always yields identical labels. Built
/// once per merge pass and discarded after rendering.
#[derive(Debug, Clone, Default)]
pub struct SpeakerLabelMap {
    labels: HashMap<String, String>,
    order: Vec<String>,
}

impl SpeakerLabelMap {
    /// Build from an explicitly ordered list of unique speaker ids.
    ///
    /// This is the path callers should prefer: the list order alone decides
    /// which speaker becomes `Speaker 1`. Duplicate ids keep their first
    /// position.
    pub fn from_known(speakers: &[String]) -> Self {
        let mut map = Self::default();
        for speaker in speakers {
            map.insert(speaker);
        }
        map
    }

    /// Derive from a segment sequence, assigning labels in first-seen order.
    pub fn from_segments(segments: &[RawSegment]) -> Self {
        let mut map = Self::default();
        for segment in segments {
            map.insert(&segment.speaker);
        }
        map
    }

    fn insert(&mut self, speaker: &str) {
        if !self.labels.contains_key(speaker) {
            let label = format!("Speaker {}", self.order.len() + 1);
            self.labels.insert(speaker.to_string(), label);
            self.order.push(speaker.to_string());
        }
    }

    /// Display label for a speaker id, if the id was present at build time.
    pub fn label(&self, speaker: &str) -> Option<&str> {
        self.labels.get(speaker).map(String::as_str)
    }

    /// Speaker ids in label-assignment order.
    pub fn speakers(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
