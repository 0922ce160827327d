pub mod error;
pub mod io;
pub mod merge;
pub mod models;
pub mod render;
pub mod stats;

pub use error::{FormatError, ValidationError};
pub use io::{
    parse_transcript_file, parse_transcript_json, write_conversation, write_conversation_plain,
    write_stats_csv,
};
pub use merge::{merge, merge_segments};
pub use models::{DiarizedTranscript, RawSegment, SegmentRecord, SpeakerLabelMap, Turn};
pub use render::{render_turn, strip_markup, RenderStyle};
pub use stats::{collect_speaker_texts, compute_stats, ConversationStats};

#[cfg(test)]
mod tests {
    use super::*;

    /// Merging then rendering then counting conserves whitespace tokens:
    /// the single-space joiner never creates or destroys words.
    #[test]
    fn test_word_counts_survive_merge_and_render() {
        let segments = vec![
            RawSegment::new("A", " So, what do you think? "),
            RawSegment::new("A", "Honestly."),
            RawSegment::new("B", "I think it's fine."),
            RawSegment::new("A", "Good."),
        ];

        let expected: usize = segments
            .iter()
            .map(|s| s.text.split_whitespace().count())
            .sum();

        let turns = merge_segments(&segments, None).unwrap();
        let rendered: Vec<String> = turns.iter().map(render_turn).collect();
        let stats = compute_stats(&rendered).unwrap();

        assert_eq!(stats.total_words, expected);
        assert_eq!(stats.words_by_speaker["Speaker 1"], 7);
        assert_eq!(stats.words_by_speaker["Speaker 2"], 4);
    }

    #[test]
    fn test_html_rendered_turns_count_the_same() {
        let segments = vec![
            RawSegment::new("A", "hi there"),
            RawSegment::new("B", "hello"),
        ];
        let turns = merge_segments(&segments, None).unwrap();

        let md: Vec<String> = turns.iter().map(render_turn).collect();
        let html: Vec<String> = turns
            .iter()
            .map(|t| RenderStyle::HtmlBold.render(t))
            .collect();

        assert_eq!(compute_stats(&md).unwrap(), compute_stats(&html).unwrap());
    }
}
