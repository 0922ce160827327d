use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{DiarizedTranscript, RawSegment};

/// Parse a persisted diarization result file into validated segments.
///
/// The expected shape is `{"segments": [{"speaker": ..., "text": ...,
/// "start": ..., "end": ...}, ...]}` with `start`/`end` optional.
pub fn parse_transcript_file(path: &Path) -> Result<Vec<RawSegment>> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    parse_transcript_json(&content)
}

/// Parse a diarization result JSON string into validated segments.
pub fn parse_transcript_json(json: &str) -> Result<Vec<RawSegment>> {
    let transcript: DiarizedTranscript =
        serde_json::from_str(json).context("Failed to parse transcript JSON")?;
    let segments = transcript
        .to_segments()
        .context("Transcript contains a malformed segment")?;
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_transcript_json() {
        let json = r#"{
            "segments": [
                {"speaker": "SPEAKER_00", "text": " Hello there.", "start": 0.5, "end": 1.4},
                {"speaker": "SPEAKER_00", "text": "How are you?", "start": 1.6, "end": 2.3},
                {"speaker": "SPEAKER_01", "text": "Fine, thanks."}
            ]
        }"#;

        let segments = parse_transcript_json(json).unwrap();

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].speaker, "SPEAKER_00");
        assert_eq!(segments[0].start, Some(0.5));
        assert_eq!(segments[2].speaker, "SPEAKER_01");
        assert_eq!(segments[2].start, None);
    }

    #[test]
    fn test_parse_empty_transcript() {
        let segments = parse_transcript_json(r#"{"segments": []}"#).unwrap();
        assert!(segments.is_empty());
    }

    #[test]
    fn test_malformed_segment_is_rejected() {
        let json = r#"{"segments": [{"speaker": "SPEAKER_00"}]}"#;
        let err = parse_transcript_json(json).unwrap_err();
        assert!(err.to_string().contains("malformed segment"));
    }

    #[test]
    fn test_parse_transcript_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(
            &path,
            r#"{"segments": [{"speaker": "A", "text": "hi"}]}"#,
        )
        .unwrap();

        let segments = parse_transcript_file(&path).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "hi");
    }
}
