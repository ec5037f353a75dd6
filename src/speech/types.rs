use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Server-provided mapping from voice display name to identifier.
///
/// Fetched fresh on every call and never cached. A `BTreeMap` so iteration
/// is lexicographic by name.
pub type SpeakerDirectory = BTreeMap<String, SpeakerId>;

/// Opaque speaker identifier; the server may return a number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpeakerId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for SpeakerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeakerId::Number(n) => write!(f, "{}", n),
            SpeakerId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Wire body for the synthesis endpoint.
///
/// `speaker_id` is omitted entirely when no speaker was requested; the server
/// then uses its own default voice.
#[derive(Debug, Clone, Serialize)]
pub struct SynthesisRequest {
    pub text: String,
    pub audio_format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker_id: Option<SpeakerId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speaker_ids_deserialize_as_number_or_string() {
        let directory: SpeakerDirectory =
            serde_json::from_str(r#"{"Zara": "v-07", "Asta": 3}"#).unwrap();

        assert_eq!(
            directory["Asta"],
            SpeakerId::Number(serde_json::Number::from(3))
        );
        assert_eq!(directory["Zara"], SpeakerId::Text("v-07".to_string()));

        let names: Vec<&str> = directory.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Asta", "Zara"]);
    }

    #[test]
    fn speaker_id_displays_without_quotes() {
        assert_eq!(SpeakerId::Number(serde_json::Number::from(3)).to_string(), "3");
        assert_eq!(SpeakerId::Text("v-07".to_string()).to_string(), "v-07");
    }

    #[test]
    fn synthesis_request_omits_absent_speaker() {
        let request = SynthesisRequest {
            text: "hello".to_string(),
            audio_format: "opus".to_string(),
            speaker_id: None,
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"text": "hello", "audio_format": "opus"})
        );
    }
}
