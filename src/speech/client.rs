use reqwest::Client;
use tracing::{debug, error};

use super::types::{SpeakerDirectory, SynthesisRequest};
use crate::error::{ClientError, Result};

/// Typed client for the speech-synthesis server.
#[derive(Debug, Clone)]
pub struct SpeechClient {
    client: Client,
    base_url: String,
}

impl SpeechClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the speaker directory from the server.
    pub async fn list_speakers(&self) -> Result<SpeakerDirectory> {
        let url = format!("{}/api/v1/speakers", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Transport {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Speaker listing failed: {} {}", status, body);
            return Err(ClientError::Status {
                endpoint: "speakers",
                status,
                body,
            });
        }

        let directory: SpeakerDirectory =
            response.json().await.map_err(|e| ClientError::Transport {
                url,
                source: e,
            })?;
        debug!("Fetched {} speakers", directory.len());
        Ok(directory)
    }

    /// Synthesize `text` into an audio payload.
    ///
    /// The speaker directory is fetched first on every call; when `speaker`
    /// is given, its name must resolve in the directory and the resolved id
    /// is sent with the request. Returns the raw response bytes on success.
    pub async fn synthesize(
        &self,
        text: &str,
        speaker: Option<&str>,
        audio_format: &str,
    ) -> Result<Vec<u8>> {
        let speakers = self.list_speakers().await?;
        let speaker_id = match speaker {
            Some(name) => Some(
                speakers
                    .get(name)
                    .cloned()
                    .ok_or_else(|| ClientError::UnknownSpeaker(name.to_string()))?,
            ),
            None => None,
        };

        let request = SynthesisRequest {
            text: text.to_string(),
            audio_format: audio_format.to_string(),
            speaker_id,
        };
        debug!(
            "Sending synthesis request: {} chars, format={}, speaker={:?}",
            request.text.len(),
            request.audio_format,
            speaker
        );

        let url = format!("{}/api/v1/synthesise", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ClientError::Transport {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Synthesis failed: {} {}", status, body);
            return Err(ClientError::Status {
                endpoint: "synthesise",
                status,
                body,
            });
        }

        let audio = response.bytes().await.map_err(|e| ClientError::Transport {
            url,
            source: e,
        })?;
        debug!("Received {} bytes of audio", audio.len());
        Ok(audio.to_vec())
    }
}
