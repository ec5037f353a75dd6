use std::fs;
use std::path::Path;
use tracing::info;

use crate::config::Config;
use crate::device::{DeviceClient, WifiCredential};
use crate::error::{ClientError, Result};
use crate::speech::{SpeakerDirectory, SpeechClient};
use crate::tokens;

/// Render the speaker directory, one line per voice, sorted by name.
pub fn speaker_lines(directory: &SpeakerDirectory) -> Vec<String> {
    directory
        .iter()
        .map(|(name, id)| format!("  - {}: {}", name, id))
        .collect()
}

/// List the voices available on the speech server.
pub async fn list_speakers(config: &Config) -> Result<()> {
    let client = SpeechClient::new(&config.speech.base_url);
    let directory = client.list_speakers().await?;

    println!("Available Voices:");
    for line in speaker_lines(&directory) {
        println!("{}", line);
    }
    Ok(())
}

/// Synthesize `text` and save the audio payload to `output`.
///
/// The file is only written after a successful response; a failed request
/// leaves any existing file untouched. On success the file is overwritten.
pub async fn say(
    config: &Config,
    text: &str,
    speaker: Option<&str>,
    format: Option<&str>,
    output: &Path,
) -> Result<()> {
    let client = SpeechClient::new(&config.speech.base_url);
    let speaker = speaker.or(config.speech.default_speaker.as_deref());
    let format = format.unwrap_or(&config.speech.audio_format);

    let audio = client.synthesize(text, speaker, format).await?;
    fs::write(output, &audio).map_err(|e| ClientError::Output {
        path: output.display().to_string(),
        source: e,
    })?;

    info!("Wrote {} bytes to {}", audio.len(), output.display());
    println!("Saved audio to {}", output.display());
    Ok(())
}

/// Send Wi-Fi credentials to the companion device and report its answer.
pub async fn configure_wifi(config: &Config, uuid: &str, password: &str) -> Result<()> {
    let client = DeviceClient::new(&config.device.base_url);
    let report = client
        .configure_wifi(&WifiCredential {
            uuid: uuid.to_string(),
            password: password.to_string(),
        })
        .await?;

    println!("{}", report.status.as_u16());
    println!("{}", report.body);
    Ok(())
}

/// Count tokens in `prompt` using a pretrained tokenizer.
pub async fn count_tokens(config: &Config, prompt: &str, model: Option<&str>) -> Result<()> {
    let model = model.unwrap_or(&config.tokenizer.model).to_string();
    // The hub download is blocking; keep it off the async runtime.
    let tokenizer = tokio::task::spawn_blocking(move || tokens::load_pretrained(&model))
        .await
        .map_err(|e| ClientError::Tokenizer(e.to_string()))??;
    let count = tokens::count_tokens(&tokenizer, prompt)?;

    println!("Token count: {}", count);
    Ok(())
}
