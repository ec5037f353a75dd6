use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{ClientError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub speech: SpeechConfig,
    #[serde(default)]
    pub device: DeviceConfig,
    #[serde(default)]
    pub tokenizer: TokenizerConfig,
}

/// Speech-synthesis server endpoint and synthesis defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    #[serde(default = "default_speech_base_url")]
    pub base_url: String,
    #[serde(default = "default_audio_format")]
    pub audio_format: String,
    #[serde(default)]
    pub default_speaker: Option<String>,
}

/// Companion device hosting the Wi-Fi configuration endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceConfig {
    #[serde(default = "default_device_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenizerConfig {
    #[serde(default = "default_tokenizer_model")]
    pub model: String,
}

fn default_speech_base_url() -> String {
    "http://127.0.0.1:8848".to_string()
}

fn default_audio_format() -> String {
    "opus".to_string()
}

fn default_device_base_url() -> String {
    "http://192.168.12.1:1306".to_string()
}

fn default_tokenizer_model() -> String {
    "Qwen/Qwen3-1.7B".to_string()
}

impl Config {
    /// Load configuration from a YAML or JSON file, determined by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ClientError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            serde_json::from_str(&content).map_err(|e| ClientError::Config {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        } else {
            serde_yaml::from_str(&content).map_err(|e| ClientError::Config {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        }
    }

    /// Resolve configuration for a run.
    ///
    /// An explicitly requested path must load; otherwise `voxctl.yaml` in the
    /// working directory is used when present, and built-in defaults apply
    /// when no file is found.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            let config = Self::load(path)?;
            debug!("Loaded configuration from: {}", path.display());
            return Ok(config);
        }

        let fallback = Path::new("voxctl.yaml");
        if fallback.exists() {
            let config = Self::load(fallback)?;
            debug!("Loaded configuration from: {}", fallback.display());
            return Ok(config);
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            base_url: default_speech_base_url(),
            audio_format: default_audio_format(),
            default_speaker: None,
        }
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            base_url: default_device_base_url(),
        }
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            model: default_tokenizer_model(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_cover_every_section() {
        let config = Config::default();
        assert_eq!(config.speech.base_url, "http://127.0.0.1:8848");
        assert_eq!(config.speech.audio_format, "opus");
        assert_eq!(config.speech.default_speaker, None);
        assert_eq!(config.device.base_url, "http://192.168.12.1:1306");
        assert_eq!(config.tokenizer.model, "Qwen/Qwen3-1.7B");
    }

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let yaml = "speech:\n  base_url: http://10.0.0.5:8848\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.speech.base_url, "http://10.0.0.5:8848");
        assert_eq!(config.speech.audio_format, "opus");
        assert_eq!(config.device.base_url, "http://192.168.12.1:1306");
    }

    #[test]
    fn loads_yaml_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .unwrap();
        writeln!(file, "device:\n  base_url: http://192.168.4.1:1306").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.device.base_url, "http://192.168.4.1:1306");
    }

    #[test]
    fn loads_json_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .unwrap();
        writeln!(file, "{{\"tokenizer\": {{\"model\": \"gpt2\"}}}}").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.tokenizer.model, "gpt2");
    }

    #[test]
    fn no_config_file_falls_back_to_defaults() {
        // Nothing named voxctl.yaml exists in the test working directory.
        let config = Config::resolve(None).unwrap();
        assert_eq!(config.speech.base_url, "http://127.0.0.1:8848");
        assert_eq!(config.speech.audio_format, "opus");
        assert_eq!(config.device.base_url, "http://192.168.12.1:1306");
        assert_eq!(config.tokenizer.model, "Qwen/Qwen3-1.7B");
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = Config::resolve(Some(Path::new("/nonexistent/voxctl.yaml"))).unwrap_err();
        assert!(matches!(err, ClientError::Config { .. }));
    }
}
