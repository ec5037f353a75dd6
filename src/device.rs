use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Client for the companion device's configuration endpoint.
#[derive(Debug, Clone)]
pub struct DeviceClient {
    client: Client,
    base_url: String,
}

/// Credentials for one network profile, sent once per invocation.
#[derive(Debug, Clone, Serialize)]
pub struct WifiCredential {
    pub uuid: String,
    pub password: String,
}

/// Whatever the device answered, uninterpreted.
#[derive(Debug, Clone)]
pub struct WifiReport {
    pub status: StatusCode,
    pub body: String,
}

impl DeviceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Post Wi-Fi credentials to the device.
    ///
    /// The device's response semantics are its own; any HTTP status is
    /// reported back verbatim rather than treated as a failure. Only a
    /// transport-level failure is an error.
    pub async fn configure_wifi(&self, credential: &WifiCredential) -> Result<WifiReport> {
        let url = format!("{}/wifi", self.base_url);
        debug!("Posting Wi-Fi credentials for profile '{}'", credential.uuid);

        let response = self
            .client
            .post(&url)
            .json(credential)
            .send()
            .await
            .map_err(|e| ClientError::Transport {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| ClientError::Transport {
            url,
            source: e,
        })?;
        Ok(WifiReport { status, body })
    }
}
