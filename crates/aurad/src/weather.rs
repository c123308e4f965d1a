//! Weather lookup via wttr.in.
//!
//! One-line format ("format=3") keeps the reply chat-sized. Failures never
//! surface as errors to the user; the router substitutes a fallback line.

use anyhow::{Context, Result};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Reply used when the lookup fails for any reason.
pub const WEATHER_UNAVAILABLE: &str = "⚠ Unable to fetch weather right now.";

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(String),
}

pub struct WeatherClient {
    http: reqwest::Client,
    city: String,
}

impl WeatherClient {
    pub fn new(city: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(concat!("Aura Chatbot/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http, city })
    }

    /// Fetch the one-line current weather for the configured city.
    pub async fn current(&self) -> Result<String, WeatherError> {
        let url = format!("https://wttr.in/{}?format=3", self.city);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| WeatherError::Network(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| WeatherError::Network(e.to_string()))?;

        Ok(body.trim().to_string())
    }

    /// Chat-ready weather reply, falling back on lookup failure.
    pub async fn reply(&self) -> String {
        match self.current().await {
            Ok(line) => format!("🌦 {}", line),
            Err(err) => {
                warn!(%err, "weather lookup failed");
                WEATHER_UNAVAILABLE.to_string()
            }
        }
    }
}
