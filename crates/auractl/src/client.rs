//! HTTP client for talking to aurad.

use anyhow::{anyhow, Context, Result};
use aura_common::rpc::{AskRequest, AskResponse, Credentials, HealthResponse};
use aura_common::AuraError;

/// Client for communicating with aurad
pub struct AuradClient {
    http: reqwest::Client,
    base_url: String,
    session_cookie: Option<String>,
}

impl AuradClient {
    pub fn new(addr: &str) -> Result<Self> {
        // Redirects stay unfollowed so login's Set-Cookie is observable.
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: format!("http://{}", addr),
            session_cookie: None,
        })
    }

    /// Log in and keep the session cookie for subsequent requests.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<()> {
        let response = self
            .http
            .post(format!("{}/login", self.base_url))
            .form(&Credentials {
                username: username.to_string(),
                password: password.to_string(),
            })
            .send()
            .await
            .map_err(connection_error)?;

        // A successful login answers with a redirect carrying the cookie.
        let cookie = response
            .headers()
            .get(reqwest::header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(|v| v.to_string());

        match cookie {
            Some(cookie) => {
                self.session_cookie = Some(cookie);
                Ok(())
            }
            None => Err(anyhow!("Login failed: check your username and password")),
        }
    }

    /// Ask a question and return the answer text.
    pub async fn ask(&self, question: &str) -> Result<String> {
        let cookie = self
            .session_cookie
            .as_ref()
            .ok_or(AuraError::Unauthorized)?;

        let response = self
            .http
            .post(format!("{}/ask", self.base_url))
            .header(reqwest::header::COOKIE, cookie)
            .json(&AskRequest {
                question: question.to_string(),
            })
            .send()
            .await
            .map_err(connection_error)?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AuraError::Unauthorized.into());
        }
        if !response.status().is_success() {
            return Err(AuraError::Http(format!("/ask returned {}", response.status())).into());
        }

        let answer: AskResponse = response.json().await.map_err(connection_error)?;
        Ok(answer.answer)
    }

    /// Fetch daemon health.
    pub async fn health(&self) -> Result<HealthResponse> {
        let response = self
            .http
            .get(format!("{}/healthz", self.base_url))
            .send()
            .await
            .map_err(connection_error)?;

        if !response.status().is_success() {
            return Err(AuraError::Http(format!("/healthz returned {}", response.status())).into());
        }

        Ok(response.json().await.map_err(connection_error)?)
    }
}

/// Map connection-level failures to the friendlier daemon-down error.
fn connection_error(err: reqwest::Error) -> anyhow::Error {
    if err.is_connect() || err.is_timeout() {
        AuraError::DaemonNotRunning.into()
    } else {
        anyhow!("Request failed: {}", err)
    }
}
