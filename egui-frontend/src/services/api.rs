//! API client for the remote booking service.
//!
//! The app issues exactly one request per run: a GET of the full
//! registration list on first mount. There is no retry, no pagination and
//! no refresh. The UI thread must not block on the network, so the fetch
//! runs on a background thread and delivers its result through an mpsc
//! channel that the update loop polls (see
//! `components::data_loading::poll_registrations_fetch`).

use std::sync::mpsc::Sender;
use std::thread;

use log::{error, info};
use shared::Registration;
use thiserror::Error;

use crate::config::Config;

/// Outcome of the one-shot registrations fetch, as delivered to the UI.
pub type FetchResult = Result<Vec<Registration>, ApiError>;

/// Failure modes of the registrations fetch, surfaced verbatim in the UI.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed response body: {0}")]
    Body(#[from] serde_json::Error),
}

/// Blocking HTTP client for the booking API.
pub struct ApiClient {
    base_url: String,
    token: String,
    client: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.api_url.clone(),
            token: config.api_token.clone(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// GET `<base_url>/registrations?token=<token>` and decode the body as
    /// a list of registrations.
    pub fn fetch_registrations(&self) -> FetchResult {
        let url = format!("{}/registrations", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("token", self.token.as_str())])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let body = response.text()?;
        let registrations = serde_json::from_str(&body)?;
        Ok(registrations)
    }
}

/// Spawn the single registrations fetch.
///
/// The result goes down `tx`; a repaint is requested afterwards so the
/// calendar re-renders as soon as the data lands, even if the window is
/// idle. The send fails only if the app was torn down first, which is
/// fine to ignore.
pub fn spawn_registrations_fetch(config: &Config, ctx: egui::Context, tx: Sender<FetchResult>) {
    let client = ApiClient::new(config);

    thread::spawn(move || {
        let result = client.fetch_registrations();
        match &result {
            Ok(registrations) => info!("Fetched {} registrations", registrations.len()),
            Err(e) => error!("Registrations fetch failed: {}", e),
        }

        let _ = tx.send(result);
        ctx.request_repaint();
    });
}
