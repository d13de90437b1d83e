//! Game server client
//!
//! [`GameApi`] is the seam between the controller and the network: the
//! controller is generic over it, the binary injects [`HttpGameApi`] and
//! tests inject an in-memory fake.


use std::time::Duration;

use golterm_core::prelude::*;
use golterm_core::GameState;
use reqwest::{Client, Response};
use url::Url;

use crate::protocol::{paths, CellUpdate};

/// Address of the reference server when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Game server operations
///
/// Every method maps to exactly one HTTP request. Failures are reported as
/// [`Error::Transport`], [`Error::HttpStatus`] or [`Error::Decode`]; none of
/// them are retried.
#[trait_variant::make(GameApi: Send)]
pub trait LocalGameApi {
    /// `GET /api/game/state`
    async fn state(&self) -> Result<GameState>;

    /// `POST /api/game/next`
    async fn next(&self) -> Result<()>;

    /// `POST /api/game/reset`
    async fn reset(&self) -> Result<()>;

    /// `POST /api/game/random`
    async fn randomize(&self) -> Result<()>;

    /// `POST /api/game/pattern`
    async fn pattern(&self) -> Result<()>;

    /// `POST /api/game/cell`
    async fn set_cell(&self, update: CellUpdate) -> Result<()>;
}

/// reqwest-backed [`GameApi`]
#[derive(Debug, Clone)]
pub struct HttpGameApi {
    http: Client,
    base_url: Url,
}

impl HttpGameApi {
    /// Create a client for the server at `base_url`.
    ///
    /// `timeout` of `None` keeps the transport default (no overall deadline).
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = normalize_base_url(base_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { http, base_url })
    }

    /// Base URL every endpoint is resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::invalid_url(path, e.to_string()))
    }

    async fn post_empty(&self, path: &str) -> Result<()> {
        let url = self.endpoint(path)?;
        debug!("POST {}", url);

        let response = self
            .http
            .post(url)
            .send()
            .await
            .map_err(|e| Error::transport(path, e.to_string()))?;
        check_status(path, response)?;
        Ok(())
    }
}

impl GameApi for HttpGameApi {
    async fn state(&self) -> Result<GameState> {
        let url = self.endpoint(paths::STATE)?;
        trace!("GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::transport(paths::STATE, e.to_string()))?;
        let response = check_status(paths::STATE, response)?;

        response
            .json::<GameState>()
            .await
            .map_err(|e| Error::decode(paths::STATE, e.to_string()))
    }

    async fn next(&self) -> Result<()> {
        self.post_empty(paths::NEXT).await
    }

    async fn reset(&self) -> Result<()> {
        self.post_empty(paths::RESET).await
    }

    async fn randomize(&self) -> Result<()> {
        self.post_empty(paths::RANDOM).await
    }

    async fn pattern(&self) -> Result<()> {
        self.post_empty(paths::PATTERN).await
    }

    async fn set_cell(&self, update: CellUpdate) -> Result<()> {
        let url = self.endpoint(paths::CELL)?;
        debug!("POST {} {:?}", url, update);

        let response = self
            .http
            .post(url)
            .json(&update)
            .send()
            .await
            .map_err(|e| Error::transport(paths::CELL, e.to_string()))?;
        check_status(paths::CELL, response)?;
        Ok(())
    }
}

/// Turn a non-2xx response into [`Error::HttpStatus`]
fn check_status(path: &str, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        warn!("{} returned {}", path, status);
        Err(Error::http_status(path, status.as_u16()))
    }
}

/// Parse the configured server address and make sure its path ends with a
/// slash, so relative endpoint paths are appended instead of replacing the
/// last segment (`http://host/gol` + `api/game/state` -> `/gol/api/game/state`).
fn normalize_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim()).map_err(|e| Error::invalid_url(raw, e.to_string()))?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(Error::invalid_url(raw, "expected an http(s) URL"));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
