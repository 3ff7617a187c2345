use anyhow::{Context, Result};
use log::{debug, warn};
use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::RunConfig;

/// Canvas API client. Owns the HTTP client together with the base URL and
/// bearer token, so a request cannot be assembled against the wrong host or
/// without credentials.
pub struct Canvas {
    client: Client,
    base_url: String,
    access_token: String,
}

impl Canvas {
    pub fn new(config: &RunConfig) -> Result<Self> {
        Self::with_base_url(
            format!("https://{}", config.hostname),
            config.access_token.clone(),
        )
    }

    /// Client against an explicit base URL, e.g. a local server in tests.
    pub fn with_base_url(base_url: String, access_token: String) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url,
            access_token,
        })
    }

    pub fn api_url(&self, rest: &str) -> String {
        format!("{}/api/v1/{rest}", self.base_url)
    }

    /// Fetch every page of a paginated listing, following the `Link`
    /// header's `rel="next"` relation until it disappears.
    ///
    /// A non-200 response ends the chain: the status and body are logged
    /// and whatever was accumulated so far is returned. Transport failures
    /// and unparseable bodies abort the run instead. Note there is no cap
    /// on the number of pages; a server that keeps advertising a next page
    /// keeps getting requests.
    pub async fn fetch_all(&self, url: &str) -> Result<Vec<Value>> {
        let mut items = Vec::new();
        let mut next = Some(url.to_owned());
        while let Some(url) = next {
            debug!("GET {url}");
            let response = self
                .client
                .get(&url)
                .bearer_auth(&self.access_token)
                .send()
                .await?;
            let status = response.status();
            if status != StatusCode::OK {
                let body = response.text().await.unwrap_or_default();
                warn!("GET {url} returned {status}: {body}");
                break;
            }
            next = response
                .headers()
                .get(header::LINK)
                .and_then(|value| value.to_str().ok())
                .and_then(next_link);
            let page: Vec<Value> = response.json().await.context("parse listing page")?;
            items.extend(page);
        }
        Ok(items)
    }

    /// Single non-paginated GET. Returns `None` on a non-200 status so the
    /// caller can skip the resource and move on.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<Option<T>> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;
        let status = response.status();
        if status != StatusCode::OK {
            warn!("GET {url} returned {status}");
            return Ok(None);
        }
        let parsed = response.json().await.context("parse response body")?;
        Ok(Some(parsed))
    }
}

/// Extract the `rel="next"` target from a `Link` header value.
fn next_link(header: &str) -> Option<String> {
    header.split(',').find_map(|entry| {
        let (target, params) = entry.split_once(';')?;
        if !params.contains(r#"rel="next""#) {
            return None;
        }
        Some(
            target
                .trim()
                .trim_start_matches('<')
                .trim_end_matches('>')
                .to_owned(),
        )
    })
}
