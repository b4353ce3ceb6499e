//! Thin client for the two YouTube Data API endpoints a channel search needs.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::data_models::{ChannelListResponse, SearchListResponse};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Parsed upstream body together with whether the status was 2xx. The API sends a
/// JSON error envelope on failures, so the body is decoded either way.
#[derive(Debug)]
pub struct UpstreamReply<T> {
    pub ok: bool,
    pub body: T,
}

/// Parameters of one `search` call. `region_code` is forwarded as-is; callers
/// decide whether a region applies.
#[derive(Debug, Clone, Copy)]
pub struct ChannelSearchQuery<'a> {
    pub query: &'a str,
    pub max_results: u32,
    pub region_code: Option<&'a str>,
    pub api_key: &'a str,
}

#[derive(Debug, Clone)]
pub struct YouTubeClient {
    http: Client,
    base_url: String,
}

impl YouTubeClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.youtube_api_base_url, config.upstream_timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Keyword search restricted to channels, ordered by relevance.
    pub async fn search_channels(
        &self,
        search: &ChannelSearchQuery<'_>,
    ) -> Result<UpstreamReply<SearchListResponse>, reqwest::Error> {
        let max_results = search.max_results.to_string();
        let mut params = vec![
            ("q", search.query),
            ("type", "channel"),
            ("part", "snippet"),
            ("maxResults", max_results.as_str()),
            ("order", "relevance"),
            ("key", search.api_key),
        ];
        if let Some(region_code) = search.region_code {
            params.push(("regionCode", region_code));
        }

        self.get_json("search", &params).await
    }

    /// Snippet and statistics for a comma-separated list of channel ids.
    pub async fn list_channels(
        &self,
        channel_ids: &str,
        api_key: &str,
    ) -> Result<UpstreamReply<ChannelListResponse>, reqwest::Error> {
        let params = [
            ("id", channel_ids),
            ("part", "snippet,statistics"),
            ("key", api_key),
        ];
        self.get_json("channels", &params).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<UpstreamReply<T>, reqwest::Error> {
        let url = format!("{}/{endpoint}", self.base_url);
        tracing::debug!(%url, "calling upstream");

        // The request URL carries the caller's key, so it is stripped from errors.
        let response = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        let body = response
            .json::<T>()
            .await
            .map_err(reqwest::Error::without_url)?;

        tracing::debug!(%url, status = status.as_u16(), "upstream replied");
        Ok(UpstreamReply {
            ok: status.is_success(),
            body,
        })
    }
}
