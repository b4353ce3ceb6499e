//! Response shapes of the YouTube Data API v3 endpoints we call.
//!
//! Only the fields that end up in a `ChannelResult` are modelled; everything else in
//! the upstream payload is ignored by serde.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error envelope returned by the API alongside non-2xx statuses.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ApiErrorBody {
    pub message: Option<String>,
}

/// `GET /search` response.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct SearchListResponse {
    pub items: Option<Vec<SearchResultItem>>,
    pub error: Option<ApiErrorBody>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SearchResultItem {
    #[serde(default)]
    pub id: SearchResultId,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultId {
    pub channel_id: Option<String>,
}

/// `GET /channels` response.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ChannelListResponse {
    pub items: Option<Vec<ChannelItem>>,
    pub error: Option<ApiErrorBody>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ChannelItem {
    pub id: String,
    pub snippet: ChannelSnippet,
    #[serde(default)]
    pub statistics: ChannelStatistics,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSnippet {
    pub title: String,
    pub custom_url: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatistics {
    pub subscriber_count: Option<RawCount>,
    pub view_count: Option<RawCount>,
    pub video_count: Option<RawCount>,
}

/// A count as the API sends it: normally a decimal string (`"1200"`), occasionally a
/// bare JSON number. Serializes back in the same JSON type it arrived as.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum RawCount {
    Number(u64),
    Text(String),
}

impl fmt::Display for RawCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawCount::Number(n) => write!(f, "{n}"),
            RawCount::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for RawCount {
    fn from(n: u64) -> Self {
        RawCount::Number(n)
    }
}

impl From<&str> for RawCount {
    fn from(s: &str) -> Self {
        RawCount::Text(s.to_string())
    }
}
