use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use nanoid::nanoid;
use std::sync::Arc;
use tracing::Instrument;

use crate::channels::{collect_channel_ids, rank_channels};
use crate::error::{ApiError, NO_CHANNELS_FOUND};
use crate::youtube::{ChannelSearchQuery, YouTubeClient};

use super::models::{SearchParams, SearchResponse};

/// Page size used when `count` is missing or unusable; also the upper bound.
pub const MAX_RESULTS: u32 = 50;

/// Region value meaning "no region filter".
pub const GLOBAL_REGION: &str = "Global";

pub async fn preflight_handler() -> StatusCode {
    StatusCode::OK
}

pub async fn search_handler(
    State(client): State<Arc<YouTubeClient>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<SearchResponse>, ApiError> {
    let params = SearchParams::from_pairs(pairs);
    let request_id = nanoid!(10);
    let span = tracing::info_span!("channel_search", %request_id);

    search_channels(&client, params)
        .instrument(span)
        .await
        .map(Json)
}

async fn search_channels(
    client: &YouTubeClient,
    params: SearchParams,
) -> Result<SearchResponse, ApiError> {
    let (Some(query), Some(api_key)) = (non_empty(params.query), non_empty(params.api_key))
    else {
        return Err(ApiError::MissingParams);
    };

    let search = ChannelSearchQuery {
        query: &query,
        max_results: resolve_max_results(params.count.as_deref()),
        region_code: region_filter(params.region_code.as_deref()),
        api_key: &api_key,
    };
    tracing::info!(
        query = %query,
        max_results = search.max_results,
        region = search.region_code.unwrap_or("global"),
        "searching channels"
    );

    let reply = client.search_channels(&search).await?;
    let hits = match reply.body.items {
        Some(items) if reply.ok => items,
        _ => {
            let message = reply
                .body
                .error
                .and_then(|error| error.message)
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| NO_CHANNELS_FOUND.to_string());
            return Err(ApiError::UpstreamSearch(message));
        }
    };

    let channel_ids = collect_channel_ids(&hits);
    if channel_ids.is_empty() {
        tracing::info!("search matched no channels");
        return Ok(SearchResponse {
            channels: Vec::new(),
            total: 0,
        });
    }
    let channel_ids = channel_ids.join(",");

    let reply = client.list_channels(&channel_ids, &api_key).await?;
    let details = match reply.body.items {
        Some(items) if reply.ok => items,
        _ => return Err(ApiError::UpstreamDetail),
    };

    let channels = rank_channels(details);
    let total = channels.len();
    tracing::info!(total, "channel search finished");

    Ok(SearchResponse { channels, total })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Upstream page size for a raw `count` parameter, always within `1..=50`.
///
/// Missing, non-integer and zero values fall back to 50; negatives become 1.
pub fn resolve_max_results(count: Option<&str>) -> u32 {
    match count.and_then(|raw| raw.trim().parse::<i64>().ok()) {
        None | Some(0) => MAX_RESULTS,
        Some(n) if n < 0 => 1,
        Some(n) => n.min(i64::from(MAX_RESULTS)) as u32,
    }
}

/// Region to forward upstream, if any. `"Global"` and empty values mean no filter.
pub fn region_filter(region_code: Option<&str>) -> Option<&str> {
    region_code.filter(|code| !code.is_empty() && *code != GLOBAL_REGION)
}

#[test]
fn test_resolve_max_results() {
    assert_eq!(resolve_max_results(None), 50);
    assert_eq!(resolve_max_results(Some("")), 50);
    assert_eq!(resolve_max_results(Some("ten")), 50);
    assert_eq!(resolve_max_results(Some("12.5")), 50);
    assert_eq!(resolve_max_results(Some("0")), 50);
    assert_eq!(resolve_max_results(Some("-3")), 1);
    assert_eq!(resolve_max_results(Some("1")), 1);
    assert_eq!(resolve_max_results(Some("10")), 10);
    assert_eq!(resolve_max_results(Some(" 25 ")), 25);
    assert_eq!(resolve_max_results(Some("50")), 50);
    assert_eq!(resolve_max_results(Some("1000")), 50);
}

#[test]
fn test_region_filter() {
    assert_eq!(region_filter(None), None);
    assert_eq!(region_filter(Some("")), None);
    assert_eq!(region_filter(Some("Global")), None);
    assert_eq!(region_filter(Some("US")), Some("US"));
    assert_eq!(region_filter(Some("global")), Some("global"));
}
