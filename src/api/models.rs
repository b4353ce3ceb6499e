use serde::{Deserialize, Serialize};

use crate::data_models::RawCount;

/// Query string of `GET /api/search`. Everything is optional so that missing
/// parameters produce our own 400 body.
#[derive(Debug, Default, PartialEq)]
pub struct SearchParams {
    pub query: Option<String>,
    pub count: Option<String>,
    pub region_code: Option<String>,
    pub api_key: Option<String>,
}

impl SearchParams {
    /// Builds the parameters from raw query pairs. A repeated key keeps its first
    /// value; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = SearchParams::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "query" => &mut params.query,
                "count" => &mut params.count,
                "regionCode" => &mut params.region_code,
                "apiKey" => &mut params.api_key,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    pub channels: Vec<ChannelResult>,
    pub total: usize,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelResult {
    pub rank: usize,
    pub name: String,
    pub subscribers: String,
    pub handle: String,
    pub link: String,
    pub view_count: String,
    /// Passed through untouched, string or number alike.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_count: Option<RawCount>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_pairs_maps_camel_case_keys() {
        let params = SearchParams::from_pairs(pairs(&[
            ("query", "rust"),
            ("count", "5"),
            ("regionCode", "DE"),
            ("apiKey", "k"),
            ("utm_source", "x"),
        ]));
        assert_eq!(
            params,
            SearchParams {
                query: Some("rust".to_string()),
                count: Some("5".to_string()),
                region_code: Some("DE".to_string()),
                api_key: Some("k".to_string()),
            }
        );
    }

    #[test]
    fn test_from_pairs_keeps_first_repeated_value() {
        let params = SearchParams::from_pairs(pairs(&[
            ("query", "first"),
            ("query", "second"),
            ("apiKey", "k"),
        ]));
        assert_eq!(params.query.as_deref(), Some("first"));
    }
}
