use crate::api::models::ChannelResult;
use crate::data_models::{ChannelItem, SearchResultItem};
use crate::format::format_count;

pub const CHANNEL_BASE_URL: &str = "https://www.youtube.com/";

/// Channel ids of the search hits in relevance order. Hits without a channel id
/// are skipped.
pub fn collect_channel_ids(items: &[SearchResultItem]) -> Vec<&str> {
    items
        .iter()
        .filter_map(|item| item.id.channel_id.as_deref())
        .collect()
}

/// Turns channel detail items into the ranked result list.
///
/// Ranks follow the order the details endpoint returned, which the API does not
/// promise to be the search order.
pub fn rank_channels(items: Vec<ChannelItem>) -> Vec<ChannelResult> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let custom_url = item
                .snippet
                .custom_url
                .as_deref()
                .filter(|url| !url.is_empty());

            ChannelResult {
                rank: index + 1,
                handle: handle_for(custom_url, &item.snippet.title),
                link: link_for(custom_url, &item.id),
                subscribers: format_count(item.statistics.subscriber_count.as_ref()),
                view_count: format_count(item.statistics.view_count.as_ref()),
                video_count: item.statistics.video_count,
                name: item.snippet.title,
            }
        })
        .collect()
}

fn handle_for(custom_url: Option<&str>, title: &str) -> String {
    match custom_url {
        Some(handle) => handle.to_string(),
        None => {
            let compact: String = title.split_whitespace().collect();
            format!("@{compact}")
        }
    }
}

fn link_for(custom_url: Option<&str>, channel_id: &str) -> String {
    match custom_url {
        Some(handle) => format!("{CHANNEL_BASE_URL}{handle}"),
        None => format!("{CHANNEL_BASE_URL}channel/{channel_id}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_models::{ChannelSnippet, ChannelStatistics, RawCount, SearchResultId};

    fn channel(id: &str, title: &str, custom_url: Option<&str>) -> ChannelItem {
        ChannelItem {
            id: id.to_string(),
            snippet: ChannelSnippet {
                title: title.to_string(),
                custom_url: custom_url.map(str::to_string),
            },
            statistics: ChannelStatistics::default(),
        }
    }

    #[test]
    fn test_handle_falls_back_to_compacted_title() {
        assert_eq!(handle_for(None, "Rust  Lang\tDaily\n"), "@RustLangDaily");
        assert_eq!(handle_for(Some("@rustlang"), "Rust Lang"), "@rustlang");
    }

    #[test]
    fn test_link_prefers_custom_url() {
        assert_eq!(
            link_for(Some("@rustlang"), "UC123"),
            "https://www.youtube.com/@rustlang"
        );
        assert_eq!(
            link_for(None, "UC123"),
            "https://www.youtube.com/channel/UC123"
        );
    }

    #[test]
    fn test_empty_custom_url_is_ignored() {
        let ranked = rank_channels(vec![channel("UCabc", "Some Channel", Some(""))]);
        assert_eq!(ranked[0].handle, "@SomeChannel");
        assert_eq!(ranked[0].link, "https://www.youtube.com/channel/UCabc");
    }

    #[test]
    fn test_ranks_are_dense_and_ordered() {
        let ranked = rank_channels(vec![
            channel("UC1", "First", None),
            channel("UC2", "Second", None),
            channel("UC3", "Third", None),
        ]);
        let ranks: Vec<usize> = ranked.iter().map(|c| c.rank).collect();
        let names: Vec<&str> = ranked.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_missing_statistics_render_hidden() {
        let ranked = rank_channels(vec![channel("UC1", "Quiet", None)]);
        assert_eq!(ranked[0].subscribers, "Hidden");
        assert_eq!(ranked[0].view_count, "Hidden");
        assert_eq!(ranked[0].video_count, None);
    }

    #[test]
    fn test_video_count_keeps_upstream_type() {
        let mut numeric = channel("UC1", "Numbers", None);
        numeric.statistics.video_count = Some(RawCount::Number(7));
        let mut textual = channel("UC2", "Strings", None);
        textual.statistics.video_count = Some(RawCount::from("12"));

        let ranked = rank_channels(vec![numeric, textual]);
        assert_eq!(ranked[0].video_count, Some(RawCount::Number(7)));
        assert_eq!(ranked[1].video_count, Some(RawCount::Text("12".to_string())));
    }

    #[test]
    fn test_collect_channel_ids_skips_missing() {
        let items = vec![
            SearchResultItem {
                id: SearchResultId {
                    channel_id: Some("UCa".to_string()),
                },
            },
            SearchResultItem {
                id: SearchResultId { channel_id: None },
            },
            SearchResultItem {
                id: SearchResultId {
                    channel_id: Some("UCb".to_string()),
                },
            },
        ];
        assert_eq!(collect_channel_ids(&items), vec!["UCa", "UCb"]);
    }
}
