//! Response shapes of the YouTube Data API v3 list operations, trimmed to
//! the fields requested through the `fields` parameter.

use serde::Deserialize;
use serde_json::{Map, Value};
use stats_datastore::VideoStub;

/// `channels.list`. The API leaves out `items` entirely when nothing matched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChannelListResponse {
    #[serde(default)]
    pub items: Vec<ChannelItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelItem {
    pub snippet: Option<ChannelSnippet>,
    pub statistics: Option<Map<String, Value>>,
    pub content_details: Option<ChannelContentDetails>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChannelSnippet {
    pub title: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelContentDetails {
    #[serde(default)]
    pub related_playlists: RelatedPlaylists,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RelatedPlaylists {
    pub uploads: Option<String>,
}

/// One page of `playlistItems.list`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemListResponse {
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItem {
    pub content_details: PlaylistItemContentDetails,
    #[serde(default)]
    pub snippet: PlaylistItemSnippet,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemContentDetails {
    pub video_id: String,
    pub video_published_at: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaylistItemSnippet {
    #[serde(default)]
    pub position: u32,
}

impl From<PlaylistItem> for VideoStub {
    fn from(
        PlaylistItem {
            content_details,
            snippet,
        }: PlaylistItem,
    ) -> Self {
        VideoStub {
            video_id: content_details.video_id,
            video_published_at: content_details.video_published_at,
            position: snippet.position,
        }
    }
}

/// `videos.list`. Items are kept as raw JSON objects since they are
/// flattened generically.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<Map<String, Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_channel_response_has_no_items() {
        let resp: ChannelListResponse = serde_json::from_value(json!({})).unwrap();
        assert!(resp.items.is_empty());
    }

    #[test]
    fn test_playlist_page_into_stubs() {
        let page: PlaylistItemListResponse = serde_json::from_value(json!({
            "nextPageToken": "CDIQAA",
            "items": [
                {
                    "contentDetails": {"videoId": "v1", "videoPublishedAt": "2023-11-01T08:00:00Z"},
                    "snippet": {"position": 0}
                },
                {
                    "contentDetails": {"videoId": "v2"},
                    "snippet": {"position": 1}
                }
            ]
        }))
        .unwrap();

        assert_eq!(page.next_page_token.as_deref(), Some("CDIQAA"));
        let stubs: Vec<VideoStub> = page.items.into_iter().map(VideoStub::from).collect();
        assert_eq!(stubs[0].video_id, "v1");
        assert_eq!(
            stubs[0].video_published_at.as_deref(),
            Some("2023-11-01T08:00:00Z")
        );
        assert_eq!(stubs[1].video_published_at, None);
        assert_eq!(stubs[1].position, 1);
    }

    #[test]
    fn test_uploads_playlist_nested_path() {
        let resp: ChannelListResponse = serde_json::from_value(json!({
            "items": [{"contentDetails": {"relatedPlaylists": {"uploads": "UUabc"}}}]
        }))
        .unwrap();

        let uploads = resp.items[0]
            .content_details
            .as_ref()
            .and_then(|c| c.related_playlists.uploads.as_deref());
        assert_eq!(uploads, Some("UUabc"));
    }
}
