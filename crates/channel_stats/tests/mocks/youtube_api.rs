use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use channel_stats::{
    types::{
        ChannelContentDetails, ChannelItem, ChannelListResponse, ChannelSnippet,
        PlaylistItem, PlaylistItemContentDetails, PlaylistItemListResponse, PlaylistItemSnippet,
        RelatedPlaylists, VideoListResponse,
    },
    yt::YouTubeApi,
    Error,
};
use serde_json::{json, Map, Value};

/// In-memory channel whose uploads are served page by page, using the offset
/// of the next page as the continuation token.
#[derive(Clone)]
pub struct MockYouTubeApi {
    pub title: String,
    pub video_ids: Vec<String>,
    /// `videoCount` reported by the channel statistics, defaults to the
    /// number of videos
    pub reported_video_count: Option<u64>,
    /// Ids `videos.list` silently leaves out
    pub dropped: HashSet<String>,
    pub reverse_details: bool,
    pub channel_missing: bool,
    pub fail_playlist_with: Option<String>,
    pub fail_videos_with: Option<String>,
    pub page_calls: Arc<Mutex<Vec<(u8, Option<String>)>>>,
    pub batch_calls: Arc<Mutex<Vec<Vec<String>>>>,
}

impl MockYouTubeApi {
    pub fn with_videos(count: usize) -> Self {
        Self {
            title: "Mock News Channel".to_string(),
            video_ids: (0..count).map(|i| format!("video{i:04}")).collect(),
            reported_video_count: None,
            dropped: HashSet::new(),
            reverse_details: false,
            channel_missing: false,
            fail_playlist_with: None,
            fail_videos_with: None,
            page_calls: Arc::new(Mutex::new(Vec::new())),
            batch_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn missing_channel() -> Self {
        Self {
            channel_missing: true,
            ..Self::with_videos(0)
        }
    }

    pub fn detail_title(video_id: &str) -> String {
        format!("Title of {video_id}")
    }

    fn detail(video_id: &str) -> Map<String, Value> {
        json!({
            "id": video_id,
            "snippet": {
                "title": Self::detail_title(video_id),
                "description": "A mocked video",
                "thumbnails": {"standard": {"url": format!("https://i.ytimg.com/vi/{video_id}/sddefault.jpg")}},
                "tags": ["mock", "news"]
            },
            "contentDetails": {"duration": "PT3M20S", "definition": "hd", "caption": "false"},
            "statistics": {"viewCount": "100", "likeCount": "10", "commentCount": "1"}
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    fn published_at(idx: usize) -> String {
        format!("2024-01-01T00:00:{:02}Z", idx % 60)
    }
}

impl YouTubeApi for MockYouTubeApi {
    async fn list_channel_statistics(&self, _channel_id: &str) -> Result<ChannelListResponse, Error> {
        if self.channel_missing {
            return Ok(ChannelListResponse::default());
        }

        let video_count = self
            .reported_video_count
            .unwrap_or(self.video_ids.len() as u64);
        let statistics = json!({
            "viewCount": "123456",
            "subscriberCount": "789",
            "hiddenSubscriberCount": false,
            "videoCount": video_count.to_string()
        });

        Ok(ChannelListResponse {
            items: vec![ChannelItem {
                snippet: Some(ChannelSnippet {
                    title: self.title.clone(),
                }),
                statistics: statistics.as_object().cloned(),
                content_details: None,
            }],
        })
    }

    async fn list_channel_uploads(&self, _channel_id: &str) -> Result<ChannelListResponse, Error> {
        if self.channel_missing {
            return Ok(ChannelListResponse::default());
        }

        Ok(ChannelListResponse {
            items: vec![ChannelItem {
                content_details: Some(ChannelContentDetails {
                    related_playlists: RelatedPlaylists {
                        uploads: Some("UUmock".to_string()),
                    },
                }),
                ..Default::default()
            }],
        })
    }

    async fn list_playlist_items(
        &self,
        _playlist_id: &str,
        max_results: u8,
        page_token: Option<&str>,
    ) -> Result<PlaylistItemListResponse, Error> {
        self.page_calls
            .lock()
            .unwrap()
            .push((max_results, page_token.map(String::from)));

        if let Some(ref msg) = self.fail_playlist_with {
            return Err(Error::Api {
                status: 500,
                message: msg.clone(),
            });
        }

        let start = page_token
            .map(|t| t.parse::<usize>().expect("mock page token"))
            .unwrap_or(0);
        let end = (start + max_results as usize).min(self.video_ids.len());

        let items = (start..end)
            .map(|idx| PlaylistItem {
                content_details: PlaylistItemContentDetails {
                    video_id: self.video_ids[idx].clone(),
                    video_published_at: Some(Self::published_at(idx)),
                },
                snippet: PlaylistItemSnippet {
                    position: idx as u32,
                },
            })
            .collect();

        Ok(PlaylistItemListResponse {
            next_page_token: (end < self.video_ids.len()).then(|| end.to_string()),
            items,
        })
    }

    async fn list_videos(&self, video_ids: &[String]) -> Result<VideoListResponse, Error> {
        self.batch_calls.lock().unwrap().push(video_ids.to_vec());

        if let Some(ref msg) = self.fail_videos_with {
            return Err(Error::Api {
                status: 403,
                message: msg.clone(),
            });
        }

        let mut items: Vec<_> = video_ids
            .iter()
            .filter(|id| !self.dropped.contains(*id))
            .map(|id| Self::detail(id))
            .collect();
        if self.reverse_details {
            items.reverse();
        }

        Ok(VideoListResponse { items })
    }
}
