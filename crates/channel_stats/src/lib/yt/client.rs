use itertools::Itertools;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use serde::de::DeserializeOwned;

use crate::{
    error::Error,
    types::{ChannelListResponse, PlaylistItemListResponse, VideoListResponse},
    yt::YouTubeApi,
};

/// API key authenticated client for the YouTube Data API v3.
pub struct DataApiClient {
    client: ClientWithMiddleware,
    api_key: String,
    base_url: String,
}

impl DataApiClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://www.googleapis.com/youtube/v3";

    const VIDEO_FIELDS: &'static str = "items(id,snippet(title,description,thumbnails/standard/url,tags),contentDetails(duration,definition,caption),statistics(viewCount,likeCount,commentCount),liveStreamingDetails)";

    /// Retries transient transport failures up to `max_retries` times with
    /// exponential backoff. Zero disables retrying.
    pub fn new(api_key: impl Into<String>, max_retries: u32) -> Result<Self, Error> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::Config("API key must not be empty".into()));
        }

        let mut builder = ClientBuilder::new(reqwest::Client::new());
        if max_retries > 0 {
            let policy = ExponentialBackoff::builder().build_with_max_retries(max_retries);
            builder = builder.with(RetryTransientMiddleware::new_with_policy(policy));
        }

        Ok(Self {
            client: builder.build(),
            api_key,
            base_url: Self::DEFAULT_BASE_URL.into(),
        })
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &[(&str, &str)],
    ) -> Result<T, Error> {
        // the key goes in a header so it never shows up in logged urls
        let resp = self
            .client
            .get(format!("{}/{resource}", self.base_url))
            .header("X-goog-api-key", &self.api_key)
            .query(query)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, resource, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            tracing::error!(status, resource, "YouTube API returned an error");
            return Err(Error::Api { status, message });
        }

        Ok(resp.json::<T>().await?)
    }
}

impl YouTubeApi for DataApiClient {
    async fn list_channel_statistics(&self, channel_id: &str) -> Result<ChannelListResponse, Error> {
        self.get_json(
            "channels",
            &[
                ("part", "snippet,statistics"),
                ("id", channel_id),
                ("fields", "items(snippet(title),statistics)"),
            ],
        )
        .await
    }

    async fn list_channel_uploads(&self, channel_id: &str) -> Result<ChannelListResponse, Error> {
        self.get_json(
            "channels",
            &[
                ("part", "contentDetails"),
                ("id", channel_id),
                ("fields", "items/contentDetails/relatedPlaylists/uploads"),
            ],
        )
        .await
    }

    async fn list_playlist_items(
        &self,
        playlist_id: &str,
        max_results: u8,
        page_token: Option<&str>,
    ) -> Result<PlaylistItemListResponse, Error> {
        let max_results = max_results.to_string();
        let mut query = vec![
            ("part", "contentDetails,snippet"),
            ("playlistId", playlist_id),
            (
                "fields",
                "nextPageToken,items(contentDetails(videoId,videoPublishedAt),snippet/position)",
            ),
            ("maxResults", max_results.as_str()),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken", token));
        }

        self.get_json("playlistItems", &query).await
    }

    async fn list_videos(&self, video_ids: &[String]) -> Result<VideoListResponse, Error> {
        let ids = video_ids.iter().join(",");
        self.get_json(
            "videos",
            &[
                ("part", "snippet,contentDetails,statistics,liveStreamingDetails"),
                ("id", ids.as_str()),
                ("fields", Self::VIDEO_FIELDS),
            ],
        )
        .await
    }
}
