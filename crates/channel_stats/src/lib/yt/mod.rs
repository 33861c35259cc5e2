pub mod client;

use std::future::Future;

use crate::{
    error::Error,
    types::{ChannelListResponse, PlaylistItemListResponse, VideoListResponse},
};

/// The read-only list operations of the YouTube Data API the pipeline
/// consumes. Each call returns a single response page.
pub trait YouTubeApi {
    /// `channels.list` for the channel title and aggregate statistics
    fn list_channel_statistics(
        &self,
        channel_id: &str,
    ) -> impl Future<Output = Result<ChannelListResponse, Error>>;

    /// `channels.list` for the uploads playlist id
    fn list_channel_uploads(
        &self,
        channel_id: &str,
    ) -> impl Future<Output = Result<ChannelListResponse, Error>>;

    /// `playlistItems.list`. The first page is requested without a token.
    fn list_playlist_items(
        &self,
        playlist_id: &str,
        max_results: u8,
        page_token: Option<&str>,
    ) -> impl Future<Output = Result<PlaylistItemListResponse, Error>>;

    /// `videos.list` for one batch of ids
    fn list_videos(
        &self,
        video_ids: &[String],
    ) -> impl Future<Output = Result<VideoListResponse, Error>>;
}
