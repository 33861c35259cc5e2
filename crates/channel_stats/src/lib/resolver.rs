use stats_datastore::ChannelSummary;

use crate::{error::Error, yt::YouTubeApi};

/// Resolves `channel_id` to its title, statistics and uploads playlist.
///
/// A channel id that matches nothing is fatal and surfaces as
/// [`Error::ChannelNotFound`].
#[tracing::instrument(skip(api))]
pub async fn resolve_channel<A: YouTubeApi>(
    api: &A,
    channel_id: &str,
) -> Result<ChannelSummary, Error> {
    let channel = api
        .list_channel_statistics(channel_id)
        .await?
        .items
        .into_iter()
        .next()
        .ok_or_else(|| Error::ChannelNotFound(channel_id.to_string()))?;

    let uploads_playlist_id = api
        .list_channel_uploads(channel_id)
        .await?
        .items
        .into_iter()
        .next()
        .and_then(|item| item.content_details)
        .and_then(|details| details.related_playlists.uploads)
        .ok_or_else(|| Error::ChannelNotFound(channel_id.to_string()))?;

    let summary = ChannelSummary {
        channel_id: channel_id.to_string(),
        title: channel.snippet.map(|s| s.title).unwrap_or_default(),
        statistics: channel.statistics.unwrap_or_default(),
        uploads_playlist_id,
    };

    tracing::info!(
        title = %summary.title,
        video_count = summary.video_count(),
        uploads = %summary.uploads_playlist_id,
        "Resolved channel"
    );

    Ok(summary)
}
