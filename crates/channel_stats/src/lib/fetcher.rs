use std::slice::Chunks;

use indexmap::IndexMap;
use serde_json::{Map, Value};
use stats_datastore::{ChannelData, VideoRecord};

use crate::{
    error::Error,
    flatten::{flatten, KeyStyle},
    yt::YouTubeApi,
};

/// Largest number of ids `videos.list` accepts in one call
pub const MAX_BATCH_SIZE: usize = 50;

/// Flattened detail fields keyed by video id
pub type VideoDetails = IndexMap<String, VideoRecord>;

/// Splits `video_ids` into consecutive batches of at most `batch_size`.
pub fn batch_ids(video_ids: &[String], batch_size: usize) -> Chunks<'_, String> {
    video_ids.chunks(batch_size.max(1))
}

/// Fetches extended fields for every id, one `videos.list` call per batch.
#[tracing::instrument(skip(api, video_ids), fields(videos = video_ids.len()))]
pub async fn fetch_video_details<A: YouTubeApi>(
    api: &A,
    video_ids: &[String],
    batch_size: usize,
    key_style: KeyStyle,
) -> Result<VideoDetails, Error> {
    let mut details = VideoDetails::with_capacity(video_ids.len());

    for (idx, batch) in batch_ids(video_ids, batch_size).enumerate() {
        let response = api
            .list_videos(batch)
            .await
            .inspect_err(|e| tracing::error!(error = %e, batch = idx, "Failed to fetch video batch"))?;

        tracing::debug!(
            batch = idx,
            requested = batch.len(),
            returned = response.items.len(),
            "Fetched video batch"
        );
        details.extend(key_batch(batch, response.items, key_style));
    }

    Ok(details)
}

/// Pairs each returned item with the video it describes.
///
/// Items are matched on their own `id` field. An item without one falls back
/// to its position in the batch, which is only trusted when the API returned
/// exactly as many items as were requested. Ids outside the batch are ignored.
pub fn key_batch(
    batch: &[String],
    items: Vec<Map<String, Value>>,
    key_style: KeyStyle,
) -> Vec<(String, VideoRecord)> {
    let positional = items.len() == batch.len();
    let mut keyed = Vec::with_capacity(items.len());

    for (idx, mut item) in items.into_iter().enumerate() {
        let video_id = match item.shift_remove("id") {
            Some(Value::String(id)) => id,
            _ if positional => batch[idx].clone(),
            _ => {
                tracing::warn!(index = idx, "Skipping video detail without an id");
                continue;
            }
        };

        if !batch.contains(&video_id) {
            tracing::warn!(%video_id, "Skipping video detail that was not requested");
            continue;
        }

        keyed.push((video_id, flatten(item, key_style)));
    }

    if keyed.len() < batch.len() {
        tracing::warn!(
            requested = batch.len(),
            returned = keyed.len(),
            "Some videos in the batch returned no details"
        );
    }

    keyed
}

/// Unions every detail record into its stub record. Returns how many records
/// were updated; details for ids without a stub are dropped.
pub fn merge_details(data: &mut ChannelData, details: VideoDetails) -> usize {
    let mut merged = 0;
    for (video_id, fields) in details {
        if data.merge_fields(&video_id, fields) {
            merged += 1;
        } else {
            tracing::warn!(%video_id, "No playlist entry for video detail");
        }
    }
    merged
}
