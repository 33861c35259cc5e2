use indexmap::IndexMap;
use stats_datastore::VideoStub;

use crate::{error::Error, yt::YouTubeApi};

/// Largest `maxResults` `playlistItems.list` accepts
pub const MAX_PAGE_SIZE: u8 = 50;

/// Pages beyond this one are reported every `PROGRESS_EVERY` pages
const PROGRESS_AFTER: u64 = 20;
const PROGRESS_EVERY: u64 = 20;

/// Number of pages `video_count` uploads should take. Only used for progress
/// reporting; the API's page token decides when pagination ends.
pub fn estimate_pages(video_count: u64, page_size: u8) -> u64 {
    video_count.div_ceil(u64::from(page_size.max(1)))
}

/// Walks every page of `playlist_id`, collecting a stub per video keyed by
/// its id in playlist order.
///
/// Pagination stops only once a page comes back without `nextPageToken`.
#[tracing::instrument(skip(api))]
pub async fn collect_video_stubs<A: YouTubeApi>(
    api: &A,
    playlist_id: &str,
    page_size: u8,
    expected_videos: u64,
) -> Result<IndexMap<String, VideoStub>, Error> {
    let estimated_pages = estimate_pages(expected_videos, page_size);
    let mut stubs = IndexMap::new();
    let mut page_token: Option<String> = None;
    let mut page = 0_u64;

    loop {
        page += 1;
        let response = api
            .list_playlist_items(playlist_id, page_size, page_token.as_deref())
            .await
            .inspect_err(|e| tracing::error!(error = %e, page, "Failed to fetch playlist page"))?;

        tracing::debug!(page, items = response.items.len(), "Fetched playlist page");
        for item in response.items {
            let stub = VideoStub::from(item);
            stubs.insert(stub.video_id.clone(), stub);
        }

        page_token = response.next_page_token;
        if page_token.is_none() {
            break;
        }

        if page > PROGRESS_AFTER && page % PROGRESS_EVERY == 0 {
            tracing::info!(page, estimated_pages, "Playlist pages searched");
        }
    }

    tracing::info!(pages = page, videos = stubs.len(), "Collected uploads playlist");
    Ok(stubs)
}
