pub mod builder;

use stats_datastore::{ChannelData, ChannelSummary, DataStore, ExportResult};

use crate::{
    error::Error,
    fetcher::{fetch_video_details, merge_details, MAX_BATCH_SIZE},
    flatten::KeyStyle,
    paginator::{collect_video_stubs, MAX_PAGE_SIZE},
    resolver::resolve_channel,
    yt::YouTubeApi,
};

/// Resolves a channel, enumerates its uploads, fetches per-video details in
/// batches and hands the merged records to the store. Every step runs to
/// completion before the next starts.
#[derive(Debug)]
pub struct ChannelProcessor<A, D>
where
    A: YouTubeApi,
    D: DataStore + Send + Sync + 'static,
{
    channel_id: String,
    api: A,
    store: D,
    page_size: u8,
    batch_size: usize,
    key_style: KeyStyle,
}

impl<A, D> ChannelProcessor<A, D>
where
    A: YouTubeApi,
    D: DataStore + Send + Sync + 'static,
{
    fn validate(&self) -> Result<(), Error> {
        if !(1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(Error::Config(format!(
                "page size must be between 1 and {MAX_PAGE_SIZE}, got {}",
                self.page_size
            )));
        }
        if !(1..=MAX_BATCH_SIZE).contains(&self.batch_size) {
            return Err(Error::Config(format!(
                "batch size must be between 1 and {MAX_BATCH_SIZE}, got {}",
                self.batch_size
            )));
        }
        if self.channel_id.trim().is_empty() {
            return Err(Error::Config("channel id must not be empty".into()));
        }
        Ok(())
    }

    /// Runs every stage up to, but not including, persistence.
    #[tracing::instrument(skip(self), fields(channel_id = %self.channel_id))]
    pub async fn collect(&self) -> Result<(ChannelSummary, ChannelData), Error> {
        self.validate()?;

        let summary = resolve_channel(&self.api, &self.channel_id).await?;

        let stubs = collect_video_stubs(
            &self.api,
            &summary.uploads_playlist_id,
            self.page_size,
            summary.video_count(),
        )
        .await?;
        let mut data: ChannelData = stubs.into_values().collect();

        let details =
            fetch_video_details(&self.api, &data.video_ids(), self.batch_size, self.key_style)
                .await?;
        let merged = merge_details(&mut data, details);

        tracing::info!(
            videos = data.len(),
            with_details = merged,
            "Merged playlist entries with video details"
        );

        Ok((summary, data))
    }

    #[tracing::instrument(skip(self), fields(channel_id = %self.channel_id))]
    pub async fn run(self) -> anyhow::Result<ExportResult> {
        let (summary, data) = self.collect().await?;

        let result = self
            .store
            .persist_export(&summary, &data)
            .await
            .inspect_err(|e| tracing::error!(error = ?e, "Failed to persist channel export"))?;

        tracing::info!(
            dir = %result.channel_dir.display(),
            rows = result.rows,
            "Channel export complete"
        );

        Ok(result)
    }
}
