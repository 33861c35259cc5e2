use std::{future::Future, path::PathBuf};

use crate::{ChannelData, ChannelSummary};

pub mod fs;

pub trait DataStore {
    /// Persists one export of `summary` and its merged per-video `data`.
    fn persist_export(
        &self,
        summary: &ChannelSummary,
        data: &ChannelData,
    ) -> impl Future<Output = anyhow::Result<ExportResult>> + Send;
}

impl<T: DataStore + Send + Sync> DataStore for &T {
    async fn persist_export(
        &self,
        summary: &ChannelSummary,
        data: &ChannelData,
    ) -> anyhow::Result<ExportResult> {
        (**self).persist_export(summary, data).await
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResult {
    pub channel_dir: PathBuf,
    pub files: Vec<PathBuf>,
    pub rows: usize,
}
