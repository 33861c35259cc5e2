use std::{io::ErrorKind, path::PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};

use crate::{
    datastore::{DataStore, ExportResult},
    export::{to_csv, to_pretty_json, ExportLayout},
    ChannelData, ChannelSummary,
};

/// Writes exports as flat files below `root`.
#[derive(Debug, Clone)]
pub struct FsDataStore {
    root: PathBuf,
}

impl FsDataStore {
    /// Creates the output root if it does not exist yet
    pub async fn init(root: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let root = root.into();

        tokio::fs::create_dir_all(&root)
            .await
            .inspect_err(|e| tracing::error!(error = ?e, path = ?root, "Failed to create output root"))
            .with_context(|| format!("Failed to create output root {}", root.display()))?;

        Ok(FsDataStore { root })
    }

    /// Same as [`DataStore::persist_export`] with an explicit access time.
    #[tracing::instrument(skip_all, fields(channel = %summary.title, videos = data.len()))]
    pub async fn persist_export_at(
        &self,
        summary: &ChannelSummary,
        data: &ChannelData,
        accessed_at: DateTime<Utc>,
    ) -> anyhow::Result<ExportResult> {
        let layout = ExportLayout::new(&self.root, &summary.dir_name(), accessed_at);

        // an existing channel directory from an earlier export is fine
        match tokio::fs::create_dir(&layout.channel_dir).await {
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                tracing::debug!(path = ?layout.channel_dir, "Channel directory already exists");
            }
            result => result
                .inspect_err(|e| tracing::error!(error = ?e, "Failed to create channel directory"))
                .with_context(|| {
                    format!(
                        "Failed to create channel directory {}",
                        layout.channel_dir.display()
                    )
                })?,
        }

        let outputs = [
            (layout.channel_info_path(), to_pretty_json(summary)?),
            (layout.channel_data_json_path(), to_pretty_json(data)?),
            (layout.channel_data_csv_path(), to_csv(data)?),
        ];

        let mut files = Vec::with_capacity(outputs.len());
        for (path, contents) in outputs {
            tokio::fs::write(&path, contents)
                .await
                .inspect_err(|e| tracing::error!(error = ?e, path = ?path, "Failed to write export file"))
                .with_context(|| format!("Failed to write {}", path.display()))?;

            tracing::info!(path = %path.display(), "Wrote export file");
            files.push(path);
        }

        Ok(ExportResult {
            channel_dir: layout.channel_dir,
            files,
            rows: data.len(),
        })
    }
}

impl DataStore for FsDataStore {
    async fn persist_export(
        &self,
        summary: &ChannelSummary,
        data: &ChannelData,
    ) -> anyhow::Result<ExportResult> {
        self.persist_export_at(summary, data, Utc::now()).await
    }
}
