use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use stats_datastore::{ChannelData, ChannelSummary, DataStore, ExportResult};

#[derive(Clone, Default)]
pub struct MockDataStore {
    pub persisted: Arc<Mutex<Vec<(ChannelSummary, ChannelData)>>>,
    pub fail_with: Option<String>,
}

impl MockDataStore {
    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

impl DataStore for MockDataStore {
    async fn persist_export(
        &self,
        summary: &ChannelSummary,
        data: &ChannelData,
    ) -> anyhow::Result<ExportResult> {
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        self.persisted
            .lock()
            .unwrap()
            .push((summary.clone(), data.clone()));

        Ok(ExportResult {
            channel_dir: PathBuf::from("/tmp/mock").join(summary.dir_name()),
            files: Vec::new(),
            rows: data.len(),
        })
    }
}
