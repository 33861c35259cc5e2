//! Rendering of a channel export: file layout, pretty JSON and the
//! rectangular CSV view of [`ChannelData`].

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Value};

use crate::ChannelData;

/// Second precision UTC timestamp used in every export file name
pub const ACCESS_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Where the files of a single export land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportLayout {
    pub channel_dir: PathBuf,
    pub suffix: String,
}

impl ExportLayout {
    pub fn new(root: &Path, dir_name: &str, accessed_at: DateTime<Utc>) -> Self {
        let access_time = accessed_at.format(ACCESS_TIME_FORMAT);
        ExportLayout {
            channel_dir: root.join(dir_name),
            suffix: format!("{dir_name}_{access_time}"),
        }
    }

    pub fn channel_info_path(&self) -> PathBuf {
        self.channel_dir
            .join(format!("channel-info_{}.json", self.suffix))
    }

    pub fn channel_data_json_path(&self) -> PathBuf {
        self.channel_dir
            .join(format!("channel-data_{}.json", self.suffix))
    }

    pub fn channel_data_csv_path(&self) -> PathBuf {
        self.channel_dir
            .join(format!("channel-data_{}.csv", self.suffix))
    }
}

/// Serializes `value` as JSON indented with four spaces.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .context("Failed to serialize export to JSON")?;
    Ok(buf)
}

/// Header of the CSV view: every field name across all records, in the
/// order it is first seen.
pub fn columns(data: &ChannelData) -> Vec<String> {
    data.records()
        .flat_map(|record| record.keys())
        .unique()
        .cloned()
        .collect()
}

/// Renders one row per video. Missing fields become empty cells.
pub fn to_csv(data: &ChannelData) -> anyhow::Result<Vec<u8>> {
    let columns = columns(data);
    if columns.is_empty() {
        return Ok(Vec::new());
    }

    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(&columns)
        .context("Failed to write CSV header")?;

    for (video_id, record) in data.iter() {
        let row = columns
            .iter()
            .map(|column| record.get(column).map(cell).unwrap_or_default());
        writer
            .write_record(row)
            .with_context(|| format!("Failed to write CSV row for {video_id}"))?;
    }

    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {}", e.error()))
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        // numbers, bools, arrays and objects all use their compact JSON text
        other => other.to_string(),
    }
}
