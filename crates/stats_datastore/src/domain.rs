use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single flattened, single-level row of video fields.
pub type VideoRecord = Map<String, Value>;

/// Channel level metadata resolved before any video is enumerated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSummary {
    pub channel_id: String,
    pub title: String,
    /// Aggregate statistics exactly as the API reports them
    /// (`viewCount`, `subscriberCount`, `videoCount`, ...)
    pub statistics: Map<String, Value>,
    pub uploads_playlist_id: String,
}

impl ChannelSummary {
    /// Number of uploads the channel reports. The API sends counts as decimal
    /// strings; anything unparsable counts as zero.
    pub fn video_count(&self) -> u64 {
        match self.statistics.get("videoCount") {
            Some(Value::String(count)) => count.parse().unwrap_or_default(),
            Some(Value::Number(count)) => count.as_u64().unwrap_or_default(),
            _ => 0,
        }
    }

    /// Directory name derived from the channel title. Spaces and path
    /// separators become `-`; a title that would not name a single directory
    /// below the output root falls back to the channel id.
    pub fn dir_name(&self) -> String {
        [&self.title, &self.channel_id]
            .into_iter()
            .map(|name| path_segment(name))
            .find(|segment| !segment.chars().all(|c| c == '.'))
            .unwrap_or_else(|| "channel".into())
    }
}

fn path_segment(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '-',
            c => c,
        })
        .collect()
}

/// The lightweight per-video entry found while walking the uploads playlist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStub {
    pub video_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_published_at: Option<String>,
    #[serde(default)]
    pub position: u32,
}

impl VideoStub {
    pub fn into_record(self) -> VideoRecord {
        let mut record = VideoRecord::new();
        record.insert("videoId".into(), Value::String(self.video_id));
        if let Some(published_at) = self.video_published_at {
            record.insert("videoPublishedAt".into(), Value::String(published_at));
        }
        record.insert("position".into(), Value::from(self.position));
        record
    }
}

/// Merged per-video records keyed by video id, in playlist order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelData(IndexMap<String, VideoRecord>);

impl ChannelData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, video_id: &str) -> Option<&VideoRecord> {
        self.0.get(video_id)
    }

    pub fn video_ids(&self) -> Vec<String> {
        self.0.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &VideoRecord)> {
        self.0.iter()
    }

    pub fn records(&self) -> impl Iterator<Item = &VideoRecord> {
        self.0.values()
    }

    /// Adds `stub` keyed by its video id. A repeated id replaces the earlier
    /// stub but keeps the position of its first occurrence.
    pub fn insert_stub(&mut self, stub: VideoStub) {
        self.0.insert(stub.video_id.clone(), stub.into_record());
    }

    /// Unions `fields` into the record for `video_id`. Fields already on the
    /// record are left untouched. Returns `false` when no such record exists.
    pub fn merge_fields(&mut self, video_id: &str, fields: VideoRecord) -> bool {
        let Some(record) = self.0.get_mut(video_id) else {
            return false;
        };

        for (key, value) in fields {
            record.entry(key).or_insert(value);
        }
        true
    }
}

impl FromIterator<VideoStub> for ChannelData {
    fn from_iter<I: IntoIterator<Item = VideoStub>>(iter: I) -> Self {
        let mut data = ChannelData::new();
        for stub in iter {
            data.insert_stub(stub);
        }
        data
    }
}
