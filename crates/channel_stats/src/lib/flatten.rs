//! # Flattening
//!
//! Turns the nested objects returned by `videos.list` into single-level
//! records suitable for a row/column representation.

use serde_json::{Map, Value};
use stats_datastore::VideoRecord;

/// How a nested path such as `snippet.thumbnails.standard.url` is named once
/// flattened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum KeyStyle {
    /// The leaf field name (`url`). A leaf that would collide with an
    /// earlier key keeps its dotted path instead.
    #[default]
    Leaf,
    /// The full dotted path (`snippet.thumbnails.standard.url`)
    Dotted,
}

/// Flattens `object` into a single-level record.
///
/// Arrays and scalars are kept as values, nested objects are descended into
/// and empty objects contribute no keys. Key order follows a depth-first walk
/// of `object`.
pub fn flatten(object: Map<String, Value>, style: KeyStyle) -> VideoRecord {
    let mut leaves = Vec::new();
    collect_leaves(&mut Vec::new(), object, &mut leaves);

    let mut record = VideoRecord::new();
    for (path, value) in leaves {
        let dotted = path.join(".");
        let key = match style {
            KeyStyle::Dotted => dotted,
            KeyStyle::Leaf => {
                let leaf = path.last().cloned().unwrap_or_default();
                if record.contains_key(&leaf) {
                    tracing::debug!(%leaf, %dotted, "Leaf key collision, keeping dotted path");
                    dotted
                } else {
                    leaf
                }
            }
        };
        record.insert(key, value);
    }
    record
}

fn collect_leaves(
    path: &mut Vec<String>,
    object: Map<String, Value>,
    leaves: &mut Vec<(Vec<String>, Value)>,
) {
    for (key, value) in object {
        path.push(key);
        match value {
            Value::Object(nested) => collect_leaves(path, nested, leaves),
            other => leaves.push((path.clone(), other)),
        }
        path.pop();
    }
}
