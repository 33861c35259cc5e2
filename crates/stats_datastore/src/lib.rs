//! # DataStore Module
//!
//! Domain types shared by the channel stats pipeline, and the flat-file
//! store that writes a channel export as JSON and CSV.
//!
//! The [`DataStore`] trait is the seam between the pipeline and the disk so
//! the pipeline can be exercised without touching the filesystem.

mod datastore;
mod domain;
pub mod export;

pub use datastore::fs::FsDataStore;
pub use datastore::{DataStore, ExportResult};
pub use domain::{ChannelData, ChannelSummary, VideoRecord, VideoStub};
