pub mod error;
pub mod fetcher;
pub mod flatten;
pub mod paginator;
mod processor;
pub mod resolver;
pub mod tracing;
pub mod types;
pub mod yt;

pub use error::Error;
pub use flatten::KeyStyle;
pub use processor::{builder::ChannelProcessorBuilder, ChannelProcessor};
pub use stats_datastore::{ChannelData, ChannelSummary, ExportResult, VideoStub};
