use stats_datastore::DataStore;

use crate::{
    fetcher::MAX_BATCH_SIZE, flatten::KeyStyle, paginator::MAX_PAGE_SIZE, yt::YouTubeApi,
    ChannelProcessor,
};

pub struct ChannelProcessorBuilder<A = (), D = ()> {
    channel_id: String,
    api: A,
    store: D,
    page_size: u8,
    batch_size: usize,
    key_style: KeyStyle,
}

impl ChannelProcessorBuilder {
    pub fn new(channel_id: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            api: (),
            store: (),
            page_size: MAX_PAGE_SIZE,
            batch_size: MAX_BATCH_SIZE,
            key_style: KeyStyle::default(),
        }
    }
}

impl<A, D> ChannelProcessorBuilder<A, D> {
    pub fn api<A2: YouTubeApi>(self, api: A2) -> ChannelProcessorBuilder<A2, D> {
        ChannelProcessorBuilder {
            channel_id: self.channel_id,
            api,
            store: self.store,
            page_size: self.page_size,
            batch_size: self.batch_size,
            key_style: self.key_style,
        }
    }

    pub fn store<D2: DataStore + Send + Sync + 'static>(
        self,
        store: D2,
    ) -> ChannelProcessorBuilder<A, D2> {
        ChannelProcessorBuilder {
            channel_id: self.channel_id,
            api: self.api,
            store,
            page_size: self.page_size,
            batch_size: self.batch_size,
            key_style: self.key_style,
        }
    }

    /// `maxResults` per playlist page, at most 50
    pub fn page_size(mut self, page_size: u8) -> Self {
        self.page_size = page_size;
        self
    }

    /// Video ids per `videos.list` call, at most 50
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn key_style(mut self, key_style: KeyStyle) -> Self {
        self.key_style = key_style;
        self
    }
}

impl<A, D> ChannelProcessorBuilder<A, D>
where
    A: YouTubeApi,
    D: DataStore + Send + Sync + 'static,
{
    pub fn build(self) -> ChannelProcessor<A, D> {
        ChannelProcessor {
            channel_id: self.channel_id,
            api: self.api,
            store: self.store,
            page_size: self.page_size,
            batch_size: self.batch_size,
            key_style: self.key_style,
        }
    }
}
