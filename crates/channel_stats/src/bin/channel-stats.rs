use std::path::PathBuf;

use clap::Parser;
use stats_datastore::FsDataStore;

use channel_stats::{
    fetcher::MAX_BATCH_SIZE, paginator::MAX_PAGE_SIZE, tracing::init_tracing_subscriber,
    yt::client::DataApiClient, ChannelProcessorBuilder, KeyStyle,
};

#[derive(Parser)]
#[command(
    name = "channel-stats",
    about = "Export a YouTube channel's video statistics to JSON and CSV"
)]
struct Cli {
    /// YouTube Data API v3 key
    #[arg(long, env = "YOUTUBE_DATA_API_V3_KEY", hide_env_values = true)]
    api_key: String,

    /// Id of the channel to export (UC...)
    #[arg(long, env = "YOUTUBE_CHANNEL_ID")]
    channel_id: String,

    /// Directory the channel folder is created in
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Playlist items requested per page
    #[arg(long, default_value_t = MAX_PAGE_SIZE,
          value_parser = clap::value_parser!(u8).range(1..=MAX_PAGE_SIZE as i64))]
    page_size: u8,

    /// Video ids per details request
    #[arg(long, default_value_t = MAX_BATCH_SIZE as u8,
          value_parser = clap::value_parser!(u8).range(1..=MAX_BATCH_SIZE as i64))]
    batch_size: u8,

    /// Retries with exponential backoff on transient HTTP failures (0 disables)
    #[arg(long, env = "YOUTUBE_MAX_RETRIES", default_value = "0")]
    max_retries: u32,

    /// Naming of flattened detail fields
    #[arg(long, value_enum, default_value_t = KeyStyle::Leaf)]
    key_style: KeyStyle,

    /// Override the API base url
    #[arg(long, default_value = DataApiClient::DEFAULT_BASE_URL)]
    base_url: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let api = DataApiClient::new(cli.api_key, cli.max_retries)?.with_base_url(cli.base_url);
    let store = FsDataStore::init(&cli.output_dir).await?;

    tracing::info!(
        channel_id = %cli.channel_id,
        page_size = cli.page_size,
        batch_size = cli.batch_size,
        max_retries = cli.max_retries,
        "Exporting channel..."
    );

    let processor = ChannelProcessorBuilder::new(cli.channel_id)
        .api(api)
        .store(store)
        .page_size(cli.page_size)
        .batch_size(usize::from(cli.batch_size))
        .key_style(cli.key_style)
        .build();

    let result = processor.run().await?;
    for file in &result.files {
        println!("{}", file.display());
    }

    Ok(())
}
