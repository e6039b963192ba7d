use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use postforge_client::{ArticleExtractor, ReqwestFetcher};
use postforge_core::repurpose::RepurposeService;

#[derive(Parser)]
#[command(
    name = "postforge",
    version,
    about = "Turn a web article into social media post drafts"
)]
struct Cli {
    /// Article URL to repurpose
    #[arg(short, long)]
    url: String,

    /// Allow fetching private/loopback addresses (local testing)
    #[arg(long, default_value_t = false)]
    allow_private: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("postforge=info".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut fetcher = ReqwestFetcher::new()?;
    if cli.allow_private {
        fetcher = fetcher.allow_private_urls();
    }

    let service = RepurposeService::new(fetcher, ArticleExtractor::new());
    let content = service.repurpose(&cli.url).await?;

    println!("{}", serde_json::to_string_pretty(&content)?);

    Ok(())
}
