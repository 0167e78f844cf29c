use anyhow::{Context as _, Result};
use postfetch_engine::PostFetcher;
use postfetch_server::{init_logger, ReqwestClient};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
struct Cli {
    /// Posts endpoint
    #[structopt(long, default_value = "http://localhost:3000/posts")]
    url: String,

    /// Output as JSON
    #[structopt(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();
    let cli = Cli::from_args();
    tracing::debug!("arguments parsed: {:?}", cli);

    let fetcher = PostFetcher::with_url(ReqwestClient::new(), cli.url);
    let posts = fetcher.fetch_posts().await?;
    tracing::info!("fetched {} posts from {}", posts.len(), fetcher.url());

    if cli.json {
        let json = serde_json::to_string_pretty(&posts).context("failed to serialize posts")?;
        println!("{}", json);
    } else {
        for post in &posts {
            println!("#{} {} ({})", post.id, post.title, post.author);
        }
    }

    Ok(())
}
