use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use postfetch_engine::sample_posts;
use postfetch_server::{init_logger, load_posts, serve};
use structopt::StructOpt;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[derive(Debug, StructOpt)]
struct Opt {
    #[structopt(long, default_value = "127.0.0.1")]
    host: String,
    #[structopt(long, default_value = "3000")]
    port: u16,
    /// JSON file holding the array of posts to serve.
    /// If omitted, the two built-in sample posts are served.
    #[structopt(long, parse(from_os_str))]
    db: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();

    let opt = Opt::from_args();
    let posts = match &opt.db {
        Some(path) => load_posts(path)?,
        None => sample_posts(),
    };

    let bind_host: IpAddr = opt.host.parse().unwrap_or_else(|_| {
        warn!("invalid host `{}`, falling back to localhost", opt.host);
        IpAddr::V4(Ipv4Addr::LOCALHOST)
    });
    let addr = SocketAddr::from((bind_host, opt.port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("postfetch server v{}", env!("CARGO_PKG_VERSION"));

    serve(listener, posts).await
}
