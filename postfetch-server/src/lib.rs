mod client;
mod router;
mod timer;

pub use client::ReqwestClient;
pub use router::{load_posts, router, serve};
pub use timer::TokioTimer;

use tracing_subscriber::EnvFilter;

/// Logger setup shared by the binaries. Filtering follows `RUST_LOG`.
pub fn init_logger() {
    tracing_subscriber::fmt::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_file(true)
        .with_line_number(true)
        .without_time()
        .init();
}
