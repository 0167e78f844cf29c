pub mod error;
pub mod fetch;
pub mod http;
pub mod timer;
pub mod types;
pub mod util;

pub use crate::error::{FetchError, HttpError};
pub use crate::fetch::{PostFetcher, DEFAULT_POSTS_URL};
pub use crate::http::JsonClient;
pub use crate::timer::{delay, ManualTimer, Timer};
pub use crate::types::{sample_posts, Post};
pub use crate::util::{add, Aquarium, Tank};
