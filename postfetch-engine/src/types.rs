use serde::{Deserialize, Serialize};

/// A post as served by the posts endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub author: String,
}

impl Post {
    pub fn new(id: i64, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
        }
    }
}

/// The two posts the local JSON server hands out by default.
pub fn sample_posts() -> Vec<Post> {
    vec![
        Post::new(1, "local json server data", "JohnDoe"),
        Post::new(2, "easy to use for testing", "AliceYoung"),
    ]
}
