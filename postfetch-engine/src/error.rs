use thiserror::Error;

/// The only error `PostFetcher` surfaces. Whatever went wrong underneath is
/// dropped; callers see one kind with one message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Something wrong when fetching posts!")]
pub struct FetchError;

/// Failures a `JsonClient` may report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HttpError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
}
