//! Error taxonomy for the remote-service client.
//!
//! Both families distinguish transport failures (the request never produced
//! a response, or the body could not be decoded) from the server answering
//! with a non-success status. Callers recover at the view boundary; nothing
//! here propagates further up.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure while fetching records.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with {0}")]
    Status(StatusCode),
}

/// Failure while deleting a record.
#[derive(Debug, Error)]
pub enum DeleteError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with {0}")]
    Status(StatusCode),
}
