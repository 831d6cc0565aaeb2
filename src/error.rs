//! Error type definitions.

use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use thiserror::Error;
use url::ParseError;

/// Errors surfaced by the portal client.
///
/// Every network-facing operation fails with [`ClientError::RequestFailed`].
/// The portal does not distinguish wrong credentials, an expired session, or
/// a server-side fault — all of them come back as plain HTTP failures, so no
/// finer-grained taxonomy exists to expose. Extraction never fails: malformed
/// or missing markup degrades to unset fields on the parsed record.
#[derive(Error, Debug)]
pub enum ClientError {
    /// A request could not be completed: connection error, timeout, or a
    /// non-success HTTP status from the portal.
    #[error("Request failed: {0}")]
    RequestFailed(#[from] ReqwestError),

    /// The portal answered with a status outside the success range that the
    /// HTTP layer does not classify as an error itself (an unfollowed
    /// redirect, for instance). Same failure class as [`RequestFailed`],
    /// kept separate only because there is no underlying error to wrap.
    ///
    /// [`RequestFailed`]: ClientError::RequestFailed
    #[error("Request failed: unexpected status {0}")]
    UnexpectedStatus(StatusCode),

    /// The configured base URL could not be parsed, or an endpoint could not
    /// be joined onto it.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] ParseError),

    /// The underlying HTTP client could not be built (e.g. a malformed proxy
    /// URL).
    #[error("HTTP client initialization error: {0}")]
    ClientBuild(ReqwestError),
}
