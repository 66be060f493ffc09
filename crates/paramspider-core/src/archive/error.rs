//! Fetch error type and curl error classification.

use thiserror::Error;

/// A single CDX fetch failed. Callers log these and move on to the next domain.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("timed out: {0}")]
    Timeout(curl::Error),
    /// Connection, DNS, proxy or transport failure.
    #[error("network error: {0}")]
    Network(curl::Error),
    /// Response had a non-2xx status.
    #[error("HTTP {status} from {url}")]
    Http { status: u32, url: String },
    #[error("request failed: {0}")]
    Other(curl::Error),
}

impl From<curl::Error> for FetchError {
    fn from(e: curl::Error) -> Self {
        classify_curl_error(e)
    }
}

/// Map a curl error onto [`FetchError`].
pub fn classify_curl_error(e: curl::Error) -> FetchError {
    if e.is_operation_timedout() {
        return FetchError::Timeout(e);
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
        || e.is_ssl_connect_error()
    {
        return FetchError::Network(e);
    }
    FetchError::Other(e)
}
