//! Archive source: fetch the raw CDX listing of archived URLs for a domain.
//!
//! The miner only depends on [`ArchiveSource`]; [`WaybackClient`] is the
//! libcurl implementation used by the CLI.

mod client;
mod error;

pub use client::WaybackClient;
pub use error::{classify_curl_error, FetchError};

use std::borrow::Cow;
use url::form_urlencoded;

/// Anything that can list archived URLs for a domain, one per line.
pub trait ArchiveSource {
    fn fetch_urls(&self, domain: &str) -> Result<String, FetchError>;
}

/// Substitute `domain` into an endpoint template's `{domain}` slot.
///
/// Verbatim by default, so domains with `/`, `&` or spaces produce odd
/// queries; `encode` form-urlencodes the domain first.
pub fn endpoint_for(template: &str, domain: &str, encode: bool) -> String {
    let domain: Cow<'_, str> = if encode {
        Cow::Owned(form_urlencoded::byte_serialize(domain.as_bytes()).collect())
    } else {
        Cow::Borrowed(domain)
    };
    template.replace("{domain}", &domain)
}
