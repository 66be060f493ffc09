//! libcurl-backed CDX client.

use super::{endpoint_for, ArchiveSource, FetchError};
use crate::config::ParamSpiderConfig;
use std::time::Duration;

/// Queries the Wayback Machine CDX index with one blocking GET per domain.
///
/// Single attempt: failures are returned, never retried.
#[derive(Debug, Clone)]
pub struct WaybackClient {
    endpoint: String,
    encode_domain: bool,
    /// Passed to curl verbatim (`http://`, `socks5://`, ...).
    proxy: Option<String>,
    connect_timeout: Duration,
    timeout: Duration,
    user_agent: String,
}

impl WaybackClient {
    pub fn from_config(cfg: &ParamSpiderConfig, proxy: Option<String>) -> Self {
        Self {
            endpoint: cfg.endpoint.clone(),
            encode_domain: cfg.encode_domain,
            proxy,
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            user_agent: cfg.user_agent.clone(),
        }
    }

    /// CDX query URL for `domain`.
    pub fn endpoint_for(&self, domain: &str) -> String {
        endpoint_for(&self.endpoint, domain, self.encode_domain)
    }

    /// GET `url` and return the body. Follows redirects; accepts compressed bodies.
    fn get(&self, url: &str) -> Result<String, FetchError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.accept_encoding("")?;
        easy.useragent(&self.user_agent)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        if let Some(proxy) = &self.proxy {
            easy.proxy(proxy)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Http {
                status: code,
                url: url.to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

impl ArchiveSource for WaybackClient {
    fn fetch_urls(&self, domain: &str) -> Result<String, FetchError> {
        let url = self.endpoint_for(domain);
        tracing::debug!("GET {}", url);
        self.get(&url)
    }
}
