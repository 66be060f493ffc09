//! Lenient split of archived URLs into components, and reassembly.
//!
//! Archive lines are often not valid URLs (stray brackets, junk ports,
//! missing schemes), so this never normalizes hosts or percent-encoding the
//! way `url::Url` would. Components are kept byte-for-byte.

use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// Why a raw line could not be split at all. Such lines are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlParseError {
    #[error("unbalanced IPv6 brackets in authority `{0}`")]
    UnbalancedBrackets(String),
}

/// Components of a raw URL: `scheme://netloc/path?query#fragment`.
///
/// `path` keeps any `;params`. `query` and `netloc` are the only parts the
/// normalizer rewrites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts<'a> {
    /// Lowercased scheme, empty when none was recognized.
    pub scheme: String,
    /// Authority; `Some` iff the text after the scheme started with `//`.
    pub netloc: Option<&'a str>,
    pub path: &'a str,
    pub query: Cow<'a, str>,
    pub fragment: &'a str,
}

/// Split `raw` into components. Fails only on unbalanced `[`/`]` in the authority.
pub fn split_url(raw: &str) -> Result<UrlParts<'_>, UrlParseError> {
    let (scheme, rest) = split_scheme(raw);

    let (netloc, rest) = match rest.strip_prefix("//") {
        Some(after) => {
            let end = after
                .find(|c: char| matches!(c, '/' | '?' | '#'))
                .unwrap_or(after.len());
            (Some(&after[..end]), &after[end..])
        }
        None => (None, rest),
    };

    if let Some(n) = netloc {
        if n.contains('[') != n.contains(']') {
            return Err(UrlParseError::UnbalancedBrackets(n.to_string()));
        }
    }

    let (rest, fragment) = rest.split_once('#').unwrap_or((rest, ""));
    let (path, query) = rest.split_once('?').unwrap_or((rest, ""));

    Ok(UrlParts {
        scheme,
        netloc,
        path,
        query: Cow::Borrowed(query),
        fragment,
    })
}

/// A scheme is an ASCII letter followed by letters, digits, `+`, `-` or `.`, then `:`.
fn split_scheme(raw: &str) -> (String, &str) {
    if let Some((candidate, rest)) = raw.split_once(':') {
        let starts_alpha = candidate
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic());
        let valid = candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if starts_alpha && valid {
            return (candidate.to_ascii_lowercase(), rest);
        }
    }
    (String::new(), raw)
}

impl UrlParts<'_> {
    /// Explicit port of the authority, if any.
    ///
    /// Non-numeric or out-of-range ports are reported as absent rather than
    /// failing the whole line.
    pub fn port(&self) -> Option<u16> {
        let netloc = self.netloc?;
        let host = netloc.rsplit_once('@').map_or(netloc, |(_, h)| h);
        let port = if host.starts_with('[') {
            host.split_once(']')?.1.strip_prefix(':')?
        } else {
            host.split_once(':')?.1
        };
        if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        port.parse().ok()
    }
}

impl fmt::Display for UrlParts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.scheme.is_empty() {
            write!(f, "{}:", self.scheme)?;
        }
        if let Some(netloc) = self.netloc {
            write!(f, "//{}", netloc)?;
        }
        f.write_str(self.path)?;
        if !self.query.is_empty() {
            write!(f, "?{}", self.query)?;
        }
        if !self.fragment.is_empty() {
            write!(f, "#{}", self.fragment)?;
        }
        Ok(())
    }
}
