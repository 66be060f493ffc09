//! URL cleaning for archived URL lists.
//!
//! Each raw line goes through: default-port stripping, static-asset
//! extension filtering, query placeholder rewriting, then exact-string
//! deduplication. Lines that cannot be split are skipped, never fatal.

mod extension;
mod port;
mod query;
mod split;

pub use extension::path_extension;
pub use port::strip_default_port;
pub use query::rewrite_query;
pub use split::{split_url, UrlParseError, UrlParts};

use crate::config::ParamSpiderConfig;
use std::borrow::Cow;
use std::collections::HashSet;

/// Immutable rules injected into a [`Normalizer`].
#[derive(Debug, Clone)]
pub struct CleanRules {
    /// Lowercased, each with its leading dot.
    blocked_extensions: HashSet<String>,
    placeholder: String,
}

impl CleanRules {
    /// Extensions may be given with or without the leading dot; blank entries are ignored.
    pub fn new<I, S>(blocked_extensions: I, placeholder: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            blocked_extensions: blocked_extensions
                .into_iter()
                .filter_map(|e| normalize_extension(e.as_ref()))
                .collect(),
            placeholder: placeholder.into(),
        }
    }

    /// Rules from config; `placeholder` (e.g. from `--placeholder`) wins over the config value.
    pub fn from_config(cfg: &ParamSpiderConfig, placeholder: Option<&str>) -> Self {
        Self::new(
            &cfg.blocked_extensions,
            placeholder.unwrap_or(cfg.placeholder.as_str()),
        )
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// True if the path's extension is blocked (case-insensitive).
    pub fn is_blocked(&self, path: &str) -> bool {
        path_extension(path)
            .is_some_and(|ext| self.blocked_extensions.contains(&ext.to_ascii_lowercase()))
    }
}

fn normalize_extension(ext: &str) -> Option<String> {
    let ext = ext.trim().to_ascii_lowercase();
    match ext.as_str() {
        "" | "." => None,
        _ if ext.starts_with('.') => Some(ext),
        _ => Some(format!(".{ext}")),
    }
}

impl Default for CleanRules {
    fn default() -> Self {
        Self::from_config(&ParamSpiderConfig::default(), None)
    }
}

/// Result of cleaning a single raw line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Kept(String),
    /// Path ends in a blocked extension.
    Blocked,
    Skipped(UrlParseError),
}

#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    rules: CleanRules,
}

impl Normalizer {
    pub fn new(rules: CleanRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &CleanRules {
        &self.rules
    }

    /// Clean one raw line.
    pub fn clean_one(&self, raw: &str) -> Outcome {
        let mut parts = match split_url(raw) {
            Ok(p) => p,
            Err(e) => return Outcome::Skipped(e),
        };
        strip_default_port(&mut parts);
        if self.rules.is_blocked(parts.path) {
            return Outcome::Blocked;
        }
        let query = rewrite_query(&parts.query, &self.rules.placeholder);
        parts.query = Cow::Owned(query);
        Outcome::Kept(parts.to_string())
    }

    /// Clean a batch and deduplicate by exact string. First-seen order is kept.
    pub fn clean<I, S>(&self, urls: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut cleaned = Vec::new();
        let mut blocked = 0usize;
        let mut skipped = 0usize;

        for raw in urls {
            match self.clean_one(raw.as_ref()) {
                Outcome::Kept(url) => {
                    if seen.insert(url.clone()) {
                        cleaned.push(url);
                    }
                }
                Outcome::Blocked => blocked += 1,
                Outcome::Skipped(e) => {
                    tracing::trace!("skipping {}: {}", raw.as_ref(), e);
                    skipped += 1;
                }
            }
        }

        tracing::debug!(
            kept = cleaned.len(),
            blocked,
            skipped,
            "cleaned url batch"
        );
        cleaned
    }
}

/// Only URLs that still carry a query are worth writing out.
pub fn has_query(url: &str) -> bool {
    url.contains('?')
}
