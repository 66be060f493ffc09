//! Per-domain mining cycle: fetch, clean, filter, append.

use crate::archive::ArchiveSource;
use crate::config::ParamSpiderConfig;
use crate::output::OutputSink;
use crate::url_clean::{has_query, CleanRules, Normalizer};
use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;

/// Per-run choices taken from the command line.
#[derive(Debug, Clone)]
pub struct MineOptions {
    /// Overrides the config placeholder when set.
    pub placeholder: Option<String>,
    /// Echo every written URL.
    pub stream: bool,
    pub output: PathBuf,
}

impl MineOptions {
    pub fn normalizer(&self, cfg: &ParamSpiderConfig) -> Normalizer {
        Normalizer::new(CleanRules::from_config(cfg, self.placeholder.as_deref()))
    }

    pub fn sink(&self) -> OutputSink {
        OutputSink::new(&self.output, self.stream)
    }
}

/// Counts for one domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DomainReport {
    /// Lines returned by the archive.
    pub found: usize,
    /// Distinct URLs after cleaning.
    pub cleaned: usize,
    /// URLs with a query, appended to the output file.
    pub written: usize,
}

/// Totals for a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub domains: usize,
    pub failed: usize,
    pub written: usize,
}

impl RunSummary {
    /// True when there was work to do and none of it succeeded.
    pub fn all_failed(&self) -> bool {
        self.domains > 0 && self.failed == self.domains
    }
}

/// Run one fetch + clean + append cycle for `domain`.
///
/// Fetch failures are returned as errors; output IO failures too. The caller
/// decides which ones end the run.
pub fn process_domain<S, W>(
    source: &S,
    normalizer: &Normalizer,
    sink: &OutputSink,
    domain: &str,
    echo: &mut W,
) -> Result<DomainReport>
where
    S: ArchiveSource + ?Sized,
    W: Write,
{
    tracing::info!("Fetching URLs for {}", domain);
    let body = source.fetch_urls(domain)?;
    let raw: Vec<&str> = body.split_whitespace().collect();
    tracing::info!("Found {} URLs for {}", raw.len(), domain);

    tracing::info!("Cleaning URLs for {}", domain);
    let cleaned = normalizer.clean(&raw);
    tracing::info!("Found {} URLs after cleaning", cleaned.len());

    let with_query: Vec<String> = cleaned.iter().filter(|u| has_query(u)).cloned().collect();
    let written = sink.append(&with_query, echo)?;
    tracing::info!(
        "Appended {} cleaned URLs to {}",
        written,
        sink.path().display()
    );

    Ok(DomainReport {
        found: raw.len(),
        cleaned: cleaned.len(),
        written,
    })
}

/// Process `domains` in order, one at a time.
///
/// A domain whose fetch fails is logged and skipped. An output IO error
/// aborts the run; lines appended before it stay on disk.
pub fn run<S, W>(
    source: &S,
    normalizer: &Normalizer,
    sink: &OutputSink,
    domains: &[String],
    echo: &mut W,
) -> Result<RunSummary>
where
    S: ArchiveSource + ?Sized,
    W: Write,
{
    let mut summary = RunSummary {
        domains: domains.len(),
        ..RunSummary::default()
    };

    for domain in domains {
        match process_domain(source, normalizer, sink, domain, echo) {
            Ok(report) => summary.written += report.written,
            Err(err) => match err.downcast_ref::<crate::archive::FetchError>() {
                Some(fetch_err) => {
                    tracing::warn!("skipping {}: {}", domain, fetch_err);
                    summary.failed += 1;
                }
                None => return Err(err),
            },
        }
    }

    tracing::debug!(?summary, "run finished");
    Ok(summary)
}
