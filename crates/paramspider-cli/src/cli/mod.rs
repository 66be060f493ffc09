//! CLI for ParamSpider.

mod mine;

use anyhow::Result;
use clap::builder::NonEmptyStringValueParser;
use clap::{ArgGroup, Parser};
use paramspider_core::domains;
use paramspider_core::{config, logging};
use std::path::PathBuf;

/// Top-level CLI for ParamSpider.
#[derive(Debug, Parser)]
#[command(name = "paramspider", version)]
#[command(about = "Mining URLs from dark corners of Web Archives", long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["domain", "list"])))]
pub struct Cli {
    /// Domain name to fetch related URLs for.
    #[arg(short, long)]
    pub domain: Option<String>,

    /// File containing a list of domain names, one per line.
    #[arg(short, long, value_name = "FILE")]
    pub list: Option<PathBuf>,

    /// Stream URLs on the terminal as they are written.
    #[arg(short, long)]
    pub stream: bool,

    /// Proxy address for web requests, passed to curl as is.
    #[arg(long, value_name = "URL")]
    pub proxy: Option<String>,

    /// Placeholder for parameter values [default: FUZZ].
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    pub placeholder: Option<String>,

    /// Output file to append all URLs to.
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Config file [default: $XDG_CONFIG_HOME/paramspider/config.toml].
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Domains to mine: the normalized `--domain`, or the deduplicated `--list`.
    pub fn domains(&self) -> Result<Vec<String>> {
        match (&self.domain, &self.list) {
            (Some(domain), _) => domains::normalize_domain(domain)
                .map(|d| vec![d])
                .ok_or_else(|| anyhow::anyhow!("--domain is empty")),
            (None, Some(path)) => domains::read_domain_list(path),
            (None, None) => anyhow::bail!("either --domain or --list is required"),
        }
    }

    pub fn run(self) -> Result<()> {
        let cfg = config::load(self.config.as_deref())?;
        if let Err(err) = logging::init_logging(cfg.log_file.as_deref()) {
            logging::init_logging_stderr();
            tracing::warn!("log file unavailable, logging to stderr: {:#}", err);
        }
        tracing::debug!("loaded config: {:?}", cfg);

        let domains = self.domains()?;
        mine::run_mine(&self, &cfg, &domains)
    }
}
