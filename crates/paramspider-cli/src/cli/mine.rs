//! Mining run: wire config and flags into the core miner.

use super::Cli;
use anyhow::Result;
use paramspider_core::archive::WaybackClient;
use paramspider_core::config::ParamSpiderConfig;
use paramspider_core::miner::{self, MineOptions};
use std::io;

impl Cli {
    pub fn mine_options(&self) -> MineOptions {
        MineOptions {
            placeholder: self.placeholder.clone(),
            stream: self.stream,
            output: self.output.clone(),
        }
    }
}

pub fn run_mine(cli: &Cli, cfg: &ParamSpiderConfig, domains: &[String]) -> Result<()> {
    if domains.is_empty() {
        tracing::warn!("no domains to process");
        return Ok(());
    }

    let opts = cli.mine_options();
    let normalizer = opts.normalizer(cfg);
    let sink = opts.sink();
    let client = WaybackClient::from_config(cfg, cli.proxy.clone());

    let stdout = io::stdout();
    let summary = miner::run(&client, &normalizer, &sink, domains, &mut stdout.lock())?;

    tracing::info!(
        "Done: {} URLs written for {} domain(s), {} failed",
        summary.written,
        summary.domains,
        summary.failed
    );
    if summary.all_failed() {
        anyhow::bail!("every domain failed to fetch");
    }
    Ok(())
}
