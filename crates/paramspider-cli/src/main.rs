mod cli;

use crate::cli::Cli;

fn main() {
    // Usage errors exit here (code 2), before any config, log or network work.
    let cli = Cli::parse_args();

    if let Err(err) = cli.run() {
        eprintln!("paramspider error: {:#}", err);
        std::process::exit(1);
    }
}
