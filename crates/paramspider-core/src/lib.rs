pub mod config;
pub mod logging;

pub mod archive;
pub mod domains;
pub mod miner;
pub mod output;
pub mod url_clean;
