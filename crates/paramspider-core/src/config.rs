use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CDX query used when no `endpoint` is configured. `{domain}` is substituted per run.
pub const DEFAULT_ENDPOINT: &str =
    "https://web.archive.org/cdx/search/cdx?url={domain}/*&output=txt&collapse=urlkey&fl=original&page=/";

/// Value written in place of every query parameter value.
pub const DEFAULT_PLACEHOLDER: &str = "FUZZ";

/// Static-asset extensions whose URLs carry no interesting parameters.
pub const DEFAULT_BLOCKED_EXTENSIONS: &[&str] = &[
    ".jpg", ".jpeg", ".png", ".gif", ".pdf", ".svg", ".json", ".css", ".js", ".webp", ".woff",
    ".woff2", ".eot", ".ttf", ".otf", ".mp4", ".txt",
];

/// Global configuration loaded from `~/.config/paramspider/config.toml`.
///
/// Every field is optional in the file; missing fields take the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamSpiderConfig {
    /// CDX endpoint template; must contain `{domain}`.
    pub endpoint: String,
    /// Percent-encode the domain before substituting it into `endpoint`.
    pub encode_domain: bool,
    /// Path extensions (with leading dot) that drop a URL from the results.
    pub blocked_extensions: Vec<String>,
    /// Replacement for query parameter values. `--placeholder` overrides it.
    pub placeholder: String,
    /// Connect timeout for the CDX request, in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-transfer timeout for the CDX request, in seconds. CDX answers for
    /// large domains can take minutes.
    pub timeout_secs: u64,
    /// `User-Agent` header sent with the CDX request.
    pub user_agent: String,
    /// Append logs to this file instead of stderr.
    pub log_file: Option<PathBuf>,
}

impl Default for ParamSpiderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            encode_domain: false,
            blocked_extensions: DEFAULT_BLOCKED_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            connect_timeout_secs: 15,
            timeout_secs: 120,
            user_agent: format!("paramspider/{}", env!("CARGO_PKG_VERSION")),
            log_file: None,
        }
    }
}

/// Default location of the config file under the XDG config home.
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("paramspider")?;
    Ok(xdg_dirs
        .get_config_home()
        .join("paramspider")
        .join("config.toml"))
}

/// Load configuration from `path`, or from the XDG default when `path` is `None`.
///
/// An explicit path must exist. The default file is optional and is never
/// created; without it the built-in defaults are used.
pub fn load(path: Option<&Path>) -> Result<ParamSpiderConfig> {
    match path {
        Some(p) => load_from(p),
        None => {
            let default_path = config_path()?;
            if default_path.exists() {
                load_from(&default_path)
            } else {
                Ok(ParamSpiderConfig::default())
            }
        }
    }
}

fn load_from(path: &Path) -> Result<ParamSpiderConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: ParamSpiderConfig = toml::from_str(&data)
        .with_context(|| format!("invalid config {}", path.display()))?;
    if !cfg.endpoint.contains("{domain}") {
        anyhow::bail!(
            "config {}: endpoint must contain {{domain}}",
            path.display()
        );
    }
    if cfg.placeholder.is_empty() {
        anyhow::bail!("config {}: placeholder must not be empty", path.display());
    }
    Ok(cfg)
}
