//! Domain input resolution for `--domain` and `--list`.

use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Trim, lowercase and strip a leading `https://` or `http://`.
///
/// Returns `None` for blank input.
pub fn normalize_domain(raw: &str) -> Option<String> {
    let lowered = raw.trim().to_lowercase();
    let domain = lowered
        .strip_prefix("https://")
        .or_else(|| lowered.strip_prefix("http://"))
        .unwrap_or(lowered.as_str())
        .trim();
    if domain.is_empty() {
        None
    } else {
        Some(domain.to_string())
    }
}

/// Normalize and deduplicate domain lines. Result is sorted.
pub fn parse_domain_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .filter_map(normalize_domain)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Read a newline-delimited domain list. Failure to read is fatal for the run.
pub fn read_domain_list(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read domain list {}", path.display()))?;
    Ok(parse_domain_list(&contents))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn normalize_strips_scheme_and_case() {
        assert_eq!(normalize_domain("HTTP://A.com").as_deref(), Some("a.com"));
        assert_eq!(
            normalize_domain("  https://Sub.Example.COM ").as_deref(),
            Some("sub.example.com")
        );
        assert_eq!(normalize_domain("example.org").as_deref(), Some("example.org"));
    }

    #[test]
    fn normalize_blank_is_none() {
        assert_eq!(normalize_domain(""), None);
        assert_eq!(normalize_domain("   "), None);
        assert_eq!(normalize_domain("https://"), None);
    }

    #[test]
    fn list_dedups_and_drops_blank_lines() {
        assert_eq!(parse_domain_list("HTTP://A.com\na.com\n \n"), vec!["a.com"]);
    }

    #[test]
    fn list_is_sorted() {
        assert_eq!(
            parse_domain_list("c.com\r\nhttps://b.com\na.com\nC.COM\n"),
            vec!["a.com", "b.com", "c.com"]
        );
    }

    #[test]
    fn read_list_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "HTTP://A.com").unwrap();
        writeln!(f, "a.com").unwrap();
        writeln!(f, " ").unwrap();
        f.flush().unwrap();
        assert_eq!(read_domain_list(f.path()).unwrap(), vec!["a.com"]);
    }

    #[test]
    fn missing_list_file_errs() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_domain_list(&dir.path().join("missing.txt")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read domain list"));
    }
}
