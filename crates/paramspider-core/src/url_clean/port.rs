//! Default-port stripping.

use super::split::UrlParts;

fn default_port(scheme: &str) -> Option<u16> {
    match scheme {
        "http" => Some(80),
        "https" => Some(443),
        _ => None,
    }
}

/// Drop an explicit `:80` on http or `:443` on https. Everything else is left as is.
pub fn strip_default_port(parts: &mut UrlParts<'_>) {
    let Some(default) = default_port(&parts.scheme) else {
        return;
    };
    if parts.port() != Some(default) {
        return;
    }
    if let Some((host, _)) = parts.netloc.and_then(|n| n.rsplit_once(':')) {
        parts.netloc = Some(host);
    }
}
