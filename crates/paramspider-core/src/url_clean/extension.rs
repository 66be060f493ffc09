//! Path extension extraction.

/// Extension (with leading dot) of the last path segment, ignoring `;params`.
///
/// Leading dots of the segment do not start an extension: `/.htaccess` has
/// none, `/a/.cache.js` has `.js`.
pub fn path_extension(path: &str) -> Option<&str> {
    let segment = path.rsplit('/').next().unwrap_or(path);
    let segment = segment.split_once(';').map_or(segment, |(s, _)| s);
    let dot = segment.rfind('.')?;
    if segment[..dot].bytes().all(|b| b == b'.') {
        return None;
    }
    Some(&segment[dot..])
}
