//! Query string rewriting: every parameter value becomes the placeholder.

use std::collections::HashSet;
use url::form_urlencoded;

/// Rewrite `query` so each distinct key maps to `placeholder`.
///
/// The query is decoded as `application/x-www-form-urlencoded`. Pairs with an
/// empty value (`a=` or bare `a`) are dropped, keys keep their first-appearance
/// order, and the result is re-encoded. An all-blank query yields `""`.
pub fn rewrite_query(query: &str, placeholder: &str) -> String {
    let mut seen = HashSet::new();
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        if seen.insert(key.clone()) {
            serializer.append_pair(&key, placeholder);
        }
    }
    serializer.finish()
}
