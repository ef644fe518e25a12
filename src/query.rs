//! Mapping between the catalog page address and the selection.
//!
//! The address is an outside boundary: it seeds the search text once on
//! load, and a submitted search produces a new address for the caller to
//! navigate to. Nothing in the filter engine reads or writes it.

use tracing::debug;

use crate::catalog::Selection;

/// Path of the catalog listing
pub const CATALOG_PATH: &str = "/";

/// Query parameter carrying the search text
pub const SEARCH_PARAM: &str = "search";

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}

/// Value of the first `name` parameter in the query string of `url`.
///
/// Accepts a full address, a path with a query, or a bare query string.
pub fn query_param(url: &str, name: &str) -> Option<String> {
    let without_fragment = url.split('#').next().unwrap_or_default();
    let query = match without_fragment.split_once('?') {
        Some((_, query)) => query,
        None if without_fragment.contains('=') => without_fragment,
        None => return None,
    };

    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| decode_component(key) == name)
        .map(|(_, value)| decode_component(value))
}

/// Initial selection for a catalog page opened at `url`: every facet
/// unconstrained, search text seeded from the `search` parameter.
pub fn selection_from_url(url: &str) -> Selection {
    let search = query_param(url, SEARCH_PARAM).unwrap_or_default();
    if !search.is_empty() {
        debug!("Seeding search from address: {:?}", search);
    }
    Selection::default().with_search(search)
}

/// Address to navigate to when a search is submitted.
///
/// Returns `None` for blank input, which leaves the page where it is.
pub fn submit_search(text: &str) -> Option<String> {
    let term = text.trim();
    if term.is_empty() {
        return None;
    }
    Some(format!(
        "{CATALOG_PATH}?{SEARCH_PARAM}={}",
        urlencoding::encode(term)
    ))
}

/// Address after clearing the search: the listing with no parameter
pub fn clear_search_url() -> &'static str {
    CATALOG_PATH
}
