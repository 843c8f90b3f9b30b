use crate::search_state::store::SearchStore;
use crate::search_state::url::record_from_pairs;

/// Top-level route names, used to tell a route segment apart from a
/// locale prefix.
const TOP_ROUTES: &[&str] = &["", "search", "job-details", "demo", "login", "dashboard"];

/// Which store wins for search state on a given route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAuthority {
    /// The URL is authoritative: it may be bookmarked or shared, so its
    /// parameters overwrite whatever is in memory or storage.
    Url,
    /// The persisted record is authoritative; the URL is not consulted.
    Persisted,
}

/// Classify a pathname. Search results and job details answer to the URL;
/// every other route answers to the persisted record.
///
/// A leading segment that is no known route is a locale prefix (the
/// router resolves unknown locales to English the same way), so `/search`,
/// `/de/search` and `/fr/search` all classify alike.
pub fn authority_for_path(path: &str) -> RouteAuthority {
    let mut segments = path.trim_start_matches('/').split('/');
    let mut first = segments.next().unwrap_or("");
    if !TOP_ROUTES.contains(&first) {
        first = segments.next().unwrap_or("");
    }
    match first {
        "search" | "job-details" => RouteAuthority::Url,
        _ => RouteAuthority::Persisted,
    }
}

/// Run one reconciliation step for the given route.
///
/// Called from a reactive effect on every pathname or query change — the
/// policy is re-evaluated, not polled.
pub fn reconcile(store: &SearchStore, path: &str, query_pairs: &[(String, String)]) {
    match authority_for_path(path) {
        RouteAuthority::Url => {
            let record = record_from_pairs(query_pairs, store.now_millis());
            if record.is_active() {
                store.write(Some(record));
            } else {
                store.write(None);
            }
        }
        RouteAuthority::Persisted => {
            store.hydrate_from_persisted();
        }
    }
}
