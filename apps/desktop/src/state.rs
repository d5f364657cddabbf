//! Global application state using Dioxus signals, plus the search
//! orchestrator.
//!
//! `ACTIVE_FILTERS` is owned here and mutated only through
//! [`update_filters`], so every widget shares one unidirectional update
//! channel instead of writing the record directly.

use std::collections::HashSet;
use std::sync::OnceLock;

use dioxus::prelude::*;

use tweetscope_api::ApiClient;
use tweetscope_core::query::{build_search_params, SEARCH_PAGE_SIZE, SEARCH_TOP_K};
use tweetscope_core::sort::SortState;
use tweetscope_core::types::{total_pages, ActiveFilters, FilterOptions, FilterUpdate, ResultRow};

/// Error message shown for any failed search, regardless of cause.
pub const SEARCH_ERROR_MSG: &str = "Search failed. Please try again.";

static API: OnceLock<ApiClient> = OnceLock::new();

/// Shared backend client, built once from `TWEETSCOPE_API`.
pub fn api() -> ApiClient {
    API.get_or_init(ApiClient::from_env).clone()
}

// ---------------------------------------------------------------------------
// Global signals
// ---------------------------------------------------------------------------

/// Filter catalog — fetched once at startup, empty on load failure.
pub static OPTIONS: GlobalSignal<FilterOptions> = Signal::global(FilterOptions::default);

/// The user's active filter selections.
pub static ACTIVE_FILTERS: GlobalSignal<ActiveFilters> = Signal::global(ActiveFilters::default);

/// Free-text search query.
pub static QUERY_TEXT: GlobalSignal<String> = Signal::global(String::new);

/// Current result set, in fetch order with durable row keys.
pub static ROWS: GlobalSignal<Vec<ResultRow>> = Signal::global(Vec::new);

/// Total matches reported by the last successful search.
pub static TOTAL_MATCHES: GlobalSignal<u64> = Signal::global(|| 0);

/// Current result page (1-indexed).
pub static PAGE: GlobalSignal<u64> = Signal::global(|| 1);

/// Whether a search request is in flight.
pub static SEARCHING: GlobalSignal<bool> = Signal::global(|| false);

/// User-visible search error, if the last search failed.
pub static SEARCH_ERROR: GlobalSignal<Option<String>> = Signal::global(|| None);

/// Monotonic request token; only the response matching the latest issued
/// token may update visible state.
pub static SEARCH_GEN: GlobalSignal<u64> = Signal::global(|| 0);

/// Client-side sort of the current page. Persists across result replacement.
pub static SORT: GlobalSignal<SortState> = Signal::global(SortState::default);

/// Row keys whose detail panel is open.
pub static EXPANDED_ROWS: GlobalSignal<HashSet<String>> = Signal::global(HashSet::new);

/// Whether the ask-LLM panel is visible.
pub static ASK_VISIBLE: GlobalSignal<bool> = Signal::global(|| false);

/// One-line outcome of the last export, shown in the header.
pub static EXPORT_NOTICE: GlobalSignal<Option<String>> = Signal::global(|| None);

// ---------------------------------------------------------------------------
// Mutation entry points
// ---------------------------------------------------------------------------

/// The single write path into `ACTIVE_FILTERS`.
pub fn update_filters(update: FilterUpdate) {
    ACTIVE_FILTERS.write().apply(update);
}

/// "Clear all": reset every filter and the query text.
pub fn clear_all_filters() {
    ACTIVE_FILTERS.write().apply(FilterUpdate::Clear);
    *QUERY_TEXT.write() = String::new();
}

/// Page count for the current result total.
pub fn current_total_pages() -> u64 {
    total_pages(*TOTAL_MATCHES.read(), SEARCH_PAGE_SIZE)
}

// ---------------------------------------------------------------------------
// Search orchestrator
// ---------------------------------------------------------------------------

/// A resolving response may touch visible state only while the token it was
/// issued with is still the newest one handed out.
fn generation_is_current(issued: u64, latest: u64) -> bool {
    issued == latest
}

/// Issue one search for `page`. Loading suspends the table without clearing
/// it; on error the prior rows and total stay untouched. Responses that
/// resolve after a newer request has been issued are dropped.
pub fn run_search(page: u64) {
    *PAGE.write() = page;
    *SEARCHING.write() = true;
    *SEARCH_ERROR.write() = None;

    let generation = *SEARCH_GEN.read() + 1;
    *SEARCH_GEN.write() = generation;

    let params = build_search_params(
        page,
        SEARCH_PAGE_SIZE,
        SEARCH_TOP_K,
        &QUERY_TEXT.read(),
        &ACTIVE_FILTERS.read(),
    );

    spawn(async move {
        let outcome = api().search(&params).await;

        if !generation_is_current(generation, *SEARCH_GEN.read()) {
            tracing::debug!(generation, "dropping superseded search response");
            return;
        }

        match outcome {
            Ok(response) => {
                *TOTAL_MATCHES.write() = response.total_matches;
                *ROWS.write() = ResultRow::from_matches(response.matches);
                *SEARCH_ERROR.write() = None;
            }
            Err(err) => {
                tracing::error!(error = %err, "search request failed");
                *SEARCH_ERROR.write() = Some(SEARCH_ERROR_MSG.to_string());
            }
        }
        *SEARCHING.write() = false;
    });
}

/// Load the filter catalog once at startup. A failure is logged and leaves
/// the catalog empty; the widgets degrade to empty option lists.
pub async fn load_filter_catalog() {
    match api().fetch_filters().await {
        Ok(catalog) => *OPTIONS.write() = catalog,
        Err(err) => tracing::error!(error = %err, "could not load filter catalog"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn superseded_response_is_not_current() {
        // Two searches issued back to back: the first resolves after the
        // second has bumped the token and must be dropped.
        let first = 1;
        let second = 2;
        let latest = second;
        assert!(!generation_is_current(first, latest), "stale response must be dropped");
        assert!(generation_is_current(second, latest));
    }
}
