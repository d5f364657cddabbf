//! Root application component — header with search bar, filter sidebar,
//! results table, and the floating ask-LLM panel.

use dioxus::prelude::*;

use tweetscope_core::export;
use tweetscope_core::query::has_active_filters;

use crate::ask_panel::AskPanel;
use crate::filters::FiltersSidebar;
use crate::results::ResultsTable;
use crate::state::*;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    // Catalog load happens once; widgets render empty lists until it lands.
    use_future(|| load_filter_catalog());

    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app-shell",
            Header {}
            div {
                class: "main-content",
                aside {
                    class: "filter-sidebar",
                    FiltersSidebar {}
                }
                section {
                    class: "results-area",
                    ResultsTable {}
                }
            }
            AskPanel {}
        }
    }
}

/// Header: title, action buttons, search bar, and the status line.
#[component]
fn Header() -> Element {
    let total = *TOTAL_MATCHES.read();
    let searching = *SEARCHING.read();
    let error = SEARCH_ERROR.read().clone();
    let notice = EXPORT_NOTICE.read().clone();
    let has_rows = !ROWS.read().is_empty();
    let query = QUERY_TEXT.read().clone();

    rsx! {
        header {
            class: "header",
            div {
                class: "header-top",
                div {
                    h1 { class: "header-title", "Tweet Explorer" }
                    p {
                        class: "header-subtitle",
                        if total > 0 {
                            "Semantic search across {total} crypto discourse tweets"
                        } else {
                            "Semantic search across a crypto discourse corpus"
                        }
                    }
                }
                div {
                    class: "header-actions",
                    button {
                        class: "btn-secondary",
                        onclick: move |_| {
                            let visible = *ASK_VISIBLE.read();
                            *ASK_VISIBLE.write() = !visible;
                        },
                        "Ask LLM"
                    }
                    button {
                        class: "btn-secondary",
                        disabled: !has_rows,
                        onclick: move |_| export_results(),
                        "Export .xlsx"
                    }
                }
            }

            div {
                class: "search-bar",
                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Search tweets semantically (or leave empty for metadata search)...",
                    value: "{query}",
                    oninput: move |e: Event<FormData>| {
                        *QUERY_TEXT.write() = e.value();
                    },
                    onkeydown: move |e: Event<KeyboardData>| {
                        if e.key() == Key::Enter {
                            run_search(1);
                        }
                    },
                }
                button {
                    class: "btn-primary search-submit",
                    disabled: searching,
                    onclick: move |_| run_search(1),
                    if searching { "..." } else { "Search" }
                }
            }

            if let Some(message) = error {
                p { class: "status-line status-error", "{message}" }
            } else if !searching && total > 0 {
                p { class: "status-line status-ok", "{total} tweets found" }
            }
            if let Some(message) = notice {
                p { class: "status-line status-muted", "{message}" }
            }
        }
    }
}

/// Flatten the current result set and write the dated workbook next to the
/// working directory. Export runs over fetch order, not the displayed sort.
fn export_results() {
    let rows = ROWS.read();
    if rows.is_empty() {
        return;
    }
    let flat = export::flatten(&rows);
    let name = export::export_filename(chrono::Local::now().date_naive());
    let path = std::env::current_dir().unwrap_or_default().join(&name);

    match export::write_xlsx(&path, &flat) {
        Ok(()) => {
            tracing::info!(rows = flat.len(), path = %path.display(), "exported workbook");
            *EXPORT_NOTICE.write() = Some(format!("Exported {} rows to {name}", flat.len()));
        }
        Err(err) => {
            tracing::error!(error = %err, "export failed");
            *EXPORT_NOTICE.write() = Some("Export failed.".to_string());
        }
    }
}

/// "Clear all" affordance shown while anything is selected.
#[component]
pub fn ClearAllButton() -> Element {
    let active = has_active_filters(&ACTIVE_FILTERS.read(), &QUERY_TEXT.read());
    if !active {
        return rsx! {};
    }
    rsx! {
        button {
            class: "btn-ghost clear-all",
            onclick: move |_| clear_all_filters(),
            "Clear all"
        }
    }
}
