//! Searchable multi-select over one facet of the filter catalog.
//!
//! The widget owns only its dropdown-open flag and search text; the
//! selection itself lives in `ACTIVE_FILTERS` and changes only through the
//! shared update channel.

use dioxus::prelude::*;

use tweetscope_core::select::{all_filtered_selected, filter_options, toggle_filtered, toggle_option};
use tweetscope_core::types::{FilterUpdate, ListField};

use crate::state::{update_filters, ACTIVE_FILTERS, OPTIONS};

/// Truncate a badge label to something that fits the sidebar.
fn badge_label(value: &str) -> String {
    if value.chars().count() > 20 {
        let cut: String = value.chars().take(20).collect();
        format!("{cut}...")
    } else {
        value.to_string()
    }
}

#[component]
pub fn SearchableSelect(field: ListField, label: String) -> Element {
    let mut open = use_signal(|| false);
    let mut search = use_signal(String::new);

    let options: Vec<String> = OPTIONS.read().list(field).to_vec();
    let selected: Vec<String> = ACTIVE_FILTERS.read().list(field).to_vec();

    let search_text = search();
    let filtered: Vec<String> = filter_options(&options, &search_text)
        .into_iter()
        .cloned()
        .collect();
    let filtered_refs: Vec<&String> = filtered.iter().collect();
    let all_selected = all_filtered_selected(&selected, &filtered_refs);

    let trigger_text = if selected.is_empty() {
        "Select...".to_string()
    } else {
        format!("{} selected", selected.len())
    };
    let trigger_arrow = if open() { "\u{25B2}" } else { "\u{25BC}" };
    let total_count = options.len();
    let filtered_count = filtered.len();
    let extra_count = selected.len().saturating_sub(3);

    rsx! {
        div {
            class: "select-widget",
            label { class: "label", "{label}" }

            button {
                class: "input-base select-trigger",
                onclick: move |_| {
                    let now = open();
                    open.set(!now);
                },
                span { class: "select-trigger-text", "{trigger_text}" }
                span { class: "select-trigger-arrow", "{trigger_arrow}" }
            }

            // Selected badges while closed
            if !selected.is_empty() && !open() {
                div {
                    class: "select-badges",
                    for value in selected.iter().take(3) {
                        span { class: "tag", {badge_label(value)} }
                    }
                    if selected.len() > 3 {
                        span { class: "select-more", "+{extra_count} more" }
                    }
                }
            }

            if open() {
                // Transparent backdrop: any interaction outside the dropdown
                // closes it.
                div {
                    class: "select-backdrop",
                    onclick: move |_| open.set(false),
                }
                div {
                    class: "select-dropdown",
                    div {
                        class: "select-search-row",
                        input {
                            class: "input-base select-search",
                            r#type: "text",
                            placeholder: "Filter {total_count} options...",
                            value: "{search_text}",
                            oninput: move |e: Event<FormData>| search.set(e.value()),
                        }
                        div {
                            class: "select-bulk-row",
                            button {
                                class: "btn-secondary",
                                onclick: {
                                    let options = options.clone();
                                    move |_| update_filters(FilterUpdate::List(field, options.clone()))
                                },
                                "All ({total_count})"
                            }
                            button {
                                class: "btn-secondary",
                                onclick: move |_| update_filters(FilterUpdate::List(field, Vec::new())),
                                "Clear"
                            }
                        }
                    }

                    if !search_text.is_empty() && !filtered.is_empty() {
                        div {
                            class: "select-filtered-row",
                            button {
                                class: "btn-secondary",
                                onclick: {
                                    let selected = selected.clone();
                                    let filtered = filtered.clone();
                                    move |_| {
                                        let refs: Vec<&String> = filtered.iter().collect();
                                        let next = toggle_filtered(&selected, &refs);
                                        update_filters(FilterUpdate::List(field, next));
                                    }
                                },
                                if all_selected {
                                    "Deselect {filtered_count} filtered"
                                } else {
                                    "Select {filtered_count} filtered"
                                }
                            }
                        }
                    }

                    div {
                        class: "select-options",
                        if filtered.is_empty() {
                            div { class: "select-empty", "No matches" }
                        }
                        for option in filtered.iter() {
                            {
                                let is_selected = selected.contains(option);
                                let option = option.clone();
                                let selected = selected.clone();
                                rsx! {
                                    label {
                                        class: "select-option",
                                        input {
                                            r#type: "checkbox",
                                            checked: is_selected,
                                            onchange: move |_| {
                                                let next = toggle_option(&selected, &option);
                                                update_filters(FilterUpdate::List(field, next));
                                            },
                                        }
                                        span { class: "select-option-text", "{option}" }
                                    }
                                }
                            }
                        }
                    }

                    div {
                        class: "select-footer",
                        "{filtered_count} of {total_count}"
                    }
                }
            }
        }
    }
}
