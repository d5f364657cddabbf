//! Results table: sortable engagement column, per-row expansion, and
//! pagination. Sorting is client-side over the current page; the fetch
//! lifecycle lives in `state::run_search`.

mod expandable_text;
mod expanded_row;

use dioxus::prelude::*;

use tweetscope_core::sort::{sorted_rows, SortDirection, SortKey};
use tweetscope_core::types::{can_page_back, can_page_forward, ResultRow};

use crate::state::*;
use expandable_text::ExpandableText;
use expanded_row::ExpandedRow;

/// Human-friendly short date for the row header; falls back to the raw
/// string when the backend date is not ISO.
fn short_date(date: &str) -> String {
    match chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%b %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

#[component]
pub fn ResultsTable() -> Element {
    let searching = *SEARCHING.read();
    if searching {
        return rsx! {
            div {
                class: "results-loading",
                div { class: "spinner" }
                p { "Searching tweets..." }
            }
        };
    }

    let rows = ROWS.read();
    if rows.is_empty() {
        return rsx! {
            div {
                class: "results-empty",
                p { class: "results-empty-title", "No results" }
                p { "Try adjusting your search or filters." }
            }
        };
    }

    let sort = *SORT.read();
    let sorted = sorted_rows(&rows, sort);
    let sort_arrow = match (sort.key, sort.direction) {
        (None, _) => "",
        (Some(_), SortDirection::Ascending) => " \u{2191}",
        (Some(_), SortDirection::Descending) => " \u{2193}",
    };

    let page = *PAGE.read();
    let pages = current_total_pages();

    rsx! {
        div {
            class: "card results-card",
            table {
                class: "results-table",
                thead {
                    tr {
                        th { class: "th-expand", "" }
                        th { "Handle / Date" }
                        th { class: "th-text", "Tweet" }
                        th { "Tags" }
                        th { "Image Tags" }
                        th {
                            class: "th-engagement",
                            onclick: move |_| SORT.write().toggle(SortKey::Likes),
                            "Engagement{sort_arrow}"
                        }
                        th { class: "th-links", "Links" }
                    }
                }
                tbody {
                    for row in sorted {
                        ResultRowView { row: row.clone() }
                    }
                }
            }

            if pages > 1 {
                div {
                    class: "pagination",
                    span { class: "pagination-label", "Page {page} of {pages}" }
                    div {
                        class: "pagination-buttons",
                        button {
                            class: "btn-secondary",
                            disabled: !can_page_back(page),
                            onclick: move |_| run_search(page - 1),
                            "Previous"
                        }
                        button {
                            class: "btn-secondary",
                            disabled: !can_page_forward(page, pages),
                            onclick: move |_| run_search(page + 1),
                            "Next"
                        }
                    }
                }
            }
        }
    }
}

/// One collapsed result row plus its optional detail panel. Expansion is
/// keyed by the durable row key, so it survives resorting.
#[component]
fn ResultRowView(row: ResultRow) -> Element {
    let key = row.key.clone();
    let expanded = EXPANDED_ROWS.read().contains(&key);
    let tweet = &row.tweet;

    let arrow = if expanded { "\u{25BC}" } else { "\u{25B6}" };
    let date = short_date(&tweet.date);
    let tag_overflow = tweet.tags.len().saturating_sub(3);
    let image_tag_overflow = tweet.image_tags.len().saturating_sub(2);
    let likes = tweet.like_count;
    let retweets = tweet.retweet_count;
    let replies = tweet.reply_count;
    let url = if tweet.url.is_empty() || tweet.url.starts_with("http") {
        tweet.url.clone()
    } else {
        format!("https://{}", tweet.url)
    };

    rsx! {
        tr {
            class: "result-row",
            td {
                class: "td-expand",
                button {
                    class: if expanded { "expand-toggle open" } else { "expand-toggle" },
                    onclick: move |_| {
                        let mut open_rows = EXPANDED_ROWS.write();
                        if open_rows.contains(&key) {
                            open_rows.remove(&key);
                        } else {
                            open_rows.insert(key.clone());
                        }
                    },
                    "{arrow}"
                }
            }
            td {
                class: "td-handle",
                div { class: "row-handle", "{tweet.handle}" }
                div { class: "row-date", "{date}" }
            }
            td {
                class: "td-text",
                ExpandableText { text: tweet.text.clone(), max_len: 120 }
            }
            td {
                class: "td-tags",
                if tweet.tags.is_empty() {
                    span { class: "cell-muted", "\u{2014}" }
                }
                for tag in tweet.tags.iter().take(3) {
                    span { class: "tag", "{tag}" }
                }
                if tag_overflow > 0 {
                    span { class: "cell-muted", "+{tag_overflow}" }
                }
            }
            td {
                class: "td-tags",
                if tweet.image_tags.is_empty() {
                    span { class: "cell-muted", "\u{2014}" }
                }
                for group in tweet.image_tags.iter().take(2) {
                    span { class: "tag-terra", "{group.primary_tag}" }
                }
                if image_tag_overflow > 0 {
                    span { class: "cell-muted", "+{image_tag_overflow}" }
                }
            }
            td {
                class: "td-engagement",
                span { class: "metric metric-likes", "L" }
                span { class: "metric-value", "{likes}" }
                span { class: "metric metric-retweets", "RT" }
                span { class: "metric-value", "{retweets}" }
                span { class: "metric metric-replies", "Re" }
                span { class: "metric-value", "{replies}" }
            }
            td {
                class: "td-links",
                if !url.is_empty() {
                    a {
                        class: "row-link",
                        href: "{url}",
                        target: "_blank",
                        "Link"
                    }
                }
            }
        }
        if expanded {
            ExpandedRow { tweet: row.tweet.clone() }
        }
    }
}
