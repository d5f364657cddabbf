//! Inline truncated text with a more/less toggle.

use dioxus::prelude::*;

#[component]
pub fn ExpandableText(text: String, max_len: usize) -> Element {
    let mut expanded = use_signal(|| false);

    if text.is_empty() {
        return rsx! {
            span { class: "cell-muted", "\u{2014}" }
        };
    }
    if text.chars().count() <= max_len {
        return rsx! {
            span { "{text}" }
        };
    }

    let shown = if expanded() {
        text.clone()
    } else {
        let cut: String = text.chars().take(max_len).collect();
        format!("{cut}...")
    };
    let toggle = if expanded() { "less" } else { "more" };

    rsx! {
        span {
            "{shown}"
            button {
                class: "btn-ghost text-toggle",
                onclick: move |e| {
                    e.stop_propagation();
                    let now = expanded();
                    expanded.set(!now);
                },
                "{toggle}"
            }
        }
    }
}
