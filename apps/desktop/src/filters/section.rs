//! Collapsible titled card wrapping a group of filter controls.

use dioxus::prelude::*;

#[component]
pub fn FilterSection(title: String, default_open: bool, children: Element) -> Element {
    let mut open = use_signal(move || default_open);
    let arrow = if open() { "\u{25B2}" } else { "\u{25BC}" };

    rsx! {
        div {
            class: "card filter-section",
            button {
                class: "section-toggle",
                onclick: move |_| {
                    let now = open();
                    open.set(!now);
                },
                span { "{title}" }
                span { class: "section-arrow", "{arrow}" }
            }
            if open() {
                div { class: "section-body", {children} }
            }
        }
    }
}
