//! Floating ask-LLM panel: one free-form question over the current filter
//! context, answered by `GET /query`.

use dioxus::prelude::*;

use tweetscope_core::query::build_ask_params;

use crate::state::{api, ACTIVE_FILTERS, ASK_VISIBLE, QUERY_TEXT};

/// Fixed fallback shown for any failed LLM query.
const ASK_ERROR_MSG: &str = "Error querying LLM. Please try again.";

/// Plain Enter submits; Shift+Enter falls through to the textarea so a
/// multi-line question stays possible.
fn enter_submits(key: Key, modifiers: Modifiers) -> bool {
    key == Key::Enter && !modifiers.contains(Modifiers::SHIFT)
}

#[component]
pub fn AskPanel() -> Element {
    let mut input = use_signal(String::new);
    let mut response = use_signal(String::new);
    let mut loading = use_signal(|| false);

    if !*ASK_VISIBLE.read() {
        return rsx! {};
    }

    let question = input();
    let can_submit = !loading() && !question.trim().is_empty();

    let submit = move |_| {
        let question = input();
        if loading() || question.trim().is_empty() {
            return;
        }
        loading.set(true);
        let params = build_ask_params(&question, &ACTIVE_FILTERS.read());
        spawn(async move {
            match api().ask(&params).await {
                Ok(answer) => response.set(answer),
                Err(err) => {
                    tracing::error!(error = %err, "LLM query failed");
                    response.set(ASK_ERROR_MSG.to_string());
                }
            }
            loading.set(false);
        });
    };

    let query_text = QUERY_TEXT.read().clone();
    let filters = ACTIVE_FILTERS.read().clone();
    let tag_count = filters.tags.len();
    let handle_count = filters.handles.len();
    let has_context = tag_count > 0
        || handle_count > 0
        || !filters.start_date.is_empty()
        || !filters.end_date.is_empty();
    let submit_label = if loading() { "Thinking..." } else { "Ask" };
    let answer = response();

    rsx! {
        div {
            class: "ask-panel",
            div {
                class: "ask-header",
                div {
                    h3 { class: "ask-title", "Ask About Results" }
                    p { class: "ask-subtitle", "LLM analyzes tweets matching your current filters" }
                }
                button {
                    class: "btn-ghost",
                    onclick: move |_| *ASK_VISIBLE.write() = false,
                    "\u{00D7}"
                }
            }

            div {
                class: "ask-body",
                div {
                    class: "ask-context",
                    span { class: "label", "Context" }
                    if !query_text.is_empty() {
                        div { class: "ask-context-line", "Search: \u{201C}{query_text}\u{201D}" }
                    }
                    div {
                        class: "ask-context-line",
                        "Filters: "
                        if has_context {
                            span {
                                if tag_count > 0 {
                                    "Tags ({tag_count}) "
                                }
                                if handle_count > 0 {
                                    "Handles ({handle_count}) "
                                }
                                if !filters.start_date.is_empty() {
                                    "From {filters.start_date} "
                                }
                                if !filters.end_date.is_empty() {
                                    "To {filters.end_date}"
                                }
                            }
                        } else {
                            span { class: "cell-muted", "None" }
                        }
                    }
                }

                textarea {
                    class: "input-base ask-input",
                    rows: 3,
                    placeholder: "Ask a question about the filtered tweets...",
                    value: "{question}",
                    oninput: move |e: Event<FormData>| input.set(e.value()),
                    onkeydown: {
                        let mut submit = submit;
                        move |e: Event<KeyboardData>| {
                            if enter_submits(e.key(), e.modifiers()) {
                                e.prevent_default();
                                submit(());
                            }
                        }
                    },
                }

                button {
                    class: "btn-primary ask-submit",
                    disabled: !can_submit,
                    onclick: move |_| submit(()),
                    "{submit_label}"
                }

                if !answer.is_empty() {
                    div {
                        class: "ask-response",
                        span { class: "label-section", "Response" }
                        p { class: "ask-response-text", "{answer}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_enter_submits_but_shift_enter_does_not() {
        assert!(enter_submits(Key::Enter, Modifiers::empty()));
        assert!(
            !enter_submits(Key::Enter, Modifiers::SHIFT),
            "Shift+Enter must insert a newline instead of submitting"
        );
        assert!(!enter_submits(Key::Character("a".into()), Modifiers::empty()));
    }
}
