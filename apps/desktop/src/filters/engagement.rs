//! Minimum-engagement threshold inputs. Values stay strings until the query
//! builder transmits them.

use dioxus::prelude::*;

use tweetscope_core::types::{FilterUpdate, ScalarField};

use crate::state::{update_filters, ACTIVE_FILTERS};

const THRESHOLD_FIELDS: [(ScalarField, &str); 6] = [
    (ScalarField::MinLikes, "Min Likes"),
    (ScalarField::MinViews, "Min Views"),
    (ScalarField::MinRetweets, "Min Retweets"),
    (ScalarField::MinReplies, "Min Replies"),
    (ScalarField::MinQuotes, "Min Quotes"),
    (ScalarField::MinBookmarks, "Min Bookmarks"),
];

#[component]
pub fn EngagementInputs() -> Element {
    rsx! {
        div {
            class: "engagement-inputs",
            for (field, label) in THRESHOLD_FIELDS {
                {
                    let value = ACTIVE_FILTERS.read().scalar(field).to_string();
                    rsx! {
                        div {
                            class: "engagement-field",
                            label { class: "label", "{label}" }
                            input {
                                class: "input-base",
                                r#type: "number",
                                min: "0",
                                placeholder: "0",
                                value: "{value}",
                                oninput: move |e: Event<FormData>| {
                                    update_filters(FilterUpdate::Scalar(field, e.value()));
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}
