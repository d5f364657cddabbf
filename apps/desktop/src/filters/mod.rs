//! Filter sidebar — facet selectors, date range, and engagement thresholds.

mod date_range;
mod engagement;
mod searchable_select;
mod section;

use dioxus::prelude::*;

use tweetscope_core::types::ListField;

use crate::app::ClearAllButton;
use date_range::DateRangePicker;
use engagement::EngagementInputs;
use searchable_select::SearchableSelect;
use section::FilterSection;

#[component]
pub fn FiltersSidebar() -> Element {
    rsx! {
        div {
            class: "sidebar-head",
            span { class: "label-section", "Filters" }
            ClearAllButton {}
        }

        div {
            class: "card filter-card",
            span { class: "label-section", "Content Tags" }
            SearchableSelect { field: ListField::Tags, label: "Regex Tags" }
        }

        div {
            class: "card filter-card",
            span { class: "label-section", "Image Analysis" }
            SearchableSelect { field: ListField::ImageTags, label: "Primary Tags" }
            SearchableSelect { field: ListField::ImageSubtags, label: "Subtags" }
        }

        div {
            class: "card filter-card",
            span { class: "label-section", "Accounts" }
            SearchableSelect { field: ListField::Handles, label: "Handles" }
        }

        FilterSection {
            title: "Date Range",
            default_open: false,
            DateRangePicker {}
        }

        FilterSection {
            title: "Engagement",
            default_open: false,
            EngagementInputs {}
        }
    }
}
