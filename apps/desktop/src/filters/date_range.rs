//! Date-range picker with three input modes writing the same two filter
//! fields: quick presets, month/year composition, and direct date inputs.
//! Last writer wins; no cross-mode reconciliation.

use dioxus::prelude::*;

use tweetscope_core::dates::{
    end_of_month, first_of_month, fixed_year, last_months, year_options, DateRange, MONTH_NAMES,
};
use tweetscope_core::types::{FilterUpdate, ScalarField};

use crate::state::{update_filters, ACTIVE_FILTERS};

fn apply_range(range: DateRange) {
    update_filters(FilterUpdate::Scalar(ScalarField::StartDate, range.start));
    update_filters(FilterUpdate::Scalar(ScalarField::EndDate, range.end));
}

/// Compose and write one endpoint from its month/year dropdowns, once both
/// are chosen. The start endpoint snaps to the first of the month, the end
/// endpoint to the last calendar day.
fn apply_month_year(field: ScalarField, month: &str, year: &str) {
    let (Ok(month), Ok(year)) = (month.parse::<u32>(), year.parse::<i32>()) else {
        return;
    };
    let composed = match field {
        ScalarField::StartDate => first_of_month(year, month),
        _ => end_of_month(year, month),
    };
    if let Some(date) = composed {
        update_filters(FilterUpdate::Scalar(field, date));
    }
}

#[component]
pub fn DateRangePicker() -> Element {
    let mut show_custom = use_signal(|| false);
    let mut start_month = use_signal(String::new);
    let mut start_year = use_signal(String::new);
    let mut end_month = use_signal(String::new);
    let mut end_year = use_signal(String::new);

    let today = chrono::Local::now().date_naive();
    let years = year_options(today);
    let months: Vec<(u32, &str)> = MONTH_NAMES
        .iter()
        .enumerate()
        .map(|(idx, name)| (idx as u32 + 1, *name))
        .collect();

    let start_date = ACTIVE_FILTERS.read().start_date.clone();
    let end_date = ACTIVE_FILTERS.read().end_date.clone();
    let has_dates = !start_date.is_empty() || !end_date.is_empty();
    let custom_arrow = if show_custom() {
        "\u{25BC} Hide custom range"
    } else {
        "\u{25B6} Custom range"
    };

    rsx! {
        div {
            class: "date-picker",

            div {
                span { class: "label", "Quick Select" }
                div {
                    class: "quick-grid",
                    button {
                        class: "btn-secondary",
                        onclick: move |_| apply_range(last_months(1, chrono::Local::now().date_naive())),
                        "Last Month"
                    }
                    button {
                        class: "btn-secondary",
                        onclick: move |_| apply_range(last_months(3, chrono::Local::now().date_naive())),
                        "Last 3 Mo"
                    }
                    button {
                        class: "btn-secondary",
                        onclick: move |_| apply_range(last_months(12, chrono::Local::now().date_naive())),
                        "Last Year"
                    }
                    for year in [2024, 2023, 2022] {
                        button {
                            class: "btn-secondary",
                            onclick: move |_| apply_range(fixed_year(year)),
                            "{year}"
                        }
                    }
                }
            }

            button {
                class: "btn-ghost custom-toggle",
                onclick: move |_| {
                    let now = show_custom();
                    show_custom.set(!now);
                },
                "{custom_arrow}"
            }

            if show_custom() {
                div {
                    class: "custom-range",

                    div {
                        span { class: "label", "From" }
                        div {
                            class: "month-year-row",
                            select {
                                class: "input-base",
                                value: "{start_month}",
                                onchange: move |e: Event<FormData>| {
                                    start_month.set(e.value());
                                    apply_month_year(ScalarField::StartDate, &start_month(), &start_year());
                                },
                                option { value: "", "Month" }
                                for (num, name) in months.clone() {
                                    option { value: "{num}", "{name}" }
                                }
                            }
                            select {
                                class: "input-base year-select",
                                value: "{start_year}",
                                onchange: move |e: Event<FormData>| {
                                    start_year.set(e.value());
                                    apply_month_year(ScalarField::StartDate, &start_month(), &start_year());
                                },
                                option { value: "", "Year" }
                                for year in years.clone() {
                                    option { value: "{year}", "{year}" }
                                }
                            }
                        }
                    }

                    div {
                        span { class: "label", "To" }
                        div {
                            class: "month-year-row",
                            select {
                                class: "input-base",
                                value: "{end_month}",
                                onchange: move |e: Event<FormData>| {
                                    end_month.set(e.value());
                                    apply_month_year(ScalarField::EndDate, &end_month(), &end_year());
                                },
                                option { value: "", "Month" }
                                for (num, name) in months.clone() {
                                    option { value: "{num}", "{name}" }
                                }
                            }
                            select {
                                class: "input-base year-select",
                                value: "{end_year}",
                                onchange: move |e: Event<FormData>| {
                                    end_year.set(e.value());
                                    apply_month_year(ScalarField::EndDate, &end_month(), &end_year());
                                },
                                option { value: "", "Year" }
                                for year in years.clone() {
                                    option { value: "{year}", "{year}" }
                                }
                            }
                        }
                    }

                    div {
                        class: "specific-dates",
                        span { class: "label", "Or Specific Dates" }
                        // Soft cross-constraints only: the stored values are
                        // never hard-validated against each other.
                        input {
                            class: "input-base",
                            r#type: "date",
                            value: "{start_date}",
                            max: if !end_date.is_empty() { "{end_date}" },
                            oninput: move |e: Event<FormData>| {
                                update_filters(FilterUpdate::Scalar(ScalarField::StartDate, e.value()));
                            },
                        }
                        input {
                            class: "input-base",
                            r#type: "date",
                            value: "{end_date}",
                            min: if !start_date.is_empty() { "{start_date}" },
                            oninput: move |e: Event<FormData>| {
                                update_filters(FilterUpdate::Scalar(ScalarField::EndDate, e.value()));
                            },
                        }
                    }
                }
            }

            if has_dates {
                button {
                    class: "btn-ghost clear-dates",
                    onclick: move |_| {
                        update_filters(FilterUpdate::Scalar(ScalarField::StartDate, String::new()));
                        update_filters(FilterUpdate::Scalar(ScalarField::EndDate, String::new()));
                        start_month.set(String::new());
                        start_year.set(String::new());
                        end_month.set(String::new());
                        end_year.set(String::new());
                    },
                    "Clear dates"
                }
            }
        }
    }
}
