//! Per-row detail panel: summary, insights, image analysis, the full
//! engagement breakdown, visual tag groups, and creation metadata.

use dioxus::prelude::*;

use tweetscope_core::types::Tweet;

use super::expandable_text::ExpandableText;

#[component]
pub fn ExpandedRow(tweet: Tweet) -> Element {
    let captions = tweet.vision_captions.join(", ");
    let media: Vec<String> = tweet
        .all_media_url
        .entries()
        .iter()
        .map(|s| s.to_string())
        .collect();
    let metrics = [
        ("Likes", tweet.like_count),
        ("Retweets", tweet.retweet_count),
        ("Replies", tweet.reply_count),
        ("Views", tweet.views),
        ("Quotes", tweet.quote_count),
        ("Bookmarks", tweet.bookmark_count),
    ];

    rsx! {
        tr {
            class: "expanded-row",
            td {
                colspan: 7,
                div {
                    class: "expanded-grid",

                    div {
                        class: "expanded-column",
                        if !tweet.summary.is_empty() {
                            div {
                                class: "detail-card",
                                h4 { class: "label-section", "Summary" }
                                ExpandableText { text: tweet.summary.clone(), max_len: 200 }
                            }
                        }
                        if !tweet.insights.is_empty() {
                            div {
                                class: "detail-card",
                                h4 { class: "label-section", "Insights" }
                                ul {
                                    class: "insight-list",
                                    for insight in tweet.insights.iter() {
                                        li {
                                            span { class: "insight-bullet", "\u{2022}" }
                                            ExpandableText { text: insight.clone(), max_len: 150 }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    div {
                        class: "expanded-column",
                        if !captions.is_empty() {
                            div {
                                class: "detail-card",
                                h4 { class: "label-section", "Image Analysis" }
                                ExpandableText { text: captions.clone(), max_len: 200 }
                            }
                        }
                        div {
                            class: "detail-card",
                            h4 { class: "label-section", "Engagement" }
                            div {
                                class: "metric-grid",
                                for (label, value) in metrics {
                                    div {
                                        class: "metric-row",
                                        span { class: "metric-label", "{label}" }
                                        span { class: "metric-number", "{value}" }
                                    }
                                }
                            }
                        }
                    }
                }

                if !tweet.image_tags.is_empty() {
                    div {
                        class: "detail-card visual-tags",
                        h4 { class: "label-section", "Visual Tags" }
                        for group in tweet.image_tags.iter() {
                            div {
                                class: "visual-tag-group",
                                span { class: "visual-tag-primary", "{group.primary_tag}" }
                                if group.subtags.is_empty() {
                                    span { class: "cell-muted", "No subtags" }
                                }
                                for subtag in group.subtags.iter() {
                                    span { class: "tag-terra", "{subtag}" }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "expanded-footer",
                    if !tweet.created_at.is_empty() {
                        span { "Created: {tweet.created_at}" }
                    }
                    if !tweet.author.is_empty() {
                        span { "Author: {tweet.author}" }
                    }
                    if !tweet.id.is_empty() {
                        span { class: "footer-id", "ID: {tweet.id}" }
                    }
                    if !media.is_empty() {
                        span { "Media:" }
                        for (num, link) in media.iter().enumerate().map(|(i, l)| (i + 1, l)) {
                            a {
                                class: "row-link",
                                href: "{link}",
                                target: "_blank",
                                "[{num}]"
                            }
                        }
                    }
                }
            }
        }
    }
}
