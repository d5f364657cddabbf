//! Core types shared across Tweetscope: the filter catalog, the user's active
//! filter selections, tweet search results, and result-row identity.

use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Filter catalog
// ---------------------------------------------------------------------------

/// Vocabulary of selectable filter values, served by `GET /filters`.
/// Fetched once at startup and immutable for the session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    pub tags: Vec<String>,
    pub authors: Vec<String>,
    pub handles: Vec<String>,
    pub image_tags: Vec<String>,
    pub image_subtags: Vec<String>,
}

impl FilterOptions {
    /// Option list for one multi-value facet.
    pub fn list(&self, field: ListField) -> &[String] {
        match field {
            ListField::Tags => &self.tags,
            ListField::ImageTags => &self.image_tags,
            ListField::ImageSubtags => &self.image_subtags,
            ListField::Handles => &self.handles,
        }
    }
}

// ---------------------------------------------------------------------------
// Active filter state
// ---------------------------------------------------------------------------

/// The four multi-value facets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListField {
    Tags,
    ImageTags,
    ImageSubtags,
    Handles,
}

impl ListField {
    pub const ALL: [ListField; 4] = [
        ListField::Tags,
        ListField::ImageTags,
        ListField::ImageSubtags,
        ListField::Handles,
    ];

    /// Singular query-parameter name expected by the backend.
    pub fn wire_name(self) -> &'static str {
        match self {
            ListField::Tags => "tag",
            ListField::ImageTags => "image_tag",
            ListField::ImageSubtags => "image_subtag",
            ListField::Handles => "handle",
        }
    }
}

/// Scalar filter fields: the date range plus six engagement thresholds.
/// Threshold values stay strings until transmitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarField {
    StartDate,
    EndDate,
    MinLikes,
    MinViews,
    MinRetweets,
    MinReplies,
    MinQuotes,
    MinBookmarks,
}

impl ScalarField {
    pub const ALL: [ScalarField; 8] = [
        ScalarField::StartDate,
        ScalarField::EndDate,
        ScalarField::MinLikes,
        ScalarField::MinViews,
        ScalarField::MinRetweets,
        ScalarField::MinReplies,
        ScalarField::MinQuotes,
        ScalarField::MinBookmarks,
    ];

    pub fn wire_name(self) -> &'static str {
        match self {
            ScalarField::StartDate => "start_date",
            ScalarField::EndDate => "end_date",
            ScalarField::MinLikes => "min_likes",
            ScalarField::MinViews => "min_views",
            ScalarField::MinRetweets => "min_retweets",
            ScalarField::MinReplies => "min_replies",
            ScalarField::MinQuotes => "min_quotes",
            ScalarField::MinBookmarks => "min_bookmarks",
        }
    }
}

/// A single filter mutation. Widgets never touch `ActiveFilters` directly;
/// they emit one of these through the shared update channel.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterUpdate {
    List(ListField, Vec<String>),
    Scalar(ScalarField, String),
    /// Reset every field to empty ("Clear all").
    Clear,
}

/// The user's current filter selections. Initialized all-empty, mutated
/// field-by-field via [`FilterUpdate`], never persisted across sessions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveFilters {
    pub tags: Vec<String>,
    pub image_tags: Vec<String>,
    pub image_subtags: Vec<String>,
    pub handles: Vec<String>,
    pub start_date: String,
    pub end_date: String,
    pub min_likes: String,
    pub min_views: String,
    pub min_retweets: String,
    pub min_replies: String,
    pub min_quotes: String,
    pub min_bookmarks: String,
}

impl ActiveFilters {
    /// Apply one mutation. The single entry point for all widget writes.
    pub fn apply(&mut self, update: FilterUpdate) {
        match update {
            FilterUpdate::List(field, values) => *self.list_mut(field) = values,
            FilterUpdate::Scalar(field, value) => *self.scalar_mut(field) = value,
            FilterUpdate::Clear => *self = ActiveFilters::default(),
        }
    }

    pub fn list(&self, field: ListField) -> &[String] {
        match field {
            ListField::Tags => &self.tags,
            ListField::ImageTags => &self.image_tags,
            ListField::ImageSubtags => &self.image_subtags,
            ListField::Handles => &self.handles,
        }
    }

    fn list_mut(&mut self, field: ListField) -> &mut Vec<String> {
        match field {
            ListField::Tags => &mut self.tags,
            ListField::ImageTags => &mut self.image_tags,
            ListField::ImageSubtags => &mut self.image_subtags,
            ListField::Handles => &mut self.handles,
        }
    }

    pub fn scalar(&self, field: ScalarField) -> &str {
        match field {
            ScalarField::StartDate => &self.start_date,
            ScalarField::EndDate => &self.end_date,
            ScalarField::MinLikes => &self.min_likes,
            ScalarField::MinViews => &self.min_views,
            ScalarField::MinRetweets => &self.min_retweets,
            ScalarField::MinReplies => &self.min_replies,
            ScalarField::MinQuotes => &self.min_quotes,
            ScalarField::MinBookmarks => &self.min_bookmarks,
        }
    }

    fn scalar_mut(&mut self, field: ScalarField) -> &mut String {
        match field {
            ScalarField::StartDate => &mut self.start_date,
            ScalarField::EndDate => &mut self.end_date,
            ScalarField::MinLikes => &mut self.min_likes,
            ScalarField::MinViews => &mut self.min_views,
            ScalarField::MinRetweets => &mut self.min_retweets,
            ScalarField::MinReplies => &mut self.min_replies,
            ScalarField::MinQuotes => &mut self.min_quotes,
            ScalarField::MinBookmarks => &mut self.min_bookmarks,
        }
    }

    /// True when every facet is empty (the all-default state).
    pub fn is_empty(&self) -> bool {
        ListField::ALL.iter().all(|f| self.list(*f).is_empty())
            && ScalarField::ALL.iter().all(|f| self.scalar(*f).is_empty())
    }
}

// ---------------------------------------------------------------------------
// Tweet results
// ---------------------------------------------------------------------------

/// A field the backend serves either as one string or as a list of strings.
/// Both shapes must deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextOrList {
    Text(String),
    List(Vec<String>),
}

impl Default for TextOrList {
    fn default() -> Self {
        TextOrList::List(Vec::new())
    }
}

impl TextOrList {
    pub fn is_empty(&self) -> bool {
        match self {
            TextOrList::Text(s) => s.is_empty(),
            TextOrList::List(v) => v.is_empty(),
        }
    }

    /// Join list entries with `sep`; a plain string passes through unchanged.
    pub fn join(&self, sep: &str) -> String {
        match self {
            TextOrList::Text(s) => s.clone(),
            TextOrList::List(v) => v.join(sep),
        }
    }

    /// View as a list of entries; a plain string becomes a one-entry list.
    pub fn entries(&self) -> Vec<&str> {
        match self {
            TextOrList::Text(s) if s.is_empty() => Vec::new(),
            TextOrList::Text(s) => vec![s.as_str()],
            TextOrList::List(v) => v.iter().map(String::as_str).collect(),
        }
    }
}

/// One primary image tag with its subtags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageTagGroup {
    pub primary_tag: String,
    pub subtags: Vec<String>,
}

/// Tolerate explicit `null` where the backend's sqlite rows carry NaN/None.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One tweet as returned by `GET /search`. Read-only; the whole result set
/// is replaced wholesale on each new search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tweet {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub text: String,
    #[serde(deserialize_with = "null_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_default")]
    pub insights: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub image_tags: Vec<ImageTagGroup>,
    #[serde(deserialize_with = "null_default")]
    pub vision_captions: TextOrList,
    #[serde(deserialize_with = "null_default")]
    pub handle: String,
    #[serde(deserialize_with = "null_default")]
    pub author: String,
    #[serde(deserialize_with = "null_default")]
    pub date: String,
    #[serde(rename = "createdAt", deserialize_with = "null_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(rename = "allMediaURL", deserialize_with = "null_default")]
    pub all_media_url: TextOrList,
    #[serde(rename = "likeCount", deserialize_with = "null_default")]
    pub like_count: u64,
    #[serde(deserialize_with = "null_default")]
    pub views: u64,
    #[serde(rename = "retweetCount", deserialize_with = "null_default")]
    pub retweet_count: u64,
    #[serde(rename = "replyCount", deserialize_with = "null_default")]
    pub reply_count: u64,
    #[serde(rename = "quoteCount", deserialize_with = "null_default")]
    pub quote_count: u64,
    #[serde(rename = "bookmarkCount", deserialize_with = "null_default")]
    pub bookmark_count: u64,
}

/// Response envelope for `GET /search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    pub matches: Vec<Tweet>,
    pub total_matches: u64,
}

/// Page count derived from a total and page size.
pub fn total_pages(total_matches: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_matches.div_ceil(page_size)
}

/// Previous is available only past the first page.
pub fn can_page_back(page: u64) -> bool {
    page > 1
}

/// Next is available only while later pages exist.
pub fn can_page_forward(page: u64, pages: u64) -> bool {
    page < pages
}

// ---------------------------------------------------------------------------
// Result-row identity
// ---------------------------------------------------------------------------

/// A tweet paired with a durable row key: the tweet id when present, else a
/// positional key synthesized once at fetch time. The key stays stable across
/// client-side resorting, so per-row UI state (expansion) survives reorder.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub key: String,
    pub tweet: Tweet,
}

impl ResultRow {
    /// Assign row keys to a fresh result set.
    pub fn from_matches(matches: Vec<Tweet>) -> Vec<ResultRow> {
        matches
            .into_iter()
            .enumerate()
            .map(|(idx, tweet)| {
                let key = if tweet.id.is_empty() {
                    format!("row-{idx}")
                } else {
                    tweet.id.clone()
                };
                ResultRow { key, tweet }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filters_are_empty() {
        let filters = ActiveFilters::default();
        assert!(filters.is_empty());
    }

    #[test]
    fn apply_list_and_scalar_updates() {
        let mut filters = ActiveFilters::default();
        filters.apply(FilterUpdate::List(ListField::Tags, vec!["defi".into()]));
        filters.apply(FilterUpdate::Scalar(ScalarField::MinLikes, "100".into()));
        assert_eq!(filters.tags, vec!["defi".to_string()]);
        assert_eq!(filters.min_likes, "100");
        assert!(!filters.is_empty());

        filters.apply(FilterUpdate::Clear);
        assert!(filters.is_empty());
    }

    #[test]
    fn tweet_accepts_string_or_list_captions() {
        let as_text: Tweet =
            serde_json::from_str(r#"{"id":"1","vision_captions":"a chart"}"#).unwrap();
        assert_eq!(as_text.vision_captions, TextOrList::Text("a chart".into()));

        let as_list: Tweet =
            serde_json::from_str(r#"{"id":"2","vision_captions":["a","b"]}"#).unwrap();
        assert_eq!(as_list.vision_captions.entries(), vec!["a", "b"]);
    }

    #[test]
    fn tweet_tolerates_nulls_and_missing_counters() {
        let tweet: Tweet = serde_json::from_str(
            r#"{"id":"3","summary":null,"likeCount":null,"views":12}"#,
        )
        .unwrap();
        assert_eq!(tweet.summary, "");
        assert_eq!(tweet.like_count, 0, "null counter should read as 0");
        assert_eq!(tweet.views, 12);
        assert_eq!(tweet.retweet_count, 0, "missing counter should read as 0");
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(45, 20), 3);
        assert_eq!(total_pages(40, 20), 2);
        assert_eq!(total_pages(0, 20), 0);
    }

    #[test]
    fn paging_buttons_disable_at_the_boundaries() {
        let pages = total_pages(45, 20);
        assert_eq!(pages, 3);
        assert!(!can_page_back(1), "Previous must be disabled on page 1");
        assert!(can_page_forward(1, pages));
        assert!(can_page_back(2));
        assert!(can_page_forward(2, pages));
        assert!(can_page_back(3));
        assert!(!can_page_forward(3, pages), "Next must be disabled on the last page");
        assert!(!can_page_forward(1, 0), "no pages means no forward paging");
    }

    #[test]
    fn row_keys_prefer_id_and_fall_back_to_position() {
        let rows = ResultRow::from_matches(vec![
            Tweet { id: "abc".into(), ..Tweet::default() },
            Tweet::default(),
        ]);
        assert_eq!(rows[0].key, "abc");
        assert_eq!(rows[1].key, "row-1");
    }
}
