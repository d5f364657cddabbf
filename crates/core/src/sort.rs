//! Client-side result sorting: a single engagement key, stable in both
//! directions, over the current page only. Sorting never triggers a re-fetch.

use serde::Serialize;

use crate::types::{ResultRow, Tweet};

/// Engagement metric a results table can sort on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortKey {
    Likes,
    Views,
    Retweets,
    Replies,
    Quotes,
    Bookmarks,
}

impl SortKey {
    /// The metric's value for one tweet. Absent counters deserialize as 0.
    pub fn value(self, tweet: &Tweet) -> u64 {
        match self {
            SortKey::Likes => tweet.like_count,
            SortKey::Views => tweet.views,
            SortKey::Retweets => tweet.retweet_count,
            SortKey::Replies => tweet.reply_count,
            SortKey::Quotes => tweet.quote_count,
            SortKey::Bookmarks => tweet.bookmark_count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Current sort configuration. `key == None` means fetch order. Local to the
/// results presenter; persists across result-set replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SortState {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortState {
    /// Header-click cycle: sorted-by-key ascending flips to descending;
    /// every other state becomes ascending on that key.
    pub fn toggle(&mut self, key: SortKey) {
        let direction = if self.key == Some(key) && self.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        *self = SortState { key: Some(key), direction };
    }
}

/// Sorted copy of the current page's rows. The sort is stable, so rows with
/// equal metric values keep their original fetch order in either direction.
pub fn sorted_rows(rows: &[ResultRow], sort: SortState) -> Vec<ResultRow> {
    let mut out = rows.to_vec();
    if let Some(key) = sort.key {
        out.sort_by(|a, b| {
            let (va, vb) = (key.value(&a.tweet), key.value(&b.tweet));
            match sort.direction {
                SortDirection::Ascending => va.cmp(&vb),
                SortDirection::Descending => vb.cmp(&va),
            }
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tweet;

    fn row(id: &str, likes: u64) -> ResultRow {
        ResultRow {
            key: id.to_string(),
            tweet: Tweet {
                id: id.to_string(),
                like_count: likes,
                ..Tweet::default()
            },
        }
    }

    #[test]
    fn toggle_cycles_ascending_then_descending() {
        let mut sort = SortState::default();
        sort.toggle(SortKey::Likes);
        assert_eq!(sort.direction, SortDirection::Ascending);
        sort.toggle(SortKey::Likes);
        assert_eq!(sort.direction, SortDirection::Descending);
        sort.toggle(SortKey::Likes);
        assert_eq!(sort.direction, SortDirection::Ascending);
    }

    #[test]
    fn toggle_from_other_key_starts_ascending() {
        let mut sort = SortState::default();
        sort.toggle(SortKey::Views);
        sort.toggle(SortKey::Views);
        assert_eq!(sort.direction, SortDirection::Descending);
        sort.toggle(SortKey::Likes);
        assert_eq!(sort.key, Some(SortKey::Likes));
        assert_eq!(sort.direction, SortDirection::Ascending);
    }

    #[test]
    fn sorts_by_likes_both_directions() {
        let rows = vec![row("a", 5), row("b", 1), row("c", 9)];
        let asc = sorted_rows(
            &rows,
            SortState { key: Some(SortKey::Likes), direction: SortDirection::Ascending },
        );
        assert_eq!(asc.iter().map(|r| r.key.as_str()).collect::<Vec<_>>(), ["b", "a", "c"]);

        let desc = sorted_rows(
            &rows,
            SortState { key: Some(SortKey::Likes), direction: SortDirection::Descending },
        );
        assert_eq!(desc.iter().map(|r| r.key.as_str()).collect::<Vec<_>>(), ["c", "a", "b"]);
    }

    #[test]
    fn equal_values_keep_fetch_order() {
        let rows = vec![row("first", 7), row("second", 7), row("third", 3)];
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let sorted = sorted_rows(
                &rows,
                SortState { key: Some(SortKey::Likes), direction },
            );
            let first = sorted.iter().position(|r| r.key == "first").unwrap();
            let second = sorted.iter().position(|r| r.key == "second").unwrap();
            assert!(first < second, "ties must keep fetch order ({direction:?})");
        }
    }

    #[test]
    fn no_key_returns_fetch_order() {
        let rows = vec![row("a", 5), row("b", 1)];
        let same = sorted_rows(&rows, SortState::default());
        assert_eq!(same, rows);
    }
}
