//! Spreadsheet export: flattens the in-memory result set into fixed columns
//! and writes a single-sheet xlsx workbook. Entirely local — export never
//! touches the network and runs over the rows in fetch order, not the
//! currently displayed sort.

use std::path::Path;

use chrono::NaiveDate;
use rust_xlsxwriter::{Workbook, XlsxError};
use serde::Serialize;

use crate::types::{ImageTagGroup, ResultRow};

/// Column order of the exported sheet.
pub const EXPORT_HEADERS: [&str; 17] = [
    "id",
    "text",
    "summary",
    "insights",
    "tags",
    "image_tags",
    "vision_captions",
    "handle",
    "author",
    "date",
    "url",
    "likeCount",
    "views",
    "retweetCount",
    "replyCount",
    "quoteCount",
    "bookmarkCount",
];

/// One flattened spreadsheet row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    pub id: String,
    pub text: String,
    pub summary: String,
    pub insights: String,
    pub tags: String,
    pub image_tags: String,
    pub vision_captions: String,
    pub handle: String,
    pub author: String,
    pub date: String,
    pub url: String,
    pub like_count: u64,
    pub views: u64,
    pub retweet_count: u64,
    pub reply_count: u64,
    pub quote_count: u64,
    pub bookmark_count: u64,
}

/// Render the nested image-tag groups as `"<primary>: <subtags>"` joined
/// with `" | "` across groups.
pub fn image_tags_cell(groups: &[ImageTagGroup]) -> String {
    groups
        .iter()
        .map(|g| format!("{}: {}", g.primary_tag, g.subtags.join(", ")))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Flatten result rows into spreadsheet rows, preserving fetch order.
pub fn flatten(rows: &[ResultRow]) -> Vec<ExportRow> {
    rows.iter()
        .map(|row| {
            let t = &row.tweet;
            ExportRow {
                id: t.id.clone(),
                text: t.text.clone(),
                summary: t.summary.clone(),
                insights: t.insights.join(" | "),
                tags: t.tags.join(", "),
                image_tags: image_tags_cell(&t.image_tags),
                vision_captions: t.vision_captions.join(" | "),
                handle: t.handle.clone(),
                author: t.author.clone(),
                date: t.date.clone(),
                url: t.url.clone(),
                like_count: t.like_count,
                views: t.views,
                retweet_count: t.retweet_count,
                reply_count: t.reply_count,
                quote_count: t.quote_count,
                bookmark_count: t.bookmark_count,
            }
        })
        .collect()
}

/// Export filename for a given calendar date.
pub fn export_filename(today: NaiveDate) -> String {
    format!("tweet_results_{}.xlsx", today.format("%Y-%m-%d"))
}

/// Write the flattened rows to a one-sheet workbook at `path`.
pub fn write_xlsx(path: &Path, rows: &[ExportRow]) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Tweets")?;

    for (col, header) in EXPORT_HEADERS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }

    for (idx, row) in rows.iter().enumerate() {
        let r = idx as u32 + 1;
        let text_cells = [
            &row.id,
            &row.text,
            &row.summary,
            &row.insights,
            &row.tags,
            &row.image_tags,
            &row.vision_captions,
            &row.handle,
            &row.author,
            &row.date,
            &row.url,
        ];
        for (col, value) in text_cells.iter().enumerate() {
            sheet.write_string(r, col as u16, value.as_str())?;
        }
        let counters = [
            row.like_count,
            row.views,
            row.retweet_count,
            row.reply_count,
            row.quote_count,
            row.bookmark_count,
        ];
        for (offset, value) in counters.iter().enumerate() {
            sheet.write_number(r, (text_cells.len() + offset) as u16, *value as f64)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TextOrList, Tweet};

    fn sample_row() -> ResultRow {
        ResultRow {
            key: "1".into(),
            tweet: Tweet {
                id: "1".into(),
                insights: vec!["a".into(), "b".into()],
                tags: vec!["x".into(), "y".into()],
                image_tags: vec![ImageTagGroup {
                    primary_tag: "meme".into(),
                    subtags: vec!["frog".into()],
                }],
                vision_captions: TextOrList::List(vec!["c1".into(), "c2".into()]),
                like_count: 12,
                ..Tweet::default()
            },
        }
    }

    #[test]
    fn flatten_joins_list_fields_per_column_rules() {
        let rows = flatten(&[sample_row()]);
        assert_eq!(rows[0].insights, "a | b");
        assert_eq!(rows[0].tags, "x, y");
        assert_eq!(rows[0].image_tags, "meme: frog");
        assert_eq!(rows[0].vision_captions, "c1 | c2");
    }

    #[test]
    fn plain_string_captions_pass_through() {
        let mut row = sample_row();
        row.tweet.vision_captions = TextOrList::Text("one caption".into());
        let rows = flatten(&[row]);
        assert_eq!(rows[0].vision_captions, "one caption");
    }

    #[test]
    fn multi_group_image_tags_join_with_pipes() {
        let groups = vec![
            ImageTagGroup { primary_tag: "meme".into(), subtags: vec!["frog".into(), "wojak".into()] },
            ImageTagGroup { primary_tag: "chart".into(), subtags: vec![] },
        ];
        assert_eq!(image_tags_cell(&groups), "meme: frog, wojak | chart: ");
    }

    #[test]
    fn filename_embeds_iso_date() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        assert_eq!(export_filename(today), "tweet_results_2026-08-29.xlsx");
    }

    #[test]
    fn writes_a_workbook_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        write_xlsx(&path, &flatten(&[sample_row()])).unwrap();
        let meta = std::fs::metadata(&path).unwrap();
        assert!(meta.len() > 0, "workbook file should not be empty");
    }
}
