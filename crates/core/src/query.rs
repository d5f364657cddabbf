//! Query-parameter building: translates the free-text query plus active
//! filter state into the wire-format parameter list for `GET /search` and
//! `GET /query`.
//!
//! Pure and idempotent; the same inputs always produce the same pairs.

use crate::types::{ActiveFilters, ListField, ScalarField};

/// Results per page in the UI.
pub const SEARCH_PAGE_SIZE: u64 = 20;

/// Candidate pool size for `/search` semantic retrieval.
pub const SEARCH_TOP_K: u64 = 10_000;

/// Fixed context size for `/query` (tweets handed to the LLM).
pub const ASK_TOP_K: u64 = 20;

/// True when any filter field or the query text is non-empty.
pub fn has_active_filters(filters: &ActiveFilters, query_text: &str) -> bool {
    !filters.is_empty() || !query_text.is_empty()
}

/// Append the facet and scalar filter parameters shared by both endpoints.
///
/// Multi-value facets go out under their singular wire name with members
/// joined by commas; members containing commas are not escaped (the backend
/// splits on commas, so such values cannot round-trip — a documented
/// constraint of the wire format). Scalar fields pass through verbatim when
/// non-empty.
fn push_filter_params(params: &mut Vec<(&'static str, String)>, filters: &ActiveFilters) {
    for field in ListField::ALL {
        let values = filters.list(field);
        if !values.is_empty() {
            params.push((field.wire_name(), values.join(",")));
        }
    }
    for field in ScalarField::ALL {
        let value = filters.scalar(field);
        if !value.is_empty() {
            params.push((field.wire_name(), value.to_string()));
        }
    }
}

/// Build the parameter list for `GET /search`.
pub fn build_search_params(
    page: u64,
    page_size: u64,
    top_k: u64,
    query_text: &str,
    filters: &ActiveFilters,
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("page", page.to_string()),
        ("page_size", page_size.to_string()),
        ("top_k", top_k.to_string()),
    ];
    if !query_text.is_empty() {
        params.push(("text", query_text.to_string()));
    }
    push_filter_params(&mut params, filters);
    params
}

/// Build the parameter list for `GET /query`: the same filter context, with
/// the free-form question as the single `text` value and a fixed `top_k`.
/// The question overrides the search text rather than riding alongside it —
/// the endpoint accepts exactly one `text`.
pub fn build_ask_params(
    question: &str,
    filters: &ActiveFilters,
) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    push_filter_params(&mut params, filters);
    params.push(("text", question.to_string()));
    params.push(("top_k", ASK_TOP_K.to_string()));
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn active_filter_detection() {
        let empty = ActiveFilters::default();
        assert!(!has_active_filters(&empty, ""));
        assert!(has_active_filters(&empty, "btc"));

        let mut filters = ActiveFilters::default();
        filters.min_views = "50".into();
        assert!(has_active_filters(&filters, ""));
    }

    #[test]
    fn base_params_always_present() {
        let params = build_search_params(2, 20, 10_000, "", &ActiveFilters::default());
        assert_eq!(
            params,
            vec![
                ("page", "2".to_string()),
                ("page_size", "20".to_string()),
                ("top_k", "10000".to_string()),
            ]
        );
    }

    #[test]
    fn text_included_only_when_non_empty() {
        let filters = ActiveFilters::default();
        let with = build_search_params(1, 20, 100, "fed meeting", &filters);
        assert!(with.contains(&("text", "fed meeting".to_string())));
        let without = build_search_params(1, 20, 100, "", &filters);
        assert!(without.iter().all(|(name, _)| *name != "text"));
    }

    #[test]
    fn facets_use_singular_names() {
        let mut filters = ActiveFilters::default();
        filters.tags = vec!["defi".into(), "nft".into()];
        filters.image_subtags = vec!["frog".into()];
        filters.handles = vec!["@a".into()];

        let params = build_search_params(1, 20, 100, "", &filters);
        assert!(params.contains(&("tag", "defi,nft".to_string())));
        assert!(params.contains(&("image_subtag", "frog".to_string())));
        assert!(params.contains(&("handle", "@a".to_string())));
        assert!(
            params.iter().all(|(name, _)| *name != "image_subtags"),
            "plural facet names must never reach the wire"
        );
    }

    #[test]
    fn comma_members_are_joined_unescaped() {
        // Members containing commas are joined as-is; the wire format cannot
        // distinguish them from two members. Documents the constraint.
        let mut filters = ActiveFilters::default();
        filters.tags = vec!["a,b".into()];
        let params = build_search_params(1, 20, 100, "", &filters);
        assert!(params.contains(&("tag", "a,b".to_string())));
    }

    #[test]
    fn empty_scalars_are_omitted() {
        let mut filters = ActiveFilters::default();
        filters.start_date = "2024-01-01".into();
        filters.min_likes = "10".into();
        let params = build_search_params(1, 20, 100, "", &filters);
        assert!(params.contains(&("start_date", "2024-01-01".to_string())));
        assert!(params.contains(&("min_likes", "10".to_string())));
        assert!(params.iter().all(|(name, _)| *name != "end_date"));
        assert!(params.iter().all(|(name, _)| *name != "min_views"));
    }

    #[test]
    fn facet_params_round_trip_to_set_membership() {
        let mut filters = ActiveFilters::default();
        filters.tags = vec!["defi".into(), "macro".into(), "nft".into()];
        let params = build_search_params(1, 20, 100, "", &filters);

        let joined = params
            .iter()
            .find(|(name, _)| *name == "tag")
            .map(|(_, v)| v.clone())
            .unwrap();
        let parsed: HashSet<&str> = joined.split(',').collect();
        let original: HashSet<&str> = filters.tags.iter().map(String::as_str).collect();
        assert_eq!(parsed, original);
    }

    #[test]
    fn ask_params_carry_question_and_fixed_top_k() {
        let mut filters = ActiveFilters::default();
        filters.handles = vec!["@x".into()];
        let params = build_ask_params("what changed in March?", &filters);

        assert!(params.contains(&("handle", "@x".to_string())));
        assert!(params.contains(&("top_k", "20".to_string())));
        let texts: Vec<_> = params.iter().filter(|(name, _)| *name == "text").collect();
        assert_eq!(texts.len(), 1, "exactly one text parameter");
        assert_eq!(texts[0].1, "what changed in March?");
        assert!(params.iter().all(|(name, _)| *name != "page"));
    }

    #[test]
    fn builder_is_idempotent() {
        let mut filters = ActiveFilters::default();
        filters.tags = vec!["defi".into()];
        let a = build_search_params(1, 20, 100, "q", &filters);
        let b = build_search_params(1, 20, 100, "q", &filters);
        assert_eq!(a, b);
    }
}
