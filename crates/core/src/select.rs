//! Set operations backing the searchable multi-select widget: text filtering
//! of the option catalog, single-option toggling, and the bulk
//! select/deselect of the currently filtered subset.

/// Case-insensitive substring filter over the option catalog. Recomputed per
/// keystroke; mutates neither catalog nor selection.
pub fn filter_options<'a>(options: &'a [String], search: &str) -> Vec<&'a String> {
    let needle = search.to_lowercase();
    options
        .iter()
        .filter(|opt| opt.to_lowercase().contains(&needle))
        .collect()
}

/// Toggle one option: add if absent, remove if present.
pub fn toggle_option(selected: &[String], option: &str) -> Vec<String> {
    if selected.iter().any(|s| s == option) {
        selected.iter().filter(|s| *s != option).cloned().collect()
    } else {
        let mut next = selected.to_vec();
        next.push(option.to_string());
        next
    }
}

/// True when every filtered option is already selected. Decides whether the
/// bulk button reads "select" or "deselect".
pub fn all_filtered_selected(selected: &[String], filtered: &[&String]) -> bool {
    filtered.iter().all(|opt| selected.contains(opt))
}

/// Bulk toggle of the filtered subset: when everything filtered is already
/// selected, subtract the subset; otherwise union it in (insertion order,
/// no duplicates).
pub fn toggle_filtered(selected: &[String], filtered: &[&String]) -> Vec<String> {
    if all_filtered_selected(selected, filtered) {
        selected
            .iter()
            .filter(|s| !filtered.iter().any(|f| f == s))
            .cloned()
            .collect()
    } else {
        let mut next = selected.to_vec();
        for opt in filtered {
            if !next.contains(opt) {
                next.push((*opt).clone());
            }
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<String> {
        vec!["DeFi".into(), "Derivatives".into(), "NFT".into(), "Macro".into()]
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let options = catalog();
        let hits = filter_options(&options, "de");
        assert_eq!(hits, vec![&options[0], &options[1]]);
        assert_eq!(filter_options(&options, "").len(), 4);
        assert!(filter_options(&options, "zzz").is_empty());
    }

    #[test]
    fn toggle_adds_then_removes() {
        let selected = toggle_option(&[], "NFT");
        assert_eq!(selected, vec!["NFT".to_string()]);
        let selected = toggle_option(&selected, "NFT");
        assert!(selected.is_empty());
    }

    #[test]
    fn bulk_toggle_unions_when_any_unselected() {
        let options = catalog();
        let filtered = filter_options(&options, "de");
        let selected = vec!["DeFi".to_string(), "Macro".to_string()];
        let next = toggle_filtered(&selected, &filtered);
        assert_eq!(
            next,
            vec!["DeFi".to_string(), "Macro".to_string(), "Derivatives".to_string()]
        );
    }

    #[test]
    fn bulk_toggle_subtracts_when_all_selected() {
        let options = catalog();
        let filtered = filter_options(&options, "de");
        let selected = vec!["DeFi".to_string(), "Derivatives".to_string(), "Macro".to_string()];
        assert!(all_filtered_selected(&selected, &filtered));
        let next = toggle_filtered(&selected, &filtered);
        assert_eq!(next, vec!["Macro".to_string()]);
    }
}
