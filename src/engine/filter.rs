//! Query filtering
//!
//! Plain substring containment after lowercasing both sides. There is no
//! fuzzy scoring, tokenization or diacritic folding: `"an"` matches
//! `"Banana"` but `"bn"` does not.

/// Check whether a search key matches a query
///
/// An empty query matches everything.
#[must_use]
pub fn matches(search_key: &str, query: &str) -> bool {
    query.is_empty() || search_key.to_lowercase().contains(&query.to_lowercase())
}

/// Positions of the items in `items` whose search key matches `query`
///
/// Positions are returned in ascending order, so the result describes a
/// subsequence of the input.
pub fn filter_positions<T>(items: &[T], query: &str, search_key: impl Fn(&T) -> String) -> Vec<usize> {
    if query.is_empty() {
        return (0..items.len()).collect();
    }

    let needle = query.to_lowercase();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| search_key(item).to_lowercase().contains(&needle))
        .map(|(idx, _)| idx)
        .collect()
}

/// Restrict an (already ordered) item list to the items matching `query`
///
/// Always filters from the list it is given, never from a previous result,
/// so the output depends only on `ordered` and the current query.
pub fn filter<T: Clone>(ordered: &[T], query: &str, search_key: impl Fn(&T) -> String) -> Vec<T> {
    filter_positions(ordered, query, search_key)
        .into_iter()
        .map(|idx| ordered[idx].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruits() -> Vec<String> {
        vec!["apple".into(), "banana".into(), "cherry".into()]
    }

    fn key(item: &String) -> String {
        item.clone()
    }

    #[test]
    fn test_filter_substring() {
        assert_eq!(filter(&fruits(), "an", key), vec!["banana".to_string()]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let items = vec!["Apple".to_string(), "BANANA".to_string()];
        assert_eq!(filter(&items, "aPp", key), vec!["Apple".to_string()]);
        assert_eq!(filter(&items, "nan", key), vec!["BANANA".to_string()]);
    }

    #[test]
    fn test_empty_query_keeps_everything_in_order() {
        assert_eq!(filter(&fruits(), "", key), fruits());
    }

    #[test]
    fn test_no_fuzzy_matching() {
        assert!(filter(&fruits(), "bnn", key).is_empty());
        assert!(!matches("banana", "bnn"));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let items: Vec<String> = ["alpha", "beta", "gamma", "delta", "epsilon"]
            .iter()
            .map(ToString::to_string)
            .collect();

        for query in ["a", "ta", "ep", "zzz", ""] {
            let once = filter(&items, query, key);
            let twice = filter(&once, query, key);
            assert_eq!(once, twice, "query {query:?}");
        }
    }

    #[test]
    fn test_filter_positions_is_subsequence() {
        let items: Vec<String> = ["one", "two", "three", "four"]
            .iter()
            .map(ToString::to_string)
            .collect();

        let positions = filter_positions(&items, "o", key);
        assert_eq!(positions, vec![0, 1, 3]);
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_filter_empty_list() {
        let items: Vec<String> = Vec::new();
        assert!(filter(&items, "x", key).is_empty());
        assert!(filter(&items, "", key).is_empty());
    }

    #[test]
    fn test_matches_unicode() {
        assert!(matches("Straße", "STRA"));
        assert!(matches("Ölfeld", "öl"));
    }
}
