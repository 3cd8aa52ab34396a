//! Fuzzy ranking of catalog names against free text.
//!
//! Matching is case-insensitive. A candidate is scored by the first rule it
//! satisfies, from strongest to weakest:
//!
//! 1. exact match
//! 2. the name starts with the query, or the query is a whole word of the name
//! 3. the word initials start with the query (`ccn` for "Credit Card No.")
//! 4. a word starts with the query, or the initials contain it
//! 5. the query is a substring of the name
//! 6. the query characters appear in order (`eml` for "Email")
//! 7. Jaro-Winkler similarity to the name or one of its words
//!
//! Within a rule, longer names and wider gaps score lower. Candidates below
//! [`MIN_SCORE`] are dropped.

use std::cmp::Ordering;

/// Candidates scoring below this are dropped.
pub const MIN_SCORE: f64 = 20.0;

/// Minimum Jaro-Winkler similarity for the typo fallback.
pub const SIMILARITY_THRESHOLD: f64 = 0.85;

/// Score `candidate` against `query`, or `None` when nothing matches.
pub fn score(query: &str, candidate: &str) -> Option<f64> {
    let query = query.trim().to_lowercase();
    let value = candidate.to_lowercase();
    if query.is_empty() {
        return Some(100.0);
    }

    let query_len = query.chars().count() as f64;
    let value_len = value.chars().count() as f64;
    let words: Vec<&str> = value
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();
    let initials: String = words.iter().filter_map(|w| w.chars().next()).collect();
    let initials_len = initials.chars().count() as f64;

    if value == query {
        return Some(100.0);
    }
    if value.starts_with(&query) || words.iter().any(|w| *w == query) {
        return Some(100.0 - value_len / query_len);
    }
    if initials.starts_with(&query) {
        return Some(100.0 - initials_len / query_len);
    }
    if words.iter().any(|w| w.starts_with(&query)) {
        return Some(95.0 - value_len / query_len);
    }
    if initials.contains(&query) {
        return Some(95.0 - initials_len / query_len);
    }
    if value.contains(&query) {
        return Some(90.0 - value_len / query_len);
    }
    if let Some((start, span)) = subsequence(&query, &value) {
        let gaps = span - query.chars().count();
        return Some(100.0 / ((1 + start) * (gaps + 1)) as f64 - value_len / query_len);
    }

    let similarity = words
        .iter()
        .map(|w| strsim::jaro_winkler(&query, w))
        .fold(strsim::jaro_winkler(&query, &value), f64::max);
    if similarity >= SIMILARITY_THRESHOLD {
        return Some(MIN_SCORE + (similarity - SIMILARITY_THRESHOLD) * 100.0);
    }

    None
}

/// Start and length (in chars) of the tightest in-order match of `query` in `value`.
fn subsequence(query: &str, value: &str) -> Option<(usize, usize)> {
    let query: Vec<char> = query.chars().collect();
    let value: Vec<char> = value.chars().collect();
    let first = *query.first()?;

    let mut best: Option<(usize, usize)> = None;
    for start in (0..value.len()).filter(|&i| value[i] == first) {
        let mut pos = start;
        let mut matched = 0;
        while pos < value.len() && matched < query.len() {
            if value[pos] == query[matched] {
                matched += 1;
            }
            pos += 1;
        }
        if matched < query.len() {
            break;
        }
        let span = pos - start;
        if best.map_or(true, |(_, best_span)| span < best_span) {
            best = Some((start, span));
        }
    }
    best
}

/// Keep the candidates matching `query`, best first.
///
/// Equal scores keep their input order. An empty query keeps everything.
pub fn filter<T, F>(query: &str, candidates: Vec<T>, key: F) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    if query.trim().is_empty() {
        return candidates;
    }

    let mut scored: Vec<(f64, T)> = candidates
        .into_iter()
        .filter_map(|item| {
            let score = score(query, key(&item))?;
            (score >= MIN_SCORE).then_some((score, item))
        })
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    scored.into_iter().map(|(_, item)| item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fakeum_core::CATALOG;

    fn names(query: &str) -> Vec<&'static str> {
        filter(query, CATALOG.sorted_names(), |name| *name)
    }

    #[test]
    fn test_exact_beats_prefix() {
        let exact = score("email", "Email").unwrap();
        let prefix = score("email", "Email (free)").unwrap();
        assert!(exact > prefix);
        assert_eq!(names("email")[0], "Email");
    }

    #[test]
    fn test_subsequence_match() {
        let result = names("eml");
        assert!(result.contains(&"Email"));
        assert!(!result.contains(&"Licence Plate"));
        let email = result.iter().position(|n| *n == "Email");
        assert!(email.is_some());
    }

    #[test]
    fn test_subsequence_prefers_shorter_names() {
        let short = score("eml", "Email").unwrap();
        let long = score("eml", "Email domain (free)").unwrap();
        assert!(short > long);
        assert_eq!(names("eml")[0], "Email");
    }

    #[test]
    fn test_email_above_licence_plate() {
        let candidates = vec!["Licence Plate", "Email"];
        let result = filter("eml", candidates, |name| *name);
        assert_eq!(result, vec!["Email"]);
        assert!(score("eml", "Email").unwrap() >= MIN_SCORE);
    }

    #[test]
    fn test_initials() {
        let result = names("ccn");
        assert_eq!(result[0], "Credit Card No.");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(score("UUID", "uuid4"), score("uuid", "UUID4"));
    }

    #[test]
    fn test_typo_fallback() {
        let result = names("emial");
        assert!(result.contains(&"Email"));
    }

    #[test]
    fn test_no_match() {
        assert!(names("zzzz").is_empty());
        assert_eq!(score("xyz", "Email"), None);
    }

    #[test]
    fn test_empty_query_keeps_all() {
        assert_eq!(names("").len(), CATALOG.len());
        assert_eq!(names("   ").len(), CATALOG.len());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let candidates = vec!["Street B", "Street A"];
        let result = filter("street", candidates, |name| *name);
        assert_eq!(result, vec!["Street B", "Street A"]);
    }

    #[test]
    fn test_scores_sorted_descending() {
        let result = names("date");
        let scores: Vec<f64> = result.iter().map(|n| score("date", n).unwrap()).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(result[0], "Date");
    }

    #[test]
    fn test_subsequence_span() {
        assert_eq!(subsequence("eml", "email"), Some((0, 5)));
        assert_eq!(subsequence("ab", "xaxxbab"), Some((5, 2)));
        assert_eq!(subsequence("abc", "ab"), None);
    }
}
