//! Word-overlap similarity ranking.
//!
//! Candidates are scored against the query with Jaccard similarity over
//! whitespace tokens. This is a deliberate bag-of-words heuristic: it
//! rewards items whose title/album text shares vocabulary with the query
//! and artist name, nothing more.

use crate::catalog::CatalogItem;
use std::collections::HashSet;

/// Lower-case and split on whitespace into a token set. Duplicate tokens
/// collapse; overlap is measured on token identity, not multiplicity.
pub fn tokenize(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Jaccard similarity of two token sets: |intersection| / |union|, in
/// [0, 1]. Defined as 0 when both sets are empty.
pub fn jaccard_similarity(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Score candidates against the resolved artist plus raw query, sort by
/// descending similarity, and return the first `count`.
///
/// The sort is stable: candidates with equal scores keep their original
/// relative order. Fewer than `count` candidates come back unchanged in
/// number.
pub fn rank_candidates(
    resolved_artist: &str,
    query: &str,
    candidates: Vec<CatalogItem>,
    count: usize,
) -> Vec<CatalogItem> {
    let query_tokens = tokenize(&format!("{} {}", resolved_artist, query));

    let mut scored: Vec<(f64, CatalogItem)> = candidates
        .into_iter()
        .map(|item| {
            let document = format!("{} {} {}", item.title, item.album, item.artist);
            let score = jaccard_similarity(&query_tokens, &tokenize(&document));
            (score, item)
        })
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    scored
        .into_iter()
        .take(count)
        .map(|(_, item)| item)
        .collect()
}
