//! Artist resolution.
//!
//! Free-text user input is matched against the distinct artist names in the
//! catalog through three tiers tried in order, each trading precision for
//! recall: exact equality, then substring containment in either direction,
//! then fuzzy token containment. The first tier producing any match
//! short-circuits the rest, so a correctly typed name can never be hijacked
//! by a fuzzy collision.

use serde::Serialize;
use tracing::debug;

/// Which resolution tier produced the match.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum MatchTier {
    Exact,
    Partial,
    FuzzyToken,
}

impl std::fmt::Display for MatchTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MatchTier::Exact => "exact",
            MatchTier::Partial => "partial",
            MatchTier::FuzzyToken => "fuzzy-token",
        };
        write!(f, "{}", label)
    }
}

/// A catalog artist matched to the user's query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedArtist {
    /// The artist name as it appears in the catalog, casing preserved.
    pub name: String,
    pub tier: MatchTier,
}

/// Find the single best-matching artist name for a free-text query.
///
/// `artists` must be the catalog's distinct artist names in first-seen
/// order; partial and fuzzy ties are broken by that enumeration order, which
/// is canonical. Comparison is case-insensitive, the returned name keeps
/// the catalog's casing. Returns `None` when no tier matches.
pub fn resolve_artist(query: &str, artists: &[&str]) -> Option<ResolvedArtist> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    for name in artists {
        if name.to_lowercase() == needle {
            debug!("Resolved \"{}\" to \"{}\" (exact).", query, name);
            return Some(ResolvedArtist {
                name: name.to_string(),
                tier: MatchTier::Exact,
            });
        }
    }

    for name in artists {
        let hay = name.to_lowercase();
        if hay.contains(&needle) || needle.contains(&hay) {
            debug!("Resolved \"{}\" to \"{}\" (partial).", query, name);
            return Some(ResolvedArtist {
                name: name.to_string(),
                tier: MatchTier::Partial,
            });
        }
    }

    // Tokens of length <= 2 match too promiscuously to be useful.
    let tokens: Vec<&str> = needle
        .split_whitespace()
        .filter(|t| t.len() > 2)
        .collect();
    for name in artists {
        let hay = name.to_lowercase();
        if tokens.iter().any(|t| hay.contains(t)) {
            debug!("Resolved \"{}\" to \"{}\" (fuzzy token).", query, name);
            return Some(ResolvedArtist {
                name: name.to_string(),
                tier: MatchTier::FuzzyToken,
            });
        }
    }

    debug!("No artist match for \"{}\".", query);
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTISTS: &[&str] = &["Arijit Singh", "Sonu Nigam"];

    #[test]
    fn exact_match_wins() {
        let resolved = resolve_artist("arijit singh", ARTISTS).unwrap();
        assert_eq!(resolved.name, "Arijit Singh");
        assert_eq!(resolved.tier, MatchTier::Exact);
    }

    #[test]
    fn partial_match_on_substring() {
        let resolved = resolve_artist("arijit", ARTISTS).unwrap();
        assert_eq!(resolved.name, "Arijit Singh");
        assert_eq!(resolved.tier, MatchTier::Partial);
    }

    #[test]
    fn partial_match_query_contains_artist() {
        let resolved = resolve_artist("the great sonu nigam songs", ARTISTS).unwrap();
        assert_eq!(resolved.name, "Sonu Nigam");
        assert_eq!(resolved.tier, MatchTier::Partial);
    }

    #[test]
    fn fuzzy_token_match() {
        let resolved = resolve_artist("singh ji", ARTISTS).unwrap();
        assert_eq!(resolved.name, "Arijit Singh");
        assert_eq!(resolved.tier, MatchTier::FuzzyToken);
    }

    #[test]
    fn short_tokens_do_not_fuzzy_match() {
        // "si" is a substring of both names but too short to count
        assert!(resolve_artist("si xy", ARTISTS).is_none());
    }

    #[test]
    fn no_match_for_unknown_artist() {
        assert!(resolve_artist("xyz", ARTISTS).is_none());
    }

    #[test]
    fn blank_query_never_matches() {
        assert!(resolve_artist("", ARTISTS).is_none());
        assert!(resolve_artist("   ", ARTISTS).is_none());
    }

    #[test]
    fn partial_tie_breaks_on_enumeration_order() {
        // "singh" is a substring of both; the first listed artist wins
        let artists = &["Jagjit Singh", "Arijit Singh"];
        let resolved = resolve_artist("singh", artists).unwrap();
        assert_eq!(resolved.name, "Jagjit Singh");
        assert_eq!(resolved.tier, MatchTier::Partial);
    }
}
