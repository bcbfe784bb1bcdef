//! Genre inference from noisy artist metadata.
//!
//! Imported catalogs carry free-text genre tags (often several per artist)
//! and album titles; this module collapses them into a small closed set of
//! labels via an ordered rule list. Rule order is load-bearing: the first
//! matching rule wins.

use crate::catalog::Catalog;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of genre labels assigned by [`classify`].
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum Genre {
    Chutney,
    Filmi,
    Bhajan,
    Bhojpuri,
    Afghan,
    Classic,
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Genre::Chutney => "Chutney",
            Genre::Filmi => "Filmi",
            Genre::Bhajan => "Bhajan",
            Genre::Bhojpuri => "Bhojpuri",
            Genre::Afghan => "Afghan",
            Genre::Classic => "Classic",
        };
        write!(f, "{}", label)
    }
}

const BHAJAN_TAGS: &[&str] = &["bhajan", "ghazal", "sufi", "hare krishna"];
const CLASSIC_TAGS: &[&str] = &[
    "classic bollywood",
    "classic pakistani pop",
    "classic punjabi pop",
];

/// Infer the genre label for one item from its raw genre tags and album
/// title. Matching is case-insensitive substring containment; the tag rules
/// are tried before the album fallbacks, and the first hit wins.
pub fn classify(raw_genre_tags: &str, album: &str) -> Genre {
    let tags = raw_genre_tags.to_lowercase();
    let album = album.to_lowercase();

    if tags.contains("chutney") {
        Genre::Chutney
    } else if tags.contains("filmi") || tags.contains("modern bollywood") {
        Genre::Filmi
    } else if BHAJAN_TAGS.iter().any(|t| tags.contains(t)) {
        Genre::Bhajan
    } else if tags.contains("bhojpuri pop") {
        Genre::Bhojpuri
    } else if tags.contains("afghan pop") {
        Genre::Afghan
    } else if CLASSIC_TAGS.iter().any(|t| tags.contains(t)) {
        Genre::Classic
    } else if album.contains("bhajan") || album.contains("devotional") {
        Genre::Bhajan
    } else if album.contains("bhojpuri") {
        Genre::Bhojpuri
    } else if album.contains("classic") || album.contains("retro") {
        Genre::Classic
    } else {
        Genre::Filmi
    }
}

/// Annotate every item in the catalog with its inferred genre.
/// Pure mapping, always succeeds.
pub fn classify_and_annotate(catalog: Catalog) -> Catalog {
    catalog.map_items(|mut item| {
        item.genre = classify(&item.raw_genre_tags, &item.album);
        item
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_rules_fire_in_order() {
        // "modern bollywood" (rule 2) beats "classic bollywood" (rule 6)
        assert_eq!(
            classify("modern bollywood, classic bollywood", ""),
            Genre::Filmi
        );
        // chutney beats everything
        assert_eq!(classify("chutney, filmi, bhajan", ""), Genre::Chutney);
    }

    #[test]
    fn each_tag_rule_matches() {
        assert_eq!(classify("trinidad chutney soca", ""), Genre::Chutney);
        assert_eq!(classify("filmi", ""), Genre::Filmi);
        assert_eq!(classify("modern bollywood", ""), Genre::Filmi);
        assert_eq!(classify("sufi", ""), Genre::Bhajan);
        assert_eq!(classify("ghazal", ""), Genre::Bhajan);
        assert_eq!(classify("hare krishna", ""), Genre::Bhajan);
        assert_eq!(classify("bhojpuri pop", ""), Genre::Bhojpuri);
        assert_eq!(classify("afghan pop", ""), Genre::Afghan);
        assert_eq!(classify("classic pakistani pop", ""), Genre::Classic);
        assert_eq!(classify("classic punjabi pop", ""), Genre::Classic);
    }

    #[test]
    fn album_fallbacks_apply_when_tags_miss() {
        assert_eq!(classify("", "Morning Bhajans"), Genre::Bhajan);
        assert_eq!(classify("", "Devotional Hits"), Genre::Bhajan);
        assert_eq!(classify("", "Bhojpuri Beats Vol. 2"), Genre::Bhojpuri);
        assert_eq!(classify("", "Classic Gold"), Genre::Classic);
        assert_eq!(classify("", "Retro Hindi"), Genre::Classic);
    }

    #[test]
    fn tag_rules_beat_album_fallbacks() {
        // "afghan pop" tag (rule 5) fires before the album "classic" fallback
        assert_eq!(classify("afghan pop", "Classic Collection"), Genre::Afghan);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify("Modern Bollywood", ""), Genre::Filmi);
        assert_eq!(classify("", "DEVOTIONAL"), Genre::Bhajan);
    }

    #[test]
    fn defaults_to_filmi() {
        assert_eq!(classify("", ""), Genre::Filmi);
        assert_eq!(classify("some unknown tag", "Some Album"), Genre::Filmi);
    }
}
