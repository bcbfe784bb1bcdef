//! Bundled default catalog.
//!
//! Fifteen Bollywood tracks used when the caller supplies no import of its
//! own. Items are already in canonical form (web links, annotated genres).

use super::{Catalog, CatalogItem};
use crate::genre::{classify_and_annotate, Genre};

// title, artist, album, duration_ms, raw genre tags, track id
const SAMPLE_ROWS: &[(&str, &str, &str, u64, &str, &str)] = &[
    (
        "Tum Hi Ho",
        "Arijit Singh",
        "Aashiqui 2",
        262000,
        "modern bollywood",
        "1234567890123456789012",
    ),
    (
        "Jeene Laga Hoon",
        "Arijit Singh",
        "Ramaiya Vastavaiya",
        245000,
        "modern bollywood",
        "2345678901234567890123",
    ),
    (
        "Raabta",
        "Arijit Singh",
        "Agent Vinod",
        298000,
        "modern bollywood",
        "3456789012345678901234",
    ),
    (
        "Tera Ban Jaunga",
        "Arijit Singh",
        "Kabir Singh",
        213000,
        "modern bollywood",
        "4567890123456789012345",
    ),
    (
        "Dil Diyan Gallan",
        "Atif Aslam",
        "Tiger Zinda Hai",
        267000,
        "modern bollywood",
        "5678901234567890123456",
    ),
    (
        "Ae Dil Hai Mushkil",
        "Arijit Singh",
        "Ae Dil Hai Mushkil",
        293000,
        "modern bollywood",
        "6789012345678901234567",
    ),
    (
        "Channa Mereya",
        "Arijit Singh",
        "Ae Dil Hai Mushkil",
        258000,
        "modern bollywood",
        "7890123456789012345678",
    ),
    (
        "Bulleya",
        "Amit Mishra",
        "Sultan",
        241000,
        "modern bollywood",
        "8901234567890123456789",
    ),
    (
        "Gerua",
        "Arijit Singh",
        "Dilwale",
        289000,
        "modern bollywood",
        "9012345678901234567890",
    ),
    (
        "Janam Janam",
        "Arijit Singh",
        "Dilwale",
        267000,
        "modern bollywood",
        "0123456789012345678901",
    ),
    (
        "Tum Se Hi",
        "Mohit Chauhan",
        "Jab We Met",
        279000,
        "classic bollywood",
        "1234567890123456789013",
    ),
    (
        "Kal Ho Naa Ho",
        "Sonu Nigam",
        "Kal Ho Naa Ho",
        322000,
        "classic bollywood",
        "2345678901234567890124",
    ),
    (
        "Veer-Zaara",
        "Udit Narayan",
        "Veer-Zaara",
        301000,
        "classic bollywood",
        "3456789012345678901235",
    ),
    (
        "Tujhe Kitna Chahne Lage",
        "Arijit Singh",
        "Kabir Singh",
        287000,
        "modern bollywood",
        "4567890123456789012346",
    ),
    (
        "Bekhayali",
        "Sachet Tandon",
        "Kabir Singh",
        394000,
        "modern bollywood",
        "5678901234567890123457",
    ),
];

/// Build the bundled sample catalog, genre-annotated and ready to query.
pub fn sample_catalog() -> Catalog {
    let items = SAMPLE_ROWS
        .iter()
        .map(
            |&(title, artist, album, duration_ms, tags, track_id)| CatalogItem {
                title: title.to_string(),
                artist: artist.to_string(),
                album: album.to_string(),
                duration_ms,
                raw_genre_tags: tags.to_string(),
                external_link: format!("https://open.spotify.com/track/{}", track_id),
                genre: Genre::Filmi,
            },
        )
        .collect();
    classify_and_annotate(Catalog::new(items))
}
