//! Test fixture creation for catalogs
//!
//! Builds raw import tables (header row plus data rows, as the presentation
//! layer would deliver them) and runs them through the full
//! normalize/classify pipeline.

use geetmala::{classify_and_annotate, normalize_catalog, Catalog};

pub const SPOTIFY_HEADERS: &[&str] = &[
    "Track Name",
    "Artist Name",
    "Album",
    "Duration (ms)",
    "Artist Genres",
    "Track URI",
];

/// Run raw headers and rows through the normalizer and the classifier,
/// panicking on the hard-failure path (tests that exercise that path call
/// `normalize_catalog` directly).
pub fn build_catalog(headers: &[&str], rows: &[&[&str]]) -> Catalog {
    let headers: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|v| v.to_string()).collect())
        .collect();
    let catalog = normalize_catalog(&headers, &rows).expect("fixture input must normalize");
    classify_and_annotate(catalog)
}

/// A small mixed-genre catalog: two Arijit Singh Filmi tracks, one Arijit
/// Singh Bhajan track, and one unrelated artist.
pub fn mixed_genre_catalog() -> Catalog {
    build_catalog(
        SPOTIFY_HEADERS,
        &[
            &[
                "Tum Hi Ho",
                "Arijit Singh",
                "Aashiqui 2",
                "262000",
                "modern bollywood",
                "spotify:track:aaa111",
            ],
            &[
                "Channa Mereya",
                "Arijit Singh",
                "Ae Dil Hai Mushkil",
                "258000",
                "modern bollywood",
                "spotify:track:bbb222",
            ],
            &[
                "Hari Naam",
                "Arijit Singh",
                "Morning Bhajans",
                "301000",
                "bhajan",
                "spotify:track:ccc333",
            ],
            &[
                "Kal Ho Naa Ho",
                "Sonu Nigam",
                "Kal Ho Naa Ho",
                "322000",
                "classic bollywood",
                "spotify:track:ddd444",
            ],
        ],
    )
}
