//! Catalog normalization.
//!
//! Imported catalogs arrive as a header row plus raw rows from a delimited
//! source, with arbitrary header names and possibly quoted values. This
//! module maps headers to canonical field names through a fixed synonym
//! table, cleans each value, and admits only rows carrying a non-empty title
//! and artist. One malformed row never aborts the batch; only a source with
//! no header row at all is a hard failure.

use super::{Catalog, CatalogItem};
use crate::genre::Genre;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    /// The source carried no header row; nothing can be mapped.
    #[error("catalog input is empty")]
    EmptyInput,
}

/// Canonical destination of one source column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Artist,
    Album,
    DurationMs,
    RawGenreTags,
    ExternalLink,
    /// Unrecognized header, kept in place but never read.
    Ignored,
}

fn canonical_field(header: &str) -> Field {
    match clean_value(header).to_lowercase().as_str() {
        "track name" | "title" => Field::Title,
        "artist name" | "artist" => Field::Artist,
        "album" => Field::Album,
        "duration (ms)" | "duration_ms" => Field::DurationMs,
        "artist genres" | "raw_genre_tags" => Field::RawGenreTags,
        "track uri" | "external_link" => Field::ExternalLink,
        _ => Field::Ignored,
    }
}

/// Strip surrounding whitespace and one pair of surrounding quotes.
fn clean_value(raw: &str) -> &str {
    let s = raw.trim();
    for quote in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return s[1..s.len() - 1].trim();
        }
    }
    s
}

lazy_static! {
    // scheme:track:id track references, e.g. spotify:track:4uLU6hMC...
    static ref TRACK_URI: Regex = Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*:track:([A-Za-z0-9]+)$")
        .expect("Invalid Regex, this should be fixed at runtime.");
}

/// Rewrite a `scheme:track:id` reference to the equivalent web URL built
/// from the trailing id segment. Anything else passes through unchanged.
fn rewrite_track_uri(link: &str) -> String {
    match TRACK_URI.captures(link) {
        Some(caps) => format!("https://open.spotify.com/track/{}", &caps[1]),
        None => link.to_string(),
    }
}

fn normalize_row(fields: &[Field], row: &[String]) -> Option<CatalogItem> {
    let mut title = String::new();
    let mut artist = String::new();
    let mut album = String::new();
    let mut duration_raw = String::new();
    let mut raw_genre_tags = String::new();
    let mut external_link = String::new();

    // zip stops at the shorter side, so missing trailing values stay empty
    for (field, raw) in fields.iter().zip(row.iter()) {
        let value = clean_value(raw);
        match field {
            Field::Title => title = value.to_string(),
            Field::Artist => artist = value.to_string(),
            Field::Album => album = value.to_string(),
            Field::DurationMs => duration_raw = value.to_string(),
            Field::RawGenreTags => raw_genre_tags = value.to_string(),
            Field::ExternalLink => external_link = value.to_string(),
            Field::Ignored => {}
        }
    }

    if title.is_empty() || artist.is_empty() {
        return None;
    }

    Some(CatalogItem {
        title,
        artist,
        album,
        duration_ms: duration_raw.parse().unwrap_or(0),
        raw_genre_tags,
        external_link: rewrite_track_uri(&external_link),
        genre: Genre::Filmi,
    })
}

/// Build a catalog from a header row and raw data rows.
///
/// Rows lacking a non-empty title or artist are dropped silently; an
/// unparsable duration becomes 0 without dropping the row. Returns
/// [`NormalizeError::EmptyInput`] only when there is no header row to map.
pub fn normalize_catalog(headers: &[String], rows: &[Vec<String>]) -> Result<Catalog, NormalizeError> {
    if headers.is_empty() {
        return Err(NormalizeError::EmptyInput);
    }

    let fields: Vec<Field> = headers.iter().map(|h| canonical_field(h)).collect();

    let mut items = Vec::new();
    let mut dropped = 0usize;
    for row in rows {
        match normalize_row(&fields, row) {
            Some(item) => items.push(item),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!("Dropped {} rows missing title or artist.", dropped);
    }
    info!("Normalized {} of {} catalog rows.", items.len(), rows.len());

    Ok(Catalog::new(items))
}
