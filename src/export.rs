//! Delimited export of recommendation results.
//!
//! Produces the comma-separated, quoted text the presentation layer hands
//! out as a file download. The core never re-parses this format.

use crate::recommend::Recommendation;

const COLUMNS: &[&str] = &["Track Name", "Artist", "Album", "Genre", "Duration", "Link"];

/// Quote one field, doubling embedded quote characters.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn row(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| quote(f))
        .collect::<Vec<_>>()
        .join(",")
}

/// Render a recommendation as delimited text, one row per item, header row
/// first. Column order is fixed: Track Name, Artist, Album, Genre,
/// Duration (M:SS), Link.
pub fn export_recommendation(recommendation: &Recommendation) -> String {
    let mut lines = Vec::with_capacity(recommendation.items.len() + 1);
    lines.push(row(
        &COLUMNS.iter().map(|c| c.to_string()).collect::<Vec<_>>(),
    ));
    for item in &recommendation.items {
        lines.push(row(&[
            item.title.clone(),
            item.artist.clone(),
            item.album.clone(),
            item.genre.to_string(),
            item.formatted_duration(),
            item.external_link.clone(),
        ]));
    }
    lines.join("\n")
}
