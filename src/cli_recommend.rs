//! Recommendation CLI
//!
//! Thin presentation driver over the geetmala core: loads the bundled
//! sample catalog or a user-supplied delimited file, runs one query, and
//! prints the ranked results. All IO, argument parsing, and logging setup
//! live here; the core stays pure.

use anyhow::{Context, Result};
use clap::Parser;
use geetmala::{
    classify_and_annotate, export_recommendation, normalize_catalog, recommend, sample_catalog,
    Catalog, Genre,
};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cli-recommend")]
#[command(about = "Recommend songs for an artist from a catalog")]
struct Args {
    /// Artist name to search for (fuzzy matching is applied)
    query: String,

    /// Path to a delimited catalog file; the bundled sample is used when omitted
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Only recommend songs of this genre
    #[arg(long, value_enum)]
    genre: Option<Genre>,

    /// Maximum number of recommendations
    #[arg(long, default_value_t = 10)]
    count: usize,

    /// Write the results to this file as delimited text
    #[arg(long)]
    export: Option<PathBuf>,

    /// Print the result as JSON instead of a table
    #[arg(long)]
    json: bool,
}

/// Split one delimited line into fields, honoring quoted sections. Quotes
/// are kept in place; the normalizer strips them per field.
fn split_delimited_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                current.push(c);
            }
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

fn load_delimited_catalog(path: &Path) -> Result<Catalog> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file {}", path.display()))?;

    let mut lines = text.lines().filter(|l| !l.trim().is_empty());
    let headers = lines.next().map(split_delimited_line).unwrap_or_default();
    let rows: Vec<Vec<String>> = lines.map(split_delimited_line).collect();

    let catalog = normalize_catalog(&headers, &rows)
        .with_context(|| format!("Catalog file {} could not be parsed", path.display()))?;
    Ok(classify_and_annotate(catalog))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let catalog = match &args.catalog {
        Some(path) => {
            info!("Loading catalog from {}...", path.display());
            load_delimited_catalog(path)?
        }
        None => {
            info!("No catalog file given, using the bundled sample.");
            sample_catalog()
        }
    };

    let stats = catalog.stats();
    println!(
        "Catalog: {} songs, {} artists, {} genres, {} albums",
        stats.total_items, stats.distinct_artists, stats.distinct_genres, stats.distinct_albums
    );

    let recommendation = match recommend(&args.query, &catalog, args.genre, args.count) {
        Ok(r) => r,
        // Every RecommendError is recoverable, report it and stop cleanly
        Err(err) => {
            println!("No recommendations: {}", err);
            return Ok(());
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&recommendation)?);
    } else {
        println!(
            "\nRecommendations for {} ({} match):",
            recommendation.resolved_artist, recommendation.match_tier
        );
        let badges: Vec<String> = recommendation
            .genre_summary
            .iter()
            .map(|(genre, count)| format!("{} ({})", genre, count))
            .collect();
        println!("Genres: {}\n", badges.join(", "));

        for (position, item) in recommendation.items.iter().enumerate() {
            println!(
                "{:2}. {} - {} - {} - {} - {}",
                position + 1,
                item.title,
                item.album,
                item.genre,
                item.formatted_duration(),
                item.external_link,
            );
        }
    }

    if let Some(path) = &args.export {
        let text = export_recommendation(&recommendation);
        std::fs::write(path, text)
            .with_context(|| format!("Failed to write export file {}", path.display()))?;
        println!("\nExported {} rows to {}", recommendation.items.len(), path.display());
    }

    Ok(())
}
