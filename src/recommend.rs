//! Recommendation orchestration.
//!
//! Composes the resolver, genre filter, and similarity ranker into the
//! single entry point callers use: resolve the artist, narrow the catalog
//! to that artist (and optionally one genre), rank what survives. Stateless
//! between queries; each call sees the catalog as an immutable snapshot.

use crate::catalog::{Catalog, CatalogItem};
use crate::genre::Genre;
use crate::search::{rank_candidates, resolve_artist, MatchTier};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

/// Why a query produced no recommendations. All variants are recoverable
/// from the caller's point of view; none leaves partial state behind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecommendError {
    #[error("the query is empty, enter an artist name")]
    EmptyQuery,

    #[error("no close match found for the requested artist")]
    ArtistNotFound,

    #[error("no {genre} songs found for '{artist}'")]
    NoItemsForGenre { artist: String, genre: Genre },
}

/// A successful recommendation run.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    /// Ranked items, best first, at most the requested count.
    pub items: Vec<CatalogItem>,
    /// The catalog artist the query resolved to, casing preserved.
    pub resolved_artist: String,
    /// Which resolution tier produced the match.
    pub match_tier: MatchTier,
    /// Genre breakdown of everything the resolved artist has in the
    /// catalog, before any genre filter was applied.
    pub genre_summary: Vec<(Genre, usize)>,
}

/// Recommend up to `count` catalog items for a free-text artist query.
///
/// `genre_filter` of `None` means "All"; `Some(genre)` keeps only items
/// classified with exactly that genre. The returned list may be shorter
/// than `count` when fewer items match.
pub fn recommend(
    query: &str,
    catalog: &Catalog,
    genre_filter: Option<Genre>,
    count: usize,
) -> Result<Recommendation, RecommendError> {
    if query.trim().is_empty() {
        return Err(RecommendError::EmptyQuery);
    }

    let artists = catalog.distinct_artists();
    let resolved = resolve_artist(query, &artists).ok_or(RecommendError::ArtistNotFound)?;
    info!(
        "Query \"{}\" resolved to \"{}\" via {} match.",
        query, resolved.name, resolved.tier
    );

    let needle = resolved.name.to_lowercase();
    let by_artist: Vec<CatalogItem> = catalog
        .items()
        .iter()
        .filter(|item| item.artist.to_lowercase() == needle)
        .cloned()
        .collect();
    let genre_summary = catalog.genre_summary(&resolved.name);

    let candidates: Vec<CatalogItem> = match genre_filter {
        None => by_artist,
        Some(genre) => {
            let filtered: Vec<CatalogItem> = by_artist
                .into_iter()
                .filter(|item| item.genre == genre)
                .collect();
            if filtered.is_empty() {
                debug!("No {} items for \"{}\".", genre, resolved.name);
                return Err(RecommendError::NoItemsForGenre {
                    artist: resolved.name,
                    genre,
                });
            }
            filtered
        }
    };

    let items = rank_candidates(&resolved.name, query, candidates, count);
    debug!("Returning {} ranked items.", items.len());

    Ok(Recommendation {
        items,
        resolved_artist: resolved.name,
        match_tier: resolved.tier,
        genre_summary,
    })
}
