use crate::genre::Genre;
use serde::{Deserialize, Serialize};

/// Canonical catalog record, produced by the normalizer.
///
/// `title` and `artist` are guaranteed non-empty for items admitted into a
/// [`Catalog`]; rows failing that are dropped during normalization. `genre`
/// carries the classifier's default label until
/// [`classify_and_annotate`](crate::genre::classify_and_annotate) runs.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct CatalogItem {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub duration_ms: u64,
    pub raw_genre_tags: String,
    pub external_link: String,
    pub genre: Genre,
}

impl CatalogItem {
    /// Presentation form of the duration, "M:SS". Display derivative only;
    /// ranking never consults it.
    pub fn formatted_duration(&self) -> String {
        let minutes = self.duration_ms / 60_000;
        let seconds = (self.duration_ms % 60_000) / 1_000;
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Ordered sequence of catalog items. Insertion order is preserved and there
/// is no dedup; a new import fully replaces the previous catalog.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

/// Aggregate counts over a catalog, for the presentation layer's overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total_items: usize,
    pub distinct_artists: usize,
    pub distinct_genres: usize,
    pub distinct_albums: usize,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct artist names in first-seen order, compared case-insensitively
    /// with the original casing preserved.
    ///
    /// This enumeration order is the tie-break for partial and fuzzy artist
    /// matches, so it must stay stable across calls.
    pub fn distinct_artists(&self) -> Vec<&str> {
        let mut seen: Vec<String> = Vec::new();
        let mut names: Vec<&str> = Vec::new();
        for item in &self.items {
            let lower = item.artist.to_lowercase();
            if !item.artist.trim().is_empty() && !seen.contains(&lower) {
                seen.push(lower);
                names.push(&item.artist);
            }
        }
        names
    }

    pub fn stats(&self) -> CatalogStats {
        let mut genres: Vec<Genre> = Vec::new();
        let mut albums: Vec<String> = Vec::new();
        for item in &self.items {
            if !genres.contains(&item.genre) {
                genres.push(item.genre);
            }
            let album = item.album.to_lowercase();
            if !albums.contains(&album) {
                albums.push(album);
            }
        }
        CatalogStats {
            total_items: self.items.len(),
            distinct_artists: self.distinct_artists().len(),
            distinct_genres: genres.len(),
            distinct_albums: albums.len(),
        }
    }

    /// Genre breakdown of one artist's items, as (genre, count) pairs sorted
    /// by genre label. Empty when the artist has no items.
    pub fn genre_summary(&self, artist: &str) -> Vec<(Genre, usize)> {
        let needle = artist.to_lowercase();
        let mut counts: Vec<(Genre, usize)> = Vec::new();
        for item in self
            .items
            .iter()
            .filter(|i| i.artist.to_lowercase() == needle)
        {
            match counts.iter_mut().find(|(g, _)| *g == item.genre) {
                Some((_, n)) => *n += 1,
                None => counts.push((item.genre, 1)),
            }
        }
        counts.sort_by(|a, b| a.0.to_string().cmp(&b.0.to_string()));
        counts
    }

    pub(crate) fn map_items<F>(self, f: F) -> Self
    where
        F: FnMut(CatalogItem) -> CatalogItem,
    {
        Self {
            items: self.items.into_iter().map(f).collect(),
        }
    }
}
