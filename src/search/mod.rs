mod resolve;
mod similarity;

pub use resolve::{resolve_artist, MatchTier, ResolvedArtist};
pub use similarity::{jaccard_similarity, rank_candidates, tokenize};
