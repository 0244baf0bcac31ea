/// Live search over the catalog
///
/// The search box narrows the visible catalog as the user types.
/// Matching is a plain case-insensitive substring test against the
/// anime name. There is no tokenization, no fuzzy distance, and no
/// trimming: whitespace in the query is significant.

use super::data::Anime;

/// Filter the catalog down to the animes whose name contains `query`.
///
/// Returns matches in their original order, so the result is always an
/// order-preserving subsequence of `animes`. An empty query matches
/// everything and returns the full list unchanged.
pub fn filter_by_name(animes: &[Anime], query: &str) -> Vec<Anime> {
    let needle = query.to_lowercase();

    animes
        .iter()
        .filter(|anime| anime.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
