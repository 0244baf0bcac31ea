/// Kitsu API module
///
/// This module handles:
/// - Fetching one page of the anime catalog over HTTP
/// - Normalizing raw API records into `Anime` values
/// - Converting transport and shape problems into `FetchError`

pub mod loader;

pub use loader::FetchError;
