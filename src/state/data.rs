/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the API layer and the UI layer.

/// A single anime in the catalog, normalized from a raw API record
#[derive(Debug, Clone, PartialEq)]
pub struct Anime {
    /// Canonical title (e.g., "One Piece"); the search key
    pub name: String,
    /// Plot summary shown on the card (may be empty)
    pub synopsis: String,
    /// URL of the small poster image (may be empty, not validated)
    pub poster_url: String,
}

impl Anime {
    /// Convenience constructor, mostly useful in tests
    pub fn new(name: &str, synopsis: &str, poster_url: &str) -> Self {
        Self {
            name: name.to_string(),
            synopsis: synopsis.to_string(),
            poster_url: poster_url.to_string(),
        }
    }
}
