/// Catalog session state
///
/// One `CatalogSession` lives for the duration of the window. It owns
/// the fetched catalog, the current search query, and the derived
/// visible list, and it tracks the load lifecycle as a single enum
/// instead of a pile of boolean flags.

use crate::kitsu::FetchError;
use super::data::Anime;
use super::search;

/// Lifecycle of the one-shot catalog load
///
/// A session moves `Idle -> Loading -> Loaded` on success or
/// `Idle -> Loading -> Failed` on error. Both end states are terminal:
/// there is no refresh or retry within a session.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadPhase {
    /// Before the fetch has been issued
    Idle,
    /// Fetch in flight; the catalog is still empty
    Loading,
    /// Catalog populated; queries now narrow the visible list
    Loaded,
    /// Fetch failed; the catalog stays empty for the rest of the session
    Failed(FetchError),
}

/// State for one catalog browsing session
pub struct CatalogSession {
    /// Where the load currently stands
    phase: LoadPhase,
    /// Every anime from the API response, in response order
    full_list: Vec<Anime>,
    /// Raw text from the search box; empty means no filter
    query: String,
    /// The subset of `full_list` matching `query`, in original order
    visible: Vec<Anime>,
    /// Cleared on close; a dead session accepts no more writes
    alive: bool,
}

impl CatalogSession {
    /// Create a fresh session with an empty catalog and no filter
    pub fn new() -> Self {
        Self {
            phase: LoadPhase::Idle,
            full_list: Vec::new(),
            query: String::new(),
            visible: Vec::new(),
            alive: true,
        }
    }

    /// Mark the fetch as issued. Only meaningful from `Idle`; a session
    /// never returns to `Loading` once it has left it.
    pub fn begin_load(&mut self) {
        if self.alive && self.phase == LoadPhase::Idle {
            self.phase = LoadPhase::Loading;
        }
    }

    /// Apply the outcome of the catalog fetch.
    ///
    /// This is the completion handler for the async load. It checks
    /// liveness first so a fetch that resolves after the session was
    /// torn down writes nothing. On success the full list is published
    /// in one step and the visible list is recomputed against whatever
    /// query the user has typed in the meantime.
    pub fn apply_load(&mut self, result: Result<Vec<Anime>, FetchError>) {
        if !self.alive || self.phase != LoadPhase::Loading {
            return;
        }

        match result {
            Ok(animes) => {
                self.full_list = animes;
                self.visible = search::filter_by_name(&self.full_list, &self.query);
                self.phase = LoadPhase::Loaded;
            }
            Err(error) => {
                // The catalog stays empty; the error is kept for the status line
                self.phase = LoadPhase::Failed(error);
            }
        }
    }

    /// Update the search query and recompute the visible list.
    ///
    /// Called on every keystroke, so it stays synchronous and cheap.
    /// Before the catalog has loaded this filters an empty list and
    /// therefore yields an empty visible list.
    pub fn set_query(&mut self, text: String) {
        if !self.alive {
            return;
        }

        self.query = text;
        self.visible = search::filter_by_name(&self.full_list, &self.query);
    }

    /// Tear down the session. Any fetch result or input event arriving
    /// after this point is discarded.
    pub fn close(&mut self) {
        self.alive = false;
    }

    /// Current load phase
    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    /// Current search box contents
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The animes currently eligible for display
    pub fn visible(&self) -> &[Anime] {
        &self.visible
    }

    /// Number of animes in the full (unfiltered) catalog
    pub fn full_len(&self) -> usize {
        self.full_list.len()
    }
}
