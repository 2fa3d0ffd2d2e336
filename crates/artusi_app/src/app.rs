//! Application state and transitions.

use artusi_core::{Recipe, SearchFilters, available_tags, derive_view};
use artusi_error::ClientError;
use artusi_interface::RecipeSource;
use tracing::{debug, instrument, warn};

/// Message shown when the initial load fails, whatever the backend said.
///
/// First-load failures always surface this generic text; search failures
/// pass the backend message through verbatim.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load recipe data. Please try again.";

/// Fallback shown when a search fails without a usable message.
pub const SEARCH_FAILED_MESSAGE: &str = "Failed to search recipes. Please try again.";

/// Queries shorter than this never reach the backend.
pub const MIN_QUERY_LEN: usize = 3;

/// Persisted lifecycle phase of the application state.
///
/// Loading and searching are transient windows during which `loading()` is
/// true; the only phases that persist between transitions are these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum Phase {
    /// No corpus fetched yet; the only phase from which an initial load runs
    Unloaded,
    /// The corpus has been fetched at least once
    Loaded,
}

/// Application state controller for the recipe browsing flow.
///
/// Holds `&mut self` across every transition, so at most one backend call is
/// ever outstanding. All view derivation is synchronous; suspension happens
/// only at the [`RecipeSource`] boundary.
#[derive(Debug, derive_getters::Getters)]
pub struct RecipeApp<S> {
    /// Backend the controller reads from.
    #[getter(skip)]
    source: S,
    /// Persisted lifecycle phase.
    phase: Phase,
    /// Full corpus from the last successful initial load.
    all_recipes: Vec<Recipe>,
    /// Collection the derived view is computed from; replaced wholesale,
    /// never mutated in place.
    visible_recipes: Vec<Recipe>,
    /// Last submitted search string.
    active_query: String,
    /// Active filter specification.
    filters: SearchFilters,
    /// True while a backend call is outstanding.
    loading: bool,
    /// User-facing failure message from the last transition, if any.
    error: Option<String>,
    /// Recipe currently focused in the detail view, if any.
    selected: Option<Recipe>,
}

impl<S: RecipeSource> RecipeApp<S> {
    /// Create a controller in the `Unloaded` phase.
    pub fn new(source: S) -> Self {
        Self {
            source,
            phase: Phase::Unloaded,
            all_recipes: Vec::new(),
            visible_recipes: Vec::new(),
            active_query: String::new(),
            filters: SearchFilters::default(),
            loading: false,
            error: None,
            selected: None,
        }
    }

    /// The filtered, sorted view of the currently visible collection.
    pub fn derived_view(&self) -> Vec<Recipe> {
        derive_view(&self.visible_recipes, &self.filters)
    }

    /// Distinct tags across the visible collection, sorted ascending.
    ///
    /// Derived on demand, never stored, so it tracks every collection change.
    pub fn available_tags(&self) -> Vec<String> {
        available_tags(&self.visible_recipes)
    }

    /// Run the initial corpus load: trigger the backend load, then fetch the
    /// result.
    ///
    /// Only acts from `Unloaded`; once loaded, further calls are ignored. On
    /// failure the error is the generic [`LOAD_FAILED_MESSAGE`], the phase
    /// stays `Unloaded`, and the caller may retry.
    #[instrument(skip(self))]
    pub async fn request_initial_load(&mut self) {
        if self.phase == Phase::Loaded {
            debug!("Corpus already loaded; ignoring load request");
            return;
        }
        self.loading = true;
        self.error = None;

        match self.load_corpus().await {
            Ok(recipes) => {
                debug!(count = recipes.len(), "Initial load complete");
                self.all_recipes = recipes.clone();
                self.visible_recipes = recipes;
                self.phase = Phase::Loaded;
            }
            Err(e) => {
                warn!(error = %e, "Initial load failed");
                self.error = Some(LOAD_FAILED_MESSAGE.to_string());
            }
        }
        self.loading = false;
    }

    /// Trigger the backend load and fetch the corpus, in that order.
    ///
    /// The fetch must not run when the trigger fails.
    async fn load_corpus(&self) -> Result<Vec<Recipe>, ClientError> {
        let message = self.source.trigger_load().await?;
        debug!(message = %message, "Backend corpus load triggered");
        self.source.fetch_all().await
    }

    /// Submit a search and replace the visible collection with the result.
    ///
    /// Queries shorter than [`MIN_QUERY_LEN`] characters are ignored without
    /// a backend call. On failure the backend message is surfaced verbatim
    /// (falling back to [`SEARCH_FAILED_MESSAGE`] when empty) and the stale
    /// results stay visible.
    #[instrument(skip(self), fields(query_len = query.chars().count()))]
    pub async fn submit_search(&mut self, query: &str) {
        if query.chars().count() < MIN_QUERY_LEN {
            debug!("Query shorter than {} characters; skipping search", MIN_QUERY_LEN);
            return;
        }
        self.loading = true;
        self.error = None;
        self.active_query = query.to_string();

        match self.source.search(query).await {
            Ok(results) => {
                debug!(count = results.len(), "Search complete");
                self.visible_recipes = results;
            }
            Err(e) => {
                warn!(error = %e, "Search failed");
                let message = e.message();
                self.error = Some(if message.is_empty() {
                    SEARCH_FAILED_MESSAGE.to_string()
                } else {
                    message.to_string()
                });
            }
        }
        self.loading = false;
    }

    /// Track the query string as the user edits it.
    ///
    /// Exactly the empty string restores the full collection without a
    /// backend call; any non-empty value leaves the visible collection
    /// alone until a search is submitted.
    pub fn update_query(&mut self, value: &str) {
        self.active_query = value.to_string();
        if value.is_empty() && !self.all_recipes.is_empty() {
            debug!("Query cleared; restoring full collection");
            self.visible_recipes = self.all_recipes.clone();
        }
    }

    /// Replace the filter specification wholesale.
    ///
    /// No backend call; the next [`Self::derived_view`] reflects the change.
    pub fn update_filters(&mut self, filters: SearchFilters) {
        self.filters = filters;
    }

    /// Focus a recipe for the detail view.
    pub fn select_recipe(&mut self, recipe: Recipe) {
        self.selected = Some(recipe);
    }

    /// Clear the detail-view focus.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Return to `Unloaded`, clearing all derived state.
    ///
    /// This is the recovery action behind the title click and the error
    /// screen's restart button; it replaces a host-environment reload.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting application state");
        self.phase = Phase::Unloaded;
        self.all_recipes.clear();
        self.visible_recipes.clear();
        self.active_query.clear();
        self.filters = SearchFilters::default();
        self.loading = false;
        self.error = None;
        self.selected = None;
    }
}
