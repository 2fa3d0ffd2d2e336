//! State-transition contract tests for `RecipeApp`.
//!
//! These run against a scripted in-memory `RecipeSource`, so every backend
//! outcome is exact and no test touches the network.

use artusi_app::{LOAD_FAILED_MESSAGE, Phase, RecipeApp, SEARCH_FAILED_MESSAGE};
use artusi_core::{Recipe, SearchFilters, SortKey, SortOrder};
use artusi_error::{ClientError, ClientErrorKind};
use artusi_interface::RecipeSource;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared call counters that survive handing the source to the controller.
#[derive(Clone, Default)]
struct CallCounts {
    trigger_load: Arc<AtomicUsize>,
    fetch_all: Arc<AtomicUsize>,
    search: Arc<AtomicUsize>,
}

impl CallCounts {
    fn trigger_loads(&self) -> usize {
        self.trigger_load.load(Ordering::SeqCst)
    }

    fn fetch_alls(&self) -> usize {
        self.fetch_all.load(Ordering::SeqCst)
    }

    fn searches(&self) -> usize {
        self.search.load(Ordering::SeqCst)
    }
}

/// A recipe source that replays scripted outcomes and counts calls.
struct ScriptedSource {
    calls: CallCounts,
    load: Result<String, ClientError>,
    fetch: Result<Vec<Recipe>, ClientError>,
    search: Result<Vec<Recipe>, ClientError>,
}

impl ScriptedSource {
    fn new(
        load: Result<String, ClientError>,
        fetch: Result<Vec<Recipe>, ClientError>,
        search: Result<Vec<Recipe>, ClientError>,
    ) -> (Self, CallCounts) {
        let calls = CallCounts::default();
        (
            Self {
                calls: calls.clone(),
                load,
                fetch,
                search,
            },
            calls,
        )
    }

    /// A healthy backend serving `recipes` from both fetch-all and search.
    fn healthy(recipes: Vec<Recipe>) -> (Self, CallCounts) {
        Self::new(
            Ok("Recipes loaded successfully".to_string()),
            Ok(recipes.clone()),
            Ok(recipes),
        )
    }
}

#[async_trait]
impl RecipeSource for ScriptedSource {
    async fn trigger_load(&self) -> Result<String, ClientError> {
        self.calls.trigger_load.fetch_add(1, Ordering::SeqCst);
        self.load.clone()
    }

    async fn fetch_all(&self) -> Result<Vec<Recipe>, ClientError> {
        self.calls.fetch_all.fetch_add(1, Ordering::SeqCst);
        self.fetch.clone()
    }

    async fn fetch_by_id(&self, id: u64) -> Result<Recipe, ClientError> {
        Err(ClientError::new(ClientErrorKind::NotFound(format!(
            "no recipe {id}"
        ))))
    }

    async fn search(&self, _query: &str) -> Result<Vec<Recipe>, ClientError> {
        self.calls.search.fetch_add(1, Ordering::SeqCst);
        self.search.clone()
    }
}

fn recipe(id: u64, name: &str, cook_time: u32, tags: &[&str]) -> Recipe {
    Recipe {
        id,
        name: name.to_string(),
        cuisine: "Italian".to_string(),
        ingredients: vec!["Eggs".to_string(), "Guanciale".to_string()],
        instructions: vec!["Whisk.".to_string(), "Combine.".to_string()],
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        cook_time_minutes: Some(cook_time),
        image: String::new(),
    }
}

fn corpus() -> Vec<Recipe> {
    vec![
        recipe(1, "Carbonara", 25, &["A"]),
        recipe(2, "Cacio e Pepe", 20, &["B"]),
        recipe(3, "Amatriciana", 30, &["A", "B"]),
    ]
}

fn remote_error(message: &str) -> ClientError {
    ClientError::new(ClientErrorKind::Remote(message.to_string()))
}

#[tokio::test]
async fn initial_load_populates_collections() {
    let (source, calls) = ScriptedSource::healthy(corpus());
    let mut app = RecipeApp::new(source);

    assert_eq!(*app.phase(), Phase::Unloaded);
    app.request_initial_load().await;

    assert_eq!(*app.phase(), Phase::Loaded);
    assert_eq!(app.all_recipes().len(), 3);
    assert_eq!(app.visible_recipes(), app.all_recipes());
    assert!(app.error().is_none());
    assert!(!app.loading());
    assert_eq!(calls.trigger_loads(), 1);
    assert_eq!(calls.fetch_alls(), 1);
}

#[tokio::test]
async fn failed_load_sets_generic_message_and_stays_unloaded() {
    let (source, _) = ScriptedSource::new(
        Err(remote_error("connection pool exhausted")),
        Ok(corpus()),
        Ok(vec![]),
    );
    let mut app = RecipeApp::new(source);

    app.request_initial_load().await;

    // The backend's own text never reaches the user on first load.
    assert_eq!(app.error().as_deref(), Some(LOAD_FAILED_MESSAGE));
    assert_eq!(*app.phase(), Phase::Unloaded);
    assert!(app.all_recipes().is_empty());
    assert!(!app.loading());
}

#[tokio::test]
async fn fetch_all_does_not_run_when_trigger_load_fails() {
    let (source, calls) = ScriptedSource::new(
        Err(remote_error("load failed")),
        Ok(corpus()),
        Ok(vec![]),
    );
    let mut app = RecipeApp::new(source);

    app.request_initial_load().await;

    assert_eq!(calls.trigger_loads(), 1);
    assert_eq!(calls.fetch_alls(), 0);
}

#[tokio::test]
async fn failed_load_may_be_retried() {
    let (source, calls) = ScriptedSource::new(
        Err(remote_error("load failed")),
        Ok(corpus()),
        Ok(vec![]),
    );
    let mut app = RecipeApp::new(source);

    app.request_initial_load().await;
    app.request_initial_load().await;

    assert_eq!(calls.trigger_loads(), 2);
}

#[tokio::test]
async fn load_is_ignored_once_loaded() {
    let (source, calls) = ScriptedSource::healthy(corpus());
    let mut app = RecipeApp::new(source);

    app.request_initial_load().await;
    app.request_initial_load().await;

    assert_eq!(calls.trigger_loads(), 1);
    assert_eq!(calls.fetch_alls(), 1);
}

#[tokio::test]
async fn short_query_performs_no_backend_call() {
    let (source, calls) = ScriptedSource::healthy(corpus());
    let mut app = RecipeApp::new(source);
    app.request_initial_load().await;

    let before = app.visible_recipes().clone();
    app.submit_search("pa").await;

    assert_eq!(calls.searches(), 0);
    assert_eq!(app.visible_recipes(), &before);
    assert!(app.error().is_none());
}

#[tokio::test]
async fn search_replaces_visible_but_not_all() {
    let narrowed = vec![recipe(1, "Carbonara", 25, &["A"])];
    let (source, calls) = ScriptedSource::new(
        Ok("ok".to_string()),
        Ok(corpus()),
        Ok(narrowed.clone()),
    );
    let mut app = RecipeApp::new(source);
    app.request_initial_load().await;

    app.submit_search("carbonara").await;

    assert_eq!(calls.searches(), 1);
    assert_eq!(app.visible_recipes(), &narrowed);
    assert_eq!(app.all_recipes().len(), 3);
    assert_eq!(app.active_query(), "carbonara");
}

#[tokio::test]
async fn failed_search_surfaces_message_verbatim_and_keeps_stale_results() {
    let (source, _) = ScriptedSource::new(
        Ok("ok".to_string()),
        Ok(corpus()),
        Err(remote_error("Search failed")),
    );
    let mut app = RecipeApp::new(source);
    app.request_initial_load().await;

    let before = app.visible_recipes().clone();
    app.submit_search("pasta").await;

    assert_eq!(app.error().as_deref(), Some("Search failed"));
    assert_eq!(app.visible_recipes(), &before);
    assert!(!app.loading());
}

#[tokio::test]
async fn failed_search_with_empty_message_falls_back_to_generic() {
    let (source, _) = ScriptedSource::new(
        Ok("ok".to_string()),
        Ok(corpus()),
        Err(remote_error("")),
    );
    let mut app = RecipeApp::new(source);
    app.request_initial_load().await;

    app.submit_search("pasta").await;

    assert_eq!(app.error().as_deref(), Some(SEARCH_FAILED_MESSAGE));
}

#[tokio::test]
async fn clearing_query_restores_full_collection_without_backend_call() {
    let narrowed = vec![recipe(2, "Cacio e Pepe", 20, &["B"])];
    let (source, calls) = ScriptedSource::new(
        Ok("ok".to_string()),
        Ok(corpus()),
        Ok(narrowed),
    );
    let mut app = RecipeApp::new(source);
    app.request_initial_load().await;
    app.submit_search("cacio").await;
    assert_eq!(app.visible_recipes().len(), 1);

    let backend_calls = calls.searches() + calls.fetch_alls() + calls.trigger_loads();
    app.update_query("");

    assert_eq!(app.visible_recipes(), app.all_recipes());
    assert_eq!(
        calls.searches() + calls.fetch_alls() + calls.trigger_loads(),
        backend_calls
    );
}

#[tokio::test]
async fn nonempty_query_update_leaves_visible_collection_alone() {
    let narrowed = vec![recipe(2, "Cacio e Pepe", 20, &["B"])];
    let (source, _) = ScriptedSource::new(
        Ok("ok".to_string()),
        Ok(corpus()),
        Ok(narrowed.clone()),
    );
    let mut app = RecipeApp::new(source);
    app.request_initial_load().await;
    app.submit_search("cacio").await;

    app.update_query("c");

    assert_eq!(app.active_query(), "c");
    assert_eq!(app.visible_recipes(), &narrowed);
}

#[tokio::test]
async fn clearing_query_before_any_load_is_harmless() {
    let (source, _) = ScriptedSource::healthy(vec![]);
    let mut app = RecipeApp::new(source);

    app.update_query("");

    assert!(app.visible_recipes().is_empty());
    assert_eq!(*app.phase(), Phase::Unloaded);
}

#[tokio::test]
async fn selecting_a_tag_narrows_the_derived_view() {
    let (source, _) = ScriptedSource::healthy(corpus());
    let mut app = RecipeApp::new(source);
    app.request_initial_load().await;

    app.update_filters(
        SearchFilters::builder()
            .selected_tags(vec!["A".to_string()])
            .build(),
    );

    let view = app.derived_view();
    let ids: Vec<u64> = view.iter().map(|r| r.id).collect();
    // Carbonara (25) and Amatriciana (30) carry tag A; cook-time ascending.
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn filters_apply_to_the_active_search_result() {
    let narrowed = vec![
        recipe(3, "Amatriciana", 30, &["A", "B"]),
        recipe(2, "Cacio e Pepe", 20, &["B"]),
    ];
    let (source, _) = ScriptedSource::new(
        Ok("ok".to_string()),
        Ok(corpus()),
        Ok(narrowed),
    );
    let mut app = RecipeApp::new(source);
    app.request_initial_load().await;
    app.submit_search("pepe").await;

    app.update_filters(
        SearchFilters::builder()
            .sort_by(SortKey::Name)
            .sort_order(SortOrder::Desc)
            .build(),
    );

    let names: Vec<String> = app.derived_view().iter().map(|r| r.name.clone()).collect();
    assert_eq!(names, vec!["Cacio e Pepe", "Amatriciana"]);
}

#[tokio::test]
async fn available_tags_track_the_visible_collection() {
    let narrowed = vec![recipe(2, "Cacio e Pepe", 20, &["B"])];
    let (source, _) = ScriptedSource::new(
        Ok("ok".to_string()),
        Ok(corpus()),
        Ok(narrowed),
    );
    let mut app = RecipeApp::new(source);
    app.request_initial_load().await;
    assert_eq!(app.available_tags(), vec!["A", "B"]);

    app.submit_search("cacio").await;
    assert_eq!(app.available_tags(), vec!["B"]);
}

#[tokio::test]
async fn selection_is_pure_focus_state() {
    let (source, calls) = ScriptedSource::healthy(corpus());
    let mut app = RecipeApp::new(source);
    app.request_initial_load().await;
    let backend_calls = calls.trigger_loads() + calls.fetch_alls() + calls.searches();

    let first = app.visible_recipes()[0].clone();
    app.select_recipe(first.clone());
    assert_eq!(app.selected().as_ref(), Some(&first));

    app.clear_selection();
    assert!(app.selected().is_none());
    assert_eq!(
        calls.trigger_loads() + calls.fetch_alls() + calls.searches(),
        backend_calls
    );
}

#[tokio::test]
async fn reset_returns_to_unloaded_and_clears_derived_state() {
    let (source, calls) = ScriptedSource::healthy(corpus());
    let mut app = RecipeApp::new(source);
    app.request_initial_load().await;
    app.submit_search("carbonara").await;
    app.update_filters(
        SearchFilters::builder()
            .selected_tags(vec!["A".to_string()])
            .build(),
    );
    app.select_recipe(app.visible_recipes()[0].clone());

    app.reset();

    assert_eq!(*app.phase(), Phase::Unloaded);
    assert!(app.all_recipes().is_empty());
    assert!(app.visible_recipes().is_empty());
    assert!(app.active_query().is_empty());
    assert_eq!(*app.filters(), SearchFilters::default());
    assert!(app.error().is_none());
    assert!(app.selected().is_none());

    // A fresh load is legal again after the reset.
    app.request_initial_load().await;
    assert_eq!(*app.phase(), Phase::Loaded);
    assert_eq!(calls.trigger_loads(), 2);
}
