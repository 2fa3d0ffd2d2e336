//! The full browsing flow behind one command.
//!
//! `artusi browse` drives the application state controller end to end:
//! initial load, optional search, filters, then the derived view. Backend
//! failures render as a banner line rather than a process error; the
//! controller is the containment boundary.

use super::recipes::render_recipes;
use artusi::{
    ArtusiResult, ClientConfig, RecipeApp, RecipeClient, SearchFilters, SortKey, SortOrder,
};

/// Run the browse flow and render the derived view.
pub async fn handle_browse(
    config: ClientConfig,
    query: Option<&str>,
    sort: SortKey,
    order: SortOrder,
    tags: Vec<String>,
) -> ArtusiResult<()> {
    let client = RecipeClient::new(config)?;
    let mut app = RecipeApp::new(client);

    app.request_initial_load().await;
    if let Some(message) = app.error() {
        println!("⚠ {message}");
        return Ok(());
    }
    println!("Loaded {} recipes", app.all_recipes().len());

    if let Some(query) = query {
        app.update_query(query);
        app.submit_search(query).await;
        if let Some(message) = app.error() {
            println!("⚠ {message}");
        } else {
            println!("Found {} recipes for \"{query}\"", app.visible_recipes().len());
        }
    }

    app.update_filters(
        SearchFilters::builder()
            .sort_by(sort)
            .sort_order(order)
            .selected_tags(tags)
            .build(),
    );

    let available = app.available_tags();
    if !available.is_empty() {
        println!("Tags: {}", available.join(", "));
    }
    println!();

    render_recipes(&app.derived_view(), false)
}
