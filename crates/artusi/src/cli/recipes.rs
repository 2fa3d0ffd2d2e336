//! Recipe command handlers.

use artusi::{
    ArtusiResult, ClientConfig, JsonError, Recipe, RecipeClient, SearchFilters, SortKey,
    SortOrder, derive_view,
};

/// Trigger a corpus load and report the outcome.
pub async fn handle_load(config: ClientConfig) -> ArtusiResult<()> {
    let client = RecipeClient::new(config)?;

    let message = client.trigger_load().await?;
    let recipes = client.fetch_all().await?;

    println!("{message}");
    println!("{} recipes available", recipes.len());
    Ok(())
}

/// Fetch the corpus and render it through the filter/sort engine.
pub async fn handle_list(
    config: ClientConfig,
    sort: SortKey,
    order: SortOrder,
    tags: Vec<String>,
    json: bool,
) -> ArtusiResult<()> {
    let client = RecipeClient::new(config)?;
    let recipes = client.fetch_all().await?;

    let filters = SearchFilters::builder()
        .sort_by(sort)
        .sort_order(order)
        .selected_tags(tags)
        .build();
    let view = derive_view(&recipes, &filters);

    render_recipes(&view, json)
}

/// Fetch and render a single recipe.
pub async fn handle_get(config: ClientConfig, id: u64, json: bool) -> ArtusiResult<()> {
    let client = RecipeClient::new(config)?;
    let recipe = client.fetch_by_id(id).await?;

    if json {
        println!("{}", to_pretty_json(&recipe)?);
        return Ok(());
    }
    render_detail(&recipe);
    Ok(())
}

/// Run a backend search and render the hits.
pub async fn handle_search(config: ClientConfig, query: &str, json: bool) -> ArtusiResult<()> {
    let client = RecipeClient::new(config)?;
    let recipes = client.search(query).await?;

    if recipes.is_empty() {
        println!("No recipes found for \"{query}\"");
        return Ok(());
    }
    render_recipes(&recipes, json)
}

/// One line per recipe, or the JSON array when requested.
pub fn render_recipes(recipes: &[Recipe], json: bool) -> ArtusiResult<()> {
    if json {
        println!("{}", to_pretty_json(&recipes)?);
        return Ok(());
    }
    for recipe in recipes {
        println!("{}", summary_line(recipe));
    }
    Ok(())
}

fn to_pretty_json<T: serde::Serialize>(value: &T) -> ArtusiResult<String> {
    Ok(serde_json::to_string_pretty(value).map_err(|e| JsonError::new(e.to_string()))?)
}

fn summary_line(recipe: &Recipe) -> String {
    let cook_time = recipe
        .cook_time_minutes
        .map(|minutes| format!("{minutes} min"))
        .unwrap_or_else(|| "unknown".to_string());
    format!(
        "{:>5}  {}  ({}, {})  [{}]",
        recipe.id,
        recipe.name,
        recipe.cuisine,
        cook_time,
        recipe.tags.join(", ")
    )
}

fn render_detail(recipe: &Recipe) {
    println!("{} (#{})", recipe.name, recipe.id);
    println!("Cuisine: {}", recipe.cuisine);
    if let Some(minutes) = recipe.cook_time_minutes {
        println!("Cook time: {minutes} minutes");
    }
    if !recipe.tags.is_empty() {
        println!("Tags: {}", recipe.tags.join(", "));
    }
    println!();
    println!("Ingredients:");
    for ingredient in &recipe.ingredients {
        println!("  - {ingredient}");
    }
    println!();
    println!("Instructions:");
    for (step, instruction) in recipe.instructions.iter().enumerate() {
        println!("  {}. {instruction}", step + 1);
    }
}
