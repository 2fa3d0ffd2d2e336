//! Pure derivation of the filtered, sorted recipe view.

use crate::{Recipe, SearchFilters, SortKey, SortOrder};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Derives the ordered view of `recipes` under `filters`.
///
/// Recipes survive the tag filter when their tag set intersects the selected
/// tags (OR across selections); an empty selection keeps everything. The
/// surviving recipes are then stable-sorted by the active sort key, so
/// recipes that compare equal keep their original relative order in both
/// directions. The input slice is never mutated.
///
/// # Examples
///
/// ```
/// use artusi_core::{derive_view, Recipe, SearchFilters, SortKey};
///
/// let recipes: Vec<Recipe> = serde_json::from_str(
///     r#"[
///         {"id": 1, "name": "Beef Stew", "cuisine": "French", "ingredients": [],
///          "instructions": [], "tags": ["Dinner"], "cookTimeMinutes": 120, "image": ""},
///         {"id": 2, "name": "Aioli", "cuisine": "Spanish", "ingredients": [],
///          "instructions": [], "tags": ["Sauce"], "cookTimeMinutes": 10, "image": ""}
///     ]"#,
/// )
/// .unwrap();
///
/// let filters = SearchFilters::builder().sort_by(SortKey::Name).build();
/// let view = derive_view(&recipes, &filters);
/// assert_eq!(view[0].name, "Aioli");
/// assert_eq!(recipes[0].name, "Beef Stew"); // input untouched
/// ```
pub fn derive_view(recipes: &[Recipe], filters: &SearchFilters) -> Vec<Recipe> {
    let mut view: Vec<Recipe> = if filters.selected_tags().is_empty() {
        recipes.to_vec()
    } else {
        recipes
            .iter()
            .filter(|recipe| recipe.matches_any_tag(filters.selected_tags()))
            .cloned()
            .collect()
    };

    view.sort_by(|a, b| compare_recipes(a, b, *filters.sort_by(), *filters.sort_order()));
    view
}

/// The distinct tag vocabulary of `recipes`, sorted ascending.
///
/// # Examples
///
/// ```
/// use artusi_core::{available_tags, Recipe};
///
/// let recipes: Vec<Recipe> = serde_json::from_str(
///     r#"[
///         {"id": 1, "name": "A", "cuisine": "", "ingredients": [], "instructions": [],
///          "tags": ["Vegan", "Dinner"], "cookTimeMinutes": 5, "image": ""},
///         {"id": 2, "name": "B", "cuisine": "", "ingredients": [], "instructions": [],
///          "tags": ["Dinner"], "cookTimeMinutes": 5, "image": ""}
///     ]"#,
/// )
/// .unwrap();
///
/// assert_eq!(available_tags(&recipes), vec!["Dinner", "Vegan"]);
/// ```
pub fn available_tags(recipes: &[Recipe]) -> Vec<String> {
    recipes
        .iter()
        .flat_map(|recipe| recipe.tags.iter().cloned())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

/// Comparison for one pair of recipes under the given key and direction.
///
/// Absent values sort after present ones regardless of direction; only the
/// present/present comparison is reversed for `Desc`. Reversing the
/// comparator rather than the sorted output preserves tie stability.
fn compare_recipes(a: &Recipe, b: &Recipe, key: SortKey, order: SortOrder) -> Ordering {
    match key {
        SortKey::Name => directed(
            a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            order,
        ),
        SortKey::CookTimeMinutes => match (a.cook_time_minutes, b.cook_time_minutes) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a_minutes), Some(b_minutes)) => directed(a_minutes.cmp(&b_minutes), order),
        },
    }
}

fn directed(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}
