//! The recipe data model.

use serde::{Deserialize, Serialize};

/// A single recipe as served by the backend.
///
/// Recipes are created only by the backend and treated as immutable once
/// received. The wire format is camelCase JSON.
///
/// # Examples
///
/// ```
/// use artusi_core::Recipe;
///
/// let recipe: Recipe = serde_json::from_str(
///     r#"{
///         "id": 1,
///         "name": "Classic Margherita Pizza",
///         "cuisine": "Italian",
///         "ingredients": ["Pizza dough", "Tomato sauce", "Fresh mozzarella"],
///         "instructions": ["Preheat the oven.", "Assemble the pizza.", "Bake."],
///         "tags": ["Pizza", "Italian"],
///         "cookTimeMinutes": 15,
///         "image": "https://cdn.dummyjson.com/recipe-images/1.webp"
///     }"#,
/// )
/// .unwrap();
///
/// assert_eq!(recipe.id, 1);
/// assert_eq!(recipe.cook_time_minutes, Some(15));
/// assert_eq!(recipe.instructions.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique identifier assigned by the backend
    pub id: u64,
    /// Display name
    pub name: String,
    /// Cuisine label (e.g., "Italian")
    pub cuisine: String,
    /// Ingredient list, in display order
    pub ingredients: Vec<String>,
    /// Preparation steps; order is significant
    pub instructions: Vec<String>,
    /// Tags as sent by the backend; order preserved for display
    pub tags: Vec<String>,
    /// Cook time in minutes; tolerated as absent on the wire
    #[serde(default)]
    pub cook_time_minutes: Option<u32>,
    /// Image URI; may be unreachable, consumers degrade gracefully
    pub image: String,
}

impl Recipe {
    /// True when any of the recipe's tags appears in `selection`.
    ///
    /// An empty `selection` matches nothing; the caller decides whether an
    /// empty selection means "no filtering".
    pub fn matches_any_tag(&self, selection: &[String]) -> bool {
        self.tags.iter().any(|tag| selection.contains(tag))
    }
}
