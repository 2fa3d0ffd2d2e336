//! Filter specification for the derived recipe view.

use serde::{Deserialize, Serialize};

/// The recipe field a view is ordered by.
///
/// A closed enumeration: each variant maps to a dedicated comparator in the
/// view module, so unsupported sort keys are unrepresentable.
///
/// # Examples
///
/// ```
/// use artusi_core::SortKey;
/// use std::str::FromStr;
///
/// assert_eq!(SortKey::from_str("cookTimeMinutes").unwrap(), SortKey::CookTimeMinutes);
/// assert_eq!(format!("{}", SortKey::Name), "name");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum SortKey {
    /// Numeric comparison on cook time; absent values sort last
    CookTimeMinutes,
    /// Case-insensitive lexicographic comparison on the recipe name
    Name,
}

/// Direction applied to the active comparator.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    /// Ascending
    Asc,
    /// Descending; reverses the comparator, not the sorted output
    Desc,
}

/// Filter specification for deriving a recipe view.
///
/// Tags selected here are offered by the UI from the currently loaded
/// collection, but stale selections from a prior result set are legal and
/// simply match nothing.
///
/// # Examples
///
/// ```
/// use artusi_core::{SearchFilters, SortKey, SortOrder};
///
/// // Default mirrors the initial UI state: cook time ascending, no tags.
/// let filters = SearchFilters::default();
/// assert_eq!(*filters.sort_by(), SortKey::CookTimeMinutes);
/// assert_eq!(*filters.sort_order(), SortOrder::Asc);
/// assert!(filters.selected_tags().is_empty());
///
/// let filters = SearchFilters::builder()
///     .sort_by(SortKey::Name)
///     .sort_order(SortOrder::Desc)
///     .selected_tags(vec!["Vegetarian".to_string()])
///     .build();
/// assert_eq!(filters.selected_tags().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct SearchFilters {
    /// Field the view is ordered by.
    #[serde(default = "default_sort_by")]
    sort_by: SortKey,

    /// Direction of the ordering.
    #[serde(default = "default_sort_order")]
    sort_order: SortOrder,

    /// Tags a recipe must intersect to stay in the view (OR semantics).
    #[serde(default)]
    selected_tags: Vec<String>,
}

fn default_sort_by() -> SortKey {
    SortKey::CookTimeMinutes
}

fn default_sort_order() -> SortOrder {
    SortOrder::Asc
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            sort_by: SortKey::CookTimeMinutes,
            sort_order: SortOrder::Asc,
            selected_tags: Vec::new(),
        }
    }
}

impl SearchFilters {
    /// Creates a new filter specification builder.
    pub fn builder() -> SearchFiltersBuilder {
        SearchFiltersBuilder::default()
    }
}

/// Builder for `SearchFilters`.
#[derive(Debug, Default)]
pub struct SearchFiltersBuilder {
    sort_by: Option<SortKey>,
    sort_order: Option<SortOrder>,
    selected_tags: Option<Vec<String>>,
}

impl SearchFiltersBuilder {
    /// Sets the sort key.
    pub fn sort_by(mut self, value: SortKey) -> Self {
        self.sort_by = Some(value);
        self
    }

    /// Sets the sort direction.
    pub fn sort_order(mut self, value: SortOrder) -> Self {
        self.sort_order = Some(value);
        self
    }

    /// Sets the selected tags.
    pub fn selected_tags(mut self, value: Vec<String>) -> Self {
        self.selected_tags = Some(value);
        self
    }

    /// Builds the `SearchFilters`.
    pub fn build(self) -> SearchFilters {
        SearchFilters {
            sort_by: self.sort_by.unwrap_or(SortKey::CookTimeMinutes),
            sort_order: self.sort_order.unwrap_or(SortOrder::Asc),
            selected_tags: self.selected_tags.unwrap_or_default(),
        }
    }
}
