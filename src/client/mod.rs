mod mealdb;

pub use mealdb::MealDbClient;

use crate::error::BrowseError;
use crate::model::{FilterKind, FilterOptions, Meal, MealSummary};
use async_trait::async_trait;

/// Anything that can answer the recipe API's list/search/filter/lookup/random queries
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Names available for a filter (categories, areas or ingredients)
    async fn list(&self, kind: FilterKind) -> Result<Vec<String>, BrowseError>;

    /// One random meal, or `None` if the source returned nothing
    async fn random(&self) -> Result<Option<Meal>, BrowseError>;

    /// Meals whose name matches `query`
    async fn search(&self, query: &str) -> Result<Vec<Meal>, BrowseError>;

    /// Abbreviated records of meals matching a filter value
    async fn filter(&self, kind: FilterKind, value: &str)
        -> Result<Vec<MealSummary>, BrowseError>;

    /// Full record for a meal id
    async fn lookup(&self, id: &str) -> Result<Option<Meal>, BrowseError>;
}

/// Fetch the three filter option lists concurrently
pub async fn load_filter_options(source: &dyn RecipeSource) -> Result<FilterOptions, BrowseError> {
    let (categories, areas, ingredients) = tokio::try_join!(
        source.list(FilterKind::Category),
        source.list(FilterKind::Area),
        source.list(FilterKind::Ingredient),
    )?;

    Ok(FilterOptions {
        categories,
        areas,
        ingredients,
    })
}
