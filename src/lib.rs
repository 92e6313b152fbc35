pub mod browser;
pub mod builder;
pub mod client;
pub mod config;
pub mod converters;
pub mod error;
pub mod instructions;
pub mod model;
pub mod render;
pub mod route;

// Re-export commonly used types
pub use browser::{BrowseMode, Browser, Page, View};
pub use builder::{RecipeBrowser, RecipeBrowserBuilder};
pub use client::{load_filter_options, MealDbClient, RecipeSource};
pub use crate::config::BrowserConfig;
pub use converters::{convert, UnitSystem};
pub use error::BrowseError;
pub use instructions::{parse, ParsedInstructions};
pub use model::{FilterKind, FilterOptions, Ingredient, Meal, MealSummary, RecipeDetail};
pub use route::Route;

use log::debug;

/// Fetch a recipe by id and prepare it for display in `unit_system`
///
/// # Example
/// ```no_run
/// # use recipe_browser::{recipe_detail, UnitSystem};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let detail = recipe_detail("52772", UnitSystem::Imperial).await?;
/// println!("{}", detail.meal.name);
/// # Ok(())
/// # }
/// ```
pub async fn recipe_detail(
    id: &str,
    unit_system: UnitSystem,
) -> Result<RecipeDetail, BrowseError> {
    let client = MealDbClient::new(None)?;
    let meal = client
        .lookup(id)
        .await?
        .ok_or_else(|| BrowseError::NotFound(id.to_string()))?;
    debug!("{:#?}", meal);

    Ok(RecipeDetail::new(meal, unit_system))
}

/// Search TheMealDB by meal name
///
/// # Example
/// ```no_run
/// # use recipe_browser::search_meals;
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let meals = search_meals("Arrabiata").await?;
/// # Ok(())
/// # }
/// ```
pub async fn search_meals(query: &str) -> Result<Vec<Meal>, BrowseError> {
    MealDbClient::new(None)?.search(query.trim()).await
}

/// Fetch `count` random meals
pub async fn random_meals(count: usize) -> Result<Vec<Meal>, BrowseError> {
    let mut browser = Browser::new(MealDbClient::new(None)?, UnitSystem::default());
    Ok(browser.load_random(count).await?.to_vec())
}
