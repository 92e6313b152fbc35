use crate::client::{load_filter_options, RecipeSource};
use crate::converters::UnitSystem;
use crate::error::BrowseError;
use crate::model::{FilterKind, FilterOptions, Meal, RecipeDetail};
use crate::route::Route;
use futures::future::try_join_all;
use log::{debug, error, info};

/// Number of meals in the random inspiration sample
pub const DEFAULT_RANDOM_COUNT: usize = 12;

/// Where the current results came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowseMode {
    /// Random inspiration sample
    #[default]
    Random,
    /// A search or filter over the whole database
    Global,
}

/// What is currently on screen
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    List,
    Detail(String),
}

/// Result of following a route
#[derive(Debug, Clone, PartialEq)]
pub enum Page<'a> {
    List(&'a [Meal]),
    Detail(Box<RecipeDetail>),
}

/// Recipe browsing session: results, mode and view, backed by a recipe source
pub struct Browser<S: RecipeSource> {
    source: S,
    unit_system: UnitSystem,
    random_count: usize,
    initial: Vec<Meal>,
    current: Vec<Meal>,
    mode: BrowseMode,
    view: View,
}

impl<S: RecipeSource> Browser<S> {
    pub fn new(source: S, unit_system: UnitSystem) -> Self {
        Self {
            source,
            unit_system,
            random_count: DEFAULT_RANDOM_COUNT,
            initial: Vec::new(),
            current: Vec::new(),
            mode: BrowseMode::Random,
            view: View::List,
        }
    }

    pub fn with_random_count(mut self, count: usize) -> Self {
        self.random_count = count;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }

    pub fn set_unit_system(&mut self, unit_system: UnitSystem) {
        self.unit_system = unit_system;
    }

    pub fn random_count(&self) -> usize {
        self.random_count
    }

    pub fn mode(&self) -> BrowseMode {
        self.mode
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// Meals from the latest random load, search or filter
    pub fn meals(&self) -> &[Meal] {
        &self.current
    }

    /// Options for the category, area and ingredient filters
    pub async fn load_filters(&self) -> Result<FilterOptions, BrowseError> {
        load_filter_options(&self.source).await.inspect_err(|e| {
            error!("Error loading filters: {}", e);
        })
    }

    /// Replace the inspiration sample with `count` random meals, fetched one at a time
    pub async fn load_random(&mut self, count: usize) -> Result<&[Meal], BrowseError> {
        self.view = View::List;
        self.mode = BrowseMode::Random;

        let mut meals = Vec::with_capacity(count);
        while meals.len() < count {
            match self.source.random().await {
                Ok(Some(meal)) => meals.push(meal),
                Ok(None) => {
                    let e = BrowseError::NotFound("random meal".to_string());
                    error!("Error loading meals: {}", e);
                    return Err(e);
                }
                Err(e) => {
                    error!("Error loading meals: {}", e);
                    return Err(e);
                }
            }
        }
        meals.truncate(count);
        info!("Loaded {} random meals", meals.len());

        self.initial = meals;
        self.current = self.initial.clone();
        Ok(self.current.as_slice())
    }

    /// Load the configured number of random meals
    pub async fn load_default_random(&mut self) -> Result<&[Meal], BrowseError> {
        self.load_random(self.random_count).await
    }

    /// Search the full database by meal name.
    ///
    /// A blank query changes nothing and returns `Ok(false)`.
    pub async fn search(&mut self, query: &str) -> Result<bool, BrowseError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(false);
        }

        self.view = View::List;
        self.mode = BrowseMode::Global;

        let meals = self.source.search(query).await.inspect_err(|e| {
            error!("Search error: {}", e);
        })?;
        debug!("Search {:?} matched {} meals", query, meals.len());

        self.current = meals;
        Ok(true)
    }

    /// Show every meal matching a category, area or main ingredient.
    ///
    /// Filter endpoints only return summaries, so each hit is looked up
    /// concurrently; a single failed lookup fails the whole filter. A blank
    /// value changes nothing and returns `Ok(false)`.
    pub async fn filter(&mut self, kind: FilterKind, value: &str) -> Result<bool, BrowseError> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(false);
        }

        self.view = View::List;
        self.mode = BrowseMode::Global;

        let meals = self.fetch_filtered(kind, value).await.inspect_err(|e| {
            error!("Filter load error: {}", e);
        })?;
        debug!("Filter {}={:?} matched {} meals", kind, value, meals.len());

        self.current = meals;
        Ok(true)
    }

    async fn fetch_filtered(
        &self,
        kind: FilterKind,
        value: &str,
    ) -> Result<Vec<Meal>, BrowseError> {
        let summaries = self.source.filter(kind, value).await?;

        try_join_all(summaries.iter().map(|summary| async move {
            self.source
                .lookup(&summary.id)
                .await?
                .ok_or_else(|| BrowseError::NotFound(summary.id.clone()))
        }))
        .await
    }

    /// Drop any search or filter and go back to the inspiration sample
    pub fn reset(&mut self) {
        self.mode = BrowseMode::Random;
        self.view = View::List;
        self.current = self.initial.clone();
    }

    /// Follow a route: fetch a meal's detail, or return the list that should be shown
    pub async fn navigate(&mut self, route: &Route) -> Result<Page<'_>, BrowseError> {
        match route {
            Route::Meal(id) => {
                self.view = View::Detail(id.clone());
                let detail = self.show_meal(id).await.inspect_err(|e| {
                    error!("Error loading meal: {}", e);
                })?;
                Ok(Page::Detail(Box::new(detail)))
            }
            Route::List => {
                self.view = View::List;
                let meals = match self.mode {
                    BrowseMode::Random => self.initial.as_slice(),
                    BrowseMode::Global => self.current.as_slice(),
                };
                Ok(Page::List(meals))
            }
        }
    }

    async fn show_meal(&self, id: &str) -> Result<RecipeDetail, BrowseError> {
        let meal = self
            .source
            .lookup(id)
            .await?
            .ok_or_else(|| BrowseError::NotFound(id.to_string()))?;

        Ok(RecipeDetail::new(meal, self.unit_system))
    }

    /// Caption shown above the results grid
    pub fn results_info(&self) -> String {
        if matches!(self.view, View::Detail(_)) || self.current.is_empty() {
            return String::new();
        }

        match self.mode {
            BrowseMode::Random => "Showing random recipes for inspiration.".to_string(),
            BrowseMode::Global => format!("Showing {} recipes.", self.current.len()),
        }
    }
}
