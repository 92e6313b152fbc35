use std::time::Duration;

use crate::{Browser, BrowseError, BrowserConfig, MealDbClient, UnitSystem};

/// Builder for configuring a [`Browser`] backed by TheMealDB
#[derive(Debug, Default)]
pub struct RecipeBrowserBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    unit_system: Option<UnitSystem>,
    random_count: Option<usize>,
}

impl RecipeBrowserBuilder {
    /// Start from a loaded configuration; later setter calls override it
    ///
    /// # Example
    /// ```
    /// use recipe_browser::{BrowserConfig, RecipeBrowser};
    ///
    /// let builder = RecipeBrowser::builder().config(BrowserConfig::default());
    /// ```
    pub fn config(mut self, config: BrowserConfig) -> Self {
        self.base_url = Some(config.base_url);
        self.timeout = Some(Duration::from_secs(config.timeout));
        self.unit_system = Some(config.unit_system);
        self.random_count = Some(config.random_count);
        self
    }

    /// Use another API deployment, e.g. a local mock
    ///
    /// # Example
    /// ```
    /// use recipe_browser::RecipeBrowser;
    ///
    /// let builder = RecipeBrowser::builder()
    ///     .base_url("http://localhost:8080/api/json/v1/1");
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use recipe_browser::RecipeBrowser;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeBrowser::builder().timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Set the unit system ingredient measures are converted into
    ///
    /// # Example
    /// ```
    /// use recipe_browser::{RecipeBrowser, UnitSystem};
    ///
    /// let builder = RecipeBrowser::builder().unit_system(UnitSystem::Imperial);
    /// ```
    pub fn unit_system(mut self, unit_system: UnitSystem) -> Self {
        self.unit_system = Some(unit_system);
        self
    }

    /// Set how many meals the random inspiration sample holds
    pub fn random_count(mut self, count: usize) -> Self {
        self.random_count = Some(count);
        self
    }

    /// Build the browser
    ///
    /// # Errors
    /// Returns `BrowseError` if:
    /// - The random sample size is zero
    /// - The HTTP client cannot be created
    ///
    /// # Example
    /// ```
    /// # use recipe_browser::RecipeBrowser;
    /// let browser = RecipeBrowser::builder().build().unwrap();
    /// assert_eq!(browser.random_count(), 12);
    /// ```
    pub fn build(self) -> Result<Browser<MealDbClient>, BrowseError> {
        let defaults = BrowserConfig::default();
        let random_count = self.random_count.unwrap_or(defaults.random_count);
        if random_count == 0 {
            return Err(BrowseError::BuilderError(
                "Random sample size must be at least 1".to_string(),
            ));
        }

        let client = MealDbClient::with_base_url(
            self.base_url.unwrap_or(defaults.base_url),
            Some(
                self.timeout
                    .unwrap_or(Duration::from_secs(defaults.timeout)),
            ),
        )?;

        Ok(Browser::new(client, self.unit_system.unwrap_or(defaults.unit_system))
            .with_random_count(random_count))
    }
}

/// Main entry point for the builder API
pub struct RecipeBrowser;

impl RecipeBrowser {
    /// Creates a new builder for a recipe browser
    ///
    /// # Example
    /// ```
    /// use recipe_browser::RecipeBrowser;
    ///
    /// let builder = RecipeBrowser::builder();
    /// ```
    pub fn builder() -> RecipeBrowserBuilder {
        RecipeBrowserBuilder::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let browser = RecipeBrowser::builder().build().unwrap();
        assert_eq!(browser.unit_system(), UnitSystem::Metric);
        assert_eq!(browser.random_count(), 12);
        assert_eq!(
            browser.source().base_url(),
            "https://www.themealdb.com/api/json/v1/1"
        );
    }

    #[test]
    fn test_setters_override_config() {
        let config = BrowserConfig {
            base_url: "http://localhost:9/api".to_string(),
            timeout: 5,
            random_count: 3,
            unit_system: UnitSystem::Metric,
        };
        let browser = RecipeBrowser::builder()
            .config(config)
            .unit_system(UnitSystem::Imperial)
            .build()
            .unwrap();

        assert_eq!(browser.unit_system(), UnitSystem::Imperial);
        assert_eq!(browser.random_count(), 3);
        assert_eq!(browser.source().base_url(), "http://localhost:9/api");
    }

    #[test]
    fn test_zero_random_count_rejected() {
        let result = RecipeBrowser::builder().random_count(0).build();
        assert!(matches!(result, Err(BrowseError::BuilderError(_))));
    }
}
