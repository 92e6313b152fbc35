use std::fmt;

const MEAL_PREFIX: &str = "#meal=";

/// Which view a location hash points at
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// The results grid
    #[default]
    List,
    /// Full-page detail for one meal id
    Meal(String),
}

impl Route {
    /// Read a location hash such as `#meal=52772`.
    ///
    /// Anything that is not a meal link, including one with an empty id, routes to the list.
    pub fn from_hash(hash: &str) -> Route {
        match hash.trim().strip_prefix(MEAL_PREFIX) {
            Some(id) if !id.is_empty() => Route::Meal(id.to_string()),
            _ => Route::List,
        }
    }

    pub fn to_hash(&self) -> String {
        match self {
            Route::List => String::new(),
            Route::Meal(id) => format!("{}{}", MEAL_PREFIX, id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hash())
    }
}
