use crate::client::RecipeSource;
use crate::config::DEFAULT_BASE_URL;
use crate::error::BrowseError;
use crate::model::{FilterKind, Meal, MealSummary};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

/// Every TheMealDB endpoint wraps its payload as `{"meals": [...]}`, or `{"meals": null}` when empty
#[derive(Debug, Deserialize)]
#[serde(bound = "T: DeserializeOwned")]
struct MealsEnvelope<T> {
    #[serde(default)]
    meals: Option<Vec<T>>,
}

/// HTTP client for TheMealDB JSON API
#[derive(Debug, Clone)]
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(timeout: Option<Duration>) -> Result<Self, BrowseError> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout)
    }

    /// Point the client at another deployment of the API, e.g. a mock server
    pub fn with_base_url(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, BrowseError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("recipe-browser/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, BrowseError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {} {:?}", url, query);

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BrowseError::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let envelope: MealsEnvelope<T> = serde_json::from_str(&body)?;
        Ok(envelope.meals.unwrap_or_default())
    }
}

#[async_trait]
impl RecipeSource for MealDbClient {
    async fn list(&self, kind: FilterKind) -> Result<Vec<String>, BrowseError> {
        let entries: Vec<Value> = self.get("list.php", &[(kind.query_key(), "list")]).await?;
        let field = kind.list_field();

        Ok(entries
            .iter()
            .filter_map(|entry| entry.get(field).and_then(Value::as_str))
            .map(String::from)
            .collect())
    }

    async fn random(&self) -> Result<Option<Meal>, BrowseError> {
        let meals: Vec<Meal> = self.get("random.php", &[]).await?;
        Ok(meals.into_iter().next())
    }

    async fn search(&self, query: &str) -> Result<Vec<Meal>, BrowseError> {
        self.get("search.php", &[("s", query)]).await
    }

    async fn filter(
        &self,
        kind: FilterKind,
        value: &str,
    ) -> Result<Vec<MealSummary>, BrowseError> {
        self.get("filter.php", &[(kind.query_key(), value)]).await
    }

    async fn lookup(&self, id: &str) -> Result<Option<Meal>, BrowseError> {
        let meals: Vec<Meal> = self.get("lookup.php", &[("i", id)]).await?;
        Ok(meals.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn test_list_categories() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/list.php")
            .match_query(Matcher::UrlEncoded("c".into(), "list".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"meals":[{"strCategory":"Beef"},{"strCategory":"Dessert"}]}"#)
            .create_async()
            .await;

        let client = MealDbClient::with_base_url(server.url(), None).unwrap();
        let categories = client.list(FilterKind::Category).await.unwrap();

        assert_eq!(categories, vec!["Beef", "Dessert"]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_lookup_null_meals() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/lookup.php")
            .match_query(Matcher::UrlEncoded("i".into(), "1".into()))
            .with_status(200)
            .with_body(r#"{"meals":null}"#)
            .create_async()
            .await;

        let client = MealDbClient::with_base_url(server.url(), None).unwrap();
        assert!(client.lookup("1").await.unwrap().is_none());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_server_error_status() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/random.php")
            .with_status(500)
            .create_async()
            .await;

        let client = MealDbClient::with_base_url(server.url(), None).unwrap();
        let result = client.random().await;

        assert!(matches!(
            result,
            Err(BrowseError::HttpStatus { status: 500, .. })
        ));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/search.php")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let client = MealDbClient::with_base_url(server.url(), None).unwrap();
        let result = client.search("cake").await;

        assert!(matches!(result, Err(BrowseError::InvalidResponse(_))));
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = MealDbClient::with_base_url("http://localhost:1/api/", None).unwrap();
        assert_eq!(client.base_url(), "http://localhost:1/api");
    }
}
