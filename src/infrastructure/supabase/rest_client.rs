//! PostgREST implementation of [`RecordStore`].

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde_json::Value;
use tracing::debug;

use super::upstream_message;
use crate::domain::repositories::{Collection, Query, RecordStore, Row, StoreError};

const RETURN_REPRESENTATION: &str = "return=representation";

/// Record store client for `{SUPABASE_URL}/rest/v1/{collection}`.
///
/// Requests are authenticated with the project key, so row level security
/// policies apply as configured for that key.
#[derive(Clone)]
pub struct SupabaseRestClient {
    http: reqwest::Client,
    base_url: String,
    service_key: String,
}

impl std::fmt::Debug for SupabaseRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseRestClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl SupabaseRestClient {
    pub(super) fn new(http: reqwest::Client, base_url: String, service_key: String) -> Self {
        Self {
            http,
            base_url,
            service_key,
        }
    }

    fn url(&self, collection: Collection) -> String {
        format!("{}/rest/v1/{}", self.base_url, collection)
    }

    fn request(&self, method: reqwest::Method, collection: Collection) -> RequestBuilder {
        self.http
            .request(method, self.url(collection))
            .bearer_auth(&self.service_key)
    }

    async fn send(request: RequestBuilder) -> Result<Response, StoreError> {
        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(StoreError::Rejected {
            status: status.as_u16(),
            message: upstream_message(status, &body),
        })
    }

    async fn rows(request: RequestBuilder) -> Result<Vec<Row>, StoreError> {
        Self::send(request)
            .await?
            .json::<Vec<Row>>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }
}

/// Translates a [`Query`] into PostgREST query-string pairs.
fn query_params(query: &Query) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = query
        .filters()
        .iter()
        .map(|(column, value)| (column.clone(), format!("eq.{value}")))
        .collect();

    if let Some((column, direction)) = query.order() {
        params.push(("order".into(), format!("{column}.{}", direction.as_str())));
    }

    params
}

#[async_trait]
impl RecordStore for SupabaseRestClient {
    async fn insert(&self, collection: Collection, record: Row) -> Result<Vec<Row>, StoreError> {
        debug!(%collection, "insert");
        let request = self
            .request(reqwest::Method::POST, collection)
            .query(&[("select", "*")])
            .header("Prefer", RETURN_REPRESENTATION)
            .json(&Value::Array(vec![record]));

        Self::rows(request).await
    }

    async fn select(&self, collection: Collection, query: &Query) -> Result<Vec<Row>, StoreError> {
        debug!(%collection, ?query, "select");
        let request = self
            .request(reqwest::Method::GET, collection)
            .query(&[("select", "*")])
            .query(&query_params(query));

        Self::rows(request).await
    }

    async fn update(
        &self,
        collection: Collection,
        query: &Query,
        patch: Row,
    ) -> Result<Vec<Row>, StoreError> {
        debug!(%collection, ?query, "update");
        let request = self
            .request(reqwest::Method::PATCH, collection)
            .query(&[("select", "*")])
            .query(&query_params(query))
            .header("Prefer", RETURN_REPRESENTATION)
            .json(&patch);

        Self::rows(request).await
    }

    async fn delete(&self, collection: Collection, query: &Query) -> Result<(), StoreError> {
        debug!(%collection, ?query, "delete");
        let request = self
            .request(reqwest::Method::DELETE, collection)
            .query(&query_params(query));

        Self::send(request).await.map(|_| ())
    }

    async fn health_check(&self) -> bool {
        let request = self
            .http
            .get(format!("{}/rest/v1/", self.base_url))
            .bearer_auth(&self.service_key);

        match request.send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!(error = %e, "record store health check failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::SortDirection;

    #[test]
    fn test_query_params_encode_filters_and_order() {
        let query = Query::all()
            .eq("tailor_id", "abc")
            .order_by("created_at", SortDirection::Descending);

        assert_eq!(
            query_params(&query),
            vec![
                ("tailor_id".to_string(), "eq.abc".to_string()),
                ("order".to_string(), "created_at.desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_params_empty_for_full_scan() {
        assert!(query_params(&Query::all()).is_empty());
    }
}
