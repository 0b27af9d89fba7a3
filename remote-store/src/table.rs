use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::message_from_body;
use crate::{RemoteStore, StoreError};

/// Single-object responses are requested with this media type so the
/// backend unwraps the usual one-element array itself.
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Builder for one table read or write. Filters and ordering map directly
/// onto the backend's query-string dialect (`column=eq.value`,
/// `order=column.desc`).
pub struct TableQuery {
    store: RemoteStore,
    table: String,
    select: String,
    filters: Vec<(String, String)>,
    order: Vec<String>,
    limit: Option<u32>,
}

impl TableQuery {
    pub(crate) fn new(store: RemoteStore, table: &str) -> Self {
        Self {
            store,
            table: table.to_string(),
            select: "*".to_string(),
            filters: Vec::new(),
            order: Vec::new(),
            limit: None,
        }
    }

    /// Column list, including embedded relations
    /// (e.g. `*,category:gallery_categories(*)`).
    pub fn select(mut self, columns: &str) -> Self {
        self.select = columns.to_string();
        self
    }

    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters
            .push((column.to_string(), format!("eq.{}", value.to_string())));
        self
    }

    pub fn order_asc(mut self, column: &str) -> Self {
        self.order.push(format!("{}.asc", column));
        self
    }

    pub fn order_desc(mut self, column: &str) -> Self {
        self.order.push(format!("{}.desc", column));
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Assembled query string pairs, in a stable order.
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("select".to_string(), self.select.clone())];
        pairs.extend(self.filters.iter().cloned());
        if !self.order.is_empty() {
            pairs.push(("order".to_string(), self.order.join(",")));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs
    }

    /// Fetches all matching rows.
    pub async fn rows<T: DeserializeOwned>(self) -> Result<Vec<T>, StoreError> {
        let url = self.store.rest_url(&self.table);
        let request = self.store.authed(self.store.http.get(url)).query(&self.query_pairs());
        let response = check(request.send().await?).await?;
        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    /// Fetches at most one row.
    pub async fn maybe_single<T: DeserializeOwned>(self) -> Result<Option<T>, StoreError> {
        let rows = self.limit(1).rows::<T>().await?;
        Ok(rows.into_iter().next())
    }

    /// Row count only, no payload transferred.
    pub async fn count(self) -> Result<u64, StoreError> {
        let url = self.store.rest_url(&self.table);
        let request = self
            .store
            .authed(self.store.http.head(url))
            .header("Prefer", "count=exact")
            .query(&self.query_pairs());
        let response = check(request.send().await?).await?;
        let range = response
            .headers()
            .get("content-range")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        parse_content_range(range).ok_or_else(|| {
            StoreError::Decode(format!("unparseable content-range header: {:?}", range))
        })
    }

    /// Inserts one row and returns the stored representation.
    pub async fn insert<T: DeserializeOwned>(
        self,
        body: &impl Serialize,
    ) -> Result<T, StoreError> {
        let url = self.store.rest_url(&self.table);
        let request = self
            .store
            .authed(self.store.http.post(url))
            .header("Prefer", "return=representation")
            .header("Accept", SINGLE_OBJECT)
            .json(body);
        let response = check(request.send().await?).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    /// Updates the row with the given id and returns the new representation.
    pub async fn update<T: DeserializeOwned>(
        self,
        id: &str,
        body: &impl Serialize,
    ) -> Result<T, StoreError> {
        let url = self.store.rest_url(&self.table);
        let request = self
            .store
            .authed(self.store.http.patch(url))
            .query(&[("id", format!("eq.{}", id))])
            .header("Prefer", "return=representation")
            .header("Accept", SINGLE_OBJECT)
            .json(body);
        let response = check(request.send().await?).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    /// Deletes the row with the given id. Deleting a row that is already
    /// gone succeeds; the backend treats it as matching zero rows.
    pub async fn delete(self, id: &str) -> Result<(), StoreError> {
        let url = self.store.rest_url(&self.table);
        let request = self
            .store
            .authed(self.store.http.delete(url))
            .query(&[("id", format!("eq.{}", id))]);
        check(request.send().await?).await?;
        Ok(())
    }
}

/// Rejects error responses before the body is trusted.
pub(crate) async fn check(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(StoreError::Server {
        status: status.as_u16(),
        message: message_from_body(&body),
    })
}

/// Parses the total out of a `content-range` header (`0-24/57` or `*/0`).
fn parse_content_range(value: &str) -> Option<u64> {
    value.rsplit('/').next()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> RemoteStore {
        RemoteStore::new("https://backend.example.com", "anon-key").unwrap()
    }

    #[test]
    fn query_pairs_cover_filters_order_and_limit() {
        let query = store()
            .table("gallery_items")
            .select("*,category:gallery_categories(*)")
            .eq("category_id", "abc-123")
            .order_asc("sort_order")
            .order_desc("created_at")
            .limit(12);

        assert_eq!(
            query.query_pairs(),
            vec![
                (
                    "select".to_string(),
                    "*,category:gallery_categories(*)".to_string()
                ),
                ("category_id".to_string(), "eq.abc-123".to_string()),
                ("order".to_string(), "sort_order.asc,created_at.desc".to_string()),
                ("limit".to_string(), "12".to_string()),
            ]
        );
    }

    #[test]
    fn query_pairs_default_to_select_star() {
        let query = store().table("testimonials").eq("approved", true);
        assert_eq!(
            query.query_pairs(),
            vec![
                ("select".to_string(), "*".to_string()),
                ("approved".to_string(), "eq.true".to_string()),
            ]
        );
    }

    #[test]
    fn content_range_totals() {
        assert_eq!(parse_content_range("0-24/57"), Some(57));
        assert_eq!(parse_content_range("*/0"), Some(0));
        assert_eq!(parse_content_range(""), None);
        assert_eq!(parse_content_range("garbage"), None);
    }
}
