//! Elasticsearch client implementation.
//!
//! This module provides the main client for interacting with an Elasticsearch
//! cluster over its REST API. Each method maps onto one documented endpoint:
//! arguments are serialized into an HTTP request, the response body is decoded
//! as JSON, and non-success status codes surface as [`ClientError`] values
//! carrying the status.

use reqwest::RequestBuilder;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info};
use url::Url;

use crate::config::ClientConfig;
use crate::errors::ClientError;
use crate::params;

/// The main client for interacting with an Elasticsearch cluster.
///
/// The client holds only the base URL and an HTTP transport handle; all state
/// (indices, documents) lives server-side. Cloning is cheap and clones share
/// the underlying connection pool.
///
/// # Example
///
/// ```ignore
/// use elastic_client::Client;
/// use serde_json::json;
///
/// let client = Client::new("http://localhost:9200")?;
/// client.create_index("my_index").await?;
/// client
///     .index_document("my_index", Some("my_id"), &json!({"title": "abc"}), &[])
///     .await?;
/// let response = client.uri_search_one_index("my_index", "title:abc", &[]).await?;
/// ```
#[derive(Clone)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
    config: ClientConfig,
}

impl Client {
    /// Create a new client for the Elasticsearch server at the given URL.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The server URL (e.g., "http://localhost:9200")
    ///
    /// # Returns
    ///
    /// * `Ok(Client)` - A new client instance
    /// * `Err(ClientError)` - If the URL is invalid or transport setup fails
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_config(base_url, ClientConfig::default())
    }

    /// Create a new client with custom configuration.
    pub fn with_config(base_url: &str, config: ClientConfig) -> Result<Self, ClientError> {
        let parsed_url =
            Url::parse(base_url).map_err(|e| ClientError::invalid_url(e.to_string()))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ClientError::transport(e.to_string()))?;

        info!(url = %parsed_url, "Created Elasticsearch client");

        Ok(Self {
            base_url: parsed_url,
            http,
            config,
        })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // --- index APIs ---

    /// Create an index.
    ///
    /// Maps to `PUT /{index}`. The response echoes `acknowledged` and `index`.
    pub async fn create_index(&self, index: &str) -> Result<Value, ClientError> {
        let url = self.endpoint(&[index], &[])?;
        let response = self.execute(self.http.put(url)).await?;
        debug!(index = %index, "Index created");
        Ok(response)
    }

    /// Check whether an index exists.
    ///
    /// Maps to `HEAD /{index}`. Returns `Ok(())` when the index exists; a
    /// missing index surfaces as a `ResponseFailure` with status 404.
    pub async fn exists_index(&self, index: &str) -> Result<(), ClientError> {
        let url = self.endpoint(&[index], &[])?;
        self.execute(self.http.head(url)).await?;
        Ok(())
    }

    /// Delete an index. Maps to `DELETE /{index}`.
    pub async fn delete_index(&self, index: &str) -> Result<Value, ClientError> {
        let url = self.endpoint(&[index], &[])?;
        let response = self.execute(self.http.delete(url)).await?;
        debug!(index = %index, "Index deleted");
        Ok(response)
    }

    /// Retrieve statistics for an index, across all metrics.
    ///
    /// Maps to `GET /{index}/_stats`.
    pub async fn stats_index(
        &self,
        index: &str,
        options: &[(&str, &str)],
    ) -> Result<Value, ClientError> {
        let url = self.endpoint(&[index, "_stats"], options)?;
        self.execute(self.http.get(url)).await
    }

    /// Retrieve statistics for an index, restricted to one metric group
    /// (e.g. `docs`, `indexing`, `store`).
    ///
    /// Maps to `GET /{index}/_stats/{metric}`.
    pub async fn stats_index_metric(
        &self,
        index: &str,
        metric: &str,
        options: &[(&str, &str)],
    ) -> Result<Value, ClientError> {
        let url = self.endpoint(&[index, "_stats", metric], options)?;
        self.execute(self.http.get(url)).await
    }

    /// Refresh the given indices, making recent operations visible to search.
    ///
    /// Maps to `POST /{indices}/_refresh`, or `POST /_refresh` for an empty
    /// index list.
    pub async fn refresh(
        &self,
        indices: &[&str],
        options: &[(&str, &str)],
    ) -> Result<Value, ClientError> {
        let joined = indices.join(",");
        let url = if indices.is_empty() {
            self.endpoint(&["_refresh"], options)?
        } else {
            self.endpoint(&[&joined, "_refresh"], options)?
        };
        self.execute(self.http.post(url)).await
    }

    // --- document APIs ---

    /// Index a document.
    ///
    /// With `Some(id)` this maps to `PUT /{index}/_doc/{id}` and replaces any
    /// existing document with that id. With `None` it maps to
    /// `POST /{index}/_doc` and Elasticsearch assigns the id; the response
    /// `result` field is `"created"`.
    ///
    /// # Arguments
    ///
    /// * `index` - The target index
    /// * `id` - The document id, or `None` for server-assigned ids
    /// * `body` - The document source, any serializable value
    /// * `options` - Extra query parameters (e.g. `("refresh", "true")`)
    pub async fn index_document<B: Serialize + ?Sized>(
        &self,
        index: &str,
        id: Option<&str>,
        body: &B,
        options: &[(&str, &str)],
    ) -> Result<Value, ClientError> {
        let response = match id {
            Some(id) => {
                let url = self.endpoint(&[index, "_doc", id], options)?;
                self.execute(self.http.put(url).json(body)).await?
            }
            None => {
                let url = self.endpoint(&[index, "_doc"], options)?;
                self.execute(self.http.post(url).json(body)).await?
            }
        };
        debug!(index = %index, id = ?id, "Document indexed");
        Ok(response)
    }

    /// Check whether a document exists.
    ///
    /// Maps to `HEAD /{index}/_doc/{id}`. Returns `Ok(())` when the document
    /// exists; a missing document surfaces as a `ResponseFailure` with
    /// status 404.
    pub async fn exists_document(&self, index: &str, id: &str) -> Result<(), ClientError> {
        let url = self.endpoint(&[index, "_doc", id], &[])?;
        self.execute(self.http.head(url)).await?;
        Ok(())
    }

    /// Retrieve a document by id.
    ///
    /// Maps to `GET /{index}/_doc/{id}`. The response wraps the source in
    /// Elasticsearch metadata (`found`, `_id`, `_source`, ...). Pass
    /// `("_source", "false")` in `options` to omit the source.
    pub async fn get_document(
        &self,
        index: &str,
        id: &str,
        options: &[(&str, &str)],
    ) -> Result<Value, ClientError> {
        let url = self.endpoint(&[index, "_doc", id], options)?;
        self.execute(self.http.get(url)).await
    }

    /// Retrieve only the source of a document, without metadata.
    ///
    /// Maps to `GET /{index}/_source/{id}`.
    pub async fn get_document_source(
        &self,
        index: &str,
        id: &str,
        options: &[(&str, &str)],
    ) -> Result<Value, ClientError> {
        let url = self.endpoint(&[index, "_source", id], options)?;
        self.execute(self.http.get(url)).await
    }

    /// Apply a partial update to a document.
    ///
    /// Maps to `POST /{index}/_update/{id}`. The body follows the update API
    /// shape, e.g. `{"doc": {...}}` or a scripted update.
    pub async fn update_document<B: Serialize + ?Sized>(
        &self,
        index: &str,
        id: &str,
        body: &B,
        options: &[(&str, &str)],
    ) -> Result<Value, ClientError> {
        let url = self.endpoint(&[index, "_update", id], options)?;
        let response = self.execute(self.http.post(url).json(body)).await?;
        debug!(index = %index, id = %id, "Document updated");
        Ok(response)
    }

    /// Delete a document by id. Maps to `DELETE /{index}/_doc/{id}`.
    pub async fn delete_document(
        &self,
        index: &str,
        id: &str,
        options: &[(&str, &str)],
    ) -> Result<Value, ClientError> {
        let url = self.endpoint(&[index, "_doc", id], options)?;
        let response = self.execute(self.http.delete(url)).await?;
        debug!(index = %index, id = %id, "Document deleted");
        Ok(response)
    }

    // --- search APIs ---

    /// Run a URI search against a single index.
    ///
    /// Maps to `GET /{index}/_search?q={query}`. An empty query string omits
    /// the `q` parameter entirely, which matches all documents.
    pub async fn uri_search_one_index(
        &self,
        index: &str,
        query: &str,
        options: &[(&str, &str)],
    ) -> Result<Value, ClientError> {
        self.uri_search(Some(index), query, options).await
    }

    /// Run a URI search against several indices.
    ///
    /// Maps to `GET /{index1,index2}/_search?q={query}`.
    pub async fn uri_search_many_indices(
        &self,
        indices: &[&str],
        query: &str,
        options: &[(&str, &str)],
    ) -> Result<Value, ClientError> {
        let joined = indices.join(",");
        self.uri_search(Some(&joined), query, options).await
    }

    /// Run a URI search against all indices. Maps to `GET /_search?q={query}`.
    pub async fn uri_search_all_indices(
        &self,
        query: &str,
        options: &[(&str, &str)],
    ) -> Result<Value, ClientError> {
        self.uri_search(None, query, options).await
    }

    /// Run a request-body search.
    ///
    /// Maps to `POST /{indices}/_search`, or `POST /_search` for an empty
    /// index list. The body follows the search API shape, e.g.
    /// `{"query": {"match": {...}}}`.
    pub async fn search<B: Serialize + ?Sized>(
        &self,
        indices: &[&str],
        body: &B,
        options: &[(&str, &str)],
    ) -> Result<Value, ClientError> {
        let joined = indices.join(",");
        let url = if indices.is_empty() {
            self.endpoint(&["_search"], options)?
        } else {
            self.endpoint(&[&joined, "_search"], options)?
        };
        self.execute(self.http.post(url).json(body)).await
    }

    // --- cat APIs ---

    /// List indices via the cat API.
    ///
    /// Maps to `GET /_cat/indices[/{index}]?format=json` and decodes to a JSON
    /// array with one row per index.
    pub async fn cat_indices(
        &self,
        index: Option<&str>,
        options: &[(&str, &str)],
    ) -> Result<Value, ClientError> {
        let mut url = match index {
            Some(index) => self.endpoint(&["_cat", "indices", index], options)?,
            None => self.endpoint(&["_cat", "indices"], options)?,
        };
        params::append_query(&mut url, &[("format", "json")]);
        self.execute(self.http.get(url)).await
    }

    /// Retrieve cluster health via the cat API.
    ///
    /// Maps to `GET /_cat/health?format=json`.
    pub async fn cat_health(&self, options: &[(&str, &str)]) -> Result<Value, ClientError> {
        let mut url = self.endpoint(&["_cat", "health"], options)?;
        params::append_query(&mut url, &[("format", "json")]);
        self.execute(self.http.get(url)).await
    }

    // --- bulk API ---

    /// Execute a bulk request.
    ///
    /// Maps to `POST /{index}/_bulk`, or `POST /_bulk` for `None`. `actions`
    /// holds the action and source lines in order; they are serialized as
    /// newline-delimited JSON. The response reports per-item outcomes under
    /// `items` and an aggregate `errors` flag, which callers must inspect
    /// themselves: a bulk request with failed items still returns HTTP 200.
    pub async fn bulk(
        &self,
        actions: &[Value],
        index: Option<&str>,
        options: &[(&str, &str)],
    ) -> Result<Value, ClientError> {
        let url = match index {
            Some(index) => self.endpoint(&[index, "_bulk"], options)?,
            None => self.endpoint(&["_bulk"], options)?,
        };
        let body = params::ndjson_body(actions);
        self.execute(
            self.http
                .post(url)
                .header("content-type", "application/x-ndjson")
                .body(body),
        )
        .await
    }

    // --- request plumbing ---

    /// Build a request URL from path segments and query parameters.
    fn endpoint(&self, segments: &[&str], options: &[(&str, &str)]) -> Result<Url, ClientError> {
        let mut url = params::join_path(&self.base_url, segments)?;
        params::append_query(&mut url, options);
        Ok(url)
    }

    /// Shared URI search implementation. `target` is a single index name or a
    /// comma-joined list; `None` searches all indices.
    async fn uri_search(
        &self,
        target: Option<&str>,
        query: &str,
        options: &[(&str, &str)],
    ) -> Result<Value, ClientError> {
        let mut url = match target {
            Some(target) => self.endpoint(&[target, "_search"], options)?,
            None => self.endpoint(&["_search"], options)?,
        };
        if !query.is_empty() {
            params::append_query(&mut url, &[("q", query)]);
        }
        self.execute(self.http.get(url)).await
    }

    /// Send a request and decode the response.
    ///
    /// Success responses decode to JSON (`Value::Null` for empty bodies, as
    /// returned by HEAD endpoints). Non-success status codes become
    /// `ResponseFailure` errors carrying the status and, when present, the
    /// decoded error payload.
    async fn execute(&self, request: RequestBuilder) -> Result<Value, ClientError> {
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.json::<Value>().await.ok();
            error!(status = %status, body = ?body, "Request failed");
            return Err(ClientError::response_failure(status.as_u16(), body));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::transport(e.to_string()))?;
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(|e| ClientError::decode(e.to_string()))
    }
}
