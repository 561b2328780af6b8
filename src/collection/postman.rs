//! Postman collections API implementation

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::collection::api::CollectionApi;
use crate::collection::error::ApiError;
use crate::collection::types::{
    CollectionContent, CollectionEnvelope, CollectionListResponse, CollectionSummary,
};
use crate::config::{API_KEY_HEADER, USER_AGENT};

/// Collection API implementation for the Postman API
pub struct PostmanClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PostmanClient {
    /// Creates a new PostmanClient with a custom base URL
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, ApiError> {
        Ok(Self {
            client: reqwest::Client::builder().user_agent(USER_AGENT).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn collections_url(&self) -> String {
        format!("{}/collections", self.base_url)
    }

    fn collection_url(&self, uid: &str) -> String {
        format!("{}/collections/{}", self.base_url, uid)
    }

    /// Sends an authenticated request and decodes a successful JSON response.
    ///
    /// Non-2xx responses become [`ApiError::Status`] carrying the response
    /// body so the remote API's own error message reaches the user.
    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        operation: &str,
    ) -> Result<T, ApiError> {
        let response = request.header(API_KEY_HEADER, &self.api_key).send().await?;

        let status = response.status();
        debug!("{} returned status {}", operation, status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("{} failed with status {}: {}", operation, status, body);
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.json().await.map_err(|e| {
            warn!("Failed to parse {} response: {}", operation, e);
            ApiError::InvalidResponse(e.to_string())
        })
    }
}

#[async_trait::async_trait]
impl CollectionApi for PostmanClient {
    async fn list_collections(&self) -> Result<Vec<CollectionSummary>, ApiError> {
        let request = self.client.get(self.collections_url());
        let response: CollectionListResponse = self.send(request, "List collections").await?;

        Ok(response.collections)
    }

    async fn get_collection(&self, uid: &str) -> Result<CollectionContent, ApiError> {
        let request = self.client.get(self.collection_url(uid));
        let response: CollectionEnvelope<CollectionContent> =
            self.send(request, "Get collection").await?;

        Ok(response.collection)
    }

    async fn create_collection(
        &self,
        content: CollectionContent,
    ) -> Result<CollectionSummary, ApiError> {
        let request = self
            .client
            .post(self.collections_url())
            .json(&CollectionEnvelope {
                collection: content,
            });
        let response: CollectionEnvelope<CollectionSummary> =
            self.send(request, "Create collection").await?;

        Ok(response.collection)
    }

    async fn update_collection(
        &self,
        uid: &str,
        content: CollectionContent,
    ) -> Result<CollectionSummary, ApiError> {
        let request = self
            .client
            .put(self.collection_url(uid))
            .json(&CollectionEnvelope {
                collection: content,
            });
        let response: CollectionEnvelope<CollectionSummary> =
            self.send(request, "Update collection").await?;

        Ok(response.collection)
    }
}
