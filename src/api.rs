use reqwest::Method;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{ErrorBody, Hello, PageQuery, Post, PostId, User, UserId};

/// Thin wrapper over the backend's REST endpoints.
///
/// Every call is a fresh request: no retry, no timeout, no caching. The client
/// only produces values or errors; it never touches store state.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(ApiError::Client)?;
        // Fail early on a malformed endpoint prefix.
        config.base_url()?;
        Ok(Self { client, config })
    }

    pub async fn fetch_hello(&self) -> Result<Hello, ApiError> {
        let url = self.config.endpoint("hello")?;
        self.get_json(url).await
    }

    pub async fn fetch_post_list(&self, page: PageQuery) -> Result<Vec<Post>, ApiError> {
        let mut url = self.config.endpoint("api/posts")?;
        url.query_pairs_mut()
            .append_pair("limit", &page.limit.to_string())
            .append_pair("offset", &page.offset.to_string());
        self.get_json(url).await
    }

    pub async fn fetch_post_detail(&self, id: PostId) -> Result<Post, ApiError> {
        let url = self.config.endpoint(&format!("api/posts/{id}"))?;
        self.get_json(url).await
    }

    pub async fn delete_post(&self, id: PostId) -> Result<(), ApiError> {
        let url = self.config.endpoint(&format!("api/posts/{id}"))?;
        self.send(Method::DELETE, url).await?;
        Ok(())
    }

    pub async fn fetch_user(&self, id: UserId) -> Result<User, ApiError> {
        let url = self.config.endpoint(&format!("api/users/{id}"))?;
        self.get_json(url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let body = self.send(Method::GET, url.clone()).await?;
        serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }

    async fn send(&self, method: Method, url: Url) -> Result<Vec<u8>, ApiError> {
        tracing::debug!(%method, %url, "api request");
        let transport = |source: reqwest::Error| ApiError::Transport {
            url: url.to_string(),
            source,
        };

        let resp = self
            .client
            .request(method.clone(), url.clone())
            .send()
            .await
            .map_err(transport)?;
        let status = resp.status();
        let body = resp.bytes().await.map_err(transport)?;

        if status.is_success() {
            tracing::debug!(%method, %url, %status, bytes = body.len(), "api response");
            return Ok(body.to_vec());
        }

        let message = match serde_json::from_slice::<ErrorBody>(&body) {
            Ok(envelope) if !envelope.message.is_empty() => envelope.message,
            _ => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };
        tracing::debug!(%method, %url, %status, %message, "api request rejected");
        Err(ApiError::Status {
            url: url.to_string(),
            status,
            message,
        })
    }
}
