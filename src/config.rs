use url::Url;

use crate::error::ApiError;

pub const DEFAULT_USER_AGENT: &str = "posts-viewer/0.1";

/// Where the backend lives and how to talk to it.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Origin the client is served from; requests are same-origin by default.
    pub origin: Url,
    /// Prefix for every endpoint. Either a path (`/backend`) resolved against
    /// `origin`, or an absolute URL pointing elsewhere. Empty means same-origin root.
    pub endpoint_path: String,
    pub user_agent: String,
}

impl ApiConfig {
    pub fn new(origin: Url) -> Self {
        Self {
            origin,
            endpoint_path: String::new(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn with_endpoint_path(mut self, endpoint_path: impl Into<String>) -> Self {
        self.endpoint_path = endpoint_path.into();
        self
    }

    /// Base URL every endpoint is joined onto. Always ends with `/`.
    pub fn base_url(&self) -> Result<Url, ApiError> {
        let raw = self.endpoint_path.trim();
        let mut base = if raw.starts_with("http://") || raw.starts_with("https://") {
            Url::parse(raw)?
        } else {
            let mut base = self.origin.clone();
            let prefix = raw.trim_matches('/');
            if prefix.is_empty() {
                base.set_path("/");
            } else {
                base.set_path(&format!("/{prefix}"));
            }
            base
        };
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.set_query(None);
        base.set_fragment(None);
        Ok(base)
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url()?.join(path.trim_start_matches('/'))?)
    }
}
