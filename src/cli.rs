use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use url::Url;

use crate::config::{ApiConfig, DEFAULT_USER_AGENT};
use crate::models::PageQuery;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Route {
    /// Paginated post list.
    List,
    /// A single post, selected with `--post-id`.
    Detail,
    /// Backend greeting.
    Hello,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Origin the client is served from (e.g. `http://localhost:8080`).
    #[arg(long)]
    pub origin: Url,

    /// Prefix for every API endpoint: a path resolved against `--origin` or an
    /// absolute URL. Empty means same-origin.
    #[arg(long, env = "API_ENDPOINT_PATH", default_value = "")]
    pub api_endpoint_path: String,

    /// Page to mount.
    #[arg(long, value_enum, default_value = "list")]
    pub route: Route,

    /// Post id for `--route detail`.
    #[arg(long)]
    pub post_id: Option<i64>,

    /// Posts per page for `--route list`.
    #[arg(long, default_value_t = 20)]
    pub limit: u32,

    #[arg(long, default_value_t = 0)]
    pub offset: u32,

    /// Load this user and mark the session as signed in.
    #[arg(long)]
    pub user_id: Option<i64>,

    /// On `--route detail`, open the delete dialog and confirm it.
    #[arg(long)]
    pub confirm_delete: bool,

    /// Write the rendered HTML here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// HTTP User-Agent used for API requests.
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl Args {
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            origin: self.origin.clone(),
            endpoint_path: self.api_endpoint_path.clone(),
            user_agent: self.user_agent.clone(),
        }
    }

    pub fn page(&self) -> PageQuery {
        PageQuery {
            limit: self.limit,
            offset: self.offset,
        }
    }
}
