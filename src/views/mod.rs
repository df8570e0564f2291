//! View-models: each reads its slice of [`RootState`](crate::store::RootState),
//! dispatches fetches when mounted or when its route parameter changes, and
//! renders markup from whatever state is current.

mod delete_dialog;
mod hello;
pub mod page;
mod post_detail;
mod post_list;

use chrono::{DateTime, Utc};

pub use hello::HelloView;
pub use post_detail::PostDetailView;
pub use post_list::PostListView;

/// Where the application should go after a view action completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Stay,
    PostList,
}

pub fn format_date(at: Option<&DateTime<Utc>>) -> String {
    at.map(|t| t.format("%Y/%m/%d %H:%M").to_string())
        .unwrap_or_default()
}

fn avatar_initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
