use maud::{Markup, html};

use super::format_date;
use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::PageQuery;
use crate::store::{RootState, Store};
use crate::thunk;

#[derive(Debug)]
pub struct PostListView {
    page: PageQuery,
    mounted: bool,
}

impl PostListView {
    pub fn new(page: PageQuery) -> Self {
        Self {
            page,
            mounted: false,
        }
    }

    pub async fn mount(&mut self, store: &Store, api: &ApiClient) -> Result<(), ApiError> {
        self.mounted = true;
        thunk::get_posts(store, api, self.page).await?;
        Ok(())
    }

    /// Moves to another page; refetches only when the page actually changed.
    pub async fn set_page(
        &mut self,
        store: &Store,
        api: &ApiClient,
        page: PageQuery,
    ) -> Result<(), ApiError> {
        if self.mounted && self.page == page {
            return Ok(());
        }
        self.page = page;
        self.mount(store, api).await
    }

    pub fn render(&self, state: &RootState) -> Markup {
        let posts = &state.post;
        let PageQuery { limit, offset } = self.page;
        let has_prev = offset > 0;
        let full_page = limit > 0 && posts.items.len() >= limit as usize;
        let next_offset = offset.checked_add(limit).filter(|_| full_page);

        html! {
            section class="pv-posts" {
                h1 { "Posts" }
                @if posts.fetch.is_failed() {
                    p class="pv-notice" {
                        "Could not load posts: "
                        (posts.fetch.error.as_deref().unwrap_or("unknown error"))
                    }
                }
                ul class="pv-list" {
                    @for post in &posts.items {
                        li class="pv-list-item" {
                            a href=(format!("/posts/{}", post.id)) { (post.title) }
                            div class="pv-list-meta" {
                                (post.user.name) " · " (format_date(Some(&post.created_at)))
                            }
                        }
                    }
                }
                nav class="pv-pager" {
                    @if has_prev {
                        a href=(format!("/?limit={}&offset={}", limit, offset.saturating_sub(limit))) { "Newer" }
                    } @else {
                        span {}
                    }
                    @if let Some(next) = next_offset {
                        a href=(format!("/?limit={}&offset={}", limit, next)) { "Older" }
                    }
                }
            }
        }
    }
}
