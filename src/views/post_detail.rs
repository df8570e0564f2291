use maud::{Markup, html};

use super::{Navigation, avatar_initial, delete_dialog, format_date};
use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::{Post, PostId};
use crate::store::{Action, RootState, Store};
use crate::thunk;

/// The post detail page, keyed by the `postId` route parameter.
#[derive(Debug, Default)]
pub struct PostDetailView {
    post_id: Option<PostId>,
    delete_dialog_open: bool,
}

impl PostDetailView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_delete_dialog_open(&self) -> bool {
        self.delete_dialog_open
    }

    /// Mounts the view on `post_id`, or moves it there.
    ///
    /// Fetches exactly once per distinct route parameter; calling again with the
    /// id already shown is a no-op.
    pub async fn set_route(
        &mut self,
        store: &Store,
        api: &ApiClient,
        post_id: PostId,
    ) -> Result<(), ApiError> {
        if self.post_id == Some(post_id) {
            return Ok(());
        }
        self.post_id = Some(post_id);
        self.delete_dialog_open = false;
        thunk::get_post_detail(store, api, post_id).await?;
        Ok(())
    }

    pub fn unmount(self, store: &Store) {
        store.dispatch(Action::PostDetailCleared);
    }

    pub fn open_delete_dialog(&mut self) {
        if self.post_id.is_some() {
            self.delete_dialog_open = true;
        }
    }

    pub fn close_delete_dialog(&mut self) {
        self.delete_dialog_open = false;
    }

    /// Confirms the open delete dialog.
    ///
    /// On success the store has already dropped the post and the caller should
    /// navigate to the list. On failure the dialog stays open and shows the error.
    pub async fn confirm_delete(
        &mut self,
        store: &Store,
        api: &ApiClient,
    ) -> Result<Navigation, ApiError> {
        let Some(post_id) = self.post_id.filter(|_| self.delete_dialog_open) else {
            return Ok(Navigation::Stay);
        };
        thunk::delete_post(store, api, post_id).await?;
        tracing::info!(post_id, "post deleted");
        self.delete_dialog_open = false;
        self.post_id = None;
        Ok(Navigation::PostList)
    }

    /// The post to show, if the store holds the one this view is keyed on.
    pub fn current<'a>(&self, state: &'a RootState) -> Option<&'a Post> {
        let post_id = self.post_id?;
        state.postdetail.post.as_ref().filter(|p| p.id == post_id)
    }

    pub fn title(&self, state: &RootState) -> String {
        self.current(state)
            .map(|p| p.title.clone())
            .unwrap_or_else(|| "Post".to_string())
    }

    pub fn render(&self, state: &RootState) -> Markup {
        let post = self.current(state);
        let detail = &state.postdetail;
        let author = post.map(|p| p.user.name.as_str()).unwrap_or("");
        let failed = detail.fetch.is_failed() && detail.requested_id == self.post_id;

        html! {
            article class="pv-post" {
                @if failed {
                    p class="pv-notice" {
                        "Could not load this post: "
                        (detail.fetch.error.as_deref().unwrap_or("unknown error"))
                    }
                }
                h1 { (post.map(|p| p.title.as_str()).unwrap_or("")) }
                div class="pv-author" {
                    span class="pv-avatar" aria-hidden="true" { (avatar_initial(author)) }
                    span class="pv-author-name" { (author) }
                }
                p class="pv-body" { (post.map(|p| p.body.as_str()).unwrap_or("")) }
                hr;
                div class="pv-dates" {
                    span { "Created " (format_date(post.map(|p| &p.created_at))) }
                    span { "Updated " (format_date(post.map(|p| &p.updated_at))) }
                }
                div class="pv-actions" {
                    button type="button" class="pv-btn" { "Edit" }
                    button type="button" class="pv-btn pv-btn-danger" { "Delete" }
                }
                @if let Some(post_id) = self.post_id.filter(|_| self.delete_dialog_open) {
                    (delete_dialog::render(post_id, &detail.delete))
                }
            }
        }
    }
}
