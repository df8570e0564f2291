use serde::{Deserialize, Serialize};

use super::Action;
use super::lifecycle::{AsyncAction, Tracked, Transition};
use crate::models::{Post, PostId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDetailState {
    /// The post shown on the detail page. Replaced wholesale, never merged.
    pub post: Option<Post>,
    /// Id passed to the latest detail request.
    pub requested_id: Option<PostId>,
    pub fetch: Tracked,
    pub delete: Tracked,
}

impl PostDetailState {
    pub fn shows(&self, id: PostId) -> bool {
        self.post.as_ref().is_some_and(|p| p.id == id)
    }
}

pub fn reduce(mut state: PostDetailState, action: &Action) -> PostDetailState {
    match action {
        Action::PostDetail(a) => match a.advance(&mut state.fetch) {
            Transition::Started(id) => state.requested_id = Some(*id),
            Transition::Succeeded(_, post) => state.post = Some(post.clone()),
            Transition::Failed(id) => {
                tracing::debug!(post_id = id, "detail fetch failed; keeping previous post");
            }
            Transition::Stale => {
                tracing::debug!(
                    request = %a.request(),
                    post_id = a.arg(),
                    "dropping stale detail response"
                );
            }
        },
        Action::DeletePost(a) => {
            a.advance(&mut state.delete);
            if let AsyncAction::Fulfilled { arg: id, .. } = a {
                if state.shows(*id) {
                    state.post = None;
                }
            }
        }
        Action::PostDetailCleared => state = PostDetailState::default(),
        _ => {}
    }
    state
}
