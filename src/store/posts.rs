use serde::{Deserialize, Serialize};

use super::Action;
use super::lifecycle::{AsyncAction, Tracked, Transition};
use crate::models::{PageQuery, Post};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostsState {
    /// Posts of the last accepted page, in response order.
    pub items: Vec<Post>,
    pub page: Option<PageQuery>,
    pub fetch: Tracked,
}

pub fn reduce(mut state: PostsState, action: &Action) -> PostsState {
    match action {
        Action::Posts(a) => {
            if let Transition::Succeeded(page, items) = a.advance(&mut state.fetch) {
                state.items = items.clone();
                state.page = Some(*page);
            }
        }
        Action::DeletePost(AsyncAction::Fulfilled { arg: id, .. }) => {
            state.items.retain(|p| p.id != *id);
        }
        _ => {}
    }
    state
}
