use serde::{Deserialize, Serialize};

use super::Action;
use super::lifecycle::{Tracked, Transition};
use crate::models::User;

/// The current user's profile as last fetched from the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserState {
    pub user: Option<User>,
    pub fetch: Tracked,
}

pub fn reduce(mut state: UserState, action: &Action) -> UserState {
    match action {
        Action::User(a) => {
            if let Transition::Succeeded(_, user) = a.advance(&mut state.fetch) {
                state.user = Some(user.clone());
            }
        }
        Action::SignedOut => state = UserState::default(),
        _ => {}
    }
    state
}
