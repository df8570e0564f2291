use serde::{Deserialize, Serialize};

use super::Action;
use crate::models::User;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SigninState {
    #[default]
    SignedOut,
    SignedIn {
        user: User,
    },
}

impl SigninState {
    pub fn user(&self) -> Option<&User> {
        match self {
            SigninState::SignedIn { user } => Some(user),
            SigninState::SignedOut => None,
        }
    }
}

pub fn reduce(state: SigninState, action: &Action) -> SigninState {
    match action {
        Action::SignedIn(user) => SigninState::SignedIn { user: user.clone() },
        Action::SignedOut => SigninState::SignedOut,
        _ => state,
    }
}
