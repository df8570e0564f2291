use serde::{Deserialize, Serialize};

use super::Action;
use super::lifecycle::{Tracked, Transition};
use crate::models::Hello;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelloState {
    pub hello: Option<Hello>,
    pub fetch: Tracked,
}

pub fn reduce(mut state: HelloState, action: &Action) -> HelloState {
    if let Action::Hello(a) = action {
        if let Transition::Succeeded(_, hello) = a.advance(&mut state.fetch) {
            state.hello = Some(hello.clone());
        }
    }
    state
}
