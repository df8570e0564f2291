//! Application state: one owned container composed of independent slices.
//!
//! Each slice owns a disjoint region of [`RootState`] and a pure reducer.
//! [`Store::dispatch`] runs every reducer over a clone of the current state and
//! publishes the result, so readers only ever observe whole snapshots.

mod hello;
mod lifecycle;
mod postdetail;
mod posts;
mod signin;
mod user;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::models::{Hello, PageQuery, Post, PostId, User, UserId};

pub use hello::HelloState;
pub use lifecycle::{AsyncAction, RequestId, RequestStatus, Tracked};
pub use postdetail::PostDetailState;
pub use posts::PostsState;
pub use signin::SigninState;
pub use user::UserState;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootState {
    pub hello: HelloState,
    pub post: PostsState,
    pub signin: SigninState,
    pub postdetail: PostDetailState,
    pub user: UserState,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Hello(AsyncAction<(), Hello>),
    Posts(AsyncAction<PageQuery, Vec<Post>>),
    PostDetail(AsyncAction<PostId, Post>),
    DeletePost(AsyncAction<PostId, ()>),
    User(AsyncAction<UserId, User>),
    SignedIn(User),
    SignedOut,
    /// Detail page went away; forget the post it showed.
    PostDetailCleared,
}

impl Action {
    pub fn name(&self) -> String {
        match self {
            Action::Hello(a) => format!("getHello/{}", a.phase()),
            Action::Posts(a) => format!("getPosts/{}", a.phase()),
            Action::PostDetail(a) => format!("getPostDetail/{}", a.phase()),
            Action::DeletePost(a) => format!("deletePost/{}", a.phase()),
            Action::User(a) => format!("getUser/{}", a.phase()),
            Action::SignedIn(_) => "signin/signedIn".to_string(),
            Action::SignedOut => "signin/signedOut".to_string(),
            Action::PostDetailCleared => "postdetail/cleared".to_string(),
        }
    }
}

/// Routes `action` through every slice reducer.
pub fn reduce(state: RootState, action: &Action) -> RootState {
    RootState {
        hello: hello::reduce(state.hello, action),
        post: posts::reduce(state.post, action),
        signin: signin::reduce(state.signin, action),
        postdetail: postdetail::reduce(state.postdetail, action),
        user: user::reduce(state.user, action),
    }
}

/// Holds the current [`RootState`] and serializes reducer invocations.
///
/// Create one per application and pass it by reference to thunks and views.
pub struct Store {
    state: watch::Sender<Arc<RootState>>,
    next_request: AtomicU64,
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(RootState::default())
    }

    pub fn with_state(initial: RootState) -> Self {
        let (state, _) = watch::channel(Arc::new(initial));
        Self {
            state,
            next_request: AtomicU64::new(1),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> Arc<RootState> {
        self.state.borrow().clone()
    }

    /// Runs `f` over a snapshot; `f` may dispatch without blocking.
    pub fn select<R>(&self, f: impl FnOnce(&RootState) -> R) -> R {
        let snapshot = self.state();
        f(&snapshot)
    }

    /// Receiver that wakes whenever a dispatch publishes a new snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Arc<RootState>> {
        self.state.subscribe()
    }

    pub fn next_request_id(&self) -> RequestId {
        RequestId(self.next_request.fetch_add(1, Ordering::Relaxed))
    }

    pub fn dispatch(&self, action: Action) {
        tracing::trace!(action = %action.name(), "dispatch");
        self.state.send_modify(|current| {
            *current = Arc::new(reduce((**current).clone(), &action));
        });
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
