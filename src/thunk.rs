//! Async action creators.
//!
//! Each thunk issues a request token, dispatches `Pending`, performs one API
//! call and dispatches `Fulfilled` or `Rejected` with the same token. The API
//! result is handed back to the caller as well.

use std::future::Future;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::{Hello, PageQuery, Post, PostId, User, UserId};
use crate::store::{Action, AsyncAction, Store};

pub async fn get_hello(store: &Store, api: &ApiClient) -> Result<Hello, ApiError> {
    run(store, (), Action::Hello, api.fetch_hello()).await
}

pub async fn get_posts(
    store: &Store,
    api: &ApiClient,
    page: PageQuery,
) -> Result<Vec<Post>, ApiError> {
    run(store, page, Action::Posts, api.fetch_post_list(page)).await
}

pub async fn get_post_detail(
    store: &Store,
    api: &ApiClient,
    id: PostId,
) -> Result<Post, ApiError> {
    run(store, id, Action::PostDetail, api.fetch_post_detail(id)).await
}

pub async fn delete_post(store: &Store, api: &ApiClient, id: PostId) -> Result<(), ApiError> {
    run(store, id, Action::DeletePost, api.delete_post(id)).await
}

pub async fn get_user(store: &Store, api: &ApiClient, id: UserId) -> Result<User, ApiError> {
    run(store, id, Action::User, api.fetch_user(id)).await
}

async fn run<A, T, F>(
    store: &Store,
    arg: A,
    wrap: fn(AsyncAction<A, T>) -> Action,
    call: F,
) -> Result<T, ApiError>
where
    A: Clone,
    T: Clone,
    F: Future<Output = Result<T, ApiError>>,
{
    let request = store.next_request_id();
    store.dispatch(wrap(AsyncAction::Pending {
        request,
        arg: arg.clone(),
    }));

    match call.await {
        Ok(payload) => {
            store.dispatch(wrap(AsyncAction::Fulfilled {
                request,
                arg,
                payload: payload.clone(),
            }));
            Ok(payload)
        }
        Err(err) => {
            tracing::warn!(%request, error = %err, "request rejected");
            store.dispatch(wrap(AsyncAction::Rejected {
                request,
                arg,
                error: err.to_string(),
            }));
            Err(err)
        }
    }
}
