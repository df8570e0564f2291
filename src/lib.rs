pub mod api;
mod builtin;
mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod thunk;
pub mod views;

use anyhow::Context as _;
use api::ApiClient;
use cli::Args;
use maud::Markup;
use store::{Action, Store};
use views::{HelloView, Navigation, PostDetailView, PostListView, page};

pub use cli::{Args as CliArgs, Route};

/// Mounts the view selected by `args` against the backend and writes the
/// rendered page.
pub async fn run(args: Args) -> anyhow::Result<()> {
    let api = ApiClient::new(args.api_config()).context("build api client")?;
    let store = Store::new();

    if let Some(user_id) = args.user_id {
        match thunk::get_user(&store, &api, user_id).await {
            Ok(user) => {
                tracing::info!(user_id, name = %user.name, "signed in");
                store.dispatch(Action::SignedIn(user));
            }
            Err(err) => tracing::warn!(user_id, error = %err, "could not load user"),
        }
    }

    let (title, content) = match args.route {
        Route::List => render_list(&store, &api, &args).await,
        Route::Detail => {
            let post_id = args
                .post_id
                .context("--post-id is required for --route detail")?;
            render_detail(&store, &api, &args, post_id).await
        }
        Route::Hello => {
            let view = HelloView;
            if let Err(err) = view.mount(&store, &api).await {
                tracing::warn!(error = %err, "greeting unavailable");
            }
            ("Hello".to_string(), view.render(&store.state()))
        }
    };

    let html = page::build_page(&store.state(), &title, content);
    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("create {}", parent.display()))?;
                }
            }
            std::fs::write(path, html).with_context(|| format!("write {}", path.display()))?;
            tracing::info!(path = %path.display(), "page written");
        }
        None => {
            use std::io::Write as _;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes()).context("write stdout")?;
        }
    }
    Ok(())
}

async fn render_list(store: &Store, api: &ApiClient, args: &Args) -> (String, Markup) {
    let mut view = PostListView::new(args.page());
    if let Err(err) = view.mount(store, api).await {
        tracing::warn!(error = %err, "post list unavailable");
    }
    ("Posts".to_string(), view.render(&store.state()))
}

async fn render_detail(
    store: &Store,
    api: &ApiClient,
    args: &Args,
    post_id: i64,
) -> (String, Markup) {
    let mut view = PostDetailView::new();
    if let Err(err) = view.set_route(store, api, post_id).await {
        tracing::warn!(post_id, error = %err, "post unavailable");
    }

    let loaded = view.current(&store.state()).is_some();
    if args.confirm_delete && !loaded {
        tracing::warn!(post_id, "post not loaded; skipping delete");
    } else if args.confirm_delete {
        view.open_delete_dialog();
        match view.confirm_delete(store, api).await {
            Ok(Navigation::PostList) => {
                view.unmount(store);
                return render_list(store, api, args).await;
            }
            Ok(Navigation::Stay) => {}
            Err(err) => tracing::warn!(post_id, error = %err, "delete failed"),
        }
    }

    let state = store.state();
    (view.title(&state), view.render(&state))
}
