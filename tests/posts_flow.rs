use std::time::Duration;

use httpmock::Method::{DELETE, GET};
use httpmock::MockServer;
use posts_viewer::api::ApiClient;
use posts_viewer::config::ApiConfig;
use posts_viewer::error::ApiError;
use posts_viewer::models::PageQuery;
use posts_viewer::store::{RequestStatus, Store};
use posts_viewer::thunk;
use posts_viewer::views::{Navigation, PostDetailView, PostListView};
use serde_json::{Value, json};
use tempfile::tempdir;
use url::Url;

fn post_json(id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "body": format!("body of {title}"),
        "created_at": "2026-01-30T00:00:00Z",
        "updated_at": "2026-01-31T08:15:00Z",
        "user": { "id": 1, "name": "User1" }
    })
}

fn client(server: &MockServer) -> ApiClient {
    let origin = Url::parse(&server.url("/")).unwrap();
    ApiClient::new(ApiConfig::new(origin)).unwrap()
}

#[tokio::test]
async fn list_holds_page_in_response_order() {
    let server = MockServer::start();
    let page: Vec<Value> = (1..=20i64).rev().map(|id| post_json(id, &format!("p{id}"))).collect();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/posts")
            .query_param("limit", "20")
            .query_param("offset", "0");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(Value::Array(page));
    });

    let store = Store::new();
    let api = client(&server);
    let mut view = PostListView::new(PageQuery::default());
    view.mount(&store, &api).await.unwrap();
    mock.assert();

    let state = store.state();
    let ids: Vec<i64> = state.post.items.iter().map(|p| p.id).collect();
    assert_eq!(ids, (1..=20i64).rev().collect::<Vec<_>>());
    assert_eq!(state.post.page, Some(PageQuery::default()));
    assert_eq!(state.post.fetch.status, RequestStatus::Succeeded);

    // Same page again is not refetched.
    view.set_page(&store, &api, PageQuery::default()).await.unwrap();
    mock.assert_hits(1);
}

#[tokio::test]
async fn missing_post_is_rejected_without_touching_fields() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/posts/42");
        then.status(404)
            .header("Content-Type", "application/json")
            .json_body(json!({ "code": 0, "message": "record not found" }));
    });

    let store = Store::new();
    let api = client(&server);
    let err = thunk::get_post_detail(&store, &api, 42).await.unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));

    let state = store.state();
    assert_eq!(state.postdetail.post, None);
    assert_eq!(state.postdetail.fetch.status, RequestStatus::Failed);
    assert!(
        state
            .postdetail
            .fetch
            .error
            .as_deref()
            .unwrap()
            .contains("record not found")
    );
}

#[tokio::test]
async fn failed_fetch_keeps_previous_post() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/posts/1");
        then.status(200).json_body(post_json(1, "first"));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/posts/2");
        then.status(500).body("boom");
    });

    let store = Store::new();
    let api = client(&server);
    thunk::get_post_detail(&store, &api, 1).await.unwrap();
    thunk::get_post_detail(&store, &api, 2).await.unwrap_err();

    let state = store.state();
    let post = state.postdetail.post.as_ref().unwrap();
    assert_eq!(post.id, 1);
    assert_eq!(post.title, "first");
    assert!(state.postdetail.fetch.is_failed());
    assert_eq!(state.postdetail.requested_id, Some(2));
}

#[tokio::test]
async fn undecodable_body_is_rejected() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/posts/3");
        then.status(200).body("<html>not json</html>");
    });

    let store = Store::new();
    let err = thunk::get_post_detail(&store, &client(&server), 3)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }));
    assert!(store.state().postdetail.fetch.is_failed());
}

#[tokio::test]
async fn late_response_for_older_request_is_ignored() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/posts/1");
        then.status(200)
            .json_body(post_json(1, "stale"))
            .delay(Duration::from_millis(400));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/posts/2");
        then.status(200).json_body(post_json(2, "fresh"));
    });

    let store = Store::new();
    let api = client(&server);
    let (first, second) = tokio::join!(thunk::get_post_detail(&store, &api, 1), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        thunk::get_post_detail(&store, &api, 2).await
    });
    assert_eq!(first.unwrap().id, 1);
    assert_eq!(second.unwrap().id, 2);

    let state = store.state();
    assert_eq!(state.postdetail.post.as_ref().unwrap().title, "fresh");
    assert_eq!(state.postdetail.requested_id, Some(2));
    assert_eq!(state.postdetail.fetch.status, RequestStatus::Succeeded);
}

#[tokio::test]
async fn repeated_fetch_is_idempotent() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/posts/7");
        then.status(200).json_body(post_json(7, "same"));
    });

    let store = Store::new();
    let api = client(&server);
    thunk::get_post_detail(&store, &api, 7).await.unwrap();
    let once = store.state().postdetail.post.clone();
    thunk::get_post_detail(&store, &api, 7).await.unwrap();
    let twice = store.state().postdetail.post.clone();
    mock.assert_hits(2);
    assert_eq!(once, twice);
}

#[tokio::test]
async fn detail_view_fetches_once_per_route() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/posts/9");
        then.status(200).json_body(post_json(9, "nine"));
    });

    let store = Store::new();
    let api = client(&server);
    let mut view = PostDetailView::new();
    view.set_route(&store, &api, 9).await.unwrap();
    view.set_route(&store, &api, 9).await.unwrap();
    mock.assert_hits(1);

    let html = view.render(&store.state()).into_string();
    assert!(html.contains("<h1>nine</h1>"));
    assert!(html.contains("Created 2026/01/30 00:00"));
    assert!(html.contains("Updated 2026/01/31 08:15"));
}

#[tokio::test]
async fn confirming_delete_clears_state_and_navigates() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/posts/5");
        then.status(200).json_body(post_json(5, "doomed"));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE).path("/api/posts/5");
        then.status(204);
    });

    let store = Store::new();
    let api = client(&server);
    let mut view = PostDetailView::new();
    view.set_route(&store, &api, 5).await.unwrap();

    // Nothing happens until the dialog is open.
    assert_eq!(
        view.confirm_delete(&store, &api).await.unwrap(),
        Navigation::Stay
    );
    delete.assert_hits(0);

    view.open_delete_dialog();
    assert_eq!(
        view.confirm_delete(&store, &api).await.unwrap(),
        Navigation::PostList
    );
    delete.assert();
    assert!(!view.is_delete_dialog_open());
    assert_eq!(store.state().postdetail.post, None);
}

#[tokio::test]
async fn failed_delete_keeps_dialog_open() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/posts/6");
        then.status(200).json_body(post_json(6, "stays"));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/posts/6");
        then.status(403)
            .json_body(json!({ "code": 0, "message": "forbidden" }));
    });

    let store = Store::new();
    let api = client(&server);
    let mut view = PostDetailView::new();
    view.set_route(&store, &api, 6).await.unwrap();
    view.open_delete_dialog();
    view.confirm_delete(&store, &api).await.unwrap_err();

    assert!(view.is_delete_dialog_open());
    let state = store.state();
    assert!(state.postdetail.shows(6));
    let html = view.render(&state).into_string();
    assert!(html.contains("Delete failed:"));
    assert!(html.contains("forbidden"));
}

#[tokio::test]
async fn endpoint_path_prefixes_requests() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/backend/hello");
        then.status(200)
            .json_body(json!({ "lang": "en", "message": "Hello, World!" }));
    });

    let origin = Url::parse(&server.url("/")).unwrap();
    let api = ApiClient::new(ApiConfig::new(origin).with_endpoint_path("/backend")).unwrap();
    let store = Store::new();
    let hello = thunk::get_hello(&store, &api).await.unwrap();
    mock.assert();
    assert_eq!(hello.message, "Hello, World!");
    assert_eq!(store.state().hello.hello, Some(hello));
}

#[tokio::test]
async fn run_renders_detail_page_to_file() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/posts/11");
        then.status(200).json_body(post_json(11, "Rendered <title>"));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/users/1");
        then.status(200).json_body(json!({ "id": 1, "name": "User1" }));
    });

    let tmp = tempdir().unwrap();
    let out = tmp.path().join("pages/post-11.html");
    let args = posts_viewer::CliArgs {
        origin: Url::parse(&server.url("/")).unwrap(),
        api_endpoint_path: String::new(),
        route: posts_viewer::Route::Detail,
        post_id: Some(11),
        limit: 20,
        offset: 0,
        user_id: Some(1),
        confirm_delete: false,
        out: Some(out.clone()),
        user_agent: "test-agent".to_string(),
    };
    posts_viewer::run(args).await.unwrap();

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Rendered &lt;title&gt;</title>"));
    assert!(html.contains("Signed in as User1"));
    assert!(html.contains("body of Rendered &lt;title&gt;"));
}

#[tokio::test]
async fn run_delete_navigates_to_list() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/posts/12");
        then.status(200).json_body(post_json(12, "gone soon"));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE).path("/api/posts/12");
        then.status(204);
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/posts");
        then.status(200)
            .json_body(json!([post_json(13, "survivor")]));
    });

    let tmp = tempdir().unwrap();
    let out = tmp.path().join("after-delete.html");
    let args = posts_viewer::CliArgs {
        origin: Url::parse(&server.url("/")).unwrap(),
        api_endpoint_path: String::new(),
        route: posts_viewer::Route::Detail,
        post_id: Some(12),
        limit: 20,
        offset: 0,
        user_id: None,
        confirm_delete: true,
        out: Some(out.clone()),
        user_agent: "test-agent".to_string(),
    };
    posts_viewer::run(args).await.unwrap();
    delete.assert();

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("<title>Posts</title>"));
    assert!(html.contains("survivor"));
    assert!(!html.contains("gone soon"));
}

fn detail_args(server: &MockServer, post_id: i64, out: std::path::PathBuf) -> posts_viewer::CliArgs {
    posts_viewer::CliArgs {
        origin: Url::parse(&server.url("/")).unwrap(),
        api_endpoint_path: String::new(),
        route: posts_viewer::Route::Detail,
        post_id: Some(post_id),
        limit: 20,
        offset: 0,
        user_id: None,
        confirm_delete: true,
        out: Some(out),
        user_agent: "test-agent".to_string(),
    }
}

#[tokio::test]
async fn run_failed_delete_still_writes_detail_page() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/posts/14");
        then.status(200).json_body(post_json(14, "protected"));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE).path("/api/posts/14");
        then.status(403)
            .json_body(json!({ "code": 0, "message": "forbidden" }));
    });

    let tmp = tempdir().unwrap();
    let out = tmp.path().join("post-14.html");
    posts_viewer::run(detail_args(&server, 14, out.clone()))
        .await
        .unwrap();
    delete.assert();

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("<title>protected</title>"));
    assert!(html.contains("Delete failed:"));
    assert!(html.contains("forbidden"));
}

#[tokio::test]
async fn run_skips_delete_when_post_missing() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/posts/15");
        then.status(404)
            .json_body(json!({ "code": 0, "message": "record not found" }));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE).path("/api/posts/15");
        then.status(204);
    });

    let tmp = tempdir().unwrap();
    let out = tmp.path().join("post-15.html");
    posts_viewer::run(detail_args(&server, 15, out.clone()))
        .await
        .unwrap();
    delete.assert_hits(0);

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("Could not load this post"));
    assert!(html.contains("record not found"));
    assert!(!html.contains("alertdialog"));
}
