//! Controller-level tests: resolve completions commit into session state,
//! failures replace the displayed list, and featured loading skips pages
//! that cannot be resolved.

use std::sync::Arc;

use mockito::{Matcher, ServerGuard};
use serde_json::json;
use tokio::sync::Mutex;

use wikitunes::controller::AppController;
use wikitunes::model::{AppModel, ContentView};
use wikitunes::resolver::{Resolver, WikiClient};

fn controller_for(server: &ServerGuard) -> (AppController, Arc<Mutex<AppModel>>) {
    let client = WikiClient::with_endpoints(
        &format!("{}/w/api.php", server.url()),
        &format!("{}/commons/api.php", server.url()),
    );
    let model = Arc::new(Mutex::new(AppModel::new()));
    let controller = AppController::new(
        model.clone(),
        Arc::new(Mutex::new(None)),
        Resolver::new(client),
    );
    (controller, model)
}

/// Register the full three-call happy path for one article with one clip.
async fn mock_article_with_clip(server: &mut ServerGuard, query: &str, title: &str) {
    server
        .mock("GET", "/w/api.php")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("list".into(), "search".into()),
            Matcher::UrlEncoded("srsearch".into(), query.into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "batchcomplete": "",
                "query": {"search": [{"ns": 0, "pageid": 1, "title": title, "snippet": "s"}]}
            })
            .to_string(),
        )
        .create_async()
        .await;
    server
        .mock("GET", "/w/api.php")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("prop".into(), "images".into()),
            Matcher::UrlEncoded("pageids".into(), "1".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "batchcomplete": "",
                "query": {"pages": {"1": {
                    "pageid": 1, "ns": 0, "title": title,
                    "images": [{"ns": 6, "title": "File:clip.ogg"}]
                }}}
            })
            .to_string(),
        )
        .create_async()
        .await;
    server
        .mock("GET", "/commons/api.php")
        .match_query(Matcher::UrlEncoded("prop".into(), "imageinfo".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "batchcomplete": "",
                "query": {"pages": {"101": {
                    "pageid": 101, "ns": 6, "title": "File:clip.ogg",
                    "imageinfo": [{"url": "https://uploads.example/clip.ogg", "mime": "audio/ogg"}]
                }}}
            })
            .to_string(),
        )
        .create_async()
        .await;
}

#[tokio::test]
async fn search_commits_results_and_a_later_failure_replaces_them() {
    let mut server = mockito::Server::new_async().await;
    mock_article_with_clip(&mut server, "good query", "Good Song").await;
    server
        .mock("GET", "/w/api.php")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("list".into(), "search".into()),
            Matcher::UrlEncoded("srsearch".into(), "bad query".into()),
        ]))
        .with_status(503)
        .create_async()
        .await;

    let (controller, model) = controller_for(&server);

    controller.perform_search("good query").await;
    {
        let model = model.lock().await;
        let state = model.get_content_state().await;
        assert!(!state.is_loading);
        match state.view {
            ContentView::Results { entries, .. } => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].hit.title, "Good Song");
            }
            view => panic!("unexpected view: {view:?}"),
        }
    }

    // A failed search surfaces an error and replaces the list wholesale
    controller.perform_search("bad query").await;
    {
        let model = model.lock().await;
        let state = model.get_content_state().await;
        assert!(!state.is_loading);
        assert!(matches!(state.view, ContentView::Empty));
        assert!(model.has_error().await);
    }
}

#[tokio::test]
async fn blank_submit_is_a_no_op() {
    let mut server = mockito::Server::new_async().await;
    let any_request = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let (controller, model) = controller_for(&server);
    controller.perform_search("   ").await;

    let model = model.lock().await;
    assert!(!model.is_loading().await);
    assert!(matches!(
        model.get_content_state().await.view,
        ContentView::Empty
    ));
    any_request.assert_async().await;
}

#[tokio::test]
async fn featured_load_skips_pages_that_fail_to_resolve() {
    let mut server = mockito::Server::new_async().await;

    // One trending page resolves fully; the search fails for all others.
    mock_article_with_clip(&mut server, "Bohemian Rhapsody", "Bohemian Rhapsody").await;
    for title in [
        "Viva la Vida",
        "Yesterday (Beatles song)",
        "Imagine (John Lennon song)",
        "Billie Jean",
        "Hotel California",
        "Smells Like Teen Spirit",
        "Like a Rolling Stone",
    ] {
        server
            .mock("GET", "/w/api.php")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("list".into(), "search".into()),
                Matcher::UrlEncoded("srsearch".into(), title.into()),
            ]))
            .with_status(503)
            .create_async()
            .await;
    }

    let (controller, model) = controller_for(&server);
    controller.load_featured().await;

    let model = model.lock().await;
    let ui_state = model.get_ui_state().await;
    assert!(!ui_state.featured_loading);
    assert_eq!(ui_state.featured.len(), 1);
    assert_eq!(ui_state.featured[0].article, "Bohemian Rhapsody");
    assert_eq!(
        ui_state.featured[0].media.url,
        "https://uploads.example/clip.ogg"
    );
}
