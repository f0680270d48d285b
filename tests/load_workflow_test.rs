//! Integration tests for the load workflow.
//!
//! Drives `App` end to end with the in-crate mocks: scripted randomness,
//! canned HTTP responses, and the real spawned fetch task reporting back
//! over the message channel.

use bytes::Bytes;
use mushaf::adapters::mock::{MockHttpClient, MockResponse, SeqRandom};
use mushaf::api::QuranClient;
use mushaf::app::{App, DEFAULT_SURAH_LABEL};
use mushaf::error::FALLBACK_ERROR_MESSAGE;
use mushaf::traits::Response;
use std::sync::Arc;

const BASE_URL: &str = "https://example.com/v1";

fn fatiha_envelope() -> &'static str {
    r#"{
        "code": 200,
        "status": "OK",
        "data": {
            "ayahs": [
                {
                    "text": "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ",
                    "numberInSurah": 1,
                    "surah": { "number": 1, "name": "الفاتحة" }
                }
            ]
        }
    }"#
}

fn build_app(mock: &MockHttpClient, draws: Vec<u16>) -> App {
    let client = QuranClient::with_url(Arc::new(mock.clone()), BASE_URL);
    App::new(client, Box::new(SeqRandom::new(draws)))
}

/// Run one full load: trigger, wait for the fetch task's message, apply it.
async fn run_one_load(app: &mut App) {
    let mut rx = app.message_rx.take().expect("receiver already taken");
    app.load_random_page();
    let msg = rx.recv().await.expect("fetch task should report back");
    app.handle_message(msg);
    app.message_rx = Some(rx);
}

#[tokio::test]
async fn test_successful_load_builds_the_page_view() {
    let mock = MockHttpClient::new();
    mock.set_default_response(MockResponse::Success(Response::new(
        200,
        Bytes::from(fatiha_envelope()),
    )));

    let mut app = build_app(&mock, vec![1]);
    run_one_load(&mut app).await;

    assert!(!app.loading);
    assert!(app.error.is_none());
    assert_eq!(app.last_shown(), Some(1));

    let view = app.current_page.as_ref().unwrap();
    assert_eq!(view.page_number, 1);
    assert_eq!(view.surah_name, "الفاتحة");
    assert_eq!(view.content.len(), 1);
    assert_eq!(view.content[0].number, 1);
    assert!(view.show_basmala);
}

#[tokio::test]
async fn test_exactly_one_request_per_workflow() {
    let mock = MockHttpClient::new();
    mock.set_default_response(MockResponse::Success(Response::new(
        200,
        Bytes::from(fatiha_envelope()),
    )));

    let mut app = build_app(&mock, vec![17]);
    run_one_load(&mut app).await;

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0],
        format!("{}/page/17/quran-uthmani", BASE_URL)
    );
}

#[tokio::test]
async fn test_failed_load_keeps_previous_page_and_surfaces_message() {
    let mock = MockHttpClient::new();
    mock.set_default_response(MockResponse::Success(Response::new(
        200,
        Bytes::from(fatiha_envelope()),
    )));

    let mut app = build_app(&mock, vec![1, 2]);
    run_one_load(&mut app).await;
    let shown_before = app.current_page.clone();

    // Second load hits a 404 whose body carries the status text.
    mock.set_default_response(MockResponse::Success(Response::new(
        404,
        Bytes::from(r#"{ "code": 404, "status": "Page not found" }"#),
    )));
    run_one_load(&mut app).await;

    assert!(!app.loading);
    assert_eq!(app.error.as_deref(), Some("Page not found"));
    assert_eq!(app.current_page, shown_before);
    // The failed page was never recorded as shown.
    assert_eq!(app.last_shown(), Some(1));
}

#[tokio::test]
async fn test_failure_without_status_text_uses_fallback_message() {
    let mock = MockHttpClient::new();
    mock.set_default_response(MockResponse::Success(Response::new(
        500,
        Bytes::from("internal error"),
    )));

    let mut app = build_app(&mock, vec![3]);
    run_one_load(&mut app).await;

    assert_eq!(app.error.as_deref(), Some(FALLBACK_ERROR_MESSAGE));
    assert!(app.current_page.is_none());
}

#[tokio::test]
async fn test_error_cleared_on_next_load() {
    let mock = MockHttpClient::new();
    mock.set_default_response(MockResponse::Success(Response::new(
        500,
        Bytes::from("boom"),
    )));

    let mut app = build_app(&mock, vec![3, 4]);
    run_one_load(&mut app).await;
    assert!(app.error.is_some());

    mock.set_default_response(MockResponse::Success(Response::new(
        200,
        Bytes::from(fatiha_envelope()),
    )));
    run_one_load(&mut app).await;

    assert!(app.error.is_none());
    assert!(app.current_page.is_some());
}

#[tokio::test]
async fn test_identical_content_yields_identical_views() {
    let mock = MockHttpClient::new();
    mock.set_default_response(MockResponse::Success(Response::new(
        200,
        Bytes::from(fatiha_envelope()),
    )));

    let mut app = build_app(&mock, vec![5, 9]);
    run_one_load(&mut app).await;
    let first = app.current_page.clone().unwrap();

    run_one_load(&mut app).await;
    let second = app.current_page.clone().unwrap();

    // Same content both times, apart from the page number the anti-repeat
    // rule selected.
    assert_eq!(first.surah_name, second.surah_name);
    assert_eq!(first.content, second.content);
    assert_eq!(first.show_basmala, second.show_basmala);
    assert_eq!(first.page_number, 5);
    assert_eq!(second.page_number, 9);
}

#[tokio::test]
async fn test_empty_page_gets_default_label_and_no_basmala() {
    let mock = MockHttpClient::new();
    mock.set_default_response(MockResponse::Success(Response::new(
        200,
        Bytes::from(r#"{ "code": 200, "status": "OK", "data": { "ayahs": [] } }"#),
    )));

    let mut app = build_app(&mock, vec![8]);
    run_one_load(&mut app).await;

    let view = app.current_page.as_ref().unwrap();
    assert_eq!(view.surah_name, DEFAULT_SURAH_LABEL);
    assert!(!view.show_basmala);
    assert!(view.content.is_empty());
}

#[tokio::test]
async fn test_trigger_while_loading_is_ignored() {
    let mock = MockHttpClient::new();
    mock.set_default_response(MockResponse::Success(Response::new(
        200,
        Bytes::from(fatiha_envelope()),
    )));

    let mut app = build_app(&mock, vec![5, 6]);
    let mut rx = app.message_rx.take().unwrap();

    app.load_random_page();
    // A second trigger while the first is in flight does nothing.
    app.load_random_page();

    let msg = rx.recv().await.unwrap();
    app.handle_message(msg);
    assert!(rx.try_recv().is_err());

    assert_eq!(mock.requests().len(), 1);
    assert_eq!(app.current_page.as_ref().unwrap().page_number, 5);
}
