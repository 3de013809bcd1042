use anyhow::Result;
use httpmock::prelude::*;
use poetry_explorer::{ErrorKind, PoetryDbClient, SearchEngine, SearchSession, ViewState};
use serde_json::json;
use std::time::Duration;

fn engine_for(base_url: &str) -> SearchEngine<PoetryDbClient> {
    let client = PoetryDbClient::with_client(reqwest::Client::new(), base_url).unwrap();
    SearchEngine::new(client)
}

fn poem(title: &str, author: &str) -> serde_json::Value {
    json!({"title": title, "author": author, "lines": ["first line", "", "last line"], "linecount": "3"})
}

fn pairs(poems: &[poetry_explorer::Poem]) -> Vec<(String, String)> {
    poems
        .iter()
        .map(|p| (p.title.clone(), p.author.clone()))
        .collect()
}

#[tokio::test]
async fn test_combined_search_merges_and_dedups() -> Result<()> {
    let server = MockServer::start();
    let author_mock = server.mock(|when, then| {
        when.method(GET).path("/author/X");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!([poem("A", "X")]));
    });
    let title_mock = server.mock(|when, then| {
        when.method(GET).path("/title/A");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!([poem("A", "X"), poem("B", "Y")]));
    });

    let engine = engine_for(&server.base_url());
    let poems = engine.search_by_author_and_title("X", "A").await?;

    author_mock.assert_hits(1);
    title_mock.assert_hits(1);

    let mut found = pairs(&poems);
    found.sort();
    assert_eq!(
        found,
        vec![
            ("A".to_string(), "X".to_string()),
            ("B".to_string(), "Y".to_string())
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_single_field_issues_one_request() -> Result<()> {
    let server = MockServer::start();
    let author_mock = server.mock(|when, then| {
        when.method(GET).path_contains("/author/");
        then.status(200).json_body(json!([]));
    });
    let title_mock = server.mock(|when, then| {
        when.method(GET).path("/title/Sonnet");
        then.status(200)
            .json_body(json!([poem("Sonnet", "Shakespeare"), poem("Sonnet", "Milton")]));
    });

    let engine = engine_for(&server.base_url());
    let poems = engine.search_by_author_and_title("", "  Sonnet  ").await?;

    author_mock.assert_hits(0);
    title_mock.assert_hits(1);
    assert_eq!(
        pairs(&poems),
        vec![
            ("Sonnet".to_string(), "Shakespeare".to_string()),
            ("Sonnet".to_string(), "Milton".to_string())
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_empty_search_issues_no_requests() {
    let server = MockServer::start();
    let any_mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(json!([]));
    });

    let engine = engine_for(&server.base_url());
    let err = engine.search_by_author_and_title("  ", "").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    any_mock.assert_hits(0);
}

#[tokio::test]
async fn test_order_within_each_lookup_is_preserved() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/author/Poe");
        then.status(200).json_body(json!([
            poem("The Raven", "Edgar Allan Poe"),
            poem("Annabel Lee", "Edgar Allan Poe"),
            poem("Eldorado", "Edgar Allan Poe")
        ]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/title/Raven");
        then.status(200).json_body(json!([
            poem("The Raven", "Edgar Allan Poe"),
            poem("Raven Song", "Someone Else")
        ]));
    });

    let engine = engine_for(&server.base_url());
    let poems = engine.search_by_author_and_title("Poe", "Raven").await?;
    let titles: Vec<&str> = poems.iter().map(|p| p.title.as_str()).collect();
    let position = |t: &str| titles.iter().position(|x| *x == t).unwrap();

    assert_eq!(poems.len(), 4);
    assert!(position("Annabel Lee") < position("Eldorado"));
    assert_eq!(
        titles.iter().filter(|t| **t == "The Raven").count(),
        1
    );
    Ok(())
}

#[tokio::test]
async fn test_partial_failure_returns_no_results() {
    let server = MockServer::start();
    let author_mock = server.mock(|when, then| {
        when.method(GET).path("/author/Keats");
        then.status(200).json_body(json!([poem("To Autumn", "John Keats")]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/title/Missing");
        then.status(404).delay(Duration::from_millis(100));
    });

    let engine = engine_for(&server.base_url());
    let err = engine
        .search_by_author_and_title("Keats", "Missing")
        .await
        .unwrap_err();

    author_mock.assert_hits(1);
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(
        err.to_string(),
        "Title search: No results found. Please try a different search."
    );
}

#[tokio::test]
async fn test_author_not_found_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/author/Nobody");
        then.status(404);
    });

    let engine = engine_for(&server.base_url());
    let err = engine
        .search_by_author_and_title("Nobody", "")
        .await
        .unwrap_err();

    assert!(err.to_string().contains("No results found"));
}

#[tokio::test]
async fn test_client_fault_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/author/Bad");
        then.status(400);
    });

    let engine = engine_for(&server.base_url());
    let err = engine.search_by_author_and_title("Bad", "").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ClientFault);
    assert_eq!(err.to_string(), "Request error (400): Bad Request");
}

#[tokio::test]
async fn test_unreachable_host_reports_base_url() {
    // Nothing listens on port 1.
    let engine = engine_for("http://127.0.0.1:1");
    let err = engine
        .search_by_author_and_title("Anyone", "")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Network);
    let message = err.to_string();
    assert!(message.contains("Network error"));
    assert!(message.contains("http://127.0.0.1:1"));
}

#[tokio::test]
async fn test_random_empty_list_is_malformed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/random");
        then.status(200).json_body(json!([]));
    });

    let engine = engine_for(&server.base_url());
    let err = engine.random_poem().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MalformedPayload);
    assert!(err.to_string().contains("Invalid response format"));
}

#[tokio::test]
async fn test_session_end_to_end() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/author/Dickinson");
        then.status(200)
            .json_body(json!({"poems": [poem("Hope", "Emily Dickinson")]}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/title/Nothing");
        then.status(200)
            .json_body(json!({"status": 404, "reason": "Not found"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/random");
        then.status(503);
    });

    let engine = engine_for(&server.base_url());
    let mut session = SearchSession::new();

    session.search(&engine, "Dickinson", "").await;
    assert_eq!(session.displayed_poems().len(), 1);

    let state = session.search(&engine, "", "Nothing").await;
    assert!(matches!(state, ViewState::Empty { .. }));

    let state = session.random(&engine).await;
    match state {
        ViewState::Error { kind, message } => {
            assert_eq!(*kind, ErrorKind::ServerFault);
            assert!(message.starts_with("Server error (503)"));
        }
        other => panic!("unexpected state: {:?}", other),
    }
    assert!(session.displayed_poems().is_empty());
    Ok(())
}
