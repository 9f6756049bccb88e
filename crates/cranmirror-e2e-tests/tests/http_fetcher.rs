use cranmirror_e2e_tests::{init_tracing, spawn_truncated_body_server, unreachable_url};
use cranmirror_lib::fetch::{FetchError, Fetcher, HttpFetcher, SourceFailure};
use reqwest::StatusCode;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount(server: &MockServer, route: &str, response: ResponseTemplate, hits: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .expect(hits)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_first_ok_candidate_wins_after_bad_statuses() {
    init_tracing();
    let server = MockServer::start().await;
    mount(&server, "/a/abc_1.0.tar.gz", ResponseTemplate::new(404), 1).await;
    mount(&server, "/b/abc_1.0.tar.gz", ResponseTemplate::new(503), 1).await;
    mount(
        &server,
        "/c/abc_1.0.tar.gz",
        ResponseTemplate::new(200).set_body_bytes(b"abc tarball".to_vec()),
        1,
    )
    .await;

    let urls = vec![
        format!("{}/a/abc_1.0.tar.gz", server.uri()),
        format!("{}/b/abc_1.0.tar.gz", server.uri()),
        format!("{}/c/abc_1.0.tar.gz", server.uri()),
    ];

    let fetched = HttpFetcher::new().unwrap().fetch(&urls).await.unwrap();

    assert_eq!(fetched.url, urls[2]);
    assert_eq!(&fetched.body[..], b"abc tarball");
}

#[tokio::test]
async fn test_transport_error_falls_through_to_next_candidate() {
    init_tracing();
    let server = MockServer::start().await;
    mount(
        &server,
        "/abc_1.0.zip",
        ResponseTemplate::new(200).set_body_bytes(b"zip".to_vec()),
        1,
    )
    .await;

    let urls = vec![
        unreachable_url("abc_1.0.zip"),
        format!("{}/abc_1.0.zip", server.uri()),
    ];

    let fetched = HttpFetcher::new().unwrap().fetch(&urls).await.unwrap();

    assert_eq!(fetched.url, urls[1]);
    assert_eq!(&fetched.body[..], b"zip");
}

#[tokio::test]
async fn test_later_candidates_are_not_requested_after_success() {
    init_tracing();
    let server = MockServer::start().await;
    mount(
        &server,
        "/primary/x.tgz",
        ResponseTemplate::new(200).set_body_bytes(b"x".to_vec()),
        1,
    )
    .await;
    mount(&server, "/secondary/x.tgz", ResponseTemplate::new(200), 0).await;

    let urls = vec![
        format!("{}/primary/x.tgz", server.uri()),
        format!("{}/secondary/x.tgz", server.uri()),
    ];

    let fetched = HttpFetcher::new().unwrap().fetch(&urls).await.unwrap();
    assert_eq!(fetched.url, urls[0]);
}

#[tokio::test]
async fn test_all_bad_statuses_yield_no_suitable_source_without_last_error() {
    init_tracing();
    let server = MockServer::start().await;
    mount(&server, "/a/x.tgz", ResponseTemplate::new(404), 1).await;
    mount(&server, "/b/x.tgz", ResponseTemplate::new(500), 1).await;

    let urls = vec![
        format!("{}/a/x.tgz", server.uri()),
        format!("{}/b/x.tgz", server.uri()),
    ];

    let err = HttpFetcher::new().unwrap().fetch(&urls).await.unwrap_err();

    let FetchError::NoSuitableSource { attempts } = &err else {
        panic!("expected NoSuitableSource, got {err:?}");
    };
    assert_eq!(attempts.len(), 2);
    assert!(matches!(
        &attempts[0],
        SourceFailure::BadStatus { status, .. } if *status == StatusCode::NOT_FOUND
    ));
    assert!(matches!(
        &attempts[1],
        SourceFailure::BadStatus { status, .. } if *status == StatusCode::INTERNAL_SERVER_ERROR
    ));
    assert!(err.last_transport_error().is_none());
    assert!(err.to_string().ends_with("last error: none"), "{err}");
}

#[tokio::test]
async fn test_no_suitable_source_keeps_last_transport_error() {
    init_tracing();
    let server = MockServer::start().await;
    mount(&server, "/x.tgz", ResponseTemplate::new(404), 1).await;

    let urls = vec![unreachable_url("x.tgz"), format!("{}/x.tgz", server.uri())];

    let err = HttpFetcher::new().unwrap().fetch(&urls).await.unwrap_err();

    let last = err
        .last_transport_error()
        .expect("unreachable candidate should be reported");
    assert_eq!(last.url(), urls[0]);
    assert!(err.to_string().contains(&urls[0]), "{err}");
}

#[tokio::test]
async fn test_body_read_failure_aborts_remaining_candidates() {
    init_tracing();
    let truncated = spawn_truncated_body_server().await.unwrap();
    let server = MockServer::start().await;
    mount(
        &server,
        "/fallback.tar.gz",
        ResponseTemplate::new(200).set_body_bytes(b"full".to_vec()),
        0,
    )
    .await;

    let urls = vec![truncated.clone(), format!("{}/fallback.tar.gz", server.uri())];

    let err = HttpFetcher::new().unwrap().fetch(&urls).await.unwrap_err();

    match &err {
        FetchError::BodyRead { url, .. } => assert_eq!(url, &truncated),
        other => panic!("expected BodyRead, got {other:?}"),
    }
    let message = err.to_string();
    let detail = message
        .split_once(": ")
        .map(|(_, detail)| detail)
        .unwrap_or_default();
    assert!(!detail.is_empty(), "underlying error missing from {message:?}");
}

#[tokio::test]
async fn test_empty_candidate_list() {
    let err = HttpFetcher::new().unwrap().fetch(&[]).await.unwrap_err();
    assert!(matches!(err, FetchError::NoSuitableSource { ref attempts } if attempts.is_empty()));
}
