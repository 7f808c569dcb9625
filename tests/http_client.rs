//! HTTP client behavior against a mock post API.

use blogview::api::{BlogClient, TOTAL_COUNT_HEADER};
use blogview::model::{FetchError, PageNumber, PageSize, PostId};
use httpmock::MockServer;

const TWO_POSTS: &str = r#"[
  {"userId": 1, "id": 11, "title": "et ea vero quia laudantium autem", "body": "delectus reiciendis"},
  {"userId": 1, "id": 12, "title": "in quibusdam tempore odit est dolorem", "body": "itaque id aut"}
]"#;

fn client(server: &MockServer) -> BlogClient {
    BlogClient::new(&server.base_url()).expect("client")
}

#[tokio::test]
async fn list_posts_sends_page_and_limit_and_reads_total() -> Result<(), FetchError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET")
            .path("/posts")
            .query_param("_page", "2")
            .query_param("_limit", "10");
        then.status(200)
            .header("content-type", "application/json")
            .header(TOTAL_COUNT_HEADER, "100")
            .body(TWO_POSTS);
    });

    let page = client(&server)
        .list_posts(PageNumber::saturating(2), PageSize::Ten)
        .await?;

    mock.assert();
    assert_eq!(page.total_count, 100);
    assert_eq!(page.posts.len(), 2);
    assert_eq!(page.posts[0].id(), PostId::new(11));
    assert_eq!(page.posts[1].title(), "in quibusdam tempore odit est dolorem");
    Ok(())
}

#[tokio::test]
async fn list_posts_sends_user_agent() -> Result<(), FetchError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET")
            .path("/posts")
            .header("user-agent", BlogClient::user_agent());
        then.status(200)
            .header(TOTAL_COUNT_HEADER, "0")
            .body("[]");
    });

    let page = client(&server)
        .list_posts(PageNumber::FIRST, PageSize::Fifty)
        .await?;

    mock.assert();
    assert!(page.posts.is_empty());
    assert_eq!(page.total_count, 0);
    Ok(())
}

#[tokio::test]
async fn list_posts_without_total_header_fails() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/posts");
        then.status(200).body(TWO_POSTS);
    });

    let err = client(&server)
        .list_posts(PageNumber::FIRST, PageSize::Ten)
        .await
        .expect_err("missing header should fail");
    assert!(matches!(err, FetchError::MissingTotalCount));
}

#[tokio::test]
async fn list_posts_with_non_numeric_total_fails() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/posts");
        then.status(200)
            .header(TOTAL_COUNT_HEADER, "lots")
            .body(TWO_POSTS);
    });

    let err = client(&server)
        .list_posts(PageNumber::FIRST, PageSize::Ten)
        .await
        .expect_err("bad header should fail");
    assert!(matches!(err, FetchError::MissingTotalCount));
}

#[tokio::test]
async fn list_posts_with_malformed_body_is_a_parse_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/posts");
        then.status(200)
            .header(TOTAL_COUNT_HEADER, "100")
            .body(r#"{"not": "an array"}"#);
    });

    let err = client(&server)
        .list_posts(PageNumber::FIRST, PageSize::Ten)
        .await
        .expect_err("object body should fail");
    assert!(matches!(err, FetchError::Parse(_)));
}

#[tokio::test]
async fn list_posts_server_error_is_http_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/posts");
        then.status(500);
    });

    let err = client(&server)
        .list_posts(PageNumber::FIRST, PageSize::Ten)
        .await
        .expect_err("500 should fail");
    assert!(matches!(err, FetchError::Http { status: 500, .. }));
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn get_post_returns_detail() -> Result<(), FetchError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET").path("/posts/7");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"userId": 1, "id": 7, "title": "magnam facilis autem", "body": "dolore placeat quibusdam"}"#);
    });

    let post = client(&server).get_post(PostId::new(7)).await?;

    mock.assert();
    assert_eq!(post.id(), PostId::new(7));
    assert_eq!(post.title(), "magnam facilis autem");
    assert_eq!(post.body(), "dolore placeat quibusdam");
    Ok(())
}

#[tokio::test]
async fn get_post_unknown_id_is_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/posts/999");
        then.status(404).body("{}");
    });

    let err = client(&server)
        .get_post(PostId::new(999))
        .await
        .expect_err("404 should fail");
    assert!(err.is_not_found());
    match err {
        FetchError::Http { url, .. } => assert!(url.ends_with("/posts/999")),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn unreachable_server_is_network_error() {
    // Port 9 (discard) is not listening in test environments.
    let client = BlogClient::new("http://127.0.0.1:9").expect("client");
    let err = client
        .get_post(PostId::new(1))
        .await
        .expect_err("connection should fail");
    assert!(matches!(err, FetchError::Network(_)));
}
