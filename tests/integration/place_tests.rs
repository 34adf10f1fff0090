use crate::common;
use mockito::Matcher;
use placemark_client::application::models::BookmarkOutcome;
use placemark_client::prelude::*;
use serde_json::json;

#[tokio::test]
async fn test_list_places_first_page() {
    let mut server = mockito::Server::new_async().await;
    let feed = server
        .mock("GET", "/places/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("page_size".into(), "20".into()),
        ]))
        .match_header("x-request-id", Matcher::Regex("^.{12}$".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::places_page_body().to_string())
        .create_async()
        .await;

    let client = common::test_client(&server.url());
    assert_eq!(client.base_url(), server.url());

    let page = client.places_page(1).await.expect("places");
    assert_eq!(page.count, 1);
    assert_eq!(page.results[0].name, "Mokran");
    feed.assert_async().await;
}

#[tokio::test]
async fn test_search_places() {
    let mut server = mockito::Server::new_async().await;
    let _search = server
        .mock("GET", "/places/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("search".into(), "bulgogi".into()),
            Matcher::UrlEncoded("page".into(), "1".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::places_page_body().to_string())
        .create_async()
        .await;

    let client = common::test_client(&server.url());
    let page = client.search("bulgogi", 1).await.expect("search");
    assert_eq!(page.results.len(), 1);
}

#[tokio::test]
async fn test_get_place_not_found() {
    let mut server = mockito::Server::new_async().await;
    let _missing = server
        .mock("GET", "/places/99/")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(json!({"detail": "Not found."}).to_string())
        .create_async()
        .await;

    let client = common::test_client(&server.url());
    let err = client.place(99).await.expect_err("missing place");
    assert!(matches!(err, AppError::NotFound));
}

#[tokio::test]
async fn test_list_reviews_for_place() {
    let mut server = mockito::Server::new_async().await;
    let _reviews = server
        .mock("GET", "/reviews/")
        .match_query(Matcher::UrlEncoded("place_id".into(), "12".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "count": 1,
                "next": null,
                "previous": null,
                "results": [{
                    "id": 3,
                    "place": 12,
                    "user": "minji",
                    "content": "Great bulgogi",
                    "rating": 5,
                    "created_at": "2026-01-11T09:30:00Z"
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = common::test_client(&server.url());
    let page = client.reviews(12).await.expect("reviews");
    assert_eq!(page.results[0].rating, 5);
}

#[tokio::test]
async fn test_create_bookmark() {
    let mut server = mockito::Server::new_async().await;
    let created = server
        .mock("POST", "/bookmarks/new/")
        .match_body(Matcher::PartialJson(json!({"place_id": 12})))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": 9,
                "place": common::place_body(12, "Mokran"),
                "created_at": "2026-02-01T12:00:00Z"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = common::test_client(&server.url());
    let outcome = client.bookmark(12).await.expect("bookmark");

    assert!(matches!(outcome, BookmarkOutcome::Created(b) if b.id == 9));
    created.assert_async().await;
}

#[tokio::test]
async fn test_create_bookmark_already_exists() {
    let mut server = mockito::Server::new_async().await;
    let _dup = server
        .mock("POST", "/bookmarks/new/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"alreadyExists": "True"}).to_string())
        .create_async()
        .await;

    let client = common::test_client(&server.url());
    let outcome = client.bookmark(12).await.expect("bookmark");
    assert!(matches!(outcome, BookmarkOutcome::AlreadyExists));
}

#[tokio::test]
async fn test_delete_bookmark() {
    let mut server = mockito::Server::new_async().await;
    let deleted = server
        .mock("DELETE", "/bookmarks/9/delete/")
        .with_status(204)
        .create_async()
        .await;

    let client = common::test_client(&server.url());
    client.unbookmark(9).await.expect("unbookmark");
    deleted.assert_async().await;
}

#[tokio::test]
async fn test_expired_token_triggers_relogin_before_retry() {
    let mut server = mockito::Server::new_async().await;
    let _expired = server
        .mock("GET", "/bookmarks/")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(json!({"code": "token_not_valid"}).to_string())
        .expect_at_least(1)
        .create_async()
        .await;
    let login = server
        .mock("POST", "/auth/login/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::login_body().to_string())
        .create_async()
        .await;

    let client = common::test_client(&server.url());
    let err = client.bookmarks().await.expect_err("still expired");

    // The retry path logged in once, then surfaced the persistent 401
    assert!(matches!(err, AppError::TokenExpired));
    login.assert_async().await;
}
