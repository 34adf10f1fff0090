use crate::common;
use mockito::Matcher;
use placemark_client::prelude::*;
use serde_json::json;

#[tokio::test]
async fn test_login_stores_session() {
    let mut server = mockito::Server::new_async().await;
    let login = server
        .mock("POST", "/auth/login/")
        .match_body(Matcher::PartialJson(json!({"username": "minji"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::login_body().to_string())
        .create_async()
        .await;

    let client = common::test_client(&server.url());
    let session = client.login().await.expect("login");

    assert_eq!(session.user.username, "minji");
    assert!(!session.needs_refresh(3600));
    assert!(client.auth().session().await.is_some());
    login.assert_async().await;
}

#[tokio::test]
async fn test_login_bad_credentials() {
    let mut server = mockito::Server::new_async().await;
    let _login = server
        .mock("POST", "/auth/login/")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(json!({"non_field_errors": ["Unable to log in."]}).to_string())
        .create_async()
        .await;

    let client = common::test_client(&server.url());
    let err = client.login().await.expect_err("login must fail");

    assert!(matches!(err, AppError::Auth(AuthError::BadCredentials)));
    assert!(client.auth().session().await.is_none());
}

#[tokio::test]
async fn test_refresh_replaces_access_token() {
    let mut server = mockito::Server::new_async().await;
    let _login = server
        .mock("POST", "/auth/login/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::login_body().to_string())
        .create_async()
        .await;
    let refresh = server
        .mock("POST", "/auth/token/refresh/")
        .match_body(Matcher::PartialJson(json!({"refresh": "header.refresh.sig"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"access": "header.access2.sig"}).to_string())
        .create_async()
        .await;

    let client = common::test_client(&server.url());
    let session = client.login().await.expect("login");
    let refreshed = client.auth().refresh(&session).await.expect("refresh");

    assert_eq!(refreshed.access.token, "header.access2.sig");
    assert_eq!(refreshed.refresh.token, session.refresh.token);
    refresh.assert_async().await;
}

#[tokio::test]
async fn test_rejected_refresh_maps_to_refresh_rejected() {
    let mut server = mockito::Server::new_async().await;
    let _login = server
        .mock("POST", "/auth/login/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::login_body().to_string())
        .create_async()
        .await;
    let _refresh = server
        .mock("POST", "/auth/token/refresh/")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(json!({"code": "token_not_valid"}).to_string())
        .create_async()
        .await;

    let client = common::test_client(&server.url());
    let session = client.login().await.expect("login");
    let err = client.auth().refresh(&session).await.expect_err("rejected");

    assert!(matches!(err, AuthError::RefreshRejected));
}

#[tokio::test]
async fn test_auth_cookies_are_forwarded() {
    let mut server = mockito::Server::new_async().await;
    let _login = server
        .mock("POST", "/auth/login/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_header("set-cookie", "placemark-auth=abc123; Path=/")
        .with_body(common::login_body().to_string())
        .create_async()
        .await;
    let user = server
        .mock("GET", "/auth/user/")
        .match_header("cookie", Matcher::Regex("placemark-auth=abc123".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::login_body()["user"].to_string())
        .create_async()
        .await;

    let client = common::test_client(&server.url());
    assert!(client.forwards_credentials());

    client.login().await.expect("login");
    let profile = client.current_user().await.expect("user");

    assert_eq!(profile.pk, 7);
    user.assert_async().await;
}

#[tokio::test]
async fn test_logout_clears_session() {
    let mut server = mockito::Server::new_async().await;
    let _login = server
        .mock("POST", "/auth/login/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::login_body().to_string())
        .create_async()
        .await;
    let logout = server
        .mock("POST", "/auth/logout/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"detail": "Successfully logged out."}).to_string())
        .create_async()
        .await;

    let client = common::test_client(&server.url());
    client.login().await.expect("login");
    client.logout().await.expect("logout");

    assert!(client.auth().session().await.is_none());
    logout.assert_async().await;
}
