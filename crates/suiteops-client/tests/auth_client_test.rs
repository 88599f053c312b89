//! Contract tests for AuthClient against the PMS auth endpoints.
//!
//! These tests use wiremock to simulate the live service. Paths, request
//! shapes, and response shapes match what the dashboard exchanges with
//! the API.

use suiteops_client::auth::{RegisterRequest, SignInRequest};
use suiteops_client::{PmsApiConfig, PmsClient};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(mock_server: &MockServer) -> PmsClient {
    PmsClient::new(PmsApiConfig::local_mock(mock_server.uri().parse().unwrap())).unwrap()
}

// ── POST /signIn ─────────────────────────────────────────────────────

#[tokio::test]
async fn sign_in_exchanges_credentials_for_a_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/signIn"))
        .and(body_json(serde_json::json!({
            "email": "ana@example.com",
            "password": "hunter22"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 7,
            "name": "Ana Souza",
            "email": "ana@example.com",
            "token": "tok-abc",
            "refreshToken": "tok-refresh"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let session = client
        .auth()
        .sign_in(&SignInRequest {
            email: "ana@example.com".into(),
            password: "hunter22".into(),
        })
        .await
        .unwrap();

    assert_eq!(session.id.value(), 7);
    assert_eq!(session.name.as_deref(), Some("Ana Souza"));
    assert_eq!(session.token, "tok-abc");
    assert_eq!(session.refresh_token.as_deref(), Some("tok-refresh"));
}

#[tokio::test]
async fn sign_in_rejection_surfaces_the_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/signIn"))
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"error":"bad credentials"}"#))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client
        .auth()
        .sign_in(&SignInRequest {
            email: "ana@example.com".into(),
            password: "wrong".into(),
        })
        .await;

    match result.unwrap_err() {
        suiteops_client::ApiError::Api { status, body, .. } => {
            assert_eq!(status, 401);
            assert!(body.contains("bad credentials"));
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn sign_in_tolerates_a_minimal_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/signIn"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 7,
            "token": "tok-abc"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let session = client
        .auth()
        .sign_in(&SignInRequest {
            email: "ana@example.com".into(),
            password: "hunter22".into(),
        })
        .await
        .unwrap();

    assert!(session.name.is_none());
    assert!(session.refresh_token.is_none());
}

// ── POST /newuser ────────────────────────────────────────────────────

#[tokio::test]
async fn register_sends_wire_field_names() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/newuser"))
        .and(body_json(serde_json::json!({
            "nome": "Ana Souza",
            "email": "ana@example.com",
            "telefone": "+5511999998888",
            "dataNascimento": "1990-05-20",
            "password": "hunter22",
            "timeDoCoracao": "Flamengo"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client
        .auth()
        .register(&RegisterRequest {
            name: "Ana Souza".into(),
            email: "ana@example.com".into(),
            phone: "+5511999998888".into(),
            birth_date: "1990-05-20".into(),
            password: "hunter22".into(),
            favorite_team: "Flamengo".into(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn register_conflict_is_an_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/newuser"))
        .respond_with(ResponseTemplate::new(409).set_body_string("e-mail already registered"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client
        .auth()
        .register(&RegisterRequest {
            name: "Ana Souza".into(),
            email: "ana@example.com".into(),
            phone: "+5511999998888".into(),
            birth_date: "1990-05-20".into(),
            password: "hunter22".into(),
            favorite_team: "Flamengo".into(),
        })
        .await;

    assert!(matches!(
        result.unwrap_err(),
        suiteops_client::ApiError::Api { status: 409, .. }
    ));
}

// ── Session token attachment ─────────────────────────────────────────

#[tokio::test]
async fn configured_session_token_rides_as_a_bearer_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/categorias"))
        .and(header("authorization", "Bearer tok-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = PmsApiConfig::local_mock(mock_server.uri().parse().unwrap())
        .with_session_token("tok-abc".into());
    let client = PmsClient::new(config).unwrap();

    let categories = client.suites().categories().await.unwrap();
    assert!(categories.is_empty());
}
