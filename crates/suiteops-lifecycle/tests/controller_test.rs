//! Controller tests against a simulated PMS service.
//!
//! Each scenario mounts exactly the endpoints the action is allowed to
//! touch; command mocks carry `expect(0)` on blocked paths so a gating
//! regression fails loudly.

use suiteops_client::{PmsApiConfig, PmsClient};
use suiteops_core::{MovementId, SuiteId, SuiteStatus, UserId};
use suiteops_lifecycle::{ActionBlocked, LifecycleError, MovementController, Navigation};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn controller(mock_server: &MockServer) -> MovementController {
    let client =
        PmsClient::new(PmsApiConfig::local_mock(mock_server.uri().parse().unwrap())).unwrap();
    MovementController::new(client)
}

fn suite_body(status: &str) -> serde_json::Value {
    serde_json::json!({"suiId": 3, "suiDescricao": "103", "suiStatus": status})
}

/// Mount `/searchSuite/3` answering `first` for the first two fetches
/// (opening the view and the pre-command authorization check), then
/// `rest` forever (the post-command re-fetch).
async fn status_sequence(mock_server: &MockServer, first: &str, rest: &str) {
    Mock::given(method("GET"))
        .and(path("/searchSuite/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(suite_body(first)))
        .up_to_n_times(2)
        .mount(mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/searchSuite/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(suite_body(rest)))
        .mount(mock_server)
        .await;
}

// ── Check-in ─────────────────────────────────────────────────────────

#[tokio::test]
async fn check_in_commands_then_refetches_status() {
    let mock_server = MockServer::start().await;
    status_sequence(&mock_server, "A", "O").await;

    Mock::given(method("POST"))
        .and(path("/entrada"))
        .and(body_json(serde_json::json!({
            "suiId": 3,
            "usrId": 7,
            "qtdUsrExtra": 2
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "movId": 41,
            "movSuiId": 3,
            "movSuiEntrada": "2024-01-01T10:00:00Z"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let controller = controller(&mock_server);
    let mut view = controller.open_view(SuiteId::new(3)).await.unwrap();
    assert_eq!(view.status, Some(SuiteStatus::Available));

    let nav = controller
        .check_in(&mut view, UserId::new(7), 2)
        .await
        .unwrap();

    assert_eq!(nav, Navigation::Dashboard);
    assert_eq!(view.status, Some(SuiteStatus::Occupied));
    assert!(view.movement.is_none());
}

#[tokio::test]
async fn check_in_is_blocked_when_occupied() {
    let mock_server = MockServer::start().await;
    status_sequence(&mock_server, "O", "O").await;

    Mock::given(method("POST"))
        .and(path("/entrada"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let controller = controller(&mock_server);
    let mut view = controller.open_view(SuiteId::new(3)).await.unwrap();

    let err = controller
        .check_in(&mut view, UserId::new(7), 0)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        LifecycleError::Blocked(ActionBlocked::SuiteNotAvailable {
            status: SuiteStatus::Occupied
        })
    ));
    // Blocked action mutates nothing.
    assert_eq!(view.status, Some(SuiteStatus::Occupied));
    assert!(view.movement.is_none());
}

#[tokio::test]
async fn failed_check_in_command_leaves_the_view_unchanged() {
    let mock_server = MockServer::start().await;
    status_sequence(&mock_server, "A", "A").await;

    Mock::given(method("POST"))
        .and(path("/entrada"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let controller = controller(&mock_server);
    let mut view = controller.open_view(SuiteId::new(3)).await.unwrap();

    let err = controller
        .check_in(&mut view, UserId::new(7), 1)
        .await
        .unwrap_err();

    assert!(matches!(err, LifecycleError::Api(_)));
    assert_eq!(view.status, Some(SuiteStatus::Available));
    assert!(view.movement.is_none());
}

// ── Closing ──────────────────────────────────────────────────────────

#[tokio::test]
async fn close_resolves_the_open_movement_when_unknown() {
    let mock_server = MockServer::start().await;
    status_sequence(&mock_server, "O", "L").await;

    Mock::given(method("GET"))
        .and(path("/searchMovim/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "movId": 41,
            "movSuiId": 3,
            "movSuiEntrada": "2024-01-01T10:00:00Z"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/fechar"))
        .and(body_json(serde_json::json!({"movim": 41})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "movId": 41,
            "movSuiId": 3,
            "movSuiEntrada": "2024-01-01T10:00:00Z",
            "movSuiSaida": "2024-01-01T11:05:00Z"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let controller = controller(&mock_server);
    let mut view = controller.open_view(SuiteId::new(3)).await.unwrap();

    let nav = controller.close(&mut view).await.unwrap();

    assert_eq!(nav, Navigation::Dashboard);
    assert_eq!(view.status, Some(SuiteStatus::Cleaning));
    assert!(view.movement.is_none());
}

#[tokio::test]
async fn close_without_an_open_movement_is_a_domain_error() {
    let mock_server = MockServer::start().await;
    status_sequence(&mock_server, "O", "O").await;

    Mock::given(method("GET"))
        .and(path("/searchMovim/3"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/fechar"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let controller = controller(&mock_server);
    let mut view = controller.open_view(SuiteId::new(3)).await.unwrap();

    let err = controller.close(&mut view).await.unwrap_err();
    assert!(matches!(
        err,
        LifecycleError::NoOpenMovement { suite } if suite == SuiteId::new(3)
    ));
}

#[tokio::test]
async fn close_is_blocked_from_an_available_suite() {
    let mock_server = MockServer::start().await;
    status_sequence(&mock_server, "A", "A").await;

    Mock::given(method("GET"))
        .and(path("/searchMovim/3"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/fechar"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let controller = controller(&mock_server);
    let mut view = controller.open_view(SuiteId::new(3)).await.unwrap();

    let err = controller.close(&mut view).await.unwrap_err();
    assert!(matches!(
        err,
        LifecycleError::Blocked(ActionBlocked::SuiteNotOccupied {
            status: SuiteStatus::Available
        })
    ));
}

// ── Order ────────────────────────────────────────────────────────────

#[tokio::test]
async fn order_is_a_pure_read() {
    let mock_server = MockServer::start().await;

    // Exactly one status fetch: the authorization check. A re-fetch
    // after the read would trip the expect(1).
    Mock::given(method("GET"))
        .and(path("/searchSuite/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(suite_body("O")))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/searchMovim/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "movId": 41,
            "movSuiId": 3,
            "movSuiEntrada": "2024-01-01T10:00:00Z"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let controller = controller(&mock_server);
    let mut view = suiteops_lifecycle::SuiteView::new(SuiteId::new(3));

    let nav = controller.order(&mut view).await.unwrap();

    assert_eq!(nav, Navigation::Order(MovementId::new(41)));
    assert_eq!(view.movement.as_ref().unwrap().id, MovementId::new(41));
}

#[tokio::test]
async fn order_is_blocked_from_a_cleaning_suite() {
    let mock_server = MockServer::start().await;
    status_sequence(&mock_server, "L", "L").await;

    Mock::given(method("GET"))
        .and(path("/searchMovim/3"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let controller = controller(&mock_server);
    let mut view = controller.open_view(SuiteId::new(3)).await.unwrap();

    let err = controller.order(&mut view).await.unwrap_err();
    assert!(matches!(
        err,
        LifecycleError::Blocked(ActionBlocked::SuiteNotOccupied {
            status: SuiteStatus::Cleaning
        })
    ));
    assert!(view.movement.is_none());
}

// ── Cleaning / Maintenance ───────────────────────────────────────────

#[tokio::test]
async fn cleaning_commands_then_refetches_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/limpezaSuite/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(suite_body("L")))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/searchSuite/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(suite_body("L")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let controller = controller(&mock_server);
    let mut view = suiteops_lifecycle::SuiteView::new(SuiteId::new(3));

    let nav = controller.set_cleaning(&mut view).await.unwrap();
    assert_eq!(nav, Navigation::Dashboard);
    assert_eq!(view.status, Some(SuiteStatus::Cleaning));
}

#[tokio::test]
async fn maintenance_works_even_from_an_occupied_suite() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/manutencaoSuite/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(suite_body("M")))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/searchSuite/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(suite_body("M")))
        .mount(&mock_server)
        .await;

    let controller = controller(&mock_server);
    let mut view = suiteops_lifecycle::SuiteView::new(SuiteId::new(3));
    view.status = Some(SuiteStatus::Occupied);

    let nav = controller.set_maintenance(&mut view).await.unwrap();
    assert_eq!(nav, Navigation::Dashboard);
    assert_eq!(view.status, Some(SuiteStatus::Maintenance));
}

// ── Missing suite ────────────────────────────────────────────────────

#[tokio::test]
async fn opening_a_view_for_a_missing_suite_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/searchSuite/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let controller = controller(&mock_server);
    let err = controller.open_view(SuiteId::new(99)).await.unwrap_err();
    assert!(matches!(
        err,
        LifecycleError::SuiteNotFound { suite } if suite == SuiteId::new(99)
    ));
}
