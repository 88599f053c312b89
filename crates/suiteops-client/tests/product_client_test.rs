//! Contract tests for ProductClient against the PMS catalog endpoints.

use suiteops_client::{PmsApiConfig, PmsClient};
use suiteops_core::ProductId;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(mock_server: &MockServer) -> PmsClient {
    PmsClient::new(PmsApiConfig::local_mock(mock_server.uri().parse().unwrap())).unwrap()
}

// ── GET /searchProd/{code} ───────────────────────────────────────────

#[tokio::test]
async fn by_code_returns_the_product_with_its_price() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/searchProd/123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "prdId": 123,
            "prdDescricao": "Sparkling water",
            "prdReferencia": "AGUA-600",
            "prdUnidade": "UN",
            "prdPrcUnitario": 8.0
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let product = client.products().by_code("123").await.unwrap().unwrap();
    assert_eq!(product.id, ProductId::new(123));
    assert_eq!(product.unit_price, Some(8.0));
    assert_eq!(product.reference.as_deref(), Some("AGUA-600"));
}

#[tokio::test]
async fn by_code_returns_none_for_unknown_codes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/searchProd/999"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert!(client.products().by_code("999").await.unwrap().is_none());
}

// ── GET /searchProdDesc/{text} ───────────────────────────────────────

#[tokio::test]
async fn search_description_returns_candidates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/searchProdDesc/water"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"prdId": 123, "prdDescricao": "Sparkling water", "prdPrcUnitario": 8.0},
            {"prdId": 124, "prdDescricao": "Still water", "prdPrcUnitario": 6.0}
        ])))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let products = client.products().search_description("water").await.unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[1].unit_price, Some(6.0));
}

#[tokio::test]
async fn search_description_with_no_matches_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/searchProdDesc/zzz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert!(client
        .products()
        .search_description("zzz")
        .await
        .unwrap()
        .is_empty());
}
