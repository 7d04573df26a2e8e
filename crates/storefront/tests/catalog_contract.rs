//! Contract tests for catalog loading against a simulated shop API.
//!
//! Uses wiremock to stand in for `GET {api_base}/bowls/`. Every failure mode
//! (refused connection, non-success status, non-array body) must degrade to
//! the bundled fallback catalog without surfacing an error.

use std::time::Duration;

use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bowleria_core::Money;
use bowleria_storefront::api::{ApiClient, ApiError};
use bowleria_storefront::catalog::{self, CatalogSource};

/// Build an ApiClient pointed at a wiremock server.
fn test_client(mock_server: &MockServer) -> ApiClient {
    let base: Url = format!("{}/api", mock_server.uri()).parse().unwrap();
    ApiClient::new(&base, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn remote_catalog_is_used_when_well_formed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/bowls/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": 10,
                "slug": "mango-maya",
                "name": "Mango Maya",
                "description": "Mango con chile tajín.",
                "price": 89,
                "image_url": "img/bowls/mango.jpeg",
                "tags": ["temporada"],
                "badge": "Mango"
            },
            {
                "id": 11,
                "slug": "verde-detox",
                "name": "Verde Detox",
                "price": "110.00"
            }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let (products, source) = catalog::load_catalog(&client).await;

    assert_eq!(source, CatalogSource::Remote);
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].name, "Mango Maya");
    assert_eq!(products[0].price, Money::from(89));
    // Decimal-as-string amounts parse too
    assert_eq!(products[1].price, Money::from(110));
}

#[tokio::test]
async fn non_array_body_falls_back_to_the_bundled_catalog() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/bowls/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"detail": "unexpected shape"})),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);

    let err = client.fetch_catalog().await.unwrap_err();
    assert!(matches!(err, ApiError::Parse(_)));

    let (products, source) = catalog::load_catalog(&client).await;
    assert_eq!(source, CatalogSource::Fallback);
    assert_eq!(products.len(), 3);
    assert_eq!(
        products.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert_eq!(products[0].name, "Coco Tropical");
    assert_eq!(products[0].price, Money::from(95));
    assert_eq!(products[1].name, "Berry Boost");
    assert_eq!(products[1].price, Money::from(99));
    assert_eq!(products[2].name, "Choco Power");
    assert_eq!(products[2].price, Money::from(105));
}

#[tokio::test]
async fn non_success_status_falls_back_and_captures_the_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/bowls/"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance window"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);

    match client.fetch_catalog().await.unwrap_err() {
        ApiError::Status { status, body } => {
            assert_eq!(status, 503);
            assert!(body.contains("maintenance window"));
        }
        other => panic!("expected Status error, got: {other:?}"),
    }

    let (products, source) = catalog::load_catalog(&client).await;
    assert_eq!(source, CatalogSource::Fallback);
    assert_eq!(products.len(), 3);
}

#[tokio::test]
async fn refused_connection_falls_back() {
    // Nothing listens on the discard port
    let base: Url = "http://127.0.0.1:9/api".parse().unwrap();
    let client = ApiClient::new(&base, Duration::from_secs(1)).unwrap();

    let (products, source) = catalog::load_catalog(&client).await;

    assert_eq!(source, CatalogSource::Fallback);
    assert_eq!(products.len(), 3);
}
