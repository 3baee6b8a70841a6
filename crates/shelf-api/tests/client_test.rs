#![allow(clippy::unwrap_used)]
// Integration tests for `ApiClient` using wiremock.

use serde::{Deserialize, Serialize};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shelf_api::{ApiClient, Error, Resource};

// ── Test resource ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Widget {
    id: i64,
    name: String,
}

#[derive(Debug, Serialize)]
struct NewWidget {
    name: String,
}

#[derive(Debug, Default, Serialize)]
struct WidgetPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl Resource for Widget {
    const PATH: &'static str = "widget";
    type Create = NewWidget;
    type Patch = WidgetPatch;

    fn id(&self) -> i64 {
        self.id
    }
}

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

// ── List ────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_all_unwraps_envelope() {
    let (server, client) = setup().await;

    let envelope = json!({
        "statusCode": 200,
        "message": "Success",
        "data": [
            { "id": 1, "name": "Anvil" },
            { "id": 2, "name": "Bolt" }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/widget"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let widgets = client.list_all::<Widget>().await.unwrap();

    assert_eq!(widgets.len(), 2);
    assert_eq!(widgets[0].name, "Anvil");
    assert_eq!(widgets[1].id, 2);
}

#[tokio::test]
async fn list_all_rejects_success_without_data() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/widget"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "statusCode": 200, "message": "Success" })),
        )
        .mount(&server)
        .await;

    let result = client.list_all::<Widget>().await;
    assert!(matches!(result, Err(Error::MissingData { .. })));
}

// ── Create ──────────────────────────────────────────────────────────

#[tokio::test]
async fn create_posts_payload_and_returns_record() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/widget"))
        .and(body_json(json!({ "name": "Clamp" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "statusCode": 201,
            "message": "Created",
            "data": { "id": 9, "name": "Clamp" }
        })))
        .mount(&server)
        .await;

    let created = client
        .create::<Widget>(&NewWidget {
            name: "Clamp".into(),
        })
        .await
        .unwrap();

    assert_eq!(created.id, 9);
    assert_eq!(created.name, "Clamp");
}

// ── Update ──────────────────────────────────────────────────────────

#[tokio::test]
async fn update_patches_single_field() {
    let (server, client) = setup().await;

    // Unset patch fields must be omitted from the body entirely.
    Mock::given(method("PATCH"))
        .and(path("/widget/9"))
        .and(body_json(json!({ "name": "Vice" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statusCode": 200,
            "message": "Updated",
            "data": { "id": 9, "name": "Vice" }
        })))
        .mount(&server)
        .await;

    let updated = client
        .update_by_id::<Widget>(
            9,
            &WidgetPatch {
                name: Some("Vice".into()),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Vice");
}

// ── Delete ──────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_tolerates_missing_data() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/widget/4"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "statusCode": 200, "message": "Deleted" })),
        )
        .mount(&server)
        .await;

    let envelope = client.delete_by_id::<Widget>(4).await.unwrap();
    assert!(envelope.is_success());
    assert_eq!(envelope.message, "Deleted");
    assert!(envelope.data.is_none());
}

// ── Errors ──────────────────────────────────────────────────────────

#[tokio::test]
async fn http_error_surfaces_envelope_message() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/widget/77"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "statusCode": 404,
            "message": "Widget not found"
        })))
        .mount(&server)
        .await;

    let err = client.get_by_id::<Widget>(77).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(
        err,
        Error::Api { status: 404, ref message } if message == "Widget not found"
    ));
}

#[tokio::test]
async fn envelope_failure_inside_http_200_is_an_error() {
    let (server, client) = setup().await;

    // Some backends report failures in the envelope while still
    // returning HTTP 200. The client must not treat those as success.
    Mock::given(method("POST"))
        .and(path("/widget"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statusCode": 400,
            "message": "SKU already exists"
        })))
        .mount(&server)
        .await;

    let err = client
        .create::<Widget>(&NewWidget { name: "Dup".into() })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Api { status: 400, ref message } if message == "SKU already exists"
    ));
}

#[tokio::test]
async fn malformed_body_is_a_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/widget"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client.list_all::<Widget>().await.unwrap_err();
    assert!(matches!(err, Error::Deserialization { .. }));
}

#[tokio::test]
async fn malformed_multibyte_body_is_truncated_without_panicking() {
    let (server, client) = setup().await;

    // 100 euro signs are 300 bytes; the preview cutoff must not land
    // mid-character and panic.
    let body = "€".repeat(100);
    Mock::given(method("GET"))
        .and(path("/widget"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let err = client.list_all::<Widget>().await.unwrap_err();
    assert!(matches!(err, Error::Deserialization { .. }));
}

#[tokio::test]
async fn transport_failure_is_typed() {
    // Point at a closed port; no server is running.
    let client = ApiClient::from_reqwest("http://127.0.0.1:1", reqwest::Client::new()).unwrap();
    let err = client.list_all::<Widget>().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}
