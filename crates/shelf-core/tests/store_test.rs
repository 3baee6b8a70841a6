#![allow(clippy::unwrap_used)]
// Integration tests for `EntityStore` / `Inventory` using wiremock.

use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shelf_api::ApiClient;
use shelf_core::{
    Category, CoreError, EntityStore, Inventory, NewCategory, NewProduct, Product, ProductPatch,
    SyncPolicy,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup(policy: SyncPolicy) -> (MockServer, Arc<ApiClient>, EntityStore<Product>) {
    let server = MockServer::start().await;
    let client = Arc::new(ApiClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap());
    let store = EntityStore::new(Arc::clone(&client), policy);
    (server, client, store)
}

fn product_json(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "sku": format!("SKU-{id:03}"),
        "companyName": "Acme",
        "price": 10.0,
        "stock": 5,
        "categoryId": 1
    })
}

fn ok_list(products: &[serde_json::Value]) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "statusCode": 200,
        "message": "Success",
        "data": products
    }))
}

async fn mount_list(server: &MockServer, products: &[serde_json::Value]) {
    Mock::given(method("GET"))
        .and(path("/product"))
        .respond_with(ok_list(products))
        .mount(server)
        .await;
}

fn new_product(name: &str) -> NewProduct {
    NewProduct {
        name: name.into(),
        sku: "SKU-NEW".into(),
        company_name: "Acme".into(),
        price: 10.0,
        stock: 5,
        category_id: 1,
        dealer_id: None,
        discount: None,
    }
}

// ── fetch_all ───────────────────────────────────────────────────────

#[tokio::test]
async fn fetch_all_mirrors_server_order() {
    let (server, _, store) = setup(SyncPolicy::LocalMerge).await;
    mount_list(&server, &[product_json(3, "C"), product_json(1, "A")]).await;

    let snap = store.fetch_all().await.unwrap();

    let ids: Vec<i64> = snap.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 1]);
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn fetch_all_replaces_cache_even_with_empty_result() {
    let (server, _, store) = setup(SyncPolicy::LocalMerge).await;

    Mock::given(method("GET"))
        .and(path("/product"))
        .respond_with(ok_list(&[product_json(1, "A")]))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    store.fetch_all().await.unwrap();
    assert_eq!(store.len(), 1);

    mount_list(&server, &[]).await;
    let snap = store.fetch_all().await.unwrap();
    assert!(snap.is_empty());
    assert!(store.is_empty());
}

#[tokio::test]
async fn stale_fetch_response_is_dropped() {
    let (server, _, store) = setup(SyncPolicy::LocalMerge).await;

    // First request in wins this mock: a slow response carrying old data.
    Mock::given(method("GET"))
        .and(path("/product"))
        .respond_with(ok_list(&[product_json(1, "old")]).set_delay(Duration::from_millis(250)))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_list(&server, &[product_json(2, "new")]).await;

    let store = Arc::new(store);
    let slow = {
        let store = Arc::clone(&store);
        tokio::spawn(async move { store.fetch_all().await })
    };
    // Let the slow fetch take its ticket before starting the fast one.
    tokio::time::sleep(Duration::from_millis(50)).await;
    store.fetch_all().await.unwrap();
    slow.await.unwrap().unwrap();

    // The slow response resolved last but must not overwrite newer data.
    let ids: Vec<i64> = store.snapshot().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2]);
}

// ── add ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_appends_created_record() {
    let (server, _, store) = setup(SyncPolicy::LocalMerge).await;
    mount_list(&server, &[product_json(1, "A")]).await;
    store.fetch_all().await.unwrap();

    Mock::given(method("POST"))
        .and(path("/product"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "statusCode": 201,
            "message": "Created",
            "data": product_json(7, "Widget")
        })))
        .mount(&server)
        .await;

    let created = store.add(&new_product("Widget")).await.unwrap();

    assert_eq!(created.id, 7);
    assert_eq!(store.len(), 2);
    let snap = store.snapshot();
    assert_eq!(snap.last().unwrap().name, "Widget");
}

#[tokio::test]
async fn add_failure_leaves_cache_unchanged() {
    let (server, _, store) = setup(SyncPolicy::LocalMerge).await;
    mount_list(&server, &[product_json(1, "A")]).await;
    store.fetch_all().await.unwrap();

    Mock::given(method("POST"))
        .and(path("/product"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "statusCode": 400,
            "message": "SKU already exists"
        })))
        .mount(&server)
        .await;

    let err = store.add(&new_product("Dup")).await.unwrap_err();

    assert!(matches!(err, CoreError::Server { status: 400, .. }));
    assert_eq!(err.message(), "SKU already exists");
    assert_eq!(store.len(), 1);
}

// ── edit ────────────────────────────────────────────────────────────

#[tokio::test]
async fn edit_replaces_cached_record_in_place() {
    let (server, _, store) = setup(SyncPolicy::LocalMerge).await;
    mount_list(&server, &[product_json(1, "A"), product_json(2, "B")]).await;
    store.fetch_all().await.unwrap();

    let mut updated = product_json(1, "A+");
    updated["price"] = json!(12.5);
    Mock::given(method("PATCH"))
        .and(path("/product/1"))
        .and(body_json(json!({ "price": 12.5, "name": "A+" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statusCode": 200,
            "message": "Updated",
            "data": updated
        })))
        .mount(&server)
        .await;

    store
        .edit(
            1,
            &ProductPatch {
                name: Some("A+".into()),
                price: Some(12.5),
                ..ProductPatch::default()
            },
        )
        .await
        .unwrap();

    let snap = store.snapshot();
    assert_eq!(snap.len(), 2);
    // Edited record keeps its position; the other record is untouched.
    assert_eq!(snap[0].name, "A+");
    assert_eq!(snap[0].price, 12.5);
    assert_eq!(snap[0].sku, "SKU-001");
    assert_eq!(snap[1].name, "B");
}

#[tokio::test]
async fn edit_of_uncached_id_is_a_silent_noop() {
    let (server, _, store) = setup(SyncPolicy::LocalMerge).await;
    mount_list(&server, &[product_json(1, "A")]).await;
    store.fetch_all().await.unwrap();

    Mock::given(method("PATCH"))
        .and(path("/product/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statusCode": 200,
            "message": "Updated",
            "data": product_json(42, "Ghost")
        })))
        .mount(&server)
        .await;

    let updated = store
        .edit(
            42,
            &ProductPatch {
                name: Some("Ghost".into()),
                ..ProductPatch::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, 42);
    // Operation succeeded, but the cache holds only what it held before.
    assert_eq!(store.len(), 1);
    assert_eq!(store.snapshot()[0].id, 1);
}

// ── remove ──────────────────────────────────────────────────────────

#[tokio::test]
async fn remove_filters_record_out() {
    let (server, _, store) = setup(SyncPolicy::LocalMerge).await;
    mount_list(&server, &[product_json(1, "A"), product_json(2, "B")]).await;
    store.fetch_all().await.unwrap();

    Mock::given(method("DELETE"))
        .and(path("/product/1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "statusCode": 200, "message": "Deleted" })),
        )
        .mount(&server)
        .await;

    let message = store.remove(1).await.unwrap();

    assert_eq!(message, "Deleted");
    assert_eq!(store.len(), 1);
    assert_eq!(store.snapshot()[0].id, 2);
}

#[tokio::test]
async fn remove_of_absent_id_leaves_length_alone() {
    let (server, _, store) = setup(SyncPolicy::LocalMerge).await;
    mount_list(&server, &[product_json(1, "A")]).await;
    store.fetch_all().await.unwrap();

    Mock::given(method("DELETE"))
        .and(path("/product/9"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "statusCode": 200, "message": "Deleted" })),
        )
        .mount(&server)
        .await;

    store.remove(9).await.unwrap();
    assert_eq!(store.len(), 1);
}

// ── find_by_id ──────────────────────────────────────────────────────

#[tokio::test]
async fn find_by_id_serves_cached_records_without_a_request() {
    let (server, _, store) = setup(SyncPolicy::LocalMerge).await;
    mount_list(&server, &[product_json(1, "A")]).await;
    store.fetch_all().await.unwrap();

    Mock::given(method("GET"))
        .and(path("/product/1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let found = store.find_by_id(1).await.unwrap();
    assert_eq!(found.name, "A");
    // MockServer verifies the expect(0) on drop.
}

#[tokio::test]
async fn find_by_id_falls_back_to_the_api_for_uncached_ids() {
    let (server, _, store) = setup(SyncPolicy::LocalMerge).await;

    Mock::given(method("GET"))
        .and(path("/product/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statusCode": 200,
            "message": "Success",
            "data": product_json(5, "E")
        })))
        .mount(&server)
        .await;

    let found = store.find_by_id(5).await.unwrap();
    assert_eq!(found.name, "E");
    // The fallback result is not cached.
    assert!(store.is_empty());
}

#[tokio::test]
async fn find_by_id_swallows_lookup_failures() {
    let (server, _, store) = setup(SyncPolicy::LocalMerge).await;

    Mock::given(method("GET"))
        .and(path("/product/5"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "statusCode": 404,
            "message": "Product not found"
        })))
        .mount(&server)
        .await;

    assert!(store.find_by_id(5).await.is_none());
}

// ── Refetch policy ──────────────────────────────────────────────────

#[tokio::test]
async fn refetch_policy_reloads_collection_after_create() {
    let (server, _, store) = setup(SyncPolicy::Refetch).await;

    Mock::given(method("POST"))
        .and(path("/product"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "statusCode": 201,
            "message": "Created",
            "data": product_json(3, "C")
        })))
        .mount(&server)
        .await;
    // The post-create refetch sees whatever the server now holds,
    // including records created by other writers.
    mount_list(
        &server,
        &[product_json(1, "A"), product_json(2, "B"), product_json(3, "C")],
    )
    .await;

    store.add(&new_product("C")).await.unwrap();

    let ids: Vec<i64> = store.snapshot().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

// ── End-to-end scenario from the store contract ─────────────────────

#[tokio::test]
async fn fetch_then_edit_updates_the_single_cached_record() {
    let server = MockServer::start().await;
    let client = Arc::new(ApiClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap());
    let store: EntityStore<Category> = EntityStore::new(client, SyncPolicy::LocalMerge);

    Mock::given(method("GET"))
        .and(path("/category"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statusCode": 200,
            "message": "Success",
            "data": [{ "id": 1, "name": "A" }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/category/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statusCode": 200,
            "message": "Updated",
            "data": { "id": 1, "name": "B" }
        })))
        .mount(&server)
        .await;

    store.fetch_all().await.unwrap();
    store
        .edit(
            1,
            &shelf_core::CategoryPatch {
                name: Some("B".into()),
            },
        )
        .await
        .unwrap();

    let snap = store.snapshot();
    assert_eq!(snap.len(), 1);
    assert_eq!(*snap[0], Category { id: 1, name: "B".into() });
}

// ── Inventory facade ────────────────────────────────────────────────

#[tokio::test]
async fn refresh_all_populates_every_store() {
    let server = MockServer::start().await;
    let client = Arc::new(ApiClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap());
    let inventory = Inventory::new(client, SyncPolicy::LocalMerge);

    mount_list(&server, &[product_json(1, "A")]).await;
    for (route, body) in [
        ("/category", json!([{ "id": 1, "name": "Tools" }])),
        ("/dealer", json!([{ "id": 1, "name": "Dee", "phone": "12345" }])),
        ("/customer", json!([{ "id": 1, "name": "Cass", "phone": "54321" }])),
    ] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "statusCode": 200,
                "message": "Success",
                "data": body
            })))
            .mount(&server)
            .await;
    }

    assert!(inventory.last_refresh().is_none());
    inventory.refresh_all().await.unwrap();

    assert_eq!(inventory.products.len(), 1);
    assert_eq!(inventory.categories.len(), 1);
    assert_eq!(inventory.dealers.len(), 1);
    assert_eq!(inventory.customers.len(), 1);
    // The timestamp must stick even though nothing subscribes to it.
    assert!(inventory.last_refresh().is_some());
    assert!(inventory.data_age().is_some_and(|age| age >= chrono::Duration::zero()));
}

#[tokio::test]
async fn category_add_matches_create_payload_shape() {
    let server = MockServer::start().await;
    let client = Arc::new(ApiClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap());
    let store: EntityStore<Category> = EntityStore::new(client, SyncPolicy::LocalMerge);

    // The creation payload must not carry an id.
    Mock::given(method("POST"))
        .and(path("/category"))
        .and(body_json(json!({ "name": "Fasteners" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "statusCode": 201,
            "message": "Created",
            "data": { "id": 11, "name": "Fasteners" }
        })))
        .mount(&server)
        .await;

    let created = store
        .add(&NewCategory {
            name: "Fasteners".into(),
        })
        .await
        .unwrap();

    assert_eq!(created.id, 11);
    assert_eq!(store.len(), 1);
}
