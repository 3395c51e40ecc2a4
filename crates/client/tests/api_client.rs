//! Black-box tests for `ApiClient` against an in-process JSON stub server
//! bound to an ephemeral port.

use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;

use stockroom_client::{ApiClient, ApiError, ClientConfig};
use stockroom_core::{ProductId, StockId, WarehouseId, WarehousemanId};
use stockroom_domain::{
    EditHistory, Localisation, NewProduct, Product, Stock, Warehouseman,
};

#[derive(Clone, Default)]
struct StubState {
    products: Arc<Mutex<Vec<Product>>>,
    warehousemen: Arc<Mutex<Vec<Warehouseman>>>,
}

struct TestServer {
    base_url: String,
    state: StubState,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(products: Vec<Product>, warehousemen: Vec<Warehouseman>) -> Self {
        let state = StubState {
            products: Arc::new(Mutex::new(products)),
            warehousemen: Arc::new(Mutex::new(warehousemen)),
        };

        let app = Router::new()
            .route("/products", get(list_products).post(create_product))
            .route("/products/:id", get(get_product).put(replace_product))
            .route("/warehousemans", get(find_warehousemen))
            .route("/warehousemans/:id", get(get_warehouseman))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            state,
            handle,
        }
    }

    fn client(&self) -> ApiClient {
        ApiClient::new(ClientConfig::new(&self.base_url)).unwrap()
    }

    fn stored_products(&self) -> Vec<Product> {
        self.state.products.lock().unwrap().clone()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn list_products(State(state): State<StubState>) -> Json<Vec<Product>> {
    Json(state.products.lock().unwrap().clone())
}

async fn get_product(
    State(state): State<StubState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, StatusCode> {
    state
        .products
        .lock()
        .unwrap()
        .iter()
        .find(|p| p.id == ProductId::new(id))
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn replace_product(
    State(state): State<StubState>,
    Path(id): Path<i64>,
    Json(product): Json<Product>,
) -> Result<Json<Product>, StatusCode> {
    let mut products = state.products.lock().unwrap();
    let slot = products
        .iter_mut()
        .find(|p| p.id == ProductId::new(id))
        .ok_or(StatusCode::NOT_FOUND)?;
    *slot = product.clone();
    Ok(Json(product))
}

async fn create_product(
    State(state): State<StubState>,
    Json(draft): Json<NewProduct>,
) -> impl IntoResponse {
    let mut products = state.products.lock().unwrap();
    let next_id = products.iter().map(|p| p.id.as_i64()).max().unwrap_or(0) + 1;
    let product = Product {
        id: ProductId::new(next_id),
        name: draft.name,
        kind: draft.kind,
        barcode: draft.barcode,
        price: draft.price,
        solde: draft.solde,
        supplier: draft.supplier,
        image: draft.image,
        stocks: draft.stocks,
        edited_by: draft.edited_by,
    };
    products.push(product.clone());
    (StatusCode::CREATED, Json(product))
}

async fn find_warehousemen(
    State(state): State<StubState>,
    Query(query): Query<std::collections::HashMap<String, String>>,
) -> Json<Vec<Warehouseman>> {
    let secret = query.get("secretKey").cloned().unwrap_or_default();
    Json(
        state
            .warehousemen
            .lock()
            .unwrap()
            .iter()
            .filter(|w| w.secret_key == secret)
            .cloned()
            .collect(),
    )
}

async fn get_warehouseman(
    State(state): State<StubState>,
    Path(id): Path<i64>,
) -> Result<Json<Warehouseman>, StatusCode> {
    state
        .warehousemen
        .lock()
        .unwrap()
        .iter()
        .find(|w| w.id == WarehousemanId::new(id))
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

fn sample_product(id: i64, quantity: u32) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Product {id}"),
        kind: "Informatique".to_string(),
        barcode: format!("61112455910{id}"),
        price: 100.0,
        solde: 90.0,
        supplier: "HP".to_string(),
        image: String::new(),
        stocks: vec![Stock {
            id: StockId::new(1999),
            name: "Gueliz B2".to_string(),
            quantity,
            localisation: Localisation {
                city: "Marrakech".to_string(),
                latitude: 31.63,
                longitude: -8.0,
            },
        }],
        edited_by: vec![EditHistory {
            warehouseman_id: WarehousemanId::new(1333),
            at: Utc::now(),
        }],
    }
}

fn sample_warehouseman() -> Warehouseman {
    Warehouseman {
        id: WarehousemanId::new(1333),
        name: "Hanane".to_string(),
        dob: "1999-09-09".to_string(),
        city: "Marrakech".to_string(),
        secret_key: "AH90907J".to_string(),
        warehouse_id: WarehouseId::new(1999),
    }
}

#[tokio::test]
async fn lists_and_fetches_products() {
    let server = TestServer::spawn(vec![sample_product(1, 5), sample_product(2, 0)], vec![]).await;
    let client = server.client();

    let products = client.list_products().await.unwrap();
    assert_eq!(products.len(), 2);

    let one = client.get_product(ProductId::new(1)).await.unwrap();
    assert_eq!(one.name, "Product 1");
    assert_eq!(one.total_quantity(), 5);
}

#[tokio::test]
async fn missing_product_maps_to_not_found() {
    let server = TestServer::spawn(vec![], vec![]).await;
    let client = server.client();

    let err = client.get_product(ProductId::new(42)).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn put_replaces_the_whole_product() {
    let server = TestServer::spawn(vec![sample_product(1, 5)], vec![]).await;
    let client = server.client();

    let mut product = client.get_product(ProductId::new(1)).await.unwrap();
    product.stocks[0].quantity = 12;
    product.name = "Renamed".to_string();

    let updated = client.put_product(&product).await.unwrap();
    assert_eq!(updated.name, "Renamed");

    let stored = server.stored_products();
    assert_eq!(stored[0].stocks[0].quantity, 12);
    assert_eq!(stored[0].name, "Renamed");
}

#[tokio::test]
async fn post_creates_a_product_with_server_assigned_id() {
    let server = TestServer::spawn(vec![sample_product(7, 1)], vec![]).await;
    let client = server.client();

    let draft = NewProduct::new("Mouse", "Informatique", "98765", 20.0, "Logitech");
    let created = client.post_product(&draft).await.unwrap();

    assert_eq!(created.id, ProductId::new(8));
    assert_eq!(created.image, NewProduct::PLACEHOLDER_IMAGE);
    assert!(created.stocks.is_empty());
    assert_eq!(server.stored_products().len(), 2);
}

#[tokio::test]
async fn finds_warehousemen_by_secret_key() {
    let server = TestServer::spawn(vec![], vec![sample_warehouseman()]).await;
    let client = server.client();

    let hits = client.find_warehousemen_by_secret("AH90907J").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Hanane");

    let misses = client.find_warehousemen_by_secret("nope").await.unwrap();
    assert!(misses.is_empty());
}

#[tokio::test]
async fn fetches_warehouseman_by_id() {
    let server = TestServer::spawn(vec![], vec![sample_warehouseman()]).await;
    let client = server.client();

    let w = client
        .get_warehouseman(WarehousemanId::new(1333))
        .await
        .unwrap();
    assert_eq!(w.warehouse_id, WarehouseId::new(1999));

    let err = client
        .get_warehouseman(WarehousemanId::new(9))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
}
