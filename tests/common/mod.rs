//! Shared integration harness: an in-process axum mock of the remote ATK
//! API, bound to a loopback port, with a small mutable store and per-route
//! hit counters so tests can assert which calls were (and were not) made.

// Each test binary compiles this module separately and uses a subset of it.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde_json::{json, Value};

use atk_client::auth::MemorySessionStore;
use atk_client::config::ClientConfig;
use atk_client::AtkClient;

pub const ADMIN_TOKEN: &str = "token-admin";
pub const DIVISI_TOKEN: &str = "token-divisi";

/// How a list endpoint wraps its array, so tests can exercise every shape
/// the client must normalize.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ListWrapper {
    Bare,
    Data,
    DollarValues,
}

impl ListWrapper {
    fn wrap(self, list: Vec<Value>) -> Value {
        match self {
            ListWrapper::Bare => Value::Array(list),
            ListWrapper::Data => json!({ "data": list }),
            ListWrapper::DollarValues => json!({ "$values": list }),
        }
    }
}

#[derive(Default)]
pub struct ApiState {
    pub items: Vec<Value>,
    pub requests: Vec<Value>,
    pub suppliers: Vec<Value>,
    pub outgoing: Vec<Value>,
    pub hits: HashMap<&'static str, usize>,
    /// Authorization header seen on each item-list call, in order.
    pub authorization_log: Vec<Option<String>>,
    pub items_wrapper: Option<ListWrapper>,
    pub requests_wrapper: Option<ListWrapper>,
    pub fail_items: bool,
    pub fail_logout: bool,
    next_id: i64,
}

impl ApiState {
    fn hit(&mut self, key: &'static str) {
        *self.hits.entry(key).or_insert(0) += 1;
    }

    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn seed_item(&mut self, id: i64, code: &str, name: &str, stock: i64, unit: &str) {
        self.items.push(json!({
            "id": id,
            "kodeBarang": code,
            "namaBarang": name,
            "stok": stock,
            "satuan": unit,
        }));
        self.next_id = self.next_id.max(id);
    }

    pub fn seed_request(&mut self, id: i64, item_id: i64, quantity: i64, status: i32) {
        self.requests.push(json!({
            "id": id,
            "barangId": item_id,
            "jumlahDiminta": quantity,
            "alasan": "Kebutuhan rutin",
            "namaDivisi": "Umum",
            "namaUser": "Staf Umum",
            "userId": 7,
            "tanggalPermintaan": "2024-03-01T09:00:00",
            "status": status,
        }));
        self.next_id = self.next_id.max(id);
    }

    pub fn hits(&self, key: &str) -> usize {
        self.hits.get(key).copied().unwrap_or(0)
    }

    pub fn item_stock(&self, id: i64) -> Option<i64> {
        self.items
            .iter()
            .find(|item| item["id"] == json!(id))
            .and_then(|item| item["stok"].as_i64())
    }

    pub fn request_status(&self, id: i64) -> Option<i64> {
        self.requests
            .iter()
            .find(|request| request["id"] == json!(id))
            .and_then(|request| request["status"].as_i64())
    }
}

pub type SharedState = Arc<Mutex<ApiState>>;

pub struct TestApp {
    pub base_url: String,
    pub state: SharedState,
    _server: tokio::task::JoinHandle<()>,
}

impl TestApp {
    /// Binds the mock API to an ephemeral loopback port.
    pub async fn spawn() -> TestApp {
        let state: SharedState = Arc::new(Mutex::new(ApiState::default()));
        let router = build_router(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock API listener");
        let addr = listener.local_addr().expect("mock API local addr");
        let server = tokio::spawn(async move {
            axum::serve(listener, router).await.expect("serve mock API");
        });

        TestApp {
            base_url: format!("http://{}", addr),
            state,
            _server: server,
        }
    }

    /// A client wired to the mock API with an in-memory session store.
    pub fn client(&self) -> AtkClient {
        let config = ClientConfig::new(&self.base_url, "unused-session-dir");
        AtkClient::with_store(config, Arc::new(MemorySessionStore::new()))
            .expect("construct client")
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&mut ApiState) -> R) -> R {
        f(&mut self.state.lock().unwrap())
    }
}

fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/api/Auth/login", post(login))
        .route("/api/Auth/logout", post(logout))
        .route("/api/Barang", get(list_items))
        .route("/api/Barang/bulk", post(create_items_bulk))
        .route("/api/Barang/:id", put(update_item).delete(delete_item))
        .route("/api/Supplier", get(list_suppliers))
        .route("/api/Supplier/bulk", post(create_suppliers_bulk))
        .route("/api/PermintaanBarang", get(list_requests).post(create_request))
        .route("/api/PermintaanBarang/:id/status", put(update_request_status))
        .route("/BarangKeluar", get(list_outgoing))
        .route("/api/AdminDashboard", get(dashboard))
        .with_state(state)
}

fn error_body(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

async fn login(State(state): State<SharedState>, Json(body): Json<Value>) -> Response {
    let mut s = state.lock().unwrap();
    s.hit("POST /api/Auth/login");

    let username = body["username"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();

    match (username, password) {
        ("admin", "admin123") => Json(json!({
            "token": ADMIN_TOKEN,
            "userId": 1,
            "username": "admin",
            "nama": "Administrator",
            "role": "Admin",
        }))
        .into_response(),
        ("divisi1", "divisi123") => Json(json!({
            "token": DIVISI_TOKEN,
            "userId": 7,
            "username": "divisi1",
            "nama": "Staf Umum",
            "role": "Divisi",
            "namaDivisi": "Umum",
        }))
        .into_response(),
        _ => error_body(StatusCode::UNAUTHORIZED, "Username atau password salah"),
    }
}

async fn logout(State(state): State<SharedState>) -> Response {
    let mut s = state.lock().unwrap();
    s.hit("POST /api/Auth/logout");
    if s.fail_logout {
        return error_body(StatusCode::INTERNAL_SERVER_ERROR, "Sesi tidak ditemukan");
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn list_items(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let mut s = state.lock().unwrap();
    s.hit("GET /api/Barang");

    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    s.authorization_log.push(authorization);

    if s.fail_items {
        return error_body(StatusCode::INTERNAL_SERVER_ERROR, "Gagal memuat data barang");
    }

    let wrapper = s.items_wrapper.unwrap_or(ListWrapper::DollarValues);
    Json(wrapper.wrap(s.items.clone())).into_response()
}

async fn create_items_bulk(
    State(state): State<SharedState>,
    Json(body): Json<Vec<Value>>,
) -> Response {
    let mut s = state.lock().unwrap();
    s.hit("POST /api/Barang/bulk");

    let mut created = Vec::new();
    for mut item in body {
        let id = s.next_id();
        item["id"] = json!(id);
        s.items.push(item.clone());
        created.push(item);
    }
    (StatusCode::CREATED, Json(Value::Array(created))).into_response()
}

async fn update_item(
    Path(id): Path<i64>,
    State(state): State<SharedState>,
    Json(body): Json<Value>,
) -> Response {
    let mut s = state.lock().unwrap();
    s.hit("PUT /api/Barang/{id}");

    let Some(item) = s.items.iter_mut().find(|item| item["id"] == json!(id)) else {
        return error_body(StatusCode::NOT_FOUND, "Barang tidak ditemukan");
    };
    for field in ["kodeBarang", "namaBarang", "stok", "satuan"] {
        if let Some(value) = body.get(field) {
            item[field] = value.clone();
        }
    }
    Json(item.clone()).into_response()
}

async fn delete_item(Path(id): Path<i64>, State(state): State<SharedState>) -> Response {
    let mut s = state.lock().unwrap();
    s.hit("DELETE /api/Barang/{id}");
    s.items.retain(|item| item["id"] != json!(id));
    StatusCode::NO_CONTENT.into_response()
}

async fn list_suppliers(State(state): State<SharedState>) -> Response {
    let mut s = state.lock().unwrap();
    s.hit("GET /api/Supplier");
    Json(Value::Array(s.suppliers.clone())).into_response()
}

async fn create_suppliers_bulk(
    State(state): State<SharedState>,
    Json(body): Json<Vec<Value>>,
) -> Response {
    let mut s = state.lock().unwrap();
    s.hit("POST /api/Supplier/bulk");
    for mut supplier in body {
        let id = s.next_id();
        supplier["id"] = json!(id);
        s.suppliers.push(supplier);
    }
    StatusCode::CREATED.into_response()
}

async fn list_requests(
    State(state): State<SharedState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let mut s = state.lock().unwrap();
    s.hit("GET /api/PermintaanBarang");

    let filtered: Vec<Value> = match params.get("status").and_then(|v| v.parse::<i64>().ok()) {
        Some(status) => s
            .requests
            .iter()
            .filter(|request| request["status"] == json!(status))
            .cloned()
            .collect(),
        None => s.requests.clone(),
    };

    let wrapper = s.requests_wrapper.unwrap_or(ListWrapper::Data);
    Json(wrapper.wrap(filtered)).into_response()
}

async fn create_request(State(state): State<SharedState>, Json(body): Json<Value>) -> Response {
    let mut s = state.lock().unwrap();
    s.hit("POST /api/PermintaanBarang");

    let id = s.next_id();
    let record = json!({
        "id": id,
        "barangId": body["barangId"],
        "jumlahDiminta": body["jumlahDiminta"],
        "alasan": body["alasan"],
        "namaDivisi": "Umum",
        "namaUser": "Staf Umum",
        "userId": 7,
        "tanggalPermintaan": "2024-03-02T10:00:00",
        "status": 0,
    });
    s.requests.push(record.clone());
    (StatusCode::CREATED, Json(record)).into_response()
}

async fn update_request_status(
    Path(id): Path<i64>,
    State(state): State<SharedState>,
    Json(body): Json<Value>,
) -> Response {
    let mut s = state.lock().unwrap();
    s.hit("PUT /api/PermintaanBarang/{id}/status");

    let Some(position) = s.requests.iter().position(|r| r["id"] == json!(id)) else {
        return error_body(StatusCode::NOT_FOUND, "Permintaan tidak ditemukan");
    };
    if s.requests[position]["status"] != json!(0) {
        return error_body(StatusCode::CONFLICT, "Permintaan sudah diproses");
    }

    let status = body["status"].as_i64().unwrap_or(-1);
    s.requests[position]["status"] = json!(status);
    s.requests[position]["keterangan"] = body["keterangan"].clone();

    // Approval decrements stock and produces an outgoing-stock record, the
    // way the real server does.
    if status == 1 {
        let item_id = s.requests[position]["barangId"].clone();
        let quantity = s.requests[position]["jumlahDiminta"].as_i64().unwrap_or(0);
        if let Some(item) = s.items.iter_mut().find(|item| item["id"] == item_id) {
            let stock = item["stok"].as_i64().unwrap_or(0);
            item["stok"] = json!(stock - quantity);
        }
        let outgoing_id = s.next_id();
        s.outgoing.push(json!({
            "id": outgoing_id,
            "barangId": item_id,
            "jumlahKeluar": quantity,
            "permintaanId": id,
            "tanggalKeluar": "2024-03-02T11:00:00",
        }));
    }

    let updated = s.requests[position].clone();
    Json(updated).into_response()
}

async fn list_outgoing(State(state): State<SharedState>) -> Response {
    let mut s = state.lock().unwrap();
    s.hit("GET /BarangKeluar");
    Json(json!({ "$values": s.outgoing.clone() })).into_response()
}

async fn dashboard(State(state): State<SharedState>) -> Response {
    let mut s = state.lock().unwrap();
    s.hit("GET /api/AdminDashboard");

    let pending = s.requests.iter().filter(|r| r["status"] == json!(0)).count();
    let approved = s.requests.iter().filter(|r| r["status"] == json!(1)).count();
    let rejected = s.requests.iter().filter(|r| r["status"] == json!(2)).count();
    let low_stock: Vec<Value> = s
        .items
        .iter()
        .filter(|item| item["stok"].as_i64().unwrap_or(0) < 10)
        .cloned()
        .collect();

    Json(json!({
        "summary": {
            "totalBarang": s.items.len(),
            "totalPermintaanPending": pending,
            "totalPermintaanDisetujui": approved,
            "totalPermintaanDitolak": rejected,
            "totalBarangHampirHabis": low_stock.len(),
        },
        "barangStokRendah": low_stock,
        "permintaanTerbaru": [],
    }))
    .into_response()
}
