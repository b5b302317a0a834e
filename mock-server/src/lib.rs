//! In-memory stand-in for the PayWhirl API.
//!
//! Customers are stored and can be created, read, updated and deleted through
//! the same form-encoded endpoints the real service exposes. A few fixed
//! routes produce awkward response shapes (`/fail/{status}`, `/empty`,
//! `/garbage`, `/binary`, `/large/{items}`).
//! Every other path echoes the request back as JSON so clients can assert on
//! exactly what went over the wire.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    body::Bytes,
    extract::{Form, Path, Query, State},
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{any, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use url::form_urlencoded;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    pub id: u64,
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
}

#[derive(Debug, Default)]
pub struct Store {
    customers: BTreeMap<u64, Customer>,
    next_id: u64,
}

pub type Db = Arc<RwLock<Store>>;

/// What the echo route reports back. Pairs keep their wire order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Echo {
    pub method: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub form: Vec<(String, String)>,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub content_type: Option<String>,
}

#[derive(Deserialize)]
pub struct ListCustomers {
    pub limit: Option<usize>,
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/customers", get(list_customers))
        .route("/customer/{id}", get(get_customer))
        .route("/create/customer", post(create_customer))
        .route("/update/customer", post(update_customer))
        .route("/delete/customer", post(delete_customer))
        .route("/fail/{status}", any(fail))
        .route("/empty", any(empty))
        .route("/garbage", any(garbage))
        .route("/binary", any(binary))
        .route("/large/{items}", any(large))
        .fallback(echo)
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn error(status: StatusCode, code: &str, message: &str) -> Response {
    (status, Json(json!({ "error": code, "message": message }))).into_response()
}

/// Both credential headers must be present and non-empty.
fn authorize(headers: &HeaderMap) -> Result<(), Response> {
    let present = |name| header_value(headers, name).is_some_and(|v| !v.is_empty());
    if present("api-key") && present("api-secret") {
        Ok(())
    } else {
        Err(error(StatusCode::UNAUTHORIZED, "unauthorized", "missing api-key or api-secret"))
    }
}

fn field<'a>(form: &'a [(String, String)], name: &str) -> Option<&'a str> {
    form.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
}

fn parse_id(form: &[(String, String)]) -> Result<u64, Response> {
    field(form, "id")
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| error(StatusCode::UNPROCESSABLE_ENTITY, "validation_failed", "id is required"))
}

async fn list_customers(
    State(db): State<Db>,
    headers: HeaderMap,
    Query(query): Query<ListCustomers>,
) -> Response {
    if let Err(rejection) = authorize(&headers) {
        return rejection;
    }
    let store = db.read().await;
    let limit = query.limit.unwrap_or(usize::MAX);
    let customers: Vec<Customer> = store.customers.values().take(limit).cloned().collect();
    Json(customers).into_response()
}

async fn get_customer(State(db): State<Db>, headers: HeaderMap, Path(id): Path<u64>) -> Response {
    if let Err(rejection) = authorize(&headers) {
        return rejection;
    }
    match db.read().await.customers.get(&id) {
        Some(customer) => Json(customer.clone()).into_response(),
        None => error(StatusCode::NOT_FOUND, "not_found", "customer not found"),
    }
}

async fn create_customer(
    State(db): State<Db>,
    headers: HeaderMap,
    Form(form): Form<Vec<(String, String)>>,
) -> Response {
    if let Err(rejection) = authorize(&headers) {
        return rejection;
    }
    if field(&form, "email").is_none_or(str::is_empty) {
        return error(StatusCode::UNPROCESSABLE_ENTITY, "validation_failed", "email is required");
    }

    let mut store = db.write().await;
    store.next_id += 1;
    let customer = Customer {
        id: store.next_id,
        fields: form.into_iter().filter(|(k, _)| k != "id").collect(),
    };
    store.customers.insert(customer.id, customer.clone());
    Json(customer).into_response()
}

async fn update_customer(
    State(db): State<Db>,
    headers: HeaderMap,
    Form(form): Form<Vec<(String, String)>>,
) -> Response {
    if let Err(rejection) = authorize(&headers) {
        return rejection;
    }
    let id = match parse_id(&form) {
        Ok(id) => id,
        Err(rejection) => return rejection,
    };

    let mut store = db.write().await;
    let Some(customer) = store.customers.get_mut(&id) else {
        return error(StatusCode::NOT_FOUND, "not_found", "customer not found");
    };
    for (k, v) in form.into_iter().filter(|(k, _)| k != "id") {
        customer.fields.insert(k, v);
    }
    Json(customer.clone()).into_response()
}

async fn delete_customer(
    State(db): State<Db>,
    headers: HeaderMap,
    Form(form): Form<Vec<(String, String)>>,
) -> Response {
    if let Err(rejection) = authorize(&headers) {
        return rejection;
    }
    let id = match parse_id(&form) {
        Ok(id) => id,
        Err(rejection) => return rejection,
    };
    let forget = field(&form, "forget") == Some("1");

    match db.write().await.customers.remove(&id) {
        Some(_) => Json(json!({ "status": "deleted", "id": id, "forgotten": forget })).into_response(),
        None => error(StatusCode::NOT_FOUND, "not_found", "customer not found"),
    }
}

async fn fail(Path(status): Path<u16>) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({ "error": "server_error" }))).into_response()
}

async fn empty() -> StatusCode {
    StatusCode::OK
}

async fn garbage() -> (StatusCode, &'static str) {
    (StatusCode::OK, "<html>upstream unavailable</html>")
}

async fn binary() -> (StatusCode, [(header::HeaderName, &'static str); 1], &'static [u8]) {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        &[0xff, 0xfe, b'{', b'}'],
    )
}

/// A JSON array of `items` strings, 1000 bytes each.
async fn large(Path(items): Path<usize>) -> Json<Vec<String>> {
    Json(vec!["x".repeat(1000); items])
}

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Json<Echo> {
    let decode = |raw: &[u8]| -> Vec<(String, String)> {
        form_urlencoded::parse(raw).into_owned().collect()
    };
    let echo = Echo {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(|q| decode(q.as_bytes())).unwrap_or_default(),
        form: decode(&body),
        api_key: header_value(&headers, "api-key"),
        api_secret: header_value(&headers, "api-secret"),
        content_type: header_value(&headers, header::CONTENT_TYPE.as_str()),
    };
    Json(echo)
}
