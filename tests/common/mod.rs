#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use serde_json::{Value, json};
use tokio::sync::oneshot;

pub const BANNER: &str = "Connected successfully";

/// One request as the fake API saw it.
#[derive(Clone, Debug)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub auth: Option<String>,
    pub body: Option<Value>,
}

/// Mutable state behind the fake content API.
#[derive(Default)]
pub struct ApiState {
    /// (user, password) pairs accepted by the login endpoint.
    pub users: Vec<(String, String)>,
    pub valid_tokens: Vec<String>,
    /// Prefix every body with the connection banner.
    pub banner: bool,
    /// Successful logins answer without a token.
    pub omit_token: bool,
    pub fail_fetch: bool,
    pub flat: Value,
    pub grid: Value,
    pub posts: Value,
    /// Scripted (status, body) replies for the next updates, oldest first.
    /// Unscripted updates succeed and patch the stored list.
    pub update_replies: Vec<(u16, Value)>,
    pub requests: Vec<Recorded>,
}

type Shared = Arc<Mutex<ApiState>>;

pub struct FakeApi {
    pub base_url: String,
    pub state: Shared,
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl FakeApi {
    pub fn requests(&self) -> Vec<Recorded> {
        self.state.lock().unwrap().requests.clone()
    }

    /// Requests to paths under `ads/updater/`.
    pub fn updates(&self) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.path.starts_with("/ads/updater/"))
            .collect()
    }

    pub fn with_state<T>(&self, f: impl FnOnce(&mut ApiState) -> T) -> T {
        f(&mut self.state.lock().unwrap())
    }
}

impl Drop for FakeApi {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

pub fn spawn_api(state: ApiState) -> Result<FakeApi> {
    let state: Shared = Arc::new(Mutex::new(state));
    let (addr_tx, addr_rx) = std::sync::mpsc::channel::<SocketAddr>();
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = router(state.clone());
    let thread = thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("build tokio runtime");
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind fake api");
            addr_tx
                .send(listener.local_addr().expect("local addr"))
                .expect("report addr");
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .expect("serve fake api");
        });
    });

    let addr = addr_rx
        .recv_timeout(Duration::from_secs(5))
        .context("fake api did not start")?;

    Ok(FakeApi {
        base_url: format!("http://{}/", addr),
        state,
        shutdown: Some(shutdown_tx),
        thread: Some(thread),
    })
}

/// Base URL nothing listens on.
pub fn dead_base_url() -> Result<String> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").context("bind probe")?;
    let addr = listener.local_addr().context("probe addr")?;
    drop(listener);
    Ok(format!("http://{}/", addr))
}

/// Fake API with one operator account and a small data set.
pub fn standard_state() -> ApiState {
    ApiState {
        users: vec![("alice".to_string(), "s3cret".to_string())],
        flat: json!([
            {"id": 1, "title": "A"},
            {"id": 2, "title": "B"}
        ]),
        grid: json!([
            {"id": 1, "title": "g1", "Group": "Home"},
            {"id": 2, "title": "g2", "Group": "Sports"},
            {"id": 3, "title": "g3", "Group": "Home"}
        ]),
        posts: json!([
            {"id": 10, "title": "Summer Sale", "image_url": "http://img/1.png"},
            {"id": 11, "title": "Winter promo", "image_url": "http://img/2.png"}
        ]),
        ..ApiState::default()
    }
}

fn router(state: Shared) -> Router {
    Router::new()
        .route("/security/login.php", get(verify).post(login))
        .route("/ads/fetcher/fetch_flatads.php", get(fetch))
        .route("/ads/fetcher/fetch_all_gridads.php", get(fetch))
        .route("/ads/fetcher/fetch_all.php", get(fetch))
        .route("/ads/updater/update_flatads.php", post(update))
        .route("/ads/updater/update_gridads.php", post(update))
        .route("/ads/updater/update_image_url.php", post(update))
        .with_state(state)
}

fn record(st: &mut ApiState, method: &Method, uri: &Uri, headers: &HeaderMap, body: &str) {
    st.requests.push(Recorded {
        method: method.to_string(),
        path: uri.path().to_string(),
        auth: headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_str(body).ok(),
    });
}

fn reply(st: &ApiState, status: u16, body: &Value) -> Response {
    let text = if st.banner {
        format!("{}\n{}", BANNER, body)
    } else {
        body.to_string()
    };
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, text).into_response()
}

async fn login(
    State(state): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let mut st = state.lock().unwrap();
    record(&mut st, &method, &uri, &headers, &body);

    let req: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    let user = req["user"].as_str().unwrap_or_default().to_string();
    let password = req["password"].as_str().unwrap_or_default();
    let known = st
        .users
        .iter()
        .any(|(u, p)| *u == user && p.as_str() == password);
    if !known {
        return reply(&st, 401, &json!({"error": "Invalid credentials"}));
    }
    if st.omit_token {
        return reply(&st, 200, &json!({}));
    }
    let token = format!("tok-{}", user);
    st.valid_tokens.push(token.clone());
    reply(&st, 200, &json!({ "token": token }))
}

async fn verify(
    State(state): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let mut st = state.lock().unwrap();
    record(&mut st, &method, &uri, &headers, "");

    let token = st
        .requests
        .last()
        .and_then(|r| r.auth.clone())
        .and_then(|a| a.strip_prefix("Bearer ").map(str::to_string));
    match token {
        Some(t) if st.valid_tokens.contains(&t) => reply(&st, 200, &json!({"valid": true})),
        _ => reply(&st, 401, &json!({"error": "Unauthorized"})),
    }
}

async fn fetch(
    State(state): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let mut st = state.lock().unwrap();
    record(&mut st, &method, &uri, &headers, "");

    if st.fail_fetch {
        return reply(&st, 500, &json!({"error": "database down"}));
    }
    let list = match uri.path() {
        "/ads/fetcher/fetch_flatads.php" => st.flat.clone(),
        "/ads/fetcher/fetch_all_gridads.php" => st.grid.clone(),
        _ => st.posts.clone(),
    };
    reply(&st, 200, &list)
}

async fn update(
    State(state): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let mut st = state.lock().unwrap();
    record(&mut st, &method, &uri, &headers, &body);

    if !st.update_replies.is_empty() {
        let (status, reply_body) = st.update_replies.remove(0);
        return reply(&st, status, &reply_body);
    }

    let req: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    let (list, field) = match uri.path() {
        "/ads/updater/update_flatads.php" => (&mut st.flat, "title"),
        "/ads/updater/update_gridads.php" => (&mut st.grid, "title"),
        _ => (&mut st.posts, "image_url"),
    };
    if let Some(rows) = list.as_array_mut() {
        for row in rows.iter_mut() {
            if row["id"].to_string() == req["id"].to_string() {
                row[field] = req[field].clone();
            }
        }
    }

    if field == "image_url" {
        reply(&st, 200, &json!({"message": "updated"}))
    } else {
        reply(&st, 200, &json!({"success": true}))
    }
}
