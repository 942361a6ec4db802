//! In-process mock of the `CodeValley` backend.
//!
//! Serves a fixed set of `/auth` routes on a random local port and records the
//! `Authorization` header of every request it receives.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Multipart, Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use parking_lot::Mutex;
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub const EMAIL: &str = "a@b.com";
pub const PASSWORD: &str = "pw";
pub const TOKEN: &str = "T";

/// One received request.
#[derive(Debug, Clone)]
pub struct Seen {
    pub path: String,
    pub authorization: Option<String>,
}

/// Avatar upload as received by the backend.
#[derive(Debug, Clone, Default)]
pub struct ReceivedAvatar {
    pub user_id: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Default)]
struct Recorder {
    seen: Arc<Mutex<Vec<Seen>>>,
    avatar: Arc<Mutex<Option<ReceivedAvatar>>>,
}

impl Recorder {
    fn record(&self, path: impl Into<String>, headers: &HeaderMap) {
        let authorization = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.seen.lock().push(Seen {
            path: path.into(),
            authorization,
        });
    }
}

pub struct MockBackend {
    pub base_url: String,
    recorder: Recorder,
}

impl MockBackend {
    /// Starts the backend on a random port.
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let recorder = Recorder::default();

        let app = router(recorder.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            recorder,
        }
    }

    /// Returns every request received so far.
    pub fn seen(&self) -> Vec<Seen> {
        self.recorder.seen.lock().clone()
    }

    /// Returns the `Authorization` header of the last request to `path`.
    pub fn authorization_for(&self, path: &str) -> Option<String> {
        self.seen()
            .into_iter()
            .rev()
            .find(|s| s.path == path)
            .and_then(|s| s.authorization)
    }

    /// Returns the last avatar upload.
    pub fn avatar(&self) -> Option<ReceivedAvatar> {
        self.recorder.avatar.lock().clone()
    }
}

/// Returns a base URL on which nothing is listening.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn router(recorder: Recorder) -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/auth/me", get(me))
        .route("/auth/profile/{id}", get(profile))
        .route("/auth/search/{username}", get(search))
        .route("/auth/avatar", post(avatar))
        .route("/auth/2fa/generate", post(generate_two_factor))
        .route("/auth/2fa/authenticate", post(authenticate_two_factor))
        .route("/auth/2fa/turn-on", post(no_content))
        .route("/auth/2fa/turn-off", post(no_content))
        .route("/auth/logout", post(no_content))
        .route("/snippets/{name}", get(snippet))
        .with_state(recorder)
}

fn error_body(status: StatusCode, message: &str, kind: &str) -> Response {
    let body = json!({"message": message, "kind": kind, "code": status.as_u16()});
    (status, Json(body)).into_response()
}

fn is_authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TOKEN}"))
}

fn user(id: u64, username: &str) -> Value {
    json!({"id": id, "username": username, "email": format!("{username}@codevalley.dev"), "avatar": null})
}

async fn login(State(rec): State<Recorder>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    rec.record("/auth/login", &headers);

    match (body["email"].as_str(), body["password"].as_str()) {
        (Some(EMAIL), Some(PASSWORD)) => Json(json!({"accessToken": TOKEN})).into_response(),
        (Some("2fa@b.com"), Some(PASSWORD)) => Json(json!({
            "accessToken": "pending",
            "isTwoFactorAuthenticationEnabled": true
        }))
        .into_response(),
        (Some("proxy@b.com"), _) => {
            (StatusCode::BAD_GATEWAY, "<html>502 Bad Gateway</html>").into_response()
        }
        _ => error_body(StatusCode::UNAUTHORIZED, "Invalid credentials", "Unauthorized"),
    }
}

async fn register(State(rec): State<Recorder>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    rec.record("/auth/register", &headers);

    if body["email"].as_str() == Some(EMAIL) {
        let body = json!({"message": "Email already used", "error": "Conflict", "code": 409});
        return (StatusCode::CONFLICT, Json(body)).into_response();
    }
    if body["username"].as_str() == Some("") {
        return StatusCode::BAD_REQUEST.into_response();
    }
    (StatusCode::CREATED, Json(json!({"accessToken": "new-user"}))).into_response()
}

async fn me(State(rec): State<Recorder>, headers: HeaderMap) -> Response {
    rec.record("/auth/me", &headers);

    if !is_authorized(&headers) {
        return error_body(StatusCode::UNAUTHORIZED, "Unauthorized", "Unauthorized");
    }
    Json(user(1, "neo")).into_response()
}

async fn profile(State(rec): State<Recorder>, headers: HeaderMap, Path(id): Path<u64>) -> Response {
    rec.record(format!("/auth/profile/{id}"), &headers);

    if id == 404 {
        return error_body(StatusCode::NOT_FOUND, "User not found", "NotFound");
    }
    Json(user(id, "trinity")).into_response()
}

async fn search(
    State(rec): State<Recorder>,
    headers: HeaderMap,
    Path(username): Path<String>,
) -> Response {
    rec.record("/auth/search", &headers);
    Json(json!([user(2, &username), user(3, &format!("{username}_2"))])).into_response()
}

async fn avatar(State(rec): State<Recorder>, headers: HeaderMap, mut multipart: Multipart) -> Response {
    rec.record("/auth/avatar", &headers);

    let mut received = ReceivedAvatar::default();
    while let Ok(Some(field)) = multipart.next_field().await {
        match field.name() {
            Some("userId") => received.user_id = field.text().await.unwrap_or_default(),
            Some("file") => {
                received.file_name = field.file_name().map(str::to_string);
                received.content_type = field.content_type().map(str::to_string);
                received.bytes = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
            }
            _ => {}
        }
    }

    let user_id = received.user_id.clone();
    *rec.avatar.lock() = Some(received);

    if user_id == "0" {
        return (StatusCode::INTERNAL_SERVER_ERROR, "storage offline").into_response();
    }
    Json(json!({"avatarUrl": format!("https://cdn.codevalley.dev/avatars/{user_id}.jpg")}))
        .into_response()
}

async fn generate_two_factor(State(rec): State<Recorder>, headers: HeaderMap) -> Response {
    rec.record("/auth/2fa/generate", &headers);
    Json(json!({"qrCodeUrl": "data:image/png;base64,AAAA"})).into_response()
}

async fn authenticate_two_factor(
    State(rec): State<Recorder>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    rec.record("/auth/2fa/authenticate", &headers);

    if body["code"].as_str() == Some("123456") {
        Json(json!({"accessToken": TOKEN})).into_response()
    } else {
        error_body(StatusCode::UNAUTHORIZED, "Wrong authentication code", "Unauthorized")
    }
}

async fn no_content(State(rec): State<Recorder>, headers: HeaderMap) -> StatusCode {
    rec.record("/auth/other", &headers);
    StatusCode::CREATED
}

async fn snippet(State(rec): State<Recorder>, headers: HeaderMap, Path(name): Path<String>) -> Response {
    rec.record(format!("/snippets/{name}"), &headers);

    match name.as_str() {
        "hello.rs" => "fn main() {}\n".into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}
