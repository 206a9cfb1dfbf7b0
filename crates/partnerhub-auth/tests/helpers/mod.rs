//! Shared test fixtures: a mock dashboard API served over loopback.
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use axum::Router;
use axum::extract::{Json, Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::json;
use tokio::sync::Mutex;

use partnerhub_auth::client::navigator::Navigator;
use partnerhub_auth::{SessionClient, SessionStore};
use partnerhub_core::config::client::ClientConfig;

/// Build an unsigned-but-well-formed access credential with the given claims.
///
/// The `exp` value doubles as a way to mint distinct credential strings.
pub fn make_credential(sub: &str, role: &str, status: &str, exp: i64) -> String {
    let encode = |value: &serde_json::Value| {
        URL_SAFE_NO_PAD.encode(serde_json::to_vec(value).expect("serialize"))
    };
    let header = encode(&json!({"alg": "HS256", "typ": "JWT"}));
    let payload = encode(&json!({
        "sub": sub,
        "type": role,
        "status": status,
        "iat": 1_700_000_000,
        "exp": exp,
    }));
    format!("{header}.{payload}.test-signature")
}

/// Observable state of the mock dashboard.
#[derive(Default)]
pub struct MockState {
    /// Credential the protected route currently accepts.
    pub accepted_credential: Mutex<String>,
    /// Credential the refresh endpoint hands out; `None` makes renewal fail.
    pub renewal_credential: Mutex<Option<String>>,
    /// Credential the login endpoint hands out; `None` rejects the login.
    pub login_credential: Mutex<Option<String>>,
    /// When set, the logout endpoint answers 500.
    pub logout_rejects: AtomicBool,
    /// Number of refresh calls received.
    pub refresh_calls: AtomicUsize,
    /// Role path segment of each refresh call, in arrival order.
    pub refresh_roles: Mutex<Vec<String>>,
    /// Number of logout calls received.
    pub logout_calls: AtomicUsize,
    /// Authorization header of every protected-route hit, in arrival order.
    pub protected_hits: Mutex<Vec<Option<String>>>,
}

/// Navigator that counts redirect signals instead of navigating.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    redirects: AtomicUsize,
}

impl RecordingNavigator {
    pub fn redirect_count(&self) -> usize {
        self.redirects.load(Ordering::SeqCst)
    }
}

impl Navigator for RecordingNavigator {
    fn redirect_to_login(&self) {
        self.redirects.fetch_add(1, Ordering::SeqCst);
    }
}

/// A mock dashboard API listening on an ephemeral loopback port.
pub struct MockDashboard {
    pub state: Arc<MockState>,
    pub base_url: String,
}

/// A session client wired to a [`MockDashboard`].
pub struct TestClient {
    pub client: SessionClient,
    pub store: Arc<SessionStore>,
    pub navigator: Arc<RecordingNavigator>,
}

impl MockDashboard {
    /// Start the mock server on an ephemeral port.
    pub async fn spawn() -> Self {
        let state = Arc::new(MockState::default());
        let app = Router::new()
            .route("/api/auth/{role}/refresh", post(refresh))
            .route("/api/auth/{role}/login", post(login))
            .route("/api/auth/{role}/logout", post(logout))
            .route("/api/auth/{role}/signup", post(signup))
            .route("/api/partner/profile", get(profile))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve mock dashboard");
        });

        Self {
            state,
            base_url: format!("http://{addr}"),
        }
    }

    /// A fresh session client pointed at this server.
    pub fn test_client(&self) -> TestClient {
        let store = Arc::new(SessionStore::new());
        let navigator = Arc::new(RecordingNavigator::default());
        let navigator_dyn: Arc<dyn Navigator> = navigator.clone();

        let config = ClientConfig {
            base_url: self.base_url.clone(),
            ..ClientConfig::default()
        };
        let client = SessionClient::new(&config, Arc::clone(&store), navigator_dyn)
            .expect("build session client");

        TestClient {
            client,
            store,
            navigator,
        }
    }

    /// Make the protected route accept the given credential.
    pub async fn accept(&self, credential: &str) {
        *self.state.accepted_credential.lock().await = credential.to_owned();
    }

    /// Make the refresh endpoint hand out the given credential.
    pub async fn renew_with(&self, credential: &str) {
        *self.state.renewal_credential.lock().await = Some(credential.to_owned());
    }

    /// Make the refresh endpoint fail.
    pub async fn renewal_unavailable(&self) {
        *self.state.renewal_credential.lock().await = None;
    }

    /// Make the login endpoint hand out the given credential.
    pub async fn login_with(&self, credential: &str) {
        *self.state.login_credential.lock().await = Some(credential.to_owned());
    }

    pub fn refresh_calls(&self) -> usize {
        self.state.refresh_calls.load(Ordering::SeqCst)
    }

    pub fn logout_calls(&self) -> usize {
        self.state.logout_calls.load(Ordering::SeqCst)
    }

    /// Protected-route hits carrying the given bearer credential.
    pub async fn hits_with_credential(&self, credential: &str) -> usize {
        let expected = format!("Bearer {credential}");
        self.state
            .protected_hits
            .lock()
            .await
            .iter()
            .filter(|auth| auth.as_deref() == Some(expected.as_str()))
            .count()
    }

    pub async fn protected_hit_count(&self) -> usize {
        self.state.protected_hits.lock().await.len()
    }
}

async fn refresh(Path(role): Path<String>, State(state): State<Arc<MockState>>) -> Response {
    // Simulated network latency, so concurrent callers pile up behind one
    // in-flight renewal instead of racing the response.
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    state.refresh_calls.fetch_add(1, Ordering::SeqCst);
    state.refresh_roles.lock().await.push(role);

    match state.renewal_credential.lock().await.clone() {
        Some(credential) => envelope_ok(json!({"accessToken": credential})),
        None => envelope_err(StatusCode::UNAUTHORIZED, "Renewal credential is invalid"),
    }
}

async fn login(
    Path(_role): Path<String>,
    State(state): State<Arc<MockState>>,
    Json(_body): Json<serde_json::Value>,
) -> Response {
    match state.login_credential.lock().await.clone() {
        Some(credential) => envelope_ok(json!({"accessToken": credential})),
        None => envelope_err(StatusCode::UNAUTHORIZED, "Invalid email or password"),
    }
}

async fn logout(Path(_role): Path<String>, State(state): State<Arc<MockState>>) -> Response {
    state.logout_calls.fetch_add(1, Ordering::SeqCst);
    if state.logout_rejects.load(Ordering::SeqCst) {
        envelope_err(StatusCode::INTERNAL_SERVER_ERROR, "Logout is broken today")
    } else {
        envelope_ok(json!({}))
    }
}

async fn signup(
    Path(role): Path<String>,
    State(_state): State<Arc<MockState>>,
    Json(body): Json<serde_json::Value>,
) -> Response {
    let email = body.get("email").and_then(|v| v.as_str()).unwrap_or("");
    envelope_ok(json!({"id": 7, "email": email, "userType": role}))
}

async fn profile(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    state.protected_hits.lock().await.push(auth.clone());

    let expected = format!("Bearer {}", state.accepted_credential.lock().await);
    if auth.as_deref() == Some(expected.as_str()) {
        envelope_ok(json!({"profile": {"nickname": "tester"}}))
    } else {
        envelope_err(StatusCode::UNAUTHORIZED, "Access credential rejected")
    }
}

fn envelope_ok(data: serde_json::Value) -> Response {
    Json(json!({"success": true, "data": data})).into_response()
}

fn envelope_err(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({"success": false, "message": message}))).into_response()
}
