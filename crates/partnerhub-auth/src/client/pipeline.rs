//! The session-aware request pipeline.
//!
//! Every outgoing call gets the current access credential attached. When
//! the server rejects the credential, exactly one renewal runs against the
//! refresh endpoint (the renewal cookie rides on the shared cookie store)
//! while other failing requests queue behind it; each request is replayed
//! at most once with the renewed credential.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{self, HeaderValue};
use reqwest::{Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use partnerhub_core::config::client::ClientConfig;
use partnerhub_core::error::ErrorKind;
use partnerhub_core::types::ApiEnvelope;
use partnerhub_core::{AppError, AppResult};

use crate::account::{AuthAccount, PartnerRole};
use crate::jwt::ClaimsDecoder;
use crate::session::SessionStore;

use super::navigator::Navigator;
use super::renewal::{GateEntry, RenewalGate};
use super::request::ApiRequest;
use super::wire::{CreatorSignup, LoginRequest, SellerSignup, SignupResponse, TokenResponse};

/// Session-aware HTTP client for the dashboard API.
///
/// Constructed once at application startup and shared by reference with
/// every call site. All mutable state lives in the injected
/// [`SessionStore`] and the internal renewal gate.
pub struct SessionClient {
    /// Underlying HTTP client; its cookie store carries the renewal cookie.
    http: reqwest::Client,
    /// API origin, without a trailing slash.
    base_url: String,
    /// Role used for renewal when the session holds none.
    fallback_role: PartnerRole,
    /// Shared session state.
    store: Arc<SessionStore>,
    /// Single-flight renewal coordination.
    renewal: RenewalGate,
    /// Receiver of the forced-navigation side effect.
    navigator: Arc<dyn Navigator>,
    /// Latch ensuring the silent bootstrap runs at most once.
    bootstrapped: OnceCell<bool>,
}

impl std::fmt::Debug for SessionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionClient")
            .field("base_url", &self.base_url)
            .field("fallback_role", &self.fallback_role)
            .finish()
    }
}

impl SessionClient {
    /// Build a client from configuration, a session store, and a navigator.
    pub fn new(
        config: &ClientConfig,
        store: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> AppResult<Self> {
        let fallback_role: PartnerRole = config.fallback_role.parse()?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        let http = reqwest::Client::builder()
            .cookie_store(true)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to build HTTP client: {e}"),
                    e,
                )
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            fallback_role,
            store,
            renewal: RenewalGate::new(),
            navigator,
            bootstrapped: OnceCell::new(),
        })
    }

    /// The session store this client reads and mutates.
    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// Send a request through the pipeline.
    ///
    /// Transport failures map to [`ErrorKind::Network`]. A `401` triggers
    /// the renewal path; any other response is returned untouched for the
    /// caller to interpret. After a successful renewal the request is
    /// replayed once, and that response is returned untouched even if it
    /// is again a `401`.
    pub async fn send(&self, request: ApiRequest) -> AppResult<Response> {
        let credential = self.store.access_credential().await;
        let response = self.dispatch(&request, credential.as_deref()).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        debug!(path = %request.path, "Access credential rejected, renewing");
        let renewed = match self.renewal.enter().await {
            GateEntry::Leader => self.renew_as_leader().await?,
            GateEntry::Follower(rx) => rx.await.map_err(|_| {
                AppError::session("Credential renewal failed while this request was queued")
            })?,
        };

        self.dispatch(&request, Some(renewed.as_str())).await
    }

    /// Send a request and parse a successful envelope payload.
    ///
    /// A `401` that survives renewal maps to [`ErrorKind::Authentication`];
    /// other non-2xx statuses and `success: false` envelopes map to
    /// [`ErrorKind::Api`].
    pub async fn fetch_json<T: DeserializeOwned>(&self, request: ApiRequest) -> AppResult<T> {
        let path = request.path.clone();
        let response = self.send(request).await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(AppError::authentication(format!(
                "'{path}' rejected the credential even after renewal"
            )));
        }
        if !status.is_success() {
            let message = response
                .json::<ApiEnvelope<serde_json::Value>>()
                .await
                .map(|envelope| envelope.failure_message())
                .unwrap_or_else(|_| format!("'{path}' failed with status {status}"));
            return Err(AppError::api(message));
        }

        let envelope: ApiEnvelope<T> = response.json().await.map_err(|e| {
            AppError::serialization(format!("'{path}' answered with an unreadable envelope: {e}"))
        })?;
        if !envelope.success {
            return Err(AppError::api(envelope.failure_message()));
        }
        envelope
            .data
            .ok_or_else(|| AppError::api(format!("'{path}' envelope is missing its data payload")))
    }

    /// Silent session bootstrap, run at most once per client.
    ///
    /// Attempts one renewal using the cookie already held by the HTTP
    /// client. Failure is the normal anonymous-visitor case and is not
    /// surfaced; either way the store is marked initialized exactly once.
    /// Returns whether a session was established.
    pub async fn bootstrap(&self) -> bool {
        *self.bootstrapped.get_or_init(|| self.bootstrap_once()).await
    }

    async fn bootstrap_once(&self) -> bool {
        if self.store.is_authenticated().await {
            self.store.mark_initialized().await;
            return true;
        }

        let established = match self.renew_credential().await {
            Ok(_) => true,
            Err(err) => {
                debug!(error = %err, "Silent renewal found no session");
                self.store.clear().await;
                false
            }
        };

        self.store.mark_initialized().await;
        established
    }

    /// Log in with email and password under the given role.
    ///
    /// On success the store is populated from the decoded credential
    /// claims and a snapshot of the account is returned.
    pub async fn login(
        &self,
        role: PartnerRole,
        email: &str,
        password: &str,
    ) -> AppResult<AuthAccount> {
        let path = format!("/api/auth/{}/login", role.as_path_segment());
        let body = LoginRequest { email, password };
        let envelope: ApiEnvelope<TokenResponse> = self.bare_post(&path, Some(&body)).await?;
        if !envelope.success {
            return Err(AppError::authentication(envelope.failure_message()));
        }
        let credential = envelope
            .data
            .map(|data| data.access_credential)
            .ok_or_else(|| AppError::authentication("Login response is missing its credential"))?;

        let claims = ClaimsDecoder::decode(&credential)?;
        self.store.set_session(&credential, &claims).await?;

        let account = AuthAccount {
            subject_id: claims.subject_id()?,
            role: claims.role,
            status: claims.status,
        };
        info!(subject_id = account.subject_id, role = %account.role, "Login successful");
        Ok(account)
    }

    /// Log out: best-effort server call, then clear the local session.
    ///
    /// The local session is cleared and the navigator invoked regardless
    /// of what the server answers.
    pub async fn logout(&self) {
        let session = self.store.snapshot().await;
        if let (Some(role), Some(credential)) = (session.role, session.access_credential) {
            let url = self.endpoint(&format!("/api/auth/{}/logout", role.as_path_segment()));
            let result = self
                .http
                .post(url)
                .header(header::AUTHORIZATION, format!("Bearer {credential}"))
                .send()
                .await;
            match result {
                Ok(response) if response.status().is_success() => {
                    info!(role = %role, "Logout acknowledged by server");
                }
                Ok(response) => {
                    warn!(status = %response.status(), "Logout call rejected; clearing local session anyway");
                }
                Err(err) => {
                    warn!(error = %err, "Logout call failed; clearing local session anyway");
                }
            }
        }

        self.store.clear().await;
        self.navigator.redirect_to_login();
    }

    /// Register a new seller account. Does not log in.
    pub async fn signup_seller(&self, signup: &SellerSignup) -> AppResult<SignupResponse> {
        self.signup(PartnerRole::Seller, signup).await
    }

    /// Register a new creator account. Does not log in.
    pub async fn signup_creator(&self, signup: &CreatorSignup) -> AppResult<SignupResponse> {
        self.signup(PartnerRole::Creator, signup).await
    }

    async fn signup<B: Serialize>(
        &self,
        role: PartnerRole,
        body: &B,
    ) -> AppResult<SignupResponse> {
        let path = format!("/api/auth/{}/signup", role.as_path_segment());
        let envelope: ApiEnvelope<SignupResponse> = self.bare_post(&path, Some(body)).await?;
        if !envelope.success {
            return Err(AppError::api(envelope.failure_message()));
        }
        envelope
            .data
            .ok_or_else(|| AppError::api("Signup response is missing its payload"))
    }

    /// Perform the renewal as the gate leader and settle the waiters.
    async fn renew_as_leader(&self) -> AppResult<String> {
        match self.renew_credential().await {
            Ok(credential) => {
                self.renewal.complete(&credential).await;
                Ok(credential)
            }
            Err(err) => {
                warn!(error = %err, "Credential renewal failed, ending session");
                self.store.clear().await;
                self.renewal.abort().await;
                self.navigator.redirect_to_login();
                Err(AppError::session(format!(
                    "Credential renewal failed: {}",
                    err.message
                )))
            }
        }
    }

    /// Issue the bare renewal call and update the session on success.
    ///
    /// Deliberately not routed through [`Self::send`]: a rejected renewal
    /// must fail, not trigger another renewal.
    async fn renew_credential(&self) -> AppResult<String> {
        let role = self.store.role().await.unwrap_or(self.fallback_role);
        let path = format!("/api/auth/{}/refresh", role.as_path_segment());
        debug!(role = %role, "Renewing access credential");

        let envelope: ApiEnvelope<TokenResponse> = self.bare_post::<(), _>(&path, None).await?;
        if !envelope.success {
            return Err(AppError::authentication(envelope.failure_message()));
        }
        let credential = envelope
            .data
            .map(|data| data.access_credential)
            .ok_or_else(|| AppError::authentication("Renewal response is missing its credential"))?;

        let claims = ClaimsDecoder::decode(&credential)?;
        self.store.set_session(&credential, &claims).await?;
        info!(subject_id = %claims.sub, role = %claims.role, "Access credential renewed");
        Ok(credential)
    }

    /// Build and dispatch one HTTP attempt for the given request.
    async fn dispatch(&self, request: &ApiRequest, credential: Option<&str>) -> AppResult<Response> {
        let url = self.endpoint(&request.path);
        let mut builder = self.http.request(request.method.clone(), url);
        if let Some(credential) = credential {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {credential}"));
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        builder.send().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Network,
                format!("Request to '{}' failed: {e}", request.path),
                e,
            )
        })
    }

    /// POST an auth endpoint outside the pipeline and read its envelope.
    ///
    /// The envelope is parsed regardless of HTTP status — the server
    /// answers failures with `success: false` bodies on error statuses.
    async fn bare_post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> AppResult<ApiEnvelope<T>> {
        let mut builder = self.http.post(self.endpoint(path));
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Network,
                format!("Request to '{path}' failed: {e}"),
                e,
            )
        })?;

        let status = response.status();
        response.json::<ApiEnvelope<T>>().await.map_err(|_| {
            AppError::api(format!(
                "'{path}' answered {status} without a readable envelope"
            ))
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
