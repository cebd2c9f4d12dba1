//! Auth gateway: login/registration flows and session bootstrap.

use std::sync::Arc;
use std::time::Duration;

use crate::api::types::{AuthResponse, RegisterRequest};
use crate::session::{Identity, Role, SessionStore};

/// Fallback message when a login failure body carries no message.
const LOGIN_FALLBACK_MESSAGE: &str = "Invalid username or password";

/// Fallback message when a registration failure body carries no message.
const REGISTER_FALLBACK_MESSAGE: &str = "Unable to create account";

/// Result of a credential exchange. Failures are values, not errors.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    /// Credentials accepted; the session store now holds this identity.
    Authenticated(Identity),
    /// Credentials rejected or the exchange failed; session unchanged.
    Rejected { message: String },
}

impl AuthOutcome {
    /// Whether the exchange succeeded.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }
}

/// Performs credential exchange and owns all session-store writes.
pub struct AuthGateway {
    http: reqwest::Client,
    base_url: String,
    store: Arc<SessionStore>,
}

impl AuthGateway {
    /// Create a gateway against `base_url` with the given request timeout.
    pub fn new(base_url: &str, timeout_secs: u64, store: Arc<SessionStore>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            store,
        })
    }

    /// Exchange a login name + secret for an authenticated session.
    ///
    /// On success the token and normalized identity are persisted before
    /// this returns. On any failure the session store is left untouched.
    pub async fn login(&self, login_name: &str, secret: &str) -> AuthOutcome {
        let body = serde_json::json!({
            "username": login_name,
            "password": secret,
        });

        let resp = match self
            .http
            .post(format!("{}/auth/login", self.base_url))
            .json(&body)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!("login request failed: {e}");
                return AuthOutcome::rejected(LOGIN_FALLBACK_MESSAGE);
            }
        };

        self.complete(resp, login_name, LOGIN_FALLBACK_MESSAGE).await
    }

    /// Create an account and authenticate as it in one exchange.
    pub async fn register(&self, request: &RegisterRequest) -> AuthOutcome {
        let resp = match self
            .http
            .post(format!("{}/auth/register", self.base_url))
            .json(request)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!("registration request failed: {e}");
                return AuthOutcome::rejected(REGISTER_FALLBACK_MESSAGE);
            }
        };

        self.complete(resp, &request.username, REGISTER_FALLBACK_MESSAGE)
            .await
    }

    /// Drop the session: removes both persisted entries. No network call.
    pub fn logout(&self) -> anyhow::Result<()> {
        self.store.clear()?;
        tracing::info!("session cleared");
        Ok(())
    }

    /// Shared tail of login/register: decode the response, normalize the
    /// identity, and bootstrap the session store.
    async fn complete(
        &self,
        resp: reqwest::Response,
        submitted_login: &str,
        fallback: &str,
    ) -> AuthOutcome {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message =
                crate::api::extract_message(&body).unwrap_or_else(|| fallback.to_string());
            tracing::info!(status = status.as_u16(), "credential exchange rejected");
            return AuthOutcome::rejected(message);
        }

        let payload: AuthResponse = match resp.json().await {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("malformed auth response: {e}");
                return AuthOutcome::rejected(fallback);
            }
        };

        // Normalize once, here. An unknown role never enters the store.
        let Some(role) = Role::parse(&payload.role) else {
            tracing::warn!(role = %payload.role, "unrecognized role in auth response");
            return AuthOutcome::rejected("Account role is not recognized");
        };

        let identity = Identity {
            subject_id: payload.user_id,
            login_name: payload
                .username
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| submitted_login.to_string()),
            display_name: payload.full_name,
            role,
        };

        // Identity first: an identity write failure leaves nothing to undo,
        // and a token write failure rolls the identity back. Either way a
        // rejected exchange leaves no partial session behind.
        if let Err(e) = self.store.set_identity(Some(identity.clone())) {
            tracing::warn!("failed to persist identity: {e}");
            return AuthOutcome::rejected(fallback);
        }
        if let Err(e) = self.store.set_token(&payload.token) {
            tracing::warn!("failed to persist token: {e}");
            if let Err(e) = self.store.set_identity(None) {
                tracing::warn!("failed to roll back identity: {e}");
            }
            return AuthOutcome::rejected(fallback);
        }

        tracing::info!(login = %identity.login_name, role = %identity.role, "authenticated");
        AuthOutcome::Authenticated(identity)
    }
}

// ── Tests ───────────────────────────────────────────────────────────
