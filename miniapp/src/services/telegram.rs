//! Telegram WebApp bridge.
//!
//! The app runs inside Telegram's webview and talks to the host through
//! the `Telegram.WebApp` object. [`WebViewHost`] abstracts that surface
//! so the startup flow can run against a stub in tests and against an
//! environment-driven host in the dev binary.
//!
//! Startup sequence:
//!
//! ```text
//! wait for host (bounded) ──> chrome setup ──> init-data exchange
//!                                                   │
//!                    valid stored token? ── skip exchange entirely
//!                    any failure?        ── swallow, run anonymous
//! ```
//!
//! Authentication is best-effort. The app never blocks on a broken host
//! or an unreachable backend; it degrades to [`AuthOutcome::Anonymous`]
//! and lets individual requests fail with their own messages.

use std::sync::Arc;
use std::time::Duration;

use shared::{TelegramAuthResponse, TelegramUser};

use crate::core::{ApiService, AppConfig};
use crate::services::session::SessionStore;

/// Interval between host-availability polls during the ready wait.
const POLL_INTERVAL_MS: u64 = 100;

/// Surface the Telegram webview exposes to the app.
///
/// Command methods are fire-and-forget; the host gives no acknowledgement
/// and failures are invisible, matching the real `Telegram.WebApp` API.
pub trait WebViewHost: Send + Sync {
    /// True once the host object has been injected and is usable.
    fn is_available(&self) -> bool;

    /// Raw signed `initData` payload, when launched from Telegram.
    fn init_data(&self) -> Option<String>;

    /// Signals the host that the app has rendered.
    fn ready(&self);

    /// Expands the webview to full height.
    fn expand(&self);

    fn set_header_color(&self, color: &str);

    fn set_background_color(&self, color: &str);

    /// Asks the host to confirm before the user swipes the app closed.
    fn enable_closing_confirmation(&self);
}

/// Host stand-in for contexts with no webview at all. Never available,
/// never has init data, drops every command.
pub struct NullHost;

impl WebViewHost for NullHost {
    fn is_available(&self) -> bool {
        false
    }

    fn init_data(&self) -> Option<String> {
        None
    }

    fn ready(&self) {}

    fn expand(&self) {}

    fn set_header_color(&self, _color: &str) {}

    fn set_background_color(&self, _color: &str) {}

    fn enable_closing_confirmation(&self) {}
}

/// Development host driven by the process environment.
///
/// Reads `CARDWATCH_INIT_DATA` once at construction so a captured
/// payload can be replayed against a local backend. Chrome commands are
/// logged instead of executed.
pub struct EnvHost {
    init_data: Option<String>,
}

impl EnvHost {
    pub fn from_env() -> Self {
        Self {
            init_data: std::env::var("CARDWATCH_INIT_DATA")
                .ok()
                .filter(|v| !v.is_empty()),
        }
    }
}

impl WebViewHost for EnvHost {
    fn is_available(&self) -> bool {
        true
    }

    fn init_data(&self) -> Option<String> {
        self.init_data.clone()
    }

    fn ready(&self) {
        tracing::debug!("webview command: ready");
    }

    fn expand(&self) {
        tracing::debug!("webview command: expand");
    }

    fn set_header_color(&self, color: &str) {
        tracing::debug!(color, "webview command: setHeaderColor");
    }

    fn set_background_color(&self, color: &str) {
        tracing::debug!(color, "webview command: setBackgroundColor");
    }

    fn enable_closing_confirmation(&self) {
        tracing::debug!("webview command: enableClosingConfirmation");
    }
}

/// How startup authentication concluded.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    /// Init data was exchanged for a fresh session token.
    Authenticated { user: Option<TelegramUser> },
    /// A stored, unexpired token was reused; no exchange happened.
    AlreadyAuthenticated,
    /// No usable host, init data, token or backend. Requests go out with
    /// the configured fallback token or bare.
    Anonymous,
}

/// Orchestrates the host handshake and the init-data exchange.
pub struct TelegramBridge {
    host: Arc<dyn WebViewHost>,
    api: Arc<dyn ApiService>,
    session: Arc<SessionStore>,
    config: Arc<AppConfig>,
}

impl TelegramBridge {
    pub fn new(
        host: Arc<dyn WebViewHost>,
        api: Arc<dyn ApiService>,
        session: Arc<SessionStore>,
        config: Arc<AppConfig>,
    ) -> Self {
        Self {
            host,
            api,
            session,
            config,
        }
    }

    /// Runs the full startup sequence and reports how auth concluded.
    #[tracing::instrument(skip(self))]
    pub async fn startup(&self) -> AuthOutcome {
        if self.wait_for_host().await {
            self.setup_chrome();
        } else {
            tracing::warn!(
                timeout_ms = self.config.ready_timeout_ms,
                "Webview host not ready in time, starting without it"
            );
        }

        self.authenticate().await
    }

    /// Polls host availability until it appears or the configured
    /// timeout elapses. Returns immediately when already available.
    pub async fn wait_for_host(&self) -> bool {
        let deadline =
            tokio::time::Instant::now() + Duration::from_millis(self.config.ready_timeout_ms);

        loop {
            if self.host.is_available() {
                return true;
            }
            if tokio::time::Instant::now() >= deadline {
                return false;
            }
            tokio::time::sleep(Duration::from_millis(POLL_INTERVAL_MS)).await;
        }
    }

    /// Issues the chrome commands that shape the webview: ready signal,
    /// full-height expand, brand colors, close confirmation.
    pub fn setup_chrome(&self) {
        self.host.ready();
        self.host.expand();
        self.host.set_header_color(&self.config.header_color);
        self.host.set_background_color(&self.config.background_color);
        self.host.enable_closing_confirmation();
        tracing::debug!("Webview chrome configured");
    }

    /// Exchanges init data for a session token unless a stored token is
    /// still valid. Every failure path lands on `Anonymous`.
    pub async fn authenticate(&self) -> AuthOutcome {
        if self.session.has_valid_token() {
            tracing::debug!("Reusing stored session token");
            return AuthOutcome::AlreadyAuthenticated;
        }

        if !self.host.is_available() {
            return AuthOutcome::Anonymous;
        }

        let init_data = match self.host.init_data() {
            Some(data) if !data.is_empty() => data,
            _ => {
                tracing::info!("No init data from host, running anonymous");
                return AuthOutcome::Anonymous;
            }
        };

        match self.api.authenticate_telegram(&init_data).await {
            Ok(response) => self.accept(response),
            Err(e) => {
                tracing::warn!(error = %e, "Auth exchange failed, running anonymous");
                AuthOutcome::Anonymous
            }
        }
    }

    fn accept(&self, response: TelegramAuthResponse) -> AuthOutcome {
        let token = match (response.success, response.token) {
            (true, Some(token)) if !token.is_empty() => token,
            _ => {
                tracing::warn!(
                    message = response.message.as_deref().unwrap_or("no message"),
                    "Backend declined init data, running anonymous"
                );
                return AuthOutcome::Anonymous;
            }
        };

        if let Err(e) = self.session.store(&token, response.expires_at) {
            tracing::error!(error = %e, "Failed to persist session token");
            return AuthOutcome::Anonymous;
        }

        tracing::info!(
            user_id = response.user.as_ref().map(|u| u.id),
            "Authenticated via Telegram init data"
        );
        AuthOutcome::Authenticated {
            user: response.user,
        }
    }
}
