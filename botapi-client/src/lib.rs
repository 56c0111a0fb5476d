//! # botapi-client
//!
//! Async Telegram Bot API client over HTTPS.
//!
//! ## Features
//! - Typed calls: any [`RemoteCall`] parameter bag via [`Client::invoke`]
//! - Automatic body selection: `GET` for argument-less methods, JSON when
//!   nothing is uploaded, `multipart/form-data` when a file carries raw bytes
//! - Envelope decoding with a raise / suppress policy for remote errors
//! - Cooperative cancellation via [`CancellationToken`]
//! - Blocking calls for code outside an async runtime
//! - Pre-serialized JSON calls for methods without a typed bag
//!
//! ```rust,no_run
//! # async fn run() -> Result<(), botapi_client::InvocationError> {
//! use botapi_client::Client;
//!
//! let client = Client::new("123456:ABC-DEF")?;
//! let me = client.get_me().await?;
//! client.send_message(-100123, format!("{} is online", me.first_name)).await?;
//! # Ok(()) }
//! ```

#![deny(unsafe_code)]

mod errors;
mod methods;
pub mod envelope;
pub mod transport;

pub use envelope::{Envelope, ErrorPolicy};
pub use errors::{DecodeError, InvocationError, RemoteCallError};
pub use tokio_util::sync::CancellationToken;
pub use transport::{Body, Encoding, FormPart};

use std::fmt;
use std::future::Future;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use botapi_types::{ArgumentError, RemoteCall};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;

/// Default Bot API server.
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Advertised on every request.
const ACCEPT_VALUE: &str = "application/json, multipart/form-data";

// ─── Config ───────────────────────────────────────────────────────────────────

/// Configuration for [`Client::with_config`].
#[derive(Clone)]
pub struct Config {
    /// Bot token issued by @BotFather.
    pub token:        String,
    /// Server base URL, without the `/bot<token>` suffix.
    pub api_url:      String,
    /// Connection pool to use. `None` shares one process-wide default.
    pub http:         Option<reqwest::Client>,
    /// What to do with `ok: false` responses (default: raise).
    pub error_policy: ErrorPolicy,
    /// Per-request timeout covering connect, send and body read.
    pub timeout:      Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token:        String::new(),
            api_url:      DEFAULT_API_URL.to_owned(),
            http:         None,
            error_policy: ErrorPolicy::Raise,
            timeout:      None,
        }
    }
}

impl Config {
    /// Default configuration for `token`.
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into(), ..Default::default() }
    }

    /// Read `BOTAPI_TOKEN` and, if set, `BOTAPI_URL` from the environment.
    pub fn from_env() -> Result<Self, ArgumentError> {
        let token = std::env::var("BOTAPI_TOKEN").map_err(|_| ArgumentError::new("token", "BOTAPI_TOKEN is not set"))?;
        let mut config = Self::new(token);
        if let Ok(url) = std::env::var("BOTAPI_URL") {
            config.api_url = url;
        }
        Ok(config)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("http", &self.http.is_some())
            .field("error_policy", &self.error_policy)
            .field("timeout", &self.timeout)
            .finish()
    }
}

// ─── Shared state ─────────────────────────────────────────────────────────────

/// The process-wide pool used when [`Config::http`] is `None`.
///
/// Concurrent first uses may each build a client; only one is kept.
fn default_http() -> Result<reqwest::Client, reqwest::Error> {
    static DEFAULT: OnceLock<reqwest::Client> = OnceLock::new();
    if let Some(http) = DEFAULT.get() {
        return Ok(http.clone());
    }
    let built = reqwest::Client::builder().build()?;
    Ok(DEFAULT.get_or_init(|| built).clone())
}

struct ClientInner {
    http:         reqwest::Client,
    /// `<api_url>/bot<token>`; never logged.
    base:         String,
    error_policy: ErrorPolicy,
    timeout:      Option<Duration>,
    /// Created on the first blocking call.
    blocking:     OnceLock<Blocking>,
}

/// Runtime and pool for blocking calls.
///
/// The pool is never handed to async callers: its connections are driven
/// only while `block_on` runs, so a shared idle connection would stall the
/// next async call that picked it up.
struct Blocking {
    rt:   tokio::runtime::Runtime,
    http: reqwest::Client,
}

/// A Bot API client. Cheap to clone; internally Arc-wrapped.
///
/// Calls are independent of each other; the only shared state is the HTTP
/// connection pool.
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("error_policy", &self.inner.error_policy)
            .field("timeout", &self.inner.timeout)
            .finish_non_exhaustive()
    }
}

impl Client {
    // ── Construction ───────────────────────────────────────────────────────

    /// Client for `token` with default settings.
    pub fn new(token: impl Into<String>) -> Result<Self, InvocationError> {
        Self::with_config(Config::new(token))
    }

    /// Client from an explicit [`Config`].
    pub fn with_config(config: Config) -> Result<Self, InvocationError> {
        if config.token.trim().is_empty() {
            return Err(ArgumentError::empty("token").into());
        }
        let api_url = config.api_url.trim_end_matches('/');
        reqwest::Url::parse(api_url)
            .map_err(|e| ArgumentError::new("api_url", e.to_string()))?;

        let http = match config.http {
            Some(http) => http,
            None       => default_http()?,
        };
        tracing::debug!("[botapi] Client ready ({api_url}, policy={:?})", config.error_policy);

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                base:         format!("{api_url}/bot{}", config.token),
                error_policy: config.error_policy,
                timeout:      config.timeout,
                blocking:     OnceLock::new(),
            }),
        })
    }

    /// The policy applied by [`Client::invoke`].
    pub fn error_policy(&self) -> ErrorPolicy {
        self.inner.error_policy
    }

    // ── Typed calls ────────────────────────────────────────────────────────

    /// Send `req` and decode its result, raising or suppressing remote
    /// errors according to the configured [`ErrorPolicy`].
    pub async fn invoke<R: RemoteCall>(&self, req: &R) -> Result<R::Return, InvocationError> {
        self.invoke_with_policy(req, self.inner.error_policy).await
    }

    /// Like [`invoke`](Self::invoke) with an explicit policy for this call.
    pub async fn invoke_with_policy<R: RemoteCall>(
        &self,
        req:    &R,
        policy: ErrorPolicy,
    ) -> Result<R::Return, InvocationError> {
        self.dispatch(&self.inner.http, req, policy, None).await
    }

    /// Like [`invoke`](Self::invoke), abandoning the call with
    /// [`InvocationError::Cancelled`] as soon as `token` fires.
    ///
    /// Cancellation is observed while sending and while reading the
    /// response. A request that already reached the server may still take
    /// effect.
    pub async fn invoke_cancellable<R: RemoteCall>(
        &self,
        req:   &R,
        token: &CancellationToken,
    ) -> Result<R::Return, InvocationError> {
        self.dispatch(&self.inner.http, req, self.inner.error_policy, Some(token)).await
    }

    /// Blocking [`invoke`](Self::invoke) for synchronous code.
    ///
    /// Runs on a current-thread runtime owned by this client, with a
    /// connection pool of its own. [`Config::http`] is not used here. Returns
    /// an argument error if called from inside an async runtime.
    pub fn invoke_blocking<R: RemoteCall>(&self, req: &R) -> Result<R::Return, InvocationError> {
        if tokio::runtime::Handle::try_current().is_ok() {
            return Err(ArgumentError::new(
                "invoke_blocking",
                "cannot block inside an async runtime; use `invoke` instead",
            )
            .into());
        }
        let blocking = self.blocking()?;
        blocking.rt.block_on(self.dispatch(&blocking.http, req, self.inner.error_policy, None))
    }

    fn blocking(&self) -> Result<&Blocking, InvocationError> {
        if let Some(blocking) = self.inner.blocking.get() {
            return Ok(blocking);
        }
        let built = Blocking {
            rt:   tokio::runtime::Builder::new_current_thread().enable_all().build()?,
            http: reqwest::Client::builder().build()?,
        };
        Ok(self.inner.blocking.get_or_init(|| built))
    }

    async fn dispatch<R: RemoteCall>(
        &self,
        http:   &reqwest::Client,
        req:    &R,
        policy: ErrorPolicy,
        cancel: Option<&CancellationToken>,
    ) -> Result<R::Return, InvocationError> {
        req.validate()?;
        let body = transport::encode(req)?;
        self.execute(http, R::METHOD, body, policy, cancel).await
    }

    // ── Untyped calls ──────────────────────────────────────────────────────

    /// Post a pre-serialized JSON object to `method`.
    pub async fn invoke_json<T>(&self, method: &str, body: impl Into<Vec<u8>>) -> Result<T, InvocationError>
    where
        T: DeserializeOwned + Default,
    {
        require_method(method)?;
        self.execute(&self.inner.http, method, Body::Json(body.into()), self.inner.error_policy, None).await
    }

    /// Call an argument-less `method` with `GET`.
    pub async fn invoke_get<T>(&self, method: &str) -> Result<T, InvocationError>
    where
        T: DeserializeOwned + Default,
    {
        require_method(method)?;
        self.execute(&self.inner.http, method, Body::Empty, self.inner.error_policy, None).await
    }

    // ── Wire ───────────────────────────────────────────────────────────────

    async fn execute<T>(
        &self,
        http:   &reqwest::Client,
        method: &str,
        body:   Body,
        policy: ErrorPolicy,
        cancel: Option<&CancellationToken>,
    ) -> Result<T, InvocationError>
    where
        T: DeserializeOwned + Default,
    {
        let url = format!("{}/{method}", self.inner.base);
        tracing::debug!("[botapi] → {method} ({})", body.kind());

        let mut request = match body {
            Body::Empty        => http.get(url),
            Body::Json(bytes)  => http.post(url).header(CONTENT_TYPE, "application/json").body(bytes),
            Body::Multipart(p) => http.post(url).multipart(transport::into_form(p)?),
        };
        request = request.header(ACCEPT, ACCEPT_VALUE);
        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = until_cancelled(cancel, request.send()).await??;
        let status   = response.status();
        let is_json  = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(is_json_media_type);
        let bytes = until_cancelled(cancel, response.bytes()).await??;
        tracing::debug!("[botapi] ← {method} {status} ({} bytes)", bytes.len());

        if !status.is_success() && !is_json {
            return Err(InvocationError::Http {
                status: status.as_u16(),
                body:   String::from_utf8_lossy(&bytes).into_owned(),
            });
        }
        Envelope::parse(&bytes)?.into_result(policy)
    }
}

/// `true` for `application/json`, ignoring case and parameters.
fn is_json_media_type(content_type: &str) -> bool {
    let essence = content_type.split(';').next().unwrap_or_default();
    essence.trim().eq_ignore_ascii_case("application/json")
}

fn require_method(method: &str) -> Result<(), ArgumentError> {
    if method.is_empty() || method.contains('/') {
        return Err(ArgumentError::new("method", format!("`{method}` is not a method name")));
    }
    Ok(())
}

/// Await `fut`, or fail with [`InvocationError::Cancelled`] once `token` fires.
async fn until_cancelled<F: Future>(
    token: Option<&CancellationToken>,
    fut:   F,
) -> Result<F::Output, InvocationError> {
    let Some(token) = token else {
        return Ok(fut.await);
    };
    tokio::select! {
        biased;
        _   = token.cancelled() => Err(InvocationError::Cancelled),
        out = fut               => Ok(out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_is_rejected() {
        let err = Client::new("  ").unwrap_err();
        assert!(matches!(err, InvocationError::Argument(ArgumentError { name: "token", .. })));
    }

    #[test]
    fn bad_api_url_is_rejected() {
        let config = Config { api_url: "not a url".into(), ..Config::new("1:x") };
        assert!(matches!(Client::with_config(config), Err(InvocationError::Argument(_))));
    }

    #[test]
    fn debug_hides_token() {
        let shown = format!("{:?}", Config::new("123:SECRET"));
        assert!(!shown.contains("SECRET"), "{shown}");
    }

    #[test]
    fn method_names_are_checked() {
        assert!(require_method("getMe").is_ok());
        assert!(require_method("").is_err());
        assert!(require_method("../getMe").is_err());
    }

    #[test]
    fn json_media_type_ignores_case_and_parameters() {
        assert!(is_json_media_type("application/json"));
        assert!(is_json_media_type("Application/JSON; charset=utf-8"));
        assert!(!is_json_media_type("text/html"));
        assert!(!is_json_media_type("application/jsonp"));
    }

    #[tokio::test]
    async fn blocking_call_refuses_async_context() {
        let client = Client::new("1:x").unwrap();
        let err = client.invoke_blocking(&botapi_types::functions::GetMe).unwrap_err();
        assert!(matches!(err, InvocationError::Argument(_)));
    }
}
