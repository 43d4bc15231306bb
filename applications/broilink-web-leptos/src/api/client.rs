use std::cell::Cell;
use std::rc::Rc;

use futures::future::{self, Either};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::auth::{browser_navigator, Navigator, Session, LOGIN_ROUTE};
use crate::config::AppConfig;

const XSRF_COOKIE: &str = "XSRF-TOKEN";
const XSRF_HEADER: &str = "X-XSRF-TOKEN";
const CSRF_COOKIE_PATH: &str = "/sanctum/csrf-cookie";
const CSRF_SETTLE_MS: u32 = 100;

/// API error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Request timed out after {0} ms")]
    Timeout(u32),
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Deserialization error: {0}")]
    Deserialization(String),
    #[error("Unauthorized - please log in")]
    Unauthorized,
    #[error("Request encoding error: {0}")]
    Encoding(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

impl ApiError {
    /// Text shown to the user in banners and alerts
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http { message, .. } if !message.is_empty() => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Unauthorized => Some(401),
            _ => None,
        }
    }
}

/// Payloads arrive either wrapped as `{"data": ...}` or bare
#[derive(Debug, Clone)]
pub enum Envelope<T> {
    Wrapped { data: T, message: Option<String> },
    Bare(T),
}

// A body with a `data` key is always the wrapped form, so a bad `data`
// fails instead of falling back to the bare form.
impl<'de, T: DeserializeOwned> Deserialize<'de> for Envelope<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut value = Value::deserialize(deserializer)?;
        match value.as_object_mut().and_then(|body| body.remove("data")) {
            Some(data) => {
                let message = value
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string);
                let data = T::deserialize(data).map_err(de::Error::custom)?;
                Ok(Envelope::Wrapped { data, message })
            }
            None => T::deserialize(value)
                .map(Envelope::Bare)
                .map_err(de::Error::custom),
        }
    }
}

impl<T> Envelope<T> {
    pub fn into_data(self) -> T {
        match self {
            Envelope::Wrapped { data, .. } | Envelope::Bare(data) => data,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Envelope::Wrapped { message, .. } => message.as_deref(),
            Envelope::Bare(_) => None,
        }
    }
}

/// Acknowledgement body of mutation endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// API client for making HTTP requests
#[derive(Clone)]
pub struct ApiClient {
    config: Rc<AppConfig>,
    session: Session,
    navigator: Rc<dyn Navigator>,
    csrf_ready: Rc<Cell<bool>>,
}

impl ApiClient {
    /// Client wired to window.ENV, localStorage and full-page redirects
    pub fn new() -> Self {
        Self::with_parts(AppConfig::from_env(), Session::browser(), browser_navigator())
    }

    pub fn with_parts(config: AppConfig, session: Session, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            config: Rc::new(config),
            session,
            navigator,
            csrf_ready: Rc::new(Cell::new(false)),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Make a GET request and deserialize the response
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.get_query(path, &[]).await
    }

    /// GET with query parameters
    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let request = self.prepare_get(path, query).build()?;
        let response = self.dispatch(request).await?;
        self.handle_response(response, true).await
    }

    /// GET a binary body (file export)
    pub async fn get_bytes(&self, path: &str, query: &[(&str, &str)]) -> Result<Vec<u8>, ApiError> {
        let request = self.prepare_get(path, query).build()?;
        let response = self.dispatch(request).await?;
        let response = self.check_status(response, true).await?;
        Ok(response.binary().await?)
    }

    /// Make a POST request with a JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::post(&self.config.service_url(path)))
            .json(body)
            .map_err(|e| ApiError::Encoding(e.to_string()))?;
        let response = self.dispatch(request).await?;
        self.handle_response(response, true).await
    }

    /// Make a PUT request with a JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::put(&self.config.service_url(path)))
            .json(body)
            .map_err(|e| ApiError::Encoding(e.to_string()))?;
        let response = self.dispatch(request).await?;
        self.handle_response(response, true).await
    }

    /// POST a multipart form (file uploads)
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: web_sys::FormData,
    ) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::post(&self.config.service_url(path)))
            .body(form)
            .map_err(|e| ApiError::Encoding(e.to_string()))?;
        let response = self.dispatch(request).await?;
        self.handle_response(response, true).await
    }

    /// POST whose 401 is reported to the caller instead of ending the session
    pub async fn post_public<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::post(&self.config.service_url(path)))
            .json(body)
            .map_err(|e| ApiError::Encoding(e.to_string()))?;
        let response = self.dispatch(request).await?;
        self.handle_response(response, false).await
    }

    /// Fetch the CSRF cookie once per client, then give the browser a moment
    /// to persist it before the first authenticated request
    pub async fn ensure_csrf_cookie(&self) -> Result<(), ApiError> {
        if self.csrf_ready.get() {
            return Ok(());
        }

        let request = Request::get(&self.config.root_url(CSRF_COOKIE_PATH))
            .credentials(web_sys::RequestCredentials::Include)
            .build()?;
        let response = match self.dispatch(request).await {
            Ok(response) => response,
            Err(e) => {
                log::error!("Failed to fetch CSRF cookie: {}", e);
                return Err(e);
            }
        };
        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            let err = http_error(response.status(), &body);
            log::error!("Failed to fetch CSRF cookie: {}", err);
            return Err(err);
        }

        log::debug!("CSRF cookie fetched");
        TimeoutFuture::new(CSRF_SETTLE_MS).await;
        self.csrf_ready.set(true);
        Ok(())
    }

    fn prepare_get(&self, path: &str, query: &[(&str, &str)]) -> RequestBuilder {
        let builder = Request::get(&self.config.service_url(path));
        let builder = if query.is_empty() {
            builder
        } else {
            builder.query(query.iter().copied())
        };
        self.authorize(builder)
    }

    /// Attach cookies, bearer token and XSRF token
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder
            .credentials(web_sys::RequestCredentials::Include)
            .header("Accept", "application/json");

        auth_headers(self.session.token(), read_xsrf_cookie())
            .into_iter()
            .fold(builder, |builder, (name, value)| builder.header(name, &value))
    }

    /// Send, racing the configured timeout
    async fn dispatch(&self, request: Request) -> Result<Response, ApiError> {
        let timeout_ms = self.config.timeout_ms;
        let send = Box::pin(request.send());
        let timeout = Box::pin(TimeoutFuture::new(timeout_ms));

        match future::select(send, timeout).await {
            Either::Left((result, _)) => Ok(result?),
            Either::Right(_) => Err(ApiError::Timeout(timeout_ms)),
        }
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
        intercept_unauthorized: bool,
    ) -> Result<T, ApiError> {
        let response = self.check_status(response, intercept_unauthorized).await?;
        let body = response.text().await?;
        parse_body(&body)
    }

    async fn check_status(
        &self,
        response: Response,
        intercept_unauthorized: bool,
    ) -> Result<Response, ApiError> {
        let status = response.status();

        if intercept_unauthorized {
            self.intercept_unauthorized(status)?;
        }

        if !response.ok() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(http_error(status, &body));
        }

        Ok(response)
    }

    /// A 401 ends the session and sends the user to the login screen
    pub(crate) fn intercept_unauthorized(&self, status: u16) -> Result<(), ApiError> {
        if status != 401 {
            return Ok(());
        }

        log::warn!("Received 401, clearing session");
        self.session.clear();
        self.navigator.navigate(LOGIN_ROUTE);
        Err(ApiError::Unauthorized)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Headers carrying the session and anti-forgery tokens
pub(crate) fn auth_headers(
    token: Option<String>,
    xsrf: Option<String>,
) -> Vec<(&'static str, String)> {
    let mut headers = Vec::with_capacity(2);
    if let Some(token) = token {
        headers.push(("Authorization", format!("Bearer {}", token)));
    }
    if let Some(xsrf) = xsrf {
        headers.push((XSRF_HEADER, xsrf));
    }
    headers
}

/// Build an HTTP error, preferring the server's `message` field
pub(crate) fn http_error(status: u16, body: &str) -> ApiError {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            let text = body.trim();
            if text.is_empty() {
                "Unknown error".to_string()
            } else {
                text.to_string()
            }
        });

    ApiError::Http { status, message }
}

/// Deserialize a response body; an empty body reads as an empty object
pub(crate) fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let body = if body.trim().is_empty() { "{}" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Look up a cookie in a `document.cookie` string and URL-decode it
pub(crate) fn find_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string())
        })
        .filter(|v| !v.is_empty())
}

fn read_xsrf_cookie() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let cookies = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
            .and_then(|d| d.cookie().ok())?;
        return find_cookie(&cookies, XSRF_COOKIE);
    }

    #[cfg(not(target_arch = "wasm32"))]
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::memory::MemoryStore;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNavigator {
        visits: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.visits.borrow_mut().push(path.to_string());
        }
    }

    fn client() -> (ApiClient, Rc<MemoryStore>, Rc<RecordingNavigator>) {
        let store = Rc::new(MemoryStore::default());
        let navigator = Rc::new(RecordingNavigator::default());
        let client = ApiClient::with_parts(
            AppConfig::default(),
            Session::new(store.clone()),
            navigator.clone(),
        );
        (client, store, navigator)
    }

    #[test]
    fn test_unauthorized_clears_session_and_redirects_once() {
        let (client, store, navigator) = client();
        client
            .session()
            .store_login("token-1", "Owner", &serde_json::json!({"name": "Sari"}));
        client.session().remember_default_config_once(&serde_json::json!({"a": 1}));

        let result = client.intercept_unauthorized(401);

        assert_eq!(result, Err(ApiError::Unauthorized));
        assert_eq!(store.keys(), vec!["defaultConfig"]);
        assert_eq!(*navigator.visits.borrow(), vec!["/login".to_string()]);
    }

    #[test]
    fn test_other_statuses_pass_through_interceptor() {
        let (client, store, navigator) = client();
        client.session().set_token("token-1");

        for status in [200, 403, 404, 500] {
            assert!(client.intercept_unauthorized(status).is_ok());
        }

        assert_eq!(store.keys(), vec!["token"]);
        assert!(navigator.visits.borrow().is_empty());
    }

    #[test]
    fn test_auth_headers() {
        assert!(auth_headers(None, None).is_empty());

        let headers = auth_headers(Some("abc".into()), Some("xyz".into()));
        assert_eq!(
            headers,
            vec![
                ("Authorization", "Bearer abc".to_string()),
                ("X-XSRF-TOKEN", "xyz".to_string()),
            ]
        );

        let headers = auth_headers(None, Some("xyz".into()));
        assert_eq!(headers, vec![("X-XSRF-TOKEN", "xyz".to_string())]);
    }

    #[test]
    fn test_find_cookie_decodes_value() {
        let cookies = "laravel_session=abc; XSRF-TOKEN=eyJpdiI6%3D%3D; theme=dark";
        assert_eq!(
            find_cookie(cookies, "XSRF-TOKEN").as_deref(),
            Some("eyJpdiI6==")
        );
        assert_eq!(find_cookie(cookies, "missing"), None);
        assert_eq!(find_cookie("", "XSRF-TOKEN"), None);
    }

    #[test]
    fn test_find_cookie_requires_exact_name() {
        let cookies = "OLD-XSRF-TOKEN=nope; XSRF-TOKEN=yes";
        assert_eq!(find_cookie(cookies, "XSRF-TOKEN").as_deref(), Some("yes"));
    }

    #[test]
    fn test_http_error_prefers_server_message() {
        let err = http_error(422, r#"{"message":"Farm not found"}"#);
        assert_eq!(
            err,
            ApiError::Http {
                status: 422,
                message: "Farm not found".to_string()
            }
        );
        assert_eq!(err.user_message(), "Farm not found");

        let err = http_error(500, "Internal Server Error");
        assert_eq!(err.user_message(), "Internal Server Error");

        let err = http_error(502, "   ");
        assert_eq!(err.user_message(), "Unknown error");
    }

    #[test]
    fn test_user_message_for_transport_errors() {
        assert_eq!(
            ApiError::Timeout(30000).user_message(),
            "Request timed out after 30000 ms"
        );
        assert_eq!(
            ApiError::Network("connection refused".into()).user_message(),
            "Network error: connection refused"
        );
    }

    #[test]
    fn test_envelope_accepts_wrapped_and_bare() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Farm {
            farm_id: i64,
        }

        let wrapped: Envelope<Farm> =
            parse_body(r#"{"success":true,"message":"ok","data":{"farm_id":3}}"#).unwrap();
        assert_eq!(wrapped.message(), Some("ok"));
        assert_eq!(wrapped.into_data(), Farm { farm_id: 3 });

        let bare: Envelope<Farm> = parse_body(r#"{"farm_id":4}"#).unwrap();
        assert_eq!(bare.message(), None);
        assert_eq!(bare.into_data(), Farm { farm_id: 4 });
    }

    #[test]
    fn test_envelope_with_bad_data_is_an_error() {
        #[derive(Debug, Default, Deserialize)]
        #[serde(default)]
        struct Summary {
            #[allow(dead_code)]
            total: Option<i64>,
        }

        let null_data: Result<Envelope<Summary>, _> = parse_body(r#"{"success":true,"data":null}"#);
        assert!(matches!(null_data, Err(ApiError::Deserialization(_))));

        let malformed: Result<Envelope<Summary>, _> = parse_body(r#"{"data":"oops"}"#);
        assert!(matches!(malformed, Err(ApiError::Deserialization(_))));

        let bare: Envelope<Summary> = parse_body(r#"{"total":5}"#).unwrap();
        assert!(matches!(bare, Envelope::Bare(Summary { total: Some(5) })));
    }

    #[test]
    fn test_empty_body_parses_as_message() {
        let message: ApiMessage = parse_body("").unwrap();
        assert!(message.message.is_none());
    }

    #[test]
    fn test_bad_body_is_deserialization_error() {
        let result: Result<ApiMessage, _> = parse_body("<html>");
        assert!(matches!(result, Err(ApiError::Deserialization(_))));
    }
}
