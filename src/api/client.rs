use std::rc::Rc;

use reqwest::{header, Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config;

use super::types::ApiError;

pub const ACCESS_TOKEN_KEY: &str = "hrm_access_token";

/// Endpoint descriptor, declared once per endpoint in `api::routes` and
/// shared by every call site. Path segments in `{braces}` are filled from
/// `CallOptions::path_param`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub method: Method,
    pub path: &'static str,
    pub no_auth: bool,
}

impl Route {
    pub const fn new(method: Method, path: &'static str) -> Self {
        Self {
            method,
            path,
            no_auth: false,
        }
    }

    pub const fn public(method: Method, path: &'static str) -> Self {
        Self {
            method,
            path,
            no_auth: true,
        }
    }
}

/// Per-call request parameters. Built fresh for each call, never retained.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    path_params: Vec<(&'static str, String)>,
    query_params: Vec<(String, String)>,
    body: Option<Value>,
    silent: bool,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path_param(mut self, name: &'static str, value: impl std::fmt::Display) -> Self {
        self.path_params.push((name, value.to_string()));
        self
    }

    pub fn query(mut self, name: impl Into<String>, value: impl std::fmt::Display) -> Self {
        self.query_params.push((name.into(), value.to_string()));
        self
    }

    /// Absent values are omitted entirely, not sent as empty strings.
    pub fn query_opt(self, name: impl Into<String>, value: Option<impl std::fmt::Display>) -> Self {
        match value {
            Some(value) => self.query(name, value),
            None => self,
        }
    }

    /// Array-valued parameter: the key repeats once per value
    /// (`status=pending&status=approved`).
    pub fn query_each<I>(mut self, name: &str, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: std::fmt::Display,
    {
        for value in values {
            self.query_params.push((name.to_string(), value.to_string()));
        }
        self
    }

    pub fn body<T: Serialize>(self, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body)
            .map_err(|err| ApiError::unknown(format!("Failed to serialize request body: {}", err)))?;
        Ok(Self {
            body: Some(value),
            ..self
        })
    }

    /// Suppress global error reporting; the caller handles the failure.
    pub fn silent(mut self) -> Self {
        self.silent = true;
        self
    }
}

/// Where the bearer token comes from. Injected so tests and host shells
/// can supply credentials without touching browser storage.
pub trait TokenProvider {
    fn access_token(&self) -> Option<String>;
}

/// Reads the session-scoped token the host shell stores after sign-in.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionTokenProvider;

impl TokenProvider for SessionTokenProvider {
    fn access_token(&self) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            crate::utils::storage::read_session_item(ACCESS_TOKEN_KEY)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }
}

/// Fixed token, for tests and tooling.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenProvider(Option<String>);

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    pub fn anonymous() -> Self {
        Self(None)
    }
}

impl TokenProvider for StaticTokenProvider {
    fn access_token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Decoded success body, keyed off the response content type.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Binary(Vec<u8>),
    Text(String),
    Empty,
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    tokens: Rc<dyn TokenProvider>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            tokens: Rc::new(SessionTokenProvider),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            tokens: Rc::new(SessionTokenProvider),
        }
    }

    pub fn with_token_provider(mut self, tokens: Rc<dyn TokenProvider>) -> Self {
        self.tokens = tokens;
        self
    }

    async fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(base) => base.clone(),
            None => config::await_api_base_url().await,
        }
    }

    fn bearer_token(&self, route: &Route) -> Option<String> {
        if route.no_auth {
            None
        } else {
            self.tokens.access_token()
        }
    }

    pub(crate) fn fill_path(
        path: &'static str,
        params: &[(&'static str, String)],
    ) -> Result<String, ApiError> {
        let mut filled = path.to_string();
        for (name, value) in params {
            filled = filled.replace(&format!("{{{}}}", name), value);
        }
        if let Some(start) = filled.find('{') {
            let end = filled[start..]
                .find('}')
                .map(|offset| start + offset + 1)
                .unwrap_or(filled.len());
            let name = filled[start..end].trim_matches(|c| c == '{' || c == '}');
            return Err(ApiError::missing_path_param(path, name));
        }
        Ok(filled)
    }

    async fn dispatch(&self, route: &Route, options: &CallOptions) -> Result<Response, ApiError> {
        let base_url = self.resolved_base_url().await;
        let path = Self::fill_path(route.path, &options.path_params)?;
        let mut request = self
            .client
            .request(route.method.clone(), format!("{}{}", base_url, path))
            .header(header::ACCEPT, "application/json")
            .header(header::CONTENT_TYPE, "application/json");
        if !options.query_params.is_empty() {
            request = request.query(&options.query_params);
        }
        if let Some(token) = self.bearer_token(route) {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        if let Some(body) = &options.body {
            request = request.json(body);
        }
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::request_failed(format!("Request failed: {}", err)))?;
        Self::require_success(response, options.silent).await
    }

    async fn require_success(response: Response, silent: bool) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let cause = response
            .bytes()
            .await
            .ok()
            .and_then(|bytes| serde_json::from_slice::<Value>(&bytes).ok());
        Err(ApiError::http(status.as_u16(), cause, silent))
    }

    async fn parse_body(response: Response) -> Result<ResponseBody, ApiError> {
        if response.content_length() == Some(0) {
            return Ok(ResponseBody::Empty);
        }
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_string();
        if content_type.starts_with("application/json") {
            let bytes = response
                .bytes()
                .await
                .map_err(|err| ApiError::unknown(format!("Failed to read response: {}", err)))?;
            if bytes.is_empty() {
                return Ok(ResponseBody::Empty);
            }
            let value = serde_json::from_slice(&bytes)
                .map_err(|err| ApiError::unknown(format!("Failed to parse response: {}", err)))?;
            Ok(ResponseBody::Json(value))
        } else if content_type.starts_with("image/")
            || content_type.starts_with("application/octet-stream")
        {
            let bytes = response
                .bytes()
                .await
                .map_err(|err| ApiError::unknown(format!("Failed to read response: {}", err)))?;
            Ok(ResponseBody::Binary(bytes.to_vec()))
        } else {
            let text = response
                .text()
                .await
                .map_err(|err| ApiError::unknown(format!("Failed to read response: {}", err)))?;
            if text.is_empty() {
                Ok(ResponseBody::Empty)
            } else {
                Ok(ResponseBody::Text(text))
            }
        }
    }

    fn decode<R: DeserializeOwned>(body: ResponseBody) -> Result<R, ApiError> {
        let value = match body {
            ResponseBody::Json(value) => value,
            // DELETEs and action endpoints may answer 204.
            ResponseBody::Empty => Value::Null,
            ResponseBody::Text(_) | ResponseBody::Binary(_) => {
                return Err(ApiError::unknown("Expected a JSON response body"));
            }
        };
        serde_json::from_value(value)
            .map_err(|err| ApiError::unknown(format!("Failed to parse response: {}", err)))
    }

    pub async fn invoke_raw(
        &self,
        route: &Route,
        options: CallOptions,
    ) -> Result<ResponseBody, ApiError> {
        let response = self.dispatch(route, &options).await?;
        Self::parse_body(response).await
    }

    pub async fn invoke<R: DeserializeOwned>(
        &self,
        route: &Route,
        options: CallOptions,
    ) -> Result<R, ApiError> {
        let body = self.invoke_raw(route, options).await?;
        Self::decode(body)
    }

    pub async fn invoke_bytes(
        &self,
        route: &Route,
        options: CallOptions,
    ) -> Result<Vec<u8>, ApiError> {
        match self.invoke_raw(route, options).await? {
            ResponseBody::Binary(bytes) => Ok(bytes),
            ResponseBody::Text(text) => Ok(text.into_bytes()),
            ResponseBody::Json(value) => Ok(value.to_string().into_bytes()),
            ResponseBody::Empty => Ok(Vec::new()),
        }
    }

    /// Multipart upload path. The transport picks its own content type so
    /// the boundary header stays correct.
    pub async fn invoke_multipart<R: DeserializeOwned>(
        &self,
        route: &Route,
        options: CallOptions,
        form: reqwest::multipart::Form,
    ) -> Result<R, ApiError> {
        let base_url = self.resolved_base_url().await;
        let path = Self::fill_path(route.path, &options.path_params)?;
        let mut request = self
            .client
            .request(route.method.clone(), format!("{}{}", base_url, path))
            .header(header::ACCEPT, "application/json");
        if !options.query_params.is_empty() {
            request = request.query(&options.query_params);
        }
        if let Some(token) = self.bearer_token(route) {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let response = request
            .multipart(form)
            .send()
            .await
            .map_err(|err| ApiError::request_failed(format!("Request failed: {}", err)))?;
        let response = Self::require_success(response, options.silent).await?;
        let body = Self::parse_body(response).await?;
        Self::decode(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_path_substitutes_named_params() {
        let filled =
            ApiClient::fill_path("/api/hrm/leaves/{id}/", &[("id", "42".to_string())]).unwrap();
        assert_eq!(filled, "/api/hrm/leaves/42/");
    }

    #[test]
    fn fill_path_handles_multiple_params() {
        let filled = ApiClient::fill_path(
            "/api/v1/users/{username}/files/{id}/",
            &[
                ("username", "ada".to_string()),
                ("id", "f-9".to_string()),
            ],
        )
        .unwrap();
        assert_eq!(filled, "/api/v1/users/ada/files/f-9/");
    }

    #[test]
    fn fill_path_rejects_unfilled_placeholder() {
        let error = ApiClient::fill_path("/api/hrm/leaves/{id}/", &[]).unwrap_err();
        assert_eq!(error.code, "MISSING_PATH_PARAM");
        assert!(error.error.contains("{id}"));
    }

    #[test]
    fn call_options_skip_absent_values() {
        let options = CallOptions::new()
            .query("offset", 0)
            .query_opt("search", None::<&str>)
            .query_opt("department", Some("engineering"));
        assert_eq!(
            options.query_params,
            vec![
                ("offset".to_string(), "0".to_string()),
                ("department".to_string(), "engineering".to_string()),
            ]
        );
    }

    #[test]
    fn call_options_repeat_array_keys() {
        let options = CallOptions::new()
            .query_each("status", ["pending", "approved"])
            .query("offset", 0);
        assert_eq!(
            options.query_params,
            vec![
                ("status".to_string(), "pending".to_string()),
                ("status".to_string(), "approved".to_string()),
                ("offset".to_string(), "0".to_string()),
            ]
        );
    }

    #[test]
    fn public_routes_send_no_bearer() {
        let client = ApiClient::new_with_base_url("http://localhost:9")
            .with_token_provider(std::rc::Rc::new(StaticTokenProvider::new("token-1")));
        let open = Route::public(Method::GET, "/healthz");
        let guarded = Route::new(Method::GET, "/api/hrm/employees/");
        assert_eq!(client.bearer_token(&open), None);
        assert_eq!(client.bearer_token(&guarded), Some("token-1".to_string()));
    }

    #[test]
    fn decode_accepts_empty_bodies_as_unit() {
        ApiClient::decode::<()>(ResponseBody::Empty).unwrap();
        assert!(ApiClient::decode::<Option<u32>>(ResponseBody::Empty)
            .unwrap()
            .is_none());
    }
}
