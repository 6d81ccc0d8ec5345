//! HTTP transport
//!
//! `HttpClient` is the seam between the API client and the network. The
//! browser implementation goes through `window.fetch` via `web_sys`; tests
//! plug in `MockHttpClient`.

use flota_shared::protocol::HttpMethod;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

/// Transport-level failure: the request never produced an HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub enum HttpError {
    /// Request could not be built
    RequestBuildFailed(String),
    /// Fetch rejected (host unreachable, CORS, ...)
    NetworkError(String),
    /// Response body could not be read
    BodyReadFailed(String),
}

impl core::fmt::Display for HttpError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HttpError::RequestBuildFailed(msg) => write!(f, "Error al construir la petición: {}", msg),
            HttpError::NetworkError(msg) => write!(f, "Error de red: {}", msg),
            HttpError::BodyReadFailed(msg) => write!(f, "Error al leer la respuesta: {}", msg),
        }
    }
}

impl std::error::Error for HttpError {}

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// 2xx
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait::async_trait(?Send)]
pub trait HttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, HttpError>;
}

// =========================================================
// Browser fetch
// =========================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchHttpClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let headers = Headers::new()
            .map_err(|e| HttpError::RequestBuildFailed(format!("Headers: {:?}", e)))?;

        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| HttpError::RequestBuildFailed(format!("Header {}: {:?}", key, e)))?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());

        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(&req.url, &opts)
            .map_err(|e| HttpError::RequestBuildFailed(format!("{:?}", e)))?;

        let window = web_sys::window()
            .ok_or_else(|| HttpError::NetworkError("window no disponible".to_string()))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| HttpError::NetworkError(format!("{:?}", e)))?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| HttpError::NetworkError(format!("Response: {:?}", e)))?;

        let status = response.status();

        let promise = response
            .text()
            .map_err(|e| HttpError::BodyReadFailed(format!("{:?}", e)))?;
        let text = JsFuture::from(promise)
            .await
            .map_err(|e| HttpError::BodyReadFailed(format!("{:?}", e)))?;
        let body = text
            .as_string()
            .ok_or_else(|| HttpError::BodyReadFailed("el cuerpo no es texto".to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

// =========================================================
// Test double: MockHttpClient
// =========================================================

#[cfg(test)]
pub struct MockHttpClient {
    // URL -> (status, body)
    responses: RefCell<HashMap<String, (u16, String)>>,
    failure: RefCell<Option<HttpError>>,
    pub requests: RefCell<Vec<HttpRequest>>,
}

#[cfg(test)]
impl MockHttpClient {
    pub fn new() -> Self {
        Self {
            responses: RefCell::new(HashMap::new()),
            failure: RefCell::new(None),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn mock_response(&self, url: &str, status: u16, body: &str) {
        self.responses
            .borrow_mut()
            .insert(url.to_string(), (status, body.to_string()));
    }

    /// Every following request fails at the transport level.
    pub fn fail_with(&self, error: HttpError) {
        *self.failure.borrow_mut() = Some(error);
    }
}

#[cfg(test)]
#[async_trait::async_trait(?Send)]
impl HttpClient for MockHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.borrow_mut().push(req.clone());

        if let Some(error) = self.failure.borrow().clone() {
            return Err(error);
        }

        let responses = self.responses.borrow();
        match responses.get(&req.url) {
            Some((status, body)) => Ok(HttpResponse {
                status: *status,
                body: body.clone(),
            }),
            None => Ok(HttpResponse {
                status: 404,
                body: r#"{"detail":"Not Found"}"#.to_string(),
            }),
        }
    }
}
