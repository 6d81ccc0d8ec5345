//! Fleet backend client
//!
//! One round trip per call: resolve the URL, send, and either parse the JSON
//! body or hand back the backend's error text untouched.

use flota_shared::protocol::{
    ApiRequest, BajaChofer, BajaCoche, DeleteRecaudacion, HttpMethod, ListChoferes, ListCoches,
    ListRecaudaciones,
};
use flota_shared::{
    CONTENT_TYPE_JSON, Chofer, ChoferCreate, Coche, CocheCreate, HEADER_CONTENT_TYPE, Recaudacion,
    RecaudacionCreate,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::AppConfig;
use crate::web::{FetchHttpClient, HttpClient, HttpError, HttpRequest};

// =========================================================
// Errors
// =========================================================

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Non-2xx response; `body` is the raw response text.
    Request { status: u16, body: String },
    /// No response at all.
    Transport(HttpError),
    /// Success body is not the expected JSON.
    Decode(String),
    /// Request body could not be serialized.
    Encode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ApiError::Request { body, .. } => f.write_str(body),
            ApiError::Transport(e) => write!(f, "{}", e),
            ApiError::Decode(msg) => write!(f, "Respuesta inválida: {}", msg),
            ApiError::Encode(msg) => write!(f, "Petición inválida: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<HttpError> for ApiError {
    fn from(e: HttpError) -> Self {
        ApiError::Transport(e)
    }
}

// =========================================================
// Request options
// =========================================================

/// Per-call overrides. Unset fields fall back to `GET`, no body, and the
/// default JSON content type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: Option<HttpMethod>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }

    pub fn body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    pub fn json<T: Serialize + ?Sized>(self, value: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_string(value).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(self.body(body))
    }

    /// Default `Content-Type` first, then caller headers; a caller header
    /// replaces any earlier one with the same (case-insensitive) name.
    pub fn resolved_headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![(
            HEADER_CONTENT_TYPE.to_string(),
            CONTENT_TYPE_JSON.to_string(),
        )];
        for (key, value) in &self.headers {
            match headers
                .iter_mut()
                .find(|(existing, _)| existing.eq_ignore_ascii_case(key))
            {
                Some(slot) => *slot = (key.clone(), value.clone()),
                None => headers.push((key.clone(), value.clone())),
            }
        }
        headers
    }
}

// =========================================================
// Client
// =========================================================

#[derive(Debug, Clone)]
pub struct ApiClient<C = FetchHttpClient> {
    base_url: String,
    client: C,
}

/// The client the views use.
pub type FleetApi = ApiClient<FetchHttpClient>;

impl FleetApi {
    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_client(config, FetchHttpClient)
    }
}

impl<C: HttpClient> ApiClient<C> {
    pub fn with_client(config: &AppConfig, client: C) -> Self {
        Self {
            base_url: config.api_base_url().to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Base URL plus the endpoint, which always starts with `/`.
    pub fn url(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}/{}", self.base_url, endpoint)
        }
    }

    /// Sends one request and returns the parsed JSON body.
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> Result<Value, ApiError> {
        let url = self.url(endpoint);
        log_info!("[Api] Llamando a API: {}", url);

        let req = HttpRequest {
            url,
            method: options.method.unwrap_or(HttpMethod::Get),
            headers: options.resolved_headers(),
            body: options.body,
        };

        let resp = self.client.send(req).await?;

        if !resp.ok() {
            return Err(ApiError::Request {
                status: resp.status,
                body: resp.body,
            });
        }

        // 204 and friends
        if resp.body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&resp.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `request`, deserialized into `T`.
    pub async fn request_as<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let value = self.request(endpoint, options).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Sends a typed request described by its `ApiRequest` impl.
    pub async fn send<R: ApiRequest>(&self, req: &R) -> Result<R::Response, ApiError> {
        let mut options = RequestOptions::new().method(R::METHOD);
        if let Some(body) = req.body() {
            options = options.json(body)?;
        }
        self.request_as(&req.path(), options).await
    }

    // --- Coches ---

    pub async fn coches(&self) -> Result<Vec<Coche>, ApiError> {
        self.send(&ListCoches::default()).await
    }

    pub async fn crear_coche(&self, coche: &CocheCreate) -> Result<Coche, ApiError> {
        self.send(coche).await
    }

    pub async fn baja_coche(&self, id: i64) -> Result<Coche, ApiError> {
        self.send(&BajaCoche(id)).await
    }

    // --- Choferes ---

    pub async fn choferes(&self) -> Result<Vec<Chofer>, ApiError> {
        self.send(&ListChoferes::default()).await
    }

    pub async fn crear_chofer(&self, chofer: &ChoferCreate) -> Result<Chofer, ApiError> {
        self.send(chofer).await
    }

    pub async fn baja_chofer(&self, id: i64) -> Result<Chofer, ApiError> {
        self.send(&BajaChofer(id)).await
    }

    // --- Recaudaciones ---

    pub async fn recaudaciones(&self) -> Result<Vec<Recaudacion>, ApiError> {
        self.send(&ListRecaudaciones::default()).await
    }

    pub async fn crear_recaudacion(
        &self,
        recaudacion: &RecaudacionCreate,
    ) -> Result<Recaudacion, ApiError> {
        self.send(recaudacion).await
    }

    pub async fn eliminar_recaudacion(&self, id: i64) -> Result<(), ApiError> {
        self.send(&DeleteRecaudacion(id)).await
    }
}

#[cfg(test)]
mod tests;
