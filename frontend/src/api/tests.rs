use super::*;
use crate::web::MockHttpClient;
use flota_shared::protocol::UpdateCoche;
use flota_shared::{CocheUpdate, EstadoChofer};
use serde_json::json;

// =========================================================
// Helpers
// =========================================================

const BASE: &str = "http://api.test";

fn create_api() -> ApiClient<MockHttpClient> {
    ApiClient::with_client(&AppConfig::new(BASE), MockHttpClient::new())
}

fn header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

// =========================================================
// URL resolution
// =========================================================

#[test]
fn test_url_prepends_slash() {
    let api = create_api();
    assert_eq!(api.url("coches"), "http://api.test/coches");
    assert_eq!(api.url("/coches"), "http://api.test/coches");
}

#[test]
fn test_base_url_from_config() {
    let api = ApiClient::with_client(&AppConfig::new("http://api.test/"), MockHttpClient::new());
    assert_eq!(api.base_url(), BASE);
    assert_eq!(api.url("choferes/3"), "http://api.test/choferes/3");
}

#[tokio::test]
async fn test_request_hits_normalized_url() {
    let api = create_api();
    api.client
        .mock_response("http://api.test/recaudaciones", 200, "[]");

    let value = api
        .request("recaudaciones", RequestOptions::new())
        .await
        .unwrap();

    assert_eq!(value, json!([]));
    let requests = api.client.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url, "http://api.test/recaudaciones");
    assert_eq!(requests[0].method, HttpMethod::Get);
}

// =========================================================
// Response handling
// =========================================================

#[tokio::test]
async fn test_success_parses_json() {
    let api = create_api();
    api.client.mock_response("http://api.test/coches/1", 200, r#"{"id":1}"#);

    let value = api.request("/coches/1", RequestOptions::new()).await.unwrap();

    assert_eq!(value, json!({"id": 1}));
}

#[tokio::test]
async fn test_failure_carries_raw_body() {
    let api = create_api();
    api.client
        .mock_response("http://api.test/coches/99", 404, "Not found");

    let err = api
        .request("/coches/99", RequestOptions::new())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Not found");
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_failure_body_is_not_reparsed() {
    let api = create_api();
    let body = r#"{"detail":"Ya existe un coche con esa Matrícula o Móvil."}"#;
    api.client.mock_response("http://api.test/coches/", 400, body);

    let err = api
        .request("/coches/", RequestOptions::new().method(HttpMethod::Post))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ApiError::Request {
            status: 400,
            body: body.to_string()
        }
    );
}

#[tokio::test]
async fn test_empty_success_body_is_null() {
    let api = create_api();
    api.client
        .mock_response("http://api.test/recaudaciones/5", 204, "");

    let value = api
        .request("/recaudaciones/5", RequestOptions::new().method(HttpMethod::Delete))
        .await
        .unwrap();
    assert_eq!(value, Value::Null);

    api.eliminar_recaudacion(5).await.unwrap();
}

#[tokio::test]
async fn test_invalid_json_is_decode_error() {
    let api = create_api();
    api.client.mock_response("http://api.test/coches/", 200, "<html>");

    let err = api.request("/coches/", RequestOptions::new()).await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_transport_error_propagates() {
    let api = create_api();
    api.client
        .fail_with(HttpError::NetworkError("TypeError: Failed to fetch".to_string()));

    let err = api.request("/coches/", RequestOptions::new()).await.unwrap_err();

    assert_eq!(
        err,
        ApiError::Transport(HttpError::NetworkError("TypeError: Failed to fetch".to_string()))
    );
    // Exactly one attempt, no retry.
    assert_eq!(api.client.requests.borrow().len(), 1);
}

// =========================================================
// Headers
// =========================================================

#[test]
fn test_default_content_type() {
    let headers = RequestOptions::new().resolved_headers();
    assert_eq!(
        headers,
        vec![("Content-Type".to_string(), "application/json".to_string())]
    );
}

#[test]
fn test_caller_header_wins() {
    let headers = RequestOptions::new()
        .header("content-type", "text/plain")
        .header("Accept", "application/json")
        .resolved_headers();

    assert_eq!(headers.len(), 2);
    assert_eq!(header(&headers, "Content-Type"), Some("text/plain"));
    assert_eq!(header(&headers, "Accept"), Some("application/json"));
}

#[tokio::test]
async fn test_options_forwarded_to_transport() {
    let api = create_api();
    api.client.mock_response("http://api.test/choferes/", 201, "{}");

    api.request(
        "choferes/",
        RequestOptions::new()
            .method(HttpMethod::Post)
            .header("X-Trace", "abc")
            .body("{}".to_string()),
    )
    .await
    .unwrap();

    let requests = api.client.requests.borrow();
    let sent = &requests[0];
    assert_eq!(sent.method, HttpMethod::Post);
    assert_eq!(sent.body.as_deref(), Some("{}"));
    assert_eq!(header(&sent.headers, "X-Trace"), Some("abc"));
    assert_eq!(header(&sent.headers, "Content-Type"), Some("application/json"));
}

// =========================================================
// Typed requests
// =========================================================

#[tokio::test]
async fn test_list_choferes_typed() {
    let api = create_api();
    api.client.mock_response(
        "http://api.test/choferes/?offset=0&limit=100",
        200,
        r#"[{"id":1,"codigo_chofer":"C-1","cedula_identidad":"12345678","nombre":"Ana",
             "apellido":"Pérez","telefono":"91234567","vencimiento_libreta":"2025-12-31",
             "fecha_ingreso":"2020-01-02","estado":"De Baja"}]"#,
    );

    let choferes = api.choferes().await.unwrap();

    assert_eq!(choferes.len(), 1);
    assert_eq!(choferes[0].estado, EstadoChofer::Baja);
}

#[tokio::test]
async fn test_update_sends_patch_with_changes() {
    let api = create_api();
    api.client.mock_response(
        "http://api.test/coches/4",
        200,
        r#"{"id":4,"matricula":"1234","movil":"57","marca":"Toyota","modelo":"Corolla","año":"2019","kilometros":1200,"estado":"Activo"}"#,
    );

    let req = UpdateCoche {
        id: 4,
        changes: CocheUpdate {
            kilometros: Some(1200),
            ..Default::default()
        },
    };
    let coche = api.send(&req).await.unwrap();

    assert_eq!(coche.kilometros, 1200);
    let requests = api.client.requests.borrow();
    assert_eq!(requests[0].method, HttpMethod::Patch);
    assert_eq!(requests[0].body.as_deref(), Some(r#"{"kilometros":1200}"#));
}

#[tokio::test]
async fn test_typed_shape_mismatch_is_decode_error() {
    let api = create_api();
    api.client
        .mock_response("http://api.test/coches/?offset=0&limit=100", 200, r#"{"id":1}"#);

    let err = api.coches().await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_baja_coche_uses_delete() {
    let api = create_api();
    api.client.mock_response(
        "http://api.test/coches/3",
        200,
        r#"{"id":3,"matricula":"0421","movil":"12","marca":"Fiat","modelo":"Siena","año":"2015","estado":"Inactivo"}"#,
    );

    let coche = api.baja_coche(3).await.unwrap();

    assert_eq!(coche.estado, "Inactivo");
    assert_eq!(api.client.requests.borrow()[0].method, HttpMethod::Delete);
    assert!(api.client.requests.borrow()[0].body.is_none());
}
