use crate::{
    Chofer, ChoferCreate, ChoferUpdate, Coche, CocheCreate, CocheUpdate, DEFAULT_PAGE_LIMIT,
    Recaudacion, RecaudacionCreate, RecaudacionUpdate,
};
use serde::{Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest {
    /// The JSON body sent with the request, `()` when there is none.
    type Body: Serialize;
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;

    /// The endpoint path relative to the API base URL.
    fn path(&self) -> String;

    fn body(&self) -> Option<&Self::Body> {
        None
    }
}

/// `offset`/`limit` paging accepted by every list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: u32,
    pub limit: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl Page {
    fn query(&self) -> String {
        format!("?offset={}&limit={}", self.offset, self.limit)
    }
}

// =========================================================
// Coches
// =========================================================

#[derive(Debug, Clone, Default)]
pub struct ListCoches(pub Page);

impl ApiRequest for ListCoches {
    type Body = ();
    type Response = Vec<Coche>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/coches/{}", self.0.query())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GetCoche(pub i64);

impl ApiRequest for GetCoche {
    type Body = ();
    type Response = Coche;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/coches/{}", self.0)
    }
}

impl ApiRequest for CocheCreate {
    type Body = CocheCreate;
    type Response = Coche;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/coches/".to_string()
    }

    fn body(&self) -> Option<&Self::Body> {
        Some(self)
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCoche {
    pub id: i64,
    pub changes: CocheUpdate,
}

impl ApiRequest for UpdateCoche {
    type Body = CocheUpdate;
    type Response = Coche;
    const METHOD: HttpMethod = HttpMethod::Patch;

    fn path(&self) -> String {
        format!("/coches/{}", self.id)
    }

    fn body(&self) -> Option<&Self::Body> {
        Some(&self.changes)
    }
}

/// Logical deletion: the backend marks the car as out of service and returns it.
#[derive(Debug, Clone, Copy)]
pub struct BajaCoche(pub i64);

impl ApiRequest for BajaCoche {
    type Body = ();
    type Response = Coche;
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("/coches/{}", self.0)
    }
}

// =========================================================
// Choferes
// =========================================================

#[derive(Debug, Clone, Default)]
pub struct ListChoferes(pub Page);

impl ApiRequest for ListChoferes {
    type Body = ();
    type Response = Vec<Chofer>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/choferes/{}", self.0.query())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GetChofer(pub i64);

impl ApiRequest for GetChofer {
    type Body = ();
    type Response = Chofer;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/choferes/{}", self.0)
    }
}

impl ApiRequest for ChoferCreate {
    type Body = ChoferCreate;
    type Response = Chofer;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/choferes/".to_string()
    }

    fn body(&self) -> Option<&Self::Body> {
        Some(self)
    }
}

#[derive(Debug, Clone)]
pub struct UpdateChofer {
    pub id: i64,
    pub changes: ChoferUpdate,
}

impl ApiRequest for UpdateChofer {
    type Body = ChoferUpdate;
    type Response = Chofer;
    const METHOD: HttpMethod = HttpMethod::Patch;

    fn path(&self) -> String {
        format!("/choferes/{}", self.id)
    }

    fn body(&self) -> Option<&Self::Body> {
        Some(&self.changes)
    }
}

/// Logical deletion: the driver is kept for history with state `De Baja`.
#[derive(Debug, Clone, Copy)]
pub struct BajaChofer(pub i64);

impl ApiRequest for BajaChofer {
    type Body = ();
    type Response = Chofer;
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("/choferes/{}", self.0)
    }
}

// =========================================================
// Recaudaciones
// =========================================================

#[derive(Debug, Clone, Default)]
pub struct ListRecaudaciones(pub Page);

impl ApiRequest for ListRecaudaciones {
    type Body = ();
    type Response = Vec<Recaudacion>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/recaudaciones/{}", self.0.query())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GetRecaudacion(pub i64);

impl ApiRequest for GetRecaudacion {
    type Body = ();
    type Response = Recaudacion;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/recaudaciones/{}", self.0)
    }
}

impl ApiRequest for RecaudacionCreate {
    type Body = RecaudacionCreate;
    type Response = Recaudacion;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/recaudaciones/".to_string()
    }

    fn body(&self) -> Option<&Self::Body> {
        Some(self)
    }
}

#[derive(Debug, Clone)]
pub struct UpdateRecaudacion {
    pub id: i64,
    pub changes: RecaudacionUpdate,
}

impl ApiRequest for UpdateRecaudacion {
    type Body = RecaudacionUpdate;
    type Response = Recaudacion;
    const METHOD: HttpMethod = HttpMethod::Patch;

    fn path(&self) -> String {
        format!("/recaudaciones/{}", self.id)
    }

    fn body(&self) -> Option<&Self::Body> {
        Some(&self.changes)
    }
}

/// Hard delete; the backend answers 204 with no body.
#[derive(Debug, Clone, Copy)]
pub struct DeleteRecaudacion(pub i64);

impl ApiRequest for DeleteRecaudacion {
    type Body = ();
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("/recaudaciones/{}", self.0)
    }
}
