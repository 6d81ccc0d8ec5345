//! Flota shared types
//!
//! Target-independent code used by the web client:
//! - `coche` / `chofer` / `recaudacion`: domain records exchanged with the backend
//! - `liquidacion`: settlement breakdown of a shift's collection
//! - `format`: currency and date presentation
//! - `protocol`: typed API requests

use std::fmt;

pub mod chofer;
pub mod coche;
pub mod format;
pub mod liquidacion;
pub mod protocol;
pub mod recaudacion;

pub use chofer::{Chofer, ChoferCreate, ChoferUpdate, EstadoChofer};
pub use coche::{Coche, CocheCreate, CocheUpdate};
pub use liquidacion::{Liquidacion, calcular_liquidacion};
pub use recaudacion::{Recaudacion, RecaudacionCreate, RecaudacionUpdate};

// =========================================================
// Constants
// =========================================================

pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Page size the backend applies when `limit` is omitted.
pub const DEFAULT_PAGE_LIMIT: u32 = 100;

// =========================================================
// Validation
// =========================================================

/// A payload field rejected before it is sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

pub(crate) fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
