use serde::{Deserialize, Serialize};

use crate::{ValidationError, is_ascii_digits};

pub const MATRICULA_PREFIX: &str = "STX-";
pub const ESTADO_COCHE_DEFAULT: &str = "Activo";

fn default_estado() -> String {
    ESTADO_COCHE_DEFAULT.to_string()
}

/// Vehicle as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coche {
    pub id: i64,
    pub matricula: String,
    pub movil: String,
    pub marca: String,
    pub modelo: String,
    #[serde(rename = "año")]
    pub anio: String,
    #[serde(default)]
    pub kilometros: i64,
    #[serde(default = "default_estado")]
    pub estado: String,
}

impl Coche {
    /// Full plate as painted on the car, e.g. `STX-1234`.
    pub fn matricula_completa(&self) -> String {
        format!("{}{}", MATRICULA_PREFIX, self.matricula)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CocheCreate {
    pub matricula: String,
    pub movil: String,
    pub marca: String,
    pub modelo: String,
    #[serde(rename = "año")]
    pub anio: String,
    pub kilometros: i64,
    pub estado: String,
}

impl Default for CocheCreate {
    fn default() -> Self {
        Self {
            matricula: String::new(),
            movil: String::new(),
            marca: String::new(),
            modelo: String::new(),
            anio: String::new(),
            kilometros: 0,
            estado: default_estado(),
        }
    }
}

impl CocheCreate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.matricula.len() != 4 || !is_ascii_digits(&self.matricula) {
            return Err(ValidationError::new(
                "matricula",
                "La matricula debe tener 4 digitos",
            ));
        }
        if self.movil.trim().is_empty() {
            return Err(ValidationError::new("movil", "El móvil es obligatorio"));
        }
        if self.kilometros < 0 {
            return Err(ValidationError::new(
                "kilometros",
                "Los kilómetros no pueden ser negativos",
            ));
        }
        Ok(())
    }
}

/// Partial update; only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CocheUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matricula: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movil: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marca: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modelo: Option<String>,
    #[serde(rename = "año", skip_serializing_if = "Option::is_none")]
    pub anio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kilometros: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
}
