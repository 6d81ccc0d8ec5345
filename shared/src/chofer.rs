use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{ValidationError, is_ascii_digits};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EstadoChofer {
    #[default]
    Activo,
    Inactivo,
    #[serde(rename = "Licencia Vacacional")]
    Licencia,
    #[serde(rename = "Licencia Médica")]
    LicenciaMedica,
    #[serde(rename = "De Baja Temporal")]
    BajaTemporal,
    #[serde(rename = "De Baja Permanente")]
    BajaPermanente,
    /// Written by the backend on logical deletion.
    #[serde(rename = "De Baja")]
    Baja,
}

impl EstadoChofer {
    pub const ALL: [EstadoChofer; 7] = [
        EstadoChofer::Activo,
        EstadoChofer::Inactivo,
        EstadoChofer::Licencia,
        EstadoChofer::LicenciaMedica,
        EstadoChofer::BajaTemporal,
        EstadoChofer::BajaPermanente,
        EstadoChofer::Baja,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EstadoChofer::Activo => "Activo",
            EstadoChofer::Inactivo => "Inactivo",
            EstadoChofer::Licencia => "Licencia Vacacional",
            EstadoChofer::LicenciaMedica => "Licencia Médica",
            EstadoChofer::BajaTemporal => "De Baja Temporal",
            EstadoChofer::BajaPermanente => "De Baja Permanente",
            EstadoChofer::Baja => "De Baja",
        }
    }

    pub fn is_activo(&self) -> bool {
        matches!(self, EstadoChofer::Activo)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chofer {
    pub id: i64,
    pub codigo_chofer: String,
    pub cedula_identidad: String,
    pub nombre: String,
    pub apellido: String,
    pub telefono: String,
    pub vencimiento_libreta: NaiveDate,
    pub fecha_ingreso: NaiveDate,
    #[serde(default)]
    pub fecha_egreso: Option<NaiveDate>,
    #[serde(default)]
    pub estado: EstadoChofer,
}

impl Chofer {
    pub fn nombre_completo(&self) -> String {
        format!("{} {}", self.nombre, self.apellido)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoferCreate {
    pub codigo_chofer: String,
    pub cedula_identidad: String,
    pub nombre: String,
    pub apellido: String,
    pub telefono: String,
    pub vencimiento_libreta: NaiveDate,
    pub fecha_ingreso: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_egreso: Option<NaiveDate>,
    pub estado: EstadoChofer,
}

impl ChoferCreate {
    /// Checks the payload and normalizes names to title case.
    pub fn validated(mut self) -> Result<Self, ValidationError> {
        validar_cedula(&self.cedula_identidad)?;
        validar_telefono(&self.telefono)?;
        if self.codigo_chofer.trim().is_empty() {
            return Err(ValidationError::new(
                "codigo_chofer",
                "El código de chofer es obligatorio",
            ));
        }
        self.nombre = title_case(&self.nombre);
        self.apellido = title_case(&self.apellido);
        Ok(self)
    }
}

/// 8 digits, no dots or dashes.
pub fn validar_cedula(cedula: &str) -> Result<(), ValidationError> {
    if cedula.len() != 8 || !is_ascii_digits(cedula) {
        return Err(ValidationError::new(
            "cedula_identidad",
            "La cédula de identidad debe tener 8 digitos, sin puntos ni guiones",
        ));
    }
    Ok(())
}

/// Mobile numbers: `9XXXXXXX` or `09XXXXXXX`.
pub fn validar_telefono(telefono: &str) -> Result<(), ValidationError> {
    if !is_ascii_digits(telefono) {
        return Err(ValidationError::new(
            "telefono",
            "El teléfono debe contener solo números",
        ));
    }
    let valid = match telefono.len() {
        8 => telefono.starts_with('9'),
        9 => telefono.starts_with("09"),
        _ => false,
    };
    if !valid {
        return Err(ValidationError::new(
            "telefono",
            "Número de telefono no válido",
        ));
    }
    Ok(())
}

/// Trims and upper-cases the first letter of every word, lower-casing the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.trim().chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChoferUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo_chofer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cedula_identidad: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apellido: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vencimiento_libreta: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_ingreso: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_egreso: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<EstadoChofer>,
}
