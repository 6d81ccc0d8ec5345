use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Chofer, Coche, ValidationError};

/// Largest amount the backend stores: 10 digits, 2 of them decimals.
pub const MONTO_MAXIMO: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);
/// Decimal places kept for amounts.
pub const MONTO_DECIMALES: u32 = 2;

/// Collection record of one driver's shift, with the settlement already
/// computed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recaudacion {
    pub id: i64,
    pub fecha_turno: NaiveDate,
    pub fecha_recibida: NaiveDate,

    pub km_entrada: i64,
    pub km_salida: i64,
    pub km_totales: i64,
    #[serde(default)]
    pub rendimiento: Decimal,

    #[serde(default)]
    pub total_recaudado: Decimal,
    #[serde(default)]
    pub salario: Decimal,
    #[serde(default)]
    pub combustible: Decimal,
    #[serde(default)]
    pub otros_gastos: Decimal,
    #[serde(default)]
    pub total_gastos: Decimal,
    #[serde(default)]
    pub liquido: Decimal,
    #[serde(default)]
    pub aportes: Decimal,
    #[serde(default)]
    pub sub_total: Decimal,
    #[serde(default)]
    pub h13: Decimal,
    #[serde(default)]
    pub credito: Decimal,
    #[serde(default)]
    pub total_entregar: Decimal,

    #[serde(default)]
    pub chofer_id: Option<i64>,
    #[serde(default)]
    pub coche_id: Option<i64>,

    /// Present on list/detail responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chofer: Option<Chofer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coche: Option<Coche>,
}

impl Recaudacion {
    pub fn chofer_label(&self) -> String {
        match (&self.chofer, self.chofer_id) {
            (Some(chofer), _) => chofer.nombre_completo(),
            (None, Some(id)) => format!("#{}", id),
            (None, None) => "-".to_string(),
        }
    }

    pub fn coche_label(&self) -> String {
        match (&self.coche, self.coche_id) {
            (Some(coche), _) => format!("{} ({})", coche.movil, coche.matricula_completa()),
            (None, Some(id)) => format!("#{}", id),
            (None, None) => "-".to_string(),
        }
    }
}

/// Raw shift inputs; the backend derives the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecaudacionCreate {
    pub chofer_id: i64,
    pub coche_id: i64,
    pub fecha_turno: NaiveDate,
    pub total_recaudado: Decimal,
    pub combustible: Decimal,
    pub otros_gastos: Decimal,
    pub km_entrada: i64,
    pub km_salida: i64,
    pub h13: Decimal,
    pub credito: Decimal,
}

impl RecaudacionCreate {
    /// Amounts must fit the backend's `NUMERIC(10, 2)` columns; odometer
    /// readings are non-negative and never go backwards.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.km_entrada < 0 {
            return Err(ValidationError::new(
                "km_entrada",
                "El kilometraje no puede ser negativo",
            ));
        }
        if self.km_salida < self.km_entrada {
            return Err(ValidationError::new(
                "km_salida",
                "El kilometraje de salida no puede ser menor al de entrada",
            ));
        }
        let montos = [
            ("total_recaudado", self.total_recaudado),
            ("combustible", self.combustible),
            ("otros_gastos", self.otros_gastos),
            ("h13", self.h13),
            ("credito", self.credito),
        ];
        for (field, value) in montos {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(ValidationError::new(field, "El monto no puede ser negativo"));
            }
            if value > MONTO_MAXIMO {
                return Err(ValidationError::new(field, "El monto excede el máximo permitido"));
            }
            if value.normalize().scale() > MONTO_DECIMALES {
                return Err(ValidationError::new(field, "El monto admite hasta 2 decimales"));
            }
        }
        Ok(())
    }
}

/// Partial correction of a recorded shift; only the fields that are set
/// are sent. Derived figures are left to the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecaudacionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chofer_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coche_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_turno: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_recibida: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub km_entrada: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub km_salida: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_recaudado: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combustible: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otros_gastos: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h13: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credito: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create() -> RecaudacionCreate {
        RecaudacionCreate {
            chofer_id: 1,
            coche_id: 2,
            fecha_turno: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            total_recaudado: dec("5000"),
            combustible: dec("1500"),
            otros_gastos: dec("0"),
            km_entrada: 1000,
            km_salida: 1150,
            h13: dec("0"),
            credito: dec("0"),
        }
    }

    #[test]
    fn test_validate_km() {
        assert!(create().validate().is_ok());
        let mut r = create();
        r.km_salida = 999;
        assert_eq!(r.validate().unwrap_err().field, "km_salida");
    }

    #[test]
    fn test_validate_negative_amount() {
        let mut r = create();
        r.credito = dec("-1");
        assert_eq!(r.validate().unwrap_err().field, "credito");
    }

    #[test]
    fn test_validate_amount_limits() {
        assert_eq!(MONTO_MAXIMO, dec("99999999.99"));

        let mut r = create();
        r.total_recaudado = MONTO_MAXIMO;
        assert!(r.validate().is_ok());

        r.total_recaudado = dec("100000000");
        assert_eq!(r.validate().unwrap_err().field, "total_recaudado");

        let mut r = create();
        r.combustible = Decimal::MAX;
        assert_eq!(r.validate().unwrap_err().field, "combustible");

        let mut r = create();
        r.h13 = dec("10.005");
        assert_eq!(r.validate().unwrap_err().field, "h13");
        // Trailing zeros are not extra precision
        r.h13 = dec("10.500");
        assert!(r.validate().is_ok());
    }

    #[test]
    fn test_validate_negative_km() {
        let mut r = create();
        r.km_entrada = -5;
        r.km_salida = 10;
        assert_eq!(r.validate().unwrap_err().field, "km_entrada");

        r.km_entrada = i64::MIN;
        r.km_salida = i64::MAX;
        assert_eq!(r.validate().unwrap_err().field, "km_entrada");
    }

    #[test]
    fn test_validated_extremes_settle_without_overflow() {
        let mut r = create();
        r.total_recaudado = MONTO_MAXIMO;
        r.combustible = MONTO_MAXIMO;
        r.otros_gastos = MONTO_MAXIMO;
        r.h13 = MONTO_MAXIMO;
        r.credito = MONTO_MAXIMO;
        r.km_entrada = 0;
        r.km_salida = i64::MAX;
        assert!(r.validate().is_ok());

        let liq = crate::calcular_liquidacion(&r);
        assert_eq!(liq.km_totales, i64::MAX);
        assert_eq!(liq.salario, dec("29000000.00"));
    }

    #[test]
    fn test_detail_accepts_string_decimals_and_embedded_entities() {
        let json = r#"{
            "id": 9, "fecha_turno": "2024-01-05", "fecha_recibida": "2024-01-06",
            "km_entrada": 1000, "km_salida": 1150, "km_totales": 150, "rendimiento": "33.33",
            "total_recaudado": "5000.00", "salario": "1450.00", "combustible": "1500.00",
            "otros_gastos": "0.00", "total_gastos": "2950.00", "liquido": "2050.00",
            "aportes": "275.50", "sub_total": "2325.50", "h13": "0.00", "credito": "0.00",
            "total_entregar": "2325.50", "chofer_id": 1, "coche_id": null,
            "chofer": {"id":1,"codigo_chofer":"C-1","cedula_identidad":"12345678","nombre":"Ana",
                       "apellido":"Pérez","telefono":"91234567","vencimiento_libreta":"2025-12-31",
                       "fecha_ingreso":"2020-01-02","estado":"Activo"},
            "coche": null
        }"#;
        let r: Recaudacion = serde_json::from_str(json).unwrap();
        assert_eq!(r.total_entregar, dec("2325.50"));
        assert_eq!(r.chofer_label(), "Ana Pérez");
        assert_eq!(r.coche_label(), "-");
    }

    #[test]
    fn test_numeric_decimals_accepted() {
        let json = r#"{"id":1,"fecha_turno":"2024-01-05","fecha_recibida":"2024-01-05",
            "km_entrada":0,"km_salida":0,"km_totales":0,"total_recaudado":120.5,"coche_id":4}"#;
        let r: Recaudacion = serde_json::from_str(json).unwrap();
        assert_eq!(r.total_recaudado, dec("120.5"));
        assert_eq!(r.salario, Decimal::ZERO);
        assert_eq!(r.coche_label(), "#4");
    }
}
