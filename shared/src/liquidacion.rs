//! Settlement of a shift's collection.
//!
//! The backend stores the authoritative figures; this module lets the client
//! preview them while the form is being filled in.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::RecaudacionCreate;

/// Share of the gross collection paid as the driver's wage (29%).
pub const PORCENTAJE_SUELDO: Decimal = Decimal::from_parts(29, 0, 0, false, 2);
/// Social contributions charged on the wage (19%).
pub const PORCENTAJE_APORTE: Decimal = Decimal::from_parts(19, 0, 0, false, 2);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Liquidacion {
    pub salario: Decimal,
    pub total_gastos: Decimal,
    pub liquido: Decimal,
    pub aportes: Decimal,
    pub sub_total: Decimal,
    pub total_entregar: Decimal,
    pub km_totales: i64,
    /// Gross collection per kilometre driven.
    pub rendimiento: Decimal,
}

fn centesimos(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Breakdown of a shift. Expects inputs accepted by
/// [`RecaudacionCreate::validate`], whose bounds keep the arithmetic in range.
pub fn calcular_liquidacion(datos: &RecaudacionCreate) -> Liquidacion {
    let salario = datos.total_recaudado * PORCENTAJE_SUELDO;
    let total_gastos = salario + datos.combustible + datos.otros_gastos;
    let liquido = datos.total_recaudado - total_gastos;
    let aportes = salario * PORCENTAJE_APORTE;
    let sub_total = liquido + aportes;
    let total_entregar = sub_total - datos.h13 - datos.credito;

    let km_totales = datos.km_salida - datos.km_entrada;
    let rendimiento = if km_totales > 0 {
        datos.total_recaudado / Decimal::from(km_totales)
    } else {
        Decimal::ZERO
    };

    Liquidacion {
        salario: centesimos(salario),
        total_gastos: centesimos(total_gastos),
        liquido: centesimos(liquido),
        aportes: centesimos(aportes),
        sub_total: centesimos(sub_total),
        total_entregar: centesimos(total_entregar),
        km_totales,
        rendimiento: centesimos(rendimiento),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn turno(total: &str, combustible: &str, km_entrada: i64, km_salida: i64) -> RecaudacionCreate {
        RecaudacionCreate {
            chofer_id: 1,
            coche_id: 1,
            fecha_turno: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            total_recaudado: dec(total),
            combustible: dec(combustible),
            otros_gastos: Decimal::ZERO,
            km_entrada,
            km_salida,
            h13: Decimal::ZERO,
            credito: Decimal::ZERO,
        }
    }

    #[test]
    fn test_percentages() {
        assert_eq!(PORCENTAJE_SUELDO, dec("0.29"));
        assert_eq!(PORCENTAJE_APORTE, dec("0.19"));
    }

    #[test]
    fn test_full_breakdown() {
        let liq = calcular_liquidacion(&turno("5000", "1500", 1000, 1150));
        assert_eq!(liq.salario, dec("1450.00"));
        assert_eq!(liq.total_gastos, dec("2950.00"));
        assert_eq!(liq.liquido, dec("2050.00"));
        assert_eq!(liq.aportes, dec("275.50"));
        assert_eq!(liq.sub_total, dec("2325.50"));
        assert_eq!(liq.total_entregar, dec("2325.50"));
        assert_eq!(liq.km_totales, 150);
        assert_eq!(liq.rendimiento, dec("33.33"));
    }

    #[test]
    fn test_deductions_reduce_total() {
        let mut datos = turno("5000", "1500", 1000, 1150);
        datos.h13 = dec("300");
        datos.credito = dec("125.25");
        let liq = calcular_liquidacion(&datos);
        assert_eq!(liq.total_entregar, dec("1900.25"));
    }

    #[test]
    fn test_no_km_means_zero_yield() {
        let liq = calcular_liquidacion(&turno("800", "0", 500, 500));
        assert_eq!(liq.km_totales, 0);
        assert_eq!(liq.rendimiento, Decimal::ZERO);
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        // 10.05 * 0.29 = 2.9145 -> 2.91 ; 2.9145 * 0.19 = 0.553755 -> 0.55
        let liq = calcular_liquidacion(&turno("10.05", "0", 0, 2));
        assert_eq!(liq.salario, dec("2.91"));
        assert_eq!(liq.aportes, dec("0.55"));
        // 10.05 / 2 = 5.025 -> 5.03
        assert_eq!(liq.rendimiento, dec("5.03"));
    }
}
