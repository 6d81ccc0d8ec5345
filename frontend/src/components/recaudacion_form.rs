//! New-collection form
//!
//! `FormState` holds the raw inputs as signals and turns them into a
//! `RecaudacionCreate`; the form shows the settlement preview as the user types.

use chrono::NaiveDate;
use flota_shared::format::format_currency;
use flota_shared::{Chofer, Coche, Liquidacion, RecaudacionCreate, calcular_liquidacion};
use leptos::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Reads an amount typed as `1234,50`, `1234.50` or empty (zero).
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let input = input.trim();
    if input.is_empty() {
        return Some(Decimal::ZERO);
    }
    Decimal::from_str(&input.replace(',', ".")).ok()
}

fn parse_km(input: &str) -> Option<i64> {
    let input = input.trim();
    if input.is_empty() {
        return Some(0);
    }
    input.parse().ok()
}

#[derive(Clone, Copy)]
pub struct FormState {
    pub chofer_id: RwSignal<String>,
    pub coche_id: RwSignal<String>,
    pub fecha_turno: RwSignal<String>,
    pub total_recaudado: RwSignal<String>,
    pub combustible: RwSignal<String>,
    pub otros_gastos: RwSignal<String>,
    pub km_entrada: RwSignal<String>,
    pub km_salida: RwSignal<String>,
    pub h13: RwSignal<String>,
    pub credito: RwSignal<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            chofer_id: RwSignal::new(String::new()),
            coche_id: RwSignal::new(String::new()),
            fecha_turno: RwSignal::new(String::new()),
            total_recaudado: RwSignal::new(String::new()),
            combustible: RwSignal::new(String::new()),
            otros_gastos: RwSignal::new(String::new()),
            km_entrada: RwSignal::new(String::new()),
            km_salida: RwSignal::new(String::new()),
            h13: RwSignal::new(String::new()),
            credito: RwSignal::new(String::new()),
        }
    }

    /// Keeps the selected car and driver, clears the figures.
    pub fn reset(&self) {
        for field in [
            self.fecha_turno,
            self.total_recaudado,
            self.combustible,
            self.otros_gastos,
            self.km_entrada,
            self.km_salida,
            self.h13,
            self.credito,
        ] {
            field.set(String::new());
        }
    }

    pub fn to_request(&self) -> Result<RecaudacionCreate, String> {
        let chofer_id = self
            .chofer_id
            .get()
            .parse::<i64>()
            .map_err(|_| "Seleccioná un chofer".to_string())?;
        let coche_id = self
            .coche_id
            .get()
            .parse::<i64>()
            .map_err(|_| "Seleccioná un coche".to_string())?;
        let fecha_turno = NaiveDate::parse_from_str(self.fecha_turno.get().trim(), "%Y-%m-%d")
            .map_err(|_| "Fecha de turno inválida".to_string())?;

        let amount = |signal: RwSignal<String>, name: &str| {
            parse_amount(&signal.get()).ok_or_else(|| format!("Monto inválido: {}", name))
        };
        let km = |signal: RwSignal<String>, name: &str| {
            parse_km(&signal.get()).ok_or_else(|| format!("Kilometraje inválido: {}", name))
        };

        let req = RecaudacionCreate {
            chofer_id,
            coche_id,
            fecha_turno,
            total_recaudado: amount(self.total_recaudado, "recaudado")?,
            combustible: amount(self.combustible, "combustible")?,
            otros_gastos: amount(self.otros_gastos, "otros gastos")?,
            km_entrada: km(self.km_entrada, "entrada")?,
            km_salida: km(self.km_salida, "salida")?,
            h13: amount(self.h13, "H13")?,
            credito: amount(self.credito, "crédito")?,
        };
        req.validate().map_err(|e| e.message)?;
        Ok(req)
    }

    /// Settlement of the current inputs, when they are complete and valid.
    pub fn preview(&self) -> Option<Liquidacion> {
        self.to_request().ok().map(|req| calcular_liquidacion(&req))
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn RecaudacionForm<F>(
    on_create: F,
    #[prop(into)] choferes: Signal<Vec<Chofer>>,
    #[prop(into)] coches: Signal<Vec<Coche>>,
) -> impl IntoView
where
    F: Fn(RecaudacionCreate) + Copy + Send + Sync + 'static,
{
    let form = FormState::new();
    let error_msg = RwSignal::new(Option::<String>::None);
    let preview = Memo::new(move |_| form.preview());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        match form.to_request() {
            Ok(req) => {
                error_msg.set(None);
                on_create(req);
                form.reset();
            }
            Err(msg) => error_msg.set(Some(msg)),
        }
    };

    let text_input = move |signal: RwSignal<String>, placeholder: &'static str| {
        view! {
            <input class="input input-bordered input-sm w-28" placeholder=placeholder inputmode="decimal"
                on:input=move |ev| signal.set(event_target_value(&ev)) prop:value=signal />
        }
    };

    view! {
        <form class="flex flex-col gap-2 px-6 pb-4" on:submit=on_submit>
            <div class="flex flex-wrap items-end gap-2">
                <select class="select select-bordered select-sm"
                    on:change=move |ev| form.chofer_id.set(event_target_value(&ev)) prop:value=form.chofer_id>
                    <option value="">"Chofer"</option>
                    {move || choferes.get().into_iter()
                        .filter(|c| c.estado.is_activo())
                        .map(|c| view! { <option value=c.id.to_string()>{c.nombre_completo()}</option> })
                        .collect_view()}
                </select>
                <select class="select select-bordered select-sm"
                    on:change=move |ev| form.coche_id.set(event_target_value(&ev)) prop:value=form.coche_id>
                    <option value="">"Coche"</option>
                    {move || coches.get().into_iter()
                        .map(|c| view! { <option value=c.id.to_string()>{format!("{} ({})", c.movil, c.matricula_completa())}</option> })
                        .collect_view()}
                </select>
                <input type="date" class="input input-bordered input-sm"
                    on:input=move |ev| form.fecha_turno.set(event_target_value(&ev)) prop:value=form.fecha_turno />
                {text_input(form.km_entrada, "Km entrada")}
                {text_input(form.km_salida, "Km salida")}
            </div>
            <div class="flex flex-wrap items-end gap-2">
                {text_input(form.total_recaudado, "Recaudado")}
                {text_input(form.combustible, "Combustible")}
                {text_input(form.otros_gastos, "Otros gastos")}
                {text_input(form.h13, "H13")}
                {text_input(form.credito, "Crédito")}
                <button class="btn btn-primary btn-sm">"Registrar"</button>
                {move || error_msg.get().map(|msg| view! { <span class="text-error text-sm">{msg}</span> })}
            </div>
            {move || preview.get().map(|liq| view! {
                <div class="stats stats-horizontal shadow-sm text-sm">
                    <div class="stat py-2">
                        <div class="stat-title">"Salario"</div>
                        <div class="stat-value text-base">{format_currency(Some(liq.salario))}</div>
                    </div>
                    <div class="stat py-2">
                        <div class="stat-title">"Gastos"</div>
                        <div class="stat-value text-base">{format_currency(Some(liq.total_gastos))}</div>
                    </div>
                    <div class="stat py-2">
                        <div class="stat-title">"Aportes"</div>
                        <div class="stat-value text-base">{format_currency(Some(liq.aportes))}</div>
                    </div>
                    <div class="stat py-2">
                        <div class="stat-title">"A entregar"</div>
                        <div class="stat-value text-base text-primary">{format_currency(Some(liq.total_entregar))}</div>
                    </div>
                    <div class="stat py-2">
                        <div class="stat-title">"$/km"</div>
                        <div class="stat-value text-base">{format_currency(Some(liq.rendimiento))}</div>
                    </div>
                </div>
            })}
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_accepts_comma_and_empty() {
        assert_eq!(parse_amount(""), Some(Decimal::ZERO));
        assert_eq!(parse_amount(" 1234,50 "), Some(Decimal::new(123450, 2)));
        assert_eq!(parse_amount("99.9"), Some(Decimal::new(999, 1)));
        assert_eq!(parse_amount("12a"), None);
    }

    fn filled_form() -> FormState {
        let form = FormState::new();
        form.chofer_id.set("1".to_string());
        form.coche_id.set("2".to_string());
        form.fecha_turno.set("2024-01-05".to_string());
        form.total_recaudado.set("5000".to_string());
        form.combustible.set("1500".to_string());
        form.km_entrada.set("1000".to_string());
        form.km_salida.set("1150".to_string());
        form
    }

    #[test]
    fn test_to_request_and_preview() {
        let owner = Owner::new();
        owner.with(|| {
            let form = filled_form();
            let req = form.to_request().unwrap();
            assert_eq!(req.total_recaudado, Decimal::new(5000, 0));
            assert_eq!(form.preview().unwrap().total_entregar, Decimal::new(232550, 2));
        });
    }

    #[test]
    fn test_out_of_range_amount_is_rejected_before_preview() {
        let owner = Owner::new();
        owner.with(|| {
            let form = filled_form();
            form.total_recaudado.set("9".repeat(28));
            form.combustible.set("9".repeat(28));
            assert_eq!(
                form.to_request().unwrap_err(),
                "El monto excede el máximo permitido"
            );
            assert_eq!(form.preview(), None);
        });
    }

    #[test]
    fn test_negative_km_is_rejected_before_preview() {
        let owner = Owner::new();
        owner.with(|| {
            let form = filled_form();
            form.km_entrada.set("-5".to_string());
            assert_eq!(
                form.to_request().unwrap_err(),
                "El kilometraje no puede ser negativo"
            );

            form.km_entrada.set(i64::MIN.to_string());
            form.km_salida.set(i64::MAX.to_string());
            assert_eq!(form.preview(), None);
        });
    }

    #[test]
    fn test_parse_km() {
        assert_eq!(parse_km(""), Some(0));
        assert_eq!(parse_km("1150"), Some(1150));
        assert_eq!(parse_km("1.150"), None);
    }
}
