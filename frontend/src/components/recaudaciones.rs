use crate::components::notice::{Notice, NoticeToast};
use crate::components::recaudacion_form::RecaudacionForm;
use crate::use_api;
use flota_shared::format::{format_currency, format_integer, format_naive_date};
use flota_shared::{Chofer, Coche, Recaudacion, RecaudacionCreate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use rust_decimal::Decimal;

#[component]
pub fn RecaudacionesPage() -> impl IntoView {
    let api = StoredValue::new(use_api());

    let (recaudaciones, set_recaudaciones) = signal(Vec::<Recaudacion>::new());
    let (choferes, set_choferes) = signal(Vec::<Chofer>::new());
    let (coches, set_coches) = signal(Vec::<Coche>::new());
    let (loading, set_loading) = signal(true);
    let notice = RwSignal::new(Option::<Notice>::None);

    let load_recaudaciones = move || {
        let api = api.get_value();
        set_loading.set(true);
        spawn_local(async move {
            match api.recaudaciones().await {
                Ok(data) => set_recaudaciones.set(data),
                Err(e) => {
                    log_error!("[Recaudaciones] load failed: {}", e);
                    notice.set(Some(Notice::error(e.to_string())));
                }
            }
            set_loading.set(false);
        });
    };

    // Options for the form selects
    let load_catalogs = move || {
        let api = api.get_value();
        spawn_local(async move {
            match api.choferes().await {
                Ok(data) => set_choferes.set(data),
                Err(e) => log_error!("[Recaudaciones] choferes: {}", e),
            }
            match api.coches().await {
                Ok(data) => set_coches.set(data),
                Err(e) => log_error!("[Recaudaciones] coches: {}", e),
            }
        });
    };

    load_recaudaciones();
    load_catalogs();

    let handle_create = move |req: RecaudacionCreate| {
        let api = api.get_value();
        spawn_local(async move {
            match api.crear_recaudacion(&req).await {
                Ok(_) => {
                    notice.set(Some(Notice::success("Recaudación registrada")));
                    // The list endpoint embeds chofer and coche, the create response does not.
                    load_recaudaciones();
                }
                Err(e) => notice.set(Some(Notice::error(e.to_string()))),
            }
        });
    };

    let handle_delete = move |id: i64| {
        let api = api.get_value();
        spawn_local(async move {
            match api.eliminar_recaudacion(id).await {
                Ok(()) => {
                    notice.set(Some(Notice::success("Recaudación eliminada")));
                    set_recaudaciones.update(|list| list.retain(|r| r.id != id));
                }
                Err(e) => notice.set(Some(Notice::error(e.to_string()))),
            }
        });
    };

    let total = move || recaudaciones.with(|r| r.len());
    let total_entregado = move || {
        recaudaciones.with(|r| r.iter().map(|r| r.total_entregar).sum::<Decimal>())
    };

    view! {
        <NoticeToast notice=notice />
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0">
                <div class="flex items-center justify-between p-6 pb-2">
                    <div>
                        <h3 class="card-title">"Recaudaciones"</h3>
                        <p class="text-base-content/70 text-sm">
                            {move || format!("{} turnos, {} a entregar", total(), format_currency(Some(total_entregado())))}
                        </p>
                    </div>
                    <button on:click=move |_| load_recaudaciones() disabled=move || loading.get() class="btn btn-ghost btn-sm">
                        "Actualizar"
                    </button>
                </div>

                <RecaudacionForm on_create=handle_create choferes=choferes coches=coches />

                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Turno"</th>
                                <th>"Coche"</th>
                                <th>"Chofer"</th>
                                <th class="text-right hidden md:table-cell">"Km"</th>
                                <th class="text-right">"Recaudado"</th>
                                <th class="text-right hidden md:table-cell">"Gastos"</th>
                                <th class="text-right">"A entregar"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || total() == 0 && !loading.get()>
                                <tr>
                                    <td colspan="8" class="text-center py-8 text-base-content/50">
                                        "No hay recaudaciones registradas."
                                    </td>
                                </tr>
                            </Show>
                            <Show when=move || loading.get() && total() == 0>
                                <tr>
                                    <td colspan="8" class="text-center py-8 text-base-content/50">
                                        <span class="loading loading-spinner loading-md"></span> " Cargando..."
                                    </td>
                                </tr>
                            </Show>
                            <For
                                each=move || recaudaciones.get()
                                key=|r| r.id
                                children=move |r| {
                                    let id = r.id;
                                    view! {
                                        <tr>
                                            <td>{format_naive_date(r.fecha_turno)}</td>
                                            <td class="font-mono text-sm">{r.coche_label()}</td>
                                            <td>{r.chofer_label()}</td>
                                            <td class="text-right font-mono hidden md:table-cell">{format_integer(r.km_totales)}</td>
                                            <td class="text-right font-mono">{format_currency(Some(r.total_recaudado))}</td>
                                            <td class="text-right font-mono hidden md:table-cell">{format_currency(Some(r.total_gastos))}</td>
                                            <td class="text-right font-mono font-bold">{format_currency(Some(r.total_entregar))}</td>
                                            <td>
                                                <button on:click=move |_| handle_delete(id) class="btn btn-ghost btn-xs text-error">
                                                    "Eliminar"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
