use crate::components::notice::{Notice, NoticeToast};
use crate::use_api;
use chrono::NaiveDate;
use flota_shared::format::format_naive_date;
use flota_shared::{Chofer, ChoferCreate, EstadoChofer};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ChoferesPage() -> impl IntoView {
    let api = StoredValue::new(use_api());

    let (choferes, set_choferes) = signal(Vec::<Chofer>::new());
    let (loading, set_loading) = signal(true);
    let notice = RwSignal::new(Option::<Notice>::None);

    let load_choferes = move || {
        let api = api.get_value();
        set_loading.set(true);
        spawn_local(async move {
            match api.choferes().await {
                Ok(data) => set_choferes.set(data),
                Err(e) => {
                    log_error!("[Choferes] load failed: {}", e);
                    notice.set(Some(Notice::error(e.to_string())));
                }
            }
            set_loading.set(false);
        });
    };

    load_choferes();

    let handle_create = move |req: ChoferCreate| {
        let api = api.get_value();
        spawn_local(async move {
            match api.crear_chofer(&req).await {
                Ok(chofer) => {
                    notice.set(Some(Notice::success(format!(
                        "Chofer {} registrado",
                        chofer.nombre_completo()
                    ))));
                    set_choferes.update(|list| list.push(chofer));
                }
                Err(e) => notice.set(Some(Notice::error(e.to_string()))),
            }
        });
    };

    let handle_baja = move |id: i64| {
        let api = api.get_value();
        spawn_local(async move {
            match api.baja_chofer(id).await {
                Ok(updated) => {
                    notice.set(Some(Notice::success("Chofer dado de baja")));
                    set_choferes.update(|list| {
                        if let Some(slot) = list.iter_mut().find(|c| c.id == id) {
                            *slot = updated;
                        }
                    });
                }
                Err(e) => notice.set(Some(Notice::error(e.to_string()))),
            }
        });
    };

    let total = move || choferes.with(|c| c.len());
    let activos = move || choferes.with(|c| c.iter().filter(|c| c.estado.is_activo()).count());

    view! {
        <NoticeToast notice=notice />
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0">
                <div class="flex items-center justify-between p-6 pb-2">
                    <div>
                        <h3 class="card-title">"Choferes"</h3>
                        <p class="text-base-content/70 text-sm">
                            {move || format!("{} activos de {}", activos(), total())}
                        </p>
                    </div>
                    <button on:click=move |_| load_choferes() disabled=move || loading.get() class="btn btn-ghost btn-sm">
                        "Actualizar"
                    </button>
                </div>

                <ChoferForm on_create=handle_create />

                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Código"</th>
                                <th>"Nombre"</th>
                                <th class="hidden md:table-cell">"CI"</th>
                                <th class="hidden md:table-cell">"Teléfono"</th>
                                <th>"Venc. libreta"</th>
                                <th class="hidden md:table-cell">"Ingreso"</th>
                                <th>"Estado"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || total() == 0 && !loading.get()>
                                <tr>
                                    <td colspan="8" class="text-center py-8 text-base-content/50">
                                        "No hay choferes registrados."
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
                                each=move || choferes.get()
                                key=|c| (c.id, c.estado)
                                children=move |chofer| {
                                    let id = chofer.id;
                                    let badge = if chofer.estado.is_activo() {
                                        "badge badge-success badge-outline"
                                    } else {
                                        "badge badge-ghost"
                                    };
                                    view! {
                                        <tr>
                                            <td class="font-mono">{chofer.codigo_chofer.clone()}</td>
                                            <td class="font-bold">{chofer.nombre_completo()}</td>
                                            <td class="hidden md:table-cell font-mono">{chofer.cedula_identidad.clone()}</td>
                                            <td class="hidden md:table-cell">{chofer.telefono.clone()}</td>
                                            <td>{format_naive_date(chofer.vencimiento_libreta)}</td>
                                            <td class="hidden md:table-cell">{format_naive_date(chofer.fecha_ingreso)}</td>
                                            <td><span class=badge>{chofer.estado.label()}</span></td>
                                            <td>
                                                <button on:click=move |_| handle_baja(id) class="btn btn-ghost btn-xs text-error">
                                                    "Dar de baja"
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

fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[component]
fn ChoferForm<F>(on_create: F) -> impl IntoView
where
    F: Fn(ChoferCreate) + Copy + Send + Sync + 'static,
{
    let codigo = RwSignal::new(String::new());
    let cedula = RwSignal::new(String::new());
    let nombre = RwSignal::new(String::new());
    let apellido = RwSignal::new(String::new());
    let telefono = RwSignal::new(String::new());
    let vencimiento = RwSignal::new(String::new());
    let ingreso = RwSignal::new(String::new());
    let error_msg = RwSignal::new(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        let (Some(vencimiento_libreta), Some(fecha_ingreso)) = (
            parse_date_input(&vencimiento.get()),
            parse_date_input(&ingreso.get()),
        ) else {
            error_msg.set(Some("Completá las fechas de libreta e ingreso".to_string()));
            return;
        };

        let req = ChoferCreate {
            codigo_chofer: codigo.get().trim().to_string(),
            cedula_identidad: cedula.get().trim().to_string(),
            nombre: nombre.get(),
            apellido: apellido.get(),
            telefono: telefono.get().trim().to_string(),
            vencimiento_libreta,
            fecha_ingreso,
            fecha_egreso: None,
            estado: EstadoChofer::Activo,
        };

        match req.validated() {
            Ok(req) => {
                error_msg.set(None);
                on_create(req);
                for field in [codigo, cedula, nombre, apellido, telefono, vencimiento, ingreso] {
                    field.set(String::new());
                }
            }
            Err(e) => error_msg.set(Some(e.message)),
        }
    };

    view! {
        <form class="flex flex-wrap items-end gap-2 px-6 pb-4" on:submit=on_submit>
            <input class="input input-bordered input-sm w-24" placeholder="Código"
                on:input=move |ev| codigo.set(event_target_value(&ev)) prop:value=codigo />
            <input class="input input-bordered input-sm w-28" placeholder="CI" maxlength="8" inputmode="numeric"
                on:input=move |ev| cedula.set(event_target_value(&ev)) prop:value=cedula />
            <input class="input input-bordered input-sm w-32" placeholder="Nombre"
                on:input=move |ev| nombre.set(event_target_value(&ev)) prop:value=nombre />
            <input class="input input-bordered input-sm w-32" placeholder="Apellido"
                on:input=move |ev| apellido.set(event_target_value(&ev)) prop:value=apellido />
            <input class="input input-bordered input-sm w-28" placeholder="Teléfono" inputmode="tel"
                on:input=move |ev| telefono.set(event_target_value(&ev)) prop:value=telefono />
            <label class="text-xs flex flex-col">"Venc. libreta"
                <input type="date" class="input input-bordered input-sm"
                    on:input=move |ev| vencimiento.set(event_target_value(&ev)) prop:value=vencimiento />
            </label>
            <label class="text-xs flex flex-col">"Ingreso"
                <input type="date" class="input input-bordered input-sm"
                    on:input=move |ev| ingreso.set(event_target_value(&ev)) prop:value=ingreso />
            </label>
            <button class="btn btn-primary btn-sm">"Agregar"</button>
            {move || error_msg.get().map(|msg| view! { <span class="text-error text-sm">{msg}</span> })}
        </form>
    }
}
