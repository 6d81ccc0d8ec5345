use crate::components::notice::{Notice, NoticeToast};
use crate::use_api;
use flota_shared::format::format_integer;
use flota_shared::{Coche, CocheCreate};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn CochesPage() -> impl IntoView {
    let api = StoredValue::new(use_api());

    let (coches, set_coches) = signal(Vec::<Coche>::new());
    let (loading, set_loading) = signal(true);
    let notice = RwSignal::new(Option::<Notice>::None);

    let load_coches = move || {
        let api = api.get_value();
        set_loading.set(true);
        spawn_local(async move {
            match api.coches().await {
                Ok(data) => set_coches.set(data),
                Err(e) => {
                    log_error!("[Coches] load failed: {}", e);
                    notice.set(Some(Notice::error(e.to_string())));
                }
            }
            set_loading.set(false);
        });
    };

    load_coches();

    let handle_create = move |req: CocheCreate| {
        let api = api.get_value();
        spawn_local(async move {
            match api.crear_coche(&req).await {
                Ok(coche) => {
                    notice.set(Some(Notice::success(format!(
                        "Coche {} registrado",
                        coche.matricula_completa()
                    ))));
                    set_coches.update(|list| list.push(coche));
                }
                Err(e) => notice.set(Some(Notice::error(e.to_string()))),
            }
        });
    };

    let handle_baja = move |id: i64| {
        let api = api.get_value();
        spawn_local(async move {
            match api.baja_coche(id).await {
                Ok(updated) => {
                    notice.set(Some(Notice::success("Coche dado de baja")));
                    set_coches.update(|list| {
                        if let Some(slot) = list.iter_mut().find(|c| c.id == id) {
                            *slot = updated;
                        }
                    });
                }
                Err(e) => notice.set(Some(Notice::error(e.to_string()))),
            }
        });
    };

    let total = move || coches.with(|c| c.len());

    view! {
        <NoticeToast notice=notice />
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0">
                <div class="flex items-center justify-between p-6 pb-2">
                    <div>
                        <h3 class="card-title">"Coches"</h3>
                        <p class="text-base-content/70 text-sm">{move || format!("{} en la flota", total())}</p>
                    </div>
                    <button on:click=move |_| load_coches() disabled=move || loading.get() class="btn btn-ghost btn-sm">
                        "Actualizar"
                    </button>
                </div>

                <CocheForm on_create=handle_create />

                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Móvil"</th>
                                <th>"Matrícula"</th>
                                <th>"Marca / Modelo"</th>
                                <th class="hidden md:table-cell">"Año"</th>
                                <th class="text-right">"Km"</th>
                                <th>"Estado"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || total() == 0 && !loading.get()>
                                <tr>
                                    <td colspan="7" class="text-center py-8 text-base-content/50">
                                        "No hay coches registrados."
                                    </td>
                                </tr>
                            </Show>
                            <Show when=move || loading.get() && total() == 0>
                                <tr>
                                    <td colspan="7" class="text-center py-8 text-base-content/50">
                                        <span class="loading loading-spinner loading-md"></span> " Cargando..."
                                    </td>
                                </tr>
                            </Show>
                            <For
                                each=move || coches.get()
                                key=|c| (c.id, c.estado.clone(), c.kilometros)
                                children=move |coche| {
                                    let id = coche.id;
                                    view! {
                                        <tr>
                                            <td class="font-bold">{coche.movil.clone()}</td>
                                            <td class="font-mono">{coche.matricula_completa()}</td>
                                            <td>{format!("{} {}", coche.marca, coche.modelo)}</td>
                                            <td class="hidden md:table-cell">{coche.anio.clone()}</td>
                                            <td class="text-right font-mono">{format_integer(coche.kilometros)}</td>
                                            <td><span class="badge badge-outline">{coche.estado.clone()}</span></td>
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

#[component]
fn CocheForm<F>(on_create: F) -> impl IntoView
where
    F: Fn(CocheCreate) + Copy + Send + Sync + 'static,
{
    let matricula = RwSignal::new(String::new());
    let movil = RwSignal::new(String::new());
    let marca = RwSignal::new(String::new());
    let modelo = RwSignal::new(String::new());
    let anio = RwSignal::new(String::new());
    let kilometros = RwSignal::new(String::new());
    let error_msg = RwSignal::new(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        let km_value = match kilometros.get().trim() {
            "" => 0,
            km => match km.parse::<i64>() {
                Ok(km) => km,
                Err(_) => {
                    error_msg.set(Some("Kilómetros inválidos".to_string()));
                    return;
                }
            },
        };

        let req = CocheCreate {
            matricula: matricula.get().trim().to_string(),
            movil: movil.get().trim().to_string(),
            marca: marca.get().trim().to_string(),
            modelo: modelo.get().trim().to_string(),
            anio: anio.get().trim().to_string(),
            kilometros: km_value,
            ..Default::default()
        };

        if let Err(e) = req.validate() {
            error_msg.set(Some(e.message));
            return;
        }

        error_msg.set(None);
        on_create(req);
        for field in [matricula, movil, marca, modelo, anio, kilometros] {
            field.set(String::new());
        }
    };

    view! {
        <form class="flex flex-wrap items-end gap-2 px-6 pb-4" on:submit=on_submit>
            <input class="input input-bordered input-sm w-24" placeholder="Matrícula" maxlength="4"
                on:input=move |ev| matricula.set(event_target_value(&ev)) prop:value=matricula />
            <input class="input input-bordered input-sm w-20" placeholder="Móvil"
                on:input=move |ev| movil.set(event_target_value(&ev)) prop:value=movil />
            <input class="input input-bordered input-sm w-32" placeholder="Marca"
                on:input=move |ev| marca.set(event_target_value(&ev)) prop:value=marca />
            <input class="input input-bordered input-sm w-32" placeholder="Modelo"
                on:input=move |ev| modelo.set(event_target_value(&ev)) prop:value=modelo />
            <input class="input input-bordered input-sm w-20" placeholder="Año"
                on:input=move |ev| anio.set(event_target_value(&ev)) prop:value=anio />
            <input class="input input-bordered input-sm w-28" placeholder="Km" inputmode="numeric"
                on:input=move |ev| kilometros.set(event_target_value(&ev)) prop:value=kilometros />
            <button class="btn btn-primary btn-sm">"Agregar"</button>
            {move || error_msg.get().map(|msg| view! { <span class="text-error text-sm">{msg}</span> })}
        </form>
    }
}
