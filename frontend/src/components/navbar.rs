use crate::web::route::ROUTES;
use crate::web::router::Link;
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <div class="navbar bg-base-100 rounded-box shadow-xl">
            <div class="flex-1">
                <span class="btn btn-ghost text-xl font-display">"Flota"</span>
            </div>
            <div class="flex-none">
                <ul class="menu menu-horizontal gap-1">
                    {ROUTES
                        .iter()
                        .map(|entry| view! {
                            <li>
                                <Link to=entry.path active_class="active">{entry.title}</Link>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
