//! Flota web client
//!
//! - `web::route`: route table (pure)
//! - `web::router`: History API router service
//! - `web::http`: HTTP transport seam
//! - `api`: backend client
//! - `components`: views

#[macro_use]
mod log;

pub mod api;
pub mod config;
mod components {
    pub mod choferes;
    pub mod coches;
    pub mod navbar;
    pub mod notice;
    pub mod recaudacion_form;
    pub mod recaudaciones;
}

pub mod web {
    mod http;
    pub mod route;
    pub mod router;

    #[cfg(test)]
    pub use http::MockHttpClient;
    pub use http::{FetchHttpClient, HttpClient, HttpError, HttpRequest, HttpResponse};
}

use crate::api::FleetApi;
use crate::components::choferes::ChoferesPage;
use crate::components::coches::CochesPage;
use crate::components::navbar::Navbar;
use crate::components::recaudaciones::RecaudacionesPage;
use crate::config::AppConfig;

use leptos::prelude::*;

use web::route::AppRoute;
use web::router::{Link, Router, RouterOutlet};

/// API client provided by `App`.
pub fn use_api() -> FleetApi {
    use_context::<FleetApi>().expect("FleetApi should be provided")
}

fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Coches => view! { <CochesPage /> }.into_any(),
        AppRoute::Choferes => view! { <ChoferesPage /> }.into_any(),
        AppRoute::Recaudaciones => view! { <RecaudacionesPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center py-24">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">{AppRoute::NotFound.title()}</p>
                    <Link to="/coches" class="btn btn-primary mt-6">"Ir a coches"</Link>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Resolved once for the lifetime of the page
    let config = AppConfig::from_build_env();
    log_info!("[App] API base URL: {}", config.api_base_url());
    provide_context(FleetApi::from_config(&config));

    view! {
        <Router>
            <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
                <div class="max-w-7xl mx-auto space-y-8">
                    <Navbar />
                    <RouterOutlet matcher=route_matcher />
                </div>
            </div>
        </Router>
    }
}
