//! Router service
//!
//! Everything that touches `window.history` lives here. The current route is
//! a signal; views re-render when it changes.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

/// Current browser path
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Used for redirects so the redirecting path does not stay in history.
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Resolves `path`, rewriting the history entry when it is a redirect.
fn resolve_and_redirect(path: &str) -> AppRoute {
    match AppRoute::redirect_target(path) {
        Some(target) => {
            if let Some(to) = target.to_path() {
                log_info!("[Router] Redirect {} -> {}", path, to);
                replace_history_state(to);
            }
            target
        }
        None => AppRoute::from_path(path),
    }
}

#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
}

impl RouterService {
    fn new() -> Self {
        let initial_route = resolve_and_redirect(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// Pushes a history entry for `path` and shows the matching view.
    ///
    /// Redirecting paths push their target instead; unknown paths are pushed
    /// as given and render the not-found view.
    pub fn navigate(&self, path: &str) {
        let target = AppRoute::from_path(path);
        let url = match AppRoute::redirect_target(path) {
            Some(_) => target.to_path().unwrap_or(path),
            None => path,
        };

        if self.current_route.get_untracked() == target && current_path() == url {
            return;
        }

        push_history_state(url);
        self.set_route.set(target);
    }

    /// Browser back/forward
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;

        let closure = Closure::<dyn Fn()>::new(move || {
            let route = resolve_and_redirect(&current_path());
            set_route.set(route);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Listener lives as long as the page
        closure.forget();
    }
}

fn provide_router() -> RouterService {
    let router = RouterService::new();
    router.init_popstate_listener();
    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI components
// ============================================================================

/// Provides the router context; place at the app root.
#[component]
pub fn Router(children: Children) -> impl IntoView {
    provide_router();

    children()
}

/// Renders the view of the current route.
#[component]
pub fn RouterOutlet(
    /// Maps a route to its view
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// In-app link: navigates without a page reload.
#[component]
pub fn Link(
    #[prop(into)] to: String,
    #[prop(optional, into)] class: String,
    /// Extra class while the link's route is active
    #[prop(optional, into)]
    active_class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let link_route = AppRoute::from_path(&to);

    let class_name = move || {
        if router.current_route().get() == link_route && !active_class.is_empty() {
            format!("{} {}", class, active_class)
        } else {
            class.clone()
        }
    };

    let target = to.clone();
    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate(&target);
    };

    view! {
        <a href=to class=class_name on:click=on_click>
            {children()}
        </a>
    }
}
