use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use super::{ForgotPasswordPage, HomePage, LoginPage, PageProps, RegisterPage, ReportPage};
use crate::routes::Route;
use crate::state::BrowserSessionStore;
use crate::viewmodels::{admit, Admission};

/// Route for the address bar. An unknown path is replaced by the login
/// path so the bar matches the screen.
fn current_route() -> Route {
    let Some(path) = web_sys::window().and_then(|win| win.location().pathname().ok()) else {
        return Route::Login;
    };
    match Route::parse(&path) {
        Some(route) => route,
        None => {
            log::warn!("⚠️ Unknown path {}, showing login", path);
            write_history(Route::Login, true);
            Route::Login
        }
    }
}

/// Writes the route into the address bar. Redirects replace the current
/// entry so the back button does not bounce through the guard again.
fn write_history(route: Route, replace: bool) {
    let Some(history) = web_sys::window().and_then(|win| win.history().ok()) else {
        log::warn!("⚠️ History API unavailable");
        return;
    };
    let result = if replace {
        history.replace_state_with_url(&JsValue::NULL, "", Some(route.path()))
    } else {
        history.push_state_with_url(&JsValue::NULL, "", Some(route.path()))
    };
    if let Err(e) = result {
        log::error!("❌ Could not update history: {:?}", e);
    }
}

fn admission_for(route: Route) -> Admission {
    match BrowserSessionStore::browser() {
        Ok(session) => admit(route, &session),
        Err(e) => {
            log::error!("❌ {}", e);
            if route.is_protected() {
                Admission::Redirect(Route::Login)
            } else {
                Admission::Admit
            }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let route = use_state(current_route);

    let navigate = {
        let route = route.clone();
        Callback::from(move |next: Route| {
            log::debug!("🧭 {}", next.path());
            write_history(next, false);
            route.set(next);
        })
    };

    // Back/forward buttons
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = Closure::<dyn Fn(web_sys::Event)>::new(move |_: web_sys::Event| {
                route.set(current_route());
            });
            let window = web_sys::window();
            if let Some(win) = &window {
                if let Err(e) = win
                    .add_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref())
                {
                    log::error!("❌ Could not listen for popstate: {:?}", e);
                }
            }
            move || {
                if let Some(win) = window {
                    let _ = win.remove_event_listener_with_callback(
                        "popstate",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let admission = use_memo(*route, |route| admission_for(*route));

    {
        let route = route.clone();
        use_effect_with(*admission, move |admission| {
            if let Admission::Redirect(target) = *admission {
                write_history(target, true);
                route.set(target);
            }
            || ()
        });
    }

    match *admission {
        Admission::Admit => render_page(*route, navigate),
        Admission::Redirect(_) => html! {},
    }
}

fn render_page(route: Route, on_navigate: Callback<Route>) -> Html {
    let props = PageProps { on_navigate };
    match route {
        Route::Login => html! { <LoginPage ..props /> },
        Route::Register => html! { <RegisterPage ..props /> },
        Route::ForgotPassword => html! { <ForgotPasswordPage ..props /> },
        Route::Home => html! { <HomePage ..props /> },
        Route::Report => html! { <ReportPage ..props /> },
    }
}
