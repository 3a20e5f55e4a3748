#[cfg(target_arch = "wasm32")]
fn main() {
    use billing_portal::config::CONFIG;

    console_error_panic_hook::set_once();
    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🚀 Billing portal starting ({})", CONFIG.environment);

    yew::Renderer::<billing_portal::components::App>::new().render();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("billing-portal runs in the browser; build it for wasm32-unknown-unknown");
}
