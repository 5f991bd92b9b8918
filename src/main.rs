use anyhow::Result;
use mindpulse::config::ApiConfig;
use mindpulse::ui_dioxus::App;

fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    let config = ApiConfig::from_env();
    let base_url = config.validate()?;
    tracing::info!(base_url = %base_url, "Starting MindPulse");

    dioxus::launch(App);

    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    tracing_subscriber::fmt::init();
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {
    wasm_logger::init(wasm_logger::Config::default());
}
