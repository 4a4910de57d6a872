//! Entry point for the flo binary.

mod tracing_setup;

use anyhow::Result;

fn main() -> Result<()> {
    // Load GUI-specific config (folio.toml)
    let config = folio_dioxus::FolioConfig::load_default().unwrap_or_else(|err| {
        eprintln!("Warning: failed to load folio.toml: {err}");
        eprintln!("Using default configuration");
        folio_dioxus::FolioConfig::default()
    });

    // Set up tracing subscriber BEFORE Dioxus to prevent dioxus-logger from setting its own.
    tracing_setup::init(&config.logging);

    log::info!("Starting flo");

    // Create tokio runtime for timers and preview fetches
    let runtime = tokio::runtime::Runtime::new()?;
    let _guard = runtime.enter();

    // Parse command-line arguments and launch the application
    let startup_action = folio_dioxus::parse_args();
    folio_dioxus::launch(config, startup_action)
}
