mod app_state;
mod cli;

use std::sync::{Arc, Mutex};

use chorus_common::ConfigError;
use chorus_config::schema::ChorusConfig;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use app_state::UserEvent;

const DEFAULT_DIRECTIVE: &str = "chorus=info";

/// Pick the filter directive: CLI flag, then config file, then default.
///
/// A bare level such as `debug` is scoped to the chorus crates so webview
/// and windowing internals stay quiet.
fn log_directive(cli_level: Option<&str>, config: Option<&ChorusConfig>) -> String {
    match cli_level {
        Some(level) if level.contains('=') => level.to_string(),
        Some(level) => format!("chorus={level}"),
        None => config
            .map(|c| c.logging.level.directive())
            .unwrap_or(DEFAULT_DIRECTIVE)
            .to_string(),
    }
}

fn load_config(args: &cli::Args) -> Result<ChorusConfig, ConfigError> {
    match &args.config {
        Some(path) => chorus_config::load_config_from(path),
        None => chorus_config::load_config(),
    }
}

fn main() {
    let args = cli::parse();

    // Loaded before logging so the file can choose the level; the outcome
    // is reported once the subscriber is up.
    let loaded = load_config(&args);

    let directive = log_directive(args.log_level.as_deref(), loaded.as_ref().ok());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| DEFAULT_DIRECTIVE.parse().expect("valid directive")),
            ),
        )
        .init();

    tracing::info!("Chorus v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        ChorusConfig::default()
    });

    if !args.urls.is_empty() {
        tracing::info!(count = args.urls.len(), "Startup providers taken from command line");
        config.providers.startup = args.urls.clone();
    }

    if args.print_config {
        println!("{}", chorus_config::config_to_json(&config));
        return;
    }

    let event_loop = match EventLoop::<UserEvent>::with_user_event().build() {
        Ok(el) => el,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };

    // The debouncer fires on a tokio worker; it only posts back to the UI
    // thread, which does the actual relayout.
    let proxy = Mutex::new(event_loop.create_proxy());
    let waker: app_state::RelayoutWaker = Arc::new(move || {
        if let Ok(proxy) = proxy.lock() {
            let _ = proxy.send_event(UserEvent::Relayout);
        }
    });

    let mut app = app_state::ChorusApp::new(config, waker);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
