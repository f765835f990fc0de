//! Bar Timer - A single-instance countdown timer for status bars
//!
//! This is the main entry point for the bar-timer application.

use std::sync::Arc;
use tracing::{error, info};

use bar_timer::{
    config::Config,
    controller::{dispatch, ControllerContext, Request},
    services::SystemAlarm,
    store::CoordinationStore,
    utils::{read_duration_string, shutdown_signal, SystemClock},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Diagnostics go to stderr, stdout carries user-facing messages
    tracing_subscriber::fmt()
        .with_env_filter(format!("bar_timer={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = config.validate() {
        error!("{}", e);
        std::process::exit(2);
    }

    let paths = config.store_paths();
    info!("Using state directory under {}", config.root_dir().display());

    let alarm = SystemAlarm::new(paths.alarm_asset.clone(), config.volume);
    let ctx = ControllerContext::new(
        CoordinationStore::new(paths),
        Arc::new(SystemClock),
        alarm,
        config.tick_interval(),
        config.grace_period(),
    );

    let request = match config.request() {
        Request::Start { duration: None } => match read_duration_string().await {
            Ok(duration) => Request::Start { duration },
            Err(e) => {
                error!("{}", e);
                Request::Start { duration: None }
            }
        },
        request => request,
    };

    let response = dispatch(&ctx, request, shutdown_signal()).await;
    println!("{}", response);

    if response.is_failure() {
        std::process::exit(1);
    }
    Ok(())
}
