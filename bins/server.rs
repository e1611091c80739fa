use configs::{AppConfig, LogFormat};
use common::utils::logging::{init_logging, LogStyle};
use dotenvy::dotenv;
use server::errors::StartupError;
use tracing::{error, info};
use uuid::Uuid;

fn log_style(format: LogFormat) -> LogStyle {
    match format {
        LogFormat::Compact => LogStyle::Compact,
        LogFormat::Json => LogStyle::Json,
    }
}

fn main() -> std::process::ExitCode {
    // .env first so RUST_LOG and SERVER_* are visible to config loading
    dotenv().ok();

    let config = AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(format!("{e:#}")));
    let style = config.as_ref().map(|c| log_style(c.logging.format)).unwrap_or_default();
    init_logging(style);
    info!(service = "movie-api", event = "logger_init", "tracing subscriber initialized");

    let config = match config {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = "movie-api", event = "config_invalid", error = %e, "refusing to start");
            return std::process::ExitCode::FAILURE;
        }
    };

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "movie-api",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let worker_threads = config.server.worker_threads;
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "movie-api", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "movie-api",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "movie api starting"
    );

    match rt.block_on(server::run(config)) {
        Ok(()) => {
            info!(service = "movie-api", event = "stop", %service_id, pid, "movie api stopped normally");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "movie-api", event = "run_failed", error = %e, "server::run returned error");
            std::process::ExitCode::FAILURE
        }
    }
}
