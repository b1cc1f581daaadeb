use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn main() -> std::process::ExitCode {
    // .env before the subscriber so RUST_LOG from the file applies
    dotenv().ok();
    common::utils::logging::init_logging_default();

    let run_id = Uuid::new_v4();
    let pid = std::process::id();

    // Panics land in the log stream with run context attached
    std::panic::set_hook(Box::new(move |info| {
        error!(%run_id, pid, message = %info, "panic");
    }));

    // Thread count from config.toml when present, TOKIO_WORKER_THREADS otherwise
    let worker_threads = configs::AppConfig::load_and_validate()
        .ok()
        .and_then(|cfg| cfg.server.worker_threads)
        .or_else(|| {
            std::env::var("TOKIO_WORKER_THREADS")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
        });

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(n) = worker_threads {
        builder.worker_threads(n);
    }
    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        %run_id,
        pid,
        version = env!("CARGO_PKG_VERSION"),
        threads = worker_threads.unwrap_or_default(),
        "customer api starting"
    );

    rt.block_on(async move {
        tokio::select! {
            res = server::run() => match res {
                Ok(()) => {
                    info!(%run_id, "server stopped");
                    std::process::ExitCode::SUCCESS
                }
                Err(e) => {
                    error!(%run_id, error = %e, "server exited with error");
                    std::process::ExitCode::FAILURE
                }
            },
            _ = tokio::signal::ctrl_c() => {
                info!(%run_id, "shutdown signal received");
                std::process::ExitCode::SUCCESS
            }
        }
    })
}
