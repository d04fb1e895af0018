use hourly::commands::Cli;
use hourly::libs::messages::macros::is_debug_mode;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hourly=debug")))
            .with_target(false)
            .init();
    }

    Cli::menu().await
}
