use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Startup and serve failures are logged where they happen.
    match calculator_server::run_with_config().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
