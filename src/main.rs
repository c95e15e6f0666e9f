use dtrack::commands::Cli;
use dtrack::libs::logging;
use dtrack::msg_error;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    match Cli::menu().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
