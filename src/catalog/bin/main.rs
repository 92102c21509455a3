include!("../../lib.rs");
use std::process::ExitCode;
use tokio::io::BufReader;
use tracing::error;
use crate::catalog::controller::Shell;
use crate::catalog::factory::create_catalog_service;
use crate::core::controller::AppState;
use crate::core::repository::RepositoryStore;
use crate::utils::logging::setup_tracing;

// Interactive console over a catalog that lives for the duration of the process.
// Nothing is read from the environment or the command line.

const BRANCH: &str = "main";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let state = AppState::new(BRANCH, RepositoryStore::Memory);
    setup_tracing(state.config.tracing_level());

    let svc = create_catalog_service(&state.config, state.store);
    let mut shell = Shell::new(svc, BufReader::new(tokio::io::stdin()), tokio::io::stdout());
    match shell.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "console session failed");
            ExitCode::FAILURE
        }
    }
}
