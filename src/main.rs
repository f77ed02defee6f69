use tokio::io::BufReader;
use tracing::{error, info, Instrument};
use inventory_tracker::app_system::{setup_tracing, Config, InventorySystem};
use inventory_tracker::shell::Shell;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = Config::from_env();
    info!(?config, "Starting inventory tracker");

    let system = InventorySystem::new(&config);

    let mut shell = Shell::new(
        system.inventory_client.clone(),
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    );
    let session = shell.run().instrument(tracing::info_span!("session")).await;
    drop(shell);

    if let Err(e) = &session {
        error!(error = %e, "Session aborted");
    }

    system.shutdown().await?;
    session.map_err(|e| e.to_string())
}
