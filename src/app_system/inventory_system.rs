use tracing::{error, info, instrument};
use crate::app_system::Config;
use crate::clients::InventoryClient;
use crate::inventory_actor::InventoryService;

/// Starts the inventory service and owns its task handle.
///
/// Hand `inventory_client` (or clones of it) to whatever drives the session,
/// then call [`InventorySystem::shutdown`] to stop the service and wait for it.
pub struct InventorySystem {
    pub inventory_client: InventoryClient,
    handle: tokio::task::JoinHandle<()>,
}

impl InventorySystem {
    #[instrument(name = "inventory_system", skip(config))]
    pub fn new(config: &Config) -> Self {
        info!(channel_capacity = config.channel_capacity, "Starting inventory system");

        let (service, inventory_client) = InventoryService::new(config.channel_capacity);
        let handle = tokio::spawn(service.run());

        Self {
            inventory_client,
            handle,
        }
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        if let Err(e) = self.inventory_client.shutdown().await {
            // The service already stopped; the join below reports why.
            error!(error = %e, "Shutdown request not delivered");
        }
        drop(self.inventory_client);

        if let Err(e) = self.handle.await {
            error!("Service task failed: {:?}", e);
            return Err(format!("Service task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
