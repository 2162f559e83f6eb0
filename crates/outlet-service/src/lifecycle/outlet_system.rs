use super::scheduler::{SweepReport, SweepScheduler};
use crate::catalog_actor;
use crate::clients::{CatalogClient, OrderClient};
use crate::config::ServiceConfig;
use crate::ledger_actor;
use tokio::sync::broadcast;
use tracing::{error, info};

/// The runtime orchestrator for the outlet.
///
/// `OutletSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping both actors and the sweep scheduler
/// - **Dependency Wiring**: The ledger is started with a `CatalogClient` as its context
///
/// # Example
///
/// ```ignore
/// let system = OutletSystem::new(&ServiceConfig::default());
///
/// system.catalog_client.upsert(pizza).await?;
/// let order = system.order_client.create_order(OrderCreate { items: vec![MenuItemId(1)] }).await?;
///
/// system.shutdown().await?;
/// ```
pub struct OutletSystem {
    /// Client for the menu catalog
    pub catalog_client: CatalogClient,

    /// Client for the order ledger
    pub order_client: OrderClient,

    scheduler: SweepScheduler,

    /// Actor tasks, ledger first (it holds a catalog client)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OutletSystem {
    /// Creates both actors, wires the ledger to the catalog, and starts sweeping.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(config: &ServiceConfig) -> Self {
        // 1. Create actors (no dependencies)
        let (catalog_actor, catalog_generic) = catalog_actor::new(config.mailbox_capacity);
        let (ledger_actor, ledger_generic) = ledger_actor::new(config.mailbox_capacity);
        let catalog_client = CatalogClient::new(catalog_generic);
        let order_client = OrderClient::new(ledger_generic);

        // 2. Start actors with injected context
        let catalog_handle = tokio::spawn(catalog_actor.run(()));
        let ledger_handle = tokio::spawn(ledger_actor.run(catalog_client.clone()));

        // 3. Start the periodic sweep
        let scheduler = SweepScheduler::spawn(order_client.clone(), config.sweep_interval());

        info!(
            mailbox_capacity = config.mailbox_capacity,
            sweep_interval_secs = config.sweep_interval_secs,
            "Outlet system started"
        );

        Self {
            catalog_client,
            order_client,
            scheduler,
            handles: vec![ledger_handle, catalog_handle],
        }
    }

    /// Receives a [`SweepReport`] after every sweep.
    pub fn subscribe_sweeps(&self) -> broadcast::Receiver<SweepReport> {
        self.scheduler.subscribe()
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Stops the scheduler, then drops the clients so each actor's mailbox closes.
    /// Clones handed out elsewhere (for example to the HTTP layer) must be dropped
    /// before this returns.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        self.scheduler.shutdown().await;

        drop(self.order_client);
        drop(self.catalog_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
