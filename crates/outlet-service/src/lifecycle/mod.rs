//! # System Lifecycle & Orchestration
//!
//! This module manages the runtime lifecycle of the outlet: starting and wiring the two
//! actors, running the periodic status sweep, and shutting everything down in order.
//!
//! ## The OutletSystem Pattern
//!
//! [`OutletSystem`] creates both actors first and only then starts them, handing each one
//! its dependencies through `run(context)`:
//!
//! ```rust,ignore
//! let (catalog_actor, catalog) = catalog_actor::new(capacity);
//! let (ledger_actor, ledger) = ledger_actor::new(capacity);
//!
//! tokio::spawn(catalog_actor.run(()));
//! tokio::spawn(ledger_actor.run(CatalogClient::new(catalog.clone())));
//! ```
//!
//! The ledger depends on the catalog and never the other way round, so the dependency
//! graph is acyclic and an order validation can never deadlock against the catalog.
//!
//! ## The Sweep
//!
//! [`SweepScheduler`] is a separate task that broadcasts `OrderAction::Advance` to the
//! ledger on a fixed period. The whole sweep runs in one ledger mailbox turn, so a
//! concurrent `GET /orders/:id` sees every order either before or after the sweep.
//! Each sweep is published as a [`SweepReport`] to subscribers.
//!
//! ## Graceful Shutdown
//!
//! 1. **Stop the scheduler** - it drops its `OrderClient` clone
//! 2. **Drop all clients** - closes the sender side of each mailbox
//! 3. **Actors detect closure** - `receiver.recv()` returns `None`, final state is logged
//! 4. **Await completion** - the ledger goes first, releasing its `CatalogClient`
//!
//! ## Observability
//!
//! Logging is installed once by the binary through
//! [`actor_framework::tracing::setup_tracing`].

pub mod outlet_system;
pub mod scheduler;

pub use outlet_system::*;
pub use scheduler::*;
