//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Output uses the compact format without the crate/module prefix (`with_target(false)`);
//! actor log lines carry an `entity_type` field instead. The filter comes from `RUST_LOG`
//! and falls back to `info` when the variable is unset or invalid.
//!
//! ```bash
//! # Default
//! cargo run
//!
//! # Full request payloads
//! RUST_LOG=debug cargo run
//!
//! # Only the HTTP layer
//! RUST_LOG=tower_http=debug,info cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started` and `Shutdown` with the final store size
//! - **Entity Operations**: Create, Upsert and Broadcast at `info`; Get, List and payloads at `debug`
//! - **Failures**: rejected creates and failed actions at `warn`, with the error as a field
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Actor started entity_type="MenuItem"
//! INFO Upserted entity_type="MenuItem" id=menu_item_1 created=true size=1
//! INFO Created entity_type="Order" id=order_1 size=1
//! INFO Broadcast done entity_type="Order" visited=1 ok=1
//! INFO Order status changed order_id=1 from=Preparing to=Out for Delivery
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global compact subscriber. Call once, at the top of `main`.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type replaces module paths
        .compact()
        .init();
}
