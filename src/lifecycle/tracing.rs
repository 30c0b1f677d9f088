//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter whose level
//! comes from `RUST_LOG`. Module paths are hidden (`with_target(false)`); the
//! structured fields carry the context instead.
//!
//! ## What Gets Traced
//!
//! - **Lifecycle**: actor and producer startup and shutdown, with final totals
//! - **Events**: every arrival, pickup and heartbeat at `debug`
//! - **Terminal outcomes**: rejected arrivals and deliveries at `info`
//! - **Shelf status**: one line per published snapshot from [`LogStatusView`]
//!
//! ## Usage Examples
//!
//! ```bash
//! # Shelf status and deliveries
//! RUST_LOG=info cargo run
//!
//! # Every event, including the full order payload
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a run looks like:
//!
//! ```text
//! INFO Kitchen actor started capacity=15
//! INFO Order source started rate=3.25
//! INFO Shelf status hot=1 cold=0 frozen=0 overflow=0 delivered=0 wasted=0
//! INFO Delivered order_id=order_1 value=0.97
//! ```
//!
//! [`LogStatusView`]: crate::clients::LogStatusView

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
