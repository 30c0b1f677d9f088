//! # Status View
//!
//! The display side of the kitchen is an external collaborator. This module only
//! fixes its boundary: a [`StatusView`] receives owned [`KitchenStatus`] snapshots
//! and renders them however it likes.

use crate::model::KitchenStatus;
use async_trait::async_trait;
use tokio::sync::watch;
use tracing::info;

/// Consumer of kitchen snapshots.
#[async_trait]
pub trait StatusView: Send + Sync {
    async fn render(&self, status: &KitchenStatus);
}

/// Logs per-shelf counts and running totals.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogStatusView;

#[async_trait]
impl StatusView for LogStatusView {
    async fn render(&self, status: &KitchenStatus) {
        let counts = status.counts();
        let stats = status.stats;
        info!(
            hot = counts.hot,
            cold = counts.cold,
            frozen = counts.frozen,
            overflow = counts.overflow,
            delivered = stats.delivered,
            wasted = stats.wasted,
            "Shelf status"
        );
    }
}

/// Renders every published snapshot until the publisher goes away.
///
/// Snapshots published faster than `view` renders are coalesced; the view always
/// gets the latest one.
pub async fn watch_status<V: StatusView>(view: V, mut updates: watch::Receiver<KitchenStatus>) {
    while updates.changed().await.is_ok() {
        let status = updates.borrow_and_update().clone();
        view.render(&status).await;
    }
}
