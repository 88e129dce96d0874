use crate::ShutdownCoordinator;

use tokio::sync::broadcast;

/// Per-task handle on the shutdown signal
pub struct ShutdownGuard {
    shutdown_rx: broadcast::Receiver<()>,
    coordinator: ShutdownCoordinator,
}

impl ShutdownGuard {
    pub fn new(coordinator: &ShutdownCoordinator) -> Self {
        Self {
            shutdown_rx: coordinator.subscribe(),
            coordinator: coordinator.clone(),
        }
    }

    /// Resolves once shutdown has been triggered, including before this guard existed.
    pub async fn wait(&mut self) {
        if self.coordinator.is_shutdown() {
            return;
        }
        let _ = self.shutdown_rx.recv().await;
    }

    /// Non-blocking check
    pub fn is_triggered(&self) -> bool {
        self.coordinator.is_shutdown()
    }
}
