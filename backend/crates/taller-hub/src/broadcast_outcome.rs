/// Per-peer result of one fan-out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BroadcastOutcome {
    /// Frames queued on an open connection
    pub delivered: usize,
    /// Connections not in `Open` state
    pub skipped: usize,
    /// Open connections whose queue was full or already closed
    pub failed: usize,
}

impl BroadcastOutcome {
    pub fn recipients(&self) -> usize {
        self.delivered + self.failed
    }
}
