/// Lifecycle position of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Loaded, nothing asked yet.
    Ready,
    /// Some questions asked, some still pending.
    InProgress,
    /// Every question has been asked; only the summary remains.
    Exhausted,
}

/// Aggregated view of session progress, useful for callers and logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub asked: usize,
    pub remaining: usize,
    pub state: SessionState,
}
