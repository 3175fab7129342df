use crate::ApiResult;
use crate::events::{CodeModelEvent, SolutionEvent};

pub trait EventPumpHandle: Send + Sync {
    fn stop(&self);
}

/// Session-side sinks for host notifications.
///
/// Hosts call these from whichever thread the notification arrives on.
pub trait SessionLifecycle: Send + Sync {
    /// Apply a solution/project notification (load barrier, teardown).
    fn on_solution_event(&self, event: SolutionEvent) -> ApiResult<()>;

    /// Apply a code-model notification to the index.
    fn on_code_model_event(&self, event: CodeModelEvent);

    /// Whether the initial workspace walk has completed.
    fn is_ready(&self) -> bool;

    /// Drop the index and stop listening.
    fn shutdown(&self);
}
