pub mod error;
pub mod events;
pub mod host;
pub mod lifecycle;
pub mod models;
pub mod navigation;

// Re-export commonly used types
pub use error::{ApiError, ApiResult, HostError, HostResult};
pub use events::{ChangeKind, CodeModelEvent, SessionEvent, SolutionEvent};
pub use host::{EditorHost, TextSelection, WorkspaceModel};
pub use lifecycle::{EventPumpHandle, SessionLifecycle};
pub use models::*;
pub use navigation::{NavigationService, Query};

/// Composite trait representing the full lookup API offered to a host.
pub trait TrueGotoSession: NavigationService + SessionLifecycle {
    /// The command handler: resolve the current selection and navigate,
    /// falling back to the host's own command when nothing is found.
    fn go_to_definition(&self);
}
