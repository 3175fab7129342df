//! The lookup session: one owner for the symbol index and the host
//! collaborators feeding and consuming it.

use crate::config::SessionConfig;
use crate::index::SymbolIndex;
use crate::resolver::CandidateResolver;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use truegoto_api::{DotPathConvention, EditorHost, NamingConvention, WorkspaceModel};

mod barrier;
mod events;
mod lookup;
mod pump;

pub use barrier::{Generation, LoadBarrier};
pub use pump::{EventSender, PumpHandle};

/// Owns the symbol index for one open solution.
///
/// Mutations arrive through the event methods, lookups through
/// [`Session::lookup`] and [`Session::go_to_definition`]. All of them may be
/// called concurrently from different host threads.
pub struct Session {
    workspace: Arc<dyn WorkspaceModel>,
    editor: Arc<dyn EditorHost>,
    index: SymbolIndex,
    resolver: CandidateResolver,
    barrier: LoadBarrier,
    ready: AtomicBool,
    naming_convention: Arc<dyn NamingConvention>,
    config: SessionConfig,
    /// Cancellation token for background tasks (the event pump)
    cancel_token: tokio_util::sync::CancellationToken,
}

pub struct SessionBuilder {
    workspace: Arc<dyn WorkspaceModel>,
    editor: Arc<dyn EditorHost>,
    config: SessionConfig,
    naming_convention: Arc<dyn NamingConvention>,
}

impl SessionBuilder {
    pub fn new(workspace: Arc<dyn WorkspaceModel>, editor: Arc<dyn EditorHost>) -> Self {
        Self {
            workspace,
            editor,
            config: SessionConfig::default(),
            naming_convention: Arc::new(DotPathConvention),
        }
    }

    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_naming_convention(mut self, convention: Arc<dyn NamingConvention>) -> Self {
        self.naming_convention = convention;
        self
    }

    pub fn build(self) -> Session {
        Session {
            workspace: self.workspace,
            editor: self.editor,
            index: SymbolIndex::new(self.config.change_policy),
            resolver: CandidateResolver::from_config(&self.config),
            barrier: LoadBarrier::new(),
            ready: AtomicBool::new(false),
            naming_convention: self.naming_convention,
            config: self.config,
            cancel_token: tokio_util::sync::CancellationToken::new(),
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.cancel_token.cancel();
    }
}

impl Session {
    /// Create a builder for the session
    pub fn builder(workspace: Arc<dyn WorkspaceModel>, editor: Arc<dyn EditorHost>) -> SessionBuilder {
        SessionBuilder::new(workspace, editor)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn index(&self) -> &SymbolIndex {
        &self.index
    }

    /// Whether the initial workspace walk has completed.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    pub fn load_progress(&self) -> (usize, Option<usize>) {
        self.barrier.progress()
    }
}
