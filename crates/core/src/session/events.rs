use super::Session;
use super::barrier::Generation;
use crate::error::Result;
use crate::walker::WorkspaceWalker;
use std::sync::atomic::Ordering;
use truegoto_api::{ApiResult, CodeModelEvent, SessionEvent, SessionLifecycle, SolutionEvent};

impl Session {
    pub fn handle_event(&self, event: SessionEvent) -> Result<()> {
        match event {
            SessionEvent::CodeModel(event) => {
                self.on_code_model_event(event);
                Ok(())
            }
            SessionEvent::Solution(event) => self.on_solution_event(event),
        }
    }

    pub fn on_code_model_event(&self, event: CodeModelEvent) {
        match event {
            CodeModelEvent::Added(element) => self.index.on_element_added(element),
            CodeModelEvent::Changed { element, change } => {
                self.index.on_element_changed(element, change)
            }
            CodeModelEvent::Deleted { parent, element } => {
                self.index.on_element_deleted(parent, &element);
            }
        }
    }

    pub fn on_solution_event(&self, event: SolutionEvent) -> Result<()> {
        match event {
            SolutionEvent::SolutionOpened { project_count } => {
                tracing::info!("Solution opened with {} projects", project_count);
                if let Some(generation) = self.barrier.solution_opened(project_count) {
                    self.populate(generation)?;
                }
            }
            SolutionEvent::ProjectOpened { project } => {
                tracing::debug!("Project {:?} opened", project);
                if let Some(generation) = self.barrier.project_opened() {
                    self.populate(generation)?;
                }
            }
            SolutionEvent::SolutionClosed => {
                self.reset();
                tracing::info!("Solution closed, index cleared");
            }
        }
        Ok(())
    }

    /// Walk the whole workspace and install the result as the index content.
    ///
    /// The walk talks to the host and runs without the index lock. Code-model
    /// notifications applied while it runs are overwritten by the walk result.
    /// A result for a solution closed during the walk is dropped.
    fn populate(&self, generation: Generation) -> Result<()> {
        let elements = WorkspaceWalker::walk(self.workspace.as_ref())?;
        let count = elements.len();
        let installed = self.barrier.commit(generation, || {
            self.index.replace_all(elements);
            self.ready.store(true, Ordering::SeqCst);
        });
        if installed {
            tracing::info!("Session ready, {} declarations indexed", count);
        } else {
            tracing::info!(
                "Solution closed during the walk, dropping {} declarations",
                count
            );
        }
        Ok(())
    }

    fn reset(&self) {
        self.barrier.reset(|| {
            self.ready.store(false, Ordering::SeqCst);
            self.index.clear();
        });
    }

    /// Drop the index and stop background tasks.
    pub fn shutdown(&self) {
        self.cancel_token.cancel();
        self.reset();
        tracing::info!("Session shut down");
    }
}

impl SessionLifecycle for Session {
    fn on_solution_event(&self, event: SolutionEvent) -> ApiResult<()> {
        Session::on_solution_event(self, event).map_err(Into::into)
    }

    fn on_code_model_event(&self, event: CodeModelEvent) {
        Session::on_code_model_event(self, event)
    }

    fn is_ready(&self) -> bool {
        Session::is_ready(self)
    }

    fn shutdown(&self) {
        Session::shutdown(self)
    }
}
