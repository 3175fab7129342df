use crate::models::{DeclarationElement, ElementHandle, ProjectId};

/// What changed about an element, as reported by the host code model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Rename,
    Signature,
    TypeRef,
    Base,
    Argument,
    Unknown,
}

/// Notifications from the host code model.
#[derive(Debug, Clone)]
pub enum CodeModelEvent {
    Added(DeclarationElement),
    Changed {
        element: DeclarationElement,
        change: ChangeKind,
    },
    Deleted {
        parent: Option<ElementHandle>,
        element: DeclarationElement,
    },
}

/// Notifications from the host solution model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolutionEvent {
    /// A solution was opened; `project_count` projects will report as opened.
    SolutionOpened { project_count: usize },
    ProjectOpened { project: ProjectId },
    SolutionClosed,
}

#[derive(Debug, Clone)]
pub enum SessionEvent {
    CodeModel(CodeModelEvent),
    Solution(SolutionEvent),
}

impl From<CodeModelEvent> for SessionEvent {
    fn from(event: CodeModelEvent) -> Self {
        SessionEvent::CodeModel(event)
    }
}

impl From<SolutionEvent> for SessionEvent {
    fn from(event: SolutionEvent) -> Self {
        SessionEvent::Solution(event)
    }
}
