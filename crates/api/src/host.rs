use crate::error::HostResult;
use crate::models::{DeclarationElement, ItemId, ProjectId, TextPoint};

/// Read access to the host's project tree and code model.
///
/// Every method may fail if the host API fails; the core never retries.
/// Absent collections are reported as empty (or `None`) rather than errors.
pub trait WorkspaceModel: Send + Sync {
    /// Top-level projects of the open solution.
    fn projects(&self) -> HostResult<Vec<ProjectId>>;

    /// Items (files, folders) directly inside a project.
    fn project_items(&self, project: ProjectId) -> HostResult<Vec<ItemId>>;

    /// The project an item stands for, when the item is a sub-project reference.
    fn sub_project(&self, item: ItemId) -> HostResult<Option<ProjectId>>;

    /// Items nested below a folder-like item.
    fn nested_items(&self, item: ItemId) -> HostResult<Vec<ItemId>>;

    /// Top-level code elements of a file item, `None` for items without a code model.
    fn code_elements(&self, item: ItemId) -> HostResult<Option<Vec<DeclarationElement>>>;

    /// Members of a namespace or type, parameters of a function.
    ///
    /// Only called for kinds where [`ElementKind::has_members`] holds.
    ///
    /// [`ElementKind::has_members`]: crate::models::ElementKind::has_members
    fn members_of(&self, element: &DeclarationElement)
    -> HostResult<Option<Vec<DeclarationElement>>>;
}

/// Editor text selection with word-wise navigation, mirroring the host's
/// selection object. Positions are character based.
pub trait TextSelection {
    /// Currently selected text; empty for a bare caret.
    fn text(&self) -> String;

    /// Start of the selection (the smaller of anchor and active point).
    fn top_point(&self) -> TextPoint;

    /// Move the active point one word to the left, keeping the anchor when `extend`.
    fn word_left(&mut self, extend: bool) -> HostResult<()>;

    /// Move the active point one word to the right, keeping the anchor when `extend`.
    fn word_right(&mut self, extend: bool) -> HostResult<()>;

    /// Collapse the selection to a caret at `point`.
    fn move_to_line_and_offset(&mut self, point: TextPoint) -> HostResult<()>;

    /// Move the active point `count` characters right, keeping the anchor when `extend`.
    fn char_right(&mut self, extend: bool, count: usize) -> HostResult<()>;
}

/// Window and command model of the editor hosting the session.
pub trait EditorHost: Send + Sync {
    fn is_solution_open(&self) -> bool;

    /// Top-level code elements of the focused document, `None` without one.
    fn active_document_elements(&self) -> HostResult<Option<Vec<DeclarationElement>>>;

    /// Selection of the focused document, `None` without an active document.
    fn selection(&self) -> HostResult<Option<Box<dyn TextSelection + '_>>>;

    /// Open the declaring file of `element` and move the caret to its location.
    fn open_and_navigate(&self, element: &DeclarationElement) -> HostResult<()>;

    /// The host's own "go to definition" command.
    fn execute_fallback(&self) -> HostResult<()>;
}
