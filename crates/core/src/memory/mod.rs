//! In-memory host collaborators for tests and headless use.

mod editor;
mod selection;
mod workspace;

pub use editor::MemoryEditor;
pub use selection::BufferSelection;
pub use workspace::MemoryWorkspace;
