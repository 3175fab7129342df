use serde::{Deserialize, Serialize};

/// A caret position as the host reports it: zero-based line, character offset in that line.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextPoint {
    pub line: usize,
    pub offset: usize,
}

impl TextPoint {
    pub fn new(line: usize, offset: usize) -> Self {
        Self { line, offset }
    }
}

/// The original selection before word expansion, enough to put it back.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SelectionAnchor {
    pub top: TextPoint,
    /// Selected length in characters.
    pub length: usize,
}
