pub mod config;
pub mod error;
pub mod index;
pub mod logging;
pub mod memory;
pub mod resolver;
pub mod selection;
pub mod session;
pub mod walker;

pub use config::{ChangePolicy, NarrowingFallback, SessionConfig};
pub use error::{Result, TrueGotoError};
pub use index::SymbolIndex;
pub use resolver::{CandidateResolver, Candidates};
pub use selection::{ExtractedWord, extract_word};
pub use session::{EventSender, PumpHandle, Session, SessionBuilder};
pub use walker::WorkspaceWalker;
