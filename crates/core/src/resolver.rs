use crate::config::{NarrowingFallback, SessionConfig};
use crate::error::Result;
use std::sync::Arc;
use truegoto_api::{DeclarationElement, Query};

/// Outcome of filtering the index for a query, before any disambiguation.
#[derive(Debug, Clone, PartialEq)]
pub enum Candidates {
    None,
    Unique(DeclarationElement),
    Ambiguous(Vec<DeclarationElement>),
}

/// Active namespaces of a document: the targets of its top-level
/// import, using and include statements.
pub fn active_namespaces(document_elements: &[DeclarationElement]) -> Vec<Arc<str>> {
    document_elements
        .iter()
        .filter(|e| e.kind.is_namespace_context())
        .filter_map(|e| e.namespace.clone())
        .collect()
}

/// Narrows same-named declarations to a single pick.
#[derive(Debug, Clone, Copy)]
pub struct CandidateResolver {
    name_fallback: NarrowingFallback,
    qualified_fallback: NarrowingFallback,
}

impl Default for CandidateResolver {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default())
    }
}

impl CandidateResolver {
    pub fn new(name_fallback: NarrowingFallback, qualified_fallback: NarrowingFallback) -> Self {
        Self {
            name_fallback,
            qualified_fallback,
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.name_fallback, config.qualified_fallback)
    }

    fn fallback_for(&self, query: &Query) -> NarrowingFallback {
        match query {
            Query::Name(_) => self.name_fallback,
            Query::Qualified { .. } => self.qualified_fallback,
        }
    }

    /// Filter `elements` down to the candidates for `query`, in index order.
    pub fn candidates(&self, elements: &[DeclarationElement], query: &Query) -> Candidates {
        if query.is_blank() {
            return Candidates::None;
        }

        let mut matched: Vec<DeclarationElement> = match query {
            Query::Name(name) => elements
                .iter()
                .filter(|e| e.name() == name)
                .cloned()
                .collect(),
            Query::Qualified { path, name } => {
                let path = path.to_lowercase();
                let target = format!("{}{}", path, name.to_lowercase());
                elements
                    .iter()
                    .filter(|e| {
                        let full_path = e.full_path().to_lowercase();
                        full_path == path || full_path == target
                    })
                    .cloned()
                    .collect()
            }
        };

        match matched.len() {
            0 => Candidates::None,
            1 => Candidates::Unique(matched.remove(0)),
            _ => Candidates::Ambiguous(matched),
        }
    }

    /// Pick one of several candidates using the active namespaces of the
    /// focused document.
    ///
    /// Without active namespaces the first candidate wins. Otherwise candidates
    /// whose full path contains an active namespace win; when none does, name
    /// lookups (by default) fall back to all candidates while qualified lookups
    /// report no match.
    pub fn disambiguate(
        &self,
        query: &Query,
        candidates: Vec<DeclarationElement>,
        active_namespaces: &[Arc<str>],
    ) -> Option<DeclarationElement> {
        if active_namespaces.is_empty() {
            return first_in_index_order(candidates);
        }

        let narrowed: Vec<DeclarationElement> = candidates
            .iter()
            .filter(|e| {
                active_namespaces
                    .iter()
                    .any(|ns| e.full_path().contains(ns.as_ref()))
            })
            .cloned()
            .collect();

        let pool = if !narrowed.is_empty() {
            narrowed
        } else {
            match self.fallback_for(query) {
                NarrowingFallback::Unnarrowed => candidates,
                NarrowingFallback::NoMatch => {
                    tracing::debug!(
                        "No candidate for {:?} lives in an active namespace ({:?})",
                        query,
                        active_namespaces
                    );
                    return None;
                }
            }
        };

        first_in_index_order(pool)
    }

    /// Filter and disambiguate in one step.
    ///
    /// `imports` yields the focused document's top-level elements and is only
    /// invoked when the lookup is ambiguous.
    pub fn resolve(
        &self,
        elements: &[DeclarationElement],
        query: &Query,
        imports: impl FnOnce() -> Result<Vec<DeclarationElement>>,
    ) -> Result<Option<DeclarationElement>> {
        match self.candidates(elements, query) {
            Candidates::None => Ok(None),
            Candidates::Unique(element) => Ok(Some(element)),
            Candidates::Ambiguous(candidates) => {
                let namespaces = active_namespaces(&imports()?);
                Ok(self.disambiguate(query, candidates, &namespaces))
            }
        }
    }
}

/// Tie-break among equally plausible candidates.
///
/// Function candidates get no preference over other kinds: overloads share a
/// name and there are no signatures to compare, so index order decides.
fn first_in_index_order(candidates: Vec<DeclarationElement>) -> Option<DeclarationElement> {
    candidates.into_iter().next()
}
