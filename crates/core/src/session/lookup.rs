use super::Session;
use crate::error::Result;
use crate::resolver::{Candidates, active_namespaces};
use crate::selection::{extract_word, identifier_at};
use truegoto_api::{
    ApiResult, DeclarationElement, NavigationService, Query, TextPoint, TextSelection,
    TrueGotoSession,
};

impl Session {
    /// Resolve `query` against the index.
    ///
    /// Candidates are collected under the index lock; the lock is released
    /// before the editor is asked for the active document's imports.
    pub fn lookup(&self, query: &Query) -> Result<Option<DeclarationElement>> {
        let candidates = self
            .index
            .with_elements(|elements| self.resolver.candidates(elements, query));

        match candidates {
            Candidates::None => {
                tracing::debug!("No declaration matches {:?}", query);
                Ok(None)
            }
            Candidates::Unique(element) => Ok(Some(element)),
            Candidates::Ambiguous(candidates) => {
                let document = self.editor.active_document_elements()?.unwrap_or_default();
                let namespaces = active_namespaces(&document);
                tracing::debug!(
                    "{} candidates for {:?}, active namespaces {:?}",
                    candidates.len(),
                    query,
                    namespaces
                );
                Ok(self.resolver.disambiguate(query, candidates, &namespaces))
            }
        }
    }

    /// Resolve an identifier as typed or selected by the user. Text carrying a
    /// container path (`NsA.Foo`) is looked up by full path.
    pub fn trigger_lookup(&self, raw: &str) -> Result<Option<DeclarationElement>> {
        let text = raw.trim();
        if text.is_empty() {
            return Ok(None);
        }
        let query = Query::from_text(text, self.naming_convention.as_ref());
        self.lookup(&query)
    }

    /// Extract the identifier under a live selection and resolve it.
    pub fn lookup_selection(
        &self,
        selection: &mut dyn TextSelection,
    ) -> Result<Option<DeclarationElement>> {
        let extracted = extract_word(selection)?;
        self.trigger_lookup(&extracted.word)
    }

    /// Resolve the identifier around `point` in raw buffer content.
    pub fn lookup_at(&self, content: &str, point: TextPoint) -> Result<Option<DeclarationElement>> {
        match identifier_at(content, point) {
            Some(word) => self.trigger_lookup(&word),
            None => Ok(None),
        }
    }

    /// Command handler: navigate to the declaration under the caret, or run
    /// the host's own go-to-definition when there is none or anything fails.
    pub fn go_to_definition(&self) {
        match self.try_go_to_definition() {
            Ok(true) => {}
            Ok(false) => self.run_fallback(),
            Err(err) => {
                tracing::warn!("Lookup failed, using default navigation: {}", err);
                self.run_fallback();
            }
        }
    }

    fn try_go_to_definition(&self) -> Result<bool> {
        if !self.is_ready() || !self.editor.is_solution_open() {
            return Ok(false);
        }

        // The selection borrows the editor; release it before navigating.
        let word = {
            let Some(mut selection) = self.editor.selection()? else {
                return Ok(false);
            };
            extract_word(selection.as_mut())?.word
        };

        let Some(target) = self.trigger_lookup(&word)? else {
            return Ok(false);
        };

        tracing::info!(
            "Navigating to {} at {}:{}",
            target.full_path(),
            target.location.path.display(),
            target.location.line
        );
        self.editor.open_and_navigate(&target)?;
        Ok(true)
    }

    fn run_fallback(&self) {
        if let Err(err) = self.editor.execute_fallback() {
            tracing::error!("Default navigation failed: {}", err);
        }
    }
}

impl NavigationService for Session {
    fn resolve(&self, query: &Query) -> ApiResult<Option<DeclarationElement>> {
        self.lookup(query).map_err(Into::into)
    }

    fn indexed_count(&self) -> usize {
        self.index.len()
    }
}

impl TrueGotoSession for Session {
    fn go_to_definition(&self) {
        Session::go_to_definition(self)
    }
}
