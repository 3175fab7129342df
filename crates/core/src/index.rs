use crate::config::ChangePolicy;
use std::sync::{Mutex, MutexGuard};
use truegoto_api::{ChangeKind, DeclarationElement, ElementHandle};

/// The workspace-wide collection of navigable declarations.
///
/// One mutex guards every read and every mutation. Callers must not hold the
/// lock across calls into the host; [`SymbolIndex::with_elements`] keeps the
/// critical section scoped to a closure for that reason.
pub struct SymbolIndex {
    elements: Mutex<Vec<DeclarationElement>>,
    change_policy: ChangePolicy,
}

impl Default for SymbolIndex {
    fn default() -> Self {
        Self::new(ChangePolicy::default())
    }
}

impl SymbolIndex {
    pub fn new(change_policy: ChangePolicy) -> Self {
        Self {
            elements: Mutex::new(Vec::new()),
            change_policy,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<DeclarationElement>> {
        // A panic elsewhere cannot leave the Vec half-updated.
        self.elements.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn change_policy(&self) -> ChangePolicy {
        self.change_policy
    }

    /// Replace the whole content, used once after the initial walk.
    pub fn replace_all(&self, elements: Vec<DeclarationElement>) {
        let mut guard = self.lock();
        *guard = elements;
        tracing::debug!("Index populated with {} declarations", guard.len());
    }

    pub fn on_element_added(&self, element: DeclarationElement) {
        if element.kind.is_excluded() {
            tracing::trace!("Ignored added {} ({})", element.full_path(), element.kind);
            return;
        }
        let mut guard = self.lock();
        tracing::debug!("Indexed {} ({})", element.full_path(), element.kind);
        guard.push(element);
    }

    pub fn on_element_changed(&self, element: DeclarationElement, change: ChangeKind) {
        if element.kind.is_excluded() {
            tracing::trace!(
                "Ignored {:?} change to {} ({})",
                change,
                element.full_path(),
                element.kind
            );
            return;
        }
        let mut guard = self.lock();
        match self.change_policy {
            ChangePolicy::Append => {}
            ChangePolicy::ReplaceByPath => {
                let before = guard.len();
                guard.retain(|e| !e.same_declaration(&element));
                if guard.len() != before {
                    tracing::debug!(
                        "Dropped {} stale entries for {}",
                        before - guard.len(),
                        element.full_path()
                    );
                }
            }
        }
        tracing::debug!("Re-indexed {} after {:?} change", element.full_path(), change);
        guard.push(element);
    }

    /// Remove the first entry equal to `element`. Returns whether one was found.
    pub fn on_element_deleted(
        &self,
        parent: Option<ElementHandle>,
        element: &DeclarationElement,
    ) -> bool {
        let mut guard = self.lock();
        match guard.iter().position(|e| e == element) {
            Some(pos) => {
                guard.remove(pos);
                tracing::debug!(
                    "Removed {} (parent {:?})",
                    element.full_path(),
                    parent
                );
                true
            }
            None => false,
        }
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn snapshot(&self) -> Vec<DeclarationElement> {
        self.lock().clone()
    }

    /// Run `f` over the current content while holding the lock.
    pub fn with_elements<R>(&self, f: impl FnOnce(&[DeclarationElement]) -> R) -> R {
        let guard = self.lock();
        f(&guard)
    }
}
