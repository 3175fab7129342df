use super::BufferSelection;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};
use truegoto_api::{
    DeclarationElement, EditorHost, HostError, HostResult, TextPoint, TextSelection,
};

/// Editor double that records navigation requests instead of opening windows.
pub struct MemoryEditor {
    solution_open: AtomicBool,
    active_elements: Mutex<Option<Vec<DeclarationElement>>>,
    selection: Mutex<Option<BufferSelection>>,
    navigations: Mutex<Vec<DeclarationElement>>,
    fallbacks: AtomicUsize,
    fail_navigation: AtomicBool,
}

impl Default for MemoryEditor {
    fn default() -> Self {
        Self {
            solution_open: AtomicBool::new(true),
            active_elements: Mutex::new(None),
            selection: Mutex::new(None),
            navigations: Mutex::new(Vec::new()),
            fallbacks: AtomicUsize::new(0),
            fail_navigation: AtomicBool::new(false),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

impl MemoryEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Focus a document with the given top-level elements and text selection.
    pub fn open_document(&self, elements: Vec<DeclarationElement>, selection: BufferSelection) {
        *lock(&self.active_elements) = Some(elements);
        *lock(&self.selection) = Some(selection);
    }

    pub fn close_document(&self) {
        *lock(&self.active_elements) = None;
        *lock(&self.selection) = None;
    }

    pub fn set_solution_open(&self, open: bool) {
        self.solution_open.store(open, Ordering::SeqCst);
    }

    pub fn fail_navigation(&self, fail: bool) {
        self.fail_navigation.store(fail, Ordering::SeqCst);
    }

    pub fn navigations(&self) -> Vec<DeclarationElement> {
        lock(&self.navigations).clone()
    }

    pub fn fallback_count(&self) -> usize {
        self.fallbacks.load(Ordering::SeqCst)
    }

    /// Text and top point of the current selection, if a document is open.
    pub fn current_selection(&self) -> Option<(String, TextPoint)> {
        lock(&self.selection)
            .as_ref()
            .map(|s| (s.text(), s.top_point()))
    }
}

struct LockedSelection<'a>(MutexGuard<'a, Option<BufferSelection>>);

impl LockedSelection<'_> {
    fn inner(&mut self) -> HostResult<&mut BufferSelection> {
        self.0
            .as_mut()
            .ok_or(HostError::Unavailable("text selection"))
    }
}

impl TextSelection for LockedSelection<'_> {
    fn text(&self) -> String {
        self.0.as_ref().map(|s| s.text()).unwrap_or_default()
    }

    fn top_point(&self) -> TextPoint {
        self.0.as_ref().map(|s| s.top_point()).unwrap_or_default()
    }

    fn word_left(&mut self, extend: bool) -> HostResult<()> {
        self.inner()?.word_left(extend)
    }

    fn word_right(&mut self, extend: bool) -> HostResult<()> {
        self.inner()?.word_right(extend)
    }

    fn move_to_line_and_offset(&mut self, point: TextPoint) -> HostResult<()> {
        self.inner()?.move_to_line_and_offset(point)
    }

    fn char_right(&mut self, extend: bool, count: usize) -> HostResult<()> {
        self.inner()?.char_right(extend, count)
    }
}

impl EditorHost for MemoryEditor {
    fn is_solution_open(&self) -> bool {
        self.solution_open.load(Ordering::SeqCst)
    }

    fn active_document_elements(&self) -> HostResult<Option<Vec<DeclarationElement>>> {
        Ok(lock(&self.active_elements).clone())
    }

    fn selection(&self) -> HostResult<Option<Box<dyn TextSelection + '_>>> {
        let guard = lock(&self.selection);
        if guard.is_none() {
            return Ok(None);
        }
        Ok(Some(Box::new(LockedSelection(guard))))
    }

    fn open_and_navigate(&self, element: &DeclarationElement) -> HostResult<()> {
        if self.fail_navigation.load(Ordering::SeqCst) {
            return Err(HostError::NotFound(element.location.path.display().to_string()));
        }
        lock(&self.navigations).push(element.clone());
        Ok(())
    }

    fn execute_fallback(&self) -> HostResult<()> {
        self.fallbacks.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
