use std::sync::{Mutex, MutexGuard};

/// Identifies one open solution; bumped by every reset.
pub type Generation = u64;

#[derive(Debug, Default)]
struct BarrierState {
    expected: Option<usize>,
    loaded: usize,
    released: bool,
    generation: Generation,
}

/// Counted barrier over project-load notifications.
///
/// Releases exactly once per solution, when the number of opened projects
/// reaches the count announced by the solution-opened notification. Either
/// notification may arrive first. A release hands out the current generation;
/// work started for it is only installed through [`LoadBarrier::commit`] while
/// no reset has happened since.
#[derive(Debug, Default)]
pub struct LoadBarrier {
    state: Mutex<BarrierState>,
}

impl LoadBarrier {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, BarrierState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Record the total project count. Returns the generation if this releases the barrier.
    pub fn solution_opened(&self, project_count: usize) -> Option<Generation> {
        let mut state = self.lock();
        state.expected = Some(project_count);
        Self::try_release(&mut state)
    }

    /// Count one more opened project. Returns the generation if this releases the barrier.
    pub fn project_opened(&self) -> Option<Generation> {
        let mut state = self.lock();
        state.loaded += 1;
        Self::try_release(&mut state)
    }

    fn try_release(state: &mut BarrierState) -> Option<Generation> {
        match state.expected {
            Some(expected) if !state.released && state.loaded >= expected => {
                state.released = true;
                Some(state.generation)
            }
            _ => None,
        }
    }

    pub fn is_released(&self) -> bool {
        self.lock().released
    }

    /// Loaded and expected project counts.
    pub fn progress(&self) -> (usize, Option<usize>) {
        let state = self.lock();
        (state.loaded, state.expected)
    }

    pub fn generation(&self) -> Generation {
        self.lock().generation
    }

    /// Run `install` if `generation` is still current. Returns whether it ran.
    ///
    /// Holds the barrier lock while `install` runs, so it cannot interleave
    /// with [`LoadBarrier::reset`].
    pub fn commit(&self, generation: Generation, install: impl FnOnce()) -> bool {
        let state = self.lock();
        if state.generation != generation || !state.released {
            return false;
        }
        install();
        true
    }

    /// Re-arm the barrier for the next solution, running `clear` under the lock.
    pub fn reset(&self, clear: impl FnOnce()) {
        let mut state = self.lock();
        let generation = state.generation.wrapping_add(1);
        *state = BarrierState {
            generation,
            ..BarrierState::default()
        };
        clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn releases_once_when_all_projects_loaded() {
        let barrier = LoadBarrier::new();
        assert_eq!(barrier.solution_opened(2), None);
        assert_eq!(barrier.project_opened(), None);
        assert_eq!(barrier.project_opened(), Some(0));
        assert_eq!(barrier.project_opened(), None);
        assert!(barrier.is_released());
    }

    #[test]
    fn projects_may_open_before_the_solution_reports_its_size() {
        let barrier = LoadBarrier::new();
        assert!(barrier.project_opened().is_none());
        assert!(barrier.project_opened().is_none());
        assert!(barrier.solution_opened(2).is_some());
    }

    #[test]
    fn empty_solution_releases_immediately() {
        let barrier = LoadBarrier::new();
        assert!(barrier.solution_opened(0).is_some());
    }

    #[test]
    fn reset_rearms_the_barrier_with_a_new_generation() {
        let barrier = LoadBarrier::new();
        barrier.solution_opened(1);
        assert_eq!(barrier.project_opened(), Some(0));
        barrier.reset(|| {});
        assert!(!barrier.is_released());
        assert_eq!(barrier.progress(), (0, None));
        assert_eq!(barrier.generation(), 1);
        assert!(barrier.solution_opened(1).is_none());
        assert_eq!(barrier.project_opened(), Some(1));
    }

    #[test]
    fn commit_after_reset_is_discarded() {
        let barrier = LoadBarrier::new();
        let released = barrier.solution_opened(0).unwrap();
        barrier.reset(|| {});

        let mut installed = false;
        assert!(!barrier.commit(released, || installed = true));
        assert!(!installed);

        let current = barrier.solution_opened(0).unwrap();
        assert!(barrier.commit(current, || installed = true));
        assert!(installed);
    }
}
