use std::path::PathBuf;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub config_path: Option<PathBuf>,

    /// Log messages.
    pub log_messages: Vec<String>,

    /// Preload progress; `None` when idle.
    pub preload_done: Option<usize>,
    pub preload_total: Option<usize>,
    /// Tag of the newest preload job; results from older jobs are dropped.
    pub preload_generation: u64,

    pub show_about: bool,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    /// Start tracking a preload of `total` photos and return its tag.
    pub fn begin_preload(&mut self, total: usize) -> u64 {
        self.preload_generation += 1;
        self.preload_done = Some(0);
        self.preload_total = Some(total);
        self.preload_generation
    }

    pub fn is_current_preload(&self, generation: u64) -> bool {
        generation == self.preload_generation
    }

    pub fn finish_preload(&mut self) {
        self.preload_done = None;
        self.preload_total = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_preload_supersedes_older() {
        let mut state = UIState::default();
        let first = state.begin_preload(4);
        let second = state.begin_preload(2);
        assert_ne!(first, second);
        assert!(!state.is_current_preload(first));
        assert!(state.is_current_preload(second));
        assert_eq!(state.preload_total, Some(2));
    }
}
