use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

/// Liveness of a mounted view, shared with its in-flight tasks.
/// Once ended it never comes back; completions check it before writing.
#[derive(Debug, Clone)]
pub struct Lifetime(Arc<AtomicBool>);

impl Default for Lifetime {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl Lifetime {
    pub fn alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
    pub fn end(&self) {
        self.0.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_liveness() {
        let lifetime = Lifetime::default();
        let task = lifetime.clone();
        assert!(task.alive());
        lifetime.end();
        assert!(!task.alive());
    }
}
