//! Per-view animation lifetime.
//!
//! Each view owns an [`AnimationContext`] created when it mounts. Every
//! listener, tween or frame callback it starts registers its teardown
//! there, and a single [`dispose`](AnimationContext::dispose) (or drop)
//! releases all of them. Nothing is global.

/// Elapsed-time tracker fed by host timestamps.
#[derive(Clone, Copy, Debug, Default)]
pub struct Clock {
    start: Option<f64>,
    elapsed: f64,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a timestamp in seconds and return the seconds elapsed
    /// since the first one. Elapsed time never goes backwards.
    pub fn tick(&mut self, now_seconds: f64) -> f64 {
        let start = *self.start.get_or_insert(now_seconds);
        self.elapsed = self.elapsed.max(now_seconds - start);
        self.elapsed
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

type Teardown = Box<dyn FnOnce()>;

/// Scoped registry of teardown callbacks.
#[derive(Default)]
pub struct AnimationContext {
    teardowns: Vec<Teardown>,
    disposed: bool,
}

impl AnimationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a teardown. After [`dispose`](Self::dispose) the
    /// callback runs immediately, so late registrations cannot leak.
    pub fn register<F: FnOnce() + 'static>(&mut self, teardown: F) {
        if self.disposed {
            teardown();
        } else {
            self.teardowns.push(Box::new(teardown));
        }
    }

    /// Run every registered teardown once, newest first.
    pub fn dispose(&mut self) {
        self.disposed = true;
        while let Some(teardown) = self.teardowns.pop() {
            teardown();
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Teardowns still waiting to run.
    pub fn pending(&self) -> usize {
        self.teardowns.len()
    }
}

impl Drop for AnimationContext {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for AnimationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationContext")
            .field("pending", &self.teardowns.len())
            .field("disposed", &self.disposed)
            .finish()
    }
}
