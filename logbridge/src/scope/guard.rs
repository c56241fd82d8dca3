//! Release handle for pushed scopes.

use std::fmt;

/// Keeps a scope active until dropped or [`released`](ScopeGuard::release).
///
/// A guard created with [`ScopeGuard::noop`] releases nothing, so callers can
/// always pair `begin_scope` with a drop whether or not a provider is bound.
#[must_use = "the scope is released as soon as the guard is dropped"]
pub struct ScopeGuard {
    release: Option<Box<dyn FnOnce()>>,
}

impl ScopeGuard {
    /// A guard that runs `release` exactly once when released.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A guard whose release does nothing.
    pub fn noop() -> Self {
        Self { release: None }
    }

    /// Whether releasing this guard does anything.
    pub fn is_noop(&self) -> bool {
        self.release.is_none()
    }

    /// Release the scope now.
    pub fn release(mut self) {
        self.run();
    }

    fn run(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Default for ScopeGuard {
    fn default() -> Self {
        Self::noop()
    }
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        self.run();
    }
}

impl fmt::Debug for ScopeGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeGuard")
            .field("noop", &self.is_noop())
            .finish()
    }
}
