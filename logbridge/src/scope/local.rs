//! Thread-local scope provider.

use std::cell::RefCell;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::{Scope, ScopeGuard, ScopeProvider};

static NEXT_PROVIDER_ID: AtomicU64 = AtomicU64::new(1);
static NEXT_FRAME_ID: AtomicU64 = AtomicU64::new(1);

struct Frame {
    owner: u64,
    id: u64,
    scope: Arc<Scope>,
}

thread_local! {
    static FRAMES: RefCell<Vec<Frame>> = const { RefCell::new(Vec::new()) };
}

/// [`ScopeProvider`] whose active scopes belong to the calling thread.
///
/// Every instance has its own stack on each thread; scopes pushed through one
/// instance are invisible to another, and scopes pushed on one thread are
/// invisible to every other thread.
///
/// Guards may be released in any order; each guard removes only its own
/// scope. Releasing a guard after the thread's storage has been torn down is
/// a no-op.
#[derive(Debug)]
pub struct ThreadScopeProvider {
    id: u64,
}

impl ThreadScopeProvider {
    /// Create a provider with empty stacks.
    pub fn new() -> Self {
        Self {
            id: NEXT_PROVIDER_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Number of scopes active for this provider on the calling thread.
    pub fn depth(&self) -> usize {
        FRAMES
            .try_with(|frames| {
                frames
                    .borrow()
                    .iter()
                    .filter(|f| f.owner == self.id)
                    .count()
            })
            .unwrap_or(0)
    }

    fn snapshot(&self) -> Vec<Arc<Scope>> {
        FRAMES
            .try_with(|frames| {
                frames
                    .borrow()
                    .iter()
                    .filter(|f| f.owner == self.id)
                    .map(|f| f.scope.clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Default for ThreadScopeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeProvider for ThreadScopeProvider {
    fn for_each_scope(&self, visitor: &mut dyn FnMut(&Scope)) {
        // Visit a snapshot so the visitor may push or release scopes itself.
        for scope in self.snapshot() {
            visitor(&scope);
        }
    }

    fn push_scope(&self, scope: Scope) -> ScopeGuard {
        let id = NEXT_FRAME_ID.fetch_add(1, Ordering::Relaxed);
        let frame = Frame {
            owner: self.id,
            id,
            scope: Arc::new(scope),
        };

        let pushed = FRAMES
            .try_with(|frames| frames.borrow_mut().push(frame))
            .is_ok();
        if !pushed {
            return ScopeGuard::noop();
        }

        ScopeGuard::new(move || {
            let _ = FRAMES.try_with(|frames| {
                if let Ok(mut frames) = frames.try_borrow_mut() {
                    frames.retain(|f| f.id != id);
                }
            });
        })
    }
}
