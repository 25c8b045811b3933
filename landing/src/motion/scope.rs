//! Ownership of everything an animated view sets up.
//!
//! A [`Scope`] collects disposers (listener removal, frame cancellation,
//! observer disconnects) registered during setup and runs each of them
//! exactly once when reverted. The [`ScopeRegistry`] keys scopes by id so an
//! unmount hook holding only a `Copy` id can revert them.

use std::collections::HashMap;
use std::fmt;

type Disposer = Box<dyn FnOnce()>;

#[derive(Default)]
pub struct Scope {
    disposers: Vec<Disposer>,
    reverted: bool,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register cleanup to run on revert. Registering on an already reverted
    /// scope runs `dispose` immediately.
    pub fn defer(&mut self, dispose: impl FnOnce() + 'static) {
        if self.reverted {
            dispose();
            return;
        }
        self.disposers.push(Box::new(dispose));
    }

    pub fn len(&self) -> usize {
        self.disposers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disposers.is_empty()
    }

    pub fn is_reverted(&self) -> bool {
        self.reverted
    }

    /// Run all disposers, newest first. Returns how many ran; a second call
    /// runs none.
    pub fn revert(&mut self) -> usize {
        self.reverted = true;
        let mut ran = 0;
        while let Some(dispose) = self.disposers.pop() {
            dispose();
            ran += 1;
        }
        ran
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        self.revert();
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("pending", &self.disposers.len())
            .field("reverted", &self.reverted)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(u64);

/// Counters for leak checks: every attached scope must eventually revert.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScopeStats {
    pub attached: usize,
    pub reverted: usize,
    pub disposers_run: usize,
}

#[derive(Debug, Default)]
pub struct ScopeRegistry {
    next: u64,
    live: HashMap<ScopeId, Scope>,
    stats: ScopeStats,
}

impl ScopeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out an id before the scope exists (the view is not mounted yet).
    pub fn reserve(&mut self) -> ScopeId {
        self.next += 1;
        ScopeId(self.next)
    }

    /// Store `scope` under `id`, returning whatever was there before so the
    /// caller can revert it outside any borrow of the registry.
    pub fn attach(&mut self, id: ScopeId, scope: Scope) -> Option<Scope> {
        self.stats.attached += 1;
        self.live.insert(id, scope)
    }

    pub fn detach(&mut self, id: ScopeId) -> Option<Scope> {
        self.live.remove(&id)
    }

    /// Bookkeeping for a scope reverted by the caller.
    pub fn record_revert(&mut self, disposers_run: usize) {
        self.stats.reverted += 1;
        self.stats.disposers_run += disposers_run;
    }

    pub fn live(&self) -> usize {
        self.live.len()
    }

    pub fn stats(&self) -> ScopeStats {
        self.stats
    }
}
