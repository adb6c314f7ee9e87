//! NID allocation and teardown.
//!
//! Owns the lazily-created reader-writer lock guarding the added index and
//! the atomic NID counter. [`crate::registry`] is the public facade; this
//! module is the concurrency primitive it's built on.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{OnceLock, RwLock};

use crate::added_index::AddedIndex;
use crate::builtin::BUILTIN_COUNT;
use crate::debug::log_trace;
use crate::entry::Nid;
use crate::error::{OidRegistryError, Result};

/// Lazily-initialized lock plus atomic NID counter backing the registry.
///
/// The lock is created on first use under a run-once guard ([`OnceLock`]):
/// concurrent first callers race safely and exactly one of them runs the
/// initializer. `next_nid` starts at [`BUILTIN_COUNT`] and is advanced with
/// a single atomic fetch-add per [`Lifecycle::allocate_nid`] call, so
/// concurrent callers never observe overlapping blocks.
pub(crate) struct Lifecycle {
    added: OnceLock<RwLock<AddedIndex>>,
    next_nid: AtomicU32,
}

impl Lifecycle {
    pub(crate) const fn new() -> Self {
        Lifecycle {
            added: OnceLock::new(),
            next_nid: AtomicU32::new(BUILTIN_COUNT),
        }
    }

    fn added(&self) -> &RwLock<AddedIndex> {
        self.added.get_or_init(|| RwLock::new(AddedIndex::new()))
    }

    pub(crate) fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, AddedIndex>> {
        self.added()
            .read()
            .map_err(|_| OidRegistryError::LockAcquireFailed)
    }

    pub(crate) fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, AddedIndex>> {
        self.added()
            .write()
            .map_err(|_| OidRegistryError::LockAcquireFailed)
    }

    /// Atomically reserve a contiguous block of `k` NIDs and return the
    /// first one.
    pub(crate) fn allocate_nid(&self, k: u32) -> Nid {
        let base = self.next_nid.fetch_add(k, Ordering::SeqCst);
        log_trace!("allocate_nid({k}) -> {base}");
        base
    }

    /// Drop every entry in the added index and reset the NID counter.
    ///
    /// Dropping the map drops every `Arc<OidEntry>` it held; an entry whose
    /// last pointing index record just vanished is freed right there, which
    /// is the Rust-native equivalent of the zero-then-increment-then-
    /// decrement refcount sweep: `Arc`'s strong count already tracks "how
    /// many of the up-to-four records point here", so no explicit walk is
    /// needed to compute it.
    pub(crate) fn shutdown(&self) {
        if let Some(lock) = self.added.get() {
            if let Ok(mut guard) = lock.write() {
                guard.clear();
            }
        }
        self.next_nid.store(BUILTIN_COUNT, Ordering::SeqCst);
        log_trace!("shutdown: added index cleared, nid counter reset to {}", BUILTIN_COUNT);
    }
}
