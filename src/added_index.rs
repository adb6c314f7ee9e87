//! The multi-index over runtime-registered OIDs.
//!
//! A single `HashMap` keyed by a tagged [`IndexKey`] stores all four
//! indexes (DER, SN, LN, NID) at once. Folding the tag into the key type
//! (rather than four separate maps) is deliberate: it lets [`register`]
//! perform one atomic insert-or-rollback sequence across all of an entry's
//! keys under a single map, matching the design this crate is grounded on.

use std::collections::HashMap;
use std::sync::Arc;

use crate::entry::{Nid, OidEntry, SharedEntry};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum IndexKey {
    Der(Vec<u8>),
    Sn(String),
    Ln(String),
    Nid(Nid),
}

impl IndexKey {
    fn keys_for(entry: &OidEntry) -> Vec<IndexKey> {
        let mut keys = Vec::with_capacity(4);
        if !entry.der().is_empty() {
            keys.push(IndexKey::Der(entry.der().to_vec()));
        }
        if let Some(sn) = entry.sn() {
            keys.push(IndexKey::Sn(sn.to_string()));
        }
        if let Some(ln) = entry.ln() {
            keys.push(IndexKey::Ln(ln.to_string()));
        }
        keys.push(IndexKey::Nid(entry.nid()));
        keys
    }
}

/// The in-memory overlay of user-registered OIDs.
#[derive(Debug, Default)]
pub(crate) struct AddedIndex {
    map: HashMap<IndexKey, SharedEntry>,
}

impl AddedIndex {
    pub(crate) fn new() -> Self {
        AddedIndex {
            map: HashMap::new(),
        }
    }

    pub(crate) fn by_der(&self, der: &[u8]) -> Option<&SharedEntry> {
        self.map.get(&IndexKey::Der(der.to_vec()))
    }

    pub(crate) fn by_sn(&self, sn: &str) -> Option<&SharedEntry> {
        self.map.get(&IndexKey::Sn(sn.to_string()))
    }

    pub(crate) fn by_ln(&self, ln: &str) -> Option<&SharedEntry> {
        self.map.get(&IndexKey::Ln(ln.to_string()))
    }

    pub(crate) fn by_nid(&self, nid: Nid) -> Option<&SharedEntry> {
        self.map.get(&IndexKey::Nid(nid))
    }

    /// Insert an entry under every key it carries (up to four: DER, SN, LN,
    /// NID), in that enumeration order.
    ///
    /// [`crate::registry::Registry::register`] already checks DER/SN/LN
    /// against the built-in table and this index before calling `insert`
    /// while holding the write lock, so a collision here should never
    /// happen in practice. We still guard against it defensively: any key
    /// that collides with an existing record rolls back every key installed
    /// earlier in this call, leaving the map exactly as it was.
    pub(crate) fn insert(&mut self, entry: OidEntry) -> bool {
        let shared: SharedEntry = Arc::new(entry);
        let keys = IndexKey::keys_for(&shared);

        let mut installed: Vec<IndexKey> = Vec::with_capacity(keys.len());
        for key in keys {
            if self.map.contains_key(&key) {
                // roll back everything installed so far in this call
                for k in installed {
                    self.map.remove(&k);
                }
                return false;
            }
            self.map.insert(key.clone(), shared.clone());
            installed.push(key);
        }
        true
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    pub(crate) fn clear(&mut self) {
        self.map.clear();
    }
}
