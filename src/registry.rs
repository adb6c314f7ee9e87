//! The public facade unifying the built-in table and the runtime-added
//! overlay: NID <-> name <-> DER lookups in both directions, registration,
//! and teardown.

use std::io;

use crate::builtin::{self, BUILTIN_COUNT};
use crate::codec;
use crate::debug::{log_error, log_trace};
use crate::entry::{Nid, OidEntry, UNDEF};
use crate::error::{OidRegistryError, Result};
use crate::lifecycle::Lifecycle;

static REGISTRY: Lifecycle = Lifecycle::new();

/// Look up an entry by NID. Checks the built-in table first (lock-free),
/// then the added index under a read lock.
pub fn nid_to_obj(nid: Nid) -> Option<OidEntry> {
    if nid == UNDEF {
        return None;
    }
    if let Some(entry) = builtin::lookup_by_nid(nid) {
        return Some(entry);
    }
    let guard = REGISTRY.read().ok()?;
    guard.by_nid(nid).map(|e| (**e).clone())
}

/// The NID for an entry: its own `nid` field if set, else a built-in DER
/// binary search, else an added-index probe by DER.
pub fn obj_to_nid(entry: &OidEntry) -> Nid {
    if entry.nid() != UNDEF {
        return entry.nid();
    }
    if entry.der().is_empty() {
        return UNDEF;
    }
    if let Some(found) = builtin::lookup_by_der(entry.der()) {
        return found.nid();
    }
    match REGISTRY.read() {
        Ok(guard) => guard
            .by_der(entry.der())
            .map(|e| e.nid())
            .unwrap_or(UNDEF),
        Err(_) => UNDEF,
    }
}

/// Short-name lookup: built-in binary search, then the added index.
pub fn sn_to_nid(sn: &str) -> Nid {
    if let Some(entry) = builtin::lookup_by_sn(sn) {
        return entry.nid();
    }
    match REGISTRY.read() {
        Ok(guard) => guard.by_sn(sn).map(|e| e.nid()).unwrap_or(UNDEF),
        Err(_) => UNDEF,
    }
}

/// Long-name lookup: built-in binary search, then the added index.
pub fn ln_to_nid(ln: &str) -> Nid {
    if let Some(entry) = builtin::lookup_by_ln(ln) {
        return entry.nid();
    }
    match REGISTRY.read() {
        Ok(guard) => guard.by_ln(ln).map(|e| e.nid()).unwrap_or(UNDEF),
        Err(_) => UNDEF,
    }
}

/// Resolve text (a name or a dotted OID) directly to a NID.
pub fn text_to_nid(text: &str) -> Nid {
    match text_to_obj(text, false) {
        Ok(entry) => obj_to_nid(&entry),
        Err(_) => UNDEF,
    }
}

/// Parse a name or dotted-decimal OID string into an `OidEntry`.
///
/// Unless `no_name` is set, `sn_to_nid`/`ln_to_nid` are tried first; a hit
/// returns the corresponding registered entry. Otherwise `text` must begin
/// with a digit and is parsed as dotted-decimal via [`codec::text_to_der`].
pub fn text_to_obj(text: &str, no_name: bool) -> Result<OidEntry> {
    if !no_name {
        let nid = sn_to_nid(text);
        let nid = if nid != UNDEF { nid } else { ln_to_nid(text) };
        if nid != UNDEF {
            return nid_to_obj(nid).ok_or(OidRegistryError::Internal);
        }
        if !text.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(OidRegistryError::InvalidOid);
        }
    }
    let der = codec::text_to_der(text)?;
    Ok(OidEntry::new_owned(UNDEF, der, None, None))
}

/// Render an entry as text.
///
/// Unless `no_name` is set and the entry resolves to a registered NID, the
/// long name is emitted (falling back to the short name); otherwise the
/// dotted-decimal form is emitted via [`codec::der_to_text`].
pub fn obj_to_text(entry: &OidEntry, no_name: bool) -> Result<String> {
    if !no_name {
        let nid = obj_to_nid(entry);
        if nid != UNDEF {
            if let Some(named) = nid_to_obj(nid) {
                if let Some(ln) = named.ln() {
                    return Ok(ln.to_string());
                }
                if let Some(sn) = named.sn() {
                    return Ok(sn.to_string());
                }
            }
        }
    }
    if entry.der().is_empty() {
        return Err(OidRegistryError::InvalidOid);
    }
    codec::der_to_text(entry.der())
}

/// Check `oid`/`sn`/`ln` against the built-in table and `guard` (the
/// already-held added-index write guard). Must never go through
/// [`sn_to_nid`]/[`ln_to_nid`]/[`obj_to_nid`] here: those try to take a read
/// lock on the same `RwLock` the caller is holding exclusively, which would
/// deadlock.
fn check_not_already_present(
    guard: &crate::added_index::AddedIndex,
    oid: Option<&str>,
    sn: Option<&str>,
    ln: Option<&str>,
) -> Result<Option<Vec<u8>>> {
    if let Some(sn) = sn {
        if builtin::lookup_by_sn(sn).is_some() || guard.by_sn(sn).is_some() {
            return Err(OidRegistryError::AlreadyExists);
        }
    }
    if let Some(ln) = ln {
        if builtin::lookup_by_ln(ln).is_some() || guard.by_ln(ln).is_some() {
            return Err(OidRegistryError::AlreadyExists);
        }
    }
    match oid {
        Some(oid) => {
            let der = codec::text_to_der(oid)?;
            if !der.is_empty()
                && (builtin::lookup_by_der(&der).is_some() || guard.by_der(&der).is_some())
            {
                return Err(OidRegistryError::AlreadyExists);
            }
            Ok(Some(der))
        }
        None => Ok(None),
    }
}

/// Register a new OID under up to three optional fields.
///
/// At least one of `oid`, `sn`, `ln` must be present. Any name or DER value
/// that already resolves (in either the built-in table or the added index)
/// fails the whole call with [`OidRegistryError::AlreadyExists`] and leaves
/// the registry unchanged. On success, a fresh NID is allocated and the
/// entry is installed under every key it carries.
pub fn register(oid: Option<&str>, sn: Option<&str>, ln: Option<&str>) -> Result<Nid> {
    if oid.is_none() && sn.is_none() && ln.is_none() {
        return Err(OidRegistryError::InvalidArgument);
    }

    let mut guard = REGISTRY.write()?;

    // checked against the guard we already hold, never via a fresh read lock
    let der = check_not_already_present(&guard, oid, sn, ln)?;

    let nid = REGISTRY.allocate_nid(1);
    let entry = OidEntry::new_owned(
        nid,
        der.unwrap_or_default(),
        sn.map(|s| s.to_string()),
        ln.map(|s| s.to_string()),
    );

    if !guard.insert(entry) {
        log_error!("register: index insertion failed for nid {nid}");
        return Err(OidRegistryError::Internal);
    }
    log_trace!("register: nid {nid} (oid={oid:?}, sn={sn:?}, ln={ln:?})");
    Ok(nid)
}

/// Insert a pre-built entry, allocating a fresh NID for it if it doesn't
/// already carry one. Returns the entry's NID, or [`UNDEF`] on collision.
pub fn add_object(mut entry: OidEntry) -> Nid {
    let mut guard = match REGISTRY.write() {
        Ok(g) => g,
        Err(_) => return UNDEF,
    };

    if !entry.der().is_empty()
        && (builtin::lookup_by_der(entry.der()).is_some() || guard.by_der(entry.der()).is_some())
    {
        return UNDEF;
    }
    if let Some(sn) = entry.sn() {
        if builtin::lookup_by_sn(sn).is_some() || guard.by_sn(sn).is_some() {
            return UNDEF;
        }
    }
    if let Some(ln) = entry.ln() {
        if builtin::lookup_by_ln(ln).is_some() || guard.by_ln(ln).is_some() {
            return UNDEF;
        }
    }

    if entry.nid() == UNDEF {
        entry.nid = REGISTRY.allocate_nid(1);
    } else if entry.nid() < BUILTIN_COUNT {
        // a caller-supplied NID inside the built-in range would violate I1
        // (NIDs unique across built-in and added entries)
        return UNDEF;
    }
    let nid = entry.nid();
    if guard.insert(entry) {
        nid
    } else {
        UNDEF
    }
}

/// Atomically reserve a contiguous block of `k` NIDs; returns the first one.
pub fn allocate_nid(k: u32) -> Nid {
    REGISTRY.allocate_nid(k)
}

/// Parse and register every `<oid> <sn> [<ln>]` line from `lines`, stopping
/// at the first line that fails the grammar (see
/// [`crate::bulk_loader::parse_line`]) or the first failed `register` call.
/// Returns the count of OIDs successfully registered.
pub fn bulk_load(lines: impl Iterator<Item = io::Result<String>>) -> usize {
    crate::bulk_loader::bulk_load_with(lines, register)
}

/// Free every added entry and reset the NID allocator, returning the
/// registry to its pre-initialization state.
pub fn shutdown() {
    REGISTRY.shutdown();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn reset() {
        shutdown();
    }

    #[test]
    #[serial]
    fn scenario_register_and_collide() {
        reset();
        let nid = register(Some("1.2.3.4.5"), Some("myShort"), Some("My Long Name"))
            .expect("first register succeeds");
        assert!(nid >= BUILTIN_COUNT);
        assert_eq!(sn_to_nid("myShort"), nid);
        assert_eq!(ln_to_nid("My Long Name"), nid);

        let err = register(Some("1.2.3.4.5"), Some("other"), Some("Other"))
            .expect_err("collision on der must fail");
        assert_eq!(err, OidRegistryError::AlreadyExists);
        assert_eq!(sn_to_nid("other"), UNDEF);
        reset();
    }

    #[test]
    #[serial]
    fn register_requires_at_least_one_field() {
        reset();
        let err = register(None, None, None).expect_err("must fail");
        assert_eq!(err, OidRegistryError::InvalidArgument);
    }

    #[test]
    #[serial]
    fn property_register_then_lookup_round_trip() {
        reset();
        let nid = register(Some("1.2.3.4.9999"), Some("p4Sn"), Some("p4Ln")).unwrap();
        assert_eq!(sn_to_nid("p4Sn"), nid);
        assert_eq!(ln_to_nid("p4Ln"), nid);
        let obj = text_to_obj("1.2.3.4.9999", true).unwrap();
        assert_eq!(obj_to_nid(&obj), nid);
        assert_eq!(nid_to_obj(nid).unwrap().sn(), Some("p4Sn"));
        reset();
    }

    #[test]
    fn scenario_builtin_commonname_text_roundtrip() {
        let der = codec::text_to_der("2.5.4.3").unwrap();
        assert_eq!(der, vec![0x55, 0x04, 0x03]);
        let entry = nid_to_obj(sn_to_nid("CN")).unwrap();
        assert_eq!(obj_to_text(&entry, false).unwrap(), "commonName");
        assert_eq!(obj_to_text(&entry, true).unwrap(), "2.5.4.3");
    }

    #[test]
    #[serial]
    fn shutdown_resets_and_allows_reregistration() {
        reset();
        let nid1 = register(Some("1.2.3.4.77"), Some("shutdownTestSn"), None).unwrap();
        assert!(nid1 >= BUILTIN_COUNT);
        shutdown();
        assert_eq!(sn_to_nid("shutdownTestSn"), UNDEF);
        let nid2 = register(Some("1.2.3.4.77"), Some("shutdownTestSn"), None).unwrap();
        assert_eq!(nid2, BUILTIN_COUNT);
        reset();
    }

    #[test]
    #[serial]
    fn add_object_allocates_nid() {
        reset();
        let entry = OidEntry::new_owned(UNDEF, codec::text_to_der("1.2.3.4.55").unwrap(), Some("addObjSn".to_string()), None);
        let nid = add_object(entry);
        assert_ne!(nid, UNDEF);
        assert_eq!(sn_to_nid("addObjSn"), nid);
        reset();
    }

    #[test]
    #[serial]
    fn add_object_rejects_nid_inside_builtin_range() {
        reset();
        let entry = OidEntry::new_owned(
            1,
            codec::text_to_der("1.2.3.4.56").unwrap(),
            Some("fakeBuiltinSn".to_string()),
            None,
        );
        assert_eq!(add_object(entry), UNDEF);
        assert_eq!(sn_to_nid("fakeBuiltinSn"), UNDEF);
        reset();
    }
}
