//! Immutable, sorted-array lookups over the built-in OID table.
//!
//! Every function here is lock-free: the built-in table is `'static` data
//! baked in at compile time (see [`crate::builtin_data`]) and never mutated,
//! satisfying invariant I5 ("built-in `OidEntry` values are immutable for
//! the process lifetime").

use crate::builtin_data::{BUILTIN_BY_DER, BUILTIN_BY_LN, BUILTIN_BY_SN, BUILTIN_BY_NID};
use crate::entry::{Nid, OidEntry};

pub use crate::builtin_data::BUILTIN_COUNT;

/// Runs the sort-order self-check once, in debug builds only. A mis-sorted
/// built-in table silently corrupts every binary-search lookup, so this
/// catches it the first time any lookup function runs rather than letting
/// it fail unpredictably later.
#[cfg(debug_assertions)]
fn debug_check_sorted() {
    use std::sync::Once;
    static CHECK: Once = Once::new();
    CHECK.call_once(|| {
        let mut last_der: Option<&[u8]> = None;
        for &idx in BUILTIN_BY_DER {
            let der = BUILTIN_BY_NID[idx as usize].der;
            if let Some(prev) = last_der {
                debug_assert!(
                    der_cmp(prev, der).is_le(),
                    "BUILTIN_BY_DER is not sorted: {prev:?} then {der:?}"
                );
            }
            last_der = Some(der);
        }
        let mut last_sn: Option<&str> = None;
        for &idx in BUILTIN_BY_SN {
            let sn = BUILTIN_BY_NID[idx as usize].sn.expect("BUILTIN_BY_SN index without sn");
            if let Some(prev) = last_sn {
                debug_assert!(prev <= sn, "BUILTIN_BY_SN is not sorted: {prev} then {sn}");
            }
            last_sn = Some(sn);
        }
        let mut last_ln: Option<&str> = None;
        for &idx in BUILTIN_BY_LN {
            let ln = BUILTIN_BY_NID[idx as usize].ln.expect("BUILTIN_BY_LN index without ln");
            if let Some(prev) = last_ln {
                debug_assert!(prev <= ln, "BUILTIN_BY_LN is not sorted: {prev} then {ln}");
            }
            last_ln = Some(ln);
        }
    });
}

#[cfg(not(debug_assertions))]
#[inline]
fn debug_check_sorted() {}

fn der_cmp(a: &[u8], b: &[u8]) -> core::cmp::Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Direct-index lookup by NID. Entries with `nid == UNDEF` are holes.
pub(crate) fn lookup_by_nid(nid: Nid) -> Option<OidEntry> {
    debug_check_sorted();
    let def = BUILTIN_BY_NID.get(nid as usize)?;
    if def.nid == crate::entry::UNDEF && nid != crate::entry::UNDEF {
        return None;
    }
    Some(OidEntry::from_builtin(def))
}

/// Binary search by DER content octets using the `(len, then bytes)`
/// comparator: a length mismatch short-circuits before any byte comparison.
pub(crate) fn lookup_by_der(der: &[u8]) -> Option<OidEntry> {
    debug_check_sorted();
    if der.is_empty() {
        return None;
    }
    let pos = BUILTIN_BY_DER
        .binary_search_by(|&idx| der_cmp(BUILTIN_BY_NID[idx as usize].der, der))
        .ok()?;
    let idx = BUILTIN_BY_DER[pos];
    Some(OidEntry::from_builtin(&BUILTIN_BY_NID[idx as usize]))
}

/// Binary search by short name using ASCII `strcmp` (`str`'s byte-wise
/// `Ord`, which agrees with `strcmp` for the ASCII-only names in this
/// table).
pub(crate) fn lookup_by_sn(sn: &str) -> Option<OidEntry> {
    debug_check_sorted();
    let pos = BUILTIN_BY_SN
        .binary_search_by(|&idx| {
            BUILTIN_BY_NID[idx as usize]
                .sn
                .unwrap_or_default()
                .cmp(sn)
        })
        .ok()?;
    let idx = BUILTIN_BY_SN[pos];
    Some(OidEntry::from_builtin(&BUILTIN_BY_NID[idx as usize]))
}

/// Binary search by long name, same comparator as [`lookup_by_sn`].
pub(crate) fn lookup_by_ln(ln: &str) -> Option<OidEntry> {
    debug_check_sorted();
    let pos = BUILTIN_BY_LN
        .binary_search_by(|&idx| {
            BUILTIN_BY_NID[idx as usize]
                .ln
                .unwrap_or_default()
                .cmp(ln)
        })
        .ok()?;
    let idx = BUILTIN_BY_LN[pos];
    Some(OidEntry::from_builtin(&BUILTIN_BY_NID[idx as usize]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_commonname_by_der() {
        let entry = lookup_by_der(&[0x55, 0x04, 0x03]).expect("commonName should be built in");
        assert_eq!(entry.sn(), Some("CN"));
        assert_eq!(entry.ln(), Some("commonName"));
    }

    #[test]
    fn lookup_commonname_by_sn_and_ln() {
        let by_sn = lookup_by_sn("CN").expect("by sn");
        let by_ln = lookup_by_ln("commonName").expect("by ln");
        assert_eq!(by_sn.nid(), by_ln.nid());
        assert_eq!(by_sn.der(), &[0x55, 0x04, 0x03]);
    }

    #[test]
    fn property_nid_to_obj_round_trip() {
        for nid in 1..BUILTIN_COUNT {
            if let Some(entry) = lookup_by_nid(nid) {
                if entry.nid() != crate::entry::UNDEF {
                    assert_eq!(entry.nid(), nid);
                }
            }
        }
    }

    #[test]
    fn holes_are_absent() {
        // nids 13 and 57 are deliberately left unused in the seed table.
        assert!(lookup_by_nid(13).map(|e| e.nid()).unwrap_or(crate::entry::UNDEF) == crate::entry::UNDEF);
        assert!(lookup_by_nid(57).map(|e| e.nid()).unwrap_or(crate::entry::UNDEF) == crate::entry::UNDEF);
    }

    #[test]
    fn unknown_der_is_absent() {
        assert!(lookup_by_der(&[0xff, 0xff, 0xff]).is_none());
    }
}
