use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// A dense, process-local integer handle for a registered OID.
///
/// `UNDEF` (`0`) is the reserved sentinel: it never names a real entry and is
/// returned by lookups that found nothing.
pub type Nid = u32;

/// The reserved "no object" NID. Never a valid lookup result.
pub const UNDEF: Nid = 0;

/// A compile-time built-in OID definition, as the (out of scope) table
/// generator would emit it.
///
/// Distinct from [`OidEntry`]: this type borrows everything from `'static`
/// storage and is cheap to keep as a `static` array; [`OidEntry`] is the
/// runtime-facing record handed back to callers.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BuiltinOidDef {
    pub nid: Nid,
    pub der: &'static [u8],
    pub sn: Option<&'static str>,
    pub ln: Option<&'static str>,
}

/// A single OID record: the NID, DER content octets, and the two textual
/// names.
///
/// Built-in entries borrow static storage (`Cow::Borrowed`); entries added at
/// runtime own heap copies (`Cow::Owned`). That distinction is exactly the
/// "owned vs. borrowed" flag bit from the original design — matching on the
/// `Cow` discriminant answers "do I own this buffer" without a separate
/// bitset.
#[derive(Clone, PartialEq, Eq)]
pub struct OidEntry {
    pub(crate) nid: Nid,
    pub(crate) der: Cow<'static, [u8]>,
    pub(crate) sn: Option<Cow<'static, str>>,
    pub(crate) ln: Option<Cow<'static, str>>,
}

impl OidEntry {
    /// Build an entry from owned (heap) buffers, as produced during
    /// registration.
    pub fn new_owned(
        nid: Nid,
        der: impl Into<Vec<u8>>,
        sn: Option<String>,
        ln: Option<String>,
    ) -> Self {
        OidEntry {
            nid,
            der: Cow::Owned(der.into()),
            sn: sn.map(Cow::Owned),
            ln: ln.map(Cow::Owned),
        }
    }

    pub(crate) fn from_builtin(def: &BuiltinOidDef) -> Self {
        OidEntry {
            nid: def.nid,
            der: Cow::Borrowed(def.der),
            sn: def.sn.map(Cow::Borrowed),
            ln: def.ln.map(Cow::Borrowed),
        }
    }

    /// The NID of this entry, or [`UNDEF`] if it hasn't been registered.
    #[inline]
    pub fn nid(&self) -> Nid {
        self.nid
    }

    /// The DER content octets (empty for a name-only placeholder entry).
    #[inline]
    pub fn der(&self) -> &[u8] {
        &self.der
    }

    /// The short name, if any.
    #[inline]
    pub fn sn(&self) -> Option<&str> {
        self.sn.as_deref()
    }

    /// The long name, if any.
    #[inline]
    pub fn ln(&self) -> Option<&str> {
        self.ln.as_deref()
    }

    /// True if this entry's buffers are all borrowed from `'static` storage,
    /// i.e. it came from the built-in table.
    #[inline]
    pub fn is_builtin(&self) -> bool {
        matches!(self.der, Cow::Borrowed(_))
            && !matches!(self.sn, Some(Cow::Owned(_)))
            && !matches!(self.ln, Some(Cow::Owned(_)))
    }
}

impl fmt::Debug for OidEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OidEntry")
            .field("nid", &self.nid)
            .field("der", &self.der)
            .field("sn", &self.sn)
            .field("ln", &self.ln)
            .finish()
    }
}

/// The shared, reference-counted form an `OidEntry` takes once it lives in
/// the added index. Up to four index records ([`crate::added_index::IndexKey`])
/// may point at the same `Arc`; it is freed the moment the last one drops.
pub(crate) type SharedEntry = Arc<OidEntry>;
