use displaydoc::Display;
use thiserror::Error;

/// The error type for the OID registry and codec.
///
/// `UNDEF`/"not found" results are never represented by this type — they are
/// plain `Nid(0)` or `Option::None` returns. Everything here is an
/// *operational* failure: malformed input, a naming collision, or
/// registry/concurrency infrastructure trouble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[non_exhaustive]
pub enum OidRegistryError {
    /// invalid OID text or DER content
    InvalidOid,
    /// register() was called with no oid, sn, or ln
    InvalidArgument,
    /// a short name, long name, or DER value already exists in the registry
    AlreadyExists,
    /// lazy lock initialization failed
    LockInitFailed,
    /// failed to acquire the registry lock
    LockAcquireFailed,
    /// allocation failed while building a registry entry
    AllocFailed,
    /// internal index structure error
    Internal,
}

/// A specialized `Result` type for all fallible operations in this crate.
pub type Result<T> = core::result::Result<T, OidRegistryError>;
