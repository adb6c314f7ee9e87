#![deny(/*missing_docs,*/
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    // unreachable_pub
)]
#![forbid(unsafe_code)]
#![warn(
/* missing_docs,
rust_2018_idioms,*/
missing_debug_implementations,
)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(test(
no_crate_inject,
attr(deny(warnings/*, rust_2018_idioms*/), allow(dead_code, unused_variables))
))]

//! A process-wide registry of ASN.1 OBJECT IDENTIFIERs.
//!
//! Built-in, well-known OIDs are baked in at compile time and looked up
//! lock-free; additional OIDs can be registered at runtime under a single
//! reader-writer lock. See [`register`], [`nid_to_obj`], and friends for the
//! public surface; [`bulk_load`] drives registration from a line-oriented
//! text source.

mod added_index;
mod builtin;
mod builtin_data;
mod bulk_loader;
mod codec;
mod debug;
mod entry;
mod error;
mod lifecycle;
mod registry;

pub use codec::{der_to_text, text_to_der, MAX_DER_LEN};
pub use entry::{Nid, OidEntry, UNDEF};
pub use error::{OidRegistryError, Result};
pub use registry::{
    add_object, allocate_nid, bulk_load, ln_to_nid, nid_to_obj, obj_to_nid, obj_to_text,
    register, shutdown, sn_to_nid, text_to_nid, text_to_obj,
};

pub use builtin::BUILTIN_COUNT;
