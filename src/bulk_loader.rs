//! Line-oriented bulk registration.
//!
//! Grammar per line, mirroring OpenSSL's `OBJ_create_objects` tokenizer:
//! `<oid> <sn> [<ln>]`. The OID field is digits and `.` only; `sn` is the
//! next whitespace-delimited token; `ln`, if present, is everything after
//! `sn`'s trailing whitespace to the end of the line (so it may itself
//! contain whitespace). A line whose first byte isn't alphanumeric, or
//! whose OID field is empty, or where digits/dots are directly followed by
//! a non-whitespace byte, terminates loading without consuming the line.

use std::io;

use crate::entry::Nid;
use crate::error::Result;

/// Parsed form of one bulk-load line. `None` signals a terminator line (the
/// caller should stop without counting it).
fn parse_line(line: &str) -> Option<(&str, Option<&str>, Option<&str>)> {
    let first = line.chars().next()?;
    if !first.is_ascii_alphanumeric() {
        return None;
    }

    let oid_end = line
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(line.len());
    let oid = &line[..oid_end];
    if oid.is_empty() {
        return None;
    }

    let rest = &line[oid_end..];
    if rest.is_empty() {
        return Some((oid, None, None));
    }
    if !rest.starts_with(|c: char| c.is_whitespace()) {
        // digits/dots directly followed by a non-whitespace byte
        return None;
    }

    let rest = rest.trim_start();
    if rest.is_empty() {
        return Some((oid, None, None));
    }

    let sn_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    let sn = &rest[..sn_end];
    let after_sn = rest[sn_end..].trim_start();
    let ln = if after_sn.is_empty() {
        None
    } else {
        Some(after_sn)
    };
    Some((oid, Some(sn), ln))
}

/// Drive `lines` through `parse_line` and `register_fn`, stopping at the
/// first terminator line, I/O error, or failed registration. Returns the
/// number of lines successfully registered.
pub(crate) fn bulk_load_with(
    lines: impl Iterator<Item = io::Result<String>>,
    mut register_fn: impl FnMut(Option<&str>, Option<&str>, Option<&str>) -> Result<Nid>,
) -> usize {
    let mut count = 0usize;
    for line in lines {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let (oid, sn, ln) = match parse_line(&line) {
            Some(parsed) => parsed,
            None => break,
        };
        if register_fn(Some(oid), sn, ln).is_err() {
            break;
        }
        count += 1;
    }
    count
}
