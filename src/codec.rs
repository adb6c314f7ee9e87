//! Text (dotted-decimal) <-> DER content octet codec for OBJECT IDENTIFIERs.
//!
//! Pure and stateless: everything here operates on borrowed input and
//! returns owned output, with no registry state involved. Used both by the
//! text-parsing registration paths in [`crate::registry`] and directly by
//! [`crate::registry::obj_to_text`].

use std::string::String;
use std::vec::Vec;

use nom::character::complete::{char as nom_char, digit1};
use nom::combinator::all_consuming;
use nom::multi::separated_list1;
use nom::Parser;
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::error::{OidRegistryError, Result};

/// Maximum DER content length accepted, per RFC 2578 (STD 58) 3.5: at most
/// 128 sub-identifiers of at most 32 bits each, base-128 encoded.
pub const MAX_DER_LEN: usize = 586;

fn parse_arcs(text: &str) -> Result<Vec<BigUint>> {
    let parser = separated_list1(nom_char('.'), digit1::<&str, nom::error::Error<&str>>);
    let (_, digits) = all_consuming(parser)
        .parse(text)
        .map_err(|_| OidRegistryError::InvalidOid)?;
    if digits.len() < 2 {
        return Err(OidRegistryError::InvalidOid);
    }
    digits
        .into_iter()
        .map(|d| d.parse::<BigUint>().map_err(|_| OidRegistryError::InvalidOid))
        .collect()
}

fn encode_arc(mut v: BigUint, out: &mut Vec<u8>) {
    if v.is_zero() {
        out.push(0);
        return;
    }
    let mut groups = Vec::new();
    let mask = BigUint::from(0x7fu32);
    while !v.is_zero() {
        let group = (&v & &mask).to_u8().unwrap_or(0);
        groups.push(group);
        v >>= 7u32;
    }
    groups.reverse();
    let last = groups.len() - 1;
    for (i, g) in groups.into_iter().enumerate() {
        out.push(if i != last { g | 0x80 } else { g });
    }
}

/// Encode a dotted-decimal OID string (e.g. `"1.2.840.113549"`) into DER
/// content octets.
///
/// The first two arcs `a, b` combine into one sub-identifier `40*a + b`: if
/// `a` is `0` or `1` then `b` must be `< 40`; if `a == 2` then `b` is
/// unbounded; `a > 2` is rejected. Every later arc is base-128 big-endian
/// encoded with the continuation bit set on every octet but the last. Arcs
/// may be arbitrarily large; arithmetic is done with [`BigUint`] throughout.
pub fn text_to_der(text: &str) -> Result<Vec<u8>> {
    let arcs = parse_arcs(text)?;
    let a = &arcs[0];
    let b = &arcs[1];
    let two = BigUint::from(2u32);
    let forty = BigUint::from(40u32);
    if *a > two {
        return Err(OidRegistryError::InvalidOid);
    }
    if *a < two && *b >= forty {
        return Err(OidRegistryError::InvalidOid);
    }
    let v0 = a * &forty + b;

    let mut out = Vec::new();
    encode_arc(v0, &mut out);
    for arc in &arcs[2..] {
        encode_arc(arc.clone(), &mut out);
    }

    if out.len() > MAX_DER_LEN {
        return Err(OidRegistryError::InvalidOid);
    }
    Ok(out)
}

/// Decode DER content octets into a dotted-decimal OID string.
///
/// Rejects input longer than [`MAX_DER_LEN`] bytes or whose final octet has
/// the continuation bit set (a truncated encoding). The first sub-identifier
/// `v0` is split as: `a = v0/40, b = v0%40` when `v0 < 80`, else `a = 2,
/// b = v0-80`.
pub fn der_to_text(bytes: &[u8]) -> Result<String> {
    if bytes.is_empty() || bytes.len() > MAX_DER_LEN {
        return Err(OidRegistryError::InvalidOid);
    }
    if bytes[bytes.len() - 1] & 0x80 != 0 {
        return Err(OidRegistryError::InvalidOid);
    }

    let mut arcs = Vec::new();
    let mut acc: u64 = 0;
    let mut big: Option<BigUint> = None;
    for &byte in bytes {
        let digit = (byte & 0x7f) as u64;
        match &mut big {
            Some(b) => {
                *b = (&*b << 7u32) + digit;
            }
            None => {
                if acc > (u64::MAX >> 7) {
                    let mut b = BigUint::from(acc);
                    b = (&b << 7u32) + digit;
                    big = Some(b);
                } else {
                    acc = (acc << 7) + digit;
                }
            }
        }
        if byte & 0x80 == 0 {
            arcs.push(big.take().unwrap_or_else(|| BigUint::from(acc)));
            acc = 0;
        }
    }

    let v0 = arcs.remove(0);
    let eighty = BigUint::from(80u32);
    let forty = BigUint::from(40u32);
    let (a, b) = if v0 < eighty {
        (&v0 / &forty, &v0 % &forty)
    } else {
        (BigUint::from(2u32), &v0 - &eighty)
    };

    let mut parts: Vec<String> = Vec::with_capacity(arcs.len() + 2);
    parts.push(a.to_string());
    parts.push(b.to_string());
    for arc in arcs {
        parts.push(arc.to_string());
    }
    Ok(parts.join("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_sha256_with_rsa() {
        let der = text_to_der("1.2.840.113549.1.1.11").unwrap();
        assert_eq!(der, vec![0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x01, 0x0B]);
        assert_eq!(der_to_text(&der).unwrap(), "1.2.840.113549.1.1.11");
    }

    #[test]
    fn scenario_common_name() {
        let der = text_to_der("2.5.4.3").unwrap();
        assert_eq!(der, vec![0x55, 0x04, 0x03]);
    }

    #[test]
    fn scenario_second_arc_bound() {
        assert!(text_to_der("1.40.1").is_err());
        let der = text_to_der("2.40.1").unwrap();
        assert_eq!(der, vec![0x78, 0x01]);
    }

    #[test]
    fn rejects_oversize_der() {
        let bytes = vec![0x81u8; MAX_DER_LEN + 1];
        assert!(der_to_text(&bytes).is_err());
    }

    #[test]
    fn rejects_truncated_der() {
        // continuation bit set on the final byte
        assert!(der_to_text(&[0x2A, 0x86]).is_err());
    }

    #[test]
    fn rejects_malformed_text() {
        assert!(text_to_der("").is_err());
        assert!(text_to_der("1").is_err());
        assert!(text_to_der("1.2.abc").is_err());
        assert!(text_to_der("3.1").is_err());
    }

    #[test]
    fn round_trip_huge_arc() {
        // arc well beyond u64 range
        let huge = "2.999999999999999999999999999999999999999999999999999999999999";
        let der = text_to_der(huge).unwrap();
        assert_eq!(der_to_text(&der).unwrap(), huge);
    }

    #[test]
    fn property_text_der_text_round_trip() {
        let cases = [
            "0.0",
            "0.39",
            "1.0",
            "1.39",
            "2.0",
            "2.999",
            "1.2.840.113549.1.1.1",
            "2.16.840.1.101.3.4.2.1",
        ];
        for c in cases {
            let der = text_to_der(c).expect("encode");
            let text = der_to_text(&der).expect("decode");
            assert_eq!(text, c);
            let der2 = text_to_der(&text).expect("re-encode");
            assert_eq!(der, der2);
        }
    }
}
