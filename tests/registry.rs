use hex_literal::hex;
use oid_registry::*;
use serial_test::serial;

#[test]
fn scenario_sha256_with_rsa_round_trip() {
    let der = text_to_der("1.2.840.113549.1.1.11").expect("encode");
    assert_eq!(&der[..], &hex!("2A 86 48 86 F7 0D 01 01 0B"));
    assert_eq!(der_to_text(&der).expect("decode"), "1.2.840.113549.1.1.11");
}

#[test]
fn scenario_commonname_builtin() {
    let der = text_to_der("2.5.4.3").expect("encode");
    assert_eq!(&der[..], &hex!("55 04 03"));

    let nid = sn_to_nid("CN");
    assert_ne!(nid, UNDEF);
    let entry = nid_to_obj(nid).expect("commonName is built in");
    assert_eq!(entry.der(), &hex!("55 04 03"));
    assert_eq!(obj_to_text(&entry, false).unwrap(), "commonName");
    assert_eq!(obj_to_text(&entry, true).unwrap(), "2.5.4.3");
}

#[test]
fn scenario_second_arc_bound() {
    assert!(text_to_der("1.40.1").is_err());
    let der = text_to_der("2.40.1").expect("encode");
    assert_eq!(&der[..], &hex!("78 01"));
}

#[test]
fn scenario_oversize_der_rejected() {
    let bytes = vec![0x81u8; MAX_DER_LEN + 1];
    assert_eq!(der_to_text(&bytes), Err(OidRegistryError::InvalidOid));
}

// The registry is one process-wide static: tests that register, add_object,
// bulk_load, or shutdown it are serialized so they don't observe each
// other's entries.

#[test]
#[serial]
fn scenario_register_collision_leaves_registry_unchanged() {
    shutdown();
    let nid = register(Some("1.2.3.4.5"), Some("myShort"), Some("My Long Name"))
        .expect("first register succeeds");
    assert!(nid >= BUILTIN_COUNT);

    let err = register(Some("1.2.3.4.5"), Some("other"), Some("Other"))
        .expect_err("der collision must fail");
    assert_eq!(err, OidRegistryError::AlreadyExists);
    assert_eq!(sn_to_nid("other"), UNDEF);
    assert_eq!(sn_to_nid("myShort"), nid);
    shutdown();
}

#[test]
#[serial]
fn scenario_shutdown_reinitializes_cleanly() {
    shutdown();
    let nid1 = register(Some("1.2.3.4.6"), Some("preShutdownSn"), None).unwrap();
    assert!(nid1 >= BUILTIN_COUNT);

    shutdown();
    assert_eq!(sn_to_nid("preShutdownSn"), UNDEF);

    let nid2 = register(Some("1.2.3.4.6"), Some("preShutdownSn"), None)
        .expect("registry reinitializes after shutdown");
    assert_eq!(nid2, BUILTIN_COUNT);
    shutdown();
}

#[test]
fn property_nid_to_obj_round_trip_over_builtins() {
    for nid in 1..BUILTIN_COUNT {
        if let Some(entry) = nid_to_obj(nid) {
            assert_eq!(obj_to_nid(&entry), nid);
        }
    }
}

#[test]
#[serial]
fn property_register_then_lookup_round_trip() {
    shutdown();
    let nid = register(Some("1.2.3.4.42"), Some("propSn"), Some("propLn")).unwrap();
    assert_eq!(sn_to_nid("propSn"), nid);
    assert_eq!(ln_to_nid("propLn"), nid);
    let obj = text_to_obj("1.2.3.4.42", true).unwrap();
    assert_eq!(obj_to_nid(&obj), nid);
    assert_eq!(nid_to_obj(nid).unwrap().sn(), Some("propSn"));
    shutdown();
}

#[test]
fn text_to_obj_resolves_names_before_falling_back_to_dotted_decimal() {
    let obj = text_to_obj("CN", false).expect("CN is a known short name");
    assert_eq!(obj.der(), &hex!("55 04 03"));

    let obj = text_to_obj("2.5.4.3", false).expect("dotted decimal always parses");
    assert_eq!(obj.der(), &hex!("55 04 03"));

    assert!(text_to_obj("not-a-name-or-oid", false).is_err());
}

#[test]
#[serial]
fn add_object_rejects_duplicate_and_allocates_fresh_nid_otherwise() {
    shutdown();
    let der = text_to_der("1.2.3.4.88").unwrap();
    let first = OidEntry::new_owned(UNDEF, der.clone(), Some("addObjFirst".to_string()), None);
    let nid = add_object(first);
    assert_ne!(nid, UNDEF);

    let dup = OidEntry::new_owned(UNDEF, der, Some("addObjSecond".to_string()), None);
    assert_eq!(add_object(dup), UNDEF);
    shutdown();
}

#[test]
#[serial]
fn allocate_nid_reserves_contiguous_blocks() {
    shutdown();
    let first = allocate_nid(1);
    let block = allocate_nid(5);
    assert_eq!(block, first + 1);
    let next = allocate_nid(1);
    assert_eq!(next, block + 5);
    shutdown();
}

#[test]
#[serial]
fn bulk_load_registers_until_a_terminator_line() {
    shutdown();
    let lines: Vec<std::io::Result<String>> = vec![
        Ok("1.2.3.4.201 bulkOne Bulk One".to_string()),
        Ok("1.2.3.4.202 bulkTwo".to_string()),
        Ok("not-alnum-start".to_string()),
        Ok("1.2.3.4.203 bulkThree".to_string()),
    ];
    let count = bulk_load(lines.into_iter());
    assert_eq!(count, 2);
    assert_ne!(sn_to_nid("bulkOne"), UNDEF);
    assert_ne!(sn_to_nid("bulkTwo"), UNDEF);
    assert_eq!(sn_to_nid("bulkThree"), UNDEF);
    shutdown();
}
