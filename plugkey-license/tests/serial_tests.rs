mod common;

use common::{commercial_system_request, request_of, scheme, test_identity};
use plugkey_license::{generate, validate, LicenseRequest, LicenseType, Serial};
use pretty_assertions::assert_eq;

// ── LicenseType ──────────────────────────────────────────────────

#[test]
fn prefix_chars() {
    assert_eq!(LicenseType::Commercial.prefix_char(), Some('C'));
    assert_eq!(LicenseType::Demo.prefix_char(), Some('D'));
    assert_eq!(LicenseType::Educational.prefix_char(), Some('E'));
    assert_eq!(LicenseType::Nfr.prefix_char(), Some('N'));
    assert_eq!(LicenseType::Unlicensed.prefix_char(), None);
}

#[test]
fn prefix_char_roundtrip() {
    for ty in [
        LicenseType::Commercial,
        LicenseType::Demo,
        LicenseType::Educational,
        LicenseType::Nfr,
    ] {
        let c = ty.prefix_char().unwrap();
        assert_eq!(LicenseType::from_prefix_char(c), Some(ty));
    }
    assert_eq!(LicenseType::from_prefix_char('X'), None);
}

#[test]
fn ordinals_are_distinct() {
    let ordinals = [
        LicenseType::Unlicensed.ordinal(),
        LicenseType::Commercial.ordinal(),
        LicenseType::Demo.ordinal(),
        LicenseType::Educational.ordinal(),
        LicenseType::Nfr.ordinal(),
    ];
    let mut deduped = ordinals.to_vec();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), ordinals.len());
}

#[test]
fn is_licensed() {
    assert!(LicenseType::Commercial.is_licensed());
    assert!(!LicenseType::Unlicensed.is_licensed());
}

#[test]
fn license_type_serde() {
    let json = serde_json::to_string(&LicenseType::Educational).unwrap();
    let parsed: LicenseType = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, LicenseType::Educational);
}

// ── Generate ─────────────────────────────────────────────────────

#[test]
fn commercial_system_bound_serial_shape() {
    let serial = generate(&scheme(), &test_identity(), &commercial_system_request()).unwrap();
    let s = serial.as_str();
    assert!(s.starts_with("C100-"), "got {s}");
    assert_eq!(s.len(), 34);
    // 4-char prefix group plus six 4-char hash groups.
    let groups: Vec<&str> = s.split('-').collect();
    assert_eq!(groups.len(), 7);
    for group in &groups[1..] {
        assert_eq!(group.len(), 4);
        assert!(group
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'A'..=b'F')));
    }
}

#[test]
fn generate_is_deterministic() {
    let a = generate(&scheme(), &test_identity(), &commercial_system_request()).unwrap();
    let b = generate(&scheme(), &test_identity(), &commercial_system_request()).unwrap();
    assert_eq!(a.as_str(), b.as_str());
}

#[test]
fn demo_prefix_and_digest_differ() {
    let commercial = generate(&scheme(), &test_identity(), &commercial_system_request()).unwrap();
    let demo = generate(&scheme(), &test_identity(), &request_of(LicenseType::Demo)).unwrap();
    assert!(demo.as_str().starts_with("D10-"));
    // Different type ordinal in the payload changes the hash suffix.
    assert_ne!(&commercial.as_str()[4..], &demo.as_str()[4..]);
}

#[test]
fn flag_bits_encode_bindings() {
    let identity = test_identity();
    let both = LicenseRequest {
        license_type: LicenseType::Commercial,
        use_system_id: true,
        use_product_id: true,
    };
    let neither = LicenseRequest {
        license_type: LicenseType::Commercial,
        use_system_id: false,
        use_product_id: false,
    };
    assert!(generate(&scheme(), &identity, &both)
        .unwrap()
        .as_str()
        .starts_with("C110-"));
    assert!(generate(&scheme(), &identity, &neither)
        .unwrap()
        .as_str()
        .starts_with("C000-"));
}

#[test]
fn unlicensed_request_rejected() {
    let request = LicenseRequest {
        license_type: LicenseType::Unlicensed,
        use_system_id: false,
        use_product_id: false,
    };
    assert!(generate(&scheme(), &test_identity(), &request).is_err());
}

#[test]
fn empty_user_id_rejected() {
    let mut identity = test_identity();
    identity.user_id = "   ".to_string();
    assert!(generate(&scheme(), &identity, &commercial_system_request()).is_err());
}

#[test]
fn empty_system_id_rejected_only_when_bound() {
    let mut identity = test_identity();
    identity.system_id = String::new();
    assert!(generate(&scheme(), &identity, &commercial_system_request()).is_err());

    let unbound = LicenseRequest {
        license_type: LicenseType::Commercial,
        use_system_id: false,
        use_product_id: false,
    };
    assert!(generate(&scheme(), &identity, &unbound).is_ok());
}

#[test]
fn identity_fields_are_trimmed() {
    let mut padded = test_identity();
    padded.user_id = " U1 ".to_string();
    padded.system_id = "S1\t".to_string();
    let a = generate(&scheme(), &padded, &commercial_system_request()).unwrap();
    let b = generate(&scheme(), &test_identity(), &commercial_system_request()).unwrap();
    assert_eq!(a.as_str(), b.as_str());
}

// ── Validate ─────────────────────────────────────────────────────

#[test]
fn roundtrip_law() {
    let identity = test_identity();
    for ty in [
        LicenseType::Commercial,
        LicenseType::Demo,
        LicenseType::Educational,
        LicenseType::Nfr,
    ] {
        for (sys, prod) in [(false, false), (true, false), (false, true), (true, true)] {
            let request = LicenseRequest {
                license_type: ty,
                use_system_id: sys,
                use_product_id: prod,
            };
            let serial = generate(&scheme(), &identity, &request).unwrap();
            assert!(validate(&scheme(), serial.as_str(), &identity));
        }
    }
}

#[test]
fn changed_user_invalidates() {
    let serial = generate(&scheme(), &test_identity(), &commercial_system_request()).unwrap();
    let mut other = test_identity();
    other.user_id = "U2".to_string();
    assert!(!validate(&scheme(), serial.as_str(), &other));
}

#[test]
fn changed_system_invalidates_when_bound() {
    let serial = generate(&scheme(), &test_identity(), &commercial_system_request()).unwrap();
    let mut other = test_identity();
    other.system_id = "S2".to_string();
    assert!(!validate(&scheme(), serial.as_str(), &other));
}

#[test]
fn unbound_system_change_is_ignored() {
    let unbound = LicenseRequest {
        license_type: LicenseType::Commercial,
        use_system_id: false,
        use_product_id: false,
    };
    let serial = generate(&scheme(), &test_identity(), &unbound).unwrap();
    let mut other = test_identity();
    other.system_id = "S2".to_string();
    assert!(validate(&scheme(), serial.as_str(), &other));
}

#[test]
fn tampered_type_char_invalidates() {
    let serial = generate(&scheme(), &test_identity(), &commercial_system_request()).unwrap();
    // Grammatical but wrong: maps to Demo, fails the equality check.
    let tampered = format!("D{}", &serial.as_str()[1..]);
    assert!(!validate(&scheme(), &tampered, &test_identity()));
}

#[test]
fn flipped_flag_invalidates() {
    let serial = generate(&scheme(), &test_identity(), &commercial_system_request()).unwrap();
    let tampered = format!("C00{}", &serial.as_str()[3..]);
    assert!(!validate(&scheme(), &tampered, &test_identity()));
}

#[test]
fn tampered_hash_group_invalidates() {
    let serial = generate(&scheme(), &test_identity(), &commercial_system_request()).unwrap();
    let mut bytes = serial.as_str().as_bytes().to_vec();
    let last = bytes.len() - 1;
    bytes[last] = if bytes[last] == b'0' { b'1' } else { b'0' };
    let tampered = String::from_utf8(bytes).unwrap();
    assert!(!validate(&scheme(), &tampered, &test_identity()));
}

#[test]
fn nonzero_reserved_slot_invalidates() {
    let serial = generate(&scheme(), &test_identity(), &commercial_system_request()).unwrap();
    // Within the grammar, but re-derivation always emits '0'.
    let tampered = format!("{}1{}", &serial.as_str()[..3], &serial.as_str()[4..]);
    assert!(tampered.parse::<Serial>().is_ok());
    assert!(!validate(&scheme(), &tampered, &test_identity()));
}

#[test]
fn different_salt_invalidates() {
    let other_scheme = plugkey_license::SerialScheme::new("other-salt", 24).unwrap();
    let serial = generate(&scheme(), &test_identity(), &commercial_system_request()).unwrap();
    assert!(!validate(&other_scheme, serial.as_str(), &test_identity()));
}

// ── Grammar rejection (no hashing for malformed input) ───────────

#[test]
fn grammar_rejects_junk() {
    let identity = test_identity();
    for candidate in [
        "",
        "not-a-license-key",
        "C100",
        "C100-",
        "C10-ABCD-ABCD",              // prefix too short
        "c100-ABCD-ABCD-ABCD-ABCD",   // lowercase type char
        "C100-abcd-ABCD-ABCD-ABCD",   // lowercase hex
        "C100-ABCD-ABCG-ABCD-ABCD",   // non-hex character
        "C1X0-ABCD-ABCD-ABCD-ABCD",   // bad flag
        "X100-ABCD-ABCD-ABCD-ABCD",   // unknown type
        "C100-ABCD",                  // single hash group
        "C100-ABC-DABC-ABCD-ABCD",    // short interior group
        "C100-ABCDABCD",              // missing dashes
        "C100-ABCD-ABCD-ABCD-ABCDE",  // oversized final group
        " C100-ABCD-ABCD-ABCD-ABCD",  // leading whitespace
        "C100-ABCD-ABCD-ABCD-ABCD ",  // trailing whitespace
    ] {
        assert!(!validate(&scheme(), candidate, &identity), "accepted {candidate:?}");
    }
}

#[test]
fn grammar_accepts_short_final_group() {
    // Other schemes may truncate to a non-multiple of 4.
    assert!("C100-ABCD-ABCD-ABCD-AB".parse::<Serial>().is_ok());
}

// ── Serial type ──────────────────────────────────────────────────

#[test]
fn serial_accessors() {
    let serial = generate(&scheme(), &test_identity(), &commercial_system_request()).unwrap();
    assert_eq!(serial.license_type(), LicenseType::Commercial);
    assert!(serial.binds_system());
    assert!(!serial.binds_product());
    assert_eq!(serial.request(), commercial_system_request());
}

#[test]
fn serial_display_matches_str() {
    let serial = generate(&scheme(), &test_identity(), &commercial_system_request()).unwrap();
    assert_eq!(serial.to_string(), serial.as_str());
}

#[test]
fn serial_serde_roundtrip() {
    let serial = generate(&scheme(), &test_identity(), &commercial_system_request()).unwrap();
    let json = serde_json::to_string(&serial).unwrap();
    // Serializes as the plain string.
    assert_eq!(json, format!("\"{}\"", serial.as_str()));
    let parsed: Serial = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, serial);
}

#[test]
fn serial_deserialize_rejects_malformed() {
    let result: Result<Serial, _> = serde_json::from_str("\"bogus\"");
    assert!(result.is_err());
}
