use phoneiso_core::{
    append_u64, country_by_network, country_by_number, network_name, Dataset, PhoneDb, E164,
    E212,
};

#[test]
fn e164_known_numbers() {
    let cases: &[(u64, &str)] = &[
        (45, "DK"),
        (4566118311, "DK"),
        (38640118311, "SI"),
        (38340118311, "XK"),
        (37740118311, "MC"),
        (1204, "CA"),
        (12024561111, "US"), // White House comment line
        (14412921234, "BM"), // Bermuda city hall
        (0, ""),
    ];
    for &(number, expected) in cases {
        assert_eq!(E164.lookup(number), expected, "lookup({number})");
    }
}

#[test]
fn e164_input_forms_agree() {
    for number in [45u64, 4566118311, 38340118311, 14412921234, 12024561111, 0, 999] {
        let s = number.to_string();
        let from_int = E164.lookup(number);
        assert_eq!(E164.lookup_str(&s), from_int, "string form of {number}");
        assert_eq!(E164.lookup_bytes(s.as_bytes()), from_int, "byte form of {number}");
    }
}

#[test]
fn e164_exceptions_beat_generic_prefixes() {
    // 4779 is a generic 4-digit prefix; 441624 is an exception under 44
    assert_eq!(E164.lookup(4779012345), "SJ");
    assert_eq!(E164.lookup(447911123456), "GB");
    assert_eq!(E164.lookup(441624123456), "IM");
    assert_eq!(E164.lookup(390669812345), "VA");
    assert_eq!(E164.lookup(390612345678), "IT");
    assert_eq!(E164.lookup(262269123456), "YT");
    assert_eq!(E164.lookup(262262123456), "RE");
}

#[test]
fn e164_single_digit_calling_code() {
    assert_eq!(E164.lookup(7), "RU");
    assert_eq!(E164.lookup(1), "US");
    assert_eq!(E164.lookup(77012345678), "KZ");
}

#[test]
fn e164_declines_unclassifiable_input() {
    assert_eq!(E164.lookup_str(""), "");
    assert_eq!(E164.lookup_str("000000"), "");
    assert_eq!(E164.lookup_str("+4566118311"), "");
    assert_eq!(E164.lookup_str("45 66 11 83 11"), "");
    assert_eq!(E164.lookup_str("4566118311000000"), "");
    assert_eq!(E164.lookup(u64::MAX), "");
}

#[test]
fn e164_string_input_is_verbatim() {
    // A leading zero is not stripped, so nothing matches
    assert_eq!(E164.lookup_str("045"), "");
    assert_eq!(E164.lookup_str("45"), "DK");
}

#[test]
fn e164_lookup_is_idempotent() {
    let first = E164.lookup(38340118311);
    for _ in 0..100 {
        assert_eq!(E164.lookup(38340118311), first);
    }
}

#[test]
fn e164_preallocated_buffer() {
    let mut buf = Vec::with_capacity(16);
    {
        let b = append_u64(&mut buf, 4566118311);
        assert_eq!(b, b"4566118311");
    }
    buf.clear();
    {
        let b = append_u64(&mut buf, 4512345678);
        assert_eq!(b, b"4512345678");
    }

    let mut scratch = Vec::with_capacity(16);
    assert_eq!(E164.lookup_with_buf(&mut scratch, 4566118311), "DK");
    assert_eq!(E164.lookup_with_buf(&mut scratch, 14412921234), "BM");
    assert_eq!(scratch, b"14412921234");
}

#[test]
fn e212_country() {
    let cases: &[(u16, u16, &str)] = &[(238, 0, "DK"), (340, 1, "GP"), (340, 12, "MQ"), (0, 0, "")];
    for &(mcc, mnc, expected) in cases {
        assert_eq!(E212.lookup(mcc, mnc), expected, "lookup({mcc}, {mnc})");
        assert_eq!(country_by_network(mcc, mnc), expected);
    }
}

#[test]
fn e212_country_shared_across_mncs() {
    for mnc in [0, 1, 2, 6, 20, 999] {
        assert_eq!(E212.lookup(238, mnc), "DK");
    }
}

#[test]
fn e212_operator_name() {
    let cases: &[(u16, u16, &str)] = &[(238, 1, "TDC A/S"), (238, 0, ""), (0, 0, "")];
    for &(mcc, mnc, expected) in cases {
        assert_eq!(network_name(mcc, mnc), expected, "name({mcc}, {mnc})");
    }
    // Either key changed to an unregistered value
    assert_eq!(network_name(238, 999), "");
    assert_eq!(network_name(239, 1), "");
}

#[test]
fn e212_nameless_network_is_still_registered() {
    assert_eq!(network_name(340, 12), "");
    let entry = E212.network(340, 12).expect("340-12 is registered");
    assert_eq!(entry.country, "MQ");
    assert!(E212.network(238, 0).is_none());
}

#[test]
fn free_functions_match_statics() {
    assert_eq!(country_by_number(4566118311), E164.lookup(4566118311));
    assert_eq!(
        PhoneDb::global().e212().network_name(238, 1),
        network_name(238, 1)
    );
}

#[test]
fn builtin_dataset_is_valid() {
    let db = PhoneDb::from_dataset(&Dataset::builtin()).expect("valid");
    let stats = db.stats();
    assert!(stats.prefixes > 200);
    assert!(stats.exceptions >= 3);
    assert!(stats.networks > 0);
    assert!(stats.mccs > 200);
    assert_eq!(db.version(), phoneiso_core::data::VERSION);
}

#[test]
fn builtin_country_codes_have_calling_codes() {
    let db = PhoneDb::global();
    for country in ["DK", "US", "CA", "BM", "XK", "MC", "VA"] {
        assert!(
            !db.e164().prefixes_for_country(country).is_empty(),
            "{country} has no prefix"
        );
    }
}

#[test]
fn concurrent_lookups_agree() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                (0..1000)
                    .map(|_| (E164.lookup(38640118311), E212.lookup(340, 12)))
                    .all(|r| r == ("SI", "MQ"))
            })
        })
        .collect();
    for h in handles {
        assert!(h.join().expect("thread panicked"));
    }
}
