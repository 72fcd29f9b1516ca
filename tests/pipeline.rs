use huffcode::{
    build_code_table, build_tree, encode, encode_str, encode_with_table, freq_count, grid_columns,
    grid_rows, EncodeReport, Error, FrequencyTable, NodeData,
};

#[test]
fn aab_end_to_end_test() {
    let freqs = freq_count("aab");
    assert_eq!(freqs.get(&'a'), Some(2));
    assert_eq!(freqs.get(&'b'), Some(1));

    let root = build_tree(&freqs).unwrap();
    match &root.node_data {
        NodeData::Kids(left, right) => {
            assert!(matches!(left.node_data, NodeData::Leaf('b')));
            assert!(matches!(right.node_data, NodeData::Leaf('a')));
        }
        NodeData::Leaf(_) => panic!("root of two symbols must have kids"),
    }

    let codes = build_code_table(&root);
    assert_eq!(codes.get(&'a'), Some("1"));
    assert_eq!(codes.get(&'b'), Some("0"));

    let bits = encode_with_table(&codes, &['a', 'a', 'b']).unwrap();
    assert_eq!(bits.as_str(), "110");
    assert_eq!(encode_str("aab").unwrap(), bits);
}

#[test]
fn empty_input_is_invalid_test() {
    assert!(matches!(encode_str(""), Err(Error::InvalidInput(_))));
    let empty: FrequencyTable<char> = FrequencyTable::from_symbols(Vec::new());
    assert!(matches!(build_tree(&empty), Err(Error::InvalidInput(_))));
}

#[test]
fn table_from_other_input_test() {
    let codes = build_code_table(&build_tree(&freq_count("abc")).unwrap());
    let input = "abd".chars().collect::<Vec<char>>();
    match encode_with_table(&codes, &input) {
        Err(e @ Error::Lookup { .. }) => assert_eq!(e.to_string(), "no code for symbol 'd'"),
        other => panic!("expected a lookup error, got {:?}", other),
    }
}

#[test]
fn deterministic_with_ties_test() {
    let text = "the quick brown fox jumps over the lazy dog";
    let first = encode_str(text).unwrap();
    for _ in 0..10 {
        assert_eq!(encode_str(text).unwrap(), first);
    }
}

#[test]
fn equal_weights_test() {
    // Four symbols of equal weight get the four two-bit codes in first-seen order.
    let bits = encode_str("dcba").unwrap();
    assert_eq!(bits.as_str(), "00011011");
}

#[test]
fn generic_symbols_test() {
    let words = ["to", "be", "or", "not", "to", "be"];
    let bits = encode(&words).unwrap();
    // to:2 be:2 or:1 not:1 -> or+not first, then to+be, then the pairs.
    assert_eq!(bits.as_str(), "101100011011");
}

#[test]
fn grid_test() {
    assert_eq!(grid_columns(0), 1);
    assert_eq!(grid_columns(100), 11);
    assert_eq!(grid_rows(100), 10);
    let report = EncodeReport::from_text("aab").unwrap();
    assert_eq!(report.grid.columns, grid_columns(3));
    assert_eq!(report.grid.rows, 1);
}
