//! Property tests for the state codec round-trip law.

use proptest::prelude::*;
use serde_json::{Map, Value};
use studycoach_core::state::codec::{decode_state, encode_state};

/// Arbitrary JSON values: null, bools, integers, strings, and nested
/// arrays/objects. Floats are left out -- the state blob never stores
/// non-finite numbers and integer coverage exercises the same paths.
fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "\\PC{0,16}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-z_]{1,8}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn arb_state() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map("[a-zA-Z_]{1,12}", arb_json(), 0..8)
        .prop_map(|m| m.into_iter().collect())
}

proptest! {
    #[test]
    fn roundtrip_law(state in arb_state()) {
        let token = encode_state(&state);
        prop_assert_eq!(decode_state(Some(&token)), state);
    }

    #[test]
    fn decode_never_panics_on_arbitrary_input(raw in "\\PC{0,64}") {
        let _ = decode_state(Some(&raw));
    }

    #[test]
    fn decode_never_panics_on_arbitrary_data_urls(payload in "\\PC{0,64}") {
        let raw = format!("data:application/json;base64,{payload}");
        let _ = decode_state(Some(&raw));
    }
}
