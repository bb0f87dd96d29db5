//! Property-based tests for the write/parse round trip.
//!
//! Generated trees cover every kind, identifiers full of characters the
//! tokenizer treats specially, and arbitrary string payloads.

use con_notation::{from_str, to_string, to_string_with_options, ConMap, ConOptions, Number, Value};
use proptest::prelude::*;

fn identifier() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.\\- :,{}\\[\\]\"#<>\\\\\t]{1,8}"
}

fn numeric() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::from),
        "[+-]?[0-9]{1,6}(\\.[0-9]{0,3})?"
            .prop_map(|text| Value::Numeric(Number::parse(&text).unwrap())),
    ]
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Boolean),
        any::<String>().prop_map(Value::String),
        numeric(),
    ]
}

fn tree() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec((identifier(), inner), 0..6)
                .prop_map(|members| Value::Object(members.into_iter().collect())),
        ]
    })
}

fn document() -> impl Strategy<Value = Value> {
    prop::collection::vec((identifier(), tree()), 0..6)
        .prop_map(|members| Value::Object(members.into_iter().collect::<ConMap>()))
}

fn roundtrip(value: &Value, options: &ConOptions) -> bool {
    match to_string_with_options(value, options) {
        Ok(text) => match from_str(&text) {
            Ok(parsed) => *value == parsed,
            Err(e) => {
                eprintln!("Parse failed: {}", e);
                for message in e.messages() {
                    eprintln!("  {}", message);
                }
                eprintln!("Written was: {}", text);
                false
            }
        },
        Err(e) => {
            eprintln!("Write failed: {}", e);
            false
        }
    }
}

proptest! {
    #[test]
    fn prop_pretty_roundtrip(doc in document()) {
        prop_assert!(roundtrip(&doc, &ConOptions::default()));
    }

    #[test]
    fn prop_compact_roundtrip(doc in document()) {
        prop_assert!(roundtrip(&doc, &ConOptions::compact()));
    }

    #[test]
    fn prop_write_is_idempotent(doc in document()) {
        let first = to_string(&doc).unwrap();
        let second = to_string(&from_str(&first).unwrap()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_identifier_survives(key in identifier(), n in any::<i32>()) {
        let mut doc = Value::Null;
        doc.insert(key.clone(), n);
        let parsed = from_str(&to_string(&doc).unwrap()).unwrap();
        prop_assert_eq!(parsed.get(&key).unwrap().as_int().unwrap(), i64::from(n));
    }

    #[test]
    fn prop_string_survives(s in any::<String>()) {
        let mut doc = Value::Null;
        doc.insert("s", s.as_str());
        let parsed = from_str(&to_string(&doc).unwrap()).unwrap();
        prop_assert_eq!(parsed.get("s").unwrap().as_str().unwrap(), s.as_str());
    }

    #[test]
    fn prop_integer_literals_are_numeric(n in any::<i64>()) {
        let doc = from_str(&format!("{{ n : {} }}", n)).unwrap();
        prop_assert_eq!(doc.get("n").unwrap().as_int().unwrap(), n);
    }

    #[test]
    fn prop_exponents_are_not_numeric(mantissa in 1u32..1000, exponent in 0u32..20) {
        let text = format!("{}e{}", mantissa, exponent);
        prop_assert!(Number::parse(&text).is_err());
        let doc = format!("{{ n : {} }}", text);
        prop_assert!(from_str(&doc).is_err());
    }

    #[test]
    fn prop_bare_words_are_rejected(word in "[a-z]{1,10}") {
        prop_assume!(word != "true" && word != "false" && word != "null");
        let err = from_str(&format!("{{ w : {} }}", word)).unwrap_err();
        prop_assert_eq!(err.message_count(), 1);
    }
}
