use con_notation::{from_str, Kind, Value};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Pool {
    min: u32,
    max: u32,
    eager: bool,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Settings {
    host: String,
    port: u16,
    ratio: f64,
    replicas: Vec<String>,
    pool: Pool,
    owner: Option<String>,
}

const SETTINGS: &str = r#"
    {
      host : "db.internal",
      port : 5432,
      ratio : 0.75,
      replicas : [ "r1", "r2" ],
      pool : { min : 1, max : 16, eager : false },
      owner : null
    }
"#;

#[test]
fn test_value_to_json() {
    let doc = from_str(SETTINGS).unwrap();
    let json = serde_json::to_value(&doc).unwrap();

    assert_eq!(json["host"], "db.internal");
    assert_eq!(json["port"], 5432);
    assert_eq!(json["ratio"], 0.75);
    assert_eq!(json["replicas"][1], "r2");
    assert_eq!(json["pool"]["eager"], false);
    assert!(json["owner"].is_null());
}

#[test]
fn test_json_key_order_follows_document() {
    let doc = from_str("{ zeta : 1, alpha : 2, mid : 3 }").unwrap();
    assert_eq!(
        serde_json::to_string(&doc).unwrap(),
        r#"{"zeta":1,"alpha":2,"mid":3}"#
    );
}

#[test]
fn test_value_into_struct() {
    let doc = from_str(SETTINGS).unwrap();
    let json = serde_json::to_string(&doc).unwrap();
    let settings: Settings = serde_json::from_str(&json).unwrap();

    assert_eq!(
        settings,
        Settings {
            host: "db.internal".to_string(),
            port: 5432,
            ratio: 0.75,
            replicas: vec!["r1".to_string(), "r2".to_string()],
            pool: Pool {
                min: 1,
                max: 16,
                eager: false,
            },
            owner: None,
        }
    );
}

#[test]
fn test_json_into_value() {
    let value: Value =
        serde_json::from_str(r#"{"name":"edge","workers":8,"load":0.5,"tags":["a",null,true]}"#)
            .unwrap();

    assert_eq!(value.kind(), Kind::Object);
    assert_eq!(value.get("name").unwrap().as_str().unwrap(), "edge");
    assert_eq!(value.get("workers").unwrap().as_int().unwrap(), 8);
    assert_eq!(value.get("load").unwrap().scalar(), Some("0.5"));
    assert_eq!(value.lookup("tags/1").unwrap(), &Value::Null);
    assert!(value.lookup("tags/2").unwrap().as_bool().unwrap());
}

#[test]
fn test_struct_through_value_to_con() {
    let settings = Settings {
        host: "cache".to_string(),
        port: 6379,
        ratio: 1.5,
        replicas: vec![],
        pool: Pool {
            min: 0,
            max: 4,
            eager: true,
        },
        owner: Some("ops".to_string()),
    };

    let json = serde_json::to_string(&settings).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();
    let text = con_notation::to_string(&value).unwrap();
    let parsed = from_str(&text).unwrap();

    assert_eq!(parsed, value);
    assert_eq!(parsed.lookup("pool/max").unwrap().as_int().unwrap(), 4);
    assert_eq!(parsed.get("owner").unwrap().as_str().unwrap(), "ops");
    assert!(parsed.get("replicas").unwrap().is_empty());
}

#[test]
fn test_non_integer_numerics_serialize_as_floats() {
    let doc = from_str("{ a : 7., b : +3, c : -0.25 }").unwrap();
    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(json["a"], 7.0);
    assert_eq!(json["b"], 3);
    assert_eq!(json["c"], -0.25);
}
