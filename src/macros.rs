/// Builds a [`Value`](crate::Value) tree from a JSON-like literal.
///
/// ```rust
/// use con_notation::con;
///
/// let doc = con!({
///     "name": "server",
///     "ports": [80, 443],
///     "tls": { "enabled": true, "cert": null }
/// });
/// assert_eq!(doc.lookup("ports/1").unwrap().as_int().unwrap(), 443);
/// ```
#[macro_export]
macro_rules! con {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Boolean(true)
    };

    (false) => {
        $crate::Value::Boolean(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::con!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::ConMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::ConMap::new();
        $(
            object.insert($key.to_string(), $crate::con!($value));
        )*
        $crate::Value::Object(object)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{ConMap, Kind, Value};

    #[test]
    fn test_con_macro_scalars() {
        assert_eq!(con!(null), Value::Null);
        assert_eq!(con!(true), Value::Boolean(true));
        assert_eq!(con!(42).scalar(), Some("42"));
        assert_eq!(con!(2.5).kind(), Kind::Numeric);
        assert_eq!(con!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_con_macro_containers() {
        assert_eq!(con!([]), Value::Array(vec![]));
        assert_eq!(con!({}), Value::Object(ConMap::new()));

        let value = con!({ "a": [1, "two", { "b": false }] });
        let a = value.get("a").unwrap();
        assert_eq!(a.len(), 3);
        assert_eq!(a.at(1).unwrap(), &Value::from("two"));
        assert_eq!(a.at(2).unwrap().get("b").unwrap(), &Value::Boolean(false));
    }
}
