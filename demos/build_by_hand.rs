//! Builds a small tree through the mutation API and prints it.
//!
//! Run with `cargo run --example build_by_hand`.

use con_notation::{to_string, Kind, Value};

fn main() -> con_notation::Result<()> {
    let mut root = Value::new(Kind::Object);

    root.insert("hello", Value::new(Kind::String));
    root.get_mut("hello")?.set_string("This is a string");

    let mut nested = Value::new(Kind::Object);
    nested.insert("Child1", Value::Null);
    nested.insert("Child2", Value::Null);
    nested.insert("Child3", Value::Null);

    let mut array = Value::new(Kind::Array);
    for literal in ["1", "2", "3"] {
        let mut element = Value::Null;
        element.set_numeric(literal)?;
        array.push(element);
    }
    array.push(nested);
    array.push(4);

    root.insert("test_array", array);

    print!("{}", to_string(&root)?);
    Ok(())
}
