//! Parses a document with several authoring mistakes and prints every
//! diagnostic the parser collected.
//!
//! Run with `cargo run --example report_errors [file.con]`.

use con_notation::{from_file, from_str, Error, Value};
use std::process::ExitCode;

const BROKEN: &str = r#"# settings with mistakes
{
  identifier : "a string",
  another_id 12.5,
  some_stuff : unquoted text,
  sub_object : { yo : "hey" },
  list : [1, 2 3]
}
"#;

fn report(err: &Error) {
    eprintln!("Error : {}", err);
    for message in err.messages() {
        eprintln!("{}", message);
    }
}

fn show(doc: &Value) -> con_notation::Result<()> {
    println!("{}", doc.get("identifier")?.as_str()?);
    println!("{}", doc.get("another_id")?.as_float()?);
    println!("{}", doc.lookup("sub_object/yo")?.as_str()?);
    Ok(())
}

fn main() -> ExitCode {
    let parsed = match std::env::args().nth(1) {
        Some(path) => from_file(path),
        None => from_str(BROKEN),
    };

    match parsed.and_then(|doc| show(&doc)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}
