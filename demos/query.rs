//! Reads a document from standard input and prints the node at each path
//! given on the command line.
//!
//! ```text
//! $ echo '{ server : { ports : [80, 443] } }' | cargo run --example query -- /server/ports/1
//! 443
//! ```
//!
//! Scalars print as their literal text; containers print as CON.

use con_notation::{from_reader, to_string, Value};
use std::io;
use std::process::ExitCode;

fn render(node: &Value) -> con_notation::Result<String> {
    match node.scalar() {
        Some(text) => Ok(text.to_string()),
        None => Ok(to_string(node)?.trim_end().to_string()),
    }
}

fn run(paths: &[String]) -> con_notation::Result<()> {
    let doc = from_reader(io::stdin().lock())?;
    for path in paths {
        println!("{}", render(doc.lookup(path)?)?);
    }
    Ok(())
}

fn main() -> ExitCode {
    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("Usage: query <path>...");
        eprintln!("  Reads a document from stdin and prints each /slash/separated path.");
        return ExitCode::FAILURE;
    }

    match run(&paths) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("An error occurred: {}", err);
            for message in err.messages() {
                eprintln!("{}", message);
            }
            ExitCode::FAILURE
        }
    }
}
