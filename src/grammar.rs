//! The CON notation.
//!
//! This module only documents the text format read by [`from_str`](crate::from_str)
//! and produced by [`to_string`](crate::to_string).
//!
//! # Documents
//!
//! A document is a single object. Parsing starts at the first `{` in the
//! input; anything before it and anything after its matching `}` is ignored.
//! Line breaks carry no meaning.
//!
//! ```text
//! # Service configuration
//! {
//!   name    : "edge-proxy",
//!   workers : 8,
//!   ratio   : 0.75,
//!   debug   : false,
//!   owner   : null,
//!   listen  : [ "0.0.0.0:80", "0.0.0.0:443" ],
//!   tls     : { cert : "/etc/tls/cert.pem", key : "/etc/tls/key.pem" },
//!   routes  : <routes.con>
//! }
//! ```
//!
//! # Members
//!
//! Objects hold `identifier : value` members separated by commas. Identifiers
//! are unquoted and taken verbatim, so `true`, `42` and `a.b-c` are all valid
//! names. Whitespace or special characters in an identifier are written with
//! a backslash in front: `two\ words : 1`. Repeating an identifier replaces
//! the earlier member.
//!
//! # Values
//!
//! | Kind | Syntax | Example |
//! |------|--------|---------|
//! | Null | `null` | `owner : null` |
//! | Boolean | `true` or `false` | `debug : false` |
//! | Numeric | optional sign, digits, optional single `.` after a digit | `-12`, `+3.5`, `7.` |
//! | String | double-quoted | `name : "edge-proxy"` |
//! | Array | `[ value, … ]` | `[1, "two", {}]` |
//! | Object | `{ member, … }` | `{ a : 1 }` |
//! | Include | `<path>` | `routes : <routes.con>` |
//!
//! Unquoted text that is not `true`, `false`, `null` or a number is rejected
//! as an invalid expression; plain text must be quoted. Exponents (`1e5`) and
//! leading dots (`.5`) are not numbers.
//!
//! # Strings and escapes
//!
//! Inside quotes every character is literal, including newlines and `#`. A
//! backslash takes the following character literally, so `\"` is a quote and
//! `\\` a backslash. The same rule applies to unquoted text and include paths
//! (`<odd\>name.con>`).
//!
//! # Comments
//!
//! `#` outside quotes and include paths starts a comment that runs to the end
//! of the line.
//!
//! # Includes
//!
//! `<path>` in value position parses another document and uses its root
//! object as the value. With the default [`FileLoader`](crate::FileLoader),
//! relative paths resolve against the working directory of the process, not
//! the directory of the including file. Include cycles are not detected.
//!
//! # Errors
//!
//! Mistakes such as a missing colon, a malformed identifier, an invalid bare
//! literal or a missing comma are collected, and the parse reports all of
//! them at once with their line numbers. Unterminated quotes or include paths,
//! input that ends mid-member, a member with no value before `}`, a missing
//! root object and failed includes stop the parse immediately.
