#![forbid(unsafe_code)]
//! C-minus compiler front end
//!
//! Scans and parses a C-minus source file and produces five text artifacts: the token listing,
//! the lexical error listing, the symbol table, the parse tree, and the syntax error listing.
//! The scanner and parser live in `cminus_syntax`; this crate adds the pipeline, the output
//! sink, and the command-line driver.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `output` modules
//!   enforce `#![deny(clippy::unwrap_used)]`. Scanning and parsing never fail; diagnostics are data.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//! ```rust
//! use cminus::{Artifact, compile};
//!
//! let compilation = compile("int main(void) { return 0; }");
//! assert!(!compilation.has_diagnostics());
//! assert_eq!(compilation.render(Artifact::SyntaxErrors), "No syntax errors found.\n");
//! ```

pub mod cli;
pub mod config;
pub mod output;
pub mod pipeline;

pub use cminus_syntax::{diagnostics, lexer, parser, render, symbols, tree};

pub use config::{Artifact, OutputConfig};
pub use output::{FileSink, MemorySink, OutputSink, SinkError};
pub use pipeline::{Compilation, compile};
