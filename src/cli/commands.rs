//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::Path;

use cminus_syntax::render;

use crate::config::{Artifact, OutputConfig};
use crate::output::{self, FileSink};
use crate::pipeline;

use super::{CliResult, ExitCode};

/// Compile a file and write all five artifacts.
///
/// Diagnostics are artifacts, not failures: the exit code is success whenever the artifacts
/// were written.
pub fn compile_file(file_path: &Path, config: OutputConfig) -> CliResult<ExitCode> {
    let source = output::read_source(file_path)?;
    let compilation = pipeline::compile(&source);

    let mut sink = FileSink::new(config);
    compilation.write_to(&mut sink)?;

    tracing::info!(
        file = %file_path.display(),
        out_dir = %sink.config().out_dir().display(),
        tokens = compilation.scan.tokens.len(),
        lexical_errors = compilation.scan.errors.len(),
        syntax_errors = compilation.outcome.errors.len(),
        "wrote artifacts"
    );
    Ok(ExitCode::SUCCESS)
}

/// Print diagnostics with source context. Fails if any were found.
pub fn check_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = output::read_source(file_path)?;
    let compilation = pipeline::compile(&source);

    let reports = compilation.reports(&file_path.to_string_lossy(), &source);
    if reports.is_empty() {
        println!("✓ No lexical or syntax errors");
        return Ok(ExitCode::SUCCESS);
    }

    for report in &reports {
        eprintln!("{report:?}");
    }
    eprintln!("{} error(s) found", reports.len());
    Ok(ExitCode::FAILURE)
}

/// Tokenize and display the token listing.
pub fn lex_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = output::read_source(file_path)?;
    let compilation = pipeline::compile(&source);

    print!("{}", compilation.render(Artifact::Tokens));
    if !compilation.scan.errors.is_empty() {
        eprint!("{}", render::lexical_errors(&compilation.scan.errors));
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse and display the parse tree.
pub fn parse_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = output::read_source(file_path)?;
    let compilation = pipeline::compile(&source);

    print!("{}", compilation.render(Artifact::ParseTree));
    if !compilation.outcome.errors.is_empty() {
        eprint!("{}", render::syntax_errors(&compilation.outcome.errors));
    }
    Ok(ExitCode::SUCCESS)
}
