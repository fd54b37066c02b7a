//! Scan-then-parse pipeline.
//!
//! Scanning runs to completion before parsing starts; the parser sees the flattened token stream
//! terminated by the `$` sentinel. Neither phase fails, so a [`Compilation`] always holds every
//! artifact.

use cminus_syntax::diagnostics::{self, LexicalReport, SyntaxReport};
use cminus_syntax::lexer::{self, ScanResult};
use cminus_syntax::parser::{self, ParseOutcome};
use cminus_syntax::render;

use crate::config::Artifact;
use crate::output::{OutputSink, SinkError};

/// Result of compiling one source text.
#[derive(Debug)]
pub struct Compilation {
    pub scan: ScanResult,
    pub outcome: ParseOutcome,
}

impl Compilation {
    /// Return `true` if either phase recorded a diagnostic.
    pub fn has_diagnostics(&self) -> bool {
        !self.scan.errors.is_empty() || !self.outcome.errors.is_empty()
    }

    /// Full text of one artifact.
    pub fn render(&self, artifact: Artifact) -> String {
        match artifact {
            Artifact::Tokens => render::tokens(&self.scan),
            Artifact::LexicalErrors => render::lexical_errors(&self.scan.errors),
            Artifact::SymbolTable => render::symbol_table(&self.scan.symbols),
            Artifact::ParseTree => render::parse_tree(&self.outcome.tree),
            Artifact::SyntaxErrors => render::syntax_errors(&self.outcome.errors),
        }
    }

    /// Write all five artifacts, in [`Artifact::ALL`] order.
    pub fn write_to(&self, sink: &mut impl OutputSink) -> Result<(), SinkError> {
        for artifact in Artifact::ALL {
            sink.write(artifact, &self.render(artifact))?;
        }
        Ok(())
    }

    /// Rich diagnostics with source context: lexical errors first, then syntax errors.
    pub fn reports(&self, file_name: &str, source: &str) -> Vec<miette::Report> {
        let src = diagnostics::report_source(file_name, source);
        let lexical = self
            .scan
            .errors
            .iter()
            .map(|err| miette::Report::new(LexicalReport::new(err, src.clone())));
        let syntax = self
            .outcome
            .errors
            .iter()
            .map(|err| miette::Report::new(SyntaxReport::new(err, src.clone())));
        lexical.chain(syntax).collect()
    }
}

/// Scan and parse `source`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn compile(source: &str) -> Compilation {
    let scan = lexer::lex(source);
    let outcome = parser::parse(&scan.parser_input());
    tracing::debug!(
        tokens = scan.tokens.len(),
        lexical_errors = scan.errors.len(),
        syntax_errors = outcome.errors.len(),
        "compiled"
    );
    Compilation { scan, outcome }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::MemorySink;

    #[test]
    fn test_clean_program_has_no_diagnostics() {
        let compilation = compile("int main(void) { return 0; }");
        assert!(!compilation.has_diagnostics());
        assert!(compilation.reports("input.txt", "").is_empty());
    }

    #[test]
    fn test_reports_order_lexical_before_syntax() {
        let source = "int x ( int a { return a @ ; }";
        let compilation = compile(source);
        let reports = compilation.reports("input.txt", source);
        let messages: Vec<String> = reports.iter().map(ToString::to_string).collect();
        assert_eq!(messages, ["Illegal character: `@`", "syntax error, missing )"]);
    }

    #[test]
    fn test_write_to_emits_every_artifact() {
        let compilation = compile("void f(void) { x = 1; }");
        let mut sink = MemorySink::new();
        compilation.write_to(&mut sink).expect("memory sink never fails");
        assert_eq!(sink.len(), 5);
        assert_eq!(sink.get(Artifact::LexicalErrors), Some("No lexical errors found.\n"));
        assert_eq!(sink.get(Artifact::SyntaxErrors), Some("No syntax errors found.\n"));
        assert!(sink.get(Artifact::SymbolTable).is_some_and(|table| table.ends_with("8. f\n9. x\n")));
    }
}
