/// Parse a token stream into a concrete parse tree.
///
/// This is the main public entrypoint for parsing. It never fails: syntax errors are recovered by
/// assuming the missing terminal was present, and are returned alongside the complete tree.
///
/// ## Parameters
/// - `tokens`: Token stream produced by [`crate::lexer::ScanResult::parser_input`], ending in the
///   `$` sentinel.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> ParseOutcome {
    let outcome = Parser::new(tokens).parse();
    tracing::debug!(errors = outcome.errors.len(), "parse finished");
    outcome
}
