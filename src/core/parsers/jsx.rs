use std::sync::Arc;

use swc_common::{FileName, Globals, SourceMap, SourceMapper, Span, Spanned};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax, error::Error as SyntaxError};

/// A source unit swc could not turn into a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub file_path: String,
    /// 1-based line of the first syntax error, when swc reported a position.
    pub line: Option<usize>,
    pub message: String,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(
                f,
                "Failed to parse {}:{}: {}",
                self.file_path, line, self.message
            ),
            None => write!(f, "Failed to parse {}: {}", self.file_path, self.message),
        }
    }
}

impl std::error::Error for ParseError {}

pub struct ParsedJSX {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
}

/// Parse JS/JSX/TS/TSX source code string into an AST.
///
/// The TSX grammar is used for every file so type annotations and inline markup
/// are accepted together. Errors swc recovers from are still treated as failures.
pub fn parse_jsx_source(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<ParsedJSX, ParseError> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: true,
            decorators: true,
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        let module = parser
            .parse_module()
            .map_err(|e| to_parse_error(&source_map, file_path, e))?;

        if let Some(e) = parser.take_errors().into_iter().next() {
            return Err(to_parse_error(&source_map, file_path, e));
        }

        Ok(ParsedJSX { module, source_map })
    })
}

fn to_parse_error(source_map: &SourceMap, file_path: &str, err: SyntaxError) -> ParseError {
    ParseError {
        file_path: file_path.to_string(),
        line: line_of(source_map, err.span()),
        message: err.kind().msg().into_owned(),
    }
}

/// 1-based line where `span` starts, `None` for spans without a position.
pub fn line_of(source_map: &SourceMap, span: Span) -> Option<usize> {
    if span.is_dummy() {
        return None;
    }
    Some(source_map.lookup_char_pos(span.lo).line)
}

/// Raw source text covered by `span`, or an empty string if it can't be recovered.
pub fn snippet_of(source_map: &SourceMap, span: Span) -> String {
    if span.is_dummy() {
        return String::new();
    }
    source_map.span_to_snippet(span).unwrap_or_default()
}
