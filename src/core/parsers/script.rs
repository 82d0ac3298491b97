use std::sync::Arc;

use swc_common::{FileName, GLOBALS, Globals, SourceMap, Span, Spanned};
use swc_ecma_ast::{Decl, Expr, ExprOrSpread, Lit, NewExpr, Pat, Script, Stmt};
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax};
use thiserror::Error;

/// The script block could not be parsed as JavaScript.
///
/// Fatal for a lookup: a malformed block means the page format changed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to parse inline script at {line}:{col}: {message}")]
pub struct ScriptParseError {
    pub message: String,
    /// 1-based line, 0 when the parser reported no position.
    pub line: usize,
    /// 1-based column, 0 when the parser reported no position.
    pub col: usize,
}

impl ScriptParseError {
    fn at(message: String, span: Span, source_map: &SourceMap) -> Self {
        let (line, col) = if span.is_dummy() {
            (0, 0)
        } else {
            let loc = source_map.lookup_char_pos(span.lo);
            (loc.line, loc.col.0 + 1)
        };
        Self { message, line, col }
    }
}

/// A parsed inline script.
///
/// Parse once, then query any number of variables against the same tree.
#[derive(Debug, Clone)]
pub struct ParsedScript {
    script: Script,
}

impl ParsedScript {
    /// Parse script source text (script goal, not module).
    ///
    /// Errors the parser recovered from are still reported as failures.
    pub fn parse(code: &str) -> Result<Self, ScriptParseError> {
        let source_map = Arc::new(SourceMap::default());

        GLOBALS.set(&Globals::new(), || {
            let source_file = source_map.new_source_file(
                FileName::Custom("inline-script".into()).into(),
                code.to_string(),
            );

            let syntax = Syntax::Es(EsSyntax::default());
            let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

            let script = parser.parse_script().map_err(|e| {
                ScriptParseError::at(e.kind().msg().into_owned(), e.span(), &source_map)
            })?;

            if let Some(e) = parser.take_errors().into_iter().next() {
                return Err(ScriptParseError::at(
                    e.kind().msg().into_owned(),
                    e.span(),
                    &source_map,
                ));
            }

            Ok(Self { script })
        })
    }

    /// String-literal arguments of `new Array(...)` assigned to `variable`.
    ///
    /// Only top-level declarations are considered. When the variable is
    /// declared more than once the last declaration wins. Returns an empty
    /// list when there is no such declaration.
    pub fn literal_list(&self, variable: &str) -> Vec<String> {
        let mut values = Vec::new();

        let declarators = self.script.body.iter().filter_map(|stmt| match stmt {
            Stmt::Decl(Decl::Var(var_decl)) => Some(&var_decl.decls),
            _ => None,
        });

        for decl in declarators.flatten() {
            let Pat::Ident(binding) = &decl.name else {
                continue;
            };
            if binding.id.sym.as_str() != variable {
                continue;
            }
            values = decl
                .init
                .as_deref()
                .and_then(as_array_construction)
                .map(string_arguments)
                .unwrap_or_default();
        }

        values
    }
}

/// Parse `code` and extract the literal list for one variable.
///
/// Convenience for a single lookup; use [`ParsedScript`] to query several
/// variables against one parse.
pub fn extract_literal_list(code: &str, variable: &str) -> Result<Vec<String>, ScriptParseError> {
    Ok(ParsedScript::parse(code)?.literal_list(variable))
}

fn as_array_construction(expr: &Expr) -> Option<&NewExpr> {
    match unwrap_parens(expr) {
        Expr::New(new_expr) => match unwrap_parens(&new_expr.callee) {
            Expr::Ident(ident) if ident.sym.as_str() == "Array" => Some(new_expr),
            _ => None,
        },
        _ => None,
    }
}

fn unwrap_parens(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(paren) => unwrap_parens(&paren.expr),
        _ => expr,
    }
}

/// Plain string-literal arguments in order; anything else is skipped.
fn string_arguments(new_expr: &NewExpr) -> Vec<String> {
    new_expr
        .args
        .iter()
        .flatten()
        .filter_map(|arg| match arg {
            ExprOrSpread { spread: None, expr } => match &**expr {
                // Lone surrogates become U+FFFD so the index is kept.
                Expr::Lit(Lit::Str(s)) => Some(s.value.to_string_lossy().into_owned()),
                _ => None,
            },
            _ => None,
        })
        .collect()
}
