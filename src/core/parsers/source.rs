use std::{path::Path, sync::Arc};

use swc_common::{FileName, Globals, SourceMap, Spanned};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

use crate::core::SyncError;

/// Pick parser flags from the file extension.
///
/// `.ts` files are parsed without JSX so that `<T>value` casts keep working.
/// Everything else is parsed as TSX, which also accepts plain JS and JSX.
pub fn syntax_for(file_path: &Path) -> Syntax {
    let is_plain_ts = file_path.extension().and_then(|e| e.to_str()) == Some("ts");
    Syntax::Typescript(TsSyntax {
        tsx: !is_plain_ts,
        decorators: true,
        ..Default::default()
    })
}

/// Parse source text into a module.
///
/// Recoverable parser errors are treated as failures as well: a file the parser
/// had to patch up may have lost translation calls.
pub fn parse_source(code: String, file_path: &Path) -> Result<Module, SyncError> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_map: Arc<SourceMap> = Arc::default();
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let mut parser = Parser::new(syntax_for(file_path), StringInput::from(&*source_file), None);

        let parse_error = |err: swc_ecma_parser::error::Error| SyncError::Parse {
            path: file_path.to_path_buf(),
            line: source_map.lookup_char_pos(err.span().lo).line,
            message: err.kind().msg().to_string(),
        };

        let module = parser.parse_module().map_err(parse_error)?;
        if let Some(err) = parser.take_errors().into_iter().next() {
            return Err(parse_error(err));
        }

        Ok(module)
    })
}
