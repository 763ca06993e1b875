//! Engine-facing pattern compilation.
//!
//! Translates resolved options, encoding and syntax into the engine's
//! configuration and converts engine diagnostics into crate errors.

use std::borrow::Cow;

use regex_automata::meta;
use regex_automata::util::syntax;

use crate::encoding::Encoding;
use crate::options::Options;
use crate::syntax::Syntax;
use crate::{Error, Result};

/// Compile an assembled pattern with the given settings.
///
/// Under the fixed dialect the whole pattern string is escaped first, so
/// every metacharacter (including assembler-inserted parentheses) matches
/// literally. Under UTF-8 the `\d`/`\s`/`\w` classes match across scripts;
/// under Latin-1 or an unspecified encoding the engine runs byte-oriented
/// with ASCII classes.
pub(crate) fn compile_with(
    pattern: &str,
    options: &Options,
    encoding: Encoding,
    syntax: Syntax,
) -> Result<meta::Regex> {
    let source = match syntax {
        Syntax::Ruby => Cow::Borrowed(pattern),
        Syntax::Fixed => Cow::Owned(regex_syntax::escape(pattern)),
    };

    let unicode = encoding == Encoding::Utf8;
    let config = syntax::Config::new()
        .multi_line(options.multiline)
        .case_insensitive(options.case_insensitive)
        .unicode(unicode)
        .utf8(unicode);

    meta::Regex::builder()
        .syntax(config)
        .build(&source)
        .map_err(|e| Error::Compile(e.to_string()))
}
