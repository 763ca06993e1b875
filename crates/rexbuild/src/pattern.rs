//! Compiled-pattern handles and the compilation pipeline.

use std::borrow::Cow;

use regex_automata::meta;

use crate::assemble::{Fragment, assemble};
use crate::compile::compile_with;
use crate::encoding::{Encoding, EncodingRequest, Text};
use crate::groups::group_names;
use crate::options::Options;
use crate::syntax::Syntax;
use crate::{Error, Result};

/// An immutable, compiled regular expression with its resolved metadata.
///
/// Handles are created by [`compile`] or [`PatternBuilder::build`] and own
/// the engine object until [`Pattern::release`] or drop, whichever comes
/// first. Compilation is a one-time cost; the handle can be shared for any
/// number of match operations. Metadata stays readable after release, but
/// engine access fails fast with [`Error::UseAfterRelease`].
#[derive(Debug, Clone)]
pub struct Pattern {
    engine: Option<meta::Regex>,
    pattern: String,
    options: String,
    syntax: Syntax,
    encoding: Encoding,
    group_count: usize,
    group_names: Option<Vec<Option<String>>>,
}

impl Pattern {
    /// The assembled pattern text.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The options flag string the pattern was compiled with.
    pub fn options(&self) -> &str {
        &self.options
    }

    pub fn syntax(&self) -> Syntax {
        self.syntax
    }

    /// The resolved encoding tag.
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Number of capture groups.
    pub fn group_count(&self) -> usize {
        self.group_count
    }

    /// Group-number-to-name mapping (index 0 holds group 1's name). Absent
    /// when no group carries a name.
    pub fn group_names(&self) -> Option<&[Option<String>]> {
        self.group_names.as_deref()
    }

    /// Access the underlying engine object for matching.
    ///
    /// Fails with [`Error::UseAfterRelease`] once the handle has been
    /// released.
    pub fn engine(&self) -> Result<&meta::Regex> {
        self.engine.as_ref().ok_or(Error::UseAfterRelease)
    }

    /// Release the engine object, returning its memory to the engine. The
    /// first call frees; later calls are no-ops. Dropping an unreleased
    /// handle performs the same release automatically.
    pub fn release(&mut self) {
        self.engine.take();
    }

    pub fn is_released(&self) -> bool {
        self.engine.is_none()
    }
}

/// Builder for [`Pattern`].
///
/// Defaults match the plain-text compile path: no option flags, automatic
/// encoding, ruby syntax.
pub struct PatternBuilder {
    fragments: Vec<Fragment>,
    options: String,
    encoding: String,
    syntax: String,
}

impl PatternBuilder {
    pub fn new(fragments: Vec<Fragment>) -> Self {
        PatternBuilder {
            fragments,
            options: String::new(),
            encoding: "auto".to_string(),
            syntax: "ruby".to_string(),
        }
    }

    pub fn with_options(mut self, flags: &str) -> Self {
        self.options = flags.to_string();
        self
    }

    pub fn with_encoding(mut self, request: &str) -> Self {
        self.encoding = request.to_string();
        self
    }

    pub fn with_syntax(mut self, name: &str) -> Self {
        self.syntax = name.to_string();
        self
    }

    /// Run the full pipeline: assemble the fragments, resolve settings,
    /// compile, and extract group names.
    pub fn build(self) -> Result<Pattern> {
        let assembled = assemble(&self.fragments)?;
        let options = Options::parse(&self.options);
        let syntax = Syntax::from_name(&self.syntax)?;

        // "auto" takes the declared encoding of the first fragment: on
        // this path the pattern itself is authoritative, not any search
        // text it may later be matched against.
        let encoding = match EncodingRequest::parse(&self.encoding) {
            EncodingRequest::Auto => self
                .fragments
                .first()
                .map(|fragment| fragment.encoding)
                .unwrap_or_default(),
            EncodingRequest::Tag(tag) => tag,
        };

        let engine = compile_with(&assembled.pattern, &options, encoding, syntax)?;
        let (group_count, names) =
            group_names(&engine, &assembled.pattern, &assembled.marks, syntax)?;

        Ok(Pattern {
            engine: Some(engine),
            pattern: assembled.pattern,
            options: self.options,
            syntax,
            encoding,
            group_count,
            group_names: names,
        })
    }
}

/// Compile a fragment sequence into a [`Pattern`].
///
/// `options` is a flag string (see [`Options::parse`]), `encoding` an
/// encoding request token (see [`EncodingRequest::parse`]) and `syntax` a
/// dialect name (see [`Syntax::from_name`]).
pub fn compile(
    fragments: &[Fragment],
    options: &str,
    encoding: &str,
    syntax: &str,
) -> Result<Pattern> {
    PatternBuilder::new(fragments.to_vec())
        .with_options(options)
        .with_encoding(encoding)
        .with_syntax(syntax)
        .build()
}

/// A pattern argument that is either already compiled or still plain text.
///
/// Resolved exactly once at this boundary; nothing downstream inspects
/// which kind of pattern it got.
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    Compiled(&'a Pattern),
    Text(&'a str),
}

/// Obtain a compiled pattern from a target that may still be plain text.
///
/// Plain text is compiled with default options and ruby syntax; its
/// encoding is taken from the subject texts it will be matched against,
/// since on this path the subject side is authoritative.
pub fn retrieve<'a>(target: Target<'a>, subject: &[Text]) -> Result<Cow<'a, Pattern>> {
    match target {
        Target::Compiled(pattern) => Ok(Cow::Borrowed(pattern)),
        Target::Text(text) => {
            let encoding = Encoding::scan(subject);
            let fragment = Fragment::new(text).with_encoding(encoding);
            let pattern = PatternBuilder::new(vec![fragment]).build()?;
            Ok(Cow::Owned(pattern))
        }
    }
}
