//! Pattern assembly from fragments.
//!
//! A pattern is supplied as an ordered sequence of fragments. Named
//! fragments are wrapped in capturing parentheses so they become numbered
//! groups; unnamed fragments are emitted verbatim. Fragments are joined in
//! input order with no separator, so group numbers follow fragment order.

use crate::encoding::Encoding;
use crate::{Error, Result};

/// One (optional name, text) unit of a composite pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub name: Option<String>,
    pub text: String,
    /// Declared encoding of the fragment text; consulted when the caller
    /// requests automatic encoding resolution.
    pub encoding: Encoding,
}

impl Fragment {
    pub fn new(text: impl Into<String>) -> Self {
        Fragment {
            name: None,
            text: text.into(),
            encoding: Encoding::Unspecified,
        }
    }

    pub fn named(name: impl Into<String>, text: impl Into<String>) -> Self {
        Fragment {
            name: Some(name.into()),
            text: text.into(),
            encoding: Encoding::Unspecified,
        }
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }
}

/// An assembled pattern string plus the positions of the parentheses the
/// assembler introduced for named fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Assembled {
    pub pattern: String,
    /// Byte offset of each inserted `(` in `pattern`, with the fragment
    /// name it carries. Offsets identify capture groups after parsing.
    pub marks: Vec<(usize, String)>,
}

/// Concatenate fragments into a single pattern string, wrapping each named
/// fragment in one pair of capturing parentheses. Empty names count as
/// absent.
pub(crate) fn assemble(fragments: &[Fragment]) -> Result<Assembled> {
    if fragments.is_empty() {
        return Err(Error::EmptyPattern);
    }

    let text_len: usize = fragments.iter().map(|f| f.text.len()).sum();
    let mut pattern = String::with_capacity(text_len + 2 * fragments.len());
    let mut marks = Vec::new();

    for fragment in fragments {
        match fragment.name.as_deref().filter(|name| !name.is_empty()) {
            Some(name) => {
                marks.push((pattern.len(), name.to_string()));
                pattern.push('(');
                pattern.push_str(&fragment.text);
                pattern.push(')');
            }
            None => pattern.push_str(&fragment.text),
        }
    }

    Ok(Assembled { pattern, marks })
}
