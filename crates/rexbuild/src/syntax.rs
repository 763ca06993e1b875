//! Syntax dialect selection.

use crate::{Error, Result};

/// The metacharacter rule set a pattern is interpreted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    /// Default dialect, with `\d`, `\s` and `\w` matching across scripts
    /// rather than ASCII only (when the pattern encoding allows it).
    Ruby,
    /// Literal dialect: every character matches itself.
    Fixed,
}

impl Syntax {
    /// Resolve a dialect name. Unknown names are a hard error carrying the
    /// offending name for diagnostics.
    pub fn from_name(name: &str) -> Result<Syntax> {
        match name {
            "ruby" => Ok(Syntax::Ruby),
            "fixed" => Ok(Syntax::Fixed),
            _ => Err(Error::InvalidSyntax(name.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Syntax::Ruby => "ruby",
            Syntax::Fixed => "fixed",
        }
    }
}
