//! Capture-group name extraction.
//!
//! Group names come from two places: named groups written in the fragment
//! text itself, reported by the engine, and fragment names recorded by the
//! assembler. The latter are resolved to group numbers by walking the
//! pattern AST and matching capture groups against the byte offsets of the
//! assembler's inserted parentheses.

use std::convert::Infallible;

use regex_automata::PatternID;
use regex_automata::meta;
use regex_syntax::ast::{self, Ast, GroupKind};

use crate::syntax::Syntax;
use crate::{Error, Result};

/// Extract the capture-group count and the optional number-to-name map.
///
/// The map has one slot per group (1-based group numbers map to index 0).
/// A name may fill several slots, since duplicate fragment names are
/// legal. If no slot ends up named, the map is absent rather than empty.
pub(crate) fn group_names(
    regex: &meta::Regex,
    pattern: &str,
    marks: &[(usize, String)],
    syntax: Syntax,
) -> Result<(usize, Option<Vec<Option<String>>>)> {
    let info = regex.group_info();
    // group_len() counts the implicit whole-match group 0.
    let n_groups = info.group_len(PatternID::ZERO).saturating_sub(1);
    if n_groups == 0 {
        return Ok((0, None));
    }

    let mut names: Vec<Option<String>> = vec![None; n_groups];

    // Names the engine knows about, from (?<name>...) groups.
    for (index, name) in info.pattern_names(PatternID::ZERO).enumerate().skip(1) {
        if let Some(name) = name {
            names[index - 1] = Some(name.to_string());
        }
    }

    // Names carried by fragments. Fixed-syntax patterns are escaped
    // wholesale and have no groups at all, so marks only apply to ruby.
    if syntax == Syntax::Ruby && !marks.is_empty() {
        for (offset, number) in capture_offsets(pattern)? {
            if let Some((_, name)) = marks.iter().find(|(mark, _)| *mark == offset) {
                if let Some(slot) = names.get_mut(number - 1) {
                    *slot = Some(name.clone());
                }
            }
        }
    }

    if names.iter().any(Option::is_some) {
        Ok((n_groups, Some(names)))
    } else {
        Ok((n_groups, None))
    }
}

/// Byte offset of the opening parenthesis of every capture group in the
/// pattern, paired with its 1-based group number.
fn capture_offsets(pattern: &str) -> Result<Vec<(usize, usize)>> {
    let ast = ast::parse::Parser::new()
        .parse(pattern)
        .map_err(|e| Error::Compile(e.to_string()))?;

    match ast::visit(&ast, CaptureOffsets::default()) {
        Ok(offsets) => Ok(offsets),
        Err(never) => match never {},
    }
}

#[derive(Default)]
struct CaptureOffsets {
    offsets: Vec<(usize, usize)>,
}

impl ast::Visitor for CaptureOffsets {
    type Output = Vec<(usize, usize)>;
    type Err = Infallible;

    fn finish(self) -> std::result::Result<Self::Output, Infallible> {
        Ok(self.offsets)
    }

    fn visit_pre(&mut self, ast: &Ast) -> std::result::Result<(), Infallible> {
        if let Ast::Group(group) = ast {
            let number = match &group.kind {
                GroupKind::CaptureIndex(index) => Some(*index as usize),
                GroupKind::CaptureName { name, .. } => Some(name.index as usize),
                GroupKind::NonCapturing(_) => None,
            };
            if let Some(number) = number {
                self.offsets.push((group.span.start.offset, number));
            }
        }
        Ok(())
    }
}
