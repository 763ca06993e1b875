//! Option-flag parsing.

/// Match options derived from a flag-character string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub multiline: bool,
    pub case_insensitive: bool,
}

impl Options {
    /// Parse a flag string: `m` enables multiline, `i` enables
    /// case-insensitive matching.
    ///
    /// Unrecognized characters are ignored rather than rejected, so parsing
    /// never fails. This keeps the flag surface forward-compatible; callers
    /// that want bad flags rejected must validate upstream.
    pub fn parse(flags: &str) -> Options {
        let mut options = Options::default();
        for ch in flags.chars() {
            match ch {
                'm' => options.multiline = true,
                'i' => options.case_insensitive = true,
                _ => {}
            }
        }
        options
    }
}
