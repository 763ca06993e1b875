//! Encoding tags and resolution.
//!
//! Pattern fragments and subject text carry a declared encoding tag, and
//! callers request an encoding with a loosely-spelled token. Resolution has
//! two shapes: an explicit token resolves directly, while `"auto"` defers
//! to the declared tag of whichever text is authoritative for the call
//! (the pattern itself when compiling, the subject text when a plain
//! string stands in for a compiled pattern).

/// The byte-interpretation scheme applied to pattern and subject text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Latin1,
    #[default]
    Unspecified,
}

impl Encoding {
    /// Human-readable label, as exposed on compiled-pattern metadata.
    pub fn label(self) -> &'static str {
        match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Latin1 => "latin1",
            Encoding::Unspecified => "unknown",
        }
    }

    /// Infer an encoding from subject text: the first element declared as
    /// UTF-8 or Latin-1 wins; otherwise the encoding stays unspecified.
    pub fn scan(texts: &[Text]) -> Encoding {
        texts
            .iter()
            .map(|text| text.encoding)
            .find(|encoding| matches!(encoding, Encoding::Utf8 | Encoding::Latin1))
            .unwrap_or(Encoding::Unspecified)
    }
}

/// A requested encoding, parsed from a caller-supplied token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingRequest {
    /// Defer to the declared encoding of the authoritative text.
    Auto,
    Tag(Encoding),
}

impl EncodingRequest {
    /// Parse a request token. Matching is case-insensitive, and both
    /// `"utf8"` and `"utf-8"` spellings are accepted. Unrecognized tokens
    /// map to the unspecified encoding rather than failing.
    pub fn parse(token: &str) -> EncodingRequest {
        if token.eq_ignore_ascii_case("auto") {
            EncodingRequest::Auto
        } else if token.eq_ignore_ascii_case("utf8") || token.eq_ignore_ascii_case("utf-8") {
            EncodingRequest::Tag(Encoding::Utf8)
        } else if token.eq_ignore_ascii_case("latin1") {
            EncodingRequest::Tag(Encoding::Latin1)
        } else {
            EncodingRequest::Tag(Encoding::Unspecified)
        }
    }
}

/// Subject text with its declared encoding tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub content: String,
    pub encoding: Encoding,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Text {
            content: content.into(),
            encoding: Encoding::Unspecified,
        }
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }
}
