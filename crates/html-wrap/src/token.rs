//! Tokens - the output of tokenizing a line of markup.

use std::fmt;

/// What a token was classified as while scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Markup element, text keeps the surrounding `<` and `>`
    Tag,

    /// Alphabetic run, possibly with one embedded hyphen
    Word,

    /// Digits with optional decimal point and signed exponent
    Number,

    /// A single punctuation character
    Punctuation,

    /// Verbatim content of a `<pre>` block
    PreformattedText,
}

/// A classified slice of the input. Tokens are never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        let text = text.into();
        debug_assert!(
            !matches!(kind, TokenKind::Word | TokenKind::Number) || !text.is_empty(),
            "empty {kind:?} token"
        );
        Self { kind, text }
    }

    pub fn tag(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Tag, text)
    }

    pub fn word(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Word, text)
    }

    pub fn number(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Number, text)
    }

    pub fn punctuation(c: char) -> Self {
        Self::new(TokenKind::Punctuation, c)
    }

    pub fn preformatted(text: impl Into<String>) -> Self {
        Self::new(TokenKind::PreformattedText, text)
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_tag(&self) -> bool {
        self.kind == TokenKind::Tag
    }

    /// A tag that was closed with `>` on the line it started on.
    pub fn is_terminated_tag(&self) -> bool {
        self.is_tag() && self.text.starts_with('<') && self.text.ends_with('>')
    }

    /// Width of the token in output columns.
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

const TOKENS_PER_ROW: usize = 5;

/// Format tokens for inspection, five per row:
///
/// ```text
///   [token 0]: <b> [token 1]: hello [token 2]: </b> ...
/// ```
pub fn dump_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i % TOKENS_PER_ROW == 0 {
            out.push_str("\n  ");
        }
        out.push_str(&format!("[token {i}]: {token} "));
    }
    out.push('\n');
    out
}
