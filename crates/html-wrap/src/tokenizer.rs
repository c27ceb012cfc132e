//! Line tokenizer for the supported HTML subset.
//!
//! Markup arrives one line at a time. Comments and `<pre>` blocks may span
//! lines, so the caller keeps a [`TokenizerState`] between calls.

use tracing::debug;

use crate::token::{Token, TokenKind};

const COMMENT_OPEN: &str = "<!--";
const COMMENT_CLOSE: &str = "-->";
const PRE_OPEN: &str = "<pre>";
const PRE_CLOSE: &str = "</pre>";

/// Characters emitted as standalone punctuation tokens.
pub const PUNCTUATION: [char; 13] = [
    '.', ',', ';', ':', '(', ')', '?', '!', '=', '&', '~', '+', '-',
];

/// Block state carried from one line to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TokenizerState {
    /// Not nested in a block
    #[default]
    Normal,

    /// Inside `<!-- ... -->`, waiting for the closing marker
    InComment,

    /// Inside `<pre> ... </pre>`, waiting for the closing tag
    InPreformat,
}

/// Tokenize one line of markup, updating `state` for the next line.
pub fn tokenize(line: &str, state: &mut TokenizerState) -> Vec<Token> {
    let mut scanner = LineScanner::new(line);
    scanner.run(state);
    scanner.tokens
}

/// Tokenize a whole document, line by line.
pub fn tokenize_document(text: &str) -> Vec<Token> {
    let mut doc = DocumentTokenizer::new();
    doc.push_lines(text.lines());
    doc.finish()
}

/// Accumulates the tokens of every line of one document.
#[derive(Debug, Default)]
pub struct DocumentTokenizer {
    state: TokenizerState,
    tokens: Vec<Token>,
    lines: usize,
}

impl DocumentTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize the next line of the document.
    pub fn push_line(&mut self, line: &str) {
        let before = self.state;
        let mut tokens = tokenize(line, &mut self.state);
        self.lines += 1;

        if before != self.state {
            debug!(line = self.lines, from = ?before, to = ?self.state, "tokenizer state changed");
        }

        self.tokens.append(&mut tokens);
    }

    pub fn push_lines<'a>(&mut self, lines: impl IntoIterator<Item = &'a str>) {
        for line in lines {
            self.push_line(line);
        }
    }

    pub fn state(&self) -> TokenizerState {
        self.state
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// End the document and take its tokens. A block left open is dropped.
    pub fn finish(self) -> Vec<Token> {
        if self.state != TokenizerState::Normal {
            debug!(state = ?self.state, lines = self.lines, "document ended inside an open block");
        }
        self.tokens
    }
}

/// Word or number being accumulated.
struct Pending {
    kind: TokenKind,
    text: String,
    hyphen_used: bool,
}

impl Pending {
    fn new(kind: TokenKind, first: char) -> Self {
        Self {
            kind,
            text: first.to_string(),
            hyphen_used: false,
        }
    }

    fn last_char(&self) -> Option<char> {
        self.text.chars().last()
    }
}

struct LineScanner<'a> {
    line: &'a str,

    /// Byte offset of the next unexamined character
    pos: usize,

    pending: Option<Pending>,
    tokens: Vec<Token>,
}

impl<'a> LineScanner<'a> {
    fn new(line: &'a str) -> Self {
        Self {
            line,
            pos: 0,
            pending: None,
            tokens: Vec::new(),
        }
    }

    fn run(&mut self, state: &mut TokenizerState) {
        // keep blank lines inside a preformatted block
        if self.line.is_empty() && *state == TokenizerState::InPreformat {
            self.tokens.push(Token::preformatted(""));
            return;
        }

        while self.pos < self.line.len() {
            match *state {
                TokenizerState::InComment => self.skip_comment(state),
                TokenizerState::InPreformat => self.take_preformatted(state),
                TokenizerState::Normal => self.scan(state),
            }
        }

        self.flush();
    }

    fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }

    fn skip_comment(&mut self, state: &mut TokenizerState) {
        match self.rest().find(COMMENT_CLOSE) {
            Some(end) => {
                self.pos += end + COMMENT_CLOSE.len();
                *state = TokenizerState::Normal;
            }
            None => self.pos = self.line.len(),
        }
    }

    fn take_preformatted(&mut self, state: &mut TokenizerState) {
        let rest = self.rest();
        match find_ignore_case(rest, PRE_CLOSE) {
            Some(end) => {
                if end > 0 {
                    self.tokens.push(Token::preformatted(&rest[..end]));
                }
                self.tokens
                    .push(Token::tag(&rest[end..end + PRE_CLOSE.len()]));
                self.pos += end + PRE_CLOSE.len();
                *state = TokenizerState::Normal;
            }
            None => {
                self.tokens.push(Token::preformatted(rest));
                self.pos = self.line.len();
            }
        }
    }

    /// Examine one character outside of any block.
    fn scan(&mut self, state: &mut TokenizerState) {
        let rest = self.rest();

        if starts_with_ignore_case(rest, COMMENT_OPEN) {
            self.flush();
            self.pos += COMMENT_OPEN.len();
            *state = TokenizerState::InComment;
            return;
        }

        if starts_with_ignore_case(rest, PRE_OPEN) {
            self.flush();
            self.tokens.push(Token::tag(&rest[..PRE_OPEN.len()]));
            self.pos += PRE_OPEN.len();
            *state = TokenizerState::InPreformat;
            return;
        }

        let Some(c) = rest.chars().next() else {
            return;
        };
        let next = rest[c.len_utf8()..].chars().next();

        if self.in_number() {
            if self.extends_number(c) {
                self.push_char(c);
            } else {
                // end of number, `c` is examined again on the next step
                self.flush();
            }
            return;
        }

        if c == '<' {
            self.flush();
            self.take_tag();
        } else if c.is_alphabetic() {
            match self.pending.as_mut() {
                Some(word) => word.text.push(c),
                None => self.pending = Some(Pending::new(TokenKind::Word, c)),
            }
            self.pos += c.len_utf8();
        } else if c == '-' && self.can_absorb_hyphen(next) {
            if let Some(word) = self.pending.as_mut() {
                word.text.push(c);
                word.hyphen_used = true;
            }
            self.pos += 1;
        } else if c.is_ascii_digit() || (c == '-' && next.is_some_and(|n| n.is_ascii_digit())) {
            self.flush();
            self.pending = Some(Pending::new(TokenKind::Number, c));
            self.pos += 1;
        } else if PUNCTUATION.contains(&c) {
            self.flush();
            self.tokens.push(Token::punctuation(c));
            self.pos += 1;
        } else {
            self.flush();
            self.pos += c.len_utf8();
        }
    }

    /// Capture through the closing `>`, or to end of line if there is none.
    fn take_tag(&mut self) {
        let rest = self.rest();
        let end = rest.find('>').map(|i| i + 1).unwrap_or(rest.len());
        self.tokens.push(Token::tag(&rest[..end]));
        self.pos += end;
    }

    fn in_number(&self) -> bool {
        matches!(&self.pending, Some(p) if p.kind == TokenKind::Number)
    }

    fn extends_number(&self, c: char) -> bool {
        match c {
            '0'..='9' | '.' | 'e' | 'E' => true,
            '-' => matches!(
                self.pending.as_ref().and_then(Pending::last_char),
                Some('e' | 'E')
            ),
            _ => false,
        }
    }

    /// One hyphen per word, and only between two letters.
    fn can_absorb_hyphen(&self, next: Option<char>) -> bool {
        let Some(word) = &self.pending else {
            return false;
        };

        word.kind == TokenKind::Word
            && !word.hyphen_used
            && word.last_char().is_some_and(char::is_alphabetic)
            && next.is_some_and(char::is_alphabetic)
    }

    fn push_char(&mut self, c: char) {
        if let Some(pending) = self.pending.as_mut() {
            pending.text.push(c);
        }
        self.pos += c.len_utf8();
    }

    fn flush(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.tokens.push(Token::new(pending.kind, pending.text));
        }
    }
}

fn starts_with_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack
        .as_bytes()
        .get(..needle.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(needle.as_bytes()))
}

/// Byte offset of the first ASCII case-insensitive match of `needle`.
fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}
