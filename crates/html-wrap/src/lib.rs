//! Tokenizer and line-wrapping renderer for a small HTML subset.
//!
//! Markup is tokenized line by line into tags, words, numbers and
//! punctuation, then rendered as wrapped text with bold, italic, heading
//! and preformatted modes.

mod error;
mod renderer;
mod sink;
mod state;
mod tag;
mod token;
mod tokenizer;

pub use error::Error;
pub use renderer::{render, Renderer};
pub use sink::{LineSink, SinkStyle, TextSink};
pub use state::{Mode, RenderConfig, RenderState, TagEffect};
pub use tag::{HeadingLevel, Tag};
pub use token::{dump_tokens, Token, TokenKind};
pub use tokenizer::{tokenize, tokenize_document, DocumentTokenizer, TokenizerState, PUNCTUATION};
