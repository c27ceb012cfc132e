//! Renders a token sequence as wrapped, styled text.

use tracing::trace;

use crate::sink::LineSink;
use crate::state::{Mode, RenderConfig, RenderState, TagEffect};
use crate::tag::Tag;
use crate::token::{Token, TokenKind};

/// Token texts that attach to the previous token without a space.
const NO_SPACE_BEFORE: [&str; 14] = [
    ".", ",", ";", "(", ")", "?", "!", "=", "&", "~", "+", ":", "-", "</q>",
];

/// Render a whole document into `sink` with the default widths.
pub fn render(tokens: &[Token], sink: &mut impl LineSink) {
    Renderer::new(sink).render(tokens);
}

/// Drives a [`LineSink`] from tokens, one token of lookahead.
pub struct Renderer<S> {
    sink: S,
    state: RenderState,
}

impl<S: LineSink> Renderer<S> {
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, RenderConfig::default())
    }

    pub fn with_config(sink: S, config: RenderConfig) -> Self {
        Self {
            sink,
            state: RenderState::new(config),
        }
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Render tokens in order. The mode active at the end is kept.
    pub fn render(&mut self, tokens: &[Token]) {
        for (i, token) in tokens.iter().enumerate() {
            self.render_token(token, tokens.get(i + 1));
        }
    }

    fn render_token(&mut self, token: &Token, next: Option<&Token>) {
        match token.kind() {
            TokenKind::Tag => self.render_tag(token),
            TokenKind::PreformattedText => {
                self.sink.print_preformatted_text(token.text());
                self.sink.print_break();
                self.state.end_line();
            }
            TokenKind::Word | TokenKind::Number | TokenKind::Punctuation => {
                self.render_word(token, next)
            }
        }
    }

    fn render_tag(&mut self, token: &Token) {
        let Some(tag) = Tag::parse(token.text()) else {
            trace!(tag = token.text(), "ignoring unrecognized tag");
            return;
        };

        match self.state.apply_tag(tag) {
            TagEffect::None => {}
            TagEffect::Break => self.sink.print_break(),
            TagEffect::Rule => {
                self.sink.print_break();
                self.sink.print_horizontal_rule();
            }
            TagEffect::Literal(text) => self.sink.print(text),
        }
    }

    fn render_word(&mut self, token: &Token, next: Option<&Token>) {
        if self.state.place_word(token.width()) {
            trace!(word = token.text(), width = self.state.column_width(), "wrapping");
            self.sink.println();
        }

        self.emit(token.text());

        if next.is_some_and(space_before) {
            // only headings style the separator
            match self.state.mode() {
                Mode::Header(level) => self.sink.print_heading(level, " "),
                _ => self.sink.print(" "),
            }
        }
    }

    fn emit(&mut self, text: &str) {
        match self.state.mode() {
            Mode::Bold => self.sink.print_bold(text),
            Mode::Italic => self.sink.print_italic(text),
            Mode::Header(level) => self.sink.print_heading(level, text),
            Mode::Default | Mode::Preformatted => self.sink.print(text),
        }
    }
}

fn space_before(token: &Token) -> bool {
    !NO_SPACE_BEFORE
        .iter()
        .any(|text| token.text().eq_ignore_ascii_case(text))
}
