//! Render state machine: formatting mode, wrap width and output column.

use crate::error::Error;
use crate::tag::{HeadingLevel, Tag};

/// The active formatting context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Default,
    Bold,
    Italic,
    Preformatted,
    Header(HeadingLevel),
}

/// Wrap widths used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Wrap limit outside of headings
    pub base_width: usize,

    /// Wrap limit inside `<h1>`
    pub heading_base_width: usize,

    /// Added to the limit for each heading level below 1
    pub heading_width_step: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            base_width: 80,
            heading_base_width: 40,
            heading_width_step: 10,
        }
    }
}

impl RenderConfig {
    pub fn with_base_width(mut self, width: usize) -> Result<Self, Error> {
        if width == 0 {
            return Err(Error::ZeroWidth);
        }
        self.base_width = width;
        Ok(self)
    }

    pub fn heading_width(&self, level: HeadingLevel) -> usize {
        self.heading_base_width + self.heading_width_step * level.index()
    }
}

/// Output the sink owes after a tag was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagEffect {
    /// State change only
    None,

    /// End the current line
    Break,

    /// End the current line and draw a horizontal rule
    Rule,

    /// Print literal text outside of wrap accounting
    Literal(&'static str),
}

/// Mutable state threaded through one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderState {
    config: RenderConfig,
    mode: Mode,
    column_width: usize,
    line_column: usize,
}

impl RenderState {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            mode: Mode::Default,
            column_width: config.base_width,
            line_column: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn column_width(&self) -> usize {
        self.column_width
    }

    pub fn line_column(&self) -> usize {
        self.line_column
    }

    /// Transition on a recognized tag.
    pub fn apply_tag(&mut self, tag: Tag) -> TagEffect {
        match tag {
            Tag::Paragraph | Tag::ParagraphEnd | Tag::LineBreak | Tag::PreEnd => {
                self.mode = Mode::Default;
                self.end_line();
                TagEffect::Break
            }
            Tag::Pre => {
                self.mode = Mode::Preformatted;
                self.end_line();
                TagEffect::Break
            }
            Tag::Bold => self.set_mode(Mode::Bold),
            Tag::Italic => self.set_mode(Mode::Italic),
            Tag::BoldEnd | Tag::ItalicEnd => self.set_mode(Mode::Default),
            Tag::Quote => TagEffect::Literal("\""),
            Tag::QuoteEnd => TagEffect::Literal("\" "),
            Tag::HorizontalRule => {
                self.end_line();
                TagEffect::Rule
            }
            Tag::Heading(level) => {
                self.mode = Mode::Header(level);
                self.column_width = self.config.heading_width(level);
                self.end_line();
                TagEffect::Break
            }
            Tag::HeadingEnd(_) => {
                self.mode = Mode::Default;
                self.column_width = self.config.base_width;
                TagEffect::None
            }
        }
    }

    /// Account for a word of `width` columns. Returns true when the word
    /// has to start a new line first, which holds even at column 0.
    pub fn place_word(&mut self, width: usize) -> bool {
        let wrap = self.line_column + width > self.column_width;
        if wrap {
            self.end_line();
        }
        self.line_column += width + 1;
        wrap
    }

    pub fn end_line(&mut self) {
        self.line_column = 0;
    }

    fn set_mode(&mut self, mode: Mode) -> TagEffect {
        self.mode = mode;
        TagEffect::None
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}
