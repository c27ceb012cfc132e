//! Output targets for the renderer.

use crate::tag::HeadingLevel;

/// A line-oriented destination for rendered text.
///
/// How bold, italic and heading styling looks is up to the implementation.
pub trait LineSink {
    /// Break forced by structure (`<p>`, `<br>`, `<pre>`, headings)
    fn print_break(&mut self);

    /// Break forced by wrapping
    fn println(&mut self);

    fn print(&mut self, text: &str);

    fn print_bold(&mut self, text: &str);

    fn print_italic(&mut self, text: &str);

    fn print_heading(&mut self, level: HeadingLevel, text: &str);

    fn print_preformatted_text(&mut self, text: &str);

    fn print_horizontal_rule(&mut self);
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn print_break(&mut self) {
        (**self).print_break()
    }

    fn println(&mut self) {
        (**self).println()
    }

    fn print(&mut self, text: &str) {
        (**self).print(text)
    }

    fn print_bold(&mut self, text: &str) {
        (**self).print_bold(text)
    }

    fn print_italic(&mut self, text: &str) {
        (**self).print_italic(text)
    }

    fn print_heading(&mut self, level: HeadingLevel, text: &str) {
        (**self).print_heading(level, text)
    }

    fn print_preformatted_text(&mut self, text: &str) {
        (**self).print_preformatted_text(text)
    }

    fn print_horizontal_rule(&mut self) {
        (**self).print_horizontal_rule()
    }
}

/// How [`TextSink`] renders styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SinkStyle {
    /// Text only, styling is dropped
    #[default]
    Plain,

    /// SGR escape sequences for terminals
    Ansi,
}

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const ITALIC: &str = "\x1b[3m";
const DIM: &str = "\x1b[2m";

/// SGR sequence per heading level, h1 first.
const HEADING_SGR: [&str; 6] = [
    "\x1b[1;4;95m",
    "\x1b[1;35m",
    "\x1b[1;36m",
    "\x1b[1;37m",
    "\x1b[4m",
    "\x1b[2m",
];

const RULE_CHAR: char = '-';

/// Renders into an in-memory string.
#[derive(Debug, Clone)]
pub struct TextSink {
    style: SinkStyle,
    rule_width: usize,
    out: String,

    /// Trailing spaces before this offset are content, not separators
    trim_floor: usize,
}

impl TextSink {
    pub fn new(style: SinkStyle) -> Self {
        Self {
            style,
            rule_width: 80,
            out: String::new(),
            trim_floor: 0,
        }
    }

    pub fn plain() -> Self {
        Self::new(SinkStyle::Plain)
    }

    pub fn ansi() -> Self {
        Self::new(SinkStyle::Ansi)
    }

    pub fn with_rule_width(mut self, width: usize) -> Self {
        self.rule_width = width;
        self
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }

    fn styled(&mut self, sgr: &str, text: &str) {
        // separators stay unstyled so line ends can be trimmed
        if self.style == SinkStyle::Plain || text.trim().is_empty() {
            self.out.push_str(text);
        } else {
            self.out.push_str(sgr);
            self.out.push_str(text);
            self.out.push_str(RESET);
        }
    }

    fn end_line(&mut self) {
        let keep = self.out[self.trim_floor..].trim_end_matches(' ').len();
        self.out.truncate(self.trim_floor + keep);
        self.out.push('\n');
        self.trim_floor = self.out.len();
    }
}

impl Default for TextSink {
    fn default() -> Self {
        Self::plain()
    }
}

impl LineSink for TextSink {
    fn print_break(&mut self) {
        self.end_line();
    }

    fn println(&mut self) {
        self.end_line();
    }

    fn print(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn print_bold(&mut self, text: &str) {
        self.styled(BOLD, text);
    }

    fn print_italic(&mut self, text: &str) {
        self.styled(ITALIC, text);
    }

    fn print_heading(&mut self, level: HeadingLevel, text: &str) {
        self.styled(HEADING_SGR[level.index()], text);
    }

    fn print_preformatted_text(&mut self, text: &str) {
        self.styled(DIM, text);
        self.trim_floor = self.out.len();
    }

    fn print_horizontal_rule(&mut self) {
        let rule: String = std::iter::repeat_n(RULE_CHAR, self.rule_width).collect();
        self.styled(DIM, &rule);
        self.end_line();
    }
}
