//! Command line front end for `html-wrap`: reads a markup file, renders it
//! as wrapped text and writes it to stdout or a file.

mod app;
mod args;
mod error;
mod file_utils;
mod logging;
mod options;

pub use app::{render_text, run};
pub use args::{Args, USAGE};
pub use error::{Error, EXIT_READ, EXIT_USAGE, EXIT_WRITE};
pub use logging::{setup_logging, LOG_DIR_ENV};
pub use options::CliOptions;

#[cfg(test)]
mod tests {
    use super::*;
    use html_wrap::{tokenize_document, RenderConfig, SinkStyle};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_text_ends_with_newline() {
        let tokens = tokenize_document("<p>Hello <b>there</b>.");
        let text = render_text(&tokens, RenderConfig::default(), SinkStyle::Plain);
        assert_eq!(text, "\nHello there .\n");
    }

    #[test]
    fn test_render_text_empty_document() {
        let text = render_text(&[], RenderConfig::default(), SinkStyle::Plain);
        assert_eq!(text, "");
    }

    #[test]
    fn test_run_without_input_is_usage_error() {
        let err = run(&Args::default()).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_USAGE);
    }

    #[test]
    fn test_run_missing_file_is_read_error() {
        let args = Args {
            input: Some("/definitely/not/here.html".into()),
            ..Args::default()
        };
        let err = run(&args).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
        assert_eq!(err.exit_code(), EXIT_READ);
    }
}
