use std::io::IsTerminal;

use html_wrap::{dump_tokens, tokenize_document, RenderConfig, Renderer, SinkStyle, TextSink, Token};
use tracing::{debug, info};

use crate::file_utils::{read_document, write_document, write_stdout};
use crate::{Args, CliOptions, Error};

/// Read, tokenize and render the input named by `args`.
pub fn run(args: &Args) -> Result<(), Error> {
    let Some(input) = &args.input else {
        return Err(Error::usage("missing input file"));
    };

    let text = read_document(input)?;
    info!(path = %input.display(), bytes = text.len(), "read document");

    let tokens = tokenize_document(&text);
    debug!(tokens = tokens.len(), "tokenized document");

    let output = if args.options.contains(CliOptions::DumpTokens) {
        dump_tokens(&tokens)
    } else {
        render_text(&tokens, args.config, sink_style(args))
    };

    match &args.output {
        Some(path) => {
            write_document(path, &output)?;
            info!(path = %path.display(), "wrote output");
            Ok(())
        }
        None => write_stdout(&output),
    }
}

/// Render tokens to a string that ends with a newline.
pub fn render_text(tokens: &[Token], config: RenderConfig, style: SinkStyle) -> String {
    let sink = TextSink::new(style).with_rule_width(config.base_width);
    let mut renderer = Renderer::with_config(sink, config);
    renderer.render(tokens);

    let mut text = renderer.into_sink().into_string();
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

/// ANSI styling only for a terminal on stdout.
fn sink_style(args: &Args) -> SinkStyle {
    if args.options.contains(CliOptions::Plain)
        || args.output.is_some()
        || !std::io::stdout().is_terminal()
    {
        SinkStyle::Plain
    } else {
        SinkStyle::Ansi
    }
}
