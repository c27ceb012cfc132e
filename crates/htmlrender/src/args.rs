use std::collections::BTreeSet;
use std::path::PathBuf;

use html_wrap::RenderConfig;

use crate::{CliOptions, Error};

pub const USAGE: &str = "\
usage: htmlrender [OPTIONS] <input>

  -o, --output <file>   write rendered text to <file> instead of stdout
  -w, --width <n>       base wrap width (default 80)
      --plain           no ANSI styling
      --tokens          print the token dump instead of rendering
      --debug           debug level logging
  -h, --help            show this message";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub config: RenderConfig,
    pub options: CliOptions,
}

impl Args {
    /// Parse arguments (without the program name). Returns the set of
    /// unrecognized arguments alongside.
    pub fn parse(args: &[String]) -> Result<(Self, BTreeSet<String>), Error> {
        let mut unrecognized_args = BTreeSet::new();
        let mut res = Args::default();

        let mut i = 0;
        let len = args.len();
        while i < len {
            let arg = &args[i];

            if arg == "--plain" {
                res.options.set(CliOptions::Plain, true);
            } else if arg == "--tokens" {
                res.options.set(CliOptions::DumpTokens, true);
            } else if arg == "--debug" {
                res.options.set(CliOptions::Debug, true);
            } else if arg == "-h" || arg == "--help" {
                res.options.set(CliOptions::Help, true);
            } else if arg == "-o" || arg == "--output" {
                i += 1;
                let Some(path) = args.get(i) else {
                    return Err(Error::usage(format!("{arg} needs a file argument")));
                };
                res.output = Some(PathBuf::from(path));
            } else if arg == "-w" || arg == "--width" {
                i += 1;
                let Some(width) = args.get(i) else {
                    return Err(Error::usage(format!("{arg} needs a number")));
                };
                let width: usize = width
                    .parse()
                    .map_err(|_| Error::usage(format!("invalid width '{width}'")))?;
                res.config = res
                    .config
                    .with_base_width(width)
                    .map_err(|err| Error::usage(err.to_string()))?;
            } else if arg.starts_with('-') && arg != "-" {
                unrecognized_args.insert(arg.clone());
            } else if res.input.is_none() {
                res.input = Some(PathBuf::from(arg));
            } else {
                unrecognized_args.insert(arg.clone());
            }

            i += 1;
        }

        Ok((res, unrecognized_args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Result<(Args, BTreeSet<String>), Error> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        Args::parse(&args)
    }

    #[test]
    fn test_parse_input_and_flags() {
        let (args, unrecognized) = parse(&["--plain", "page.html", "--tokens"]).unwrap();
        assert_eq!(args.input, Some(PathBuf::from("page.html")));
        assert!(args.options.contains(CliOptions::Plain | CliOptions::DumpTokens));
        assert!(!args.options.contains(CliOptions::Debug));
        assert!(unrecognized.is_empty());
    }

    #[test]
    fn test_parse_output_and_width() {
        let (args, _) = parse(&["-o", "out.txt", "--width", "60", "in.html"]).unwrap();
        assert_eq!(args.output, Some(PathBuf::from("out.txt")));
        assert_eq!(args.config.base_width, 60);
        assert_eq!(args.config.heading_base_width, 40);
    }

    #[test]
    fn test_parse_collects_unrecognized() {
        let (args, unrecognized) = parse(&["a.html", "b.html", "--shiny"]).unwrap();
        assert_eq!(args.input, Some(PathBuf::from("a.html")));
        assert_eq!(
            unrecognized.into_iter().collect::<Vec<_>>(),
            vec!["--shiny".to_string(), "b.html".to_string()]
        );
    }

    #[test]
    fn test_parse_bad_width() {
        assert!(matches!(parse(&["--width", "wide"]), Err(Error::Usage(_))));
        assert!(matches!(parse(&["--width", "0"]), Err(Error::Usage(_))));
        assert!(matches!(parse(&["--width"]), Err(Error::Usage(_))));
    }

    #[test]
    fn test_parse_missing_output_path() {
        assert!(matches!(parse(&["in.html", "-o"]), Err(Error::Usage(_))));
    }
}
