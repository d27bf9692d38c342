//! CLI argument definitions via clap derive.

use clap::{ArgAction, Parser, ValueEnum};
use fruit_core::{OutputFormat, Url, DEFAULT_BASE_URL};

/// Look up nutrition facts for a fruit.
#[derive(Debug, Parser)]
#[command(
    name = "fruitlookup",
    about = "Look up fruit nutrition facts from the FruityVice API",
    version
)]
pub struct Cli {
    /// Fruit name, e.g. "banana". Case and surrounding whitespace are ignored.
    pub fruit: String,

    /// Output format.
    #[arg(long, value_name = "FORMAT", default_value = "human")]
    pub format: FormatArg,

    /// API endpoint the fruit name is appended to.
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: Url,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS", default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Log request details to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Five labelled lines.
    Human,
    /// Pretty-printed JSON.
    Machine,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Human => OutputFormat::Human,
            FormatArg::Machine => OutputFormat::Machine,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["fruitlookup", "banana"]).unwrap();
        assert_eq!(cli.fruit, "banana");
        assert_eq!(cli.format, FormatArg::Human);
        assert_eq!(cli.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(cli.timeout, 10);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn machine_format() {
        let cli = Cli::try_parse_from(["fruitlookup", "apple", "--format", "machine"]).unwrap();
        assert_eq!(OutputFormat::from(cli.format), OutputFormat::Machine);
    }

    #[test]
    fn unknown_format_is_rejected() {
        let err = Cli::try_parse_from(["fruitlookup", "apple", "--format", "xml"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn fruit_is_required() {
        let err = Cli::try_parse_from(["fruitlookup"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn base_url_must_parse() {
        let cli = Cli::try_parse_from(["fruitlookup", "fig", "--base-url", "http://127.0.0.1:9/api/fruit"])
            .unwrap();
        assert_eq!(cli.base_url.port(), Some(9));

        assert!(Cli::try_parse_from(["fruitlookup", "fig", "--base-url", "not a url"]).is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(Cli::try_parse_from(["fruitlookup", "fig", "--timeout", "0"]).is_err());
    }

    #[test]
    fn verbose_counts() {
        let cli = Cli::try_parse_from(["fruitlookup", "fig", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
