use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod global;

pub use global::GlobalFlags;

/// Top-level CLI parser for the `boardmap` binary.
///
/// Without a subcommand the positional arguments drive the summary run:
/// `boardmap companies.txt true`.
#[derive(Debug, Parser)]
#[command(
    name = "boardmap",
    version,
    about = "Board affiliations and investors for a list of companies",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub map: MapArgs,

    /// Quiet mode (errors only, no progress bars)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the people who share a board with a given person.
    WhoKnows(WhoKnowsArgs),
}

/// Arguments of the summary run.
#[derive(Debug, Clone, Default, Args)]
pub struct MapArgs {
    /// File with one company name per line
    pub input: Option<PathBuf>,

    /// Print matches and per-company results (`true` or `false`)
    #[arg(value_parser = parse_echo_flag)]
    pub echo: Option<bool>,

    /// Output file (overrides `output.path`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Abbreviate round labels (`Seed`, `A`, ...)
    #[arg(long)]
    pub abbreviate_rounds: bool,
}

#[derive(Debug, Clone, Args)]
pub struct WhoKnowsArgs {
    /// File with one company name per line
    pub input: PathBuf,

    /// Person to look up, as spelled in the affiliation records
    pub name: String,

    /// Group by company instead of by person
    #[arg(long)]
    pub by_company: bool,
}

impl Cli {
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

/// Strict, case-insensitive `true`/`false`.
fn parse_echo_flag(raw: &str) -> Result<bool, String> {
    if raw.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(format!("expected 'true' or 'false', got '{raw}'"))
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, Commands, parse_echo_flag};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn positional_run_parses() {
        let cli = Cli::try_parse_from(["boardmap", "companies.txt", "TRUE"]).expect("cli should parse");
        assert!(cli.command.is_none());
        assert_eq!(cli.map.input.as_deref(), Some(std::path::Path::new("companies.txt")));
        assert_eq!(cli.map.echo, Some(true));
    }

    #[test]
    fn missing_arguments_still_parse() {
        let cli = Cli::try_parse_from(["boardmap"]).expect("cli should parse");
        assert!(cli.map.input.is_none());
        assert!(cli.map.echo.is_none());

        let cli = Cli::try_parse_from(["boardmap", "companies.txt"]).expect("cli should parse");
        assert!(cli.map.input.is_some());
        assert!(cli.map.echo.is_none());
    }

    #[test]
    fn malformed_echo_flag_names_the_value() {
        let err = Cli::try_parse_from(["boardmap", "companies.txt", "maybe"]).unwrap_err();
        assert!(err.to_string().contains("maybe"), "{err}");
    }

    #[test]
    fn echo_flag_is_case_insensitive_and_strict() {
        assert_eq!(parse_echo_flag("False"), Ok(false));
        assert_eq!(parse_echo_flag("true"), Ok(true));
        assert!(parse_echo_flag("yes").is_err());
        assert!(parse_echo_flag("1").is_err());
    }

    #[test]
    fn run_options_parse() {
        let cli = Cli::try_parse_from([
            "boardmap",
            "--quiet",
            "companies.txt",
            "false",
            "--output",
            "out.tsv",
            "--abbreviate-rounds",
        ])
        .expect("cli should parse");
        assert!(cli.quiet);
        assert!(cli.map.abbreviate_rounds);
        assert_eq!(cli.map.output.as_deref(), Some(std::path::Path::new("out.tsv")));
    }

    #[test]
    fn who_knows_parses() {
        let cli = Cli::try_parse_from([
            "boardmap",
            "who-knows",
            "companies.txt",
            "Ada Lovelace",
            "--by-company",
            "--verbose",
        ])
        .expect("cli should parse");
        assert!(cli.verbose);
        match cli.command {
            Some(Commands::WhoKnows(args)) => {
                assert_eq!(args.name, "Ada Lovelace");
                assert!(args.by_company);
            }
            other => panic!("expected who-knows, got {other:?}"),
        }
    }
}
