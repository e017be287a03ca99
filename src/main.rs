mod cli;
mod error;
mod model;
mod output;
mod reader;
mod split;

use std::io::Write;

use crate::error::Result;
use clap::{ArgAction, Parser};
use miette::IntoDiagnostic;

/// Split a simulated haplotype file into reference panel and query files.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Input file; outputs are written next to it with ".panel" and ".query" appended.
    #[arg(
        short,
        long,
        value_hint = clap::ValueHint::FilePath,
        value_parser = clap::builder::NonEmptyStringValueParser::new()
    )]
    input: String,

    /// Number of trailing haplotypes moved to the query file.
    #[arg(
        short = 'x',
        long,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    split_count: u32,

    /// Suppress warnings.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbosity; can be repeated.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Off;
        }
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

fn init_logger(level: log::LevelFilter) {
    if let Err(e) = env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .format(|buf, record| {
            let level = record.level().as_str().to_lowercase();
            writeln!(buf, "[hapsplit {level:>5}] {}", record.args())
        })
        .try_init()
    {
        eprintln!("failed to setup logger: {e}");
    }
}

fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        // Usage errors exit with 1 rather than clap's 2; help and version still exit 0
        Err(e) if e.use_stderr() => {
            if e.print().is_err() {
                eprintln!("{e}");
            }
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    }
}

fn try_main(args: Args) -> Result<()> {
    let spec = cli::build_split_spec(&args);
    spec.log_paths();
    cli::run(&spec)
}

fn main() -> miette::Result<()> {
    let args = parse_args();
    init_logger(args.log_level());
    try_main(args).into_diagnostic()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn try_parse_args(cmd: &str) -> std::result::Result<Args, clap::Error> {
        Args::try_parse_from(cmd.split_whitespace())
    }

    #[test]
    fn parses_short_flags() {
        let args = try_parse_args("hapsplit -i sim.out -x 3").unwrap();
        assert_eq!(args.input, "sim.out");
        assert_eq!(args.split_count, 3);
        assert_eq!(args.log_level(), log::LevelFilter::Warn);
    }

    #[test]
    fn parses_long_flags_and_verbosity() {
        let args = try_parse_args("hapsplit --input sim.out --split-count 10 -vv").unwrap();
        assert_eq!(args.split_count, 10);
        assert_eq!(args.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn rejects_non_positive_split_count() {
        assert!(try_parse_args("hapsplit -i sim.out -x 0").is_err());
        assert!(try_parse_args("hapsplit -i sim.out -x -2").is_err());
        assert!(try_parse_args("hapsplit -i sim.out -x two").is_err());
    }

    #[test]
    fn rejects_missing_arguments() {
        assert!(try_parse_args("hapsplit -x 3").is_err());
        assert!(try_parse_args("hapsplit -i sim.out").is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(try_parse_args("hapsplit -i sim.out -x 1 -q -v").is_err());
        let args = try_parse_args("hapsplit -i sim.out -x 1 -q").unwrap();
        assert_eq!(args.log_level(), log::LevelFilter::Off);
    }
}
