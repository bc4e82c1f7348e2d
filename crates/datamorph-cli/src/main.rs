mod config;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use datamorph_core::FreeTextPolicy;
use datamorph_generate::output::report::write_report_json;
use datamorph_generate::{
    GenerationError, MalformedRowPolicy, MaskEngine, MaskRequest, PermutationMode,
};
use thiserror::Error;

use config::{ConfigError, Overrides, load_options};
use logging::{LogFormat, LoggingError, init_logging};

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
}

#[derive(Parser, Debug)]
#[command(
    name = "datamorph",
    version,
    about = "Mask one CSV column while keeping the shape of every value"
)]
struct Cli {
    /// CSV file with a header row.
    #[arg(value_name = "INPUT")]
    input: PathBuf,
    /// Header name of the column to mask (case-sensitive).
    #[arg(value_name = "COLUMN")]
    column: String,
    /// Output file. Defaults to `<input stem>_masked.csv` next to the input.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
    /// Classify each value on its own, or fix one family for the column.
    #[arg(short = 'l', long, value_enum)]
    mode: Option<ModeArg>,
    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
    /// TOML file with masking options.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Whether multi-word text without digits is masked.
    #[arg(long, value_enum)]
    free_text: Option<FreeTextArg>,
    /// What to do with rows whose field count differs from the header.
    #[arg(long, value_enum)]
    malformed_rows: Option<MalformedRowsArg>,
    /// Write a JSON run report to this path.
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
    /// Append logs to this file instead of stderr.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    PerValue,
    ColumnUniform,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FreeTextArg {
    Preserve,
    Mask,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MalformedRowsArg {
    PassThrough,
    Skip,
}

impl From<ModeArg> for PermutationMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::PerValue => PermutationMode::PerValue,
            ModeArg::ColumnUniform => PermutationMode::ColumnUniform,
        }
    }
}

impl From<FreeTextArg> for FreeTextPolicy {
    fn from(value: FreeTextArg) -> Self {
        match value {
            FreeTextArg::Preserve => FreeTextPolicy::Preserve,
            FreeTextArg::Mask => FreeTextPolicy::Mask,
        }
    }
}

impl From<MalformedRowsArg> for MalformedRowPolicy {
    fn from(value: MalformedRowsArg) -> Self {
        match value {
            MalformedRowsArg::PassThrough => MalformedRowPolicy::PassThrough,
            MalformedRowsArg::Skip => MalformedRowPolicy::Skip,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(event = "run_finished", status = "failure", error = %err);
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    init_logging(cli.log_format, cli.log_file.as_deref())?;
    let timer = Instant::now();

    let mut options = load_options(cli.config.as_deref())?;
    Overrides {
        mode: cli.mode.map(Into::into),
        seed: cli.seed,
        free_text: cli.free_text.map(Into::into),
        malformed_rows: cli.malformed_rows.map(Into::into),
    }
    .apply(&mut options);

    let mut request = MaskRequest::new(cli.input, cli.column);
    if let Some(output) = cli.output {
        request = request.with_output(output);
    }

    let result = MaskEngine::new(options).run(&request)?;

    if let Some(path) = cli.report.as_deref() {
        write_report_json(path, &result.report)?;
        tracing::info!(event = "report_written", path = %path.display());
    }

    tracing::info!(
        event = "run_finished",
        status = "success",
        run_id = %result.report.run_id,
        output = %result.output.display(),
        duration_ms = timer.elapsed().as_millis() as u64
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_short_flags() {
        let cli = Cli::try_parse_from([
            "datamorph",
            "customers.csv",
            "phone",
            "-o",
            "out.csv",
            "-l",
            "column-uniform",
        ])
        .expect("parse");

        assert_eq!(cli.input, PathBuf::from("customers.csv"));
        assert_eq!(cli.column, "phone");
        assert_eq!(cli.output, Some(PathBuf::from("out.csv")));
        assert_eq!(
            cli.mode.map(PermutationMode::from),
            Some(PermutationMode::ColumnUniform)
        );
        assert_eq!(cli.log_format, LogFormat::Text);
    }

    #[test]
    fn parses_policy_flags() {
        let cli = Cli::try_parse_from([
            "datamorph",
            "in.csv",
            "notes",
            "--free-text",
            "mask",
            "--malformed-rows",
            "pass-through",
            "--seed",
            "7",
            "--log-format",
            "json",
        ])
        .expect("parse");

        assert_eq!(cli.free_text.map(FreeTextPolicy::from), Some(FreeTextPolicy::Mask));
        assert_eq!(
            cli.malformed_rows.map(MalformedRowPolicy::from),
            Some(MalformedRowPolicy::PassThrough)
        );
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn column_is_required() {
        assert!(Cli::try_parse_from(["datamorph", "in.csv"]).is_err());
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(Cli::try_parse_from(["datamorph", "in.csv", "c", "-l", "random"]).is_err());
    }
}
