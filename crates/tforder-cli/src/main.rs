//! tforder - print the order in which Terraform modules must be applied.
//!
//! Modules are directories of `.tf` files. A module that declares
//! `data "terraform_remote_state" "vpc"` must be applied after module `vpc`.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tforder_analysis::report::create_reporter;
use tforder_core::config::tforder_config::split_list;
use tforder_core::config::{CliOverrides, OutputFormat, TforderConfig};
use tforder_core::errors::{PipelineError, TforderErrorCode};
use tforder_core::tracing::init_tracing_with_default;

/// Find the apply order of Terraform modules linked by remote state.
#[derive(Parser, Debug)]
#[command(name = "tforder")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Start dir path to recursively search for all .tf files
    #[arg(default_value = "./")]
    start_path: PathBuf,

    /// Exclude directories, delimited by comma
    #[arg(short, long, value_name = "DIRS")]
    exclude: Option<String>,

    /// Output format
    #[arg(short, long, value_parser = parse_format)]
    format: Option<OutputFormat>,

    /// Config file to use instead of <START_PATH>/tforder.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Worker threads for reading files (0 = one per core)
    #[arg(long)]
    threads: Option<usize>,

    /// Warn about referenced modules that are not under the start path
    #[arg(long)]
    warn_unresolved: bool,

    /// Log level used when TFORDER_LOG is not set (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn parse_format(value: &str) -> Result<OutputFormat, String> {
    value.parse()
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            exclude: self.exclude.as_deref().map(split_list),
            threads: self.threads,
            format: self.format,
            warn_unresolved: self.warn_unresolved.then_some(true),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing_with_default(&format!(
        "tforder_cli={level},tforder_analysis={level},tforder_core={level}",
        level = cli.log_level
    ));

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", render_error(&e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = TforderConfig::load(&cli.start_path, cli.config.as_deref(), Some(&cli.overrides()))
        .map_err(PipelineError::from)?;

    let analysis = tforder_analysis::analyze(&cli.start_path, &config)?;
    tracing::info!(stats = ?analysis.stats, "analysis complete");

    let format = config.output.effective_format();
    let report = create_reporter(format)
        .generate(&analysis.graph, &analysis.order)
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("failed to render {format} report"))?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", report.trim_end()).context("failed to write report")?;
    Ok(())
}

/// Analysis and config failures carry a stable `[CODE]` prefix; anything
/// else is printed with its context chain.
fn render_error(e: &anyhow::Error) -> String {
    match e.downcast_ref::<PipelineError>() {
        Some(err) => err.coded_string(),
        None => format!("{e:#}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["tforder"]).unwrap();
        assert_eq!(cli.start_path, PathBuf::from("./"));
        assert!(cli.exclude.is_none());
        assert!(cli.format.is_none());

        let overrides = cli.overrides();
        assert!(overrides.exclude.is_none());
        assert!(overrides.warn_unresolved.is_none());
    }

    #[test]
    fn test_exclude_is_split_on_commas() {
        let cli = Cli::try_parse_from(["tforder", "-e", "legacy,sandbox", "infra/live"]).unwrap();
        assert_eq!(cli.start_path, PathBuf::from("infra/live"));
        assert_eq!(
            cli.overrides().exclude,
            Some(vec!["legacy".to_string(), "sandbox".to_string()])
        );
    }

    #[test]
    fn test_format_flag() {
        let cli = Cli::try_parse_from(["tforder", "--format", "deps"]).unwrap();
        assert_eq!(cli.overrides().format, Some(OutputFormat::Deps));
        assert!(Cli::try_parse_from(["tforder", "--format", "yaml"]).is_err());
    }

    #[test]
    fn test_pipeline_errors_are_coded() {
        let cycle = tforder_core::errors::ResolveError::CycleDetected {
            chain: vec!["a".into(), "b".into(), "a".into()],
        };
        let e = anyhow::Error::from(PipelineError::from(cycle));
        assert_eq!(
            render_error(&e),
            "[CYCLIC_DEPENDENCY] Found cyclic dependencies: a < b < a"
        );

        let e = anyhow::anyhow!("broken pipe").context("failed to write report");
        assert_eq!(render_error(&e), "failed to write report: broken pipe");
    }

    #[test]
    fn test_warn_unresolved_flag() {
        let cli = Cli::try_parse_from(["tforder", "--warn-unresolved"]).unwrap();
        assert_eq!(cli.overrides().warn_unresolved, Some(true));
    }
}
