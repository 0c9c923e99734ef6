//! CLI entrypoint for Quiz Quorum
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use quiz_application::{
    AnswerAllUseCase, NoProgress, ResolutionProgress, ResolveQuestionUseCase,
};
use quiz_domain::{AcceptanceMode, ExtractionMode, OutputFormat};
use quiz_infrastructure::{ConfigLoader, FileConfig, HttpTextOracle, QuizFileSource};
use quiz_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress};
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Exit status used when the run was interrupted
const EXIT_CANCELLED: i32 = 130;

/// Initialize logging: stderr always, plus a daily log file with `--log-dir`.
///
/// `RUST_LOG` takes precedence over the `-v` count.
fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let (file, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "quiz-quorum.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_ansi(false).with_writer(writer)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .init();

    guard
}

/// Fold command-line overrides into the loaded configuration
fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(max) = cli.max_attempts {
        config.resolver.max_attempts = max as usize;
    }
    if let Some(acceptance) = cli.acceptance {
        config.resolver.acceptance = AcceptanceMode::from(acceptance).as_str().to_string();
    }
    if let Some(extraction) = cli.extraction {
        config.resolver.extraction = ExtractionMode::from(extraction).as_str().to_string();
    }
    if let Some(secs) = cli.timeout {
        config.oracle.timeout_secs = secs;
    }
    if let Some(model) = &cli.answer_model {
        config.models.answer = Some(model.clone());
    }
    if let Some(output) = cli.output {
        config.output.format = Some(output.into());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_guard = init_logging(cli.verbose, cli.log_dir.as_deref());

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    info!("Starting Quiz Quorum");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_overrides(&mut config, &cli);

    let issues = config.validate();
    for issue in issues.iter().filter(|i| !i.is_error()) {
        warn!("{}", issue.message);
    }
    let errors: Vec<_> = issues.iter().filter(|i| i.is_error()).collect();
    if !errors.is_empty() {
        for issue in &errors {
            eprintln!("config error: {}", issue.message);
        }
        bail!("Invalid configuration ({} error(s))", errors.len());
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    let quiz_file = cli
        .quiz_file
        .clone()
        .context("A quiz file is required")?;

    // === Dependency Injection ===
    let params = config.to_resolver_params();
    info!(
        "Resolver: {} attempt(s), extraction={}, acceptance={}, answer model {}",
        params.max_attempts, params.extraction, params.acceptance, params.answer_model
    );

    let oracle = Arc::new(
        HttpTextOracle::new(config.oracle.to_settings())
            .map_err(|e| anyhow!("Failed to create oracle client: {}", e))?,
    );
    info!("Oracle endpoint: {}", oracle.settings().base_url);
    let source = Arc::new(QuizFileSource::new(quiz_file));
    let resolver = ResolveQuestionUseCase::new(oracle, params);
    let use_case = AnswerAllUseCase::new(source, resolver);

    // Ctrl-C stops the run; questions not yet resolved are reported as cancelled
    let cancellation = CancellationToken::new();
    {
        let token = cancellation.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupted, cancelling remaining questions");
                token.cancel();
            }
        });
    }

    let progress: Box<dyn ResolutionProgress> = if cli.quiet {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let report = use_case
        .execute(progress.as_ref(), &cancellation)
        .await
        .context("Failed to read questions")?;

    // Output results
    let output = match config.output.format.unwrap_or_default() {
        OutputFormat::Summary => ConsoleFormatter::format(&report),
        OutputFormat::Json => ConsoleFormatter::format_json(&report),
    };
    println!("{}", output);

    if report.cancelled {
        drop(log_guard);
        std::process::exit(EXIT_CANCELLED);
    }

    Ok(())
}
