//! Candidate roster CLI.

use std::io::{self, IsTerminal};
use std::path::Path;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use roster_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use roster_cli::commands::{
    ExportOutcome, run_add, run_config, run_export, run_list, run_show, run_tags,
};
use roster_cli::logging::{LogConfig, LogFormat, init_logging};
use roster_cli::settings::{DATA_DIR_ENV, Settings};
use roster_store::{CandidateStore, FileStore};
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(cli) {
        Ok(()) => 0,
        Err(error) => {
            tracing::error!("{error:#}");
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(Settings::config_path);
    let settings = Settings::load_from(&config_path);
    let env_dir = std::env::var(DATA_DIR_ENV).ok();
    let data_dir = settings.resolve_data_dir(
        cli.data_dir.as_deref(),
        env_dir.as_deref(),
        Settings::platform_data_dir(),
    );
    tracing::debug!(data_dir = %data_dir.display(), "resolved data directory");

    if let Command::Config(args) = &cli.command {
        print!("{}", run_config(&settings, &config_path, &data_dir, args.init)?);
        return Ok(());
    }

    let mut store = CandidateStore::open(FileStore::new(&data_dir));
    match cli.command {
        Command::Add(args) => {
            let outcome = run_add(&mut store, &args)?;
            println!("Added candidate {}", outcome.id);
            if let Some(warning) = outcome.warning {
                eprintln!("warning: {warning}");
            }
        }
        Command::List(args) => print!("{}", run_list(&store, &args, &settings)?),
        Command::Show(args) => print!("{}", run_show(&store, &args.id)?),
        Command::Export(args) => match run_export(&store, &args, &settings)? {
            ExportOutcome::Written { path, rows } => {
                println!("Exported {rows} candidate(s) to {}", display_path(&path));
            }
            ExportOutcome::Skipped => {
                eprintln!("warning: no candidates match the current filters; nothing exported");
            }
        },
        Command::Tags => print!("{}", run_tags(&store)),
        Command::Config(_) => {}
    }
    Ok(())
}

fn display_path(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
