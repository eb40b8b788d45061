//! Hark - a terminal notes list that speaks its state changes.
//!
//! # Usage
//!
//! ```bash
//! hark
//! hark --show-regions --clear-policy per-channel
//! hark --items 5000 --debug-log hark.log
//! hark --check-env --json
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use hark::announce::ClearPolicy;
use hark::app::{App, DEFAULT_NOTE_COUNT};
use hark::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};
use hark::env::{self, EnvConfig, EnvValidation};
use hark::gesture::DEFAULT_PULL_THRESHOLD;
use hark::virtualize::DEFAULT_VIRTUALIZE_THRESHOLD;

/// A terminal notes list that speaks its state changes
#[derive(Parser, Debug)]
#[command(name = "hark", version, about, long_about = None)]
struct Cli {
    /// Draw the live regions visibly instead of screen-reader only
    #[arg(long)]
    show_regions: bool,

    /// Milliseconds after the last announcement before the regions are emptied
    #[arg(long, value_name = "MS")]
    clear_delay_ms: Option<u64>,

    /// Whether both regions share one clear timer or each has its own
    #[arg(long, value_enum)]
    clear_policy: Option<ClearPolicy>,

    /// Virtualize the list once it has more than this many notes
    #[arg(long, value_name = "N")]
    virtualize_threshold: Option<usize>,

    /// Rows of pull needed to trigger a refresh
    #[arg(long, value_name = "ROWS")]
    pull_threshold: Option<u16>,

    /// Number of sample notes to show
    #[arg(long, value_name = "N")]
    items: Option<usize>,

    /// Write debug logs to a file
    #[arg(long, value_name = "PATH")]
    debug_log: Option<PathBuf>,

    /// Validate the environment and exit
    #[arg(long)]
    check_env: bool,

    /// Print the --check-env report as JSON
    #[arg(long, requires = "check_env")]
    json: bool,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

#[derive(Serialize)]
struct EnvReport<'a> {
    mode: &'static str,
    valid: bool,
    config: &'a EnvConfig,
    #[serde(flatten)]
    validation: &'a EnvValidation,
}

// The TUI owns stdout and stderr once it starts, so a debug log goes to a
// file instead.
fn init_logging(debug_log: Option<&Path>) -> Result<()> {
    match debug_log {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create debug log {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
                )
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
                )
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn check_env(json: bool) -> Result<()> {
    let config = EnvConfig::from_env();
    let validation = env::validate(&config);

    if json {
        let report = EnvReport {
            mode: config.mode(),
            valid: validation.is_valid(),
            config: &config,
            validation: &validation,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("mode: {}", config.mode());
        for error in &validation.errors {
            println!("error: {error}");
        }
        for warning in &validation.warnings {
            println!("warning: {warning}");
        }
        if validation.is_valid() {
            println!("environment ok");
        }
    }

    env::assert_valid(&config)?;
    Ok(())
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    init_logging(effective.debug_log.as_deref())?;
    tracing::debug!(?effective, "effective flags");

    if cli.check_env {
        return check_env(cli.json);
    }

    let env_config = EnvConfig::from_env();
    env::log_validation(&env_config, &env::validate(&env_config));

    let mut app = App::new(effective.announcer_config())
        .with_note_count(effective.items.unwrap_or(DEFAULT_NOTE_COUNT))
        .with_virtualize_threshold(
            effective
                .virtualize_threshold
                .unwrap_or(DEFAULT_VIRTUALIZE_THRESHOLD),
        )
        .with_pull_threshold(effective.pull_threshold.unwrap_or(DEFAULT_PULL_THRESHOLD))
        .with_show_regions(effective.show_regions)
        .with_config_paths(
            Some(global_path.clone()),
            if local_path.exists() {
                Some(local_path.clone())
            } else {
                None
            },
        );

    app.run().context("Application error")
}
