//! `image-widget` - replay scripted scenarios against the image component
//!
//! Reads a scenario document, drives a single component through its steps with a
//! logging view, and prints the outcome events it emitted as JSON lines on stdout.
//!
//! ```text
//! image-widget <scenario.json> [--config PATH] [--log-dir DIR]
//! ```

use anyhow::{Context, Result, bail};
use image_widget::{
    ImageWidgetError,
    config::ConfigManager,
    error::get_user_friendly_error,
    scenario::{self, Scenario},
    utils,
};
use std::path::PathBuf;
use tracing::{error, info};

/// Parsed command line
#[derive(Debug)]
struct Args {
    scenario: PathBuf,
    config: Option<PathBuf>,
    log_dir: Option<PathBuf>,
}

const USAGE: &str = "usage: image-widget <scenario.json> [--config PATH] [--log-dir DIR]";

fn parse_args(mut args: pico_args::Arguments) -> Result<Args> {
    if args.contains(["-h", "--help"]) {
        bail!(USAGE);
    }

    let config: Option<PathBuf> = args.opt_value_from_str("--config")?;
    let log_dir: Option<PathBuf> = args.opt_value_from_str("--log-dir")?;
    let scenario: PathBuf = args.free_from_str().context(USAGE)?;

    let leftover = args.finish();
    if !leftover.is_empty() {
        bail!("unexpected arguments {leftover:?}\n{USAGE}");
    }

    Ok(Args {
        scenario,
        config,
        log_dir,
    })
}

fn main() -> Result<()> {
    let args = parse_args(pico_args::Arguments::from_env())?;

    utils::init_logging(args.log_dir.as_deref()).context("Failed to initialize logging system")?;
    info!("image-widget v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => ConfigManager::load_from(path),
        None => ConfigManager::load(),
    }
    .context("Failed to load widget configuration")?;

    let scenario = match Scenario::from_path(&args.scenario) {
        Ok(scenario) => scenario,
        Err(e) => {
            error!("Failed to read scenario: {}", e);
            return Err(describe(e))
                .with_context(|| format!("Failed to read scenario {}", args.scenario.display()));
        }
    };
    info!("Replaying {} step(s)", scenario.steps.len());

    for event in scenario::run(&scenario, config) {
        println!(
            "{}",
            serde_json::to_string(&event).context("Failed to serialize event")?
        );
    }

    info!("image-widget finished");
    Ok(())
}

fn describe(e: ImageWidgetError) -> anyhow::Error {
    anyhow::anyhow!(get_user_friendly_error(&e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn args(list: &[&str]) -> Result<Args> {
        parse_args(pico_args::Arguments::from_vec(
            list.iter().map(OsString::from).collect(),
        ))
    }

    #[test]
    fn test_parse_full_command_line() {
        let parsed = args(&["run.json", "--config", "cfg.json", "--log-dir", "logs"]).unwrap();
        assert_eq!(parsed.scenario, PathBuf::from("run.json"));
        assert_eq!(parsed.config, Some(PathBuf::from("cfg.json")));
        assert_eq!(parsed.log_dir, Some(PathBuf::from("logs")));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(args(&[]).is_err());
        assert!(args(&["a.json", "b.json"]).is_err());
        assert!(args(&["a.json", "--config"]).is_err());
        assert!(args(&["a.json", "--verbose"]).is_err());
        assert!(args(&["a.json", "--help"]).is_err());
    }
}
