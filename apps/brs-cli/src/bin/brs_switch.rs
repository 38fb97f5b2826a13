//! BRS signal-path switcher runner.
//!
//! Periodically compares the band-limited RMS of the raw ground sensor path
//! against the BRS-corrected path and selects the quieter one.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::info;

use brs_app::{
    AppError, AppResult, Schedule, ShutdownToken, SwitchConfig, SwitcherService, logging,
    run_scheduled,
};
use brs_channels::EpicsCliPort;

const SAMPLE_CONFIG_PATH: &str = "brs_switch_sample.yaml";

#[derive(Parser)]
#[command(name = "brs-switch")]
#[command(about = "BRS sensor-correction path switching", long_about = None)]
struct Cli {
    /// Path of the YAML config file. Use -g/--get-config for a sample.
    #[arg(short, long, required_unless_present = "get_config")]
    config: Option<PathBuf>,

    /// Write a sample configuration file to the current directory and exit.
    #[arg(short = 'g', long)]
    get_config: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    if cli.get_config {
        logging::init_console()?;
        let path = Path::new(SAMPLE_CONFIG_PATH);
        SwitchConfig::write_sample(path)?;
        info!(path = %path.display(), "generated sample configuration file");
        return Ok(());
    }

    // clap enforces this; direct construction of Cli does not.
    let Some(config_path) = cli.config else {
        eprintln!("--config <path> is required unless --get-config is given");
        std::process::exit(2);
    };

    let log_path = logging::init(&config_path)?;
    let config = SwitchConfig::load(&config_path)?;
    info!(
        config_path = %config_path.display(),
        log_path = %log_path.display(),
        sts_channel = %config.sts_channel,
        corrected_channel = %config.corrected_channel,
        switch_channel = %config.switch_channel,
        run_interval = config.run_interval,
        "parsed configuration file"
    );
    info!("starting BRS path switching");

    let token = ShutdownToken::new();
    {
        let token = token.clone();
        ctrlc::set_handler(move || token.request())
            .map_err(|err| AppError::Signal(err.to_string()))?;
    }

    let port = EpicsCliPort::new();
    let schedule = Schedule::new(Duration::from_secs_f64(config.run_interval), true);
    let service = SwitcherService::new(config, port.clone(), port);

    run_scheduled(schedule, &token, || service.run_cycle().map(|_| ()));
    info!("program interrupted by user");
    Ok(())
}
