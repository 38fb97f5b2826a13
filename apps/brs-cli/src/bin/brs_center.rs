//! BRS auto-centering runner.
//!
//! Reads the drift monitor on a fixed cadence and steps the heater setpoint
//! along the control grid whenever the drift leaves the configured band.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use brs_app::{
    AppError, AppResult, CenteringConfig, CenteringService, Schedule, ShutdownToken, logging,
    run_scheduled,
};
use brs_channels::EpicsCliPort;

const SAMPLE_CONFIG_PATH: &str = "brs_centering_sample.yaml";

#[derive(Parser)]
#[command(name = "brs-center")]
#[command(about = "BRS auto-centering temperature control", long_about = None)]
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
        CenteringConfig::write_sample(path)?;
        info!(path = %path.display(), "generated sample configuration file");
        return Ok(());
    }

    // clap enforces this; direct construction of Cli does not.
    let Some(config_path) = cli.config else {
        eprintln!("--config <path> is required unless --get-config is given");
        std::process::exit(2);
    };

    let log_path = logging::init(&config_path)?;
    let config = CenteringConfig::load(&config_path)?;
    info!(
        config_path = %config_path.display(),
        log_path = %log_path.display(),
        optics = %config.optics,
        control_negated = config.control_negated,
        threshold_lower = config.threshold_lower,
        threshold_upper = config.threshold_upper,
        interval_hour = config.interval_hour,
        n_grid = config.n_grid,
        "parsed configuration file"
    );
    info!("starting BRS auto centering temperature control");

    let token = ShutdownToken::new();
    {
        let token = token.clone();
        ctrlc::set_handler(move || token.request())
            .map_err(|err| AppError::Signal(err.to_string()))?;
    }

    let port = EpicsCliPort::new();
    let schedule = Schedule::hourly(config.interval_hour, config.start_now);
    let service = CenteringService::new(config, port.clone(), port)?;

    run_scheduled(schedule, &token, || service.run_cycle().map(|_| ()));
    info!("program interrupted by user");
    Ok(())
}
