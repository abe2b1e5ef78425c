use anyhow::Result;
use clap::Parser;
use std::io;
use std::sync::Arc;
use tracing::info;
use unixtime::adapters::{ChronoZoneLabel, SystemClipboard};
use unixtime::app::{print_once, run_tui, UnixTimeApp};
use unixtime::cli::CliArgs;
use unixtime::config::Config;
use unixtime::session::ClockSession;
use unixtime_core::ports::{Clock, SystemClock};

fn main() -> Result<()> {
    // Initialize tracing with env filter; stderr keeps the alternate screen clean
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli_args = CliArgs::parse();
    let config = Config::from_cli_and_file(&cli_args, cli_args.config.clone())?;
    info!("Loaded config: {:?}", config);

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let zones = ChronoZoneLabel::new(config.ui.zone_label.clone());

    if cli_args.once {
        return print_once(&config, clock, &zones, &mut io::stdout().lock());
    }

    info!("Starting unixtime");

    let session = ClockSession::new(clock);
    let mut app = UnixTimeApp::new(
        config,
        session,
        Box::new(SystemClipboard::new()),
        Box::new(zones),
    );
    run_tui(&mut app)?;

    info!("unixtime shut down cleanly");
    Ok(())
}
