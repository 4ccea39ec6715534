//! Harvester binary entry point

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use harvester::{CycleDriver, DriverOptions, DriverState, HarvesterResult, HttpCatalogClient, Settings, YamlCollectionStore};
use shared::{logging, run_info, RunId};

/// Collects unique people and planets from a SWAPI-style catalog
#[derive(Parser)]
#[command(name = "harvester")]
#[command(about = "Accumulates unique catalog records into a YAML collection")]
struct Args {
    /// Settings file (JSON)
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// Seconds to wait between the person and the planet request
    #[arg(long, default_value = "5")]
    interval: u64,

    /// Catalog root URL
    #[arg(long, default_value = harvester::DEFAULT_BASE_URL)]
    base_url: String,

    /// HTTP request timeout in milliseconds
    #[arg(long, default_value = "10000")]
    timeout_ms: u64,

    /// Stop after this many cycles (runs until both caps are reached if not set)
    #[arg(long)]
    max_cycles: Option<u32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> HarvesterResult<()> {
    let args = Args::parse();

    logging::init_tracing_with_level(Some(&args.log_level));
    let run_id = RunId::new();

    let settings = match Settings::load(&args.config).await {
        Ok(settings) => settings,
        Err(e) => {
            logging::log_error(&run_id, "Loading settings", &e);
            return Err(e);
        }
    };

    logging::log_startup(&run_id, &format!("harvester against {}", args.base_url));
    run_info!(
        run_id,
        "Settings: max_person={}, max_planets={}, cap={}, output={}",
        settings.max_person,
        settings.max_planets,
        settings.count_of_people_and_planet,
        settings.output_path.display()
    );

    let client = HttpCatalogClient::new(&args.base_url, Duration::from_millis(args.timeout_ms))?;
    let store = YamlCollectionStore::new(settings.output_path.clone());
    let options = DriverOptions {
        pacing: Duration::from_secs(args.interval),
        max_cycles: args.max_cycles,
    };

    let mut driver = CycleDriver::new(settings, options, client, store)?.with_run_id(run_id.clone());
    let summary = driver.run().await?;

    let reason = match summary.state {
        DriverState::Done => "both categories reached the cap",
        DriverState::Running => "cycle limit reached",
    };
    run_info!(
        run_id,
        "{} cycles, {} people, {} planets",
        summary.cycles,
        summary.people,
        summary.planets
    );
    logging::log_shutdown(&run_id, reason);

    Ok(())
}
