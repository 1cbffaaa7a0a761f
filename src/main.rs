use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use vehicle_sim::simulation::{ConsoleNarrator, Scenario, TokioClock};

#[derive(Parser)]
#[command(name = "vehicle_sim")]
#[command(about = "Runs the sample vehicle trips and narrates them")]
struct Cli {
    /// Multiplier applied to every trip delay (0 skips waiting)
    #[arg(long, default_value = "1.0")]
    time_scale: f64,

    /// Do not print the summary block after the narration
    #[arg(long)]
    no_summary: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let env = env_logger::Env::default().default_filter_or("warn,vehicle_sim=info");
    env_logger::Builder::from_env(env).init();

    let cli = Cli::parse();
    let clock = TokioClock::new(cli.time_scale).context("invalid --time-scale")?;

    info!("Running vehicle scenario (time scale {})", cli.time_scale);

    let mut narrator = ConsoleNarrator;
    let report = Scenario::sample()
        .run(&clock, &mut narrator)
        .await
        .context("sample scenario failed")?;

    if !cli.no_summary {
        report.print_summary();
    }

    info!("=== SCENARIO COMPLETE ===");
    info!("Total trips: {}", report.trips.len());
    Ok(())
}
