use entropic_jacket::config::CycleConfig;
use entropic_jacket::logging::init_tracing;
use entropic_jacket::output::{ConsoleReport, CycleLog};
use entropic_jacket::simulation::run_cycles;
use std::error::Error;
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let config = CycleConfig::default();
    let output_path = Path::new("output").join("simulation_results.csv");

    let mut sinks = (ConsoleReport::stdout(), CycleLog::create(&output_path)?);
    run_cycles(&config, &mut sinks)?;
    sinks.1.flush()?;

    println!("Simulation data has been written to {}", output_path.display());
    Ok(())
}
