use entropic_jacket::config::MissionProfile;
use entropic_jacket::logging::init_tracing;
use entropic_jacket::output::console::format_flight_summary;
use entropic_jacket::output::plot::render_comparison;
use entropic_jacket::simulation::compare;
use std::error::Error;
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let mission = MissionProfile::default();
    let runs = compare(&mission)?;

    for run in &runs {
        println!("{}", format_flight_summary(run.name, &run.history));
    }

    let plot_path = Path::new("output").join("flight_comparison.png");
    render_comparison(&plot_path, &runs)?;
    println!("Comparison plot has been written to {}", plot_path.display());

    Ok(())
}
