pub mod cycle;
pub mod flight;

pub use cycle::{run_cycles, CycleSink};
pub use flight::{compare, simulate, FlightRun};
