pub mod aircraft;
pub mod gas;
pub mod reaction;
pub mod record;
pub mod state;

pub use aircraft::AircraftProperties;
pub use gas::GasState;
pub use reaction::ReactionMix;
pub use record::{CycleRecord, CYCLE_LOG_HEADER};
pub use state::{FlightHistory, FlightSample, FlightState};
