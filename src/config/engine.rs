use crate::gnc::control::pid::PidController;
use crate::models::reaction::ReactionMix;

/// Plant and controller parameters for the combustion/turbine/electrolysis loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleConfig {
    pub chamber_volume: f64,      // m³
    pub initial_temperature: f64, // K
    pub initial_pressure: f64,    // Pa
    pub compression_ratio: f64,
    pub charge: ReactionMix,
    pub turbine_efficiency: f64,
    pub controller: PidController,
    pub setpoint_temperature: f64, // K
    pub controller_dt: f64,        // s
    pub cycles: usize,
}

impl CycleConfig {
    pub const METHANOL: f64 = 1.0; // mol
    pub const HYDROGEN: f64 = 2.0; // mol
    pub const OXYGEN: f64 = 6.5; // mol, stoichiometric for the methanol burn
}

impl Default for CycleConfig {
    fn default() -> Self {
        CycleConfig {
            chamber_volume: 1.0,
            initial_temperature: 300.0,
            initial_pressure: 101_325.0,
            compression_ratio: 10.0,
            charge: ReactionMix::charge(Self::METHANOL, Self::HYDROGEN, Self::OXYGEN),
            turbine_efficiency: 0.4,
            controller: PidController::new(1.0, 0.1, 0.05),
            setpoint_temperature: 1500.0,
            controller_dt: 0.1,
            cycles: 10,
        }
    }
}
