use serde::Serialize;

/// One row of the engine-cycle log. Pressures are stored in kPa.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CycleRecord {
    #[serde(rename = "Cycle")]
    pub cycle: usize,
    #[serde(rename = "Compression Temperature (K)")]
    pub compression_temperature: f64,
    #[serde(rename = "Compression Pressure (kPa)")]
    pub compression_pressure_kpa: f64,
    #[serde(rename = "Combustion Temperature (K)")]
    pub combustion_temperature: f64,
    #[serde(rename = "Combustion Pressure (kPa)")]
    pub combustion_pressure_kpa: f64,
    #[serde(rename = "Adjusted Hydrogen Injection")]
    pub adjusted_hydrogen: f64,
    #[serde(rename = "Energy Output (J)")]
    pub energy_output: f64,
    #[serde(rename = "Energy Output (MW)")]
    pub energy_output_mw: f64,
    #[serde(rename = "Methane Produced (mol)")]
    pub methane_produced: f64,
    #[serde(rename = "Hydrogen Produced (mol)")]
    pub hydrogen_produced: f64,
}

pub const CYCLE_LOG_HEADER: [&str; 10] = [
    "Cycle",
    "Compression Temperature (K)",
    "Compression Pressure (kPa)",
    "Combustion Temperature (K)",
    "Combustion Pressure (kPa)",
    "Adjusted Hydrogen Injection",
    "Energy Output (J)",
    "Energy Output (MW)",
    "Methane Produced (mol)",
    "Hydrogen Produced (mol)",
];
