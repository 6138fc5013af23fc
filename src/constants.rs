pub const R: f64 = 8.314462618; // Molar gas constant (J/(mol·K))
pub const GAMMA: f64 = 1.4; // Heat-capacity ratio for air

// Combustion
pub const DELTA_H_METHANOL: f64 = -726_000.0; // CH3OH combustion enthalpy (J/mol)
pub const DELTA_H_HYDROGEN: f64 = -241_800.0; // H2 combustion enthalpy (J/mol)
pub const MIXTURE_HEAT_CAPACITY: f64 = 29.1; // Lumped O2/N2/CO2/H2O mix (J/(mol·K))

// Energy conversion
pub const MEGAWATT: f64 = 1000.0 * 1000.0; // W per MW
pub const PASCALS_PER_KPA: f64 = 1000.0;
pub const ELECTROLYSIS_EFFICIENCY: f64 = 0.7;
pub const ELECTROLYSIS_ENERGY_PER_MOL_H2: f64 = 237.13 * 1000.0; // J/mol H2

// Methanation: CO2 + 4 H2 -> CH4 + 2 H2O
pub const METHANATION_H2_PER_CO2: f64 = 4.0;

// Air
pub const NITROGEN_PER_OXYGEN: f64 = 3.76; // Molar N2:O2 ratio in air
