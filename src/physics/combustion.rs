use super::ideal_gas;
use crate::constants::{DELTA_H_HYDROGEN, DELTA_H_METHANOL, MIXTURE_HEAT_CAPACITY};
use crate::models::gas::GasState;
use crate::models::reaction::ReactionMix;

/// Stoichiometric coefficients per mole of fuel burned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stoichiometry {
    pub oxygen: f64,
    pub carbon_dioxide: f64,
    pub water: f64,
}

// CH3OH + 1.5 O2 -> CO2 + 2 H2O
pub const METHANOL_COMBUSTION: Stoichiometry = Stoichiometry {
    oxygen: 1.5,
    carbon_dioxide: 1.0,
    water: 2.0,
};

// H2 + 0.5 O2 -> H2O
pub const HYDROGEN_COMBUSTION: Stoichiometry = Stoichiometry {
    oxygen: 0.5,
    carbon_dioxide: 0.0,
    water: 1.0,
};

/// Heat released by burning both fuels completely (J). Negative: exothermic.
pub fn combustion_energy(methanol: f64, hydrogen: f64) -> f64 {
    methanol * DELTA_H_METHANOL + hydrogen * DELTA_H_HYDROGEN
}

/// Oxygen needed to burn every mole of fuel in `mix`.
pub fn oxygen_demand(mix: &ReactionMix) -> f64 {
    mix.methanol * METHANOL_COMBUSTION.oxygen + mix.hydrogen * HYDROGEN_COMBUSTION.oxygen
}

/// Product inventory after a complete burn. Any oxygen shortfall is not modelled;
/// residual oxygen floors at zero.
pub fn complete_burn(mix: &ReactionMix) -> ReactionMix {
    ReactionMix {
        methanol: 0.0,
        hydrogen: 0.0,
        oxygen: (mix.oxygen - oxygen_demand(mix)).max(0.0),
        nitrogen: mix.nitrogen,
        carbon_dioxide: mix.carbon_dioxide
            + mix.methanol * METHANOL_COMBUSTION.carbon_dioxide
            + mix.hydrogen * HYDROGEN_COMBUSTION.carbon_dioxide,
        water: mix.water
            + mix.methanol * METHANOL_COMBUSTION.water
            + mix.hydrogen * HYDROGEN_COMBUSTION.water,
    }
}

/// Constant-volume burn of `mix` at the compressed state.
///
/// The released energy is spread over the pre-burn charge moles with a lumped heat
/// capacity, and pressure follows from the ideal-gas law at the new temperature.
pub fn combustion_stroke(compressed: &GasState, mix: &ReactionMix) -> GasState {
    let released = combustion_energy(mix.methanol, mix.hydrogen);
    let n_total = mix.total_moles();

    let delta_t = released / (n_total * MIXTURE_HEAT_CAPACITY);
    let temperature = compressed.temperature + delta_t;

    GasState {
        pressure: ideal_gas::pressure(temperature, compressed.volume, n_total),
        volume: compressed.volume,
        temperature,
        moles: n_total,
    }
}
