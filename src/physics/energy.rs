use crate::constants::{
    ELECTROLYSIS_EFFICIENCY, ELECTROLYSIS_ENERGY_PER_MOL_H2, MEGAWATT, METHANATION_H2_PER_CO2,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurbineOutput {
    pub energy: f64,    // J
    pub megawatts: f64, // MW
}

/// Turbine work extracted from the combustion heat.
///
/// The sign of `released` is carried through unchanged, so an exothermic
/// (negative) release yields a negative output.
pub fn energy_generation(released: f64, turbine_efficiency: f64) -> TurbineOutput {
    let energy = released * turbine_efficiency;
    TurbineOutput {
        energy,
        megawatts: energy / MEGAWATT,
    }
}

/// CH4 from CO2 + 4 H2 -> CH4 + 2 H2O, limited by whichever reagent runs out first.
pub fn methanation(hydrogen: f64, co2_captured: f64) -> f64 {
    (hydrogen / METHANATION_H2_PER_CO2).min(co2_captured)
}

/// Moles of H2 regenerated by spending turbine output on electrolysis.
pub fn electrolysis(energy_output: f64) -> f64 {
    energy_output * ELECTROLYSIS_EFFICIENCY / ELECTROLYSIS_ENERGY_PER_MOL_H2
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test_case(8.0, 1.0, 1.0; "co2 limited")]
    #[test_case(2.0, 5.0, 0.5; "hydrogen limited")]
    #[test_case(4.0, 1.0, 1.0; "stoichiometric")]
    #[test_case(0.0, 1.0, 0.0; "no hydrogen")]
    fn test_methanation_limiting_reagent(hydrogen: f64, co2: f64, expected: f64) {
        assert_relative_eq!(methanation(hydrogen, co2), expected);
    }

    #[test]
    fn test_energy_generation_keeps_sign() {
        let out = energy_generation(-1_209_600.0, 0.4);
        assert_relative_eq!(out.energy, -483_840.0, epsilon = 1e-9);
        assert_relative_eq!(out.megawatts, -0.48384, epsilon = 1e-12);
        assert!(out.energy < 0.0 && out.megawatts < 0.0);
    }

    #[test]
    fn test_electrolysis_yield() {
        // 237.13 kJ at 70 % efficiency per mole
        let energy = 237_130.0 / 0.7;
        assert_relative_eq!(electrolysis(energy), 1.0, epsilon = 1e-12);
        assert!(electrolysis(-483_840.0) < 0.0);
    }
}
