/// Molar inventory of the species tracked through one engine cycle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReactionMix {
    pub methanol: f64,       // CH3OH (mol)
    pub hydrogen: f64,       // H2 (mol)
    pub oxygen: f64,         // O2 (mol)
    pub nitrogen: f64,       // N2 (mol)
    pub carbon_dioxide: f64, // CO2 (mol)
    pub water: f64,          // H2O (mol)
}

impl ReactionMix {
    /// Fuel plus air charge; nitrogen follows the air composition.
    pub fn charge(methanol: f64, hydrogen: f64, oxygen: f64) -> Self {
        ReactionMix {
            methanol,
            hydrogen,
            oxygen,
            nitrogen: crate::constants::NITROGEN_PER_OXYGEN * oxygen,
            carbon_dioxide: 0.0,
            water: 0.0,
        }
    }

    pub fn total_moles(&self) -> f64 {
        self.methanol
            + self.hydrogen
            + self.oxygen
            + self.nitrogen
            + self.carbon_dioxide
            + self.water
    }

    /// Same charge with a different hydrogen injection. Moles never go negative.
    pub fn with_hydrogen(&self, hydrogen: f64) -> Self {
        ReactionMix {
            hydrogen: hydrogen.max(0.0),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_charge_uses_air_composition() {
        let mix = ReactionMix::charge(1.0, 2.0, 6.5);
        assert_relative_eq!(mix.nitrogen, 24.44, epsilon = 1e-12);
        assert_relative_eq!(mix.total_moles(), 33.94, epsilon = 1e-12);
    }

    #[test]
    fn test_with_hydrogen_clamps_negative_injection() {
        let mix = ReactionMix::charge(1.0, 2.0, 6.5).with_hydrogen(-3.0);
        assert_eq!(mix.hydrogen, 0.0);
        assert_eq!(mix.methanol, 1.0);
    }
}
