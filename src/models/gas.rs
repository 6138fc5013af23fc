use crate::physics::ideal_gas;

/// Thermodynamic state of a closed ideal-gas charge.
///
/// Every constructor derives the fourth quantity from the other three, so
/// `pressure * volume == moles * R * temperature` holds for any value built here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasState {
    pub pressure: f64,    // Pa
    pub volume: f64,      // m³
    pub temperature: f64, // K
    pub moles: f64,       // mol
}

impl GasState {
    pub fn from_pvt(pressure: f64, volume: f64, temperature: f64) -> Self {
        GasState {
            pressure,
            volume,
            temperature,
            moles: ideal_gas::moles(pressure, volume, temperature),
        }
    }

    pub fn from_nvt(moles: f64, volume: f64, temperature: f64) -> Self {
        GasState {
            pressure: ideal_gas::pressure(temperature, volume, moles),
            volume,
            temperature,
            moles,
        }
    }

    pub fn pressure_kpa(&self) -> f64 {
        self.pressure / crate::constants::PASCALS_PER_KPA
    }

    /// Relative deviation from pV = nRT.
    pub fn ideal_gas_residual(&self) -> f64 {
        let pv = self.pressure * self.volume;
        let nrt = self.moles * crate::constants::R * self.temperature;
        (pv - nrt).abs() / pv.abs().max(nrt.abs()).max(f64::MIN_POSITIVE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_pvt_satisfies_ideal_gas_law() {
        let gas = GasState::from_pvt(101_325.0, 1.0, 300.0);
        assert_relative_eq!(gas.moles, 40.62199, epsilon = 1e-4);
        assert!(gas.ideal_gas_residual() < 1e-12);
    }

    #[test]
    fn test_from_nvt_satisfies_ideal_gas_law() {
        let gas = GasState::from_nvt(33.0, 0.1, 1200.0);
        assert!(gas.ideal_gas_residual() < 1e-12);
        assert_relative_eq!(gas.pressure_kpa(), gas.pressure / 1000.0);
    }
}
