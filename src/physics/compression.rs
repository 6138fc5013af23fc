use crate::constants::GAMMA;
use crate::models::gas::GasState;

/// Adiabatic compression of `initial` by `compression_ratio` (V_initial / V_final).
///
/// Moles are conserved, so the result still satisfies the ideal-gas law.
pub fn compression_stroke(initial: &GasState, compression_ratio: f64) -> GasState {
    GasState {
        volume: initial.volume / compression_ratio,
        temperature: initial.temperature * compression_ratio.powf(GAMMA - 1.0),
        pressure: initial.pressure * compression_ratio.powf(GAMMA),
        moles: initial.moles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test]
    fn test_reference_stroke() {
        let initial = GasState::from_pvt(101_325.0, 1.0, 300.0);
        let compressed = compression_stroke(&initial, 10.0);

        assert_relative_eq!(compressed.volume, 0.1, epsilon = 1e-12);
        assert_relative_eq!(compressed.temperature, 753.5659, epsilon = 1e-3);
        assert_relative_eq!(compressed.pressure, 2_545_168.93, epsilon = 1e-1);
        assert!(compressed.ideal_gas_residual() < 1e-12);
    }

    #[test_case(1.5; "mild")]
    #[test_case(10.0; "reference")]
    #[test_case(22.0; "diesel-like")]
    fn test_compression_raises_temperature_and_pressure(ratio: f64) {
        let initial = GasState::from_pvt(101_325.0, 1.0, 300.0);
        let compressed = compression_stroke(&initial, ratio);

        assert!(compressed.volume < initial.volume);
        assert!(compressed.temperature > initial.temperature);
        assert!(compressed.pressure > initial.pressure);
    }

    #[test]
    fn test_unit_ratio_is_identity() {
        let initial = GasState::from_pvt(200_000.0, 0.5, 350.0);
        assert_eq!(compression_stroke(&initial, 1.0), initial);
    }
}
