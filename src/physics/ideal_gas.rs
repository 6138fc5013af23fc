//! pV = nRT solved for each quantity.
//!
//! Callers guarantee positive volume, temperature and moles; no runtime checks.

use crate::constants::R;

pub fn temperature(pressure: f64, volume: f64, moles: f64) -> f64 {
    pressure * volume / (moles * R)
}

pub fn pressure(temperature: f64, volume: f64, moles: f64) -> f64 {
    moles * R * temperature / volume
}

pub fn volume(temperature: f64, pressure: f64, moles: f64) -> f64 {
    moles * R * temperature / pressure
}

pub fn moles(pressure: f64, volume: f64, temperature: f64) -> f64 {
    pressure * volume / (R * temperature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    #[test_case(101_325.0, 0.0224, 273.15, 0.99938; "molar volume at STP")]
    #[test_case(101_325.0, 1.0, 300.0, 40.62199; "one cubic metre of ambient air")]
    fn test_moles(p: f64, v: f64, t: f64, expected: f64) {
        assert_relative_eq!(moles(p, v, t), expected, epsilon = 1e-4);
    }

    #[test]
    fn test_round_trip_recovers_inputs() {
        let mut rng = StdRng::seed_from_u64(0x1DEA_16A5);
        for _ in 0..1000 {
            let p = rng.gen_range(1.0e3..1.0e7);
            let v = rng.gen_range(1.0e-4..10.0);
            let t = rng.gen_range(50.0..3000.0);
            let n = moles(p, v, t);

            assert_relative_eq!(pressure(t, v, n), p, max_relative = 1e-12);
            assert_relative_eq!(volume(t, p, n), v, max_relative = 1e-12);
            assert_relative_eq!(temperature(p, v, n), t, max_relative = 1e-12);
        }
    }
}
