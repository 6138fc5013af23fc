use crate::errors::{Result, SimulationError};

/// Accumulated controller memory. Threaded through [`PidController::update`]
/// by value so a run can be replayed from any intermediate state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PidState {
    pub integral: f64,
    pub prev_error: f64,
}

/// Textbook PID law. The integral is unbounded (no clamping, no anti-windup).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PidController {
    kp: f64,
    ki: f64,
    kd: f64,
}

impl PidController {
    pub fn new(kp: f64, ki: f64, kd: f64) -> Self {
        Self { kp, ki, kd }
    }

    pub fn gains(&self) -> (f64, f64, f64) {
        (self.kp, self.ki, self.kd)
    }

    pub fn update(
        &self,
        state: PidState,
        setpoint: f64,
        measured: f64,
        dt: f64,
    ) -> Result<(PidState, f64)> {
        if !(dt > 0.0 && dt.is_finite()) {
            return Err(SimulationError::InvalidTimeStep(dt));
        }

        let error = setpoint - measured;
        let integral = state.integral + error * dt;
        let derivative = (error - state.prev_error) / dt;

        let output = self.kp * error + self.ki * integral + self.kd * derivative;

        Ok((
            PidState {
                integral,
                prev_error: error,
            },
            output,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test]
    fn test_first_update_from_rest() {
        let pid = PidController::new(1.0, 0.1, 0.05);
        let (state, output) = pid
            .update(PidState::default(), 1500.0, 1000.0, 0.1)
            .unwrap();

        // 500 + 0.1 * 50 + 0.05 * 5000
        assert_relative_eq!(output, 755.0, epsilon = 1e-9);
        assert_relative_eq!(state.integral, 50.0, epsilon = 1e-12);
        assert_relative_eq!(state.prev_error, 500.0);
    }

    #[test]
    fn test_constant_error_only_grows_integral() {
        let pid = PidController::new(1.0, 0.1, 0.05);
        let (s1, _) = pid.update(PidState::default(), 10.0, 0.0, 0.1).unwrap();
        let (s2, out2) = pid.update(s1, 10.0, 0.0, 0.1).unwrap();

        // derivative vanishes once the error stops changing
        assert_relative_eq!(out2, 10.0 + 0.1 * 2.0, epsilon = 1e-12);
        assert_relative_eq!(s2.integral, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_replay_is_deterministic() {
        let pid = PidController::new(1.0, 0.1, 0.05);
        let start = PidState {
            integral: 3.0,
            prev_error: -1.0,
        };
        let a = pid.update(start, 1500.0, 753.0, 0.1).unwrap();
        let b = pid.update(start, 1500.0, 753.0, 0.1).unwrap();
        assert_eq!(a, b);
    }

    #[test_case(0.0; "zero")]
    #[test_case(-0.1; "negative")]
    #[test_case(f64::NAN; "nan")]
    #[test_case(f64::INFINITY; "infinite")]
    fn test_rejects_invalid_time_step(dt: f64) {
        let pid = PidController::new(1.0, 0.1, 0.05);
        let result = pid.update(PidState::default(), 1500.0, 700.0, dt);
        assert!(matches!(result, Err(SimulationError::InvalidTimeStep(_))));
    }
}
