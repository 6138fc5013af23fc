use crate::config::aircraft::{Ekranoplan, Ka50, MissionProfile};
use crate::errors::{Result, SimulationError};
use crate::integrators::euler;
use crate::models::aircraft::AircraftProperties;
use crate::models::state::{FlightHistory, FlightSample, FlightState};
use crate::physics::aero;
use tracing::{debug, info};

/// Completed run of one aircraft configuration.
#[derive(Debug, Clone)]
pub struct FlightRun {
    pub name: &'static str,
    pub history: FlightHistory,
}

/// Flies `aircraft` through `mission` until the fuel runs out or the mission
/// time elapses.
///
/// Each step's sample is appended before the fuel check, so the step that
/// exhausts the tank is part of the history.
pub fn simulate<T: AircraftProperties>(
    aircraft: &T,
    mission: &MissionProfile,
) -> Result<FlightHistory> {
    let dt = mission.time_step;
    if !(dt > 0.0 && dt.is_finite()) {
        return Err(SimulationError::InvalidTimeStep(dt));
    }

    let steps = (mission.total_time / dt).ceil() as usize;
    let fuel_per_step = aircraft.fuel_consumption_rate() * dt;

    let mut state = FlightState::new(
        mission.initial_fuel,
        mission.payload,
        mission.initial_velocity,
    );
    let mut history = FlightHistory::new();

    for step in 1..=steps {
        let thrust = aero::thrust(aircraft.thrust_weight_ratio(), state.weight);
        let lift = state.weight;
        let drag = aero::drag(aircraft.lift_drag_ratio(), lift);
        let acceleration = aero::acceleration(thrust, drag, state.weight);

        (state.velocity, state.distance) =
            euler::step(state.velocity, state.distance, acceleration, dt);

        // Closed form keeps the depletion step free of accumulated rounding.
        state.fuel_mass = mission.initial_fuel - fuel_per_step * step as f64;
        state.weight = mission.payload + state.fuel_mass;

        history.push(FlightSample {
            time: step as f64 * dt,
            fuel: state.fuel_mass,
            distance: state.distance,
            velocity: state.velocity,
            fuel_consumed: fuel_per_step,
        });
        debug!(
            aircraft = aircraft.name(),
            step,
            fuel = state.fuel_mass,
            velocity = state.velocity,
            distance = state.distance
        );

        if state.fuel_mass <= 0.0 {
            info!(
                aircraft = aircraft.name(),
                time = step as f64 * dt,
                distance = state.distance,
                "fuel exhausted"
            );
            break;
        }
    }

    Ok(history)
}

/// Runs every aircraft configuration over the same mission, each with its own state.
pub fn compare(mission: &MissionProfile) -> Result<Vec<FlightRun>> {
    Ok(vec![
        FlightRun {
            name: Ka50.name(),
            history: simulate(&Ka50, mission)?,
        },
        FlightRun {
            name: Ekranoplan.name(),
            history: simulate(&Ekranoplan, mission)?,
        },
    ])
}
