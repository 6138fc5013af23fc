use crate::models::aircraft::AircraftProperties;

/// Coaxial rotorcraft: high thrust for vertical lift, poor cruise efficiency.
#[derive(Debug, Clone, Copy)]
pub struct Ka50;

impl Ka50 {
    pub const THRUST_WEIGHT_RATIO: f64 = 1.2;
    pub const LIFT_DRAG_RATIO: f64 = 5.0;
    pub const FUEL_CONSUMPTION_RATE: f64 = 0.8; // kg/s
}

impl AircraftProperties for Ka50 {
    fn name(&self) -> &'static str {
        "KA-50"
    }

    fn thrust_weight_ratio(&self) -> f64 {
        Self::THRUST_WEIGHT_RATIO
    }

    fn lift_drag_ratio(&self) -> f64 {
        Self::LIFT_DRAG_RATIO
    }

    fn fuel_consumption_rate(&self) -> f64 {
        Self::FUEL_CONSUMPTION_RATE
    }
}

/// Ground-effect fixed wing with contra-rotating propellers.
#[derive(Debug, Clone, Copy)]
pub struct Ekranoplan;

impl Ekranoplan {
    pub const THRUST_WEIGHT_RATIO: f64 = 0.5;
    pub const LIFT_DRAG_RATIO: f64 = 15.0;
    pub const FUEL_CONSUMPTION_RATE: f64 = 0.4; // kg/s
}

impl AircraftProperties for Ekranoplan {
    fn name(&self) -> &'static str {
        "Ekrano"
    }

    fn thrust_weight_ratio(&self) -> f64 {
        Self::THRUST_WEIGHT_RATIO
    }

    fn lift_drag_ratio(&self) -> f64 {
        Self::LIFT_DRAG_RATIO
    }

    fn fuel_consumption_rate(&self) -> f64 {
        Self::FUEL_CONSUMPTION_RATE
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissionProfile {
    pub initial_fuel: f64,     // kg
    pub payload: f64,          // kg
    pub initial_velocity: f64, // m/s
    pub time_step: f64,        // s
    pub total_time: f64,       // s
}

impl Default for MissionProfile {
    fn default() -> Self {
        MissionProfile {
            initial_fuel: 100.0,
            payload: 50.0,
            initial_velocity: 0.0,
            time_step: 1.0,
            total_time: 3600.0,
        }
    }
}
