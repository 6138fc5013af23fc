/// Point-mass flight state. Weight is carried in kilograms, as the force model
/// treats mass and weight interchangeably.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightState {
    pub fuel_mass: f64,
    pub weight: f64,
    pub velocity: f64,
    pub distance: f64,
}

impl FlightState {
    pub fn new(fuel_mass: f64, payload: f64, velocity: f64) -> Self {
        FlightState {
            fuel_mass,
            weight: payload + fuel_mass,
            velocity,
            distance: 0.0,
        }
    }
}

/// One recorded time step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightSample {
    pub time: f64, // s, end of step
    pub fuel: f64,
    pub distance: f64,
    pub velocity: f64,
    pub fuel_consumed: f64,
}

#[derive(Debug, Clone, Default)]
pub struct FlightHistory {
    samples: Vec<FlightSample>,
}

impl FlightHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: FlightSample) {
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[FlightSample] {
        &self.samples
    }

    pub fn last(&self) -> Option<&FlightSample> {
        self.samples.last()
    }

    pub fn fuel(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.fuel).collect()
    }

    pub fn distance(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.distance).collect()
    }

    pub fn fuel_consumed(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.fuel_consumed).collect()
    }
}
