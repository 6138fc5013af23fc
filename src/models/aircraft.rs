pub trait AircraftProperties {
    fn name(&self) -> &'static str;
    fn thrust_weight_ratio(&self) -> f64;
    fn lift_drag_ratio(&self) -> f64;
    fn fuel_consumption_rate(&self) -> f64; // kg/s
}
