/// Level-flight force model: lift equals weight, no speed or angle-of-attack terms.
pub fn thrust(thrust_weight_ratio: f64, weight: f64) -> f64 {
    thrust_weight_ratio * weight
}

pub fn drag(lift_drag_ratio: f64, lift: f64) -> f64 {
    lift / lift_drag_ratio
}

/// Acceleration from net thrust. Only positive net thrust accelerates; there is
/// no braking term.
pub fn acceleration(thrust: f64, drag: f64, weight: f64) -> f64 {
    let net_thrust = thrust - drag;
    if net_thrust > 0.0 {
        net_thrust / weight
    } else {
        0.0
    }
}
