/// Semi-implicit Euler step for 1-D motion: velocity first, then distance with
/// the updated velocity. Returns `(velocity, distance)`.
pub fn step(velocity: f64, distance: f64, acceleration: f64, dt: f64) -> (f64, f64) {
    let velocity = velocity + acceleration * dt;
    let distance = distance + velocity * dt;
    (velocity, distance)
}
