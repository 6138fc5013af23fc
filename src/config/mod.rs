pub mod aircraft;
pub mod engine;

pub use aircraft::{Ekranoplan, Ka50, MissionProfile};
pub use engine::CycleConfig;
