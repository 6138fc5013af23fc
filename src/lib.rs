pub mod config;
pub mod constants;
pub mod errors;
pub mod gnc;
pub mod integrators;
pub mod logging;
pub mod models;
pub mod output;
pub mod physics;
pub mod simulation;
