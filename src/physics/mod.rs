pub mod aero;
pub mod combustion;
pub mod compression;
pub mod energy;
pub mod ideal_gas;
