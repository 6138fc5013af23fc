use crate::config::engine::CycleConfig;
use crate::errors::Result;
use crate::gnc::control::pid::PidState;
use crate::models::gas::GasState;
use crate::models::record::CycleRecord;
use crate::physics::combustion::{
    combustion_energy, combustion_stroke, complete_burn, oxygen_demand,
};
use crate::physics::compression::compression_stroke;
use crate::physics::energy::{electrolysis, energy_generation, methanation};
use tracing::{debug, info, warn};

/// Receives each cycle record as soon as it is computed.
pub trait CycleSink {
    fn record(&mut self, record: &CycleRecord) -> Result<()>;
}

impl CycleSink for Vec<CycleRecord> {
    fn record(&mut self, record: &CycleRecord) -> Result<()> {
        self.push(*record);
        Ok(())
    }
}

impl<A: CycleSink, B: CycleSink> CycleSink for (A, B) {
    fn record(&mut self, record: &CycleRecord) -> Result<()> {
        self.0.record(record)?;
        self.1.record(record)
    }
}

impl<S: CycleSink + ?Sized> CycleSink for &mut S {
    fn record(&mut self, record: &CycleRecord) -> Result<()> {
        (**self).record(record)
    }
}

/// Runs `config.cycles` engine cycles.
///
/// Every cycle compresses the same initial charge; only the controller state and
/// therefore the hydrogen injection carry over between cycles.
pub fn run_cycles<S: CycleSink>(
    config: &CycleConfig,
    sink: &mut S,
) -> Result<Vec<CycleRecord>> {
    let (kp, ki, kd) = config.controller.gains();
    info!(
        cycles = config.cycles,
        setpoint = config.setpoint_temperature,
        kp,
        ki,
        kd,
        "starting engine cycle simulation"
    );

    let initial = GasState::from_pvt(
        config.initial_pressure,
        config.chamber_volume,
        config.initial_temperature,
    );

    let mut pid_state = PidState::default();
    let mut records = Vec::with_capacity(config.cycles);

    for cycle in 1..=config.cycles {
        let compressed = compression_stroke(&initial, config.compression_ratio);

        let (next_state, pid_output) = config.controller.update(
            pid_state,
            config.setpoint_temperature,
            compressed.temperature,
            config.controller_dt,
        )?;
        pid_state = next_state;

        let charge = config
            .charge
            .with_hydrogen(config.charge.hydrogen * (1.0 + pid_output / 100.0));
        if oxygen_demand(&charge) > charge.oxygen {
            warn!(
                cycle,
                demand = oxygen_demand(&charge),
                available = charge.oxygen,
                "charge is oxygen-starved; burn still treated as complete"
            );
        }

        let burned = combustion_stroke(&compressed, &charge);

        let released = combustion_energy(charge.methanol, charge.hydrogen);
        let turbine = energy_generation(released, config.turbine_efficiency);
        let co2_captured = complete_burn(&charge).carbon_dioxide;
        let methane_produced = methanation(charge.hydrogen, co2_captured);
        let hydrogen_produced = electrolysis(turbine.energy);

        let record = CycleRecord {
            cycle,
            compression_temperature: compressed.temperature,
            compression_pressure_kpa: compressed.pressure_kpa(),
            combustion_temperature: burned.temperature,
            combustion_pressure_kpa: burned.pressure_kpa(),
            adjusted_hydrogen: charge.hydrogen,
            energy_output: turbine.energy,
            energy_output_mw: turbine.megawatts,
            methane_produced,
            hydrogen_produced,
        };
        debug!(
            cycle,
            pid_output,
            integral = pid_state.integral,
            hydrogen = charge.hydrogen,
            "cycle complete"
        );

        sink.record(&record)?;
        records.push(record);
    }

    info!(cycles = records.len(), "engine cycle simulation finished");
    Ok(records)
}
