use crate::errors::Result;
use crate::models::record::CycleRecord;
use crate::models::state::FlightHistory;
use crate::simulation::cycle::CycleSink;
use std::io::{self, Write};

pub fn format_cycle(record: &CycleRecord) -> String {
    format!(
        "Cycle {}:\n\
         \x20 Compression - Temperature: {:.2} K, Pressure: {:.2} kPa\n\
         \x20 Combustion - Temperature: {:.2} K, Pressure: {:.2} kPa\n\
         \x20 Adjusted Hydrogen Injection: {:.2} mol\n\
         \x20 Energy Output: {:.2} J ({:.3} MW)\n\
         \x20 Methane Produced: {:.2} mol, Hydrogen Produced: {:.2} mol\n",
        record.cycle,
        record.compression_temperature,
        record.compression_pressure_kpa,
        record.combustion_temperature,
        record.combustion_pressure_kpa,
        record.adjusted_hydrogen,
        record.energy_output,
        record.energy_output_mw,
        record.methane_produced,
        record.hydrogen_produced,
    )
}

pub fn format_flight_summary(name: &str, history: &FlightHistory) -> String {
    match history.last() {
        Some(last) => format!(
            "{}: {} steps, {:.2} s, fuel {:.2} kg, velocity {:.2} m/s, distance {:.2} m",
            name,
            history.len(),
            last.time,
            last.fuel,
            last.velocity,
            last.distance
        ),
        None => format!("{}: no steps flown", name),
    }
}

/// Writes a human-readable block per cycle to any writer (stdout by default).
pub struct ConsoleReport<W: Write> {
    out: W,
}

impl ConsoleReport<io::Stdout> {
    pub fn stdout() -> Self {
        ConsoleReport { out: io::stdout() }
    }
}

impl<W: Write> ConsoleReport<W> {
    pub fn new(out: W) -> Self {
        ConsoleReport { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CycleSink for ConsoleReport<W> {
    fn record(&mut self, record: &CycleRecord) -> Result<()> {
        writeln!(self.out, "{}", format_cycle(record))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::state::FlightSample;

    fn record() -> CycleRecord {
        CycleRecord {
            cycle: 3,
            compression_temperature: 753.565929,
            compression_pressure_kpa: 2545.168926,
            combustion_temperature: -1234.5678,
            combustion_pressure_kpa: -987.654,
            adjusted_hydrogen: 20.4567,
            energy_output: -2_268_000.126,
            energy_output_mw: -2.2680001,
            methane_produced: 1.0,
            hydrogen_produced: -6.6951,
        }
    }

    #[test]
    fn test_format_cycle() {
        let text = format_cycle(&record());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Cycle 3:");
        assert_eq!(
            lines[1],
            "  Compression - Temperature: 753.57 K, Pressure: 2545.17 kPa"
        );
        assert_eq!(
            lines[2],
            "  Combustion - Temperature: -1234.57 K, Pressure: -987.65 kPa"
        );
        assert_eq!(lines[3], "  Adjusted Hydrogen Injection: 20.46 mol");
        assert_eq!(lines[4], "  Energy Output: -2268000.13 J (-2.268 MW)");
        assert_eq!(
            lines[5],
            "  Methane Produced: 1.00 mol, Hydrogen Produced: -6.70 mol"
        );
    }

    #[test]
    fn test_report_writes_blank_line_between_cycles() {
        let mut report = ConsoleReport::new(Vec::new());
        report.record(&record()).unwrap();
        report.record(&record()).unwrap();
        let text = String::from_utf8(report.into_inner()).unwrap();
        assert_eq!(text.matches("Cycle 3:").count(), 2);
        assert!(text.contains("mol\n\nCycle 3:"));
    }

    #[test]
    fn test_flight_summary() {
        let mut history = FlightHistory::new();
        assert_eq!(format_flight_summary("KA-50", &history), "KA-50: no steps flown");

        history.push(FlightSample {
            time: 1.0,
            fuel: 99.2,
            distance: 1.0,
            velocity: 1.0,
            fuel_consumed: 0.8,
        });
        assert_eq!(
            format_flight_summary("KA-50", &history),
            "KA-50: 1 steps, 1.00 s, fuel 99.20 kg, velocity 1.00 m/s, distance 1.00 m"
        );
    }
}
