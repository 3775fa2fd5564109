//! Control service — the hexagonal core.
//!
//! [`ControlService`] runs one full monitoring cycle per call: read the
//! operator's fuel and flow inputs, evaluate the combustion balance, map
//! the balance onto the two indicator LEDs and the damper motor, and emit
//! a structured report.  All I/O flows through port traits injected at
//! call sites, making the entire service testable with mock adapters.
//!
//! ```text
//!   InputPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │     ControlService      │
//! ActuatorPort ◀──│  stoichiometry · policy │
//!                 └────────────────────────┘
//! ```

use log::info;

use crate::combustion::{self, AirBalance};
use crate::config::SystemConfig;
use crate::error::Result;

use super::events::{AppEvent, MotorStatus, ReportData};
use super::ports::{ActuatorPort, EventSink, InputPort};

// ───────────────────────────────────────────────────────────────
// ControlService
// ───────────────────────────────────────────────────────────────

/// The control service orchestrates all domain logic.
pub struct ControlService {
    config: SystemConfig,
    cycle_count: u64,
}

impl ControlService {
    /// Construct the service from configuration.
    pub fn new(config: SystemConfig) -> Self {
        Self {
            config,
            cycle_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Announce startup through the event sink.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started);
        info!(
            "ControlService started (damper duty {}%)",
            self.config.damper_duty_percent
        );
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one full monitoring cycle: read inputs → evaluate → actuate.
    ///
    /// A malformed or failed input aborts the cycle before any actuator is
    /// touched; the error is reported through the sink and returned so the
    /// main loop can reset outputs and move on.
    pub fn run_cycle(
        &mut self,
        input: &mut impl InputPort,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) -> Result<ReportData> {
        // 1. Read the operator's inputs via InputPort
        let sample = match input.read_cycle() {
            Ok(sample) => sample,
            Err(e) => {
                sink.emit(&AppEvent::InputRejected(e));
                return Err(e.into());
            }
        };

        // 2. Pure combustion evaluation — recomputed every cycle
        let result = combustion::evaluate(&sample);
        let balance = AirBalance::classify(sample.air_tph, result.minimum_air_tph);

        // 3. Map the balance onto indicators + damper via ActuatorPort
        let motor = self.apply_actuators(balance, hw);

        self.cycle_count += 1;

        // 4. Emit the cycle report
        let report = ReportData {
            oxygen_required_tph: result.oxygen_required_tph,
            minimum_air_tph: result.minimum_air_tph,
            flue_gas_tph: result.flue_gas_tph,
            coal_tph: sample.coal_tph,
            air_tph: sample.air_tph,
            excess_air_tph: result.excess_air_tph,
            balance,
            motor,
        };
        sink.emit(&AppEvent::CycleEvaluated(report));

        Ok(report)
    }

    /// Return all outputs to the safe state between cycles.
    pub fn reset_outputs(&self, hw: &mut impl ActuatorPort) {
        hw.all_off();
    }

    // ── Queries ───────────────────────────────────────────────

    /// Total cycles evaluated since startup.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    // ── Internal ──────────────────────────────────────────────

    /// Translate the air balance into port calls.  Stateless — the same
    /// balance always produces the same commands.
    fn apply_actuators(&self, balance: AirBalance, hw: &mut impl ActuatorPort) -> MotorStatus {
        let duty = self.config.damper_duty_percent;
        match balance {
            AirBalance::Deficit => {
                hw.set_indicators(true, false);
                hw.drive_damper(duty, true);
                MotorStatus::Forward
            }
            AirBalance::Excess => {
                hw.set_indicators(false, true);
                hw.drive_damper(duty, false);
                MotorStatus::Reverse
            }
            AirBalance::Balanced => {
                hw.set_indicators(false, false);
                hw.stop_damper();
                MotorStatus::Stopped
            }
        }
    }
}
