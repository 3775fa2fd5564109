//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ControlService (domain)
//! ```
//!
//! Driven adapters (console input, actuators, the LCD, event sinks)
//! implement these traits.  The [`ControlService`](super::service::ControlService)
//! consumes them via generics, so the domain core never touches hardware
//! directly.

use crate::combustion::CycleInput;
use crate::error::InputError;

// ───────────────────────────────────────────────────────────────
// Input port (driven adapter: operator → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to obtain one cycle's inputs.
///
/// A failed read aborts the current cycle — there is no per-field retry.
pub trait InputPort {
    /// Read the six composition fractions and two flow rates.
    fn read_cycle(&mut self) -> Result<CycleInput, InputError>;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command actuators.
pub trait ActuatorPort {
    /// Set the two indicator LEDs (deficit = green, excess = red).
    fn set_indicators(&mut self, deficit: bool, excess: bool);

    /// Drive the damper motor at `duty` (0–100), `forward` = open damper.
    fn drive_damper(&mut self, duty: u8, forward: bool);

    /// Stop the damper motor (zero duty, coast).
    fn stop_damper(&mut self);

    /// Kill all actuators (motor, LEDs) — safe shutdown between cycles.
    fn all_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → 16x2 LCD)
// ───────────────────────────────────────────────────────────────

/// Text display port.  Implementations log and swallow bus errors —
/// a flaky display must not stop the control loop.
pub trait DisplayPort {
    /// Clear the display and return the cursor home.
    fn clear(&mut self);

    /// Write `text` starting at column 0 of `row` (0 or 1).
    /// Text beyond the display width is truncated.
    fn write_line(&mut self, row: u8, text: &str);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log today;
/// telemetry uplinks would implement the same trait).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
