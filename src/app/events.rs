//! Outbound application events.
//!
//! The [`ControlService`](super::service::ControlService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  Adapters on
//! the other side decide what to do with them — today that means the
//! serial log.

use crate::combustion::AirBalance;
use crate::error::InputError;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, Copy)]
pub enum AppEvent {
    /// The control service has started.
    Started,

    /// One full cycle was evaluated and actuators were commanded.
    CycleEvaluated(ReportData),

    /// The operator input for a cycle could not be read or parsed.
    InputRejected(InputError),
}

/// Commanded damper motor state, derived from the air balance each cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorStatus {
    Forward,
    Reverse,
    Stopped,
}

impl MotorStatus {
    /// Short tag shown on the LCD status page.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Forward => "FWD",
            Self::Reverse => "REV",
            Self::Stopped => "STOP",
        }
    }
}

/// A point-in-time cycle report suitable for logging or display.
#[derive(Debug, Clone, Copy)]
pub struct ReportData {
    pub oxygen_required_tph: f32,
    pub minimum_air_tph: f32,
    pub flue_gas_tph: f32,
    pub coal_tph: f32,
    pub air_tph: f32,
    pub excess_air_tph: f32,
    pub balance: AirBalance,
    pub motor: MotorStatus,
}
