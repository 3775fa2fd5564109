//! Mock adapters for integration tests.
//!
//! Records every actuator call so tests can assert on the full command
//! history without touching real GPIO/PWM registers, and scripts the
//! operator input queue.

use std::collections::VecDeque;

use airtrim::app::events::AppEvent;
use airtrim::app::ports::{ActuatorPort, EventSink, InputPort};
use airtrim::combustion::CycleInput;
use airtrim::error::InputError;

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorCall {
    SetIndicators { deficit: bool, excess: bool },
    DriveDamper { duty: u8, forward: bool },
    StopDamper,
    AllOff,
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub calls: Vec<ActuatorCall>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    pub fn last_call(&self) -> Option<&ActuatorCall> {
        self.calls.last()
    }

    /// Latest effective indicator state (deficit, excess).
    pub fn indicators(&self) -> (bool, bool) {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match c {
                ActuatorCall::SetIndicators { deficit, excess } => Some((*deficit, *excess)),
                ActuatorCall::AllOff => Some((false, false)),
                _ => None,
            })
            .unwrap_or((false, false))
    }

    /// Latest effective motor command: `Some((duty, forward))` or `None`
    /// when stopped.
    pub fn motor(&self) -> Option<(u8, bool)> {
        self.calls.iter().rev().find_map(|c| match c {
            ActuatorCall::DriveDamper { duty, forward } => Some(Some((*duty, *forward))),
            ActuatorCall::StopDamper | ActuatorCall::AllOff => Some(None),
            ActuatorCall::SetIndicators { .. } => None,
        })?
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl ActuatorPort for MockHardware {
    fn set_indicators(&mut self, deficit: bool, excess: bool) {
        self.calls.push(ActuatorCall::SetIndicators { deficit, excess });
    }

    fn drive_damper(&mut self, duty: u8, forward: bool) {
        self.calls.push(ActuatorCall::DriveDamper { duty, forward });
    }

    fn stop_damper(&mut self) {
        self.calls.push(ActuatorCall::StopDamper);
    }

    fn all_off(&mut self) {
        self.calls.push(ActuatorCall::AllOff);
    }
}

// ── MockInput ─────────────────────────────────────────────────

/// Scripted operator input: a queue of samples or injected errors.
pub struct MockInput {
    queue: VecDeque<Result<CycleInput, InputError>>,
}

#[allow(dead_code)]
impl MockInput {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    pub fn push_sample(&mut self, sample: CycleInput) {
        self.queue.push_back(Ok(sample));
    }

    pub fn push_error(&mut self, err: InputError) {
        self.queue.push_back(Err(err));
    }
}

impl Default for MockInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputPort for MockInput {
    fn read_cycle(&mut self) -> Result<CycleInput, InputError> {
        self.queue.pop_front().unwrap_or(Err(InputError::Eof))
    }
}

// ── LogSink ───────────────────────────────────────────────────

pub struct LogSink {
    pub events: Vec<AppEvent>,
}

impl LogSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}
