//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the business rules for the AirTrim monitor:
//! combustion evaluation, the three-way actuator policy, and report
//! formatting.  All interaction with hardware happens through **port
//! traits** defined in [`ports`], keeping this layer fully testable
//! without real peripherals.

pub mod display;
pub mod events;
pub mod ports;
pub mod service;
