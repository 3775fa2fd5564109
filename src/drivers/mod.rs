//! Actuator drivers, hardware initialisation, and peripheral helpers.

pub mod hw_init;
pub mod indicators;
pub mod lcd;
pub mod motor;
