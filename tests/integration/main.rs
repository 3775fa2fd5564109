//! Host-side integration test harness.
//!
//! Single binary that pulls in the shared mock adapters plus every
//! integration test module.

mod mock_hw;

mod control_cycle_tests;
