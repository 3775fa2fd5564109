//! Integration tests for the ControlService → combustion → actuators pipeline.
//!
//! These run on the host (x86_64) and verify that the full chain from a
//! scripted operator input down to actuator calls works correctly without
//! any real hardware.

use crate::mock_hw::{ActuatorCall, LogSink, MockHardware, MockInput};

use airtrim::app::events::{AppEvent, MotorStatus};
use airtrim::app::service::ControlService;
use airtrim::combustion::{AirBalance, CycleInput, FuelComposition};
use airtrim::config::SystemConfig;
use airtrim::error::{Error, InputError};

fn make_service() -> (ControlService, MockHardware, LogSink) {
    let config = SystemConfig::default();
    let mut service = ControlService::new(config);
    let hw = MockHardware::new();
    let mut sink = LogSink::new();
    service.start(&mut sink);
    (service, hw, sink)
}

/// Spec reference coal: min air ≈ 69.13 TPH at 10 TPH coal.
fn reference_sample(air_tph: f32) -> CycleInput {
    CycleInput {
        fuel: FuelComposition {
            carbon: 0.5,
            hydrogen: 0.03,
            sulphur: 0.01,
            oxygen: 0.02,
            nitrogen: 0.01,
        },
        coal_tph: 10.0,
        air_tph,
    }
}

// ── Deficit: air below minimum → green LED + forward ──────────

#[test]
fn air_deficit_drives_damper_forward_with_deficit_led() {
    let (mut service, mut hw, mut sink) = make_service();
    let mut input = MockInput::new();
    input.push_sample(reference_sample(60.0)); // < 69.13

    let report = service.run_cycle(&mut input, &mut hw, &mut sink).unwrap();

    assert_eq!(report.balance, AirBalance::Deficit);
    assert_eq!(report.motor, MotorStatus::Forward);
    assert_eq!(hw.indicators(), (true, false));
    assert_eq!(hw.motor(), Some((50, true)), "forward at default 50% duty");
    assert!(report.excess_air_tph < 0.0);
}

// ── Excess: air above minimum → red LED + reverse ─────────────

#[test]
fn air_excess_drives_damper_reverse_with_excess_led() {
    let (mut service, mut hw, mut sink) = make_service();
    let mut input = MockInput::new();
    input.push_sample(reference_sample(80.0)); // > 69.13

    let report = service.run_cycle(&mut input, &mut hw, &mut sink).unwrap();

    assert_eq!(report.balance, AirBalance::Excess);
    assert_eq!(report.motor, MotorStatus::Reverse);
    assert_eq!(hw.indicators(), (false, true));
    assert_eq!(hw.motor(), Some((50, false)));
    assert!(report.excess_air_tph > 0.0);
}

// ── Boundary: exact balance → both LEDs off, motor stopped ────

#[test]
fn exact_balance_stops_damper_and_clears_indicators() {
    let (mut service, mut hw, mut sink) = make_service();

    // First pass: learn the exact minimum air for the reference coal.
    let mut probe = MockInput::new();
    probe.push_sample(reference_sample(0.0));
    let min_air = service
        .run_cycle(&mut probe, &mut hw, &mut sink)
        .unwrap()
        .minimum_air_tph;

    // Second pass: supply exactly that much air.
    hw.calls.clear();
    let mut input = MockInput::new();
    input.push_sample(reference_sample(min_air));
    let report = service.run_cycle(&mut input, &mut hw, &mut sink).unwrap();

    assert_eq!(report.balance, AirBalance::Balanced);
    assert_eq!(report.motor, MotorStatus::Stopped);
    assert_eq!(hw.indicators(), (false, false));
    assert_eq!(hw.motor(), None, "equality must map to a stopped motor");
    assert_eq!(report.excess_air_tph, 0.0);
}

// ── Reference vector from the commissioning sheet ─────────────

#[test]
fn reference_coal_report_values() {
    let (mut service, mut hw, mut sink) = make_service();
    let mut input = MockInput::new();
    input.push_sample(reference_sample(60.0));

    let report = service.run_cycle(&mut input, &mut hw, &mut sink).unwrap();

    assert!((report.oxygen_required_tph - 15.9).abs() < 1e-3);
    assert!((report.minimum_air_tph - 69.13).abs() < 1e-2);
    assert!(
        sink.events
            .iter()
            .any(|e| matches!(e, AppEvent::CycleEvaluated(_))),
        "cycle report must be emitted through the sink"
    );
}

// ── Malformed input aborts before any actuation ───────────────

#[test]
fn malformed_input_aborts_cycle_without_touching_actuators() {
    let (mut service, mut hw, mut sink) = make_service();
    let mut input = MockInput::new();
    input.push_error(InputError::Malformed("carbon"));

    let err = service
        .run_cycle(&mut input, &mut hw, &mut sink)
        .unwrap_err();

    assert_eq!(err, Error::Input(InputError::Malformed("carbon")));
    assert!(
        hw.calls.is_empty(),
        "no actuator may move on a rejected input"
    );
    assert!(
        sink.events
            .iter()
            .any(|e| matches!(e, AppEvent::InputRejected(InputError::Malformed("carbon")))),
        "rejection must be reported through the sink"
    );
    assert_eq!(service.cycle_count(), 0, "aborted cycles do not count");
}

// ── Idempotence: same input, same command sequence ────────────

#[test]
fn repeated_input_yields_identical_actuator_sequence() {
    let (mut service, mut hw_a, mut sink) = make_service();
    let mut hw_b = MockHardware::new();

    let mut input = MockInput::new();
    input.push_sample(reference_sample(60.0));
    input.push_sample(reference_sample(60.0));

    let a = service.run_cycle(&mut input, &mut hw_a, &mut sink).unwrap();
    let b = service.run_cycle(&mut input, &mut hw_b, &mut sink).unwrap();

    assert_eq!(hw_a.calls, hw_b.calls, "no hidden state between cycles");
    assert_eq!(a.minimum_air_tph, b.minimum_air_tph);
    assert_eq!(a.excess_air_tph, b.excess_air_tph);
    assert_eq!(service.cycle_count(), 2);
}

// ── Configured duty propagates to the motor command ───────────

#[test]
fn configured_duty_reaches_the_damper() {
    let mut config = SystemConfig::default();
    config.damper_duty_percent = 75;
    let mut service = ControlService::new(config);
    let mut hw = MockHardware::new();
    let mut sink = LogSink::new();
    service.start(&mut sink);

    let mut input = MockInput::new();
    input.push_sample(reference_sample(80.0));
    service.run_cycle(&mut input, &mut hw, &mut sink).unwrap();

    assert_eq!(hw.motor(), Some((75, false)));
}

// ── Output reset between cycles ───────────────────────────────

#[test]
fn reset_outputs_issues_all_off() {
    let (mut service, mut hw, mut sink) = make_service();
    let mut input = MockInput::new();
    input.push_sample(reference_sample(60.0));
    service.run_cycle(&mut input, &mut hw, &mut sink).unwrap();

    service.reset_outputs(&mut hw);

    assert_eq!(hw.last_call(), Some(&ActuatorCall::AllOff));
    assert_eq!(hw.indicators(), (false, false));
    assert_eq!(hw.motor(), None);
}

// ── Exhausted input behaves as EOF ────────────────────────────

#[test]
fn exhausted_input_reports_eof() {
    let (mut service, mut hw, mut sink) = make_service();
    let mut input = MockInput::new();

    let err = service
        .run_cycle(&mut input, &mut hw, &mut sink)
        .unwrap_err();
    assert_eq!(err, Error::Input(InputError::Eof));
}
