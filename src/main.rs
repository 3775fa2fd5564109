//! AirTrim Firmware — Main Entry Point
//!
//! Hexagonal architecture around a single blocking control loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                  │
//! │                                                          │
//! │  ConsoleInput      HardwareAdapter       LogEventSink    │
//! │  (InputPort)       (Actuator+Display)    (EventSink)     │
//! │                                                          │
//! │  ────────────── Port Trait Boundary ──────────────       │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │           ControlService (pure logic)          │      │
//! │  │     combustion stoichiometry · air balance     │      │
//! │  └────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
pub mod app;
pub mod combustion;
pub mod config;
mod error;
mod pins;

mod adapters;
mod drivers;

// ── Imports ───────────────────────────────────────────────────
use std::time::Duration;

use anyhow::Result;
use log::{info, warn};

use esp_idf_hal::delay::Delay;
use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::units::FromValueType;

use adapters::console::ConsoleInput;
use adapters::hardware::HardwareAdapter;
use adapters::log_sink::LogEventSink;
use app::display::lcd_pages;
use app::ports::DisplayPort;
use app::service::ControlService;
use config::SystemConfig;
use drivers::indicators::IndicatorLeds;
use drivers::lcd::Lcd1602;
use drivers::motor::DamperMotor;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  AirTrim v{}                        ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = drivers::hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    let config = SystemConfig::default();

    // ── 3. I²C bus + LCD ──────────────────────────────────────
    // SDA/SCL per pins::I2C_SDA_GPIO / pins::I2C_SCL_GPIO.
    let peripherals = Peripherals::take()?;
    let i2c_cfg = I2cConfig::new().baudrate(pins::I2C_FREQ_HZ.Hz());
    let i2c = I2cDriver::new(
        peripherals.i2c0,
        peripherals.pins.gpio4,
        peripherals.pins.gpio5,
        &i2c_cfg,
    )?;
    let lcd = Lcd1602::new(i2c, Delay::new_default(), pins::LCD_I2C_ADDR);

    // ── 4. Construct adapters ─────────────────────────────────
    let mut hw = HardwareAdapter::new(DamperMotor::new(), IndicatorLeds::new(), lcd);
    if let Err(e) = hw.init_display() {
        warn!("{} — continuing without display", e);
    }

    let mut console = ConsoleInput::new();
    let mut sink = LogEventSink::new();

    // ── 5. Construct control service ──────────────────────────
    let mut service = ControlService::new(config.clone());
    service.start(&mut sink);

    info!("System ready. Entering control loop.");

    // ── 6. Control loop ───────────────────────────────────────
    loop {
        match service.run_cycle(&mut console, &mut hw, &mut sink) {
            Ok(report) => {
                let pages = lcd_pages(&report);

                // Page 1: minimum air + flue gas.
                hw.clear();
                hw.write_line(0, &pages[0].line1);
                hw.write_line(1, &pages[0].line2);
                hold_secs(config.page_one_hold_secs);

                // Page 2: excess air + motor state.
                hw.clear();
                hw.write_line(0, &pages[1].line1);
                hw.write_line(1, &pages[1].line2);
                hold_secs(config.page_two_hold_secs);

                // Hold the outputs, then return everything to the safe
                // state before prompting for the next cycle.
                hold_secs(config.settle_hold_secs);
                service.reset_outputs(&mut hw);

                hold_secs(config.inter_cycle_delay_secs);
                hw.clear();

                info!("cycle {} complete", service.cycle_count());
            }
            Err(e) => {
                // Malformed input is fatal to this iteration only.
                warn!("cycle aborted: {}", e);
                service.reset_outputs(&mut hw);
                hold_secs(config.inter_cycle_delay_secs);
            }
        }
    }
}

fn hold_secs(secs: u16) {
    std::thread::sleep(Duration::from_secs(u64::from(secs)));
}
