//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the actuator drivers and the LCD, exposing them through
//! [`ActuatorPort`] and [`DisplayPort`].  This is the only module in the
//! system that touches actual hardware.  On non-espidf targets, the
//! underlying GPIO/PWM drivers use cfg-gated simulation stubs; the LCD
//! stays generic over its I²C bus.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use log::warn;

use crate::app::ports::{ActuatorPort, DisplayPort};
use crate::drivers::indicators::IndicatorLeds;
use crate::drivers::lcd::Lcd1602;
use crate::drivers::motor::{DamperMotor, Direction};
use crate::error::{Error, Result};

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<B, D> {
    motor: DamperMotor,
    leds: IndicatorLeds,
    lcd: Lcd1602<B, D>,
}

impl<B: I2c, D: DelayNs> HardwareAdapter<B, D> {
    pub fn new(motor: DamperMotor, leds: IndicatorLeds, lcd: Lcd1602<B, D>) -> Self {
        Self { motor, leds, lcd }
    }

    /// Run the LCD power-on sequence.  Init failure is reported to the
    /// caller; later per-cycle bus errors are logged and swallowed.
    pub fn init_display(&mut self) -> Result<()> {
        self.lcd
            .init()
            .map_err(|_| Error::Display("LCD init failed"))
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<B: I2c, D: DelayNs> ActuatorPort for HardwareAdapter<B, D> {
    fn set_indicators(&mut self, deficit: bool, excess: bool) {
        self.leds.set(deficit, excess);
    }

    fn drive_damper(&mut self, duty: u8, forward: bool) {
        let dir = if forward {
            Direction::Forward
        } else {
            Direction::Reverse
        };
        self.motor.set(duty, dir);
    }

    fn stop_damper(&mut self) {
        self.motor.stop();
    }

    fn all_off(&mut self) {
        self.motor.stop();
        self.leds.off();
    }
}

// ── DisplayPort implementation ────────────────────────────────

impl<B: I2c, D: DelayNs> DisplayPort for HardwareAdapter<B, D> {
    fn clear(&mut self) {
        if self.lcd.clear().is_err() {
            warn!("LCD clear failed — continuing without display");
        }
    }

    fn write_line(&mut self, row: u8, text: &str) {
        let wrote = self
            .lcd
            .set_cursor(row, 0)
            .and_then(|()| self.lcd.print(text));
        if wrote.is_err() {
            warn!("LCD write failed on row {} — continuing without display", row);
        }
    }
}
