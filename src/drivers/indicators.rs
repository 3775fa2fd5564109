//! Indicator LED driver.
//!
//! Two discrete LEDs: green = combustion air deficit, red = excess air.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives two GPIO outputs via hw_init.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;
use crate::pins;

pub struct IndicatorLeds {
    deficit_on: bool,
    excess_on: bool,
}

impl IndicatorLeds {
    pub fn new() -> Self {
        Self {
            deficit_on: false,
            excess_on: false,
        }
    }

    pub fn set(&mut self, deficit: bool, excess: bool) {
        hw_init::gpio_write(pins::DEFICIT_LED_GPIO, deficit);
        hw_init::gpio_write(pins::EXCESS_LED_GPIO, excess);
        self.deficit_on = deficit;
        self.excess_on = excess;
    }

    pub fn off(&mut self) {
        self.set(false, false);
    }

    /// Current (deficit, excess) LED states.
    pub fn states(&self) -> (bool, bool) {
        (self.deficit_on, self.excess_on)
    }
}
