//! System configuration parameters
//!
//! All tunable parameters for the AirTrim monitor. The device has no
//! persistent storage; these are compiled-in defaults that can be adjusted
//! per installation before flashing.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Damper motor ---
    /// PWM duty cycle (0-100%) applied while the damper motor runs.
    pub damper_duty_percent: u8,

    // --- Display timing ---
    /// Hold time for LCD page 1 (min air / flue gas), seconds.
    pub page_one_hold_secs: u16,
    /// Hold time for LCD page 2 (excess air / motor state), seconds.
    pub page_two_hold_secs: u16,
    /// Settle time after page 2 before outputs are reset, seconds.
    pub settle_hold_secs: u16,
    /// Delay between output reset and the next input prompt, seconds.
    pub inter_cycle_delay_secs: u16,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            damper_duty_percent: 50,

            page_one_hold_secs: 6,
            page_two_hold_secs: 4,
            settle_hold_secs: 6,
            inter_cycle_delay_secs: 3,
        }
    }
}
