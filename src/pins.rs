//! GPIO / peripheral pin assignments for the AirTrim main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Damper motor driver (L298N H-bridge)
// ---------------------------------------------------------------------------

/// LEDC PWM output to the L298N enable pin (motor speed).
pub const MOTOR_EN_GPIO: i32 = 11;
/// Digital output: H-bridge input 1 (HIGH + IN2 LOW = forward).
pub const MOTOR_IN1_GPIO: i32 = 12;
/// Digital output: H-bridge input 2 (HIGH + IN1 LOW = reverse).
pub const MOTOR_IN2_GPIO: i32 = 13;

// ---------------------------------------------------------------------------
// Indicator LEDs
// ---------------------------------------------------------------------------

/// Green LED: air deficit — more combustion air needed (active HIGH).
pub const DEFICIT_LED_GPIO: i32 = 15;
/// Red LED: excess air supplied (active HIGH).
pub const EXCESS_LED_GPIO: i32 = 16;

// ---------------------------------------------------------------------------
// I²C bus (16x2 character LCD on a PCF8574 backpack)
// ---------------------------------------------------------------------------

pub const I2C_SDA_GPIO: i32 = 4;
pub const I2C_SCL_GPIO: i32 = 5;

/// 7-bit I²C address of the PCF8574 LCD backpack.
pub const LCD_I2C_ADDR: u8 = 0x27;
/// I²C bus clock (Hz).
pub const I2C_FREQ_HZ: u32 = 400_000;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC timer resolution (bits).  8-bit gives 0 – 255 duty levels.
pub const PWM_RESOLUTION_BITS: u32 = 8;
/// LEDC base frequency for the damper motor (1 kHz — L298N-compatible).
pub const MOTOR_PWM_FREQ_HZ: u32 = 1_000;
