//! Damper motor driver (L298N H-bridge).
//!
//! Variable-speed forward/reverse control via LEDC PWM (ch0) on the
//! enable pin and two digital direction inputs.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives real PWM and GPIO via hw_init helpers.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;
use crate::pins;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorState {
    Stopped,
    Running { duty: u8, dir: Direction },
}

pub struct DamperMotor {
    state: MotorState,
    hw_duty: u8,
}

impl DamperMotor {
    pub fn new() -> Self {
        Self {
            state: MotorState::Stopped,
            hw_duty: 0,
        }
    }

    pub fn set(&mut self, duty: u8, direction: Direction) {
        let duty = duty.min(100);
        if duty == 0 {
            self.stop();
            return;
        }

        self.set_direction_hw(direction);
        self.set_duty_hw(duty);

        self.hw_duty = duty;
        self.state = MotorState::Running {
            duty,
            dir: direction,
        };
    }

    /// Zero duty and release both bridge inputs (coast).
    pub fn stop(&mut self) {
        self.set_duty_hw(0);
        hw_init::gpio_write(pins::MOTOR_IN1_GPIO, false);
        hw_init::gpio_write(pins::MOTOR_IN2_GPIO, false);
        self.hw_duty = 0;
        self.state = MotorState::Stopped;
    }

    fn set_direction_hw(&self, dir: Direction) {
        let forward = matches!(dir, Direction::Forward);
        hw_init::gpio_write(pins::MOTOR_IN1_GPIO, forward);
        hw_init::gpio_write(pins::MOTOR_IN2_GPIO, !forward);
    }

    fn set_duty_hw(&self, duty: u8) {
        let duty_8bit = ((duty as u16) * 255 / 100) as u8;
        hw_init::ledc_set(hw_init::LEDC_CH_MOTOR, duty_8bit);
    }

    pub fn state(&self) -> MotorState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        !matches!(self.state, MotorState::Stopped)
    }

    pub fn current_duty(&self) -> u8 {
        self.hw_duty
    }
}
