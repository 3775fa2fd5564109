//! Unified error types for the AirTrim firmware.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! top-level control loop's error handling uniform. All variants are `Copy`
//! so they can be passed through the cycle pipeline without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Operator input could not be read or parsed.
    Input(InputError),
    /// Peripheral initialisation failed.
    Init(&'static str),
    /// The LCD could not be driven over the I²C bus.
    Display(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(e) => write!(f, "input: {e}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Display(msg) => write!(f, "display: {msg}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Input errors
// ---------------------------------------------------------------------------

/// Failures while reading the per-cycle operator input.
///
/// Any of these aborts the current cycle immediately — there is no retry
/// of individual fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// A field did not parse as a decimal number.  Carries the field name.
    Malformed(&'static str),
    /// The input stream reached end-of-file mid-cycle.
    Eof,
    /// The underlying console read failed.
    Io,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(field) => write!(f, "malformed value for {field}"),
            Self::Eof => write!(f, "end of input"),
            Self::Io => write!(f, "console read failed"),
        }
    }
}

impl From<InputError> for Error {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
