//! Interactive console input adapter.
//!
//! Implements [`InputPort`] over stdin (the UART/USB-CDC console on
//! ESP-IDF).  Each cycle prompts for the six composition fractions and
//! two flow rates in order; every value is one trimmed line parsed as a
//! decimal number.  The first malformed value aborts the cycle — no
//! retry, matching the operator procedure for this device.

use std::io::{self, BufRead, Write};

use crate::app::ports::InputPort;
use crate::combustion::{CycleInput, FuelComposition};
use crate::error::InputError;

/// Adapter that reads cycle inputs from the interactive console.
pub struct ConsoleInput;

impl ConsoleInput {
    pub fn new() -> Self {
        Self
    }

    fn prompt_value(&mut self, prompt: &str, field: &'static str) -> Result<f32, InputError> {
        print!("{prompt}");
        io::stdout().flush().map_err(|_| InputError::Io)?;

        let mut line = String::new();
        let n = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|_| InputError::Io)?;
        if n == 0 {
            return Err(InputError::Eof);
        }
        parse_value(&line, field)
    }
}

/// Parse one console line as a decimal number.
pub fn parse_value(raw: &str, field: &'static str) -> Result<f32, InputError> {
    raw.trim()
        .parse::<f32>()
        .map_err(|_| InputError::Malformed(field))
}

impl InputPort for ConsoleInput {
    fn read_cycle(&mut self) -> Result<CycleInput, InputError> {
        println!("\n### Enter Coal Composition in Decimal Fraction ###");
        let carbon = self.prompt_value("Carbon (C): ", "carbon")?;
        let hydrogen = self.prompt_value("Hydrogen (H2): ", "hydrogen")?;
        let sulphur = self.prompt_value("Sulphur (S): ", "sulphur")?;
        let oxygen = self.prompt_value("Oxygen (O2): ", "oxygen")?;
        let nitrogen = self.prompt_value("Nitrogen (N2): ", "nitrogen")?;

        let coal_tph =
            self.prompt_value("Enter total coal supplied to boiler (TPH): ", "coal supply")?;
        let air_tph = self.prompt_value("Enter total air supply (TPH): ", "air supply")?;

        Ok(CycleInput {
            fuel: FuelComposition {
                carbon,
                hydrogen,
                sulphur,
                oxygen,
                nitrogen,
            },
            coal_tph,
            air_tph,
        })
    }
}
