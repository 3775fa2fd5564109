//! 16x2 character LCD driver (HD44780 behind a PCF8574 I²C backpack).
//!
//! 4-bit mode: each byte goes out as two nibbles on the expander's upper
//! four lines, strobed with the EN bit.  Generic over
//! [`embedded_hal::i2c::I2c`] and [`embedded_hal::delay::DelayNs`], so the
//! same driver runs against the real bus on ESP-IDF and a recording mock
//! in host tests.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

// ── PCF8574 backpack bit map ──────────────────────────────────

/// Register select: 0 = command, 1 = data.
const RS: u8 = 0x01;
/// Enable strobe — latches the nibble on the falling edge.
const EN: u8 = 0x04;
/// Backlight control, kept on.
const BACKLIGHT: u8 = 0x08;

// ── HD44780 commands ──────────────────────────────────────────

const CMD_CLEAR: u8 = 0x01;
/// Increment cursor, no display shift.
const CMD_ENTRY_MODE: u8 = 0x06;
/// Display on, cursor off, blink off.
const CMD_DISPLAY_ON: u8 = 0x0C;
/// 4-bit interface, 2 lines, 5x8 font.
const CMD_FUNCTION_SET: u8 = 0x28;
/// Set DDRAM address.
const CMD_SET_DDRAM: u8 = 0x80;

/// DDRAM offsets of the two rows.
const ROW_OFFSETS: [u8; 2] = [0x00, 0x40];

/// HD44780 16x2 LCD on a PCF8574 I²C backpack.
pub struct Lcd1602<B, D> {
    bus: B,
    delay: D,
    addr: u8,
}

impl<B: I2c, D: DelayNs> Lcd1602<B, D> {
    /// Wrap an I²C bus and delay source.  Call [`init`](Self::init) once
    /// before any other operation.
    pub fn new(bus: B, delay: D, addr: u8) -> Self {
        Self { bus, delay, addr }
    }

    /// Power-on initialisation per the HD44780 datasheet: force 8-bit
    /// mode three times, drop to 4-bit, then configure and clear.
    pub fn init(&mut self) -> Result<(), B::Error> {
        self.delay.delay_ms(50);

        self.write_nibble(0x30, 0)?;
        self.delay.delay_ms(5);
        self.write_nibble(0x30, 0)?;
        self.delay.delay_ms(5);
        self.write_nibble(0x30, 0)?;
        self.delay.delay_us(150);
        self.write_nibble(0x20, 0)?;

        self.command(CMD_FUNCTION_SET)?;
        self.command(CMD_DISPLAY_ON)?;
        self.clear()?;
        self.command(CMD_ENTRY_MODE)?;
        Ok(())
    }

    /// Clear the display and home the cursor.  Slow command — needs ~2 ms.
    pub fn clear(&mut self) -> Result<(), B::Error> {
        self.command(CMD_CLEAR)?;
        self.delay.delay_ms(2);
        Ok(())
    }

    /// Move the cursor.  Rows beyond 1 clamp to the bottom row.
    pub fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), B::Error> {
        let row = row.min(1);
        self.command(CMD_SET_DDRAM | (ROW_OFFSETS[row as usize] + col))
    }

    /// Write text at the current cursor position.
    pub fn print(&mut self, text: &str) -> Result<(), B::Error> {
        for b in text.bytes() {
            self.write_byte(b, RS)?;
        }
        Ok(())
    }

    fn command(&mut self, cmd: u8) -> Result<(), B::Error> {
        self.write_byte(cmd, 0)
    }

    fn write_byte(&mut self, byte: u8, flags: u8) -> Result<(), B::Error> {
        self.write_nibble(byte & 0xF0, flags)?;
        self.write_nibble(byte << 4, flags)?;
        self.delay.delay_us(50);
        Ok(())
    }

    /// Put one nibble on the expander's upper lines and strobe EN.
    fn write_nibble(&mut self, nibble: u8, flags: u8) -> Result<(), B::Error> {
        let frame = (nibble & 0xF0) | flags | BACKLIGHT;
        self.bus.write(self.addr, &[frame | EN])?;
        self.delay.delay_us(1);
        self.bus.write(self.addr, &[frame & !EN])?;
        Ok(())
    }
}
