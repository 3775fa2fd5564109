//! LCD page formatting.
//!
//! Renders a [`ReportData`] into the two 16x2 pages shown after each
//! cycle.  Pure string formatting — the actual bus writes happen behind
//! [`DisplayPort`](super::ports::DisplayPort).

use core::fmt::{self, Write};

use heapless::String;

use super::events::ReportData;

/// Character columns on the LCD.
pub const LCD_COLS: usize = 16;

/// One display line, truncated to the LCD width.
pub type LcdLine = String<LCD_COLS>;

/// One 16x2 page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPage {
    pub line1: LcdLine,
    pub line2: LcdLine,
}

/// Build the two result pages for one cycle.
///
/// Page 1: minimum air and flue gas.  Page 2: excess air and the
/// commanded motor state.
pub fn lcd_pages(report: &ReportData) -> [DisplayPage; 2] {
    [
        DisplayPage {
            line1: lcd_line(format_args!("Min Air:{:.1}TPH", report.minimum_air_tph)),
            line2: lcd_line(format_args!("Flue Gas:{:.1}TPH", report.flue_gas_tph)),
        },
        DisplayPage {
            line1: lcd_line(format_args!("Excess Air:{:.1}TPH", report.excess_air_tph)),
            line2: lcd_line(format_args!("Motor:{}", report.motor.tag())),
        },
    ]
}

/// Format into a fixed-width line, truncating at the display edge.
fn lcd_line(args: fmt::Arguments<'_>) -> LcdLine {
    // Render into a generous scratch buffer first; f32 values from
    // unvalidated input can format far wider than the display.
    let mut scratch: String<64> = String::new();
    let _ = scratch.write_fmt(args);

    let mut line = LcdLine::new();
    for c in scratch.chars().take(LCD_COLS) {
        let _ = line.push(c);
    }
    line
}
