//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the logger (UART / USB-CDC in production).  A future telemetry uplink
//! would implement the same trait.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::combustion::AirBalance;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::CycleEvaluated(r) => {
                info!(
                    "CYCLE | O2_req={:.2}TPH | min_air={:.2}TPH | flue={:.2}TPH | \
                     coal={:.2}TPH | air={:.2}TPH | excess={:.2}TPH",
                    r.oxygen_required_tph,
                    r.minimum_air_tph,
                    r.flue_gas_tph,
                    r.coal_tph,
                    r.air_tph,
                    r.excess_air_tph,
                );
                info!("STATUS| {}", balance_text(r.balance));
            }
            AppEvent::InputRejected(e) => {
                warn!("INPUT | rejected: {} — cycle aborted", e);
            }
            AppEvent::Started => {
                info!("START | control service running");
            }
        }
    }
}

fn balance_text(balance: AirBalance) -> &'static str {
    match balance {
        AirBalance::Deficit => "More oxygen needed (deficit LED on, damper forward)",
        AirBalance::Excess => "Excess air (excess LED on, damper reverse)",
        AirBalance::Balanced => "Air flow stable (LEDs off, damper stopped)",
    }
}
