//! Console display strip for headless operation.

use std::time::Duration;

use tracing::{debug, info};

use glimmer_core::{Color, DisplayError, DisplayStrip, Frame, SlotState, SLOT_COUNT};

/// A strip that renders frames as log lines.
///
/// Flash timing is honored with real blocking sleeps so the console
/// output carries the same rhythm a hardware strip would show. Rendering
/// runs under the controller's lock, which is exactly the contract the
/// display port specifies.
#[derive(Debug)]
pub struct ConsoleStrip {
    staged: Frame,
}

impl ConsoleStrip {
    #[must_use]
    pub fn new() -> Self {
        Self {
            staged: [SlotState::OFF; SLOT_COUNT],
        }
    }

    fn check_slot(slot: usize) -> Result<(), DisplayError> {
        if slot < SLOT_COUNT {
            Ok(())
        } else {
            Err(DisplayError::SlotOutOfRange(slot))
        }
    }
}

impl Default for ConsoleStrip {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayStrip for ConsoleStrip {
    fn set(&mut self, slot: usize, color: Color, brightness: f64) -> Result<(), DisplayError> {
        Self::check_slot(slot)?;
        self.staged[slot] = SlotState::new(color, brightness);
        Ok(())
    }

    fn flash(
        &mut self,
        slot: usize,
        color: Color,
        brightness: f64,
        cycles: u32,
        interval: Duration,
    ) -> Result<(), DisplayError> {
        Self::check_slot(slot)?;
        debug!(slot, color = %color, brightness, cycles, "Flashing slot");
        for _ in 0..cycles {
            // One on phase, one off phase.
            std::thread::sleep(interval);
            std::thread::sleep(interval);
        }
        Ok(())
    }

    fn show(&mut self) -> Result<(), DisplayError> {
        info!(frame = %format_frame(&self.staged), "Frame committed");
        Ok(())
    }

    fn cleanup(&mut self, color: Color, brightness: f64) -> Result<(), DisplayError> {
        info!(color = %color, brightness, "Display cleanup sweep");
        self.staged = [SlotState::OFF; SLOT_COUNT];
        self.show()
    }
}

/// Compact one-line rendering of a frame: lit slots show their color,
/// dark slots show `--------`.
fn format_frame(frame: &Frame) -> String {
    let slots: Vec<String> = frame
        .iter()
        .map(|slot| {
            if *slot == SlotState::OFF {
                "--------".to_string()
            } else {
                format!("{}@{:.2}", slot.color, slot.brightness)
            }
        })
        .collect();
    format!("[{}]", slots.join(" "))
}
