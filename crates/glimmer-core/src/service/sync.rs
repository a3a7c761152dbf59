//! The display synchronizer: one render pass per tracker mutation.

use std::time::Duration;

use tracing::debug;

use crate::domain::{Color, ResourceState, Tracker};
use crate::ports::{DisplayError, DisplayStrip, SLOT_COUNT};

/// On/off repetitions of an attention flash.
pub const FLASH_CYCLES: u32 = 2;

/// Duration of each flash phase.
pub const FLASH_INTERVAL: Duration = Duration::from_millis(50);

/// Project the tracked collection onto the strip and commit one frame.
///
/// Walks the collection in order; the record at position `i` maps to slot
/// `i`. Dirty records (first sight or recolor) flash before settling, and
/// are reset to `Steady`. `Removed` records flash their departure and are
/// deleted without advancing the walk, so later records shift one slot
/// left. `Steady` records are repainted as-is, which matters after a
/// deletion: every survivor may sit at a new index. Slots past the end of
/// the collection are cleared, and the frame is committed atomically.
///
/// Records beyond slot capacity still go through their state transitions;
/// they just produce no display writes until a slot frees up.
///
/// The full sequence is attempted even when individual display writes
/// fail, so tracker state stays consistent; the first failure is surfaced
/// after the commit attempt.
pub fn sync_display(
    tracker: &mut Tracker,
    strip: &mut dyn DisplayStrip,
    brightness: f64,
) -> Result<(), DisplayError> {
    let mut first_err: Option<DisplayError> = None;
    let mut attempt = |result: Result<(), DisplayError>| {
        if let Err(e) = result {
            first_err.get_or_insert(e);
        }
    };

    let mut i = 0;
    while i < tracker.len() {
        let record = tracker.record_at_mut(i);
        let color = record.color;
        match record.state {
            ResourceState::Seen | ResourceState::Changed => {
                record.state = ResourceState::Steady;
                if i < SLOT_COUNT {
                    attempt(strip.flash(i, color, brightness, FLASH_CYCLES, FLASH_INTERVAL));
                    attempt(strip.set(i, color, brightness));
                }
                i += 1;
            }
            ResourceState::Removed => {
                if i < SLOT_COUNT {
                    attempt(strip.flash(i, color, brightness, FLASH_CYCLES, FLASH_INTERVAL));
                }
                let removed = tracker.remove_at(i);
                debug!(key = %removed.key, "Dropped resource after departure flash");
                // The next record shifted into position i; do not advance.
            }
            ResourceState::Steady => {
                if i < SLOT_COUNT {
                    attempt(strip.set(i, color, brightness));
                }
                i += 1;
            }
        }
    }

    for slot in i..SLOT_COUNT {
        attempt(strip.set(slot, Color::OFF, 0.0));
    }
    attempt(strip.show());

    match first_err {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
