//! The display strip capability.

use std::time::Duration;

use thiserror::Error;

use crate::domain::Color;

/// Number of addressable slots on the strip.
pub const SLOT_COUNT: usize = 8;

/// Color and brightness of one slot as last written.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotState {
    pub color: Color,
    pub brightness: f64,
}

impl SlotState {
    /// A dark slot: all channels off at zero brightness.
    pub const OFF: Self = Self {
        color: Color::OFF,
        brightness: 0.0,
    };

    #[must_use]
    pub const fn new(color: Color, brightness: f64) -> Self {
        Self { color, brightness }
    }
}

/// One complete set of per-slot values, committed atomically by `show`.
pub type Frame = [SlotState; SLOT_COUNT];

/// Errors from display operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DisplayError {
    /// The slot index is outside `0..SLOT_COUNT`.
    #[error("slot {0} is outside the strip's addressable range")]
    SlotOutOfRange(usize),
    /// The underlying driver reported a hardware fault.
    #[error("display I/O failed: {0}")]
    Io(String),
}

/// Abstract interface to the physical display strip.
///
/// The host must provide a concrete implementation (e.g. an APA102 driver,
/// or the runtime's console strip for headless operation).
///
/// All operations are synchronous, blocking calls: the render pass runs
/// under the controller's lock and must not suspend, so a `flash` sleeps
/// the calling thread for its on/off phases rather than yielding.
///
/// Writes accumulate in the driver's frame buffer; nothing becomes visible
/// until `show` commits the whole frame at once.
///
/// # Example Implementation
///
/// ```rust,ignore
/// struct Apa102Strip {
///     spi: Spidev,
///     frame: Frame,
/// }
///
/// impl DisplayStrip for Apa102Strip {
///     fn set(&mut self, slot: usize, color: Color, brightness: f64) -> Result<(), DisplayError> {
///         // Stage the slot value; transfer happens in show()
///         todo!()
///     }
///     // ...
/// }
/// ```
pub trait DisplayStrip: Send {
    /// Stage `color` at `brightness` into `slot`.
    fn set(&mut self, slot: usize, color: Color, brightness: f64) -> Result<(), DisplayError>;

    /// Flash `slot` for attention: `cycles` on/off repetitions with
    /// `interval` per phase, each phase made visible immediately.
    ///
    /// The slot is left dark afterwards; callers follow up with `set`
    /// when a steady color should remain.
    fn flash(
        &mut self,
        slot: usize,
        color: Color,
        brightness: f64,
        cycles: u32,
        interval: Duration,
    ) -> Result<(), DisplayError>;

    /// Commit the staged frame to the hardware as one atomic update.
    fn show(&mut self) -> Result<(), DisplayError>;

    /// Terminal teardown: sweep the strip in `color`, then leave every
    /// slot dark. Invoked once on shutdown.
    fn cleanup(&mut self, color: Color, brightness: f64) -> Result<(), DisplayError>;
}
