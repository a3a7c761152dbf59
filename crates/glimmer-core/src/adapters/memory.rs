//! In-memory display strips for tests and headless operation.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::domain::Color;
use crate::ports::{DisplayError, DisplayStrip, Frame, SlotState, SLOT_COUNT};

/// A strip that validates slot indices and discards everything else.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStrip;

impl NullStrip {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl DisplayStrip for NullStrip {
    fn set(&mut self, slot: usize, _color: Color, _brightness: f64) -> Result<(), DisplayError> {
        check_slot(slot)
    }

    fn flash(
        &mut self,
        slot: usize,
        _color: Color,
        _brightness: f64,
        _cycles: u32,
        _interval: Duration,
    ) -> Result<(), DisplayError> {
        check_slot(slot)
    }

    fn show(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }

    fn cleanup(&mut self, _color: Color, _brightness: f64) -> Result<(), DisplayError> {
        Ok(())
    }
}

/// One operation as issued against a strip, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum StripOp {
    Flash {
        slot: usize,
        color: Color,
        brightness: f64,
        cycles: u32,
        interval: Duration,
    },
    Set {
        slot: usize,
        color: Color,
        brightness: f64,
    },
    Show,
    Cleanup {
        color: Color,
        brightness: f64,
    },
}

#[derive(Debug)]
struct Recording {
    ops: Vec<StripOp>,
    staged: Frame,
    frames: Vec<Frame>,
}

impl Default for Recording {
    fn default() -> Self {
        Self {
            ops: Vec::new(),
            staged: [SlotState::OFF; SLOT_COUNT],
            frames: Vec::new(),
        }
    }
}

/// A strip that records every operation and every committed frame.
///
/// Clones share the same recording, so a test can keep a handle while the
/// controller owns the boxed strip. Flashes are recorded without sleeping.
#[derive(Debug, Default, Clone)]
pub struct RecordingStrip {
    inner: Arc<Mutex<Recording>>,
}

impl RecordingStrip {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every operation issued so far, in order.
    #[must_use]
    pub fn ops(&self) -> Vec<StripOp> {
        self.recording().ops.clone()
    }

    /// Every frame committed by `show`, in order.
    #[must_use]
    pub fn frames(&self) -> Vec<Frame> {
        self.recording().frames.clone()
    }

    /// The most recently committed frame.
    #[must_use]
    pub fn last_frame(&self) -> Option<Frame> {
        self.recording().frames.last().copied()
    }

    /// Arguments of every `cleanup` call.
    #[must_use]
    pub fn cleanup_calls(&self) -> Vec<(Color, f64)> {
        self.recording()
            .ops
            .iter()
            .filter_map(|op| match op {
                StripOp::Cleanup { color, brightness } => Some((*color, *brightness)),
                _ => None,
            })
            .collect()
    }

    fn recording(&self) -> std::sync::MutexGuard<'_, Recording> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DisplayStrip for RecordingStrip {
    fn set(&mut self, slot: usize, color: Color, brightness: f64) -> Result<(), DisplayError> {
        check_slot(slot)?;
        let mut recording = self.recording();
        recording.staged[slot] = SlotState::new(color, brightness);
        recording.ops.push(StripOp::Set {
            slot,
            color,
            brightness,
        });
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
        check_slot(slot)?;
        self.recording().ops.push(StripOp::Flash {
            slot,
            color,
            brightness,
            cycles,
            interval,
        });
        Ok(())
    }

    fn show(&mut self) -> Result<(), DisplayError> {
        let mut recording = self.recording();
        let frame = recording.staged;
        recording.frames.push(frame);
        recording.ops.push(StripOp::Show);
        Ok(())
    }

    fn cleanup(&mut self, color: Color, brightness: f64) -> Result<(), DisplayError> {
        let mut recording = self.recording();
        recording.staged = [SlotState::OFF; SLOT_COUNT];
        recording.ops.push(StripOp::Cleanup { color, brightness });
        Ok(())
    }
}

fn check_slot(slot: usize) -> Result<(), DisplayError> {
    if slot < SLOT_COUNT {
        Ok(())
    } else {
        Err(DisplayError::SlotOutOfRange(slot))
    }
}
