//! The lock-guarded controller serializing event handling with rendering.

use std::sync::{Mutex, PoisonError};

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{
    Color, KeyError, Observation, ResourceKey, ResourceSnapshot, Tracker, TrackerError,
};
use crate::ports::{ColorFn, DisplayError, DisplayStrip, KeyFn};
use crate::service::sync::sync_display;

/// Color of the terminal cleanup sweep.
pub const SHUTDOWN_COLOR: Color = Color::RED;

/// Errors surfaced by controller operations.
///
/// `Tracker` and `Key` variants are invariant violations: the caller must
/// stop the event loop rather than continue with state it can no longer
/// trust. `Display` failures leave the tracker consistent and are the
/// display layer's to surface.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Tracker(#[from] TrackerError),
    #[error(transparent)]
    Key(#[from] KeyError),
    #[error(transparent)]
    Display(#[from] DisplayError),
}

/// Tracker and strip live behind one lock: every event holds it for its
/// full handle-then-render cycle, so notifications from logically
/// concurrent channels can never interleave with a rendering pass.
struct Shared {
    tracker: Tracker,
    strip: Box<dyn DisplayStrip>,
    cleaned_up: bool,
}

/// Owns the tracked collection and the strip, and serializes all access.
///
/// Event handlers derive a key and color from the incoming snapshot via
/// the injected classification functions, mutate the tracker, and run a
/// full render pass before releasing the lock. Nothing suspends while the
/// lock is held; display primitives are blocking calls.
pub struct Controller {
    shared: Mutex<Shared>,
    brightness: f64,
    key_fn: KeyFn,
    color_fn: ColorFn,
}

impl Controller {
    /// Create a controller driving `strip`.
    ///
    /// `brightness` is clamped to `0.0..=1.0` and applied uniformly to all
    /// rendered colors and to the shutdown sweep.
    #[must_use]
    pub fn new(strip: Box<dyn DisplayStrip>, brightness: f64, key_fn: KeyFn, color_fn: ColorFn) -> Self {
        Self {
            shared: Mutex::new(Shared {
                tracker: Tracker::new(),
                strip,
                cleaned_up: false,
            }),
            brightness: brightness.clamp(0.0, 1.0),
            key_fn,
            color_fn,
        }
    }

    #[must_use]
    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    /// Number of currently tracked resources, including any past display
    /// capacity.
    #[must_use]
    pub fn tracked_count(&self) -> usize {
        self.lock().tracker.len()
    }

    #[must_use]
    pub fn is_tracked(&self, key: &ResourceKey) -> bool {
        self.lock().tracker.contains(key)
    }

    /// Handle an add notification (also redelivered by every resync sweep).
    ///
    /// Unknown keys are appended and rendered; a redelivery with an
    /// unchanged color is a no-op and triggers no repaint.
    pub fn handle_added(&self, snapshot: &ResourceSnapshot) -> Result<(), ControllerError> {
        let key = (self.key_fn)(snapshot)?;
        let color = (self.color_fn)(snapshot);
        match self.observe(key.clone(), color)? {
            Observation::Appended => info!(key = %key, color = %color, "Adding resource"),
            Observation::Recolored => info!(key = %key, color = %color, "Updating resource"),
            Observation::Unchanged => {
                debug!(key = %key, "Redelivered resource unchanged, skipping")
            }
        }
        Ok(())
    }

    /// Handle an update notification.
    ///
    /// The event source guarantees the key was previously delivered; an
    /// unknown key is an unrecoverable invariant violation.
    pub fn handle_updated(
        &self,
        _old: &ResourceSnapshot,
        new: &ResourceSnapshot,
    ) -> Result<(), ControllerError> {
        let key = (self.key_fn)(new)?;
        let color = (self.color_fn)(new);
        let mut shared = self.lock();
        if !shared.tracker.contains(&key) {
            return Err(TrackerError::UntrackedKey(key).into());
        }
        if shared.tracker.observe(key.clone(), color) == Observation::Unchanged {
            return Ok(());
        }
        info!(key = %key, color = %color, "Updating resource");
        shared.render(self.brightness)?;
        Ok(())
    }

    /// Handle a delete notification. An unknown key is fatal, as with
    /// updates.
    pub fn handle_removed(&self, snapshot: &ResourceSnapshot) -> Result<(), ControllerError> {
        let key = (self.key_fn)(snapshot)?;
        self.mark_removed(&key)
    }

    /// Record an observation of `key` and render unless it was a no-op.
    pub fn observe(&self, key: ResourceKey, color: Color) -> Result<Observation, ControllerError> {
        let mut shared = self.lock();
        let observation = shared.tracker.observe(key, color);
        if observation != Observation::Unchanged {
            shared.render(self.brightness)?;
        }
        Ok(observation)
    }

    /// Flag `key` as removed and render its departure.
    pub fn mark_removed(&self, key: &ResourceKey) -> Result<(), ControllerError> {
        let mut shared = self.lock();
        shared.tracker.mark_removed(key)?;
        info!(key = %key, "Removing resource");
        shared.render(self.brightness)?;
        Ok(())
    }

    /// Run the terminal cleanup sweep. Idempotent: only the first call
    /// reaches the strip.
    pub fn cleanup(&self) -> Result<(), ControllerError> {
        let mut shared = self.lock();
        if shared.cleaned_up {
            return Ok(());
        }
        shared.cleaned_up = true;
        info!("Cleaning up the display");
        shared.strip.cleanup(SHUTDOWN_COLOR, self.brightness)?;
        Ok(())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Shared> {
        // A panic mid-render leaves no torn state worth rejecting: the
        // next render repaints every slot from the tracker.
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Shared {
    fn render(&mut self, brightness: f64) -> Result<(), DisplayError> {
        sync_display(&mut self.tracker, self.strip.as_mut(), brightness)
    }
}
