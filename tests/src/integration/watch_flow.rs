//! Hub-to-display flows: events published on the watch hub, pumped
//! through a subscription into the controller, with resync as the only
//! recovery mechanism.

#[cfg(test)]
mod tests {
    use glimmer_bus::{ResourceEvent, WatchHub, WatchSubscription};
    use glimmer_core::{
        derive_key, Color, Controller, ControllerError, RecordingStrip, ResourceKey,
        ResourceSnapshot, SlotState,
    };

    fn controller(strip: RecordingStrip) -> Controller {
        Controller::new(
            Box::new(strip),
            0.5,
            Box::new(derive_key),
            Box::new(|snapshot| {
                snapshot
                    .attribute("glimmer/color")
                    .and_then(|hex| Color::from_hex(hex).ok())
                    .unwrap_or(Color::BLUE)
            }),
        )
    }

    fn snapshot(name: &str, hex: &str) -> ResourceSnapshot {
        ResourceSnapshot::new("default", name).with_attribute("glimmer/color", hex)
    }

    /// Drain every buffered event into the controller, one at a time.
    fn pump(
        controller: &Controller,
        subscription: &mut WatchSubscription,
    ) -> Result<usize, ControllerError> {
        let mut handled = 0;
        while let Ok(Some(event)) = subscription.try_recv() {
            match event {
                ResourceEvent::Added(s) => controller.handle_added(&s)?,
                ResourceEvent::Updated { old, new } => controller.handle_updated(&old, &new)?,
                ResourceEvent::Deleted(s) => controller.handle_removed(&s)?,
            }
            handled += 1;
        }
        Ok(handled)
    }

    #[test]
    fn test_add_update_delete_flow() {
        let strip = RecordingStrip::new();
        let controller = controller(strip.clone());
        let hub = WatchHub::new();
        let mut sub = hub.subscribe();

        hub.apply(snapshot("web-0", "#FF0000"));
        pump(&controller, &mut sub).unwrap();
        assert_eq!(
            strip.last_frame().unwrap()[0],
            SlotState::new(Color::RED, 0.5)
        );

        hub.apply(snapshot("web-0", "#FFFF00"));
        pump(&controller, &mut sub).unwrap();
        assert_eq!(
            strip.last_frame().unwrap()[0],
            SlotState::new(Color::YELLOW, 0.5)
        );

        hub.retire("default", "web-0");
        pump(&controller, &mut sub).unwrap();
        assert_eq!(strip.last_frame().unwrap()[0], SlotState::OFF);
        assert_eq!(controller.tracked_count(), 0);
    }

    /// Resync redeliveries of unchanged resources must not repaint.
    #[test]
    fn test_resync_redelivery_is_a_render_noop() {
        let strip = RecordingStrip::new();
        let controller = controller(strip.clone());
        let hub = WatchHub::new();
        let mut sub = hub.subscribe();

        hub.apply(snapshot("web-0", "#FF0000"));
        hub.apply(snapshot("web-1", "#0000FF"));
        pump(&controller, &mut sub).unwrap();
        let frames = strip.frames().len();

        assert_eq!(hub.resync(), 2);
        assert_eq!(pump(&controller, &mut sub).unwrap(), 2);

        assert_eq!(strip.frames().len(), frames);
        assert_eq!(controller.tracked_count(), 2);
    }

    /// An update that never reaches the controller is healed by the next
    /// resync sweep, which redelivers current state through the add path.
    #[test]
    fn test_missed_update_healed_by_resync() {
        let strip = RecordingStrip::new();
        let controller = controller(strip.clone());
        let hub = WatchHub::new();
        let mut sub = hub.subscribe();

        hub.apply(snapshot("web-0", "#FF0000"));
        pump(&controller, &mut sub).unwrap();

        // The recolor is dropped before the controller sees it.
        hub.apply(snapshot("web-0", "#FFFF00"));
        let _ = sub.try_recv().unwrap();
        assert_eq!(
            strip.last_frame().unwrap()[0],
            SlotState::new(Color::RED, 0.5)
        );

        hub.resync();
        pump(&controller, &mut sub).unwrap();

        assert_eq!(
            strip.last_frame().unwrap()[0],
            SlotState::new(Color::YELLOW, 0.5)
        );
        assert!(controller.is_tracked(&ResourceKey::new("default/web-0")));
    }

    /// An update for a key the tracker never saw is an unrecoverable
    /// invariant violation, surfaced instead of silently skipped.
    #[test]
    fn test_untracked_update_is_fatal() {
        let strip = RecordingStrip::new();
        let controller = controller(strip);
        let hub = WatchHub::new();
        let mut sub = hub.subscribe();

        // Seed the hub before the controller ever pumps, then mutate:
        // the subscriber sees only the Updated event.
        hub.apply(snapshot("web-0", "#FF0000"));
        let _ = sub.try_recv().unwrap();
        hub.apply(snapshot("web-0", "#FFFF00"));

        let err = pump(&controller, &mut sub).unwrap_err();
        assert!(matches!(err, ControllerError::Tracker(_)));
    }

    /// Events past display capacity still mutate the tracker.
    #[test]
    fn test_tail_resources_tracked_through_the_flow() {
        let strip = RecordingStrip::new();
        let controller = controller(strip.clone());
        let hub = WatchHub::new();
        let mut sub = hub.subscribe();

        for n in 0..12 {
            hub.apply(snapshot(&format!("r{n}"), "#0000FF"));
        }
        pump(&controller, &mut sub).unwrap();
        assert_eq!(controller.tracked_count(), 12);

        // Recolor a tail resource: tracked, no repaint of the frame.
        let frames = strip.frames().len();
        hub.apply(snapshot("r11", "#FF0000"));
        pump(&controller, &mut sub).unwrap();
        assert_eq!(strip.frames().len(), frames + 1);
        assert_eq!(
            strip.last_frame().unwrap()[7],
            SlotState::new(Color::BLUE, 0.5)
        );
    }
}
