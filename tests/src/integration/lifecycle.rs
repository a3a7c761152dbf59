//! End-to-end rendering scenarios: controller mutations against a
//! recording strip, asserting on the exact frames and flash sequences a
//! hardware strip would see.

#[cfg(test)]
mod tests {
    use glimmer_core::{
        derive_key, Color, Controller, RecordingStrip, ResourceKey, SlotState, StripOp,
        SHUTDOWN_COLOR, SLOT_COUNT,
    };

    fn controller(strip: RecordingStrip, brightness: f64) -> Controller {
        Controller::new(
            Box::new(strip),
            brightness,
            Box::new(derive_key),
            Box::new(|snapshot| {
                snapshot
                    .attribute("glimmer/color")
                    .and_then(|hex| Color::from_hex(hex).ok())
                    .unwrap_or(Color::BLUE)
            }),
        )
    }

    fn key(s: &str) -> ResourceKey {
        ResourceKey::new(s)
    }

    fn flashes_at(ops: &[StripOp]) -> Vec<usize> {
        ops.iter()
            .filter_map(|op| match op {
                StripOp::Flash { slot, .. } => Some(*slot),
                _ => None,
            })
            .collect()
    }

    /// The canonical walk-through: two arrivals, one departure, and the
    /// left-shift that follows.
    #[test]
    fn test_arrivals_then_departure_shift_survivors() {
        let strip = RecordingStrip::new();
        let controller = controller(strip.clone(), 0.5);

        // a arrives: slot 0 flashes red, then shows red.
        let _ = controller.observe(key("a"), Color::RED).unwrap();
        let frame = strip.last_frame().unwrap();
        assert_eq!(frame[0], SlotState::new(Color::RED, 0.5));
        assert_eq!(flashes_at(&strip.ops()), vec![0]);

        // b arrives: slot 0 stays steady red (no second flash), slot 1
        // flashes blue then shows blue.
        let ops_before = strip.ops().len();
        let _ = controller.observe(key("b"), Color::BLUE).unwrap();
        let frame = strip.last_frame().unwrap();
        assert_eq!(frame[0], SlotState::new(Color::RED, 0.5));
        assert_eq!(frame[1], SlotState::new(Color::BLUE, 0.5));
        assert_eq!(flashes_at(&strip.ops()[ops_before..]), vec![1]);

        // a departs: slot 0 flashes its last color, then b shifts left.
        let ops_before = strip.ops().len();
        controller.mark_removed(&key("a")).unwrap();
        let departure = &strip.ops()[ops_before..];
        assert!(matches!(
            departure[0],
            StripOp::Flash { slot: 0, color: Color::RED, .. }
        ));
        let frame = strip.last_frame().unwrap();
        assert_eq!(frame[0], SlotState::new(Color::BLUE, 0.5));
        assert_eq!(frame[1], SlotState::OFF);
    }

    /// Re-observing a key with its current color must not flash, repaint,
    /// or disturb the record.
    #[test]
    fn test_same_color_observation_is_invisible() {
        let strip = RecordingStrip::new();
        let controller = controller(strip.clone(), 0.5);
        let _ = controller.observe(key("a"), Color::RED).unwrap();
        let frames = strip.frames().len();
        let ops = strip.ops().len();

        let _ = controller.observe(key("a"), Color::RED).unwrap();

        assert_eq!(strip.frames().len(), frames);
        assert_eq!(strip.ops().len(), ops);
        assert_eq!(
            strip.last_frame().unwrap()[0],
            SlotState::new(Color::RED, 0.5)
        );
    }

    /// A recolor flashes in place without moving the resource.
    #[test]
    fn test_recolor_keeps_position() {
        let strip = RecordingStrip::new();
        let controller = controller(strip.clone(), 0.5);
        let _ = controller.observe(key("a"), Color::RED).unwrap();
        let _ = controller.observe(key("b"), Color::BLUE).unwrap();

        let ops_before = strip.ops().len();
        let _ = controller.observe(key("a"), Color::YELLOW).unwrap();

        assert_eq!(flashes_at(&strip.ops()[ops_before..]), vec![0]);
        let frame = strip.last_frame().unwrap();
        assert_eq!(frame[0], SlotState::new(Color::YELLOW, 0.5));
        assert_eq!(frame[1], SlotState::new(Color::BLUE, 0.5));
    }

    /// The ninth resource is tracked but invisible, and slots 0-7 are
    /// untouched by its arrival.
    #[test]
    fn test_capacity_boundary() {
        let strip = RecordingStrip::new();
        let controller = controller(strip.clone(), 0.5);
        for n in 0..SLOT_COUNT {
            let _ = controller
                .observe(key(&format!("r{n}")), Color::GREEN)
                .unwrap();
        }
        let full = strip.last_frame().unwrap();

        let _ = controller.observe(key("r8"), Color::RED).unwrap();

        assert_eq!(strip.last_frame().unwrap(), full);
        assert_eq!(controller.tracked_count(), 9);

        // Freeing slot 0 pulls the ninth resource onto the strip.
        controller.mark_removed(&key("r0")).unwrap();
        let frame = strip.last_frame().unwrap();
        assert_eq!(frame[SLOT_COUNT - 1], SlotState::new(Color::RED, 0.5));
    }

    /// Shutdown reaches the strip exactly once, in the designated color,
    /// regardless of tracked state.
    #[test]
    fn test_shutdown_cleanup_runs_once() {
        let strip = RecordingStrip::new();
        let controller = controller(strip.clone(), 0.25);
        let _ = controller.observe(key("a"), Color::RED).unwrap();
        let _ = controller.observe(key("b"), Color::BLUE).unwrap();

        controller.cleanup().unwrap();
        controller.cleanup().unwrap();

        assert_eq!(strip.cleanup_calls(), vec![(SHUTDOWN_COLOR, 0.25)]);
    }
}
