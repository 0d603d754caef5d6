mod tests {
    use embassy_time::{Duration, Instant};
    use led_pattern_bank::{
        ChannelWeights, FrameScheduler, OutputDriver, Pattern, PatternSlot, PhaseClock, Rainbow,
        StripRenderer, Yoyo,
    };
    use smart_leds::RGB8;

    struct CaptureDriver {
        frames: usize,
        last: Vec<RGB8>,
    }

    impl CaptureDriver {
        fn new() -> Self {
            Self {
                frames: 0,
                last: Vec::new(),
            }
        }
    }

    impl OutputDriver for CaptureDriver {
        fn write(&mut self, colors: &[RGB8]) {
            self.frames += 1;
            self.last = colors.to_vec();
        }
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() <= 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_phase_clock_wraps_every_cycle() {
        let clock = PhaseClock::new(Duration::from_millis(2000));
        assert_close(clock.percent(Instant::from_millis(0)), 0.0);
        assert_close(clock.percent(Instant::from_millis(500)), 0.25);
        assert_close(clock.percent(Instant::from_millis(2500)), 0.25);
        assert!(clock.percent(Instant::from_millis(1999)) < 1.0);
    }

    #[test]
    fn test_renderer_fills_frame_from_pattern() {
        let pattern = Rainbow::<16>::new(16).unwrap();
        let expected: RGB8 = pattern.compute(0.0, 0, 0).into();

        let slot = PatternSlot::Rainbow(pattern);
        let mut renderer =
            StripRenderer::<10, 16>::new(slot, PhaseClock::default(), 10);
        let frame = renderer.render(Instant::from_millis(0)).unwrap();

        assert_eq!(frame.len(), 10);
        for led in frame {
            assert_eq!(*led, expected);
        }
    }

    #[test]
    fn test_renderer_truncates_led_count_to_buffer() {
        let slot = PatternSlot::Rainbow(Rainbow::<16>::new(16).unwrap());
        let mut renderer = StripRenderer::<8, 16>::new(slot, PhaseClock::default(), 100);
        assert_eq!(renderer.led_count(), 8);
        assert_eq!(renderer.render(Instant::from_millis(0)).unwrap().len(), 8);
    }

    #[test]
    fn test_renderer_reports_strip_length_mismatch() {
        // Map built for a 20-LED strip, renderer configured for 10
        let weights = ChannelWeights::new(255.0, 255.0, 255.0);
        let slot = PatternSlot::Yoyo(Yoyo::<512>::new(16, 20, weights).unwrap());
        let mut renderer = StripRenderer::<10, 512>::new(slot, PhaseClock::default(), 10);
        assert!(renderer.render(Instant::from_millis(0)).is_err());
    }

    #[test]
    fn test_scheduler_paces_frames() {
        let slot = PatternSlot::Rainbow(Rainbow::<16>::new(16).unwrap());
        let renderer = StripRenderer::<10, 16>::new(slot, PhaseClock::default(), 10);
        let mut scheduler = FrameScheduler::with_frame_duration(
            renderer,
            CaptureDriver::new(),
            Duration::from_millis(100),
        );

        let first = scheduler.tick(Instant::from_millis(0)).unwrap();
        assert_eq!(first.next_deadline, Instant::from_millis(100));
        assert_eq!(first.sleep_duration, Duration::from_millis(100));

        // Waking early leaves the deadline on the original grid
        let second = scheduler.tick(Instant::from_millis(20)).unwrap();
        assert_eq!(second.next_deadline, Instant::from_millis(200));
        assert_eq!(second.sleep_duration, Duration::from_millis(180));
    }

    #[test]
    fn test_scheduler_skips_backlog_after_stall() {
        let slot = PatternSlot::Rainbow(Rainbow::<16>::new(16).unwrap());
        let renderer = StripRenderer::<10, 16>::new(slot, PhaseClock::default(), 10);
        let mut scheduler = FrameScheduler::with_frame_duration(
            renderer,
            CaptureDriver::new(),
            Duration::from_millis(100),
        );

        scheduler.tick(Instant::from_millis(0)).unwrap();
        // A long stall resets the schedule instead of replaying missed frames
        let resumed = scheduler.tick(Instant::from_millis(1000)).unwrap();
        assert_eq!(resumed.next_deadline, Instant::from_millis(1100));
        assert_eq!(resumed.sleep_duration, Duration::from_millis(100));
    }

    #[test]
    fn test_scheduler_writes_frames_to_driver() {
        let slot = PatternSlot::Rainbow(Rainbow::<16>::new(16).unwrap());
        let renderer = StripRenderer::<10, 16>::new(slot, PhaseClock::default(), 10);
        let mut scheduler = FrameScheduler::with_frame_duration(
            renderer,
            CaptureDriver::new(),
            Duration::from_millis(100),
        );

        scheduler.tick(Instant::from_millis(0)).unwrap();
        scheduler.tick(Instant::from_millis(100)).unwrap();

        // 100 ms into the default 2 s cycle still falls in the first bucket
        let pattern = Rainbow::<16>::new(16).unwrap();
        let expected: RGB8 = pattern.compute(0.0, 0, 0).into();
        assert_eq!(scheduler.output().frames, 2);
        assert_eq!(scheduler.output().last.len(), 10);
        assert_eq!(scheduler.output().last[0], expected);
    }
}
