mod tests {
    use led_pattern_bank::{FullColorMap, LinearColorMap, MapError, Rgb};

    const RED: Rgb = Rgb::new(255, 0, 0);
    const GREEN: Rgb = Rgb::new(0, 255, 0);

    #[test]
    fn test_linear_rejects_zero_buckets() {
        assert_eq!(
            LinearColorMap::<64>::new(0).unwrap_err(),
            MapError::ZeroBucketSize
        );
    }

    #[test]
    fn test_linear_rejects_oversized_table() {
        assert_eq!(
            LinearColorMap::<8>::new(16).unwrap_err(),
            MapError::CapacityExceeded {
                needed: 16,
                capacity: 8
            }
        );
    }

    #[test]
    fn test_linear_store_and_lookup() {
        let mut map = LinearColorMap::<8>::new(8).unwrap();
        map.add_color(3, 0, 0, RED).unwrap();
        assert_eq!(map.lookup(0.375, 0, 0), RED);
        assert_eq!(map.lookup(0.4999, 0, 0), RED);
        assert_eq!(map.lookup(0.5, 0, 0), Rgb::BLACK);
    }

    #[test]
    fn test_linear_lookup_clamps_phase() {
        let mut map = LinearColorMap::<8>::new(8).unwrap();
        map.add_color(0, 0, 0, RED).unwrap();
        map.add_color(7, 0, 0, GREEN).unwrap();
        // Phase approaching (and past) 1.0 lands on the last bucket
        assert_eq!(map.lookup(0.999_999, 0, 0), GREEN);
        assert_eq!(map.lookup(1.0, 0, 0), GREEN);
        // Negative phase lands on the first
        assert_eq!(map.lookup(0.0, 0, 0), RED);
        assert_eq!(map.lookup(-0.5, 0, 0), RED);
    }

    #[test]
    fn test_linear_rejects_out_of_range_write() {
        let mut map = LinearColorMap::<8>::new(8).unwrap();
        assert_eq!(
            map.add_color(8, 0, 0, RED).unwrap_err(),
            MapError::BucketOutOfRange {
                bucket_idx: 8,
                bucket_size: 8
            }
        );
    }

    #[test]
    fn test_full_store_and_lookup_round_trip() {
        let mut map = FullColorMap::<64>::new(4, 10).unwrap();
        map.add_color(2, 5, 10, RED).unwrap();
        // Bucket 2 covers phases [0.5, 0.75)
        assert_eq!(map.lookup(0.6, 5, 10).unwrap(), RED);
        assert_eq!(map.lookup(0.6, 4, 10).unwrap(), Rgb::BLACK);
        assert_eq!(map.lookup(0.3, 5, 10).unwrap(), Rgb::BLACK);
    }

    #[test]
    fn test_full_rejects_led_count_mismatch() {
        let mut map = FullColorMap::<64>::new(4, 10).unwrap();
        assert_eq!(
            map.lookup(0.5, 3, 12).unwrap_err(),
            MapError::LedCountMismatch {
                built_for: 10,
                queried: 12
            }
        );
        assert_eq!(
            map.add_color(0, 3, 12, RED).unwrap_err(),
            MapError::LedCountMismatch {
                built_for: 10,
                queried: 12
            }
        );
    }

    #[test]
    fn test_full_rejects_oversized_table() {
        assert_eq!(
            FullColorMap::<16>::new(4, 10).unwrap_err(),
            MapError::CapacityExceeded {
                needed: 40,
                capacity: 16
            }
        );
    }

    #[test]
    fn test_full_rejects_zero_dimensions() {
        assert_eq!(
            FullColorMap::<64>::new(0, 10).unwrap_err(),
            MapError::ZeroBucketSize
        );
        assert_eq!(
            FullColorMap::<64>::new(4, 0).unwrap_err(),
            MapError::ZeroLedCount
        );
    }

    #[test]
    fn test_full_rejects_out_of_range_writes() {
        let mut map = FullColorMap::<64>::new(4, 10).unwrap();
        assert_eq!(
            map.add_color(4, 0, 10, RED).unwrap_err(),
            MapError::BucketOutOfRange {
                bucket_idx: 4,
                bucket_size: 4
            }
        );
        assert_eq!(
            map.add_color(0, 10, 10, RED).unwrap_err(),
            MapError::LedOutOfRange {
                idx: 10,
                led_count: 10
            }
        );
    }

    #[test]
    fn test_full_lookup_clamps_position() {
        let mut map = FullColorMap::<64>::new(4, 10).unwrap();
        map.add_color(0, 9, 10, GREEN).unwrap();
        // Position past the end clamps to the last LED
        assert_eq!(map.lookup(0.0, 25, 10).unwrap(), GREEN);
    }
}
