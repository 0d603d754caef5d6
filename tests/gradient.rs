mod tests {
    use led_pattern_bank::{ColorGradient, ControlPoint, Rgb};

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);
    const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[test]
    fn test_empty_gradient_is_black() {
        let gradient = ColorGradient::new();
        for value in [0.0_f32, 0.5, 1.0] {
            assert_eq!(gradient.color_at(value), Rgb::BLACK);
        }
    }

    #[test]
    fn test_single_point_covers_whole_range() {
        let gradient = ColorGradient::from_slice(&[ControlPoint::new(RED, 0.5)]).unwrap();
        for value in [0.0_f32, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(gradient.color_at(value), RED);
        }
    }

    #[test]
    fn test_two_point_midpoint_is_mid_gray() {
        let gradient = ColorGradient::from_slice(&[
            ControlPoint::new(Rgb::BLACK, 0.0),
            ControlPoint::new(WHITE, 1.0),
        ])
        .unwrap();
        assert_eq!(gradient.color_at(0.5), Rgb::new(128, 128, 128));
        assert_eq!(gradient.color_at(0.25), Rgb::new(64, 64, 64));
        assert_eq!(gradient.color_at(0.0), Rgb::BLACK);
    }

    #[test]
    fn test_value_past_last_point_returns_last_color() {
        let gradient = ColorGradient::from_slice(&[
            ControlPoint::new(RED, 0.2),
            ControlPoint::new(BLUE, 0.8),
        ])
        .unwrap();
        assert_eq!(gradient.color_at(0.8), BLUE);
        assert_eq!(gradient.color_at(2.0), BLUE);
    }

    #[test]
    fn test_coincident_points_return_later_color() {
        let gradient = ColorGradient::from_slice(&[
            ControlPoint::new(RED, 0.5),
            ControlPoint::new(BLUE, 0.5),
        ])
        .unwrap();
        // Below the shared position the first point wins; at or above, the later
        assert_eq!(gradient.color_at(0.3), RED);
        assert_eq!(gradient.color_at(0.5), BLUE);
        assert_eq!(gradient.color_at(0.7), BLUE);
    }

    #[test]
    fn test_push_reports_overflow() {
        let mut gradient = ColorGradient::new();
        for _ in 0..led_pattern_bank::color::MAX_CONTROL_POINTS {
            assert!(gradient.push(ControlPoint::new(RED, 0.5)).is_ok());
        }
        assert!(gradient.push(ControlPoint::new(BLUE, 0.9)).is_err());
    }
}
