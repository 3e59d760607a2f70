mod tests {
    use pixel_view::math8::{blend8, qadd8, qmul8, qsub8, scale8, scale8_video};

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
        // dim values can scale away entirely
        assert_eq!(scale8(1, 10), 0);
    }

    #[test]
    fn test_scale8_video() {
        assert_eq!(scale8_video(0, 128), 0);
        assert_eq!(scale8_video(255, 0), 0);
        assert_eq!(scale8_video(255, 128), 128);
        // a lit value stays lit for any nonzero scale
        for scale in 1..255u8 {
            assert!(scale8_video(1, scale) > 0);
            assert!(scale8_video(200, scale) > 0);
        }
    }

    #[test]
    fn test_blend8() {
        assert_eq!(blend8(255, 128, 128), 191);
        assert_eq!(blend8(0, 128, 255), 128);
        assert_eq!(blend8(255, 0, 128), 127);
        assert_eq!(blend8(255, 128, 0), 255);
    }

    #[test]
    fn test_saturating_ops() {
        assert_eq!(qadd8(200, 100), 255);
        assert_eq!(qadd8(10, 20), 30);
        assert_eq!(qsub8(10, 20), 0);
        assert_eq!(qsub8(20, 10), 10);
        assert_eq!(qmul8(16, 16), 255);
        assert_eq!(qmul8(10, 10), 100);
    }
}
