mod tests {
    use pixel_view::{
        GradientDirection, Hsv, PixelBuffer, PixelView, Rgb,
        color::{fill_rainbow, hsv2rgb},
    };

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const C1: Hsv = Hsv {
        hue: 0,
        sat: 255,
        val: 255,
    };
    const C2: Hsv = Hsv {
        hue: 160,
        sat: 255,
        val: 255,
    };
    const C3: Hsv = Hsv {
        hue: 96,
        sat: 200,
        val: 180,
    };

    #[test]
    fn test_mirror_fill_solid_equivalence() {
        let mut fwd: PixelBuffer<10> = PixelBuffer::new();
        let mut rev: PixelBuffer<10> = PixelBuffer::new();

        fwd.range(2, 7).fill_solid(RED);
        rev.range(7, 2).fill_solid(RED);

        assert_eq!(fwd.as_slice(), rev.as_slice());
        for (i, led) in fwd.as_slice().iter().enumerate() {
            if (2..=7).contains(&i) {
                assert_eq!(*led, RED);
            } else {
                assert_eq!(*led, BLACK);
            }
        }
    }

    #[test]
    fn test_gradient_mirror_property() {
        let mut fwd: PixelBuffer<10> = PixelBuffer::new();
        let mut rev: PixelBuffer<10> = PixelBuffer::new();

        fwd.range(0, 9)
            .fill_gradient(C1, C2, GradientDirection::Shortest);
        rev.range(9, 0)
            .fill_gradient(C2, C1, GradientDirection::Shortest);

        assert_eq!(fwd.as_slice(), rev.as_slice());
    }

    #[test]
    fn test_gradient_three_mirror_property() {
        let mut fwd: PixelBuffer<12> = PixelBuffer::new();
        let mut rev: PixelBuffer<12> = PixelBuffer::new();

        fwd.range(0, 11)
            .fill_gradient_three(C1, C3, C2, GradientDirection::Forward);
        rev.range(11, 0)
            .fill_gradient_three(C2, C3, C1, GradientDirection::Forward);

        assert_eq!(fwd.as_slice(), rev.as_slice());
    }

    #[test]
    fn test_gradient_rgb_mirror_property() {
        let mut fwd: PixelBuffer<10> = PixelBuffer::new();
        let mut rev: PixelBuffer<10> = PixelBuffer::new();
        let blue = Rgb { r: 0, g: 0, b: 255 };

        fwd.range(0, 9).fill_gradient_rgb(RED, blue);
        rev.range(9, 0).fill_gradient_rgb(blue, RED);

        assert_eq!(fwd.as_slice(), rev.as_slice());
        assert_eq!(fwd.as_slice()[0], RED);
    }

    #[test]
    fn test_gradient_endpoints() {
        let mut buf: PixelBuffer<10> = PixelBuffer::new();
        buf.view()
            .fill_gradient(C1, C2, GradientDirection::Forward);

        assert_eq!(buf.as_slice()[0], hsv2rgb(C1));
        // endpoint lands within fixed-point rounding of the target hue
        let last = buf.as_slice()[9];
        assert!(last.b > 0);
        assert_eq!(last.r, 0);
    }

    #[test]
    fn test_rainbow_matches_span_algorithm() {
        let mut buf: PixelBuffer<8> = PixelBuffer::new();
        buf.view().fill_rainbow(10, 16);

        let mut expected = [BLACK; 8];
        fill_rainbow(&mut expected, 10, 16);
        assert_eq!(buf.as_slice(), &expected);

        // reversed views fill the same physical span with the same ramp
        let mut rev: PixelBuffer<8> = PixelBuffer::new();
        rev.range(7, 0).fill_rainbow(10, 16);
        assert_eq!(rev.as_slice(), &expected);
    }

    #[test]
    fn test_blur1d() {
        let mut arr = [BLACK; 5];
        arr[2] = Rgb {
            r: 255,
            g: 255,
            b: 255,
        };
        let mut view = PixelView::new(&mut arr);
        view.blur1d(64);

        // keep = 191, seep = 32
        assert_eq!(arr[0], BLACK);
        assert_eq!(arr[1], Rgb { r: 32, g: 32, b: 32 });
        assert_eq!(
            arr[2],
            Rgb {
                r: 191,
                g: 191,
                b: 191
            }
        );
        assert_eq!(arr[3], Rgb { r: 32, g: 32, b: 32 });
        assert_eq!(arr[4], BLACK);
    }

    #[test]
    fn test_blur1d_zero_amount_is_identity() {
        let mut arr = [RED; 4];
        arr[2] = Rgb { r: 10, g: 20, b: 30 };
        let before = arr;
        let mut view = PixelView::new(&mut arr);
        view.blur1d(0);
        assert_eq!(arr, before);
    }

    #[test]
    fn test_gamma_video() {
        let mut arr = [BLACK; 4];
        arr[1] = Rgb { r: 1, g: 128, b: 255 };
        let mut view = PixelView::new(&mut arr);
        view.apply_gamma_video(2.5);

        assert_eq!(arr[0], BLACK);
        // video-safe: lit channels stay lit, full brightness stays full
        assert!(arr[1].r > 0);
        assert!(arr[1].g > 0 && arr[1].g < 128);
        assert_eq!(arr[1].b, 255);
    }

    #[test]
    fn test_gamma_per_channel() {
        let mut arr = [Rgb {
            r: 128,
            g: 128,
            b: 128,
        }; 2];
        let mut view = PixelView::new(&mut arr);
        view.apply_gamma_video_rgb(1.0, 2.0, 3.0);

        // higher gamma dims midtones further
        assert!(arr[0].r >= arr[0].g);
        assert!(arr[0].g > arr[0].b);
        assert_eq!(arr[0].r, 128);
    }

    #[test]
    fn test_fill_through_slice() {
        let mut buf: PixelBuffer<10> = PixelBuffer::new();
        let mut view = buf.view();
        view.slice(3, 6).fill_solid(RED);
        drop(view);

        for (i, led) in buf.as_slice().iter().enumerate() {
            if (3..=6).contains(&i) {
                assert_eq!(*led, RED);
            } else {
                assert_eq!(*led, BLACK);
            }
        }
    }
}
