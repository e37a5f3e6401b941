#[cfg(feature = "rayon")]
mod rayon_tests {
    use rasterdither::*;

    fn create_test_image(width: usize, height: usize) -> Image {
        let pixels = (0..width * height)
            .flat_map(|i| {
                let (x, y) = (i % width, i / width);
                [(x * 255 / width) as u8, (y * 255 / height) as u8, 97]
            })
            .collect();
        Image::from_raw(width, height, PixelFormat::Rgb, pixels).unwrap()
    }

    fn run_with_threads(
        threads: usize,
        image: &mut Image,
        config: DitherConfig,
    ) {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .unwrap();
        pool.install(|| dither(image, config)).unwrap();
    }

    #[test]
    fn test_rayon_thread_count_does_not_change_output() {
        for algorithm in [
            Algorithm::Bayer4x4,
            Algorithm::Random,
            Algorithm::BlueNoise,
            Algorithm::Threshold,
            Algorithm::Halftone,
        ] {
            let config = DitherConfig::new(algorithm)
                .with_num_colors(3)
                .with_seed(42);

            let mut single = create_test_image(317, 203);
            let mut many = single.clone();

            run_with_threads(1, &mut single, config.clone());
            run_with_threads(8, &mut many, config);

            assert_eq!(single, many, "{algorithm:?}");
        }
    }

    #[test]
    fn test_rayon_ordered_matches_per_pixel_reference() {
        let (width, height) = (257, 131);
        let source = create_test_image(width, height);
        let mut image = source.clone();

        dither(
            &mut image,
            DitherConfig::new(Algorithm::Ordered8x8).with_num_colors(4),
        )
        .unwrap();

        let step = 255.0f32 / 3.0;
        for y in 0..height {
            for x in 0..width {
                let t = ordered::bayer_threshold(8, x, y).unwrap() * step;
                let expected: Vec<u8> = source
                    .pixel(x, y)
                    .unwrap()
                    .iter()
                    .map(|&v| {
                        ((((v as f32 + t) / step).round() * step)
                            .clamp(0.0, 255.0))
                        .round() as u8
                    })
                    .collect();
                assert_eq!(image.pixel(x, y).unwrap(), &expected[..]);
            }
        }
    }

    #[test]
    fn test_rayon_large_dataset() {
        // Test with larger image to verify parallel processing works
        let mut image = create_test_image(1024, 768);
        dither(&mut image, DitherConfig::new(Algorithm::Random)).unwrap();

        assert!(image.pixels().iter().all(|&v| v == 0 || v == 255));
    }
}
