use rasterdither::*;
use std::path::{Path, PathBuf};

/// Create a test gradient image
fn create_test_image(width: usize, height: usize) -> Image {
    let mut image = Image::new(width, height, PixelFormat::Rgba);

    for y in 0..height {
        for x in 0..width {
            // Create a smooth gradient
            let fx = x as f32 / (width - 1) as f32;
            let fy = y as f32 / (height - 1) as f32;

            // Create interesting patterns for R, G, B
            let r = (fx * 255.0) as u8;
            let g = (fy * 255.0) as u8;
            let b = ((fx * fy).sqrt() * 255.0) as u8;

            image.set_pixel(x, y, &[r, g, b, 255]);
        }
    }

    image
}

/// Save an image as PNG
fn save_as_png(
    path: &Path,
    image: &Image,
) -> Result<(), Box<dyn std::error::Error>> {
    let color_type = match image.format() {
        PixelFormat::Grayscale => image::ColorType::L8,
        PixelFormat::GrayscaleAlpha => image::ColorType::La8,
        PixelFormat::Rgb => image::ColorType::Rgb8,
        PixelFormat::Rgba => image::ColorType::Rgba8,
    };

    image::save_buffer(
        path,
        image.pixels(),
        image.width() as u32,
        image.height() as u32,
        color_type,
    )?;
    Ok(())
}

/// Write the image to `target/test_output` for visual inspection and
/// check that the PNG decodes back to the same pixels.
fn save_output(
    name: &str,
    image: &Image,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = PathBuf::from("target/test_output");
    std::fs::create_dir_all(&dir)?;

    let path = dir.join(format!("{}.png", name));
    save_as_png(&path, image)?;

    let decoded = image::open(&path)?;
    assert_eq!(decoded.width() as usize, image.width(), "{}", name);
    assert_eq!(decoded.height() as usize, image.height(), "{}", name);
    assert!(
        decoded.into_bytes() == image.pixels(),
        "Decoded pixels differ for {}",
        name
    );

    Ok(())
}

/// Every color in `image` is one of `allowed`.
fn assert_closed(name: &str, image: &Image, allowed: &[Color]) {
    let bpp = image.format().bytes_per_pixel();
    for pixel in image.pixels().chunks(bpp) {
        let color = match image.format() {
            PixelFormat::Grayscale | PixelFormat::GrayscaleAlpha => {
                Color::gray(pixel[0])
            }
            PixelFormat::Rgb | PixelFormat::Rgba => {
                Color::new(pixel[0], pixel[1], pixel[2])
            }
        };
        assert!(allowed.contains(&color), "{}: unexpected {:?}", name, color);
    }
}

fn file_stem(algorithm: Algorithm) -> String {
    format!("{:?}", algorithm).to_lowercase()
}

#[test]
fn test_gradient_black_and_white() {
    let original = create_test_image(256, 128);

    for algorithm in Algorithm::ALL {
        let mut image = original.clone();
        dither(&mut image, DitherConfig::new(algorithm)).unwrap();

        let name = format!("gradient_bw_{}", file_stem(algorithm));
        save_output(&name, &image).expect("Failed to save image");

        // Only black and white RGB values, alpha untouched.
        for chunk in image.pixels().chunks(4) {
            assert!(chunk[..3].iter().all(|&v| v == 0 || v == 255));
            assert_eq!(chunk[3], 255);
        }
    }
}

#[test]
fn test_gradient_presets() {
    let original = create_test_image(256, 128);

    for (name, preset) in [
        ("cga", &palette::CGA[..]),
        ("ega", &palette::EGA[..]),
        ("gameboy", &palette::GAME_BOY[..]),
        ("c64", &palette::C64[..]),
    ] {
        for algorithm in [
            Algorithm::FloydSteinberg,
            Algorithm::Atkinson,
            Algorithm::Bayer8x8,
        ] {
            let mut image = original.clone();
            dither(
                &mut image,
                DitherConfig::new(algorithm).with_palette(preset),
            )
            .unwrap();

            let name = format!("gradient_{}_{}", name, file_stem(algorithm));
            save_output(&name, &image).expect("Failed to save preset image");
            assert_closed(&name, &image, preset);
        }
    }
}

#[test]
fn test_gradient_different_levels() {
    let original = create_test_image(256, 64);

    for levels in [2, 3, 4, 8, 16] {
        let mut image = original.clone();
        dither(
            &mut image,
            DitherConfig::new(Algorithm::Stucki).with_num_colors(levels),
        )
        .unwrap();

        let name = format!("gradient_{}levels", levels);
        save_output(&name, &image).expect("Failed to save image");

        let ramp = Palette::uniform_ramp(levels).unwrap();
        assert_closed(&name, &image, ramp.colors());
    }
}

#[test]
fn test_grayscale_output_stays_gray() {
    let mut image = Image::new(128, 32, PixelFormat::GrayscaleAlpha);
    for y in 0..32 {
        for x in 0..128 {
            image.set_pixel(x, y, &[(x * 2) as u8, 128]);
        }
    }

    dither(
        &mut image,
        DitherConfig::new(Algorithm::SierraTwoRow).with_palette(palette::CGA),
    )
    .unwrap();

    save_output("grayscale_alpha_cga", &image)
        .expect("Failed to save grayscale image");

    // Every value is the luma of a CGA color.
    let lumas: Vec<u8> = palette::CGA.iter().map(|c| c.luma()).collect();
    for chunk in image.pixels().chunks(2) {
        assert!(lumas.contains(&chunk[0]), "unexpected value {}", chunk[0]);
        assert_eq!(chunk[1], 128);
    }
}
