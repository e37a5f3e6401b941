//! Renders a horizontal gradient through several algorithms and stacks the
//! results into `gradient_comparison.png`.

use image::{ImageBuffer, Rgba};
use rasterdither::{
    Algorithm, DitherConfig, Image, PixelFormat, dither, palette,
};

const WIDTH: usize = 512;
const BAND_HEIGHT: usize = 48;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let source = generate_gradient_image();

    let configs = [
        DitherConfig::new(Algorithm::Threshold),
        DitherConfig::new(Algorithm::FloydSteinberg),
        DitherConfig::new(Algorithm::Atkinson),
        DitherConfig::new(Algorithm::Bayer8x8),
        DitherConfig::new(Algorithm::BlueNoise),
        DitherConfig::new(Algorithm::Halftone),
        DitherConfig::new(Algorithm::SierraLite)
            .with_palette(palette::GAME_BOY),
    ];

    let mut bands = vec![source.clone()];
    for config in configs {
        let mut band = source.clone();
        dither(&mut band, config)?;
        bands.push(band);
    }

    create_combined_image(&bands)?;

    Ok(())
}

/// Generate a gray-to-teal gradient.
fn generate_gradient_image() -> Image {
    let mut image = Image::new(WIDTH, BAND_HEIGHT, PixelFormat::Rgba);

    for y in 0..BAND_HEIGHT {
        for x in 0..WIDTH {
            let t = x as f32 / (WIDTH - 1) as f32;
            let v = (t * 255.0) as u8;
            image.set_pixel(x, y, &[v / 2, v, v, 255]);
        }
    }

    image
}

/// Stack all bands with a 1px transparent separator line between them.
fn create_combined_image(
    bands: &[Image],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut rgba_data = Vec::new();

    for (i, band) in bands.iter().enumerate() {
        if i > 0 {
            // Add transparent separator line
            rgba_data.extend(std::iter::repeat_n(0u8, WIDTH * 4));
        }
        rgba_data.extend_from_slice(band.pixels());
    }

    let height = (bands.len() * (BAND_HEIGHT + 1) - 1) as u32;
    let img: ImageBuffer<Rgba<u8>, Vec<u8>> =
        ImageBuffer::from_raw(WIDTH as u32, height, rgba_data)
            .ok_or("Failed to create image buffer")?;

    img.save("gradient_comparison.png")?;

    Ok(())
}
