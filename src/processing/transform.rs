// src/processing/transform.rs

//! Fixed upscale + soften applied to every image.

use image::imageops::{self, FilterType};
use image::RgbImage;
use imageproc::filter::gaussian_blur_f32;

/// Both dimensions are multiplied by this.
pub const SCALE_FACTOR: u32 = 2;

/// Standard deviation of the Gaussian applied after upscaling, in output pixels.
pub const BLUR_SIGMA: f32 = 1.0;

/// Upscales `buffer` 2× with a cubic kernel, then softens it with a Gaussian
/// blur to hide resampling artefacts.
///
/// Pure and deterministic. `buffer` must be non-empty.
pub fn transform(buffer: &RgbImage) -> RgbImage {
    let (width, height) = buffer.dimensions();
    let upscaled = imageops::resize(
        buffer,
        width.saturating_mul(SCALE_FACTOR),
        height.saturating_mul(SCALE_FACTOR),
        FilterType::CatmullRom,
    );
    gaussian_blur_f32(&upscaled, BLUR_SIGMA)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn doubles_both_dimensions() {
        let buffer = RgbImage::new(7, 3);
        assert_eq!(transform(&buffer).dimensions(), (14, 6));

        let single = RgbImage::new(1, 1);
        assert_eq!(transform(&single).dimensions(), (2, 2));
    }

    #[test]
    fn flat_colour_stays_flat() {
        let buffer = RgbImage::from_pixel(4, 4, Rgb([100, 150, 200]));
        let out = transform(&buffer);
        for pixel in out.pixels() {
            for (got, want) in pixel.0.iter().zip([100u8, 150, 200]) {
                assert!(got.abs_diff(want) <= 1, "{got} vs {want}");
            }
        }
    }

    #[test]
    fn softens_hard_edges() {
        // Left half black, right half white
        let buffer = RgbImage::from_fn(8, 8, |x, _| if x < 4 { Rgb([0, 0, 0]) } else { Rgb([255, 255, 255]) });
        let out = transform(&buffer);

        // Pixels on either side of the edge are no longer pure black/white
        let left = out.get_pixel(7, 8).0[0];
        let right = out.get_pixel(8, 8).0[0];
        assert!(left > 0 && left < 255);
        assert!(right > 0 && right < 255);
        assert!(left < right);
    }

    #[test]
    fn is_deterministic() {
        let buffer = RgbImage::from_fn(5, 4, |x, y| Rgb([(x * 40) as u8, (y * 60) as u8, 7]));
        assert_eq!(transform(&buffer), transform(&buffer));
    }
}
