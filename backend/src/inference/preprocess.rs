//! Image preprocessing shared by the disease and soil routes: decode, force
//! RGB, resize to the fixed training frame, scale to [0,1].

use image::imageops::FilterType;

use crate::inference::model::InferenceError;

/// Both image artifacts were trained on 150x150 RGB frames.
pub const IMAGE_SIZE: u32 = 150;

/// Flat NHWC input length for one image.
pub const IMAGE_INPUT_LEN: usize = (IMAGE_SIZE as usize) * (IMAGE_SIZE as usize) * 3;

/// Decode raw upload bytes into a flat NHWC `Vec<f32>` ready for the model.
pub fn preprocess_image(bytes: &[u8]) -> Result<Vec<f32>, InferenceError> {
    let decoded = image::load_from_memory(bytes)?;
    let rgb = decoded
        .resize_exact(IMAGE_SIZE, IMAGE_SIZE, FilterType::Triangle)
        .to_rgb8();

    let mut pixels = Vec::with_capacity(IMAGE_INPUT_LEN);
    for pixel in rgb.pixels() {
        pixels.push(pixel[0] as f32 / 255.0);
        pixels.push(pixel[1] as f32 / 255.0);
        pixels.push(pixel[2] as f32 / 255.0);
    }
    Ok(pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn encode_png(image: &DynamicImage) -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, ImageFormat::Png).unwrap();
        buffer.into_inner()
    }

    #[test]
    fn test_preprocess_resizes_and_scales() {
        let mut raw = RgbImage::new(64, 48);
        for pixel in raw.pixels_mut() {
            *pixel = Rgb([255, 128, 0]);
        }
        let bytes = encode_png(&DynamicImage::ImageRgb8(raw));

        let pixels = preprocess_image(&bytes).unwrap();
        assert_eq!(pixels.len(), IMAGE_INPUT_LEN);
        assert!(pixels.iter().all(|&v| (0.0..=1.0).contains(&v)));
        // Red channel of a uniform image survives the resize untouched.
        assert!((pixels[0] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_preprocess_forces_three_channels() {
        let gray = DynamicImage::ImageLuma8(image::GrayImage::new(32, 32));
        let pixels = preprocess_image(&encode_png(&gray)).unwrap();
        assert_eq!(pixels.len(), IMAGE_INPUT_LEN);
    }

    #[test]
    fn test_preprocess_rejects_garbage() {
        assert!(matches!(
            preprocess_image(b"not an image"),
            Err(InferenceError::ImageDecode(_))
        ));
    }
}
