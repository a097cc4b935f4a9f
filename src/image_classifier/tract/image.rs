use crate::image_classifier::models::model_config::{InputLayout, ModelConfig};
use image::{imageops, DynamicImage, RgbImage};
use tract_onnx::prelude::*;

/// Stretch to exactly `width`x`height`. No cropping, no padding: a
/// non-square source is distorted.
pub fn resize_image(image: &DynamicImage, width: u32, height: u32) -> RgbImage {
    let rgb = image.to_rgb8();
    if rgb.dimensions() == (width, height) {
        return rgb;
    }
    imageops::resize(&rgb, width, height, imageops::FilterType::CatmullRom)
}

/// Batch of one, channel values scaled to [0, 1].
pub fn image_to_tensor(image: &RgbImage, layout: InputLayout) -> Tensor {
    let (width, height) = (image.width() as usize, image.height() as usize);

    match layout {
        InputLayout::Nhwc => {
            tract_ndarray::Array4::from_shape_fn((1, height, width, 3), |(_, y, x, c)| {
                image.get_pixel(x as u32, y as u32)[c] as f32 / 255.0
            })
            .into_tensor()
        }
        InputLayout::Nchw => {
            tract_ndarray::Array4::from_shape_fn((1, 3, height, width), |(_, c, y, x)| {
                image.get_pixel(x as u32, y as u32)[c] as f32 / 255.0
            })
            .into_tensor()
        }
    }
}

pub fn preprocess(image: &DynamicImage, config: &ModelConfig) -> Tensor {
    let (width, height) = config.input_size;
    let resized = resize_image(image, width, height);
    image_to_tensor(&resized, config.input_layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageBuffer, Rgb, Rgba};

    fn solid(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
        let mut img = ImageBuffer::new(width, height);
        for pixel in img.pixels_mut() {
            *pixel = Rgb(color);
        }
        DynamicImage::ImageRgb8(img)
    }

    fn config(layout: InputLayout) -> ModelConfig {
        ModelConfig {
            input_layout: layout,
            ..ModelConfig::default()
        }
    }

    #[test]
    fn test_image_to_tensor_square_nhwc() {
        let image = solid(100, 100, [255, 0, 0]);

        let tensor = preprocess(&image, &config(InputLayout::Nhwc));
        assert_eq!(tensor.shape(), &[1, 160, 160, 3]);

        let slice = tensor.as_slice::<f32>().unwrap();
        assert_eq!(slice[0], 1.0);
        assert_eq!(slice[1], 0.0);
        assert_eq!(slice[2], 0.0);
    }

    #[test]
    fn test_image_to_tensor_square_nchw() {
        let image = solid(100, 100, [255, 0, 0]);

        let tensor = preprocess(&image, &config(InputLayout::Nchw));
        assert_eq!(tensor.shape(), &[1, 3, 160, 160]);

        let slice = tensor.as_slice::<f32>().unwrap();
        // First value in each channel plane
        assert_eq!(slice[0], 1.0);
        assert_eq!(slice[160 * 160], 0.0);
        assert_eq!(slice[2 * 160 * 160], 0.0);
    }

    #[test]
    fn test_rectangle_is_stretched_not_letterboxed() {
        let image = solid(400, 100, [0, 255, 0]);

        let resized = resize_image(&image, 160, 160);
        assert_eq!(resized.dimensions(), (160, 160));

        // Letterboxing would leave black bands at the top and bottom.
        assert_eq!(resized.get_pixel(0, 0), &Rgb([0, 255, 0]));
        assert_eq!(resized.get_pixel(80, 159), &Rgb([0, 255, 0]));
    }

    #[test]
    fn test_image_to_tensor_normalization() {
        let image = solid(100, 100, [128, 128, 128]);

        let tensor = preprocess(&image, &config(InputLayout::Nhwc));
        let slice = tensor.as_slice::<f32>().unwrap();

        let expected = 128.0 / 255.0;
        assert!(slice.iter().all(|v| (v - expected).abs() < 0.0001));
    }

    #[test]
    fn test_alpha_channel_is_dropped() {
        let mut img = ImageBuffer::new(10, 10);
        for pixel in img.pixels_mut() {
            *pixel = Rgba([0, 0, 255, 10]);
        }
        let image = DynamicImage::ImageRgba8(img);

        let tensor = preprocess(&image, &config(InputLayout::Nhwc));
        assert_eq!(tensor.shape(), &[1, 160, 160, 3]);
        assert_eq!(tensor.as_slice::<f32>().unwrap()[2], 1.0);
    }

    #[test]
    fn test_preprocessing_is_deterministic() {
        let mut img = ImageBuffer::new(37, 91);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = Rgb([(x * 7) as u8, (y * 3) as u8, (x + y) as u8]);
        }
        let image = DynamicImage::ImageRgb8(img);

        let first = preprocess(&image, &config(InputLayout::Nhwc));
        let second = preprocess(&image, &config(InputLayout::Nhwc));
        assert_eq!(first, second);
    }
}
