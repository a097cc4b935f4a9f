use crate::image_classifier::impl_fake::ImageClassifierFake;
use crate::image_classifier::interface::ImageClassifier;
use crate::image_classifier::labels::ClassLabels;
use crate::image_classifier::models::model_config::ModelConfig;
use crate::library::logger::impl_console::LoggerConsole;
use crate::library::logger::interface::Logger;
use image::{DynamicImage, ImageBuffer, Rgb};
use std::sync::Arc;

pub struct Fixture {
    pub labels: ClassLabels,
    pub model_config: ModelConfig,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
}

impl Fixture {
    pub fn new() -> Self {
        let labels = ClassLabels::parse(include_str!("../../../data/labels.txt")).unwrap();
        let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(
            chrono::FixedOffset::east_opt(0).unwrap(),
        ));
        let model_config = ModelConfig::default();
        let image_classifier = Arc::new(ImageClassifierFake::new(
            labels.clone(),
            &model_config,
            logger.clone(),
        ));

        Self {
            labels,
            model_config,
            logger,
            image_classifier,
        }
    }

    pub fn leaf_image(&self, width: u32, height: u32, seed: u8) -> DynamicImage {
        let mut img = ImageBuffer::new(width, height);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            let g = 120u8.wrapping_add(seed).wrapping_add((x % 50) as u8);
            *pixel = Rgb([(y % 40) as u8, g, seed]);
        }
        DynamicImage::ImageRgb8(img)
    }
}
