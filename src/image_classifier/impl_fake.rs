use crate::image_classifier::interface::ImageClassifier;
use crate::image_classifier::labels::ClassLabels;
use crate::image_classifier::models::model_config::ModelConfig;
use crate::image_classifier::tract::image::resize_image;
use crate::library::error::{HerbalError, HerbalResult};
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

/// Stand-in for the real model. Without a script, the distribution is drawn
/// from an RNG seeded by the resized pixels, so the same image always gets
/// the same answer.
pub struct ImageClassifierFake {
    labels: ClassLabels,
    scripted: Option<Vec<f32>>,
    input_size: (u32, u32),
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierFake {
    /// Images are resized to `config.input_size` before hashing, like the
    /// real model's preprocessing.
    pub fn new(
        labels: ClassLabels,
        config: &ModelConfig,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            labels,
            scripted: None,
            input_size: config.input_size,
            logger: logger.with_namespace("image_classifier").with_namespace("fake"),
        }
    }

    /// Always answers with `probabilities`, whatever the image.
    #[allow(dead_code)]
    pub fn with_probabilities(mut self, probabilities: Vec<f32>) -> Self {
        self.scripted = Some(probabilities);
        self
    }

    fn seed(&self, image: &DynamicImage) -> u64 {
        let (width, height) = self.input_size;
        resize_image(image, width, height)
            .as_raw()
            .iter()
            .fold(0xcbf2_9ce4_8422_2325u64, |hash, &byte| {
                (hash ^ byte as u64).wrapping_mul(0x0000_0100_0000_01b3)
            })
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn labels(&self) -> &ClassLabels {
        &self.labels
    }

    fn predict(&self, image: &DynamicImage) -> HerbalResult<Vec<f32>> {
        if let Some(probabilities) = &self.scripted {
            return Ok(probabilities.clone());
        }

        let _ = self.logger.info("Classifying image with fake classifier...");

        let mut rng = StdRng::seed_from_u64(self.seed(image));
        let score_dist =
            Uniform::new(0.0f32, 1.0).map_err(|e| HerbalError::Inference(e.to_string()))?;

        let scores: Vec<f32> = (0..self.labels.len())
            .map(|_| score_dist.sample(&mut rng))
            .collect();
        let total: f32 = scores.iter().sum();

        Ok(scores.iter().map(|score| score / total).collect())
    }
}
