use crate::herbal_guide::context::HerbalContext;
use crate::herbal_guide::prediction_result::PredictionResult;
use crate::library::error::{HerbalError, HerbalResult};
use image::DynamicImage;
use std::collections::BTreeSet;

impl HerbalContext {
    /// Classify the leaf and recommend herbs for the symptoms. The two are
    /// independent: the recommendation ignores the predicted plant.
    pub fn handle(&self, image: &DynamicImage, symptom_text: &str) -> HerbalResult<PredictionResult> {
        let classification = self.image_classifier.classify(image)?;

        let benefit = self
            .knowledge_table
            .benefit_for(&classification.label)
            .to_string();

        let recommended_herbs = self.recommend(symptom_text);

        let _ = self.logger.info(&format!(
            "Predicted {} (#{}, {:.2}%), recommended {}",
            classification.label,
            classification.label_index,
            classification.confidence,
            recommended_herbs.len()
        ));

        Ok(PredictionResult {
            plant: classification.label,
            confidence_percent: classification.confidence,
            benefit,
            recommended_herbs,
        })
    }

    pub fn recommend(&self, symptom_text: &str) -> BTreeSet<String> {
        self.recommender.recommend(&self.knowledge_table, symptom_text)
    }
}

/// Decode an uploaded file, sniffing the format from its bytes.
pub fn decode_image(bytes: &[u8]) -> HerbalResult<DynamicImage> {
    image::load_from_memory(bytes).map_err(|e| HerbalError::InvalidImage(e.to_string()))
}
