use crate::image_classifier::labels::ClassLabels;
use crate::library::error::{HerbalError, HerbalResult};
use image::DynamicImage;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label_index: usize,
    pub label: String,
    /// Percentage in [0, 100], rounded to two decimals.
    pub confidence: f64,
}

pub trait ImageClassifier: Send + Sync {
    fn labels(&self) -> &ClassLabels;

    /// Probability distribution over [`ImageClassifier::labels`].
    fn predict(&self, image: &DynamicImage) -> HerbalResult<Vec<f32>>;

    fn classify(&self, image: &DynamicImage) -> HerbalResult<Classification> {
        let probabilities = self.predict(image)?;
        top_classification(self.labels(), &probabilities)
    }
}

/// Picks the most probable class. Ties resolve to the lowest index.
pub fn top_classification(
    labels: &ClassLabels,
    probabilities: &[f32],
) -> HerbalResult<Classification> {
    labels.ensure_matches(probabilities.len())?;

    let mut best: Option<(usize, f32)> = None;
    for (index, &probability) in probabilities.iter().enumerate() {
        if !probability.is_finite() {
            return Err(HerbalError::Inference(format!(
                "non-finite probability {} at index {}",
                probability, index
            )));
        }
        match best {
            Some((_, best_probability)) if probability <= best_probability => {}
            _ => best = Some((index, probability)),
        }
    }

    let (label_index, probability) =
        best.ok_or_else(|| HerbalError::Inference("empty probability vector".to_string()))?;

    let label = labels.get(label_index).ok_or_else(|| {
        HerbalError::LabelMismatch(format!(
            "predicted index {} is outside {} labels",
            label_index,
            labels.len()
        ))
    })?;

    Ok(Classification {
        label_index,
        label: label.to_string(),
        confidence: confidence_percent(probability),
    })
}

pub fn confidence_percent(probability: f32) -> f64 {
    let percent = (probability as f64).clamp(0.0, 1.0) * 100.0;
    (percent * 100.0).round() / 100.0
}
