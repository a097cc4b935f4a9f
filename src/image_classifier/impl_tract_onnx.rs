use crate::image_classifier::interface::ImageClassifier;
use crate::image_classifier::labels::ClassLabels;
use crate::image_classifier::models::model_config::ModelConfig;
use crate::image_classifier::tract::image::preprocess;
use crate::library::error::{HerbalError, HerbalResult};
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::sync::Arc;
use tract_onnx::prelude::*;

pub struct ImageClassifierTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    config: ModelConfig,
    labels: ClassLabels,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierTractOnnx {
    pub fn new(
        config: ModelConfig,
        labels: ClassLabels,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> HerbalResult<Self> {
        let model = tract_onnx::onnx()
            .model_for_path(&config.onnx_model_path)
            .map_err(|e| {
                HerbalError::ModelLoad(format!("{}: {}", config.onnx_model_path.display(), e))
            })?;

        Self::from_model(model, config, labels, logger)
    }

    /// Pins the input to `config.input_shape()`, optimizes the graph and checks
    /// its class count against `labels`.
    pub fn from_model(
        model: InferenceModel,
        config: ModelConfig,
        labels: ClassLabels,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> HerbalResult<Self> {
        let logger = logger.with_namespace("image_classifier");
        let path = config.onnx_model_path.display().to_string();
        let load_error = |e: TractError| HerbalError::ModelLoad(format!("{}: {}", path, e));

        let input_fact = InferenceFact::dt_shape(f32::datum_type(), config.input_shape());

        let model = model
            .with_input_fact(0, input_fact)
            .map_err(load_error)?
            .into_optimized()
            .map_err(load_error)?
            .into_runnable()
            .map_err(load_error)?;

        let output_fact = model.model().output_fact(0).map_err(load_error)?;
        match output_fact.shape.as_concrete() {
            Some(shape) => {
                let class_count = shape.last().copied().unwrap_or(0);
                labels.ensure_matches(class_count)?;
            }
            None => {
                let _ = logger.warn(&format!(
                    "output shape of {} is symbolic; label count is checked per prediction",
                    path
                ));
            }
        }

        let _ = logger.info(&format!(
            "Loaded model {} with {} labels and input shape {:?}",
            path,
            labels.len(),
            config.input_shape()
        ));

        Ok(Self {
            model,
            config,
            labels,
            logger,
        })
    }
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn labels(&self) -> &ClassLabels {
        &self.labels
    }

    fn predict(&self, image: &DynamicImage) -> HerbalResult<Vec<f32>> {
        let input = preprocess(image, &self.config);

        let outputs = self
            .model
            .run(tvec!(input.into_tvalue()))
            .map_err(|e| HerbalError::Inference(e.to_string()))?;

        let output = outputs
            .first()
            .ok_or_else(|| HerbalError::Inference("model produced no outputs".to_string()))?
            .to_array_view::<f32>()
            .map_err(|e| HerbalError::Inference(format!("output is not f32: {}", e)))?;

        let probabilities: Vec<f32> = output.iter().copied().collect();

        let _ = self.logger.info(&format!(
            "Classified {}x{} image over {} classes",
            image.width(),
            image.height(),
            probabilities.len()
        ));

        Ok(probabilities)
    }
}
