use crate::config::{ClassifierKind, Config};
use crate::herb_table::knowledge_table::KnowledgeTable;
use crate::image_classifier::impl_fake::ImageClassifierFake;
use crate::image_classifier::impl_tract_onnx::ImageClassifierTractOnnx;
use crate::image_classifier::interface::ImageClassifier;
use crate::image_classifier::labels::ClassLabels;
use crate::library::error::HerbalResult;
use crate::library::logger::interface::Logger;
use crate::symptom_matcher::recommender::Recommender;
use std::sync::Arc;

/// Everything a request needs, loaded once at startup and read-only after.
#[derive(Clone)]
pub struct HerbalContext {
    pub image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    pub knowledge_table: Arc<KnowledgeTable>,
    pub recommender: Recommender,
    pub logger: Arc<dyn Logger + Send + Sync>,
}

impl HerbalContext {
    pub fn new(
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
        knowledge_table: KnowledgeTable,
        recommender: Recommender,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            image_classifier,
            knowledge_table: Arc::new(knowledge_table),
            recommender,
            logger,
        }
    }

    /// Any missing or unreadable artifact is fatal.
    pub fn init(config: &Config, logger: Arc<dyn Logger + Send + Sync>) -> HerbalResult<Self> {
        let labels = ClassLabels::load_or_builtin(config.model.labels_path.as_deref())?;

        let image_classifier: Arc<dyn ImageClassifier + Send + Sync> = match config.classifier {
            ClassifierKind::Onnx => Arc::new(ImageClassifierTractOnnx::new(
                config.model.clone(),
                labels,
                logger.clone(),
            )?),
            ClassifierKind::Fake => Arc::new(ImageClassifierFake::new(
                labels,
                &config.model,
                logger.clone(),
            )),
        };

        let knowledge_table = KnowledgeTable::load(&config.herb_table_path)?;
        let _ = logger.info(&format!(
            "Loaded {} herb records from {}",
            knowledge_table.len(),
            config.herb_table_path.display()
        ));
        if knowledge_table.is_empty() {
            let _ = logger.warn("Knowledge table is empty; every recommendation will fall back");
        }
        if knowledge_table.skipped_rows() > 0 {
            let _ = logger.warn(&format!(
                "Skipped {} rows without a herb name",
                knowledge_table.skipped_rows()
            ));
        }

        let unknown: Vec<&str> = image_classifier
            .labels()
            .iter()
            .filter(|label| knowledge_table.get(label).is_none())
            .collect();
        if !unknown.is_empty() {
            let _ = logger.warn(&format!(
                "No benefit data for: {}",
                unknown.join(", ")
            ));
        }

        let recommender = Recommender::new(config.match_strategy, config.fallback_herbs.clone());

        Ok(Self::new(
            image_classifier,
            knowledge_table,
            recommender,
            logger.with_namespace("herbal_guide"),
        ))
    }
}
