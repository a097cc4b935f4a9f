use crate::herb_table::knowledge_table::KnowledgeTable;
use crate::symptom_matcher::interface::{MatchStrategy, SymptomMatcher};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Maps free-text symptoms to herbs through the knowledge table keywords.
#[derive(Clone)]
pub struct Recommender {
    matcher: Arc<dyn SymptomMatcher + Send + Sync>,
    fallback: Vec<String>,
}

impl Recommender {
    pub fn new(strategy: MatchStrategy, fallback: Vec<String>) -> Self {
        Self {
            matcher: strategy.build(),
            fallback,
        }
    }

    /// Every herb with at least one keyword found in `symptom_text`, or the
    /// fallback herbs when nothing matches. The input is lowercased but kept
    /// whole; tokenizing it is up to the matcher.
    pub fn recommend(&self, table: &KnowledgeTable, symptom_text: &str) -> BTreeSet<String> {
        let symptom_text = symptom_text.to_lowercase();

        let matched: BTreeSet<String> = table
            .records()
            .iter()
            .filter(|record| {
                record
                    .keywords()
                    .any(|keyword| self.matcher.matches(&keyword, &symptom_text))
            })
            .map(|record| record.herb.clone())
            .collect();

        if matched.is_empty() {
            self.fallback.iter().cloned().collect()
        } else {
            matched
        }
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(
            MatchStrategy::Substring,
            vec!["Tulsi".to_string(), "Turmeric".to_string()],
        )
    }
}
