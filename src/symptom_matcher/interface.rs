use crate::library::error::HerbalError;
use crate::symptom_matcher::impl_substring::SymptomMatcherSubstring;
use crate::symptom_matcher::impl_whole_word::SymptomMatcherWholeWord;
use std::str::FromStr;
use std::sync::Arc;

pub trait SymptomMatcher: Send + Sync {
    /// Both arguments are already lowercased.
    fn matches(&self, keyword: &str, symptom_text: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchStrategy {
    /// Keyword anywhere inside the text, so "ear" hits "fear".
    #[default]
    Substring,
    /// Keyword equal to one of the text's words.
    WholeWord,
}

impl MatchStrategy {
    pub fn build(self) -> Arc<dyn SymptomMatcher + Send + Sync> {
        match self {
            MatchStrategy::Substring => Arc::new(SymptomMatcherSubstring),
            MatchStrategy::WholeWord => Arc::new(SymptomMatcherWholeWord),
        }
    }
}

impl FromStr for MatchStrategy {
    type Err = HerbalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().replace('-', "_").as_str() {
            "substring" => Ok(MatchStrategy::Substring),
            "whole_word" | "word" => Ok(MatchStrategy::WholeWord),
            other => Err(HerbalError::Config(format!(
                "invalid MATCH_STRATEGY: {other} (expected substring or whole_word)"
            ))),
        }
    }
}
