use crate::library::error::{HerbalError, HerbalResult};
use std::path::Path;

/// Plant names in the order of the model's output layer.
const BUILTIN_LABELS: [&str; 20] = [
    "Aloe Vera",
    "Amla",
    "Basil",
    "Corriander",
    "Curry Leaf",
    "Fenugreek",
    "Guava",
    "Hibiscus",
    "Jasmine",
    "Lemon",
    "Mint",
    "Neem",
    "Peppermint",
    "Rosemary",
    "Sandalwood",
    "Spinach",
    "Stevia",
    "Tulsi",
    "Turmeric",
    "Valerian",
];

/// Ordered class names. Index `i` names output `i` of the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassLabels {
    labels: Vec<String>,
}

impl ClassLabels {
    pub fn new(labels: Vec<String>) -> HerbalResult<Self> {
        if labels.is_empty() {
            return Err(HerbalError::LabelMismatch(
                "label list is empty".to_string(),
            ));
        }
        Ok(Self { labels })
    }

    pub fn builtin() -> Self {
        Self {
            labels: BUILTIN_LABELS.iter().map(|l| l.to_string()).collect(),
        }
    }

    /// One label per line; surrounding whitespace and blank lines are ignored.
    pub fn parse(contents: &str) -> HerbalResult<Self> {
        Self::new(
            contents
                .lines()
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty())
                .collect(),
        )
    }

    pub fn load(path: &Path) -> HerbalResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            HerbalError::LabelMismatch(format!(
                "failed to read labels file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::parse(&contents)
    }

    /// Use the labels file bundled with the model when one is configured.
    pub fn load_or_builtin(path: Option<&Path>) -> HerbalResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Fails unless the model produces exactly one score per label.
    pub fn ensure_matches(&self, class_count: usize) -> HerbalResult<()> {
        if class_count != self.len() {
            return Err(HerbalError::LabelMismatch(format!(
                "model produces {} classes but {} labels are configured",
                class_count,
                self.len()
            )));
        }
        Ok(())
    }
}
