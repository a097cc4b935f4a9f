use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub plant: String,
    /// In [0, 100], two decimals.
    pub confidence_percent: f64,
    pub benefit: String,
    pub recommended_herbs: BTreeSet<String>,
}

impl PredictionResult {
    pub fn confidence_display(&self) -> String {
        format!("{:.2} %", self.confidence_percent)
    }

    pub fn recommended_display(&self) -> String {
        join_herbs(&self.recommended_herbs)
    }
}

pub fn join_herbs(herbs: &BTreeSet<String>) -> String {
    herbs.iter().cloned().collect::<Vec<_>>().join(", ")
}
