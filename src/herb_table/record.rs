use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HerbRecord {
    pub herb: String,
    pub benefit: String,
    /// Space-separated keyword list.
    pub symptoms: String,
}

impl HerbRecord {
    #[allow(dead_code)]
    pub fn new(herb: &str, benefit: &str, symptoms: &str) -> Self {
        Self {
            herb: herb.to_string(),
            benefit: benefit.to_string(),
            symptoms: symptoms.to_string(),
        }
    }

    /// Lowercased keyword tokens, split on whitespace.
    pub fn keywords(&self) -> impl Iterator<Item = String> + '_ {
        self.symptoms
            .split_whitespace()
            .map(|keyword| keyword.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_are_lowercased_and_split_on_any_whitespace() {
        let record = HerbRecord::new("Tulsi", "", "Cough  COLD\tfever\n");
        assert_eq!(
            record.keywords().collect::<Vec<_>>(),
            vec!["cough", "cold", "fever"]
        );
    }

    #[test]
    fn test_blank_symptoms_have_no_keywords() {
        let record = HerbRecord::new("Tulsi", "", "   ");
        assert_eq!(record.keywords().count(), 0);
    }
}
