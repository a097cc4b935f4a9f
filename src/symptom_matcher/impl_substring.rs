use crate::symptom_matcher::interface::SymptomMatcher;

#[derive(Debug, Clone, Copy, Default)]
pub struct SymptomMatcherSubstring;

impl SymptomMatcher for SymptomMatcherSubstring {
    fn matches(&self, keyword: &str, symptom_text: &str) -> bool {
        symptom_text.contains(keyword)
    }
}
