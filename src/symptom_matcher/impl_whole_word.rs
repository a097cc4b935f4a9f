use crate::symptom_matcher::interface::SymptomMatcher;

#[derive(Debug, Clone, Copy, Default)]
pub struct SymptomMatcherWholeWord;

impl SymptomMatcher for SymptomMatcherWholeWord {
    fn matches(&self, keyword: &str, symptom_text: &str) -> bool {
        let keyword = keyword.trim_matches(|c: char| !c.is_alphanumeric());
        if keyword.is_empty() {
            return false;
        }
        symptom_text
            .split(|c: char| !c.is_alphanumeric())
            .any(|word| word == keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_whole_words_match() {
        let matcher = SymptomMatcherWholeWord;
        assert!(!matcher.matches("ear", "feartest"));
        assert!(!matcher.matches("ear", "early"));
        assert!(matcher.matches("ear", "my ear hurts"));
        assert!(matcher.matches("cough", "fever, cough."));
    }

    #[test]
    fn test_keyword_punctuation_is_ignored() {
        let matcher = SymptomMatcherWholeWord;
        assert!(matcher.matches("cough,", "dry cough"));
        assert!(!matcher.matches("--", "dry cough"));
    }
}
