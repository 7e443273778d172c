//! Publisher classification.

use ms_core::SourceType;

use crate::config::SourceConfig;

#[derive(Debug, Clone)]
pub struct SourceClassifier {
    national: Vec<String>,
    local: Vec<String>,
}

impl SourceClassifier {
    pub fn new(config: &SourceConfig) -> Self {
        let lower = |words: &[String]| -> Vec<String> {
            words
                .iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect()
        };
        Self {
            national: lower(&config.national),
            local: lower(&config.local),
        }
    }

    /// Case-insensitive substring match. National is checked first, so a name
    /// carrying both a national brand and a local suffix word is national.
    pub fn classify(&self, source_name: &str) -> SourceType {
        let name = source_name.to_lowercase();
        if self.national.iter().any(|n| name.contains(n.as_str())) {
            SourceType::National
        } else if self.local.iter().any(|l| name.contains(l.as_str())) {
            SourceType::Local
        } else {
            SourceType::Other
        }
    }
}

impl Default for SourceClassifier {
    fn default() -> Self {
        Self::new(&SourceConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_sources() {
        let classifier = SourceClassifier::default();
        assert_eq!(classifier.classify("ESPN"), SourceType::National);
        assert_eq!(classifier.classify("Bleacher Report"), SourceType::National);
        assert_eq!(classifier.classify("Chicago Tribune"), SourceType::Local);
        assert_eq!(classifier.classify("The Kansas City Star-Herald"), SourceType::Local);
        assert_eq!(classifier.classify("Yahoo Entertainment"), SourceType::Other);
        assert_eq!(classifier.classify(""), SourceType::Other);
    }

    #[test]
    fn test_national_takes_precedence() {
        let classifier = SourceClassifier::default();
        assert_eq!(classifier.classify("ESPN Herald Tribune"), SourceType::National);
        assert_eq!(classifier.classify("NFL-News Wire"), SourceType::National);
    }

    #[test]
    fn test_idempotent() {
        let classifier = SourceClassifier::default();
        for name in ["ESPN", "Denver Post", "Reddit", "USA TODAY Sports"] {
            assert_eq!(classifier.classify(name), classifier.classify(name));
        }
    }

    #[test]
    fn test_custom_vocabulary() {
        let classifier = SourceClassifier::new(&SourceConfig {
            national: vec!["Globe".to_string()],
            local: vec!["Courier".to_string(), "  ".to_string()],
        });
        assert_eq!(classifier.classify("globe and courier"), SourceType::National);
        assert_eq!(classifier.classify("The Courier"), SourceType::Local);
        assert_eq!(classifier.classify("ESPN"), SourceType::Other);
    }
}
