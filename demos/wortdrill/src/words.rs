use inkdrill::{DrillConfig, WordList, WordSource};

const WORDS: &str = include_str!("words.txt");
const CONFIG: &str = include_str!("config.json");

/// German first-grade vocabulary, grouped by initial letter.
pub struct GermanWords;

impl GermanWords {
    pub fn new() -> Self {
        Self
    }
}

impl WordSource for GermanWords {
    fn config(&self) -> DrillConfig {
        DrillConfig::from_json(CONFIG).unwrap_or_else(|e| {
            log::warn!("wortdrill: bundled config invalid ({}), using defaults", e);
            DrillConfig::default()
        })
    }

    fn words(&self) -> WordList {
        WordList::parse(WORDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_words_parse_without_headers() {
        let words = GermanWords::new().words();
        assert!(words.len() > 30);
        assert!(words.iter().all(|w| w.chars().count() > 1));
        assert!(words.iter().any(|w| w == "Straße"));
    }

    #[test]
    fn bundled_config_is_valid() {
        let config = DrillConfig::from_json(CONFIG).unwrap();
        assert_eq!(config.speech_lang, "de-DE");
        assert!(config.scoring.validate().is_ok());
    }
}
