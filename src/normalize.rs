use crate::category::Category;
use crate::lexicon::Lexicon;

/// Cleans tokens of running text before they reach the stemmer, using the
/// punctuation, diacritics and strange-word lists.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Normalizer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn normalize(&self, token: &str) -> String {
        token
            .chars()
            .filter(|&c| {
                !self.lexicon.contains_char(Category::Punctuation, c)
                    && !self.lexicon.contains_char(Category::Diacritics, c)
            })
            .collect()
    }

    pub fn is_strange(&self, token: &str) -> bool {
        self.lexicon.contains(Category::Strange, token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fixture_lexicon;

    #[test]
    fn test_strips_diacritics() {
        let lexicon = fixture_lexicon();
        let normalizer = Normalizer::new(&lexicon);
        assert_eq!(normalizer.normalize("كَتَبَ"), "كتب");
        assert_eq!(normalizer.normalize("مدّ"), "مد");
    }

    #[test]
    fn test_strips_punctuation() {
        let lexicon = fixture_lexicon();
        let normalizer = Normalizer::new(&lexicon);
        assert_eq!(normalizer.normalize("درس،"), "درس");
        assert_eq!(normalizer.normalize("؟!"), "");
    }

    #[test]
    fn test_strange_words() {
        let lexicon = fixture_lexicon();
        let normalizer = Normalizer::new(&lexicon);
        assert!(normalizer.is_strange("ممممم"));
        assert!(!normalizer.is_strange("كتب"));
    }
}
