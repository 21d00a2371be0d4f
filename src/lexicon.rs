use std::collections::HashSet;

use tracing::{debug, warn};

use crate::category::{Category, CategoryMap};
use crate::error::{Result, StemmerError};

/// The contents of one reference list.
///
/// Tokens keep their first-seen order, because affix and pattern lists are
/// scanned in list order and the first match wins.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<String>,
    index: HashSet<String>,
    chars: HashSet<char>,
}

impl WordList {
    /// Parses line-oriented text. Every whitespace-separated token of every
    /// line contributes to the list.
    pub fn parse(text: &str) -> Self {
        let mut list = WordList::default();
        for token in text.lines().flat_map(str::split_whitespace) {
            list.insert(token);
        }
        list
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = WordList::default();
        for w in words {
            for token in w.as_ref().split_whitespace() {
                list.insert(token);
            }
        }
        list
    }

    fn insert(&mut self, token: &str) {
        // strip a stray byte-order mark from the first line of a file
        let token = token.trim_start_matches('\u{feff}');
        if token.is_empty() || !self.index.insert(token.to_string()) {
            return;
        }
        self.chars.extend(token.chars());
        self.words.push(token.to_string());
    }

    pub fn contains(&self, token: &str) -> bool {
        self.index.contains(token)
    }

    pub fn contains_char(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// The full set of reference lists, immutable once built.
#[derive(Debug, Clone)]
pub struct Lexicon {
    lists: CategoryMap<WordList>,
}

impl Lexicon {
    /// Builds a lexicon by asking `source` for the raw text of every
    /// category. The first failing category aborts the build.
    pub fn from_source<F>(mut source: F) -> Result<Self>
    where
        F: FnMut(Category) -> Result<String>,
    {
        let lists = CategoryMap::try_from_fn(|category| {
            let text = source(category)?;
            let list = WordList::parse(&text);
            Self::report(category, &list);
            Ok::<_, StemmerError>(list)
        })?;
        Ok(Self { lists })
    }

    /// Builds a lexicon from already-tokenized lists.
    pub fn from_lists<F>(mut lists: F) -> Result<Self>
    where
        F: FnMut(Category) -> Result<WordList>,
    {
        let lists = CategoryMap::try_from_fn(|category| {
            let list = lists(category)?;
            Self::report(category, &list);
            Ok::<_, StemmerError>(list)
        })?;
        Ok(Self { lists })
    }

    fn report(category: Category, list: &WordList) {
        if list.is_empty() {
            warn!("reference list '{}' is empty", category);
        } else {
            debug!("loaded {} entries for '{}'", list.len(), category);
        }
    }

    pub fn list(&self, category: Category) -> &WordList {
        self.lists.get(category)
    }

    pub fn contains(&self, category: Category, token: &str) -> bool {
        self.list(category).contains(token)
    }

    pub fn contains_char(&self, category: Category, c: char) -> bool {
        self.list(category).contains_char(c)
    }

    pub fn words(&self, category: Category) -> &[String] {
        self.list(category).words()
    }

    pub fn len(&self, category: Category) -> usize {
        self.list(category).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_lines_and_tokens() {
        let list = WordList::parse("ال وال\nبال\n\n  كال  \n");
        assert_eq!(list.words(), &["ال", "وال", "بال", "كال"]);
        assert!(list.contains("وال"));
        assert!(!list.contains("ال وال"));
    }

    #[test]
    fn test_parse_keeps_first_position_of_duplicates() {
        let list = WordList::parse("ها\nات\nها\n");
        assert_eq!(list.words(), &["ها", "ات"]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_parse_strips_byte_order_mark() {
        let list = WordList::parse("\u{feff}كتب\nدرس");
        assert!(list.contains("كتب"));
    }

    #[test]
    fn test_char_membership() {
        let list = WordList::parse("، ؛\n؟");
        assert!(list.contains_char('؛'));
        assert!(list.contains_char('؟'));
        assert!(!list.contains_char('ك'));
    }

    #[test]
    fn test_from_source_fails_on_first_missing_category() {
        let result = Lexicon::from_source(|category| match category {
            Category::TriRoots => Err(StemmerError::CategoryNotProvided(category)),
            _ => Ok(String::new()),
        });
        assert!(matches!(
            result,
            Err(StemmerError::CategoryNotProvided(Category::TriRoots))
        ));
    }

    #[test]
    fn test_empty_category_is_accepted() {
        let lexicon = Lexicon::from_source(|_| Ok(String::new())).unwrap();
        assert_eq!(lexicon.len(Category::Stopwords), 0);
        assert!(!lexicon.contains(Category::Stopwords, "في"));
    }
}
